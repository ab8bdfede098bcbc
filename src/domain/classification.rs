// Severity classification of individual readings
use super::telemetry::TelemetryRecord;

/// Three-tier severity shared by every signal dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Good,
    Moderate,
    Poor,
}

impl Tier {
    /// Tier for a reading where higher is better.
    fn from_bounds(value: f64, good_at: f64, moderate_at: f64) -> Self {
        if value >= good_at {
            Tier::Good
        } else if value >= moderate_at {
            Tier::Moderate
        } else {
            Tier::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Good => "good",
            Tier::Moderate => "moderate",
            Tier::Poor => "poor",
        }
    }
}

pub fn classify_snr(snr: f64) -> Tier {
    Tier::from_bounds(snr, 25.0, 15.0)
}

/// Takes true dBm, not the stored offset.
pub fn classify_signal_dbm(dbm: f64) -> Tier {
    Tier::from_bounds(dbm, -65.0, -70.0)
}

pub fn classify_ht_rate(rate: f64) -> Tier {
    Tier::from_bounds(rate, 200.0, 150.0)
}

/// Health of a session from its poor-connection percentage (lower is better).
pub fn classify_poor_percentage(percentage: f64) -> Tier {
    if percentage <= 5.0 {
        Tier::Good
    } else if percentage <= 20.0 {
        Tier::Moderate
    } else {
        Tier::Poor
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedRecord {
    pub record: TelemetryRecord,
    pub snr: Tier,
    pub signal: Tier,
    pub ht_rate: Tier,
    pub disconnected: bool,
}

impl ClassifiedRecord {
    pub fn new(record: TelemetryRecord) -> Self {
        Self {
            snr: classify_snr(record.snr),
            signal: classify_signal_dbm(record.rssi_dbm()),
            ht_rate: classify_ht_rate(record.median_ht_rate),
            disconnected: record.is_disconnection(),
            record,
        }
    }
}

pub fn classify_records(records: &[TelemetryRecord]) -> Vec<ClassifiedRecord> {
    records.iter().cloned().map(ClassifiedRecord::new).collect()
}
