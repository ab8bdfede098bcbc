// Session aggregation - per device, per calendar day
use super::classification::{Tier, classify_poor_percentage};
use super::metrics::{finite_or_zero, mean};
use super::telemetry::TelemetryRecord;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionSample {
    pub time: String,
    pub snr: f64,
    pub is_poor: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionMetrics {
    pub average_snr: f64,
    pub ap_switches: usize,
    pub poor_connection_percentage: f64,
}

impl SessionMetrics {
    pub fn health(&self) -> Tier {
        classify_poor_percentage(self.poor_connection_percentage)
    }
}

/// Readings of one device on one day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DaySession {
    pub mac_address: String,
    pub date: String,
    pub record_count: usize,
    /// AP name -> samples in ascending `time` order.
    pub ap_connections: BTreeMap<String, Vec<ConnectionSample>>,
    pub metrics: SessionMetrics,
}

impl DaySession {
    /// Aggregate records already narrowed to a single device and day.
    ///
    /// An empty input gives zeroed metrics and no AP connections.
    pub fn from_records(mac_address: &str, date: &str, records: &[TelemetryRecord]) -> Self {
        let sorted = sorted_by_time(records);

        let mut ap_connections: BTreeMap<String, Vec<ConnectionSample>> = BTreeMap::new();
        for record in &sorted {
            ap_connections
                .entry(record.ap_name.clone())
                .or_default()
                .push(ConnectionSample {
                    time: record.time.clone(),
                    snr: record.snr,
                    is_poor: record.is_low_snr(),
                });
        }

        Self {
            mac_address: mac_address.to_string(),
            date: date.to_string(),
            record_count: sorted.len(),
            ap_connections,
            metrics: SessionMetrics {
                average_snr: mean(sorted.iter().map(|r| r.snr)),
                ap_switches: count_ap_switches(&sorted),
                poor_connection_percentage: poor_connection_percentage(&sorted),
            },
        }
    }
}

/// Stable sort by the `time` label (string order).
pub fn sorted_by_time(records: &[TelemetryRecord]) -> Vec<&TelemetryRecord> {
    let mut sorted: Vec<&TelemetryRecord> = records.iter().collect();
    sorted.sort_by(|a, b| a.time.cmp(&b.time));
    sorted
}

/// Number of consecutive pairs whose access point differs.
pub fn count_ap_switches(sorted: &[&TelemetryRecord]) -> usize {
    sorted
        .windows(2)
        .filter(|pair| pair[0].ap_name != pair[1].ap_name)
        .count()
}

pub fn poor_connection_percentage(records: &[&TelemetryRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let poor = records.iter().filter(|r| r.is_poor_connection()).count();
    finite_or_zero(poor as f64 / records.len() as f64 * 100.0)
}

/// One `DaySession` per date for a device's records.
///
/// Days are never merged and come out in order of first appearance.
pub fn day_overview(mac_address: &str, records: &[TelemetryRecord]) -> Vec<DaySession> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<TelemetryRecord>> = HashMap::new();

    for record in records.iter().filter(|r| r.mac_address == mac_address) {
        let group = groups.entry(record.date.as_str()).or_insert_with(|| {
            order.push(record.date.as_str());
            Vec::new()
        });
        group.push(record.clone());
    }

    order
        .into_iter()
        .map(|date| {
            let day = groups.remove(date).unwrap_or_default();
            DaySession::from_records(mac_address, date, &day)
        })
        .collect()
}
