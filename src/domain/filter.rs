// Record filtering by device and date label
use super::telemetry::TelemetryRecord;

/// Keyword meaning "no constraint" in external filter parameters.
pub const ALL: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// `"all"` means no constraint; anything else, including `""`, is an exact match.
    pub fn parse(value: &str) -> Self {
        if value == ALL {
            Selection::All
        } else {
            Selection::Only(value.to_string())
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(expected) => expected == value,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Selection::All => ALL,
            Selection::Only(value) => value,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub device: Selection,
    pub date: Selection,
}

impl RecordFilter {
    pub fn new(device: Selection, date: Selection) -> Self {
        Self { device, date }
    }

    pub fn matches(&self, record: &TelemetryRecord) -> bool {
        self.device.matches(&record.mac_address) && self.date.matches(&record.date)
    }

    /// Records passing both constraints, in input order.
    pub fn apply(&self, records: &[TelemetryRecord]) -> Vec<TelemetryRecord> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}
