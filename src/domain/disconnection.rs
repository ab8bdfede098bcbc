// Disconnection events - all-zero "silence" readings
use super::telemetry::TelemetryRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct DisconnectionEvent {
    pub mac_address: String,
    pub ap_name: String,
    pub date: String,
    pub time: String,
}

impl DisconnectionEvent {
    fn from_record(record: &TelemetryRecord) -> Self {
        Self {
            mac_address: record.mac_address.clone(),
            ap_name: record.ap_name.clone(),
            date: record.date.clone(),
            time: record.time.clone(),
        }
    }
}

/// Records satisfying [`TelemetryRecord::is_disconnection`], in input order.
pub fn detect_disconnections(records: &[TelemetryRecord]) -> Vec<DisconnectionEvent> {
    records
        .iter()
        .filter(|r| r.is_disconnection())
        .map(DisconnectionEvent::from_record)
        .collect()
}
