// Per-device signal time series
use super::telemetry::TelemetryRecord;
use chrono::NaiveDateTime;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct SignalPoint {
    pub timestamp: Option<NaiveDateTime>,
    pub date: String,
    pub time: String,
    pub snr: f64,
    pub rssi_dbm: f64,
    pub low_snr: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeviceSeries {
    pub mac_address: String,
    pub points: Vec<SignalPoint>,
}

/// Group readings per device (first appearance order), points ordered by timestamp.
///
/// Points whose date/time don't parse go last, in input order.
pub fn snr_series(records: &[TelemetryRecord]) -> Vec<DeviceSeries> {
    let mut series: Vec<DeviceSeries> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let slot = *index.entry(record.mac_address.as_str()).or_insert_with(|| {
            series.push(DeviceSeries {
                mac_address: record.mac_address.clone(),
                points: Vec::new(),
            });
            series.len() - 1
        });
        series[slot].points.push(SignalPoint {
            timestamp: record.timestamp(),
            date: record.date.clone(),
            time: record.time.clone(),
            snr: record.snr,
            rssi_dbm: record.rssi_dbm(),
            low_snr: record.is_low_snr(),
        });
    }

    for s in &mut series {
        s.points.sort_by_key(|p| (p.timestamp.is_none(), p.timestamp));
    }
    series
}
