// JSON views - map engine output to the shapes chart/table consumers read
use crate::application::dataset_service::LoadSummary;
use crate::domain::calendar::DateOption;
use crate::domain::classification::{ClassifiedRecord, classify_snr};
use crate::domain::disconnection::DisconnectionEvent;
use crate::domain::metrics::SummaryStats;
use crate::domain::series::DeviceSeries;
use crate::domain::session::DaySession;
use crate::presentation::palette::color_for;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::BTreeMap;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

fn format_timestamp(ts: Option<NaiveDateTime>) -> Option<String> {
    ts.map(|t| t.format(TIMESTAMP_FORMAT).to_string())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadSummaryView {
    pub record_count: usize,
    pub device_count: usize,
    pub date_count: usize,
    pub missing_columns: Vec<&'static str>,
}

impl From<LoadSummary> for LoadSummaryView {
    fn from(summary: LoadSummary) -> Self {
        Self {
            record_count: summary.record_count,
            device_count: summary.device_count,
            date_count: summary.date_count,
            missing_columns: summary.missing_columns,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceOptionView {
    pub mac_address: String,
    pub color: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateOptionView {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectorsView {
    pub devices: Vec<DeviceOptionView>,
    pub dates: Vec<DateOptionView>,
}

impl SelectorsView {
    pub fn new(devices: Vec<String>, dates: Vec<DateOption>) -> Self {
        Self {
            devices: devices
                .into_iter()
                .map(|mac| DeviceOptionView {
                    color: color_for(&mac),
                    mac_address: mac,
                })
                .collect(),
            dates: dates
                .into_iter()
                .map(|d| DateOptionView {
                    value: d.value,
                    label: d.label,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsView {
    pub record_count: usize,
    pub average_snr: f64,
    pub average_rssi_dbm: f64,
    pub low_snr_count: usize,
    pub low_rssi_count: usize,
    pub disconnection_count: usize,
}

impl From<SummaryStats> for StatsView {
    fn from(stats: SummaryStats) -> Self {
        Self {
            record_count: stats.record_count,
            average_snr: stats.average_snr,
            average_rssi_dbm: stats.average_rssi_dbm,
            low_snr_count: stats.low_snr_count,
            low_rssi_count: stats.low_rssi_count,
            disconnection_count: stats.disconnection_count,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordView {
    pub date: String,
    pub time: String,
    pub ap_name: String,
    pub ap_ip: String,
    pub mac_address: String,
    pub device_color: &'static str,
    pub snr: f64,
    pub rssi_dbm: f64,
    pub median_ht_rate: f64,
    pub snr_tier: &'static str,
    pub signal_tier: &'static str,
    pub ht_rate_tier: &'static str,
    pub disconnected: bool,
}

impl From<ClassifiedRecord> for RecordView {
    fn from(classified: ClassifiedRecord) -> Self {
        let rssi_dbm = classified.record.rssi_dbm();
        let r = classified.record;
        Self {
            device_color: color_for(&r.mac_address),
            date: r.date,
            time: r.time,
            ap_name: r.ap_name,
            ap_ip: r.ap_ip,
            mac_address: r.mac_address,
            snr: r.snr,
            rssi_dbm,
            median_ht_rate: r.median_ht_rate,
            snr_tier: classified.snr.as_str(),
            signal_tier: classified.signal.as_str(),
            ht_rate_tier: classified.ht_rate.as_str(),
            disconnected: classified.disconnected,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisconnectionEventView {
    pub mac_address: String,
    pub ap_name: String,
    /// Row of `ap_name` in `DisconnectionsView::access_points`.
    pub lane: usize,
    pub date: String,
    pub time: String,
    pub color: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisconnectionsView {
    pub access_points: Vec<String>,
    pub events: Vec<DisconnectionEventView>,
}

impl DisconnectionsView {
    /// `access_points` must be sorted; lanes are resolved by binary search.
    pub fn new(access_points: Vec<String>, events: Vec<DisconnectionEvent>) -> Self {
        let events = events
            .into_iter()
            .map(|e| DisconnectionEventView {
                lane: access_points
                    .binary_search(&e.ap_name)
                    .unwrap_or_else(|insert_at| insert_at),
                color: color_for(&e.mac_address),
                mac_address: e.mac_address,
                ap_name: e.ap_name,
                date: e.date,
                time: e.time,
            })
            .collect();

        Self {
            access_points,
            events,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalPointView {
    pub timestamp: Option<String>,
    pub date: String,
    pub time: String,
    pub snr: f64,
    pub rssi_dbm: f64,
    pub low_snr: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSeriesView {
    pub mac_address: String,
    pub color: &'static str,
    pub points: Vec<SignalPointView>,
}

impl From<DeviceSeries> for DeviceSeriesView {
    fn from(series: DeviceSeries) -> Self {
        Self {
            color: color_for(&series.mac_address),
            mac_address: series.mac_address,
            points: series
                .points
                .into_iter()
                .map(|p| SignalPointView {
                    timestamp: format_timestamp(p.timestamp),
                    date: p.date,
                    time: p.time,
                    snr: p.snr,
                    rssi_dbm: p.rssi_dbm,
                    low_snr: p.low_snr,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionView {
    pub time: String,
    pub snr: f64,
    pub is_poor: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionMetricsView {
    pub average_snr: f64,
    pub ap_switches: usize,
    pub poor_connection_percentage: f64,
    /// Tier of `average_snr`; colours the day in overviews.
    pub snr_tier: &'static str,
    pub health: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySessionView {
    pub mac_address: String,
    pub date: String,
    pub record_count: usize,
    pub ap_connections: BTreeMap<String, Vec<ConnectionView>>,
    pub metrics: SessionMetricsView,
}

impl From<DaySession> for DaySessionView {
    fn from(session: DaySession) -> Self {
        let metrics = SessionMetricsView {
            health: session.metrics.health().as_str(),
            snr_tier: classify_snr(session.metrics.average_snr).as_str(),
            average_snr: session.metrics.average_snr,
            ap_switches: session.metrics.ap_switches,
            poor_connection_percentage: session.metrics.poor_connection_percentage,
        };
        let ap_connections = session
            .ap_connections
            .into_iter()
            .map(|(ap, samples)| {
                let samples = samples
                    .into_iter()
                    .map(|s| ConnectionView {
                        time: s.time,
                        snr: s.snr,
                        is_poor: s.is_poor,
                    })
                    .collect();
                (ap, samples)
            })
            .collect();

        Self {
            mac_address: session.mac_address,
            date: session.date,
            record_count: session.record_count,
            ap_connections,
            metrics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::telemetry::TelemetryRecord;

    fn event(mac: &str, ap: &str) -> DisconnectionEvent {
        DisconnectionEvent {
            mac_address: mac.to_string(),
            ap_name: ap.to_string(),
            date: "Dec 19 2024".to_string(),
            time: "10:00".to_string(),
        }
    }

    #[test]
    fn test_disconnection_lanes() {
        let aps = vec!["AP-1".to_string(), "AP-2".to_string(), "AP-3".to_string()];
        let view = DisconnectionsView::new(aps, vec![event("aa", "AP-3"), event("bb", "AP-1")]);
        assert_eq!(view.events[0].lane, 2);
        assert_eq!(view.events[1].lane, 0);
        assert_eq!(view.events[0].color, color_for("aa"));
    }

    #[test]
    fn test_record_view_json() {
        let classified = ClassifiedRecord::new(TelemetryRecord {
            mac_address: "aa".to_string(),
            snr: 26.0,
            median_rssi: 32.0,
            median_ht_rate: 160.0,
            ..Default::default()
        });
        let json = serde_json::to_value(RecordView::from(classified)).unwrap();
        assert_eq!(json["rssiDbm"], -68.0);
        assert_eq!(json["snrTier"], "good");
        assert_eq!(json["signalTier"], "moderate");
        assert_eq!(json["htRateTier"], "moderate");
        assert_eq!(json["disconnected"], false);
    }

    #[test]
    fn test_empty_day_session_json() {
        let view = DaySessionView::from(DaySession::from_records("aa", "Dec 19 2024", &[]));
        let json = serde_json::to_value(view).unwrap();
        assert_eq!(json["apConnections"], serde_json::json!({}));
        assert_eq!(json["metrics"]["averageSnr"], 0.0);
        assert_eq!(json["metrics"]["poorConnectionPercentage"], 0.0);
        assert_eq!(json["metrics"]["health"], "good");
        assert_eq!(json["metrics"]["snrTier"], "poor");
    }

    #[test]
    fn test_day_session_snr_tier() {
        let reading = |time: &str, snr: f64| TelemetryRecord {
            time: time.to_string(),
            ap_name: "AP-1".to_string(),
            snr,
            median_rssi: 60.0,
            ..Default::default()
        };
        let moderate = DaySession::from_records("aa", "d", &[reading("09:00", 30.0), reading("09:01", 18.0)]);
        let json = serde_json::to_value(DaySessionView::from(moderate)).unwrap();
        assert_eq!(json["metrics"]["snrTier"], "moderate");

        let good = DaySession::from_records("aa", "d", &[reading("09:00", 25.0)]);
        let json = serde_json::to_value(DaySessionView::from(good)).unwrap();
        assert_eq!(json["metrics"]["snrTier"], "good");
    }
}
