// Summary statistics over a record collection
use super::telemetry::TelemetryRecord;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryStats {
    pub record_count: usize,
    pub low_snr_count: usize,
    pub low_rssi_count: usize,
    pub disconnection_count: usize,
    pub average_snr: f64,
    /// Mean of true dBm (offset already removed).
    pub average_rssi_dbm: f64,
}

impl SummaryStats {
    pub fn from_records(records: &[TelemetryRecord]) -> Self {
        Self {
            record_count: records.len(),
            low_snr_count: records.iter().filter(|r| r.is_low_snr()).count(),
            low_rssi_count: records.iter().filter(|r| r.is_low_rssi()).count(),
            disconnection_count: records.iter().filter(|r| r.is_disconnection()).count(),
            average_snr: mean(records.iter().map(|r| r.snr)),
            average_rssi_dbm: mean(records.iter().map(|r| r.rssi_dbm())),
        }
    }
}

/// Arithmetic mean, `0.0` for an empty input or a non-finite result.
///
/// Running mean, so large readings don't overflow an intermediate sum.
pub fn mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (mean, _) = values
        .into_iter()
        .fold((0.0, 0usize), |(mean, count), v| {
            let count = count + 1;
            (mean + (v - mean) / count as f64, count)
        });
    finite_or_zero(mean)
}

pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(snr: f64, median_rssi: f64) -> TelemetryRecord {
        TelemetryRecord {
            snr,
            median_rssi,
            median_ht_rate: 150.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_collection_is_zero() {
        let stats = SummaryStats::from_records(&[]);
        assert_eq!(stats, SummaryStats::default());
        assert_eq!(stats.average_snr, 0.0);
        assert_eq!(stats.average_rssi_dbm, 0.0);
    }

    #[test]
    fn test_single_record_average_is_itself() {
        let stats = SummaryStats::from_records(&[record(22.5, 40.0)]);
        assert_eq!(stats.average_snr, 22.5);
        assert_eq!(stats.average_rssi_dbm, -60.0);
    }

    #[test]
    fn test_threshold_counts() {
        let records = vec![
            record(10.0, 50.0), // low SNR only
            record(30.0, 29.0), // -71 dBm: low RSSI
            record(30.0, 30.0), // -70 dBm: not low
            record(15.0, 60.0),
        ];
        let stats = SummaryStats::from_records(&records);
        assert_eq!(stats.record_count, 4);
        assert_eq!(stats.low_snr_count, 1);
        assert_eq!(stats.low_rssi_count, 1);
        assert_eq!(stats.disconnection_count, 0);
        assert_eq!(stats.average_snr, 21.25);
    }

    #[test]
    fn test_huge_readings_stay_finite() {
        let stats = SummaryStats::from_records(&[record(1e308, 50.0), record(1e308, 50.0)]);
        assert_eq!(stats.average_snr, 1e308);

        // Spread too wide to represent: falls back to zero rather than inf/NaN
        assert_eq!(mean([1e308, -1e308, 1e308]), 0.0);
        assert_eq!(mean([f64::MAX, f64::MAX]), f64::MAX);
        let json = serde_json::to_value(mean([-1e308, 1e308])).unwrap();
        assert!(json.is_number());
    }

    #[test]
    fn test_disconnections_counted() {
        let stats = SummaryStats::from_records(&[TelemetryRecord::default(), record(20.0, 50.0)]);
        assert_eq!(stats.disconnection_count, 1);
        // A zero offset is -100 dBm
        assert_eq!(stats.low_rssi_count, 1);
    }
}
