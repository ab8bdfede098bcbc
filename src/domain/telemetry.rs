// Telemetry domain model - one observation of a device associated with an access point
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Stored RSSI values are offsets; true dBm is `median_rssi - RSSI_OFFSET`.
pub const RSSI_OFFSET: f64 = 100.0;

/// Readings below this SNR count as low / poor.
pub const LOW_SNR_THRESHOLD: f64 = 15.0;

/// Readings below this dBm count as low / poor.
pub const LOW_RSSI_DBM_THRESHOLD: f64 = -70.0;

/// Format of the `Date` column, e.g. `Dec 19 2024`.
pub const DATE_LABEL_FORMAT: &str = "%b %d %Y";

const TIME_LABEL_FORMATS: [&str; 4] = ["%H:%M:%S", "%H:%M", "%I:%M:%S %p", "%I:%M %p"];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TelemetryRecord {
    pub date: String,
    pub time: String,
    pub ap_name: String,
    pub ap_ip: String,
    pub mac_address: String,
    pub snr: f64,
    pub median_rssi: f64,
    pub median_ht_rate: f64,
}

impl TelemetryRecord {
    /// Signal strength in dBm.
    pub fn rssi_dbm(&self) -> f64 {
        self.median_rssi - RSSI_OFFSET
    }

    pub fn is_low_snr(&self) -> bool {
        self.snr < LOW_SNR_THRESHOLD
    }

    pub fn is_low_rssi(&self) -> bool {
        self.rssi_dbm() < LOW_RSSI_DBM_THRESHOLD
    }

    /// A dropped connection: all three metrics exactly zero.
    ///
    /// Not the same as [`Self::is_poor_connection`]: a record can be poor
    /// without being a disconnection.
    pub fn is_disconnection(&self) -> bool {
        self.snr == 0.0 && self.median_rssi == 0.0 && self.median_ht_rate == 0.0
    }

    /// Low SNR or weak signal.
    pub fn is_poor_connection(&self) -> bool {
        self.is_low_snr() || self.is_low_rssi()
    }

    /// Calendar day parsed from the `date` label, if it is in `Mon dd yyyy` form.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        parse_date_label(&self.date)
    }

    /// Combined `date time` timestamp, if both labels parse.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        let date = self.calendar_date()?;
        let time = TIME_LABEL_FORMATS
            .iter()
            .find_map(|fmt| NaiveTime::parse_from_str(self.time.trim(), fmt).ok())?;
        Some(date.and_time(time))
    }
}

pub fn parse_date_label(label: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(label.trim(), DATE_LABEL_FORMAT).ok()
}
