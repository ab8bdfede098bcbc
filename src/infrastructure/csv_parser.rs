// CSV parser - permissive conversion of uploaded text into telemetry records
use crate::domain::telemetry::TelemetryRecord;

pub const DATE_COLUMN: &str = "Date";
pub const TIME_COLUMN: &str = "Time";
pub const AP_NAME_COLUMN: &str = "AP Name";
pub const AP_IP_COLUMN: &str = "AP IP";
pub const MAC_ADDRESS_COLUMN: &str = "MAC Address";
pub const SNR_COLUMN: &str = "SNR";
pub const MEDIAN_RSSI_COLUMN: &str = "median_rssi";
pub const MEDIAN_HT_RATE_COLUMN: &str = "median_ht_rate";

pub const COLUMNS: [&str; 8] = [
    DATE_COLUMN,
    TIME_COLUMN,
    AP_NAME_COLUMN,
    AP_IP_COLUMN,
    MAC_ADDRESS_COLUMN,
    SNR_COLUMN,
    MEDIAN_RSSI_COLUMN,
    MEDIAN_HT_RATE_COLUMN,
];

/// Column positions resolved from the header line.
#[derive(Debug, Clone, Default)]
struct ColumnIndex {
    date: Option<usize>,
    time: Option<usize>,
    ap_name: Option<usize>,
    ap_ip: Option<usize>,
    mac_address: Option<usize>,
    snr: Option<usize>,
    median_rssi: Option<usize>,
    median_ht_rate: Option<usize>,
}

impl ColumnIndex {
    fn from_header(header: &[&str]) -> Self {
        let find = |name: &str| header.iter().position(|h| *h == name);
        Self {
            date: find(DATE_COLUMN),
            time: find(TIME_COLUMN),
            ap_name: find(AP_NAME_COLUMN),
            ap_ip: find(AP_IP_COLUMN),
            mac_address: find(MAC_ADDRESS_COLUMN),
            snr: find(SNR_COLUMN),
            median_rssi: find(MEDIAN_RSSI_COLUMN),
            median_ht_rate: find(MEDIAN_HT_RATE_COLUMN),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParsedCsv {
    pub records: Vec<TelemetryRecord>,
    /// Expected columns absent from the header.
    pub missing_columns: Vec<&'static str>,
}

/// Parse comma-delimited text with a header row.
///
/// Never fails: missing columns, short rows and non-numeric values all fall
/// back to empty strings / zero. Blank lines are skipped.
pub fn parse_csv(text: &str) -> ParsedCsv {
    let mut lines = text.lines();
    let Some(header_line) = lines.next() else {
        return ParsedCsv::default();
    };

    let header: Vec<&str> = split_fields(header_line);
    let missing_columns = COLUMNS
        .iter()
        .copied()
        .filter(|c| !header.contains(c))
        .collect();
    let columns = ColumnIndex::from_header(&header);

    let records = lines
        .filter(|line| !line.trim().is_empty())
        .map(|line| parse_row(&columns, &split_fields(line)))
        .collect();

    ParsedCsv {
        records,
        missing_columns,
    }
}

fn split_fields(line: &str) -> Vec<&str> {
    line.split(',').map(str::trim).collect()
}

fn parse_row(columns: &ColumnIndex, values: &[&str]) -> TelemetryRecord {
    let text = |idx: Option<usize>| -> String {
        idx.and_then(|i| values.get(i))
            .map(|v| v.to_string())
            .unwrap_or_default()
    };
    let number = |idx: Option<usize>| -> f64 {
        idx.and_then(|i| values.get(i))
            .map(|v| parse_number(v))
            .unwrap_or(0.0)
    };

    TelemetryRecord {
        date: text(columns.date),
        time: text(columns.time),
        ap_name: text(columns.ap_name),
        ap_ip: text(columns.ap_ip),
        mac_address: text(columns.mac_address),
        snr: number(columns.snr),
        median_rssi: number(columns.median_rssi),
        median_ht_rate: number(columns.median_ht_rate),
    }
}

/// Non-numeric and non-finite values coerce to zero.
fn parse_number(value: &str) -> f64 {
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}
