// Selectable filter values derived from a record collection
use super::telemetry::{TelemetryRecord, parse_date_label};
use chrono::NaiveDate;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateOption {
    /// Raw label, usable as a filter value.
    pub value: String,
    /// Long form, e.g. `December 19, 2024`.
    pub label: String,
}

/// Distinct date labels that parse, oldest first.
///
/// Records with unparseable labels are left alone; they just aren't offered
/// as a selection.
pub fn selectable_dates(records: &[TelemetryRecord]) -> Vec<DateOption> {
    let by_date: BTreeSet<(NaiveDate, &str)> = records
        .iter()
        .filter_map(|r| parse_date_label(&r.date).map(|date| (date, r.date.as_str())))
        .collect();

    by_date
        .into_iter()
        .map(|(date, value)| DateOption {
            value: value.to_string(),
            label: date.format("%B %-d, %Y").to_string(),
        })
        .collect()
}

/// Distinct device identifiers, sorted.
pub fn selectable_devices(records: &[TelemetryRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.mac_address.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
