// Analysis session - base records plus current filters; every view derived on request
use crate::domain::calendar::{DateOption, selectable_dates, selectable_devices};
use crate::domain::classification::{ClassifiedRecord, classify_records};
use crate::domain::disconnection::{DisconnectionEvent, detect_disconnections};
use crate::domain::filter::{RecordFilter, Selection};
use crate::domain::metrics::SummaryStats;
use crate::domain::series::{DeviceSeries, snr_series};
use crate::domain::session::{DaySession, day_overview};
use crate::domain::telemetry::TelemetryRecord;
use std::collections::BTreeSet;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct AnalysisSession {
    records: Arc<[TelemetryRecord]>,
    filter: RecordFilter,
}

impl AnalysisSession {
    pub fn new(records: Arc<[TelemetryRecord]>) -> Self {
        Self {
            records,
            filter: RecordFilter::default(),
        }
    }

    /// Same base records, different filters.
    pub fn with_filter(&self, filter: RecordFilter) -> Self {
        Self {
            records: Arc::clone(&self.records),
            filter,
        }
    }

    pub fn records(&self) -> &[TelemetryRecord] {
        &self.records
    }

    pub fn filtered(&self) -> Vec<TelemetryRecord> {
        self.filter.apply(&self.records)
    }

    pub fn summary(&self) -> SummaryStats {
        SummaryStats::from_records(&self.filtered())
    }

    pub fn classified(&self) -> Vec<ClassifiedRecord> {
        classify_records(&self.filtered())
    }

    pub fn disconnections(&self) -> Vec<DisconnectionEvent> {
        detect_disconnections(&self.filtered())
    }

    /// Distinct access point names in the filtered records, sorted.
    pub fn access_points(&self) -> Vec<String> {
        self.filtered()
            .into_iter()
            .map(|r| r.ap_name)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn snr_series(&self) -> Vec<DeviceSeries> {
        snr_series(&self.filtered())
    }

    /// Per-day sessions for a device, within the current date filter.
    pub fn day_overview(&self, mac_address: &str) -> Vec<DaySession> {
        let scoped = RecordFilter::new(Selection::Only(mac_address.to_string()), self.filter.date.clone());
        day_overview(mac_address, &scoped.apply(&self.records))
    }

    /// One device on one day, regardless of the current date filter.
    pub fn day_session(&self, mac_address: &str, date: &str) -> DaySession {
        let scoped = RecordFilter::new(
            Selection::Only(mac_address.to_string()),
            Selection::Only(date.to_string()),
        );
        DaySession::from_records(mac_address, date, &scoped.apply(&self.records))
    }

    /// Selectors are always offered over the unfiltered collection.
    pub fn selectable_dates(&self) -> Vec<DateOption> {
        selectable_dates(&self.records)
    }

    pub fn selectable_devices(&self) -> Vec<String> {
        selectable_devices(&self.records)
    }
}
