// Dataset service - Use case for loading, replacing and querying the uploaded telemetry
use crate::application::analysis_session::AnalysisSession;
use crate::domain::filter::RecordFilter;
use crate::infrastructure::csv_parser::parse_csv;
use std::sync::Arc;
use tokio::sync::RwLock;

/// What the caller learns about a freshly loaded upload.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadSummary {
    pub record_count: usize,
    pub device_count: usize,
    pub date_count: usize,
    pub missing_columns: Vec<&'static str>,
}

#[derive(Clone, Default)]
pub struct DatasetService {
    current: Arc<RwLock<Option<AnalysisSession>>>,
}

impl DatasetService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `text` and replace whatever was loaded before.
    pub async fn load(&self, text: String) -> anyhow::Result<LoadSummary> {
        // Parsing is CPU-bound; keep it off the async workers
        let parsed = tokio::task::spawn_blocking(move || parse_csv(&text)).await?;

        if !parsed.missing_columns.is_empty() {
            tracing::warn!(
                "Upload is missing columns {:?}; those fields default to empty/zero",
                parsed.missing_columns
            );
        }

        let session = AnalysisSession::new(parsed.records.into());
        let summary = LoadSummary {
            record_count: session.records().len(),
            device_count: session.selectable_devices().len(),
            date_count: session.selectable_dates().len(),
            missing_columns: parsed.missing_columns,
        };

        *self.current.write().await = Some(session);

        tracing::info!(
            "Loaded {} records ({} devices, {} dates)",
            summary.record_count,
            summary.device_count,
            summary.date_count
        );
        Ok(summary)
    }

    /// Drop the loaded dataset.
    pub async fn reset(&self) -> bool {
        let previous = self.current.write().await.take();
        if previous.is_some() {
            tracing::info!("Dataset cleared");
        }
        previous.is_some()
    }

    /// Session over the loaded records with `filter` applied, if anything is loaded.
    pub async fn session(&self, filter: RecordFilter) -> Option<AnalysisSession> {
        let guard = self.current.read().await;
        guard.as_ref().map(|base| base.with_filter(filter))
    }
}
