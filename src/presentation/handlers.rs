// HTTP request handlers
use crate::application::analysis_session::AnalysisSession;
use crate::domain::filter::{ALL, RecordFilter, Selection};
use crate::presentation::app_state::AppState;
use crate::presentation::error::ApiError;
use crate::presentation::views::{
    DaySessionView, DeviceSeriesView, DisconnectionsView, LoadSummaryView, RecordView,
    SelectorsView, StatsView,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use bytes::Bytes;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct FilterQuery {
    #[serde(default = "all")]
    pub device: String,
    #[serde(default = "all")]
    pub date: String,
}

fn all() -> String {
    ALL.to_string()
}

impl FilterQuery {
    fn to_filter(&self) -> RecordFilter {
        RecordFilter::new(Selection::parse(&self.device), Selection::parse(&self.date))
    }
}

async fn session_for(state: &AppState, query: &FilterQuery) -> Result<AnalysisSession, ApiError> {
    let filter = query.to_filter();
    tracing::debug!(
        "Building views for device={} date={}",
        filter.device.as_str(),
        filter.date.as_str()
    );
    state
        .dataset_service
        .session(filter)
        .await
        .ok_or(ApiError::NoDataset)
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Replace the loaded dataset with the uploaded CSV text
pub async fn upload_dataset(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<LoadSummaryView>, ApiError> {
    let text = String::from_utf8(body.to_vec()).map_err(|_| ApiError::InvalidEncoding)?;
    let summary = state.dataset_service.load(text).await?;
    Ok(Json(summary.into()))
}

/// Drop the loaded dataset
pub async fn clear_dataset(State(state): State<Arc<AppState>>) -> StatusCode {
    if state.dataset_service.reset().await {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

/// Devices and dates available for filtering
pub async fn selectors(State(state): State<Arc<AppState>>) -> Result<Json<SelectorsView>, ApiError> {
    let session = state
        .dataset_service
        .session(RecordFilter::default())
        .await
        .ok_or(ApiError::NoDataset)?;
    Ok(Json(SelectorsView::new(
        session.selectable_devices(),
        session.selectable_dates(),
    )))
}

/// Summary statistics for the filtered records
pub async fn stats(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FilterQuery>,
) -> Result<Json<StatsView>, ApiError> {
    let session = session_for(&state, &query).await?;
    Ok(Json(session.summary().into()))
}

/// Filtered records with a severity tier per signal dimension
pub async fn records(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FilterQuery>,
) -> Result<Json<Vec<RecordView>>, ApiError> {
    let session = session_for(&state, &query).await?;
    Ok(Json(session.classified().into_iter().map(RecordView::from).collect()))
}

/// Disconnection events with their access point lane and device colour
pub async fn disconnections(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FilterQuery>,
) -> Result<Json<DisconnectionsView>, ApiError> {
    let session = session_for(&state, &query).await?;
    Ok(Json(DisconnectionsView::new(
        session.access_points(),
        session.disconnections(),
    )))
}

/// SNR series per device, ordered by timestamp
pub async fn snr_series(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FilterQuery>,
) -> Result<Json<Vec<DeviceSeriesView>>, ApiError> {
    let session = session_for(&state, &query).await?;
    Ok(Json(session.snr_series().into_iter().map(DeviceSeriesView::from).collect()))
}

/// Per-day overview for one device; honours the `date` filter
pub async fn device_days(
    Path(mac): Path<String>,
    State(state): State<Arc<AppState>>,
    Query(query): Query<FilterQuery>,
) -> Result<Json<Vec<DaySessionView>>, ApiError> {
    let session = session_for(&state, &query).await?;
    Ok(Json(
        session
            .day_overview(&mac)
            .into_iter()
            .map(DaySessionView::from)
            .collect(),
    ))
}

/// Detail for one device on one day
pub async fn device_day(
    Path((mac, date)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<DaySessionView>, ApiError> {
    let session = state
        .dataset_service
        .session(RecordFilter::default())
        .await
        .ok_or(ApiError::NoDataset)?;
    Ok(Json(session.day_session(&mac, &date).into()))
}
