// API errors and their HTTP mapping
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("no dataset loaded; upload a CSV file first")]
    NoDataset,

    #[error("upload is not valid UTF-8 text")]
    InvalidEncoding,

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NoDataset => StatusCode::CONFLICT,
            ApiError::InvalidEncoding => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::debug!("{}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
