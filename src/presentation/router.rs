// Router construction
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    clear_dataset, device_day, device_days, disconnections, health_check, records, selectors,
    snr_series, stats, upload_dataset,
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, put},
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

pub fn build_router(state: Arc<AppState>, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/dataset", put(upload_dataset).delete(clear_dataset))
        .route("/dataset/selectors", get(selectors))
        .route("/stats", get(stats))
        .route("/records", get(records))
        .route("/disconnections", get(disconnections))
        .route("/snr-series", get(snr_series))
        .route("/devices/:mac/days", get(device_days))
        .route("/devices/:mac/days/:date", get(device_day))
        .with_state(state)
        // Uploads are bounded by the configured limit instead of axum's 2 MB default
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_upload_bytes))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dataset_service::DatasetService;
    use axum::{
        body::{Body, to_bytes},
        http::{Method, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    const CSV: &str = "Date,Time,AP Name,AP IP,MAC Address,SNR,median_rssi,median_ht_rate\n\
                       Dec 19 2024,09:00:00,AP-1,10.0.0.1,aa:01,30,50,220\n\
                       Dec 19 2024,09:05:00,AP-2,10.0.0.2,aa:01,10,20,120\n\
                       Dec 19 2024,09:10:00,AP-1,10.0.0.1,aa:01,0,0,0\n\
                       Dec 20 2024,08:00:00,AP-2,10.0.0.2,bb:02,22,40,180\n";

    fn app() -> Router {
        let state = Arc::new(AppState {
            dataset_service: DatasetService::new(),
        });
        build_router(state, 1024 * 1024)
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Body) -> (StatusCode, Value) {
        let response = app
            .clone()
            .oneshot(Request::builder().method(method).uri(uri).body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
        send(app, Method::GET, uri, Body::empty()).await
    }

    async fn upload(app: &Router) {
        let (status, json) = send(app, Method::PUT, "/dataset", Body::from(CSV)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["recordCount"], 4);
        assert_eq!(json["deviceCount"], 2);
        assert_eq!(json["dateCount"], 2);
    }

    #[tokio::test]
    async fn test_views_require_dataset() {
        let app = app();
        for uri in ["/stats", "/records", "/dataset/selectors", "/devices/aa:01/days"] {
            let (status, json) = get_json(&app, uri).await;
            assert_eq!(status, StatusCode::CONFLICT, "{uri}");
            assert!(json["error"].is_string());
        }
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_rejects_non_utf8_upload() {
        let app = app();
        let (status, _) = send(&app, Method::PUT, "/dataset", Body::from(vec![0xff, 0xfe, 0x00])).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_stats_with_filters() {
        let app = app();
        upload(&app).await;

        let (status, json) = get_json(&app, "/stats").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["recordCount"], 4);
        assert_eq!(json["disconnectionCount"], 1);

        let (_, json) = get_json(&app, "/stats?device=aa:01&date=Dec%2019%202024").await;
        assert_eq!(json["recordCount"], 3);
        assert_eq!(json["lowSnrCount"], 2);
        // (-50 + -80 + -100) / 3
        let avg = json["averageRssiDbm"].as_f64().unwrap();
        assert!((avg - (-230.0 / 3.0)).abs() < 1e-9);

        let (_, json) = get_json(&app, "/stats?device=nobody").await;
        assert_eq!(json["recordCount"], 0);
        assert_eq!(json["averageSnr"], 0.0);
    }

    #[tokio::test]
    async fn test_selectors_and_disconnections() {
        let app = app();
        upload(&app).await;

        let (_, json) = get_json(&app, "/dataset/selectors").await;
        assert_eq!(json["devices"][0]["macAddress"], "aa:01");
        assert_eq!(json["dates"][0]["label"], "December 19, 2024");

        let (_, json) = get_json(&app, "/disconnections").await;
        assert_eq!(json["accessPoints"], serde_json::json!(["AP-1", "AP-2"]));
        assert_eq!(json["events"][0]["lane"], 0);
        assert_eq!(json["events"][0]["time"], "09:10:00");
    }

    #[tokio::test]
    async fn test_device_days_and_detail() {
        let app = app();
        upload(&app).await;

        let (_, json) = get_json(&app, "/devices/aa:01/days").await;
        let days = json.as_array().unwrap();
        assert_eq!(days.len(), 1);
        assert_eq!(days[0]["metrics"]["apSwitches"], 2);
        // (30 + 10 + 0) / 3
        assert_eq!(days[0]["metrics"]["snrTier"], "poor");

        let (status, json) = get_json(&app, "/devices/aa:01/days/Dec%2019%202024").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["recordCount"], 3);
        assert_eq!(json["apConnections"]["AP-1"][1]["isPoor"], true);
        // 10 SNR, and the all-zero row at -100 dBm
        let poor = json["metrics"]["poorConnectionPercentage"].as_f64().unwrap();
        assert!((poor - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(json["metrics"]["health"], "poor");

        let (_, json) = get_json(&app, "/snr-series?device=bb:02").await;
        assert_eq!(json[0]["points"][0]["timestamp"], "2024-12-20T08:00:00");
    }

    #[tokio::test]
    async fn test_clear_dataset() {
        let app = app();
        let (status, _) = send(&app, Method::DELETE, "/dataset", Body::empty()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        upload(&app).await;
        let (status, _) = send(&app, Method::DELETE, "/dataset", Body::empty()).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = get_json(&app, "/records").await;
        assert_eq!(status, StatusCode::CONFLICT);
    }
}
