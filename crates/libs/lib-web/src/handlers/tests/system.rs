//! # System Route Tests

use super::*;
use serde_json::json;

#[tokio::test]
async fn test_health_never_calls_upstream() {
    let server = MockServer::start().await;
    forbid_upstream_calls(&server).await;

    let (status, body) = get_json(test_app(test_config(&server.uri())), "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_health_ok_even_when_upstream_is_down() {
    let (status, body) = get_json(test_app(test_config("http://127.0.0.1:1")), "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_version_reports_configured_base() {
    let config = test_config("https://pro-api.coingecko.com/api/v3");
    let (status, body) = get_json(test_app(config), "/version", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "app_version": "1.0.0",
            "coingecko_api": "https://pro-api.coingecko.com/api/v3",
        })
    );
}

#[tokio::test]
async fn test_version_reports_not_set() {
    let mut config = test_config("unused");
    config.coingecko_api_base = None;

    let (status, body) = get_json(test_app(config), "/version", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["coingecko_api"], "not set");
}

#[tokio::test]
async fn test_index_serves_html_without_api_key() {
    let app = test_app(test_config("http://127.0.0.1:1"));
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(String::from_utf8_lossy(&body).contains("Crypto Market API"));
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let (status, body) = get_json(test_app(test_config("http://127.0.0.1:1")), "/nope", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Not Found" }));
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let app = test_app(test_config("http://127.0.0.1:1"));
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let request_id = response
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert_eq!(request_id.len(), 36);
}
