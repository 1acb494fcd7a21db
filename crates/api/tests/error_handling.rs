//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router needed.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use homeval_api::error::AppError;
use homeval_core::error::CoreError;
use homeval_inference::InferenceError;
use http_body_util::BodyExt;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn invalid_input_returns_422_naming_field() {
    let err = AppError::Core(CoreError::invalid("latitude", "must be between -90 and 90"));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "INVALID_INPUT");
    assert_eq!(json["field"], "latitude");
    assert_eq!(json["error"], "latitude must be between -90 and 90");
}

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("bad scheme".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json.get("field").is_none());
}

#[tokio::test]
async fn division_by_zero_is_sanitized_500() {
    let err = AppError::Core(CoreError::DivisionByZero("area was 0".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn model_unavailable_returns_503() {
    let err = AppError::Inference(InferenceError::ModelUnavailable("no artifact".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["code"], "MODEL_UNAVAILABLE");
}

#[tokio::test]
async fn scoring_api_error_returns_502_without_upstream_body() {
    let err = AppError::Inference(InferenceError::Api {
        status: 500,
        body: "Traceback: secret stack".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["code"], "INFERENCE_ERROR");
    assert!(
        !json.to_string().contains("secret"),
        "Upstream error details must not leak"
    );
}
