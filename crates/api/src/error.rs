use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use homeval_core::error::CoreError;
use homeval_inference::InferenceError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`InferenceError`] for model
/// failures. Implements [`IntoResponse`] to produce consistent JSON error
/// responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `homeval_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A model loading or scoring error from `homeval_inference`.
    #[error(transparent)]
    Inference(#[from] InferenceError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let field = match &self {
            AppError::Core(core) => core.field(),
            AppError::Inference(_) => None,
        };

        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::InvalidInput { field, reason } => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "INVALID_INPUT",
                    format!("{field} {reason}"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::DivisionByZero(msg) | CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal()
                }
            },

            // --- Model errors ---
            AppError::Inference(err) => classify_inference_error(err),
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let Some(field) = field {
            body["field"] = json!(field);
        }

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Classify a model error into an HTTP status, error code, and message.
///
/// - `ModelUnavailable` maps to 503.
/// - Everything else maps to 502 with a sanitized message; details are logged.
fn classify_inference_error(err: &InferenceError) -> (StatusCode, &'static str, String) {
    match err {
        InferenceError::ModelUnavailable(msg) => {
            tracing::error!(error = %msg, "Price model unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "MODEL_UNAVAILABLE",
                "The price model is unavailable".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Price model inference failed");
            (
                StatusCode::BAD_GATEWAY,
                "INFERENCE_ERROR",
                "The price model could not produce an estimate".to_string(),
            )
        }
    }
}
