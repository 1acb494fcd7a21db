//! Route definitions for encoding and price estimation.

use axum::routing::post;
use axum::Router;

use crate::handlers::prediction;
use crate::state::AppState;

/// Estimation routes mounted under `/api/v1`.
///
/// ```text
/// POST /features          -> encode_features
/// POST /predictions       -> predict_price
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/features", post(prediction::encode_features))
        .route("/predictions", post(prediction::predict_price))
}
