//! Handlers for feature encoding and price estimation.
//!
//! The flow is encode, then predict, then derive metrics. A failure at any
//! step ends the request; no partial report is returned.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use homeval_core::display::build_report;
use homeval_core::encoder::encode;
use homeval_core::property::RawInput;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /features -- encode without scoring
// ---------------------------------------------------------------------------

/// Return the model-ordered feature vector for a form submission.
pub async fn encode_features(Json(raw): Json<RawInput>) -> AppResult<impl IntoResponse> {
    let features = encode(&raw)?;
    Ok(Json(DataResponse { data: features }))
}

// ---------------------------------------------------------------------------
// POST /predictions -- full estimate
// ---------------------------------------------------------------------------

/// Encode the submission, score it, and build the result panel.
pub async fn predict_price(
    State(state): State<AppState>,
    Json(raw): Json<RawInput>,
) -> AppResult<impl IntoResponse> {
    let features = encode(&raw).inspect_err(|e| {
        tracing::debug!(error = %e, "Rejected estimate input");
    })?;

    let price = state.model.predict(&features).await?;
    let report = build_report(&raw, price, chrono::Utc::now())?;

    tracing::info!(
        model = state.model.name(),
        building_type = %raw.building_type,
        area = raw.area,
        price = report.price,
        "Price estimate produced",
    );

    Ok(Json(DataResponse { data: report }))
}
