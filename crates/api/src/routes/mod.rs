pub mod form;
pub mod health;
pub mod prediction;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /form                                            form fields + theme (GET)
/// /features                                        encode only (POST)
/// /predictions                                     full estimate (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(form::router())
        .merge(prediction::router())
}
