use axum::routing::get;
use axum::Router;

use crate::handlers::form;
use crate::state::AppState;

/// Form routes mounted under `/api/v1`.
///
/// ```text
/// GET  /form              -> get_form
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/form", get(form::get_form))
}
