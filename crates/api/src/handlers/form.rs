//! Handler for the estimate form definition.

use axum::extract::State;
use axum::Json;
use homeval_core::form::{form_schema, FormField};
use homeval_core::theme::{Palette, Theme};
use serde::Serialize;

use crate::response::DataResponse;
use crate::state::AppState;

/// Everything the front end needs to render the estimate screen.
#[derive(Debug, Serialize)]
pub struct FormDefinition {
    pub fields: Vec<FormField>,
    pub theme: Theme,
    pub palette: Palette,
}

/// GET /api/v1/form
pub async fn get_form(State(state): State<AppState>) -> Json<DataResponse<FormDefinition>> {
    let theme = state.config.theme;

    Json(DataResponse {
        data: FormDefinition {
            fields: form_schema(),
            palette: theme.color_scheme.palette(),
            theme,
        },
    })
}
