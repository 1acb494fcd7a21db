use std::sync::Arc;

use homeval_inference::ModelHandle;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: both fields are behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration, including the screen theme.
    pub config: Arc<ServerConfig>,
    /// The price model, loaded once at startup and shared read-only.
    pub model: ModelHandle,
}
