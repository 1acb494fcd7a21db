//! Startup-time model selection.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::error::InferenceError;
use crate::linear::LinearModel;
use crate::model::ModelHandle;
use crate::remote::RemoteModel;

/// Default request timeout for a remote scoring service.
pub const DEFAULT_MODEL_TIMEOUT_SECS: u64 = 10;

/// Where the price model comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    /// A JSON linear-model artifact on disk.
    Artifact(PathBuf),
    /// An HTTP scoring service.
    Remote { base_url: String, timeout: Duration },
}

impl ModelSource {
    /// Pick a source from `MODEL_PATH` / `MODEL_URL` style settings.
    ///
    /// Exactly one of the two must be set.
    pub fn from_settings(
        path: Option<String>,
        url: Option<String>,
        timeout: Duration,
    ) -> Result<Self, InferenceError> {
        let path = path.filter(|p| !p.trim().is_empty());
        let url = url.filter(|u| !u.trim().is_empty());

        match (path, url) {
            (Some(path), None) => Ok(Self::Artifact(PathBuf::from(path))),
            (None, Some(base_url)) => Ok(Self::Remote { base_url, timeout }),
            (Some(_), Some(_)) => Err(InferenceError::ModelUnavailable(
                "set only one of MODEL_PATH or MODEL_URL".to_string(),
            )),
            (None, None) => Err(InferenceError::ModelUnavailable(
                "no model configured: set MODEL_PATH or MODEL_URL".to_string(),
            )),
        }
    }
}

/// Build the shared model handle. Called once at startup.
pub async fn load(source: &ModelSource) -> Result<ModelHandle, InferenceError> {
    let model: ModelHandle = match source {
        ModelSource::Artifact(path) => Arc::new(LinearModel::load(path).await?),
        ModelSource::Remote { base_url, timeout } => {
            tracing::info!(%base_url, timeout_secs = timeout.as_secs(), "Using remote scoring service");
            Arc::new(RemoteModel::new(base_url.clone(), *timeout)?)
        }
    };
    Ok(model)
}
