//! In-process linear regression loaded from a JSON artifact.
//!
//! Artifact layout:
//!
//! ```json
//! {
//!   "name": "linear-2024-03",
//!   "intercept": 125000.0,
//!   "coefficients": [2150.0, 830.0, -410.0, 95000.0, 61000.0, 18000.0, 140000.0, 90000.0, 45000.0, 210000.0],
//!   "feature_names": ["area", "latitude", "longitude", "bedrooms", "bathrooms",
//!                     "balconies", "ready_to_move", "parking", "furnishing", "building_type"]
//! }
//! ```
//!
//! `feature_names` is optional. When present it must match the encoder's
//! column order exactly, which catches artifacts trained on a different layout.

use std::path::Path;

use async_trait::async_trait;
use homeval_core::encoder::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
use homeval_core::types::Price;
use serde::Deserialize;

use crate::error::InferenceError;
use crate::model::{ensure_finite, PriceModel};

#[derive(Debug, Deserialize)]
struct LinearArtifact {
    #[serde(default)]
    name: Option<String>,
    intercept: f64,
    coefficients: Vec<f64>,
    #[serde(default)]
    feature_names: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    name: String,
    intercept: f64,
    coefficients: [f64; FEATURE_COUNT],
}

impl LinearModel {
    pub fn new(name: impl Into<String>, intercept: f64, coefficients: [f64; FEATURE_COUNT]) -> Self {
        Self {
            name: name.into(),
            intercept,
            coefficients,
        }
    }

    /// Parse and check an artifact.
    pub fn from_json(json: &str) -> Result<Self, InferenceError> {
        let artifact: LinearArtifact = serde_json::from_str(json)
            .map_err(|e| InferenceError::Artifact(format!("malformed JSON: {e}")))?;

        if let Some(names) = &artifact.feature_names {
            let matches = names.len() == FEATURE_COUNT
                && names.iter().zip(FEATURE_NAMES).all(|(a, b)| a == b);
            if !matches {
                return Err(InferenceError::Artifact(format!(
                    "feature_names {names:?} do not match expected order {FEATURE_NAMES:?}"
                )));
            }
        }

        let coefficients: [f64; FEATURE_COUNT] =
            artifact.coefficients.as_slice().try_into().map_err(|_| {
                InferenceError::Artifact(format!(
                    "expected {FEATURE_COUNT} coefficients, got {}",
                    artifact.coefficients.len()
                ))
            })?;

        if !artifact.intercept.is_finite() || coefficients.iter().any(|c| !c.is_finite()) {
            return Err(InferenceError::Artifact(
                "intercept and coefficients must be finite".to_string(),
            ));
        }

        Ok(Self {
            name: artifact.name.unwrap_or_else(|| "linear".to_string()),
            intercept: artifact.intercept,
            coefficients,
        })
    }

    /// Read an artifact from disk.
    pub async fn load(path: &Path) -> Result<Self, InferenceError> {
        let json = tokio::fs::read_to_string(path).await.map_err(|e| {
            InferenceError::ModelUnavailable(format!(
                "cannot read model artifact {}: {e}",
                path.display()
            ))
        })?;
        let model = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), name = %model.name, "Loaded linear price model");
        Ok(model)
    }

    fn score(&self, features: &FeatureVector) -> Price {
        self.intercept
            + features
                .as_slice()
                .iter()
                .zip(self.coefficients.iter())
                .map(|(x, w)| x * w)
                .sum::<f64>()
    }
}

#[async_trait]
impl PriceModel for LinearModel {
    async fn predict(&self, features: &FeatureVector) -> Result<Price, InferenceError> {
        ensure_finite(self.score(features))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
