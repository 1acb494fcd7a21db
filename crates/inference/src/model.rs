use std::sync::Arc;

use async_trait::async_trait;
use homeval_core::encoder::FeatureVector;
use homeval_core::types::Price;

use crate::error::InferenceError;

/// A trained regressor that maps one feature vector to one price.
///
/// Implementations are read-only after construction and must be safe to
/// call from many requests at once.
#[async_trait]
pub trait PriceModel: Send + Sync {
    async fn predict(&self, features: &FeatureVector) -> Result<Price, InferenceError>;

    /// Short description for logs and the health endpoint.
    fn name(&self) -> &str;
}

/// Shared, immutable handle to the loaded model.
pub type ModelHandle = Arc<dyn PriceModel>;

/// Reject predictions that cannot be displayed as a price.
pub(crate) fn ensure_finite(price: Price) -> Result<Price, InferenceError> {
    if price.is_finite() {
        Ok(price)
    } else {
        Err(InferenceError::Inference(format!(
            "model returned a non-finite prediction: {price}"
        )))
    }
}
