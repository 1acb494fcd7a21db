//! HTTP client for an external scoring service.
//!
//! Used when the trained model lives in a separate process (for example a
//! sidecar that serves the original pickled regressor).
//!
//! Protocol:
//!
//! ```text
//! POST {base_url}/predict   {"features": [[f64; 10]]}
//! 200                       {"predictions": [f64, ...]}
//! ```

use std::time::Duration;

use async_trait::async_trait;
use homeval_core::encoder::FeatureVector;
use homeval_core::types::Price;
use serde::{Deserialize, Serialize};

use crate::error::InferenceError;
use crate::model::{ensure_finite, PriceModel};

/// Request body for `POST /predict`: a batch of one row.
#[derive(Debug, Serialize)]
pub struct PredictRequest<'a> {
    pub features: [&'a [f64]; 1],
}

/// Response body returned by the scoring service.
#[derive(Debug, Deserialize)]
pub struct PredictResponse {
    pub predictions: Vec<f64>,
}

impl PredictResponse {
    /// First prediction of the batch. An empty batch is an inference error.
    pub fn into_price(self) -> Result<Price, InferenceError> {
        let price = self.predictions.first().copied().ok_or_else(|| {
            InferenceError::Inference("scoring service returned no predictions".to_string())
        })?;
        ensure_finite(price)
    }
}

/// Client for a single scoring service instance.
pub struct RemoteModel {
    client: reqwest::Client,
    base_url: String,
    name: String,
}

impl RemoteModel {
    /// Create a client for the service at `base_url`, e.g. `http://localhost:8501`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, InferenceError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            name: format!("remote:{base_url}"),
            base_url,
        }
    }

    pub fn predict_url(&self) -> String {
        format!("{}/predict", self.base_url)
    }

    /// Check the response status and parse the JSON body.
    async fn parse_response(response: reqwest::Response) -> Result<PredictResponse, InferenceError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceError::Api {
                status: status.as_u16(),
                body,
            });
        }
        response
            .json::<PredictResponse>()
            .await
            .map_err(|e| InferenceError::Inference(format!("unreadable scoring response: {e}")))
    }
}

#[async_trait]
impl PriceModel for RemoteModel {
    async fn predict(&self, features: &FeatureVector) -> Result<Price, InferenceError> {
        let body = PredictRequest {
            features: [features.as_slice()],
        };

        let response = self
            .client
            .post(self.predict_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    InferenceError::ModelUnavailable(format!(
                        "scoring service at {} is unreachable: {e}",
                        self.base_url
                    ))
                } else {
                    InferenceError::Request(e)
                }
            })?;

        let price = Self::parse_response(response).await?.into_price()?;
        tracing::debug!(model = %self.name, price, "Scoring service prediction");
        Ok(price)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use homeval_core::encoder::FEATURE_COUNT;

    use super::*;

    #[test]
    fn request_wraps_single_row() {
        let features = FeatureVector::new([1.0; FEATURE_COUNT]);
        let body = PredictRequest {
            features: [features.as_slice()],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["features"].as_array().unwrap().len(), 1);
        assert_eq!(json["features"][0].as_array().unwrap().len(), FEATURE_COUNT);
    }

    #[test]
    fn response_takes_first_prediction() {
        let response: PredictResponse =
            serde_json::from_str(r#"{"predictions": [4500000.5, 1.0]}"#).unwrap();
        assert!((response.into_price().unwrap() - 4_500_000.5).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_response_is_inference_error() {
        let response = PredictResponse {
            predictions: vec![],
        };
        assert_matches!(response.into_price(), Err(InferenceError::Inference(_)));
    }

    #[test]
    fn non_finite_response_is_inference_error() {
        let response = PredictResponse {
            predictions: vec![f64::NAN],
        };
        assert_matches!(response.into_price(), Err(InferenceError::Inference(_)));
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let model = RemoteModel::with_client(reqwest::Client::new(), "http://scoring:8501/");
        assert_eq!(model.predict_url(), "http://scoring:8501/predict");
        assert_eq!(model.name(), "remote:http://scoring:8501");
    }

    #[tokio::test]
    async fn unreachable_service_is_model_unavailable() {
        // Port 9 (discard) is closed on test hosts; connection is refused.
        let model = RemoteModel::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        let features = FeatureVector::new([0.0; FEATURE_COUNT]);
        assert_matches!(
            model.predict(&features).await,
            Err(InferenceError::ModelUnavailable(_))
        );
    }
}
