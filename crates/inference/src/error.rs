/// Errors raised while loading or querying a price model.
///
/// These are passed through to the caller unchanged; nothing here retries.
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    /// No model is configured or reachable.
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    /// The model answered but the answer is unusable.
    #[error("Inference failed: {0}")]
    Inference(String),

    /// The model artifact could not be read or does not match the feature layout.
    #[error("Invalid model artifact: {0}")]
    Artifact(String),

    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The scoring service returned a non-2xx status code.
    #[error("Scoring service error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}
