#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use homeval_api::config::ServerConfig;
use homeval_api::router::build_app_router;
use homeval_api::state::AppState;
use homeval_core::encoder::FeatureVector;
use homeval_core::theme::Theme;
use homeval_inference::{InferenceError, ModelSource, PriceModel};

/// What the stub model does when asked for a prediction.
pub enum StubBehavior {
    Price(f64),
    Unavailable,
    Failing,
}

/// In-memory model that records how often it was called.
pub struct StubModel {
    behavior: StubBehavior,
    pub calls: AtomicUsize,
}

impl StubModel {
    pub fn new(behavior: StubBehavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PriceModel for StubModel {
    async fn predict(&self, _features: &FeatureVector) -> Result<f64, InferenceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            StubBehavior::Price(price) => Ok(price),
            StubBehavior::Unavailable => {
                Err(InferenceError::ModelUnavailable("stub offline".into()))
            }
            StubBehavior::Failing => Err(InferenceError::Inference("stub exploded".into())),
        }
    }

    fn name(&self) -> &str {
        "stub"
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        model_source: ModelSource::Remote {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout: Duration::from_secs(1),
        },
        theme: Theme::animated(),
    }
}

/// Build the full application router around the given model.
pub fn build_test_app(model: Arc<StubModel>) -> Router {
    let state = AppState {
        config: Arc::new(test_config()),
        model,
    };
    build_app_router(state)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The villa submission from the estimate form, as the front end sends it.
pub fn villa_json() -> serde_json::Value {
    serde_json::json!({
        "area": 1200.0,
        "bedrooms": 2,
        "bathrooms": 2,
        "balconies": 1,
        "building_type": "Villa",
        "latitude": 12.9,
        "longitude": 77.6,
        "ready_to_move": "Yes",
        "parking": "Yes",
        "furnishing": "Semi-Furnished"
    })
}
