//! Price model backends.
//!
//! The encoder hands a [`FeatureVector`](homeval_core::encoder::FeatureVector)
//! to a [`PriceModel`] and gets a single price back. A model is loaded once
//! at startup into a [`ModelHandle`] and shared read-only by every request.

pub mod error;
pub mod linear;
pub mod loader;
pub mod model;
pub mod remote;

pub use error::InferenceError;
pub use loader::{load, ModelSource};
pub use model::{ModelHandle, PriceModel};
