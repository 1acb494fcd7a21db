//! Domain logic for the property price estimator.
//!
//! Everything here is pure: no I/O, no shared state. The API crate feeds
//! raw form values in and renders what comes out.

pub mod display;
pub mod encoder;
pub mod error;
pub mod form;
pub mod property;
pub mod theme;
pub mod types;
