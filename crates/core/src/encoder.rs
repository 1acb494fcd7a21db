//! Feature encoding and derived display metrics.
//!
//! [`encode`] turns a form submission into the 10-column vector the trained
//! regressor expects. [`derive_metrics`] combines the prediction with the
//! original input for the insight cards shown next to the price.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::property::RawInput;
use crate::types::{whole_units, Price};

// ---------------------------------------------------------------------------
// Feature layout
// ---------------------------------------------------------------------------

/// Number of columns in a [`FeatureVector`].
pub const FEATURE_COUNT: usize = 10;

/// Column names in the order the trained model consumes them.
///
/// Reordering these silently corrupts every prediction.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "area",
    "latitude",
    "longitude",
    "bedrooms",
    "bathrooms",
    "balconies",
    "ready_to_move",
    "parking",
    "furnishing",
    "building_type",
];

/// Nominal denominator shown next to the amenities score. Not a bound.
pub const AMENITIES_SCORE_NOMINAL_MAX: u32 = 4;

/// Fixed-order numeric input for the price model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.0.to_vec()
    }

    pub fn len(&self) -> usize {
        FEATURE_COUNT
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Look up a column by its name in [`FEATURE_NAMES`].
    pub fn get(&self, name: &str) -> Option<f64> {
        FEATURE_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| self.0[i])
    }
}

impl Index<usize> for FeatureVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

fn flag(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}

/// Encode a form submission into the model's feature layout.
///
/// No scaling is applied; the model was trained on raw units.
pub fn encode(raw: &RawInput) -> Result<FeatureVector, CoreError> {
    raw.check()?;

    let building_type = raw.building_type()?;
    let furnishing = raw.furnishing()?;

    Ok(FeatureVector([
        raw.area,
        raw.latitude,
        raw.longitude,
        f64::from(raw.bedrooms),
        f64::from(raw.bathrooms),
        f64::from(raw.balconies),
        flag(raw.ready_to_move),
        flag(raw.parking),
        f64::from(furnishing.code()),
        f64::from(building_type.code()),
    ]))
}

// ---------------------------------------------------------------------------
// Derived metrics
// ---------------------------------------------------------------------------

/// Display metrics computed from a prediction and the original input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// `floor(price / area)` in whole currency units.
    pub price_per_unit_area: i64,
    pub total_rooms: u32,
    /// `parking + balconies + furnishing code`; may exceed the nominal 4.
    pub amenities_score: u32,
}

impl DerivedMetrics {
    /// Score as shown on the insights card, e.g. `"3/4"`.
    pub fn amenities_label(&self) -> String {
        format!("{}/{AMENITIES_SCORE_NOMINAL_MAX}", self.amenities_score)
    }
}

/// Compute the insight metrics for a prediction.
///
/// Expects input that already passed [`encode`]. A zero or non-finite area
/// is a `DivisionByZero` rather than an infinite price per unit. Sums and
/// quotients that do not fit their integer fields are `InvalidInput`.
pub fn derive_metrics(raw: &RawInput, price: Price) -> Result<DerivedMetrics, CoreError> {
    if !raw.area.is_finite() || raw.area <= 0.0 {
        return Err(CoreError::DivisionByZero(format!(
            "price per unit area needs a positive area, got {}",
            raw.area
        )));
    }
    if whole_units(price.trunc()).is_none() {
        return Err(CoreError::invalid(
            "price",
            format!("must be a finite amount within the displayable range, got {price}"),
        ));
    }

    let price_per_unit_area = whole_units((price / raw.area).floor()).ok_or_else(|| {
        CoreError::invalid(
            "area",
            format!("{} is too small to price {price} per unit area", raw.area),
        )
    })?;

    let total_rooms = raw.bedrooms.checked_add(raw.bathrooms).ok_or_else(|| {
        CoreError::invalid("bedrooms", "bedrooms plus bathrooms exceeds the room count limit")
    })?;

    let furnishing = raw.furnishing()?;
    let amenities_score = raw
        .balconies
        .checked_add(u32::from(raw.parking))
        .and_then(|score| score.checked_add(u32::from(furnishing.code())))
        .ok_or_else(|| {
            CoreError::invalid("balconies", "too many balconies to score amenities")
        })?;

    Ok(DerivedMetrics {
        price_per_unit_area,
        total_rooms,
        amenities_score,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
