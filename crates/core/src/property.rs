//! Raw property attributes as entered on the estimate form, plus the closed
//! category sets the model was trained on.
//!
//! Category labels are kept as plain strings on [`RawInput`] so that an
//! unknown label is reported by the encoder as invalid input rather than
//! being lost in a deserialization error.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Form limits
// ---------------------------------------------------------------------------

/// Smallest area the form accepts (sq ft).
pub const FORM_MIN_AREA: f64 = 1.0;
/// Largest area the form accepts (sq ft).
pub const FORM_MAX_AREA: f64 = 10_000.0;
/// Largest bedroom count the form accepts.
pub const FORM_MAX_BEDROOMS: u32 = 10;
/// Largest bathroom count the form accepts.
pub const FORM_MAX_BATHROOMS: u32 = 10;
/// Largest balcony count the form accepts.
pub const FORM_MAX_BALCONIES: u32 = 5;

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// Label used by the form for a `true` yes/no answer.
pub const YES: &str = "Yes";
/// Label used by the form for a `false` yes/no answer.
pub const NO: &str = "No";

// ---------------------------------------------------------------------------
// Building type
// ---------------------------------------------------------------------------

/// Building type. Declaration order is the model's numeric encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingType {
    #[serde(rename = "Apartment")]
    Apartment,
    #[serde(rename = "Independent House")]
    IndependentHouse,
    #[serde(rename = "Villa")]
    Villa,
    #[serde(rename = "Penthouse")]
    Penthouse,
    #[serde(rename = "Builder Floor")]
    BuilderFloor,
}

impl BuildingType {
    /// All building types, in encoding order.
    pub const ALL: [BuildingType; 5] = [
        Self::Apartment,
        Self::IndependentHouse,
        Self::Villa,
        Self::Penthouse,
        Self::BuilderFloor,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Apartment => "Apartment",
            Self::IndependentHouse => "Independent House",
            Self::Villa => "Villa",
            Self::Penthouse => "Penthouse",
            Self::BuilderFloor => "Builder Floor",
        }
    }

    /// Zero-based position in [`BuildingType::ALL`].
    pub fn code(self) -> u8 {
        match self {
            Self::Apartment => 0,
            Self::IndependentHouse => 1,
            Self::Villa => 2,
            Self::Penthouse => 3,
            Self::BuilderFloor => 4,
        }
    }

    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|t| t.label()).collect()
    }
}

impl FromStr for BuildingType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.label() == s)
            .ok_or_else(|| {
                CoreError::invalid(
                    "building_type",
                    format!(
                        "'{s}' is not one of: {}",
                        Self::labels().join(", ")
                    ),
                )
            })
    }
}

impl fmt::Display for BuildingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Furnishing
// ---------------------------------------------------------------------------

/// Furnishing status, ordered from least to most furnished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Furnishing {
    #[serde(rename = "Unfurnished")]
    Unfurnished,
    #[serde(rename = "Semi-Furnished")]
    SemiFurnished,
    #[serde(rename = "Fully-Furnished")]
    FullyFurnished,
}

impl Furnishing {
    pub const ALL: [Furnishing; 3] = [
        Self::Unfurnished,
        Self::SemiFurnished,
        Self::FullyFurnished,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Unfurnished => "Unfurnished",
            Self::SemiFurnished => "Semi-Furnished",
            Self::FullyFurnished => "Fully-Furnished",
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::Unfurnished => 0,
            Self::SemiFurnished => 1,
            Self::FullyFurnished => 2,
        }
    }

    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|f| f.label()).collect()
    }
}

impl FromStr for Furnishing {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.label() == s)
            .ok_or_else(|| {
                CoreError::invalid(
                    "furnishing",
                    format!("'{s}' is not one of: {}", Self::labels().join(", ")),
                )
            })
    }
}

impl fmt::Display for Furnishing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Yes / No
// ---------------------------------------------------------------------------

/// Parse a form yes/no label. Only the exact labels are accepted.
fn yes_no_flag(label: &str) -> Option<bool> {
    match label {
        YES => Some(true),
        NO => Some(false),
        _ => None,
    }
}

/// Serde helper accepting either a JSON boolean or a `"Yes"`/`"No"` label.
pub mod yes_no {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Flag(bool),
        Label(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Repr::deserialize(deserializer)? {
            Repr::Flag(flag) => Ok(flag),
            Repr::Label(label) => super::yes_no_flag(&label).ok_or_else(|| {
                serde::de::Error::custom(format!(
                    "expected '{}' or '{}', got '{label}'",
                    super::YES,
                    super::NO
                ))
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Raw input
// ---------------------------------------------------------------------------

/// One submission of the estimate form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RawInput {
    /// Total area in square feet.
    #[validate(range(exclusive_min = 0.0, message = "must be greater than 0"))]
    pub area: f64,
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub bedrooms: u32,
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub bathrooms: u32,
    pub balconies: u32,
    /// Label from [`BuildingType`], exactly as entered.
    pub building_type: String,
    #[validate(range(min = -90.0, max = 90.0, message = "must be between -90 and 90"))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0, message = "must be between -180 and 180"))]
    pub longitude: f64,
    #[serde(deserialize_with = "yes_no::deserialize")]
    pub ready_to_move: bool,
    #[serde(deserialize_with = "yes_no::deserialize")]
    pub parking: bool,
    /// Label from [`Furnishing`], exactly as entered.
    pub furnishing: String,
}

/// Fields covered by the derived range checks, in reporting order.
const RANGE_CHECKED_FIELDS: [&str; 5] = ["area", "latitude", "longitude", "bedrooms", "bathrooms"];

impl RawInput {
    /// Parsed building type, or `InvalidInput` naming `building_type`.
    pub fn building_type(&self) -> Result<BuildingType, CoreError> {
        self.building_type.parse()
    }

    /// Parsed furnishing status, or `InvalidInput` naming `furnishing`.
    pub fn furnishing(&self) -> Result<Furnishing, CoreError> {
        self.furnishing.parse()
    }

    /// Check every field constraint, reporting the first violation.
    ///
    /// Order: finiteness, category sets, then numeric ranges. NaN slips
    /// through range comparisons, which is why finiteness comes first.
    pub fn check(&self) -> Result<(), CoreError> {
        check_finite("area", self.area)?;
        check_finite("latitude", self.latitude)?;
        check_finite("longitude", self.longitude)?;

        self.building_type()?;
        self.furnishing()?;

        self.validate().map_err(|errors| first_range_error(&errors))
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<(), CoreError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CoreError::invalid(field, format!("must be a finite number, got {value}")))
    }
}

fn first_range_error(errors: &ValidationErrors) -> CoreError {
    let field_errors = errors.field_errors();
    for field in RANGE_CHECKED_FIELDS {
        if let Some(first) = field_errors.get(field).and_then(|errs| errs.first()) {
            let reason = first
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| first.code.to_string());
            return CoreError::invalid(field, reason);
        }
    }
    CoreError::Internal(format!("Unmapped validation failure: {errors}"))
}
