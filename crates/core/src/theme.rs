//! Presentation settings for the estimate screen.
//!
//! One screen, parameterized by a [`Theme`]: the color scheme and whether
//! the price is revealed with a count-up animation.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Default duration of the animated price reveal.
pub const DEFAULT_REVEAL_DURATION_MS: u32 = 1_500;

pub const SCHEME_CLASSIC: &str = "classic";
pub const SCHEME_MIDNIGHT: &str = "midnight";

/// All valid color scheme names.
pub const VALID_SCHEMES: &[&str] = &[SCHEME_CLASSIC, SCHEME_MIDNIGHT];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    /// Light cards over a photo backdrop with green accents.
    Classic,
    /// Dark surfaces with the same accent family.
    Midnight,
}

/// Color tokens handed to the front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub accent: &'static str,
    pub accent_hover: &'static str,
    pub heading: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub surface: &'static str,
    pub border: &'static str,
}

impl ColorScheme {
    pub fn name(self) -> &'static str {
        match self {
            Self::Classic => SCHEME_CLASSIC,
            Self::Midnight => SCHEME_MIDNIGHT,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Classic => Palette {
                accent: "#2E7D32",
                accent_hover: "#1B5E20",
                heading: "#1a237e",
                text: "#333333",
                muted: "#666666",
                surface: "rgba(255, 255, 255, 0.85)",
                border: "#90A4AE",
            },
            Self::Midnight => Palette {
                accent: "#66BB6A",
                accent_hover: "#43A047",
                heading: "#C5CAE9",
                text: "#ECEFF1",
                muted: "#B0BEC5",
                surface: "rgba(18, 24, 38, 0.9)",
                border: "#455A64",
            },
        }
    }
}

impl FromStr for ColorScheme {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            SCHEME_CLASSIC => Ok(Self::Classic),
            SCHEME_MIDNIGHT => Ok(Self::Midnight),
            _ => Err(CoreError::Validation(format!(
                "Invalid color scheme '{s}'. Must be one of: {}",
                VALID_SCHEMES.join(", ")
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub color_scheme: ColorScheme,
    pub animate_price_reveal: bool,
    pub reveal_duration_ms: u32,
}

impl Theme {
    /// Static price display.
    pub fn classic() -> Self {
        Self {
            color_scheme: ColorScheme::Classic,
            animate_price_reveal: false,
            reveal_duration_ms: 0,
        }
    }

    /// Same palette, with the count-up price reveal.
    pub fn animated() -> Self {
        Self {
            color_scheme: ColorScheme::Classic,
            animate_price_reveal: true,
            reveal_duration_ms: DEFAULT_REVEAL_DURATION_MS,
        }
    }

    /// Build a theme from configuration values.
    pub fn from_settings(scheme: &str, animate: bool) -> Result<Self, CoreError> {
        let color_scheme = scheme.parse()?;
        let base = if animate { Self::animated() } else { Self::classic() };
        Ok(Self {
            color_scheme,
            ..base
        })
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}
