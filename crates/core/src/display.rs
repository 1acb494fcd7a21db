//! Display formatting for a completed estimate.
//!
//! A [`PriceReport`] only exists for a successful prediction: any failure
//! while deriving metrics propagates, so no placeholder price is rendered.

use serde::Serialize;

use crate::encoder::{derive_metrics, DerivedMetrics};
use crate::error::CoreError;
use crate::property::RawInput;
use crate::types::{whole_units, Price, Timestamp};

/// Currency symbol prefixed to every displayed amount.
pub const CURRENCY_SYMBOL: &str = "₹";

/// `strftime` pattern for the "Calculated on" line.
pub const CALCULATED_ON_FORMAT: &str = "%B %d, %Y";

/// Format whole currency units with comma thousands separators, e.g. `₹2,500,000`.
pub fn format_currency(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("{sign}{CURRENCY_SYMBOL}{grouped}")
}

/// Everything the result panel shows for one estimate.
#[derive(Debug, Clone, Serialize)]
pub struct PriceReport {
    /// Raw model output.
    pub price: Price,
    /// Headline price, truncated to whole units.
    pub formatted_price: String,
    pub metrics: DerivedMetrics,
    pub formatted_price_per_unit_area: String,
    pub amenities_label: String,
    pub calculated_on: String,
    pub calculated_at: Timestamp,
}

/// Build the result panel for a prediction made at `now`.
pub fn build_report(raw: &RawInput, price: Price, now: Timestamp) -> Result<PriceReport, CoreError> {
    let metrics = derive_metrics(raw, price)?;
    let headline = whole_units(price.trunc())
        .ok_or_else(|| CoreError::invalid("price", format!("{price} cannot be displayed")))?;

    Ok(PriceReport {
        price,
        formatted_price: format_currency(headline),
        formatted_price_per_unit_area: format_currency(metrics.price_per_unit_area),
        amenities_label: metrics.amenities_label(),
        metrics,
        calculated_on: now.format(CALCULATED_ON_FORMAT).to_string(),
        calculated_at: now,
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::TimeZone;

    use super::*;
    use crate::property::tests::villa;

    fn fixed_now() -> Timestamp {
        chrono::Utc.with_ymd_and_hms(2026, 10, 6, 9, 30, 0).unwrap()
    }

    #[test]
    fn currency_grouping() {
        assert_eq!(format_currency(0), "₹0");
        assert_eq!(format_currency(999), "₹999");
        assert_eq!(format_currency(1_000), "₹1,000");
        assert_eq!(format_currency(2_500_000), "₹2,500,000");
        assert_eq!(format_currency(-12_345), "-₹12,345");
    }

    #[test]
    fn report_for_villa() {
        let report = build_report(&villa(), 4_560_789.9, fixed_now()).unwrap();
        assert_eq!(report.formatted_price, "₹4,560,789");
        // 4_560_789.9 / 1200 = 3800.66..
        assert_eq!(report.metrics.price_per_unit_area, 3800);
        assert_eq!(report.formatted_price_per_unit_area, "₹3,800");
        assert_eq!(report.metrics.total_rooms, 4);
        // parking 1 + balconies 1 + semi-furnished 1
        assert_eq!(report.amenities_label, "3/4");
        assert_eq!(report.calculated_on, "October 06, 2026");
    }

    #[test]
    fn report_fails_instead_of_placeholder() {
        let raw = RawInput { area: 0.0, ..villa() };
        assert_matches!(
            build_report(&raw, 1_000_000.0, fixed_now()),
            Err(CoreError::DivisionByZero(_))
        );
    }

    #[test]
    fn oversized_price_is_an_error_not_a_saturated_amount() {
        assert_matches!(
            build_report(&villa(), 4.2e303, fixed_now()),
            Err(CoreError::InvalidInput { field: "price", .. })
        );
    }

    #[test]
    fn tiny_area_is_an_error_not_a_saturated_amount() {
        let raw = RawInput { area: 1e-300, ..villa() };
        assert_matches!(
            build_report(&raw, 1_000_000.0, fixed_now()),
            Err(CoreError::InvalidInput { field: "area", .. })
        );
    }
}
