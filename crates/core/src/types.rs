/// Predicted prices are in whole or fractional currency units (INR).
pub type Price = f64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// 2^63, the first magnitude an `i64` cannot hold.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Convert an already rounded amount to whole units.
///
/// Returns `None` for non-finite values and anything outside the `i64`
/// range instead of saturating.
pub fn whole_units(amount: f64) -> Option<i64> {
    if amount.is_finite() && (-I64_LIMIT..I64_LIMIT).contains(&amount) {
        Some(amount as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_units_within_range() {
        assert_eq!(whole_units(2_500_000.0), Some(2_500_000));
        assert_eq!(whole_units(-4.0), Some(-4));
        assert_eq!(whole_units(-I64_LIMIT), Some(i64::MIN));
    }

    #[test]
    fn whole_units_rejects_instead_of_saturating() {
        assert_eq!(whole_units(I64_LIMIT), None);
        assert_eq!(whole_units(4.2e303), None);
        assert_eq!(whole_units(-1e19), None);
        assert_eq!(whole_units(f64::INFINITY), None);
        assert_eq!(whole_units(f64::NAN), None);
    }
}
