//! Guarded division for derived rate and cost columns.

/// Plain ratio, e.g. cost per click.
pub const RATIO: f64 = 1.0;
/// Percentage, e.g. click-through rate.
pub const PERCENT: f64 = 100.0;
/// Per thousand, e.g. cost per thousand impressions.
pub const PER_MILLE: f64 = 1000.0;

/// Returns `numerator / denominator * scale`, or `0.0` when the denominator
/// is not positive or the result is not finite.
#[must_use]
pub fn safe_ratio(numerator: f64, denominator: f64, scale: f64) -> f64 {
    if denominator > 0.0 {
        let value = numerator / denominator * scale;
        if value.is_finite() {
            return value;
        }
    }
    0.0
}

/// Widens an integer count for ratio arithmetic.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn count(value: u64) -> f64 {
    value as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_denominator_yields_zero() {
        assert_eq!(safe_ratio(10.0, 0.0, PERCENT), 0.0);
    }

    #[test]
    fn negative_denominator_yields_zero() {
        assert_eq!(safe_ratio(10.0, -5.0, RATIO), 0.0);
    }

    #[test]
    fn nan_denominator_yields_zero() {
        assert_eq!(safe_ratio(10.0, f64::NAN, RATIO), 0.0);
    }

    #[test]
    fn overflow_yields_zero() {
        assert_eq!(safe_ratio(f64::MAX, 0.5, PER_MILLE), 0.0);
    }

    #[test]
    fn applies_scale() {
        assert!((safe_ratio(1.0, 4.0, RATIO) - 0.25).abs() < 1e-12);
        assert!((safe_ratio(1.0, 4.0, PERCENT) - 25.0).abs() < 1e-12);
        assert!((safe_ratio(1.0, 4.0, PER_MILLE) - 250.0).abs() < 1e-12);
    }

    #[test]
    fn negative_numerator_passes_through() {
        assert!((safe_ratio(-50.0, 10.0, RATIO) + 5.0).abs() < 1e-12);
    }
}
