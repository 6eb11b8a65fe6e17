//! Numeric helpers for option values

/// Round to the nearest integer, halfway cases away from zero
///
/// Values outside the `i64` range saturate; NaN becomes 0.
///
/// # Examples
///
/// ```
/// use cloparser::round_to_i64;
///
/// assert_eq!(round_to_i64(2.5), 3);
/// assert_eq!(round_to_i64(-2.5), -3);
/// assert_eq!(round_to_i64(-2.4), -2);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_to_i64(v: f64) -> i64 {
    v.round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturates() {
        assert_eq!(round_to_i64(f64::MAX), i64::MAX);
        assert_eq!(round_to_i64(f64::NEG_INFINITY), i64::MIN);
        assert_eq!(round_to_i64(f64::NAN), 0);
    }

    #[test]
    fn test_small_values() {
        assert_eq!(round_to_i64(0.49), 0);
        assert_eq!(round_to_i64(0.5), 1);
        assert_eq!(round_to_i64(-0.5), -1);
    }
}
