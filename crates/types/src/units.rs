//! Helpers for horizontal positions measured in points.
//!
//! Tab math compares and rounds positions with fixed constants so that two runs
//! over the same input produce the same tie-breaks.

/// Minimum distance a tab stop must lie beyond the cursor to be selected.
pub const POSITION_EPSILON: f32 = 0.001;

/// A position as a whole number of thousandths, rounded half up.
///
/// Grid arithmetic runs on these so that multiples of decimal intervals such as
/// `0.1` are exact. Out-of-range values saturate.
pub fn to_thousandths(value: f32) -> i64 {
    (f64::from(value) * 1000.0 + 0.5).floor() as i64
}

pub fn from_thousandths(thousandths: i64) -> f32 {
    (thousandths as f64 / 1000.0) as f32
}

/// Returns true when `target` lies strictly beyond `origin` by more than the epsilon.
pub fn is_beyond(target: f32, origin: f32) -> bool {
    target - origin > POSITION_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_keeps_three_decimals() {
        assert_eq!(to_thousandths(12.0), 12000);
        assert_eq!(to_thousandths(12.34567), 12346);
        assert_eq!(to_thousandths(0.0004), 0);
    }

    #[test]
    fn test_rounding_half_goes_up() {
        assert_eq!(to_thousandths(-1.0625), -1062);
        assert_eq!(to_thousandths(1.0625), 1063);
    }

    #[test]
    fn test_thousandths_are_exact_for_decimals() {
        assert_eq!(to_thousandths(0.7), 700);
        assert_eq!(to_thousandths(35.9999), 36000);
        assert_eq!(to_thousandths(-10.0), -10000);
        assert_eq!(from_thousandths(800), 0.8);
        assert_eq!(from_thousandths(to_thousandths(12.7) * 3), 38.1);
    }

    #[test]
    fn test_is_beyond_uses_epsilon() {
        assert!(is_beyond(10.01, 10.0));
        assert!(!is_beyond(10.0005, 10.0));
        assert!(!is_beyond(10.0, 10.0));
        assert!(!is_beyond(9.0, 10.0));
    }
}
