/// Smallest `f64` that no longer fits into an `i64` (`2^63`).
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;
/// Smallest `f64` that still fits into an `i64` (`-2^63`).
const I64_LOWER_BOUND: f64 = -9_223_372_036_854_775_808.0;

/// Converts an `f64` to `i64` if and only if the value is an exact integer
/// that fits into the `i64` range.
///
/// Non-finite values, fractional values and values outside of
/// `[-2^63, 2^63)` yield `None`. Negative zero converts to `0`.
///
/// ## Parameters
/// - `value`: The floating-point value to convert.
///
/// ## Returns
/// - `Some(i64)`: The integer the value represents exactly.
/// - `None`: If the value has no exact `i64` representation.
///
/// ## Example
/// ```
/// use pocketcalc::util::num::f64_to_i64_exact;
///
/// assert_eq!(f64_to_i64_exact(8.0), Some(8));
/// assert_eq!(f64_to_i64_exact(-0.0), Some(0));
/// assert_eq!(f64_to_i64_exact(49.7), None);
/// assert_eq!(f64_to_i64_exact(1e20), None);
/// assert_eq!(f64_to_i64_exact(f64::NAN), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn f64_to_i64_exact(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    // Upper bound is exclusive: `i64::MAX as f64` already rounds up to 2^63.
    if !(I64_LOWER_BOUND..I64_UPPER_BOUND).contains(&value) {
        return None;
    }
    if value.fract() != 0.0 {
        return None;
    }
    Some(value as i64)
}

/// Projects an `i64` onto the `f64` number line.
///
/// Unlike a checked conversion this never fails: integers beyond `2^53`
/// are rounded to the nearest representable `f64`, which is the behavior
/// mixed integer/float arithmetic relies on.
///
/// ## Example
/// ```
/// use pocketcalc::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(7), 7.0);
/// assert_eq!(i64_to_f64(-3), -3.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Rounds a float to the given number of significant decimal digits.
///
/// The rounding goes through the decimal representation, so the result is
/// the `f64` closest to the rounded decimal number. Non-finite values and
/// a `digits` of zero are returned unchanged.
///
/// ## Example
/// ```
/// use pocketcalc::util::num::round_to_significant_digits;
///
/// assert_eq!(round_to_significant_digits(7.1 * 7.0, 15), 49.7);
/// assert_eq!(round_to_significant_digits(0.1 + 0.2, 15), 0.3);
/// assert_eq!(round_to_significant_digits(1234.5678, 3), 1230.0);
/// ```
#[must_use]
pub fn round_to_significant_digits(value: f64, digits: usize) -> f64 {
    if !value.is_finite() || digits == 0 {
        return value;
    }
    format!("{:.*e}", digits - 1, value).parse().unwrap_or(value)
}
