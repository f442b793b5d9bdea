/// Numeric conversion helpers.
///
/// This module provides the conversions between `i64` and `f64` that the
/// value model depends on. The float-collapsing rule (a float with an exact
/// integer representation becomes an integer) is built on
/// [`num::f64_to_i64_exact`], and float results are cleaned up with
/// [`num::round_to_significant_digits`].
pub mod num;
