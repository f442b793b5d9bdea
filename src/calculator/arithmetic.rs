use crate::{
    calculator::{operator::Operator, value::Value},
    util::num::round_to_significant_digits,
};

/// Number of significant digits float results are rounded to.
///
/// This hides binary representation noise such as `7.1 * 7` giving
/// `49.699999999999996`.
pub const SIGNIFICANT_DIGITS: usize = 15;

/// Turns a float result into a value, rounding away representation noise.
///
/// Results that overflow to infinity or are not a number become an error.
/// Rounding itself can push a value near `f64::MAX` to infinity, so the check
/// runs on the rounded value.
fn float_result(result: f64) -> Value {
    let rounded = round_to_significant_digits(result, SIGNIFICANT_DIGITS);
    if rounded.is_finite() { Value::from(rounded) } else { Value::Error }
}

/// Combines two values with either integer or float arithmetic.
///
/// Errors are sticky. Two integers use `integer` and stay an integer, wrapping
/// around on overflow. Anything else is projected onto floats, and the result
/// is rounded and collapsed back into an integer when it is integral.
fn combine(left: Value,
           right: Value,
           integer: fn(i64, i64) -> i64,
           float: fn(f64, f64) -> f64)
           -> Value {
    match (left, right) {
        (Value::Error, _) | (_, Value::Error) => Value::Error,
        (Value::Integer(a), Value::Integer(b)) => Value::Integer(integer(a, b)),
        _ => float_result(float(left.to_float(), right.to_float())),
    }
}

/// Adds two values.
///
/// # Example
/// ```
/// use pocketcalc::calculator::{arithmetic::add, value::Value};
///
/// assert_eq!(add(Value::Integer(3), Value::Integer(2)), Value::Integer(5));
/// assert_eq!(add(Value::Float(0.5), Value::Float(0.5)), Value::Integer(1));
/// assert_eq!(add(Value::Error, Value::Integer(2)), Value::Error);
/// ```
#[must_use]
pub fn add(left: Value, right: Value) -> Value {
    combine(left, right, i64::wrapping_add, |a, b| a + b)
}

/// Subtracts `right` from `left`.
#[must_use]
pub fn subtract(left: Value, right: Value) -> Value {
    combine(left, right, i64::wrapping_sub, |a, b| a - b)
}

/// Multiplies two values.
///
/// # Example
/// ```
/// use pocketcalc::calculator::{arithmetic::multiply, value::Value};
///
/// assert_eq!(multiply(Value::Float(7.1), Value::Integer(7)), Value::Float(49.7));
/// assert_eq!(multiply(Value::Integer(i64::MAX), Value::Integer(2)), Value::Integer(-2));
/// assert_eq!(multiply(Value::Float(1e200), Value::Float(1e200)), Value::Error);
/// ```
#[must_use]
pub fn multiply(left: Value, right: Value) -> Value {
    combine(left, right, i64::wrapping_mul, |a, b| a * b)
}

/// Divides `left` by `right`.
///
/// Division always happens on floats; the quotient is rounded and an integral
/// quotient collapses back into an integer. A zero divisor yields an error
/// whatever `left` is.
///
/// # Example
/// ```
/// use pocketcalc::calculator::{arithmetic::divide, value::Value};
///
/// assert_eq!(divide(Value::Integer(7), Value::Integer(2)), Value::Float(3.5));
/// assert_eq!(divide(Value::Integer(6), Value::Integer(3)), Value::Integer(2));
/// assert_eq!(divide(Value::Integer(6), Value::Float(0.0)), Value::Error);
/// ```
#[must_use]
pub fn divide(left: Value, right: Value) -> Value {
    if left.is_error() || right.is_error() || right.is_zero() {
        return Value::Error;
    }
    float_result(left.to_float() / right.to_float())
}

/// Applies `operator` to two values.
#[must_use]
pub fn apply(operator: Operator, left: Value, right: Value) -> Value {
    match operator {
        Operator::Add => add(left, right),
        Operator::Subtract => subtract(left, right),
        Operator::Multiply => multiply(left, right),
        Operator::Divide => divide(left, right),
    }
}
