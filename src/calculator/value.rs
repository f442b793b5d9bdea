use std::{num::IntErrorKind, str::FromStr};

use crate::{
    error::ValueError,
    util::num::{f64_to_i64_exact, i64_to_f64},
};

/// The text an error value displays as.
pub const ERROR_TEXT: &str = "Error";

/// Represents a number held by the calculator.
///
/// A value is immutable: every arithmetic operation produces a new one. The
/// `Error` variant is sticky, any arithmetic involving it yields `Error`
/// again, so a failed calculation stays visible until the calculator is
/// cleared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A 64 bit signed integer.
    Integer(i64),
    /// A double precision floating-point number.
    Float(f64),
    /// The result of an undefined or illegal calculation.
    Error,
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    /// Collapses floats with an exact integer representation into
    /// [`Value::Integer`].
    ///
    /// # Example
    /// ```
    /// use pocketcalc::calculator::value::Value;
    ///
    /// assert_eq!(Value::from(8.0), Value::Integer(8));
    /// assert_eq!(Value::from(3.5), Value::Float(3.5));
    /// ```
    fn from(v: f64) -> Self {
        f64_to_i64_exact(v).map_or(Self::Float(v), Self::Integer)
    }
}

impl FromStr for Value {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s)
    }
}

impl Value {
    /// Parses a numeral into a value, reporting why parsing failed.
    ///
    /// Text containing a decimal point is read as a float (and collapsed to
    /// an integer if it is integral), any other text is read as an integer.
    /// The literal `Error` reads back as the error value, so every displayed
    /// value can be parsed again.
    ///
    /// # Example
    /// ```
    /// use pocketcalc::{calculator::value::Value, error::ValueError};
    ///
    /// assert_eq!(Value::try_parse("72345"), Ok(Value::Integer(72345)));
    /// assert_eq!(Value::try_parse("7.1"), Ok(Value::Float(7.1)));
    /// assert_eq!(Value::try_parse("7.0"), Ok(Value::Integer(7)));
    /// assert!(matches!(Value::try_parse("7..1"), Err(ValueError::InvalidLiteral { .. })));
    /// ```
    pub fn try_parse(text: &str) -> Result<Self, ValueError> {
        if text == ERROR_TEXT {
            return Ok(Self::Error);
        }

        if text.contains('.') {
            return text.parse::<f64>()
                       .map(Self::from)
                       .map_err(|_| ValueError::InvalidLiteral { literal: text.to_string() });
        }

        text.parse::<i64>().map(Self::Integer).map_err(|e| {
                                                   let literal = text.to_string();
                                                   match e.kind() {
                                                       IntErrorKind::PosOverflow
                                                       | IntErrorKind::NegOverflow => {
                                                           ValueError::LiteralTooLarge { literal }
                                                       },
                                                       _ => ValueError::InvalidLiteral { literal },
                                                   }
                                               })
    }

    /// Parses a numeral into a value.
    ///
    /// This never fails: unparsable text becomes [`Value::Error`].
    ///
    /// # Example
    /// ```
    /// use pocketcalc::calculator::value::Value;
    ///
    /// assert_eq!(Value::parse("49.7"), Value::Float(49.7));
    /// assert_eq!(Value::parse("4x"), Value::Error);
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self::try_parse(text).unwrap_or_else(|e| {
                                 log::debug!("{e}");
                                 Self::Error
                             })
    }

    /// Returns `true` if the value is [`Value::Error`].
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Returns `true` if the value is [`Value::Integer`].
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
    }

    /// Returns `true` if the value is [`Value::Float`].
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float(..))
    }

    /// Returns `true` if the value's float projection equals `0.0`.
    ///
    /// Since an error projects to `0.0`, errors count as zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.to_float() == 0.0
    }

    /// Coerces the value to an `i64`.
    ///
    /// Floats are truncated toward zero (saturating at the `i64` bounds),
    /// errors coerce to `0`.
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub const fn to_integer(&self) -> i64 {
        match self {
            Self::Integer(n) => *n,
            Self::Float(r) => *r as i64,
            Self::Error => 0,
        }
    }

    /// Coerces the value to an `f64`. Errors coerce to `0.0`.
    #[must_use]
    pub const fn to_float(&self) -> f64 {
        match self {
            Self::Integer(n) => i64_to_f64(*n),
            Self::Float(r) => *r,
            Self::Error => 0.0,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            // Keep a decimal point on integral floats so they read back as floats.
            Self::Float(r) if r.is_finite() && r.fract() == 0.0 => write!(f, "{r:.1}"),
            Self::Float(r) => write!(f, "{r}"),
            Self::Error => write!(f, "{ERROR_TEXT}"),
        }
    }
}
