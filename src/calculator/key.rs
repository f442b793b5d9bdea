use crate::calculator::operator::Operator;

/// Key literal that evaluates the pending calculation.
pub const EQUALS: &str = "=";
/// Key literal that resets the calculator.
pub const CLEAR: &str = "Clear";

/// A token entered into the calculator, classified by its shape.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Key<'a> {
    /// `=`
    Equals,
    /// `Clear`
    Clear,
    /// One of `+`, `-`, `*` or `/`.
    Operator(Operator),
    /// Anything else. Appended verbatim to the edit buffer.
    Text(&'a str),
}

impl<'a> Key<'a> {
    /// Classifies a raw token.
    ///
    /// No validation happens here: unknown text is treated as input and only
    /// fails once it is parsed into a value.
    ///
    /// # Example
    /// ```
    /// use pocketcalc::calculator::{key::Key, operator::Operator};
    ///
    /// assert_eq!(Key::classify("="), Key::Equals);
    /// assert_eq!(Key::classify("Clear"), Key::Clear);
    /// assert_eq!(Key::classify("/"), Key::Operator(Operator::Divide));
    /// assert_eq!(Key::classify("7"), Key::Text("7"));
    /// assert_eq!(Key::classify("clear"), Key::Text("clear"));
    /// ```
    #[must_use]
    pub fn classify(token: &'a str) -> Self {
        match token {
            EQUALS => Self::Equals,
            CLEAR => Self::Clear,
            _ => Operator::from_token(token).map_or(Self::Text(token), Self::Operator),
        }
    }
}
