/// Represents one of the four arithmetic operators of the calculator.
///
/// The absence of an operator is modelled as `Option<Operator>`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`*`)
    Multiply,
    /// Division (`/`)
    Divide,
}

/// Maps operator key literals to operators.
const OPERATOR_TOKENS: [(&str, Operator); 4] = [("+", Operator::Add),
                                                ("-", Operator::Subtract),
                                                ("*", Operator::Multiply),
                                                ("/", Operator::Divide)];

impl Operator {
    /// Looks up the operator for a key literal.
    ///
    /// # Example
    /// ```
    /// use pocketcalc::calculator::operator::Operator;
    ///
    /// assert_eq!(Operator::from_token("*"), Some(Operator::Multiply));
    /// assert_eq!(Operator::from_token("x"), None);
    /// ```
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        OPERATOR_TOKENS.iter()
                       .find(|(literal, _)| *literal == token)
                       .map(|(_, operator)| *operator)
    }

    /// Returns the key literal of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Returns `true` for `*` and `/`.
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Multiply | Self::Divide)
    }

    /// Returns `true` for `+` and `-`.
    #[must_use]
    pub const fn is_additive(self) -> bool {
        matches!(self, Self::Add | Self::Subtract)
    }

    /// Returns `true` if entering `self` while `stored` is pending would
    /// require evaluating the right-hand side first.
    ///
    /// # Example
    /// ```
    /// use pocketcalc::calculator::operator::Operator;
    ///
    /// assert!(Operator::Multiply.outranks(Some(Operator::Add)));
    /// assert!(!Operator::Add.outranks(Some(Operator::Multiply)));
    /// assert!(!Operator::Divide.outranks(Some(Operator::Multiply)));
    /// assert!(!Operator::Divide.outranks(None));
    /// ```
    #[must_use]
    pub const fn outranks(self, stored: Option<Self>) -> bool {
        match stored {
            Some(stored) => self.is_multiplicative() && stored.is_additive(),
            None => false,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
