#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all reasons a literal can fail to become a value.
pub enum ValueError {
    /// The literal is not a number at all.
    InvalidLiteral {
        /// The offending literal.
        literal: String,
    },
    /// The literal is an integer that does not fit into 64 bits.
    LiteralTooLarge {
        /// The offending literal.
        literal: String,
    },
}

impl std::fmt::Display for ValueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLiteral { literal } => write!(f, "'{literal}' is not a number."),
            Self::LiteralTooLarge { literal } => {
                write!(f, "Literal '{literal}' is too large.")
            },
        }
    }
}

impl std::error::Error for ValueError {}
