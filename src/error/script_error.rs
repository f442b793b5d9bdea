#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while reading a calculator script.
pub enum ScriptError {
    /// Found input that is not a calculator key.
    UnexpectedToken {
        /// The text encountered.
        token: String,
        /// The script line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },
        }
    }
}

impl std::error::Error for ScriptError {}
