use logos::Logos;

use crate::calculator::{
    key::{CLEAR, EQUALS},
    operator::Operator,
};

/// Represents a key in a calculator script.
///
/// Scripts spell out key presses, for example `7 . 1 * 7 =`. Blanks only
/// separate keys, so `7 0` and `70` both type seventy. Every line is an
/// independent calculation.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Digits and decimal points, such as `72345`, `.` or `7.0`.
    #[regex(r"[0-9.]+", |lex| lex.slice().to_string())]
    Numeral(String),
    /// `=`
    #[token("=")]
    Equals,
    /// `Clear`
    #[token("Clear")]
    Clear,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// End of a calculation.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        Token::NewLine
    })]
    NewLine,
    /// Blanks.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns the text to enter into the calculator for this token, or
    /// `None` for tokens that are not keys.
    ///
    /// # Example
    /// ```
    /// use pocketcalc::calculator::lexer::Token;
    ///
    /// assert_eq!(Token::Star.key(), Some("*"));
    /// assert_eq!(Token::Numeral("7.1".to_string()).key(), Some("7.1"));
    /// assert_eq!(Token::NewLine.key(), None);
    /// ```
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Numeral(text) => Some(text.as_str()),
            Self::Equals => Some(EQUALS),
            Self::Clear => Some(CLEAR),
            Self::Plus => Some(Operator::Add.symbol()),
            Self::Minus => Some(Operator::Subtract.symbol()),
            Self::Star => Some(Operator::Multiply.symbol()),
            Self::Slash => Some(Operator::Divide.symbol()),
            Self::Comment | Self::NewLine | Self::Ignored => None,
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the script being tokenized.
    pub line: usize,
}
