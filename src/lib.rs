//! # pocketcalc
//!
//! pocketcalc is the engine of a four-function pocket calculator written in
//! Rust. It takes key presses one at a time, keeps at most two operands and
//! one pending operator, and reports what the calculator display shows.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use logos::Logos;

use crate::{
    calculator::{
        engine::Calculator,
        lexer::{LexerExtras, Token},
    },
    error::ScriptError,
};

/// The calculator itself.
///
/// This module ties together the value model, the arithmetic helpers, the
/// key classification and the state machine into the [`Calculator`] engine
/// that a front end drives.
///
/// # Responsibilities
/// - Defines the `Value` type and the arithmetic on it.
/// - Classifies tokens into keys and tracks the calculator phase.
/// - Accumulates operands and applies the operator and equals rules.
pub mod calculator;
/// Provides the error types of the crate.
///
/// The engine never fails: every illegal calculation turns into the `Error`
/// value. Errors only exist at the edges, when a literal is parsed on its own
/// or when a script contains something that is not a key.
pub mod error;
/// General numeric helpers.
///
/// This module provides the conversions between `i64` and `f64` and the
/// rounding used by the value model.
pub mod util;

/// The outcome of one line of a calculator script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculation {
    /// The script line the calculation started on.
    pub line:    usize,
    /// The keys entered, in order.
    pub keys:    Vec<String>,
    /// What the display showed after the last key.
    pub display: String,
}

/// Clears the calculator, enters every key and returns the display.
///
/// # Example
/// ```
/// use pocketcalc::{calculator::engine::Calculator, run_line};
///
/// let mut calculator = Calculator::new();
/// assert_eq!(run_line(&mut calculator, ["7", ".", "0", "*", "7", "="]), "49");
/// assert_eq!(run_line(&mut calculator, ["7", "/", "0", "="]), "Error");
/// ```
pub fn run_line<I>(calculator: &mut Calculator, keys: I) -> String
    where I: IntoIterator,
          I::Item: AsRef<str>
{
    calculator.clear();
    for key in keys {
        calculator.enter(key.as_ref());
    }
    calculator.current_display()
}

/// Replays every line of a calculator script.
///
/// Each non-empty line is an independent calculation on a cleared
/// calculator. Keys are `=`, `Clear`, `+`, `-`, `*`, `/` and numerals made of
/// digits and decimal points; `//` starts a comment.
///
/// # Errors
/// Returns [`ScriptError::UnexpectedToken`] if the script contains anything
/// else.
///
/// # Examples
/// ```
/// use pocketcalc::run_script;
///
/// let results = run_script("3 + 2 = * 6 =\n// a comment\n7 . 1 * 7 =").unwrap();
/// let displays: Vec<_> = results.iter().map(|c| c.display.as_str()).collect();
/// assert_eq!(displays, ["30", "49.7"]);
/// assert_eq!(results[1].line, 3);
///
/// assert!(run_script("3 + x =").is_err());
/// ```
pub fn run_script(source: &str) -> Result<Vec<Calculation>, ScriptError> {
    let mut calculator = Calculator::new();
    let mut calculations = Vec::new();
    let mut pending: Option<(usize, Vec<String>)> = None;
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        let line = lexer.extras.line;
        match token {
            Ok(Token::NewLine) => {
                if let Some((line, keys)) = pending.take() {
                    calculations.push(replay(&mut calculator, line, keys));
                }
            },
            Ok(token) => {
                if let Some(key) = token.key() {
                    pending.get_or_insert_with(|| (line, Vec::new()))
                           .1
                           .push(key.to_string());
                }
            },
            Err(()) => {
                return Err(ScriptError::UnexpectedToken { token: lexer.slice().to_string(),
                                                          line });
            },
        }
    }

    if let Some((line, keys)) = pending {
        calculations.push(replay(&mut calculator, line, keys));
    }

    Ok(calculations)
}

fn replay(calculator: &mut Calculator, line: usize, keys: Vec<String>) -> Calculation {
    let display = run_line(calculator, &keys);
    Calculation { line, keys, display }
}
