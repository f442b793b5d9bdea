/// Arithmetic on calculator values.
///
/// The four helpers `add`, `subtract`, `multiply` and `divide` are free
/// functions over two values, keeping `Value` a plain data holder.
///
/// # Responsibilities
/// - Integer arithmetic when both operands are integers, float arithmetic
///   otherwise.
/// - Sticky errors, division by zero and integer overflow yield `Error`.
/// - Rounding float results and collapsing integral ones into integers.
pub mod arithmetic;
/// The token-driven calculator engine.
///
/// Holds the accumulator, the pending operator and second operand, and the
/// edit buffer, and applies the operator and equals rules to them.
pub mod engine;
/// Classification of raw tokens into calculator keys.
pub mod key;
/// The lexer for calculator scripts.
///
/// Splits a script into key tokens with line numbers, so that a whole
/// sequence of calculations can be replayed against the engine.
pub mod lexer;
/// The four arithmetic operators and their priorities.
pub mod operator;
/// The explicit state machine of the engine.
///
/// Declares the phases of the calculator, the transition table between them
/// and the guard that decides what entering an operator does.
pub mod state;
/// The calculator value type.
///
/// Defines `Value`, a tagged number that is either an integer, a float or an
/// error, together with parsing, formatting and coercions.
pub mod value;
