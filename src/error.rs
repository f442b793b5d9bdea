/// Script errors.
///
/// Defines the errors that can occur while lexing a calculator script, such
/// as characters that do not correspond to any calculator key.
pub mod script_error;
/// Value errors.
///
/// Contains the errors produced when a numeral cannot be turned into a
/// calculator value. The engine itself never surfaces these: it collapses
/// them into the `Error` value.
pub mod value_error;

pub use script_error::ScriptError;
pub use value_error::ValueError;
