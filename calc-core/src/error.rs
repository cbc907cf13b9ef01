use thiserror::Error;

/// Failures that can occur while the engine computes a value.
///
/// These never leave the engine: [`Calculator`](crate::Calculator) catches
/// them and latches into error mode, showing `"Error"` until reset.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CalculatorError {
    /// A division was requested with a zero right-hand operand.
    #[error("division by zero")]
    DivisionByZero,

    /// The display text could not be read as a number.
    #[error("malformed operand '{0}'")]
    MalformedOperand(String),

    /// The result does not fit the decimal type or the display.
    #[error("result out of range")]
    Overflow,
}

/// Errors returned when a [`CalculatorConfig`](crate::CalculatorConfig) is
/// rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The digit limit must allow at least one digit and stay within decimal precision.
    #[error("max input digits must be between 1 and {max}, got {got}")]
    InvalidMaxInputDigits { got: usize, max: usize },

    /// Results must keep room for at least one integer digit.
    #[error("max result decimals must be smaller than max input digits ({digits}), got {got}")]
    InvalidMaxResultDecimals { got: u32, digits: usize },
}
