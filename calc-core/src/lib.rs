//! Calculator engine for a desk-style calculator.
//!
//! Digits and operators arrive one key at a time; the engine keeps the
//! display text, evaluates chained operators eagerly in entry order and
//! latches into an error state on failures such as division by zero.
//! The crate has no I/O; front ends drive it through [`Action`]s and read
//! the two display strings back.

pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod numeric;
pub mod operator;

pub use action::{Action, Digit};
pub use config::CalculatorConfig;
pub use engine::{Calculator, DisplaySnapshot, ERROR_DISPLAY, Phase};
pub use error::{CalculatorError, ConfigError};
pub use operator::Operator;
