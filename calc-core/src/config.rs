use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Most significant digits a [`rust_decimal::Decimal`] can hold.
pub const MAX_SUPPORTED_DIGITS: usize = 28;

/// Limits applied by a [`Calculator`](crate::Calculator), fixed at construction.
///
/// # Example
///
/// ```
/// use calc_core::CalculatorConfig;
///
/// let config = CalculatorConfig {
///     max_input_digits: 10,
///     max_result_decimals: 3,
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Maximum number of digits in the display.
    ///
    /// Sign and decimal point are not counted.
    pub max_input_digits: usize,

    /// Decimal places results are rounded to (half-up).
    pub max_result_decimals: u32,
}

impl CalculatorConfig {
    pub const DEFAULT_MAX_INPUT_DIGITS: usize = 12;
    pub const DEFAULT_MAX_RESULT_DECIMALS: u32 = 5;

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - `max_input_digits` is not in `1..=28`
    /// - `max_result_decimals` is not smaller than `max_input_digits`
    ///
    /// # Example
    ///
    /// ```
    /// use calc_core::{CalculatorConfig, ConfigError};
    ///
    /// let config = CalculatorConfig {
    ///     max_input_digits: 4,
    ///     max_result_decimals: 4,
    /// };
    /// assert_eq!(
    ///     config.validate(),
    ///     Err(ConfigError::InvalidMaxResultDecimals { got: 4, digits: 4 })
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_input_digits == 0 || self.max_input_digits > MAX_SUPPORTED_DIGITS {
            return Err(ConfigError::InvalidMaxInputDigits {
                got: self.max_input_digits,
                max: MAX_SUPPORTED_DIGITS,
            });
        }
        if self.max_result_decimals as usize >= self.max_input_digits {
            return Err(ConfigError::InvalidMaxResultDecimals {
                got: self.max_result_decimals,
                digits: self.max_input_digits,
            });
        }
        Ok(())
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_input_digits: Self::DEFAULT_MAX_INPUT_DIGITS,
            max_result_decimals: Self::DEFAULT_MAX_RESULT_DECIMALS,
        }
    }
}
