//! Front-end settings loaded from a TOML file.
//!
//! ```toml
//! [calculator]
//! max_input_digits = 12
//! max_result_decimals = 5
//!
//! [display]
//! width = 16
//! ```
//!
//! Every key is optional. Load order (later overrides earlier):
//! 1. Default values
//! 2. Settings file
//! 3. Command-line flags

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use calc_core::{Calculator, CalculatorConfig};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Terminal rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplaySettings {
    /// Minimum width of the rendered frame, in characters.
    pub width: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self { width: 16 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub calculator: CalculatorConfig,
    pub display: DisplaySettings,
}

impl Settings {
    /// Parses settings from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid settings")
    }

    /// Reads settings from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        info!(path = %path.display(), "loading settings");
        let text = fs::read_to_string(path)
            .with_context(|| format!("cannot read settings file '{}'", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in settings file '{}'", path.display()))
    }

    /// Applies command-line overrides on top of the loaded values.
    pub fn with_overrides(
        mut self,
        max_input_digits: Option<usize>,
        max_result_decimals: Option<u32>,
    ) -> Self {
        if let Some(digits) = max_input_digits {
            self.calculator.max_input_digits = digits;
        }
        if let Some(decimals) = max_result_decimals {
            self.calculator.max_result_decimals = decimals;
        }
        self
    }

    /// Builds an engine from the calculator section.
    pub fn build_calculator(&self) -> Result<Calculator> {
        Calculator::new(self.calculator).context("invalid calculator configuration")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_text_yields_defaults() {
        let settings = Settings::from_toml("").unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.calculator.max_input_digits, 12);
        assert_eq!(settings.calculator.max_result_decimals, 5);
        assert_eq!(settings.display.width, 16);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let settings = Settings::from_toml("[calculator]\nmax_result_decimals = 2\n").unwrap();

        assert_eq!(settings.calculator.max_input_digits, 12);
        assert_eq!(settings.calculator.max_result_decimals, 2);
        assert_eq!(settings.display.width, 16);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = Settings::from_toml("[display]\ncolour = \"red\"\n");

        assert!(result.is_err());
    }

    #[test]
    fn overrides_replace_file_values() {
        let settings = Settings::from_toml("[calculator]\nmax_input_digits = 8\n")
            .unwrap()
            .with_overrides(Some(10), None);

        assert_eq!(settings.calculator.max_input_digits, 10);
        assert_eq!(settings.calculator.max_result_decimals, 5);
    }

    #[test]
    fn build_calculator_validates_configuration() {
        let settings = Settings::default().with_overrides(Some(3), Some(3));

        let err = settings.build_calculator().unwrap_err();

        assert_eq!(err.to_string(), "invalid calculator configuration");
        assert!(format!("{err:#}").contains("max result decimals"));
    }

    #[test]
    fn settings_round_trip_through_toml() {
        let settings = Settings::default().with_overrides(Some(9), Some(2));

        let text = toml::to_string_pretty(&settings).unwrap();

        assert!(text.contains("[calculator]"));
        assert!(text.contains("[display]"));
        assert_eq!(Settings::from_toml(&text).unwrap(), settings);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Settings::load(Path::new("/nonexistent/calc.toml")).unwrap_err();

        assert!(err.to_string().contains("cannot read settings file"));
    }
}
