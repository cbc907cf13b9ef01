//! The calculator state machine.
//!
//! [`Calculator`] owns the display text, the pending operator and the stored
//! left operand, and changes them one logical [`Action`] at a time.
//! Operators are applied eagerly in entry order: setting a new operator
//! first evaluates the one already pending.
//!
//! # States
//!
//! | Phase | awaiting first digit | pending operator |
//! |-------|----------------------|------------------|
//! | [`Phase::Idle`] | yes | no |
//! | [`Phase::EnteringFirstOperand`] | no | no |
//! | [`Phase::OperatorPending`] | yes | yes |
//! | [`Phase::EnteringSecondOperand`] | no | yes |
//! | [`Phase::Error`] | - | no |
//!
//! [`Phase::Error`] is left only through [`Calculator::reset`]; every other
//! action is ignored while it is latched.
//!
//! # Example
//!
//! ```
//! use calc_core::{Action, Calculator, Digit, Operator};
//!
//! let mut calc = Calculator::default();
//! let three = Digit::new(3).unwrap();
//! let four = Digit::new(4).unwrap();
//!
//! calc.digit(three);
//! calc.set_operator(Operator::Add);
//! calc.digit(four);
//! calc.apply(Action::SetOperator(Operator::Add));
//!
//! assert_eq!(calc.display(), "7");
//! assert_eq!(calc.operator_display(), "+");
//! ```

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::action::{Action, Digit};
use crate::config::CalculatorConfig;
use crate::error::{CalculatorError, ConfigError};
use crate::numeric::{count_digits, fit_to_digits, format_result, parse_operand};
use crate::operator::Operator;

/// Text shown while the engine is in error mode.
pub const ERROR_DISPLAY: &str = "Error";

const INITIAL_DISPLAY: &str = "0";

/// Coarse state of the engine, derived from its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Idle,
    EnteringFirstOperand,
    OperatorPending,
    EnteringSecondOperand,
    Error,
}

/// Both display lines, captured together after an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplaySnapshot {
    /// Main display: the value being entered or the last result.
    pub display: String,
    /// Symbol of the pending operator, empty when none.
    pub operator: String,
    pub error: bool,
}

/// Calculator engine with immediate (left-to-right) evaluation.
#[derive(Debug, Clone)]
pub struct Calculator {
    config: CalculatorConfig,
    display: String,
    pending_operator: Option<Operator>,
    /// Left operand; only meaningful while `pending_operator` is set.
    stored_operand: Decimal,
    awaiting_first_digit: bool,
    error_mode: bool,
}

impl Calculator {
    /// Creates an engine in its reset state with the given limits.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration does not validate.
    pub fn new(config: CalculatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(
            max_input_digits = config.max_input_digits,
            max_result_decimals = config.max_result_decimals,
            "calculator created"
        );
        Ok(Self::initial(config))
    }

    fn initial(config: CalculatorConfig) -> Self {
        Self {
            config,
            display: INITIAL_DISPLAY.to_string(),
            pending_operator: None,
            stored_operand: Decimal::ZERO,
            awaiting_first_digit: true,
            error_mode: false,
        }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    // ─── accessors ───────────────────────────────────────────────────────────

    /// The main display text.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Symbol of the pending operator, or an empty string.
    pub fn operator_display(&self) -> &'static str {
        self.pending_operator.map_or("", |op| op.symbol())
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    pub fn is_error(&self) -> bool {
        self.error_mode
    }

    pub fn is_awaiting_first_digit(&self) -> bool {
        self.awaiting_first_digit
    }

    pub fn phase(&self) -> Phase {
        if self.error_mode {
            return Phase::Error;
        }
        match (self.pending_operator.is_some(), self.awaiting_first_digit) {
            (false, true) => Phase::Idle,
            (false, false) => Phase::EnteringFirstOperand,
            (true, true) => Phase::OperatorPending,
            (true, false) => Phase::EnteringSecondOperand,
        }
    }

    pub fn snapshot(&self) -> DisplaySnapshot {
        DisplaySnapshot {
            display: self.display.clone(),
            operator: self.operator_display().to_string(),
            error: self.error_mode,
        }
    }

    // ─── actions ─────────────────────────────────────────────────────────────

    /// Dispatches a logical action to the matching operation.
    pub fn apply(
        &mut self,
        action: Action,
    ) {
        match action {
            Action::Digit(digit) => self.digit(digit),
            Action::DecimalPoint => self.decimal_point(),
            Action::ToggleSign => self.toggle_sign(),
            Action::SetOperator(op) => self.set_operator(op),
            Action::Evaluate => self.evaluate(),
            Action::ClearEntry => self.clear_entry(),
            Action::Reset => self.reset(),
        }
    }

    /// Enters a digit.
    ///
    /// Starts a new operand when awaiting the first digit, replaces a lone
    /// `0` (keeping a `-` sign), and otherwise appends while the digit limit
    /// allows.
    pub fn digit(
        &mut self,
        digit: Digit,
    ) {
        if self.error_mode {
            return;
        }

        let c = digit.as_char();
        if self.awaiting_first_digit {
            self.display = c.to_string();
            self.awaiting_first_digit = false;
        } else if self.display == "0" {
            self.display = c.to_string();
        } else if self.display == "-0" {
            self.display = format!("-{c}");
        } else if count_digits(&self.display) >= self.config.max_input_digits {
            debug!(display = %self.display, "digit limit reached");
            return;
        } else {
            self.display.push(c);
        }
        trace!(display = %self.display, "digit entered");
    }

    /// Enters the decimal point, once per operand.
    pub fn decimal_point(&mut self) {
        if self.error_mode {
            return;
        }

        if self.awaiting_first_digit {
            self.display = "0.".to_string();
            self.awaiting_first_digit = false;
        } else if self.display.contains('.') {
            return;
        } else {
            self.display.push('.');
        }
        trace!(display = %self.display, "decimal point entered");
    }

    /// Flips the sign of the display text without re-parsing it.
    ///
    /// Pressed before the first digit of a second operand, it seeds `-0`.
    pub fn toggle_sign(&mut self) {
        if self.error_mode {
            return;
        }

        if self.awaiting_first_digit && self.pending_operator.is_some() {
            self.display = "-0".to_string();
        } else if let Some(unsigned) = self.display.strip_prefix('-') {
            self.display = unsigned.to_string();
        } else {
            self.display.insert(0, '-');
        }
        self.awaiting_first_digit = false;
        trace!(display = %self.display, "sign toggled");
    }

    /// Queues `op`, first evaluating any operation already pending.
    pub fn set_operator(
        &mut self,
        op: Operator,
    ) {
        self.evaluate();
        if self.error_mode {
            return;
        }

        match parse_operand(&self.display) {
            Ok(value) => {
                self.stored_operand = value;
                self.pending_operator = Some(op);
                self.awaiting_first_digit = true;
                debug!(operand = %value, operator = %op, "operator set");
            }
            Err(err) => self.enter_error_mode(err),
        }
    }

    /// Applies the pending operator to the stored operand and the display.
    pub fn evaluate(&mut self) {
        if self.error_mode {
            return;
        }
        let Some(op) = self.pending_operator else {
            return;
        };

        match self.compute(op) {
            Ok(result) => {
                debug!(lhs = %self.stored_operand, operator = %op, result = %result, "evaluated");
                self.display = result;
                self.pending_operator = None;
                self.awaiting_first_digit = true;
            }
            Err(err) => self.enter_error_mode(err),
        }
    }

    fn compute(
        &self,
        op: Operator,
    ) -> Result<String, CalculatorError> {
        let rhs = parse_operand(&self.display)?;
        let raw = op.apply(self.stored_operand, rhs)?;
        let fitted = fit_to_digits(
            raw,
            self.config.max_result_decimals,
            self.config.max_input_digits,
        )?;
        Ok(format_result(fitted))
    }

    /// Clears the current entry, keeping the pending operation.
    pub fn clear_entry(&mut self) {
        if self.error_mode {
            return;
        }

        self.display = INITIAL_DISPLAY.to_string();
        self.awaiting_first_digit = true;
        trace!("entry cleared");
    }

    /// Returns to the initial state; this also leaves error mode.
    pub fn reset(&mut self) {
        *self = Self::initial(self.config);
        debug!("calculator reset");
    }

    fn enter_error_mode(
        &mut self,
        err: CalculatorError,
    ) {
        warn!(error = %err, display = %self.display, "entering error mode");
        self.error_mode = true;
        self.display = ERROR_DISPLAY.to_string();
        self.pending_operator = None;
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::initial(CalculatorConfig::default())
    }
}
