use std::fmt;

use rust_decimal::Decimal;

use crate::error::CalculatorError;

/// A binary operation queued between two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Symbol shown in the pending-operation display.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Reads an operator from the characters commonly used to type it.
    pub fn parse(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' | 'x' | 'X' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Computes `lhs <op> rhs` with checked decimal arithmetic.
    ///
    /// # Errors
    ///
    /// - [`CalculatorError::DivisionByZero`] when dividing by zero
    /// - [`CalculatorError::Overflow`] when the result leaves the decimal range
    ///
    /// # Examples
    ///
    /// ```
    /// use calc_core::{CalculatorError, Operator};
    /// use rust_decimal_macros::dec;
    ///
    /// assert_eq!(Operator::Subtract.apply(dec!(3), dec!(4)), Ok(dec!(-1)));
    /// assert_eq!(
    ///     Operator::Divide.apply(dec!(5), dec!(0)),
    ///     Err(CalculatorError::DivisionByZero)
    /// );
    /// ```
    pub fn apply(
        &self,
        lhs: Decimal,
        rhs: Decimal,
    ) -> Result<Decimal, CalculatorError> {
        let result = match self {
            Self::Add => lhs.checked_add(rhs),
            Self::Subtract => lhs.checked_sub(rhs),
            Self::Multiply => lhs.checked_mul(rhs),
            Self::Divide => {
                if rhs.is_zero() {
                    return Err(CalculatorError::DivisionByZero);
                }
                lhs.checked_div(rhs)
            }
        };
        result.ok_or(CalculatorError::Overflow)
    }
}

impl fmt::Display for Operator {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
