//! Arithmetic behind the keypad buttons
//!
//! Type-safe operator enums keep button dispatch free of string comparison.

use crate::error::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};

/// Binary operator entered between two operands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operator {
    /// All operators in keypad order
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the symbol printed on the keypad and in history records
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Maps a typed character (`+ - * /`) to an operator
    #[must_use]
    pub const fn from_key(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operator to `lhs` and `rhs`
    pub fn apply(self, lhs: f64, rhs: f64) -> CalcResult<f64> {
        let result = match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => {
                if rhs == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                lhs / rhs
            }
        };
        check_finite(result)
    }
}

/// Single-operand functions on the advanced keypad (plus √ on both)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryFunction {
    /// Square root (√)
    SquareRoot,
    /// Sine of an angle in degrees
    Sine,
    /// Cosine of an angle in degrees
    Cosine,
    /// Tangent of an angle in degrees
    Tangent,
    /// Base-10 logarithm
    Log10,
}

impl UnaryFunction {
    /// Returns the keypad label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SquareRoot => "√",
            Self::Sine => "sin",
            Self::Cosine => "cos",
            Self::Tangent => "tan",
            Self::Log10 => "log",
        }
    }

    /// Applies the function, validating its domain first
    pub fn apply(self, value: f64) -> CalcResult<f64> {
        let result = match self {
            Self::SquareRoot => {
                if value < 0.0 {
                    return Err(self.domain_error(value));
                }
                value.sqrt()
            }
            Self::Sine => value.to_radians().sin(),
            Self::Cosine => value.to_radians().cos(),
            Self::Tangent => value.to_radians().tan(),
            Self::Log10 => {
                if value <= 0.0 {
                    return Err(self.domain_error(value));
                }
                value.log10()
            }
        };
        check_finite(result)
    }

    fn domain_error(self, value: f64) -> CalcError {
        CalcError::Domain {
            function: self.label(),
            value,
        }
    }
}

/// Operations on the single memory register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemoryOp {
    /// MC: reset to zero
    Clear,
    /// MR: copy into the display
    Recall,
    /// M+: add the display value
    Add,
    /// M-: subtract the display value
    Subtract,
}

impl MemoryOp {
    /// Returns the keypad label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Clear => "MC",
            Self::Recall => "MR",
            Self::Add => "M+",
            Self::Subtract => "M-",
        }
    }
}

/// Parses display text as an operand
pub fn parse_operand(text: &str) -> CalcResult<f64> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::Parse(text.to_string())),
    }
}

/// Rejects infinity and NaN
fn check_finite(result: f64) -> CalcResult<f64> {
    if result.is_finite() {
        Ok(result)
    } else {
        Err(CalcError::NonFinite(result))
    }
}
