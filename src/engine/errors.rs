// ============================================================================
// Calculator Errors
// Error types for expression parsing and evaluation
// ============================================================================

use crate::numeral::NumeralError;
use std::fmt;

/// Errors that end the evaluation of one expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Not exactly three space separated parts
    MalformedExpression { input: String },
    /// Token is neither a decimal integer nor a valid Roman numeral
    InvalidOperand { token: String, source: NumeralError },
    /// Operand decoded but lies outside the accepted range
    OperandOutOfRange {
        token: String,
        value: i64,
        min: i64,
        max: i64,
    },
    /// One operand is Roman and the other Arabic
    NotationMismatch { input: String },
    /// Operator is not one of + - * /
    UnsupportedOperator { operator: String },
    /// Roman result could not be re-encoded
    ResultEncode { result: i64, source: NumeralError },
    /// Right operand of a division is zero
    DivisionByZero { input: String },
    /// Checked arithmetic failed
    ArithmeticOverflow { input: String },
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::MalformedExpression { input } => write!(
                f,
                "Expression {:?} is invalid: 3 space separated parts required.",
                input
            ),
            CalcError::InvalidOperand { token, .. } => write!(
                f,
                "Expression is invalid: unable to decode number {:?}.",
                token
            ),
            CalcError::OperandOutOfRange {
                token, min, max, ..
            } => write!(f, "Operand {:?} is out of bounds [{}, {}].", token, min, max),
            CalcError::NotationMismatch { input } => write!(
                f,
                "Expression {:?} is invalid: both parts must use same notation (arabic or roman).",
                input
            ),
            CalcError::UnsupportedOperator { operator } => write!(
                f,
                "Invalid operator used ({:?}), only '+', '-', '*' and '/' are allowed",
                operator
            ),
            CalcError::ResultEncode { result, source } => write!(
                f,
                "Error while encoding expression result ({}):\n{}",
                result, source
            ),
            CalcError::DivisionByZero { input } => write!(
                f,
                "Expression {:?} is invalid: division by zero.",
                input
            ),
            CalcError::ArithmeticOverflow { input } => write!(
                f,
                "Expression {:?} is invalid: arithmetic overflow.",
                input
            ),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CalcError::InvalidOperand { source, .. } | CalcError::ResultEncode { source, .. } => {
                Some(source)
            },
            _ => None,
        }
    }
}

/// Result type alias for evaluator operations
pub type CalcResult<T> = Result<T, CalcError>;
