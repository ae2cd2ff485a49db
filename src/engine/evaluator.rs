// ============================================================================
// Expression Evaluator
// Parses "<operand> <operator> <operand>" and computes the result
// ============================================================================

use super::errors::{CalcError, CalcResult};
use crate::domain::{CalculatorConfig, Expression, Notation, Operand, Operator};
use crate::numeral;
use std::fmt;

/// Outcome of a successful evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub expression: Expression,

    /// Raw integer result
    pub value: i64,

    /// Result in the expression's notation
    pub display: String,
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

/// Stateless evaluator bound to a configuration
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: CalculatorConfig,
}

impl Evaluator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Resolve one operand token.
    ///
    /// Decimal parsing is tried first; only if it fails is the token
    /// decoded as a Roman numeral. The value must then lie within the
    /// configured operand range.
    pub fn parse_operand(&self, token: &str) -> CalcResult<Operand> {
        let (value, notation) = match token.parse::<i64>() {
            Ok(value) => (value, Notation::Arabic),
            Err(_) => {
                let value = numeral::decode(token).map_err(|source| {
                    tracing::debug!(token, %source, "operand is not a number");
                    CalcError::InvalidOperand {
                        token: token.to_string(),
                        source,
                    }
                })?;
                (value, Notation::Roman)
            },
        };

        if !self.config.accepts_operand(value) {
            return Err(CalcError::OperandOutOfRange {
                token: token.to_string(),
                value,
                min: self.config.operand_min,
                max: self.config.operand_max,
            });
        }

        Ok(Operand::new(value, notation, token))
    }

    /// Parse an input line into an expression.
    ///
    /// The line must consist of exactly three parts separated by single
    /// spaces. Operands are resolved before the operator is looked at.
    pub fn parse(&self, input: &str) -> CalcResult<Expression> {
        let parts: Vec<&str> = input.split(' ').collect();
        let [left, operator, right] = parts.as_slice() else {
            return Err(CalcError::MalformedExpression {
                input: input.to_string(),
            });
        };

        let left = self.parse_operand(left)?;
        let right = self.parse_operand(right)?;

        if left.notation != right.notation {
            return Err(CalcError::NotationMismatch {
                input: input.to_string(),
            });
        }

        let operator: Operator = operator.parse().map_err(|_| CalcError::UnsupportedOperator {
            operator: operator.to_string(),
        })?;

        Ok(Expression {
            left,
            operator,
            right,
        })
    }

    /// Parse and evaluate an input line.
    ///
    /// Roman expressions produce a Roman result, so results outside
    /// [1, 3999] (including zero and negatives) fail with `ResultEncode`.
    ///
    /// # Example
    /// ```
    /// use roman_calculator::engine::Evaluator;
    ///
    /// let evaluator = Evaluator::default();
    /// assert_eq!(evaluator.evaluate("X + V").unwrap().display, "XV");
    /// assert_eq!(evaluator.evaluate("3 + 4").unwrap().display, "7");
    /// ```
    pub fn evaluate(&self, input: &str) -> CalcResult<Evaluation> {
        let expression = self.parse(input)?;

        if expression.operator == Operator::Div && expression.right.value == 0 {
            return Err(CalcError::DivisionByZero {
                input: input.to_string(),
            });
        }

        let value = expression
            .compute()
            .ok_or_else(|| CalcError::ArithmeticOverflow {
                input: input.to_string(),
            })?;

        let rendered = match expression.notation() {
            Notation::Arabic => value.to_string(),
            Notation::Roman => numeral::encode(value)
                .map_err(|source| CalcError::ResultEncode {
                    result: value,
                    source,
                })?,
        };

        tracing::debug!(%expression, value, result = %rendered, "evaluated expression");

        Ok(Evaluation {
            expression,
            value,
            display: rendered,
        })
    }
}
