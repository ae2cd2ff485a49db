// ============================================================================
// Expression Domain Model
// ============================================================================

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

/// The numeral system an operand is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Notation {
    /// Plain decimal digits, e.g. "7"
    Arabic,
    /// Roman numeral, e.g. "VII"
    Roman,
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notation::Arabic => write!(f, "arabic"),
            Notation::Roman => write!(f, "roman"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operator {
    Add,
    Sub,
    Mul,
    /// Integer division, truncating toward zero
    Div,
}

impl Operator {
    pub const fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }

    /// Apply the operator. `None` on overflow or division by zero.
    #[inline]
    pub fn apply(self, left: i64, right: i64) -> Option<i64> {
        match self {
            Operator::Add => left.checked_add(right),
            Operator::Sub => left.checked_sub(right),
            Operator::Mul => left.checked_mul(right),
            Operator::Div => left.checked_div(right),
        }
    }
}

impl FromStr for Operator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Sub),
            "*" => Ok(Operator::Mul),
            "/" => Ok(Operator::Div),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A resolved operand: its value, how it was written, and the raw token.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Operand {
    pub value: i64,
    pub notation: Notation,
    pub token: String,
}

impl Operand {
    pub fn new(value: i64, notation: Notation, token: impl Into<String>) -> Self {
        Self {
            value,
            notation,
            token: token.into(),
        }
    }
}

// ============================================================================
// Expression
// ============================================================================

/// A parsed `<operand> <operator> <operand>` expression.
///
/// Both operands share a notation; the evaluator refuses to build an
/// expression otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Expression {
    pub left: Operand,
    pub operator: Operator,
    pub right: Operand,
}

impl Expression {
    /// Notation of the expression (that of its operands).
    pub fn notation(&self) -> Notation {
        self.left.notation
    }

    /// Raw arithmetic result.
    pub fn compute(&self) -> Option<i64> {
        self.operator.apply(self.left.value, self.right.value)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left.token, self.operator, self.right.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_parse() {
        assert_eq!("+".parse::<Operator>(), Ok(Operator::Add));
        assert_eq!("-".parse::<Operator>(), Ok(Operator::Sub));
        assert_eq!("*".parse::<Operator>(), Ok(Operator::Mul));
        assert_eq!("/".parse::<Operator>(), Ok(Operator::Div));
        assert!("%".parse::<Operator>().is_err());
        assert!("x".parse::<Operator>().is_err());
    }

    #[test]
    fn test_operator_apply() {
        assert_eq!(Operator::Add.apply(3, 4), Some(7));
        assert_eq!(Operator::Sub.apply(3, 4), Some(-1));
        assert_eq!(Operator::Mul.apply(10, 10), Some(100));
        assert_eq!(Operator::Div.apply(5, 2), Some(2));
        assert_eq!(Operator::Div.apply(-7, 2), Some(-3));
        assert_eq!(Operator::Div.apply(1, 0), None);
        assert_eq!(Operator::Add.apply(i64::MAX, 1), None);
    }

    #[test]
    fn test_expression_display() {
        let expr = Expression {
            left: Operand::new(10, Notation::Roman, "X"),
            operator: Operator::Mul,
            right: Operand::new(9, Notation::Roman, "IX"),
        };
        assert_eq!(expr.to_string(), "X * IX");
        assert_eq!(expr.notation(), Notation::Roman);
        assert_eq!(expr.compute(), Some(90));
    }
}
