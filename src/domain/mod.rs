// ============================================================================
// Domain Models Module
// Expression value objects and calculator configuration
// ============================================================================

pub mod config;
pub mod expression;

pub use config::{CalculatorConfig, ErrorPolicy};
pub use expression::{Expression, Notation, Operand, Operator};
