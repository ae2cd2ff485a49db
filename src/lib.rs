// ============================================================================
// Roman Calculator Library
// Arabic/Roman numeral arithmetic with a strict Roman numeral codec
// ============================================================================

//! # Roman Calculator
//!
//! An interactive calculator for single binary expressions whose operands
//! are written either in Arabic or in Roman notation.
//!
//! ## Features
//!
//! - **Roman numeral codec**: canonical encoding for [1, 3999] and decoding
//!   with well-formedness checks
//! - **Typed errors** for every failure kind, range and format alike
//! - **Expression evaluator** for `<operand> <operator> <operand>`
//! - **Interactive session** over any reader/writer pair, with pluggable
//!   event handlers
//!
//! ## Example
//!
//! ```rust
//! use roman_calculator::prelude::*;
//!
//! assert_eq!(encode(1994).unwrap(), "MCMXCIV");
//! assert_eq!(decode("XL").unwrap(), 40);
//!
//! let evaluator = Evaluator::new(CalculatorConfig::classic());
//! let result = evaluator.evaluate("X + V").unwrap();
//! assert_eq!(result.display, "XV");
//! assert_eq!(result.value, 15);
//!
//! let err = evaluator.evaluate("X + 3").unwrap_err();
//! assert!(matches!(err, CalcError::NotationMismatch { .. }));
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeral;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        CalculatorConfig, ErrorPolicy, Expression, Notation, Operand, Operator,
    };
    pub use crate::engine::{CalcError, CalcResult, Evaluation, Evaluator, Session, SessionOutcome};
    pub use crate::interfaces::{
        EndReason, EventHandler, LoggingEventHandler, NoOpEventHandler, RecordingEventHandler,
        SessionEvent,
    };
    pub use crate::numeral::{decode, encode, validate, NumeralError, NumeralResult, Roman};
}
