// ============================================================================
// Numeral Module
// Roman numeral codec: encoding, decoding and validation
// ============================================================================
//
// This module provides:
// - encode / encode_into: integer -> canonical numeral
// - decode / validate: numeral -> integer, with well-formedness checks
// - Roman: value type restricted to [1, 3999]
// - Symbol / SYMBOL_TABLE: the seven canonical letters
// - NumeralError: tagged error kinds for range and format failures
//
// Design principles:
// - Pure functions, no shared mutable state
// - Symbol table is a compile-time constant
// - All failures return Result (no panics)

mod decode;
mod encode;
mod errors;
mod roman;
mod symbol;

pub use decode::{decode, validate};
pub use encode::{encode, encode_into, MAX_VALUE, MIN_VALUE};
pub use errors::{NumeralError, NumeralResult};
pub use roman::Roman;
pub use symbol::{Symbol, SYMBOL_TABLE};
