// ============================================================================
// Numeral Errors
// Error types for Roman numeral encoding and decoding
// ============================================================================

use std::fmt;

/// Errors that can occur while encoding or decoding Roman numerals.
///
/// `OutOfRange` is the only encode failure; every other variant is a
/// decode (format) failure and carries the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NumeralError {
    /// Value cannot be written as a Roman numeral (outside [1, 3999])
    OutOfRange { value: i64 },
    /// Input string is empty
    Empty,
    /// Input contains a character outside I, V, X, L, C, D, M
    InvalidSymbol {
        input: String,
        symbol: char,
        position: usize,
    },
    /// A symbol is larger than both symbols preceding it
    InvalidOrder { input: String, window: String },
    /// Four or more identical symbols in a row
    TooManyRepeats { input: String, window: String },
}

impl NumeralError {
    /// True for the encode-side range failure.
    pub fn is_range_error(&self) -> bool {
        matches!(self, NumeralError::OutOfRange { .. })
    }

    /// True for any decode-side well-formedness failure.
    pub fn is_format_error(&self) -> bool {
        !self.is_range_error()
    }
}

impl fmt::Display for NumeralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumeralError::OutOfRange { value } => write!(
                f,
                "unable to encode integer {} as roman numeral: out of bounds [1, 3999]",
                value
            ),
            NumeralError::Empty => write!(f, "unable to decode empty string as roman numeral"),
            NumeralError::InvalidSymbol {
                input,
                symbol,
                position,
            } => write!(
                f,
                "unable to decode roman numeral {:?}: invalid symbol {:?} at position {}",
                input, symbol, position
            ),
            NumeralError::InvalidOrder { input, window } => write!(
                f,
                "unable to decode roman numeral {:?}: invalid symbols order ({:?})",
                input, window
            ),
            NumeralError::TooManyRepeats { input, window } => write!(
                f,
                "unable to decode roman numeral {:?}: too many repeating symbols ({:?})",
                input, window
            ),
        }
    }
}

impl std::error::Error for NumeralError {}

/// Result type alias for numeral operations
pub type NumeralResult<T> = Result<T, NumeralError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumeralError::OutOfRange { value: 4000 }.to_string(),
            "unable to encode integer 4000 as roman numeral: out of bounds [1, 3999]"
        );
        assert_eq!(
            NumeralError::Empty.to_string(),
            "unable to decode empty string as roman numeral"
        );
        assert_eq!(
            NumeralError::TooManyRepeats {
                input: "XIIII".to_string(),
                window: "IIII".to_string(),
            }
            .to_string(),
            "unable to decode roman numeral \"XIIII\": too many repeating symbols (\"IIII\")"
        );

        // Window is reported in reading order
        assert_eq!(
            NumeralError::InvalidOrder {
                input: "MIVX".to_string(),
                window: "IVX".to_string(),
            }
            .to_string(),
            "unable to decode roman numeral \"MIVX\": invalid symbols order (\"IVX\")"
        );
    }

    #[test]
    fn test_error_kind() {
        assert!(NumeralError::OutOfRange { value: 0 }.is_range_error());
        assert!(!NumeralError::OutOfRange { value: 0 }.is_format_error());
        assert!(NumeralError::Empty.is_format_error());
        assert!(NumeralError::InvalidOrder {
            input: "IIV".to_string(),
            window: "IIV".to_string(),
        }
        .is_format_error());
    }
}
