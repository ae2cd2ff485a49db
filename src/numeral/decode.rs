// ============================================================================
// Roman Numeral Decoder
// Validates Roman numeral text and computes its value
// ============================================================================

use super::errors::{NumeralError, NumeralResult};
use super::symbol::Symbol;
use smallvec::SmallVec;

/// Symbols of one numeral. Anything encodable fits inline.
type Symbols = SmallVec<[Symbol; 16]>;

/// Decode Roman numeral text to its integer value.
///
/// The text is validated first (see [`validate`]). The value is then
/// accumulated right to left: a symbol smaller than the largest symbol
/// seen so far is subtracted, everything else is added.
///
/// # Errors
/// - `Empty` for an empty string
/// - `InvalidSymbol` for any character other than I, V, X, L, C, D, M
/// - `InvalidOrder` when a symbol exceeds both of its two predecessors
/// - `TooManyRepeats` for four identical symbols in a row
///
/// # Example
/// ```
/// use roman_calculator::numeral::decode;
///
/// assert_eq!(decode("MCMXCIV").unwrap(), 1994);
/// assert!(decode("IIII").is_err());
/// ```
pub fn decode(text: &str) -> NumeralResult<i64> {
    let symbols = parse_symbols(text)?;
    check_order(text, &symbols)?;

    let mut sum: i64 = 0;
    let mut last_high: u16 = 0;
    for symbol in symbols.iter().rev() {
        let value = symbol.value();
        if value < last_high {
            sum -= i64::from(value);
        } else {
            last_high = value;
            sum += i64::from(value);
        }
    }

    tracing::trace!(text, sum, "decoded roman numeral");
    Ok(sum)
}

/// Check that `text` is a well-formed Roman numeral without computing it.
///
/// Numerals of one or two symbols are always accepted, so `"IC"` passes
/// (and decodes to 99). Longer numerals are checked with a two-symbol
/// lookback, not a full subtractive grammar.
pub fn validate(text: &str) -> NumeralResult<()> {
    let symbols = parse_symbols(text)?;
    check_order(text, &symbols)
}

fn parse_symbols(text: &str) -> NumeralResult<Symbols> {
    if text.is_empty() {
        return Err(NumeralError::Empty);
    }

    text.chars()
        .enumerate()
        .map(|(position, c)| {
            Symbol::from_char(c).ok_or_else(|| NumeralError::InvalidSymbol {
                input: text.to_string(),
                symbol: c,
                position,
            })
        })
        .collect()
}

fn check_order(text: &str, symbols: &[Symbol]) -> NumeralResult<()> {
    if symbols.len() <= 2 {
        return Ok(());
    }

    for i in 2..symbols.len() {
        let value = symbols[i].value();
        if value > symbols[i - 1].value() && value > symbols[i - 2].value() {
            return Err(NumeralError::InvalidOrder {
                input: text.to_string(),
                window: window(&symbols[i - 2..=i]),
            });
        }
        if i >= 3 && symbols[i - 3..i].iter().all(|s| *s == symbols[i]) {
            return Err(NumeralError::TooManyRepeats {
                input: text.to_string(),
                window: window(&symbols[i - 3..=i]),
            });
        }
    }

    Ok(())
}

fn window(symbols: &[Symbol]) -> String {
    symbols.iter().map(|s| s.as_char()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeral::encode::{encode, MAX_VALUE, MIN_VALUE};
    use proptest::prelude::*;

    #[test]
    fn test_decode_values() {
        assert_eq!(decode("I").unwrap(), 1);
        assert_eq!(decode("IX").unwrap(), 9);
        assert_eq!(decode("XL").unwrap(), 40);
        assert_eq!(decode("MCMXCIV").unwrap(), 1994);
        assert_eq!(decode("MMMCMXCIX").unwrap(), 3999);
        assert_eq!(decode("VIII").unwrap(), 8);
    }

    #[test]
    fn test_empty() {
        assert_eq!(decode(""), Err(NumeralError::Empty));
        assert_eq!(validate(""), Err(NumeralError::Empty));
    }

    #[test]
    fn test_invalid_symbols() {
        assert_eq!(
            decode("ABC"),
            Err(NumeralError::InvalidSymbol {
                input: "ABC".to_string(),
                symbol: 'A',
                position: 0,
            })
        );
        assert_eq!(
            decode("XIv"),
            Err(NumeralError::InvalidSymbol {
                input: "XIv".to_string(),
                symbol: 'v',
                position: 2,
            })
        );
        assert!(decode(" X").is_err());
        assert!(decode("10").is_err());
    }

    #[test]
    fn test_four_repeats_rejected() {
        assert_eq!(
            decode("IIII"),
            Err(NumeralError::TooManyRepeats {
                input: "IIII".to_string(),
                window: "IIII".to_string(),
            })
        );
        assert!(decode("MMMM").is_err());
        assert!(decode("XCCCC").is_err());
        assert_eq!(decode("III").unwrap(), 3);
    }

    #[test]
    fn test_bad_order_rejected() {
        assert_eq!(
            decode("IIV"),
            Err(NumeralError::InvalidOrder {
                input: "IIV".to_string(),
                window: "IIV".to_string(),
            })
        );
        assert_eq!(
            decode("MIVX"),
            Err(NumeralError::InvalidOrder {
                input: "MIVX".to_string(),
                window: "IVX".to_string(),
            })
        );
        assert_eq!(
            decode("MIVX").unwrap_err().to_string(),
            "unable to decode roman numeral \"MIVX\": invalid symbols order (\"IVX\")"
        );
        // A larger symbol after a run of three breaks the order rule
        assert!(matches!(
            decode("IIIX"),
            Err(NumeralError::InvalidOrder { .. })
        ));
    }

    #[test]
    fn test_short_numerals_are_relaxed() {
        // Two symbols are never order-checked
        assert_eq!(decode("IC").unwrap(), 99);
        assert_eq!(decode("VX").unwrap(), 5);
        assert_eq!(decode("IM").unwrap(), 999);
        assert!(validate("IC").is_ok());
    }

    #[test]
    fn test_lookback_heuristic_is_not_a_grammar() {
        // Accepted although not canonical
        assert_eq!(decode("IXIX").unwrap(), 18);
        assert_eq!(decode("VIV").unwrap(), 9);
    }

    proptest! {
        #[test]
        fn prop_round_trip(value in MIN_VALUE..=MAX_VALUE) {
            let text = encode(value).unwrap();
            prop_assert_eq!(decode(&text).unwrap(), value);
        }

        #[test]
        fn prop_arbitrary_text_never_panics(text in "\\PC{0,12}") {
            let _ = decode(&text);
        }

        #[test]
        fn prop_lowercase_always_rejected(text in "[ivxlcdm]{1,8}") {
            let rejected = matches!(decode(&text), Err(NumeralError::InvalidSymbol { .. }));
            prop_assert!(rejected);
        }
    }
}
