// ============================================================================
// Roman Numeral Encoder
// Integer to canonical Roman numeral text
// ============================================================================

use super::errors::{NumeralError, NumeralResult};

/// Smallest encodable value
pub const MIN_VALUE: i64 = 1;

/// Largest encodable value
pub const MAX_VALUE: i64 = 3999;

/// `(high, half, low)` symbols per decimal place, thousands first.
const PLACES: [(u16, &str, &str, &str); 4] = [
    (1000, "", "", "M"),
    (100, "M", "D", "C"),
    (10, "C", "L", "X"),
    (1, "X", "V", "I"),
];

/// Encode an integer as a canonical Roman numeral.
///
/// # Errors
/// Returns `OutOfRange` if `value` is not in [1, 3999].
///
/// # Example
/// ```
/// use roman_calculator::numeral::encode;
///
/// assert_eq!(encode(1994).unwrap(), "MCMXCIV");
/// assert!(encode(0).is_err());
/// ```
pub fn encode(value: i64) -> NumeralResult<String> {
    let mut out = String::with_capacity(15);
    encode_into(value, &mut out)?;
    Ok(out)
}

/// Encode into an existing buffer. Nothing is written on error.
pub fn encode_into(value: i64, out: &mut String) -> NumeralResult<()> {
    if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
        return Err(NumeralError::OutOfRange { value });
    }

    // Range check above keeps the cast lossless
    let value = value as u16;
    for (place, high, half, low) in PLACES {
        let digit = value / place % 10;
        push_digit(out, digit, high, half, low);
    }

    Ok(())
}

#[inline]
fn push_digit(out: &mut String, digit: u16, high: &str, half: &str, low: &str) {
    match digit {
        0 => {},
        1..=3 => {
            for _ in 0..digit {
                out.push_str(low);
            }
        },
        4 => {
            out.push_str(low);
            out.push_str(half);
        },
        5..=8 => {
            out.push_str(half);
            for _ in 5..digit {
                out.push_str(low);
            }
        },
        // 9; higher digits cannot occur for values <= 3999
        _ => {
            out.push_str(low);
            out.push_str(high);
        },
    }
}
