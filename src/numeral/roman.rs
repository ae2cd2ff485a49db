// ============================================================================
// Roman Value Type
// An integer guaranteed to be representable as a Roman numeral
// ============================================================================

use super::decode::decode;
use super::encode::{encode_into, MAX_VALUE, MIN_VALUE};
use super::errors::{NumeralError, NumeralResult};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value in [1, 3999].
///
/// `Display` writes the canonical numeral and `FromStr` decodes one, so
/// the type round-trips through text.
///
/// # Example
/// ```
/// use roman_calculator::numeral::Roman;
///
/// let year: Roman = "MMXXIV".parse().unwrap();
/// assert_eq!(year.value(), 2024);
/// assert_eq!(Roman::new(14).unwrap().to_string(), "XIV");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i64", into = "u16"))]
#[repr(transparent)]
pub struct Roman(u16);

impl Roman {
    /// Smallest representable value (I)
    pub const MIN: Self = Self(MIN_VALUE as u16);

    /// Largest representable value (MMMCMXCIX)
    pub const MAX: Self = Self(MAX_VALUE as u16);

    /// Create from an integer.
    ///
    /// # Errors
    /// Returns `OutOfRange` if the value is not in [1, 3999].
    #[inline]
    pub fn new(value: i64) -> NumeralResult<Self> {
        if (MIN_VALUE..=MAX_VALUE).contains(&value) {
            Ok(Self(value as u16))
        } else {
            Err(NumeralError::OutOfRange { value })
        }
    }

    /// The integer value.
    #[inline]
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl TryFrom<i64> for Roman {
    type Error = NumeralError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Roman> for u16 {
    fn from(roman: Roman) -> Self {
        roman.0
    }
}

impl fmt::Display for Roman {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut text = String::with_capacity(15);
        encode_into(i64::from(self.0), &mut text).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl FromStr for Roman {
    type Err = NumeralError;

    /// Decode, then require the value to be encodable.
    ///
    /// Some accepted numerals (e.g. "MMMDMMM") decode above 3999 and are
    /// rejected here with `OutOfRange`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(decode(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(Roman::MIN.value(), 1);
        assert_eq!(Roman::MAX.value(), 3999);
        assert_eq!(Roman::MAX.to_string(), "MMMCMXCIX");
    }

    #[test]
    fn test_new_out_of_range() {
        assert_eq!(Roman::new(0), Err(NumeralError::OutOfRange { value: 0 }));
        assert_eq!(
            Roman::try_from(4000),
            Err(NumeralError::OutOfRange { value: 4000 })
        );
    }

    #[test]
    fn test_display_and_parse() {
        let x = Roman::new(49).unwrap();
        assert_eq!(x.to_string(), "XLIX");
        assert_eq!("XLIX".parse::<Roman>().unwrap(), x);
        assert_eq!(u16::from(x), 49);
    }

    #[test]
    fn test_parse_rejects_large_decoded_values() {
        assert_eq!(
            "MMMDMMM".parse::<Roman>(),
            Err(NumeralError::OutOfRange { value: 5500 })
        );
    }

    #[test]
    fn test_parse_propagates_format_errors() {
        assert_eq!("".parse::<Roman>(), Err(NumeralError::Empty));
        assert!("IIII".parse::<Roman>().unwrap_err().is_format_error());
    }

    #[test]
    fn test_ordering() {
        let a = Roman::new(5).unwrap();
        let b = Roman::new(10).unwrap();
        assert!(a < b);
        assert_eq!(a.max(b), b);
    }
}
