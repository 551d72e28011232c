//! Deterministic decimal parsing and display.
//!
//! Parsing never touches floating point: the integer part is shifted into
//! place and up to five fractional digits are scaled with integer math.
//! `from_str_unsafe` and `Display` go through `f64` and are only meant for
//! config tuning, logs and tests.

use std::fmt;
use std::str::FromStr;

use super::error::FixedError;
use super::scalar::{Fixed, ONE_RAW};

/// Fractional digits carried by the string format.
pub const DECIMAL_DIGITS: usize = 5;
const DECIMAL_SCALE: i64 = 100_000;

impl Fixed {
    /// Parses `-?[0-9]*(\.[0-9]*)?` into the exact same raw value on every
    /// platform.
    ///
    /// Empty input, `"-"` and `"."` parse to zero. Digits past the fifth
    /// fractional place are validated but ignored.
    pub fn from_str_exact(text: &str) -> Result<Fixed, FixedError> {
        if text.is_empty() {
            return Ok(Fixed::ZERO);
        }

        let negative = text.starts_with('-');
        let start = usize::from(negative);

        let mut point = None;
        for (position, ch) in text.char_indices().skip(start) {
            match ch {
                '0'..='9' => {}
                '.' if point.is_none() => point = Some(position),
                _ => return Err(FixedError::InvalidDigit { ch, position }),
            }
        }

        let (integer_digits, fraction_digits) = match point {
            Some(point) => (&text[start..point], &text[point + 1..]),
            None => (&text[start..], ""),
        };

        let mut result = Fixed::from_i64(parse_integer(integer_digits)?);
        if !fraction_digits.is_empty() {
            result += Fixed::from_raw(parse_fraction(fraction_digits));
        }

        Ok(if negative { -result } else { result })
    }

    /// Parses through the platform's `f64` parser. Not bit-identical across
    /// platforms.
    pub fn from_str_unsafe(text: &str) -> Result<Fixed, FixedError> {
        text.trim()
            .parse::<f64>()
            .map(Fixed::from_f64_unsafe)
            .map_err(|_| FixedError::InvalidFloat(text.to_string()))
    }
}

fn parse_integer(digits: &str) -> Result<i64, FixedError> {
    digits.bytes().try_fold(0i64, |acc, byte| {
        acc.checked_mul(10)
            .and_then(|acc| acc.checked_add(i64::from(byte - b'0')))
            .ok_or(FixedError::IntegerOverflow)
    })
}

/// Scales the first five fractional digits (right-padded with zeros) to raw
/// units, truncating.
fn parse_fraction(digits: &str) -> i64 {
    let mut value = 0i64;
    let mut bytes = digits.bytes();
    for _ in 0..DECIMAL_DIGITS {
        let digit = bytes.next().map_or(0, |byte| i64::from(byte - b'0'));
        value = value * 10 + digit;
    }
    value * ONE_RAW / DECIMAL_SCALE
}

impl FromStr for Fixed {
    type Err = FixedError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Fixed::from_str_exact(text)
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DECIMAL_DIGITS);
        write!(f, "{:.*}", precision, self.to_f64_rounded())
    }
}
