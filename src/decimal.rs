//! Fixed-point decimal element kind.
//!
//! The value is an `i128` mantissa scaled by 10^-9, giving exact decimal arithmetic across roughly
//! 29 integer digits and 9 fractional digits. Ordering and equality are those of the mantissa, so
//! the type is totally ordered.
//!
//! The scale is fixed. Literals with more than 9 fractional digits are rejected by `FromStr`
//! rather than rounded, e.g. `"0.0000000001"` fails to parse.

use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

use thiserror::Error;

/// Number of fractional decimal digits.
pub const FRACTION_DIGITS: u32 = 9;

const SCALE: i128 = 10i128.pow(FRACTION_DIGITS);

// Largest integer part, matches a 96 bit unsigned integer.
const INTEGER_LIMIT: i128 = 79_228_162_514_264_337_593_543_950_335;

#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimal {
    mantissa: i128,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid decimal literal: {0:?}")]
pub struct ParseDecimalError(String);

impl Decimal {
    pub const ZERO: Decimal = Decimal { mantissa: 0 };
    pub const ONE: Decimal = Decimal { mantissa: SCALE };
    pub const MIN: Decimal = Decimal {
        mantissa: -INTEGER_LIMIT * SCALE,
    };
    pub const MAX: Decimal = Decimal {
        mantissa: INTEGER_LIMIT * SCALE,
    };

    /// Builds a value from its raw mantissa, `None` if outside [`Decimal::MIN`, `Decimal::MAX`].
    pub fn from_mantissa(mantissa: i128) -> Option<Self> {
        if (Self::MIN.mantissa..=Self::MAX.mantissa).contains(&mantissa) {
            Some(Self { mantissa })
        } else {
            None
        }
    }

    /// Builds a whole number, `None` if not representable.
    pub fn from_integer(value: i128) -> Option<Self> {
        value
            .checked_mul(SCALE)
            .and_then(Self::from_mantissa)
    }

    pub fn mantissa(self) -> i128 {
        self.mantissa
    }

    pub fn is_negative(self) -> bool {
        self.mantissa < 0
    }

    /// Distance between two values in mantissa units.
    pub fn abs_diff(self, other: Self) -> u128 {
        self.mantissa.abs_diff(other.mantissa)
    }

    pub fn to_f64(self) -> f64 {
        self.mantissa as f64 / SCALE as f64
    }
}

// Negation never leaves the representable range, the bounds are symmetric.
impl Neg for Decimal {
    type Output = Decimal;

    fn neg(self) -> Self::Output {
        Self {
            mantissa: -self.mantissa,
        }
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        // Every i64 fits into the integer range.
        Self {
            mantissa: value as i128 * SCALE,
        }
    }
}

impl From<i32> for Decimal {
    fn from(value: i32) -> Self {
        Self::from(value as i64)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.mantissa < 0 { "-" } else { "" };
        let abs = self.mantissa.unsigned_abs();
        let integer = abs / SCALE as u128;
        let fraction = abs % SCALE as u128;

        if fraction == 0 {
            return write!(f, "{sign}{integer}");
        }

        let digits = format!("{fraction:0width$}", width = FRACTION_DIGITS as usize);
        write!(f, "{sign}{integer}.{}", digits.trim_end_matches('0'))
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseDecimalError(s.to_owned());

        let (negative, unsigned) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };

        let (integer_str, fraction_str) = match unsigned.split_once('.') {
            Some((i, f)) => (i, f),
            None => (unsigned, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if integer_str.is_empty()
            || !all_digits(integer_str)
            || !all_digits(fraction_str)
            || fraction_str.len() > FRACTION_DIGITS as usize
        {
            return Err(err());
        }

        let integer = i128::from_str(integer_str).map_err(|_| err())?;
        let mut fraction = 0i128;
        for (i, b) in fraction_str.bytes().enumerate() {
            fraction += (b - b'0') as i128 * 10i128.pow(FRACTION_DIGITS - 1 - i as u32);
        }

        let magnitude = integer
            .checked_mul(SCALE)
            .and_then(|m| m.checked_add(fraction))
            .ok_or_else(err)?;
        let mantissa = if negative { -magnitude } else { magnitude };

        Self::from_mantissa(mantissa).ok_or_else(err)
    }
}
