//! The closed set of element kinds the algorithms and the generator work with.

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};

use rand::Rng;

use crate::decimal::Decimal;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
    Decimal,
    Char,
}

impl ElementKind {
    pub const ALL: [ElementKind; 12] = [
        ElementKind::I8,
        ElementKind::U8,
        ElementKind::I16,
        ElementKind::U16,
        ElementKind::I32,
        ElementKind::U32,
        ElementKind::I64,
        ElementKind::U64,
        ElementKind::F32,
        ElementKind::F64,
        ElementKind::Decimal,
        ElementKind::Char,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ElementKind::I8 => "i8",
            ElementKind::U8 => "u8",
            ElementKind::I16 => "i16",
            ElementKind::U16 => "u16",
            ElementKind::I32 => "i32",
            ElementKind::U32 => "u32",
            ElementKind::I64 => "i64",
            ElementKind::U64 => "u64",
            ElementKind::F32 => "f32",
            ElementKind::F64 => "f64",
            ElementKind::Decimal => "decimal",
            ElementKind::Char => "char",
        }
    }

    /// Representable minimum and maximum, formatted.
    pub fn bounds(self) -> (&'static str, &'static str) {
        BOUNDS[self as usize]
    }
}

// Indexed by discriminant, keep in declaration order.
static BOUNDS: [(&str, &str); 12] = [
    ("-128", "127"),
    ("0", "255"),
    ("-32768", "32767"),
    ("0", "65535"),
    ("-2147483648", "2147483647"),
    ("0", "4294967295"),
    ("-9223372036854775808", "9223372036854775807"),
    ("0", "18446744073709551615"),
    ("-3.4028235e38", "3.4028235e38"),
    ("-1.7976931348623157e308", "1.7976931348623157e308"),
    (
        "-79228162514264337593543950335",
        "79228162514264337593543950335",
    ),
    ("\\u{0}", "\\u{10ffff}"),
];

impl Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A totally ordered value of one of the supported kinds.
///
/// Generic code is instantiated once per kind, there is no runtime type dispatch.
pub trait Element: Copy + Debug + Display + PartialEq + Send + Sync + 'static {
    const KIND: ElementKind;
    const MIN: Self;
    const MAX: Self;

    /// Absolute distance between two values, used to snap values onto a palette.
    type Distance: PartialOrd + Copy + Debug;

    /// Total order, consistent with `PartialEq` for every value the generator produces.
    fn total_cmp(&self, other: &Self) -> Ordering;

    fn distance(&self, other: &Self) -> Self::Distance;

    /// Uniform value in `[min, max]`. The caller guarantees `min < max`.
    fn sample<R: Rng + ?Sized>(rng: &mut R, min: Self, max: Self) -> Self;

    /// Converts a wide integer, `None` if the kind can't represent it.
    fn from_i128(value: i128) -> Option<Self>;

    fn is_nan(&self) -> bool {
        false
    }
}

macro_rules! impl_int_element {
    ($($t:ident)*) => {
        $(
            paste::paste! {
                impl Element for $t {
                    const KIND: ElementKind = ElementKind::[<$t:upper>];
                    const MIN: Self = $t::MIN;
                    const MAX: Self = $t::MAX;

                    type Distance = u128;

                    #[inline]
                    fn total_cmp(&self, other: &Self) -> Ordering {
                        self.cmp(other)
                    }

                    #[inline]
                    fn distance(&self, other: &Self) -> u128 {
                        (*self as i128).abs_diff(*other as i128)
                    }

                    fn sample<R: Rng + ?Sized>(rng: &mut R, min: Self, max: Self) -> Self {
                        rng.gen_range(min..=max)
                    }

                    fn from_i128(value: i128) -> Option<Self> {
                        $t::try_from(value).ok()
                    }
                }
            }
        )*
    };
}

impl_int_element!(i8 u8 i16 u16 i32 u32 i64 u64);

/// Fractional offset into the range, then a coin flip negation if the range reaches below zero.
/// Negated values that would leave the range are kept as drawn.
fn sample_signed_span<R, V>(rng: &mut R, min: V, max: V, offset: impl FnOnce(&mut R) -> V) -> V
where
    R: Rng + ?Sized,
    V: Copy + PartialOrd + std::ops::Neg<Output = V> + Default,
{
    let val = offset(rng);

    if min < V::default() && rng.gen_bool(0.5) {
        let negated = -val;
        if negated >= min && negated <= max {
            return negated;
        }
    }

    val
}

macro_rules! impl_float_element {
    ($($t:ident)*) => {
        $(
            paste::paste! {
                impl Element for $t {
                    const KIND: ElementKind = ElementKind::[<$t:upper>];
                    const MIN: Self = $t::MIN;
                    const MAX: Self = $t::MAX;

                    type Distance = f64;

                    #[inline]
                    fn total_cmp(&self, other: &Self) -> Ordering {
                        $t::total_cmp(self, other)
                    }

                    #[inline]
                    fn distance(&self, other: &Self) -> f64 {
                        (*self as f64 - *other as f64).abs()
                    }

                    fn sample<R: Rng + ?Sized>(rng: &mut R, min: Self, max: Self) -> Self {
                        sample_signed_span(rng, min, max, |rng| {
                            // Interpolating avoids overflowing `max - min` on the full range.
                            let r: f64 = rng.gen();
                            let val = (min as f64) * (1.0 - r) + (max as f64) * r;
                            (val as $t).clamp(min, max)
                        })
                    }

                    fn from_i128(value: i128) -> Option<Self> {
                        Some(value as $t)
                    }

                    fn is_nan(&self) -> bool {
                        $t::is_nan(*self)
                    }
                }
            }
        )*
    };
}

impl_float_element!(f32 f64);

impl Element for Decimal {
    const KIND: ElementKind = ElementKind::Decimal;
    const MIN: Self = Decimal::MIN;
    const MAX: Self = Decimal::MAX;

    type Distance = u128;

    #[inline]
    fn total_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    #[inline]
    fn distance(&self, other: &Self) -> u128 {
        self.abs_diff(*other)
    }

    fn sample<R: Rng + ?Sized>(rng: &mut R, min: Self, max: Self) -> Self {
        sample_signed_span(rng, min, max, |rng| {
            let mantissa = rng.gen_range(min.mantissa()..=max.mantissa());
            // In range by construction.
            Decimal::from_mantissa(mantissa).unwrap_or(min)
        })
    }

    fn from_i128(value: i128) -> Option<Self> {
        Decimal::from_integer(value)
    }
}

impl Element for char {
    const KIND: ElementKind = ElementKind::Char;
    const MIN: Self = '\0';
    const MAX: Self = char::MAX;

    type Distance = u32;

    #[inline]
    fn total_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    #[inline]
    fn distance(&self, other: &Self) -> u32 {
        (*self as u32).abs_diff(*other as u32)
    }

    fn sample<R: Rng + ?Sized>(rng: &mut R, min: Self, max: Self) -> Self {
        // Both bounds are valid scalar values, so the loop only rejects surrogates in between.
        loop {
            if let Some(c) = char::from_u32(rng.gen_range(min as u32..=max as u32)) {
                return c;
            }
        }
    }

    fn from_i128(value: i128) -> Option<Self> {
        u32::try_from(value).ok().and_then(char::from_u32)
    }
}
