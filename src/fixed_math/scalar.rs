//! The Q16.16 scalar stored in a signed 64-bit integer.
//!
//! Every operator here works on the raw integer with wrapping two's-complement
//! semantics. Overflow outside the usable range wraps silently; it never
//! saturates and never panics. The only arithmetic fault is integer division
//! by a zero-valued divisor, which panics exactly like `i64` division does.

use std::cmp::Ordering;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

use fixed::types::I48F16;
use serde::{Deserialize, Serialize};

/// Number of fractional bits.
pub const FRACTION_BITS: u32 = 16;
/// Raw value of `1.0`.
pub const ONE_RAW: i64 = 1 << FRACTION_BITS;
/// Raw value of `0.5`.
pub const HALF_RAW: i64 = 1 << (FRACTION_BITS - 1);
/// Mask selecting the fractional bits of a raw value.
pub const FRACTION_MASK: i64 = 0xFFFF;
/// Size of the raw-bit interchange format in bytes.
pub const SIZE: usize = 8;

/// Deterministic fixed-point number: `raw / 65536`.
///
/// Uses the same layout as [`fixed::types::I48F16`] (48 integer bits, 16
/// fractional bits), so values convert between the two losslessly. Unlike
/// `I48F16`, the arithmetic here is pinned to one rounding order:
/// multiplication is a widened product shifted right by 16, division shifts
/// the dividend left by 16 before dividing.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Fixed {
    raw: i64,
}

#[inline]
pub(crate) const fn mul_raw(a: i64, b: i64) -> i64 {
    ((a as i128 * b as i128) >> FRACTION_BITS) as i64
}

#[inline]
pub(crate) fn div_raw(a: i64, b: i64) -> i64 {
    a.wrapping_shl(FRACTION_BITS).wrapping_div(b)
}

impl Fixed {
    pub const MAX: Fixed = Fixed::from_raw(i64::MAX);
    pub const MIN: Fixed = Fixed::from_raw(i64::MIN);
    /// Operands up to this magnitude (raw `2^31`) multiply without the raw
    /// product leaving 64 bits.
    pub const USABLE_MAX: Fixed = Fixed::from_raw(2_147_483_648);
    pub const USABLE_MIN: Fixed = Fixed::from_raw(-2_147_483_648);

    pub const ZERO: Fixed = Fixed::from_raw(0);
    pub const ONE: Fixed = Fixed::from_raw(ONE_RAW);
    pub const TWO: Fixed = Fixed::from_int(2);
    pub const THREE: Fixed = Fixed::from_int(3);
    pub const FOUR: Fixed = Fixed::from_int(4);
    pub const FIVE: Fixed = Fixed::from_int(5);
    pub const SIX: Fixed = Fixed::from_int(6);
    pub const SEVEN: Fixed = Fixed::from_int(7);
    pub const EIGHT: Fixed = Fixed::from_int(8);
    pub const NINE: Fixed = Fixed::from_int(9);
    pub const TEN: Fixed = Fixed::from_int(10);
    pub const NINETY_NINE: Fixed = Fixed::from_int(99);
    pub const HUNDRED: Fixed = Fixed::from_int(100);
    pub const TWO_HUNDRED: Fixed = Fixed::from_int(200);
    pub const THREE_SIXTY: Fixed = Fixed::from_int(360);
    pub const MINUS_ONE: Fixed = Fixed::from_int(-1);
    pub const HALF: Fixed = Fixed::from_raw(HALF_RAW);

    // Short decimal constants, truncated exactly the way `ONE / 100` and
    // friends truncate.
    pub const P0_01: Fixed = Fixed::from_raw(655);
    pub const P0_02: Fixed = Fixed::from_raw(1310);
    pub const P0_03: Fixed = Fixed::from_raw(1965);
    pub const P0_04: Fixed = Fixed::from_raw(2620);
    pub const P0_05: Fixed = Fixed::from_raw(3275);
    pub const P0_10: Fixed = Fixed::from_raw(6553);
    pub const P0_20: Fixed = Fixed::from_raw(13106);
    pub const P0_25: Fixed = Fixed::from_raw(16384);
    pub const P0_33: Fixed = Fixed::from_raw(21845);
    pub const P0_50: Fixed = Fixed::from_raw(32768);
    pub const P0_75: Fixed = Fixed::from_raw(49152);
    pub const P0_95: Fixed = Fixed::from_raw(62261);
    pub const P0_99: Fixed = Fixed::from_raw(64881);
    pub const P1_01: Fixed = Fixed::from_raw(66191);
    pub const P1_10: Fixed = Fixed::from_raw(72089);
    pub const P1_50: Fixed = Fixed::from_raw(98304);

    pub const PI: Fixed = Fixed::from_raw(205_887);
    pub const TWO_PI: Fixed = Fixed::from_raw(411_774);
    pub const PI_QUARTER: Fixed = Fixed::from_raw(51_471);
    pub const PI_HALF: Fixed = Fixed::from_raw(102_943);
    pub const ONE_DIV_TWO_PI: Fixed = Fixed::from_raw(10_430);
    pub const DEG2RAD: Fixed = Fixed::from_raw(1_143);
    pub const RAD2DEG: Fixed = Fixed::from_raw(3_754_936);
    pub const EPSILON: Fixed = Fixed::from_raw(1);
    pub const E: Fixed = Fixed::from_raw(178_145);

    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        Self { raw }
    }

    #[inline]
    pub const fn from_int(value: i32) -> Self {
        Self::from_raw((value as i64) << FRACTION_BITS)
    }

    /// Shifts `value` into the integer bits; values beyond 47 bits wrap.
    #[inline]
    pub const fn from_i64(value: i64) -> Self {
        Self::from_raw(value.wrapping_shl(FRACTION_BITS))
    }

    /// Converts through native float math. Not bit-identical across
    /// platforms; use for tests and tuning only.
    pub fn from_f32_unsafe(value: f32) -> Self {
        let half = if value < 0.0 { -0.5 } else { 0.5 };
        Self::from_raw((value * ONE_RAW as f32 + half) as i64)
    }

    /// Converts through native float math. Not bit-identical across
    /// platforms; use for tests and tuning only.
    pub fn from_f64_unsafe(value: f64) -> Self {
        let half = if value < 0.0 { -0.5 } else { 0.5 };
        Self::from_raw((value * ONE_RAW as f64 + half) as i64)
    }

    #[inline]
    pub const fn raw(self) -> i64 {
        self.raw
    }

    /// Integer part, rounded toward negative infinity and truncated to 32 bits.
    #[inline]
    pub const fn to_i32(self) -> i32 {
        (self.raw >> FRACTION_BITS) as i32
    }

    #[inline]
    pub const fn to_i64(self) -> i64 {
        self.raw >> FRACTION_BITS
    }

    pub fn to_f32(self) -> f32 {
        self.raw as f32 / ONE_RAW as f32
    }

    pub fn to_f64(self) -> f64 {
        self.raw as f64 / ONE_RAW as f64
    }

    pub fn to_f32_rounded(self) -> f32 {
        self.to_f64_rounded() as f32
    }

    /// Float view rounded to the five decimals the string format carries.
    pub fn to_f64_rounded(self) -> f64 {
        (self.to_f64() * 100_000.0).round_ties_even() / 100_000.0
    }

    /// Raw-bit interchange form: eight little-endian bytes.
    pub const fn to_le_bytes(self) -> [u8; SIZE] {
        self.raw.to_le_bytes()
    }

    pub const fn from_le_bytes(bytes: [u8; SIZE]) -> Self {
        Self::from_raw(i64::from_le_bytes(bytes))
    }

    /// Converts to the `fixed` crate's representation of the same bits.
    pub fn to_fixed_num(self) -> I48F16 {
        I48F16::from_bits(self.raw)
    }

    pub fn checked_div(self, rhs: Fixed) -> Option<Fixed> {
        if rhs.raw == 0 {
            None
        } else {
            Some(Fixed::from_raw(div_raw(self.raw, rhs.raw)))
        }
    }

    pub fn checked_rem(self, rhs: Fixed) -> Option<Fixed> {
        if rhs.raw == 0 {
            None
        } else {
            Some(Fixed::from_raw(self.raw.wrapping_rem(rhs.raw)))
        }
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.raw < 0
    }
}

impl From<i32> for Fixed {
    fn from(value: i32) -> Self {
        Fixed::from_int(value)
    }
}

impl From<I48F16> for Fixed {
    fn from(value: I48F16) -> Self {
        Fixed::from_raw(value.to_bits())
    }
}

impl From<Fixed> for I48F16 {
    fn from(value: Fixed) -> Self {
        value.to_fixed_num()
    }
}

// ============================================================================
// Fixed ⊕ Fixed
// ============================================================================

impl Neg for Fixed {
    type Output = Fixed;
    fn neg(self) -> Fixed {
        Fixed::from_raw(self.raw.wrapping_neg())
    }
}

impl Add for Fixed {
    type Output = Fixed;
    fn add(self, rhs: Fixed) -> Fixed {
        Fixed::from_raw(self.raw.wrapping_add(rhs.raw))
    }
}

impl Sub for Fixed {
    type Output = Fixed;
    fn sub(self, rhs: Fixed) -> Fixed {
        Fixed::from_raw(self.raw.wrapping_sub(rhs.raw))
    }
}

impl Mul for Fixed {
    type Output = Fixed;
    fn mul(self, rhs: Fixed) -> Fixed {
        Fixed::from_raw(mul_raw(self.raw, rhs.raw))
    }
}

impl Div for Fixed {
    type Output = Fixed;
    fn div(self, rhs: Fixed) -> Fixed {
        Fixed::from_raw(div_raw(self.raw, rhs.raw))
    }
}

impl Rem for Fixed {
    type Output = Fixed;
    fn rem(self, rhs: Fixed) -> Fixed {
        Fixed::from_raw(self.raw.wrapping_rem(rhs.raw))
    }
}

// ============================================================================
// Mixed with integers
// ============================================================================
//
// `+ - %` and comparisons lift the integer into the fixed domain first.
// `*` and `/` by an integer act on the raw value directly, and `i / Fixed`
// divides `i << 32` by the raw value so the quotient lands back in Q16.16.

#[inline]
const fn lift(value: i32) -> i64 {
    (value as i64) << FRACTION_BITS
}

impl Add<i32> for Fixed {
    type Output = Fixed;
    fn add(self, rhs: i32) -> Fixed {
        Fixed::from_raw(self.raw.wrapping_add(lift(rhs)))
    }
}

impl Add<Fixed> for i32 {
    type Output = Fixed;
    fn add(self, rhs: Fixed) -> Fixed {
        Fixed::from_raw(lift(self).wrapping_add(rhs.raw))
    }
}

impl Sub<i32> for Fixed {
    type Output = Fixed;
    fn sub(self, rhs: i32) -> Fixed {
        Fixed::from_raw(self.raw.wrapping_sub(lift(rhs)))
    }
}

impl Sub<Fixed> for i32 {
    type Output = Fixed;
    fn sub(self, rhs: Fixed) -> Fixed {
        Fixed::from_raw(lift(self).wrapping_sub(rhs.raw))
    }
}

impl Mul<i32> for Fixed {
    type Output = Fixed;
    fn mul(self, rhs: i32) -> Fixed {
        Fixed::from_raw(self.raw.wrapping_mul(rhs as i64))
    }
}

impl Mul<Fixed> for i32 {
    type Output = Fixed;
    fn mul(self, rhs: Fixed) -> Fixed {
        Fixed::from_raw(rhs.raw.wrapping_mul(self as i64))
    }
}

impl Div<i32> for Fixed {
    type Output = Fixed;
    fn div(self, rhs: i32) -> Fixed {
        Fixed::from_raw(self.raw.wrapping_div(rhs as i64))
    }
}

impl Div<Fixed> for i32 {
    type Output = Fixed;
    fn div(self, rhs: Fixed) -> Fixed {
        Fixed::from_raw((self as i64).wrapping_shl(2 * FRACTION_BITS).wrapping_div(rhs.raw))
    }
}

impl Rem<i32> for Fixed {
    type Output = Fixed;
    fn rem(self, rhs: i32) -> Fixed {
        Fixed::from_raw(self.raw.wrapping_rem(lift(rhs)))
    }
}

impl Rem<Fixed> for i32 {
    type Output = Fixed;
    fn rem(self, rhs: Fixed) -> Fixed {
        Fixed::from_raw(lift(self).wrapping_rem(rhs.raw))
    }
}

macro_rules! assign_ops {
    ($($trait:ident $method:ident $op:tt $rhs:ty;)+) => {
        $(
            impl $trait<$rhs> for Fixed {
                #[inline]
                fn $method(&mut self, rhs: $rhs) {
                    *self = *self $op rhs;
                }
            }
        )+
    };
}

assign_ops! {
    AddAssign add_assign + Fixed;
    SubAssign sub_assign - Fixed;
    MulAssign mul_assign * Fixed;
    DivAssign div_assign / Fixed;
    RemAssign rem_assign % Fixed;
    AddAssign add_assign + i32;
    SubAssign sub_assign - i32;
    MulAssign mul_assign * i32;
    DivAssign div_assign / i32;
    RemAssign rem_assign % i32;
}

impl PartialEq<i32> for Fixed {
    fn eq(&self, other: &i32) -> bool {
        self.raw == lift(*other)
    }
}

impl PartialEq<Fixed> for i32 {
    fn eq(&self, other: &Fixed) -> bool {
        lift(*self) == other.raw
    }
}

impl PartialOrd<i32> for Fixed {
    fn partial_cmp(&self, other: &i32) -> Option<Ordering> {
        Some(self.raw.cmp(&lift(*other)))
    }
}

impl PartialOrd<Fixed> for i32 {
    fn partial_cmp(&self, other: &Fixed) -> Option<Ordering> {
        Some(lift(*self).cmp(&other.raw))
    }
}

impl std::iter::Sum for Fixed {
    fn sum<I: Iterator<Item = Fixed>>(iter: I) -> Fixed {
        iter.fold(Fixed::ZERO, |acc, v| acc + v)
    }
}
