//! Integer-domain algorithms on [`Fixed`]: roots, reciprocals, rounding,
//! the exponential series, and the small helpers simulation code leans on.

use super::scalar::{Fixed, FRACTION_BITS, FRACTION_MASK, HALF_RAW, ONE_RAW};

/// `1 << 32`: `ONE` in the numerator of a raw division yields `ONE / x`.
const ONE_SQUARED_RAW: i64 = ONE_RAW << FRACTION_BITS;

// exp() limits, in raw units.
const EXP_OVERFLOW_RAW: i64 = 2_097_152; // 32.0
const EXP_UNDERFLOW_RAW: i64 = -786_432; // -12.0
const EXP_MAX_TERMS: i32 = 30;
const EXP_SMALL_TERM: i64 = 500;
const EXP_TINY_TERM: i64 = 20;
const EXP_MIN_TERMS_BEFORE_STOP: i32 = 15;

const BSR_LOOKUP: [u8; 32] = [
    0, 9, 1, 10, 13, 21, 2, 29, 11, 14, 16, 18, 22, 25, 3, 30, 8, 12, 20, 28, 15, 17, 24, 7, 19,
    27, 23, 6, 26, 5, 4, 31,
];
const DE_BRUIJN: u32 = 0x07C4_ACDD;

impl Fixed {
    /// Square root by Newton iteration on the raw value.
    ///
    /// The iteration runs on the raw integer and the root is shifted back by
    /// 8 bits, so results carry 8 bits of fraction.
    ///
    /// # Panics
    ///
    /// Panics on negative input; see [`Fixed::checked_sqrt`].
    pub fn sqrt(self) -> Fixed {
        self.checked_sqrt()
            .unwrap_or_else(|| panic!("sqrt of negative value {}", self))
    }

    pub fn checked_sqrt(self) -> Option<Fixed> {
        let raw = self.raw();
        if raw < 0 {
            return None;
        }
        if raw == 0 {
            return Some(Fixed::ZERO);
        }
        let mut b = (raw >> 1) + 1;
        let mut c = (b + raw / b) >> 1;
        while c < b {
            b = c;
            c = (b + raw / b) >> 1;
        }
        Some(Fixed::from_raw(b << (FRACTION_BITS / 2)))
    }

    /// `ONE / self` computed as `2^32 / raw`. Panics on zero.
    pub fn rcp(self) -> Fixed {
        Fixed::from_raw(ONE_SQUARED_RAW / self.raw())
    }

    /// `ONE / sqrt(self)`. Panics on zero or negative input.
    pub fn rsqrt(self) -> Fixed {
        Fixed::from_raw(ONE_SQUARED_RAW / self.sqrt().raw())
    }

    pub fn checked_rcp(self) -> Option<Fixed> {
        ONE_SQUARED_RAW.checked_div(self.raw()).map(Fixed::from_raw)
    }

    pub fn checked_rsqrt(self) -> Option<Fixed> {
        let root = self.checked_sqrt()?;
        ONE_SQUARED_RAW.checked_div(root.raw()).map(Fixed::from_raw)
    }

    /// `e^self` by Taylor series.
    ///
    /// Saturates to `MAX` from `32.0` up and flushes to zero from `-12.0`
    /// down. Accurate to about `0.01`.
    pub fn exp(self) -> Fixed {
        if self == Fixed::ZERO {
            return Fixed::ONE;
        }
        if self == Fixed::ONE {
            return Fixed::E;
        }
        if self.raw() >= EXP_OVERFLOW_RAW {
            return Fixed::MAX;
        }
        if self.raw() <= EXP_UNDERFLOW_RAW {
            return Fixed::ZERO;
        }

        let negative = self.is_negative();
        let x = self.abs();

        let mut result = x + Fixed::ONE;
        let mut term = x;
        for i in 2..EXP_MAX_TERMS {
            term *= x / Fixed::from_int(i);
            result += term;

            if term.raw() < EXP_SMALL_TERM
                && (i > EXP_MIN_TERMS_BEFORE_STOP || term.raw() < EXP_TINY_TERM)
            {
                break;
            }
        }

        if negative {
            Fixed::ONE / result
        } else {
            result
        }
    }

    pub fn floor(self) -> Fixed {
        Fixed::from_raw(self.raw() >> FRACTION_BITS << FRACTION_BITS)
    }

    pub fn ceil(self) -> Fixed {
        if self.raw() & FRACTION_MASK == 0 {
            self
        } else {
            self.floor() + Fixed::ONE
        }
    }

    /// The fractional bits as a value in `[0, 1)`. Negative inputs keep their
    /// two's-complement fraction, so `-0.25` yields `0.75`.
    pub fn fractions(self) -> Fixed {
        Fixed::from_raw(self.raw() & FRACTION_MASK)
    }

    /// Rounds half up: `5.5 -> 6`, `-5.5 -> -5`.
    pub fn round_to_int(self) -> i32 {
        if self.raw() & FRACTION_MASK >= HALF_RAW {
            self.to_i32() + 1
        } else {
            self.to_i32()
        }
    }

    #[inline]
    pub fn min(self, other: Fixed) -> Fixed {
        if self.raw() < other.raw() { self } else { other }
    }

    #[inline]
    pub fn max(self, other: Fixed) -> Fixed {
        if self.raw() > other.raw() { self } else { other }
    }

    /// Absolute value; `MIN.abs()` wraps to `MIN`.
    #[inline]
    pub fn abs(self) -> Fixed {
        Fixed::from_raw(self.raw().wrapping_abs())
    }

    /// Unlike `Ord::clamp`, an inverted range does not panic: `min` wins.
    pub fn clamp(self, min: Fixed, max: Fixed) -> Fixed {
        if self < min {
            min
        } else if self > max {
            max
        } else {
            self
        }
    }

    pub fn clamp01(self) -> Fixed {
        self.clamp(Fixed::ZERO, Fixed::ONE)
    }

    /// Interpolates with `t` clamped to `[0, 1]`.
    pub fn lerp(self, to: Fixed, t: Fixed) -> Fixed {
        self.lerp_unclamped(to, t.clamp01())
    }

    pub fn lerp_unclamped(self, to: Fixed, t: Fixed) -> Fixed {
        self + (to - self) * t
    }

    /// Wraps `self` into `[0, length]`.
    pub fn repeat(self, length: Fixed) -> Fixed {
        (self - (self / length).floor() * length).clamp(Fixed::ZERO, length)
    }

    /// Interpolates between two angles in radians along the shorter arc.
    pub fn lerp_angle(self, to: Fixed, t: Fixed) -> Fixed {
        let mut delta = (to - self).repeat(Fixed::TWO_PI);
        if delta > Fixed::PI {
            delta -= Fixed::TWO_PI;
        }
        self.lerp(self + delta, t)
    }

    /// Remainder of the angle modulo `PI`, keeping the sign.
    pub fn normalize_radians(self) -> Fixed {
        Fixed::from_raw(self.raw() % Fixed::PI.raw())
    }

    /// `MINUS_ONE` for negative values, `ONE` otherwise (zero included).
    pub fn sign(self) -> Fixed {
        if self.is_negative() {
            Fixed::MINUS_ONE
        } else {
            Fixed::ONE
        }
    }

    pub fn is_opposite_sign(self, other: Fixed) -> bool {
        (self.raw() ^ other.raw()) < 0
    }

    /// `self` with its sign flipped when it disagrees with `reference`.
    pub fn set_same_sign(self, reference: Fixed) -> Fixed {
        if self.is_opposite_sign(reference) {
            -self
        } else {
            self
        }
    }

    /// `2^power` for `power` in `0..=46`.
    pub fn pow2(power: u32) -> Fixed {
        Fixed::from_raw(ONE_RAW.wrapping_shl(power))
    }
}

/// Index of the highest set bit. `0` maps to `0`.
pub fn bit_scan_reverse(value: u32) -> u32 {
    let mut value = value;
    value |= value >> 1;
    value |= value >> 2;
    value |= value >> 4;
    value |= value >> 8;
    value |= value >> 16;
    BSR_LOOKUP[(value.wrapping_mul(DE_BRUIJN) >> 27) as usize] as u32
}

pub fn count_leading_zeroes(value: u32) -> u32 {
    if value == 0 {
        32
    } else {
        bit_scan_reverse(value) ^ 31
    }
}

/// Picks `to` once `t` passes one half.
pub fn lerp_bool(from: bool, to: bool, t: Fixed) -> bool {
    if t > Fixed::HALF { to } else { from }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqrt_of_perfect_squares() {
        assert_eq!(Fixed::from_int(25).sqrt(), Fixed::FIVE);
        assert_eq!(Fixed::from_int(10_000).sqrt(), Fixed::HUNDRED);
        assert_eq!(Fixed::P0_25.sqrt(), Fixed::HALF);
        assert_eq!(Fixed::ZERO.sqrt(), Fixed::ZERO);
    }

    #[test]
    fn test_sqrt_keeps_eight_fraction_bits() {
        let root = Fixed::TWO.sqrt();
        assert_eq!(root.raw() & 0xFF, 0);
        assert!((root.to_f64() - std::f64::consts::SQRT_2).abs() < 1.0 / 256.0);
    }

    #[test]
    fn test_negative_sqrt() {
        assert_eq!(Fixed::MINUS_ONE.checked_sqrt(), None);
    }

    #[test]
    #[should_panic(expected = "sqrt of negative value")]
    fn test_negative_sqrt_panics() {
        Fixed::MINUS_ONE.sqrt();
    }

    #[test]
    fn test_reciprocals() {
        assert_eq!(Fixed::P0_25.rcp(), Fixed::FOUR);
        assert_eq!(Fixed::FOUR.rsqrt(), Fixed::HALF);
        assert_eq!(Fixed::ZERO.checked_rcp(), None);
        assert_eq!(Fixed::ZERO.checked_rsqrt(), None);
        assert_eq!(Fixed::MINUS_ONE.checked_rsqrt(), None);
        assert_eq!(Fixed::HALF.checked_rcp(), Some(Fixed::TWO));
    }

    #[test]
    fn test_exp() {
        assert_eq!(Fixed::ZERO.exp(), Fixed::ONE);
        assert_eq!(Fixed::ONE.exp(), Fixed::E);
        assert_eq!(Fixed::from_int(40).exp(), Fixed::MAX);
        assert_eq!(Fixed::from_int(-20).exp(), Fixed::ZERO);
        for value in [2.0, 0.5, -1.0, -3.0] {
            let expected = f64::exp(value);
            let actual = Fixed::from_f64_unsafe(value).exp().to_f64();
            assert!(
                (actual - expected).abs() < 0.01,
                "exp({}) = {}, expected {}",
                value,
                actual,
                expected
            );
        }
    }

    #[test]
    fn test_rounding() {
        let five_quarter = Fixed::FIVE + Fixed::P0_25;
        assert_eq!(five_quarter.floor(), Fixed::FIVE);
        assert_eq!(five_quarter.ceil(), Fixed::SIX);
        assert_eq!(Fixed::FIVE.ceil(), Fixed::FIVE);
        assert_eq!((-five_quarter).floor(), -Fixed::SIX);
        assert_eq!((-five_quarter).ceil(), -Fixed::FIVE);
        assert_eq!(five_quarter.fractions(), Fixed::P0_25);
        assert_eq!((-Fixed::P0_25).fractions(), Fixed::P0_75);
    }

    #[test]
    fn test_round_to_int() {
        let five_quarter = Fixed::FIVE + Fixed::P0_25;
        assert_eq!(five_quarter.round_to_int(), 5);
        assert_eq!((five_quarter + Fixed::P0_33).round_to_int(), 6);
        assert_eq!((Fixed::FIVE + Fixed::HALF).round_to_int(), 6);
        assert_eq!((-Fixed::FIVE - Fixed::HALF).round_to_int(), -5);
    }

    #[test]
    fn test_min_max_abs_clamp() {
        assert_eq!(Fixed::ONE.min(Fixed::TWO), Fixed::ONE);
        assert_eq!(Fixed::ONE.max(Fixed::TWO), Fixed::TWO);
        assert_eq!((-Fixed::THREE).abs(), Fixed::THREE);
        assert_eq!(Fixed::MIN.abs(), Fixed::MIN);
        assert_eq!(Fixed::TEN.clamp(Fixed::ZERO, Fixed::FIVE), Fixed::FIVE);
        assert_eq!((-Fixed::TEN).clamp(Fixed::ZERO, Fixed::FIVE), Fixed::ZERO);
        assert_eq!(Fixed::ONE.clamp(Fixed::FIVE, Fixed::ZERO), Fixed::FIVE);
        assert_eq!(Fixed::P1_50.clamp01(), Fixed::ONE);
        assert_eq!((-Fixed::HALF).clamp01(), Fixed::ZERO);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(Fixed::ZERO.lerp(Fixed::TEN, Fixed::HALF), Fixed::FIVE);
        assert_eq!(Fixed::ZERO.lerp(Fixed::TEN, Fixed::TWO), Fixed::TEN);
        assert_eq!(Fixed::ZERO.lerp_unclamped(Fixed::TEN, Fixed::TWO), Fixed::from_int(20));
    }

    #[test]
    fn test_repeat_wraps_into_range() {
        assert_eq!(Fixed::SEVEN.repeat(Fixed::FIVE), Fixed::TWO);
        assert_eq!((-Fixed::ONE).repeat(Fixed::FIVE), Fixed::FOUR);
        assert_eq!(Fixed::FIVE.repeat(Fixed::FIVE), Fixed::ZERO);
    }

    #[test]
    fn test_lerp_angle_takes_the_short_way() {
        // From 0.1 rad to -0.1 rad (= 2PI - 0.1) passes through zero.
        let from = Fixed::P0_10;
        let to = -Fixed::P0_10;
        let mid = from.lerp_angle(to, Fixed::HALF);
        assert!(mid.abs().raw() <= 2, "mid = {}", mid);
    }

    #[test]
    fn test_sign_helpers() {
        assert_eq!(Fixed::ZERO.sign(), Fixed::ONE);
        assert_eq!((-Fixed::P0_01).sign(), Fixed::MINUS_ONE);
        assert!(Fixed::ONE.is_opposite_sign(Fixed::MINUS_ONE));
        assert!(!Fixed::ONE.is_opposite_sign(Fixed::TWO));
        assert_eq!(Fixed::THREE.set_same_sign(Fixed::MINUS_ONE), -Fixed::THREE);
        assert_eq!((-Fixed::THREE).set_same_sign(Fixed::MINUS_ONE), -Fixed::THREE);
        assert_eq!(Fixed::from_int(4).normalize_radians(), Fixed::from_raw(262_144 - 205_887));
    }

    #[test]
    fn test_pow2() {
        assert_eq!(Fixed::pow2(0), Fixed::ONE);
        assert_eq!(Fixed::pow2(3), Fixed::EIGHT);
    }

    #[test]
    fn test_bit_scans() {
        assert_eq!(bit_scan_reverse(1), 0);
        assert_eq!(bit_scan_reverse(0x8000_0000), 31);
        assert_eq!(count_leading_zeroes(5_435_345), 9);
        assert_eq!(count_leading_zeroes(4), 29);
        assert_eq!(count_leading_zeroes(0), 32);
        for shift in 0..32 {
            assert_eq!(count_leading_zeroes(1u32 << shift), (1u32 << shift).leading_zeros());
        }
    }

    #[test]
    fn test_lerp_bool() {
        assert!(!lerp_bool(false, true, Fixed::HALF));
        assert!(lerp_bool(false, true, Fixed::P0_75));
    }
}
