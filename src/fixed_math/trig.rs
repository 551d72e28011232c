//! Trigonometry on [`Fixed`] radians.
//!
//! Forward functions reduce the angle to a turn fraction
//! (`raw % TWO_PI`, then `* ONE_DIV_TWO_PI`) and interpolate the tables in
//! [`super::lut`]. Inverse sine and cosine read the arcsine table directly.
//! Arctangent uses a fifth-order odd polynomial, no tables.

use super::lut;
use super::scalar::Fixed;

const ATAN2_COEFFICIENTS: [i64; 6] = [-883, 3_767, -7_945, 12_821, -21_822, 65_536];
const ATAN_APPROX_LINEAR: Fixed = Fixed::from_raw(16_036);
const ATAN_APPROX_QUADRATIC: Fixed = Fixed::from_raw(4_345);

#[inline]
fn to_turn(radians: Fixed) -> i64 {
    (Fixed::from_raw(radians.raw() % Fixed::TWO_PI.raw()) * Fixed::ONE_DIV_TWO_PI).raw()
}

#[inline]
fn in_unit_range(value: Fixed) -> bool {
    value.raw().unsigned_abs() <= Fixed::ONE.raw() as u64
}

impl Fixed {
    pub fn sin(self) -> Fixed {
        Fixed::from_raw(lut::sin(to_turn(self)))
    }

    pub fn cos(self) -> Fixed {
        Fixed::from_raw(lut::cos(to_turn(self)))
    }

    /// Tangent. Near the poles the result saturates at `i32::MAX` raw.
    pub fn tan(self) -> Fixed {
        Fixed::from_raw(lut::tan(to_turn(self)))
    }

    /// `(sin, cos)` from a single table walk.
    pub fn sin_cos(self) -> (Fixed, Fixed) {
        let (sin, cos) = lut::sin_cos(to_turn(self));
        (Fixed::from_raw(sin), Fixed::from_raw(cos))
    }

    /// Arcsine in `[-PI/2, PI/2]`.
    ///
    /// # Panics
    ///
    /// Panics if `self` is outside `[-1, 1]`.
    pub fn asin(self) -> Fixed {
        self.checked_asin()
            .unwrap_or_else(|| panic!("asin argument {} is outside [-1, 1]", self))
    }

    /// Arccosine in `[0, PI]`.
    ///
    /// # Panics
    ///
    /// Panics if `self` is outside `[-1, 1]`.
    pub fn acos(self) -> Fixed {
        self.checked_acos()
            .unwrap_or_else(|| panic!("acos argument {} is outside [-1, 1]", self))
    }

    pub fn checked_asin(self) -> Option<Fixed> {
        in_unit_range(self).then(|| Fixed::from_raw(lut::asin(self.raw())))
    }

    pub fn checked_acos(self) -> Option<Fixed> {
        in_unit_range(self).then(|| Fixed::from_raw(lut::acos(self.raw())))
    }

    pub fn atan(self) -> Fixed {
        self.atan2(Fixed::ONE)
    }

    /// Angle of the point `(x, self)`, in `[-PI, PI]`.
    ///
    /// Panics when both coordinates are zero, like a division by zero.
    pub fn atan2(self, x: Fixed) -> Fixed {
        let y = self;
        let abs_x = x.abs();
        let abs_y = y.abs();
        let ratio = abs_x.min(abs_y) * (Fixed::ONE / abs_x.max(abs_y));
        let square = ratio * ratio;

        let mut poly = Fixed::from_raw(ATAN2_COEFFICIENTS[0]);
        for &coefficient in &ATAN2_COEFFICIENTS[1..] {
            poly = poly * square + Fixed::from_raw(coefficient);
        }
        let mut angle = poly * ratio;

        if abs_y > abs_x {
            angle = Fixed::PI_HALF - angle;
        }
        if x < Fixed::ZERO {
            angle = Fixed::PI - angle;
        }
        if y < Fixed::ZERO {
            angle = -angle;
        }
        angle
    }

    /// Cheap arctangent for inputs in `[-1, 1]`, max error ~0.0015 rad.
    pub fn atan_approximated(self) -> Fixed {
        let abs = self.abs();
        Fixed::PI_QUARTER * self
            - self * (abs - Fixed::ONE) * (ATAN_APPROX_LINEAR + ATAN_APPROX_QUADRATIC * abs)
    }
}
