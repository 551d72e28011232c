//! Planar geometry on [`FixedVec2`].

use super::scalar::Fixed;
use super::vector::FixedVec2;

impl FixedVec2 {
    pub const LEFT: Self = Self::new(Fixed::MINUS_ONE, Fixed::ZERO);
    pub const RIGHT: Self = Self::new(Fixed::ONE, Fixed::ZERO);
    pub const UP: Self = Self::new(Fixed::ZERO, Fixed::ONE);
    pub const DOWN: Self = Self::new(Fixed::ZERO, Fixed::MINUS_ONE);

    /// Z component of the 3D cross product.
    pub fn cross(self, other: Self) -> Fixed {
        self.x * other.y - self.y * other.x
    }

    /// `self × s`, treating `s` as a vector along Z.
    pub fn cross_scalar(self, s: Fixed) -> Self {
        Self::new(s * self.y, -s * self.x)
    }

    /// `s × v`, treating `s` as a vector along Z.
    pub fn scalar_cross(s: Fixed, v: Self) -> Self {
        Self::new(-s * v.y, s * v.x)
    }

    /// Unsigned angle in degrees.
    pub fn angle(self, other: Self) -> Fixed {
        self.radians(other) * Fixed::RAD2DEG
    }

    /// Unsigned angle in radians, `[0, PI]`.
    pub fn radians(self, other: Self) -> Fixed {
        self.normalize().radians_skip_normalize(other.normalize())
    }

    /// Angle in radians, negative when `other` lies clockwise of `self`.
    pub fn radians_signed(self, other: Self) -> Fixed {
        self.radians(other) * self.turn_sign(other)
    }

    /// [`Self::radians`] for vectors that are already unit length.
    pub fn radians_skip_normalize(self, other: Self) -> Fixed {
        self.dot(other).clamp(Fixed::MINUS_ONE, Fixed::ONE).acos()
    }

    /// [`Self::radians_signed`] for vectors that are already unit length.
    pub fn radians_signed_skip_normalize(self, other: Self) -> Fixed {
        self.radians_skip_normalize(other) * self.turn_sign(other)
    }

    fn turn_sign(self, other: Self) -> Fixed {
        if self.cross(other) < Fixed::ZERO {
            Fixed::MINUS_ONE
        } else {
            Fixed::ONE
        }
    }

    /// Mirrors `self` about the line with unit `normal`.
    pub fn reflect(self, normal: Self) -> Self {
        let twice_dot = Fixed::TWO * self.dot(normal);
        Self::new(self.x - twice_dot * normal.x, self.y - twice_dot * normal.y)
    }

    /// Rotates counter-clockwise by `angle` radians.
    pub fn rotate(self, angle: Fixed) -> Self {
        let (sin, cos) = (angle.sin(), angle.cos());
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}
