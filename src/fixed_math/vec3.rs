//! Spatial geometry on [`FixedVec3`].

use super::scalar::Fixed;
use super::vector::{FixedVec2, FixedVec3};

impl FixedVec3 {
    pub const LEFT: Self = Self::new(Fixed::MINUS_ONE, Fixed::ZERO, Fixed::ZERO);
    pub const RIGHT: Self = Self::new(Fixed::ONE, Fixed::ZERO, Fixed::ZERO);
    pub const UP: Self = Self::new(Fixed::ZERO, Fixed::ONE, Fixed::ZERO);
    pub const DOWN: Self = Self::new(Fixed::ZERO, Fixed::MINUS_ONE, Fixed::ZERO);
    pub const FORWARD: Self = Self::new(Fixed::ZERO, Fixed::ZERO, Fixed::ONE);
    pub const BACKWARD: Self = Self::new(Fixed::ZERO, Fixed::ZERO, Fixed::MINUS_ONE);

    pub const fn from_xy(xy: FixedVec2, z: Fixed) -> Self {
        Self::new(xy.x, xy.y, z)
    }

    pub const fn xy(self) -> FixedVec2 {
        FixedVec2::new(self.x, self.y)
    }

    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Mirrors `self` about the plane with unit `normal`.
    pub fn reflect(self, normal: Self) -> Self {
        let factor = -Fixed::TWO * normal.dot(self);
        normal * factor + self
    }

    /// Component of `self` along `normal`. Zero for a degenerate normal.
    pub fn project(self, normal: Self) -> Self {
        let magnitude_sqr = normal.magnitude_sqr();
        if magnitude_sqr < Fixed::EPSILON {
            return Self::ZERO;
        }
        normal * self.dot(normal) / magnitude_sqr
    }

    /// `self` minus its component along `plane_normal`.
    pub fn project_on_plane(self, plane_normal: Self) -> Self {
        let magnitude_sqr = plane_normal.magnitude_sqr();
        if magnitude_sqr < Fixed::EPSILON {
            return self;
        }
        self - plane_normal * self.dot(plane_normal) / magnitude_sqr
    }

    /// Steps from `self` toward `target` by at most `max_delta`.
    pub fn move_towards(self, target: Self, max_delta: Fixed) -> Self {
        let delta = target - self;
        let magnitude_sqr = delta.magnitude_sqr();
        if delta == Self::ZERO
            || (max_delta >= Fixed::ZERO && magnitude_sqr <= max_delta * max_delta)
        {
            return target;
        }
        let magnitude = magnitude_sqr.sqrt();
        if magnitude <= Fixed::EPSILON {
            return target;
        }
        self + delta / magnitude * max_delta
    }

    /// Unsigned angle in degrees. Zero when either vector is degenerate.
    pub fn angle(self, other: Self) -> Fixed {
        let denominator = (self.magnitude_sqr() * other.magnitude_sqr()).sqrt();
        if denominator < Fixed::EPSILON {
            return Fixed::ZERO;
        }
        (self.dot(other) / denominator)
            .clamp(Fixed::MINUS_ONE, Fixed::ONE)
            .acos()
            * Fixed::RAD2DEG
    }

    /// Angle in degrees, negative when the turn from `self` to `other` runs
    /// clockwise around `axis`.
    pub fn angle_signed(self, other: Self, axis: Self) -> Fixed {
        let angle = self.angle(other);
        if axis.dot(self.cross(other)) < Fixed::ZERO {
            -angle
        } else {
            angle
        }
    }

    /// Unsigned angle in radians.
    pub fn radians(self, other: Self) -> Fixed {
        self.normalize().radians_skip_normalize(other.normalize())
    }

    /// [`Self::radians`] for vectors that are already unit length.
    pub fn radians_skip_normalize(self, other: Self) -> Fixed {
        self.dot(other).clamp(Fixed::MINUS_ONE, Fixed::ONE).acos()
    }
}
