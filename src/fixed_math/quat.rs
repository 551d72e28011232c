//! Rotation quaternion over [`Fixed`], following Unity's conventions:
//! left-handed, Y up, Euler angles applied Z then X then Y.

use std::fmt;
use std::ops::{Index, IndexMut, Mul};

use serde::{Deserialize, Serialize};

use super::scalar::Fixed;
use super::vector::FixedVec3;

/// Euler angles within this many degrees below zero are left alone by
/// [`FixedQuat::make_positive`] (about `-0.0001` rad).
const NEGATIVE_FLIP: Fixed = Fixed::from_raw(-344);
const POSITIVE_FLIP: Fixed = Fixed::from_raw(Fixed::THREE_SIXTY.raw() + NEGATIVE_FLIP.raw());

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FixedQuat {
    pub x: Fixed,
    pub y: Fixed,
    pub z: Fixed,
    pub w: Fixed,
}

impl Default for FixedQuat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl FixedQuat {
    pub const IDENTITY: Self = Self::new(Fixed::ZERO, Fixed::ZERO, Fixed::ZERO, Fixed::ONE);

    pub const fn new(x: Fixed, y: Fixed, z: Fixed, w: Fixed) -> Self {
        Self { x, y, z, w }
    }

    /// Component by index (`x, y, z, w`), or `None` outside `0..4`.
    pub fn get(&self, index: usize) -> Option<Fixed> {
        match index {
            0 => Some(self.x),
            1 => Some(self.y),
            2 => Some(self.z),
            3 => Some(self.w),
            _ => None,
        }
    }

    pub fn dot(self, other: Self) -> Fixed {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Whether two unit quaternions describe the same rotation.
    pub fn approx_eq(self, other: Self) -> bool {
        Self::same_rotation(self.dot(other))
    }

    fn same_rotation(dot: Fixed) -> bool {
        dot > Fixed::ONE - Fixed::EPSILON
    }

    /// Angle between two rotations in degrees.
    pub fn angle(self, other: Self) -> Fixed {
        let dot = self.dot(other).abs().min(Fixed::ONE);
        if Self::same_rotation(dot) {
            Fixed::ZERO
        } else {
            dot.acos() * Fixed::TWO * Fixed::RAD2DEG
        }
    }

    /// Unit-length copy, or `IDENTITY` when the magnitude is zero.
    pub fn normalize(self) -> Self {
        let magnitude = self.dot(self).sqrt();
        if magnitude < Fixed::EPSILON {
            return Self::IDENTITY;
        }
        Self::new(
            self.x / magnitude,
            self.y / magnitude,
            self.z / magnitude,
            self.w / magnitude,
        )
    }

    /// Rotation whose Z axis points along `forward` and whose Y axis leans
    /// toward `up`.
    pub fn look_rotation(forward: FixedVec3, up: FixedVec3) -> Self {
        let forward = forward.normalize();
        let right = up.cross(forward).normalize();
        let up = forward.cross(right);

        let (m00, m01, m02) = (right.x, right.y, right.z);
        let (m10, m11, m12) = (up.x, up.y, up.z);
        let (m20, m21, m22) = (forward.x, forward.y, forward.z);

        let trace = m00 + m11 + m22;
        if trace > Fixed::ZERO {
            let root = (trace + Fixed::ONE).sqrt();
            let scale = Fixed::HALF / root;
            return Self::new(
                (m12 - m21) * scale,
                (m20 - m02) * scale,
                (m01 - m10) * scale,
                root * Fixed::HALF,
            );
        }
        if m00 >= m11 && m00 >= m22 {
            let root = (Fixed::ONE + m00 - m11 - m22).sqrt();
            let scale = Fixed::HALF / root;
            return Self::new(
                Fixed::HALF * root,
                (m01 + m10) * scale,
                (m02 + m20) * scale,
                (m12 - m21) * scale,
            );
        }
        if m11 > m22 {
            let root = (Fixed::ONE + m11 - m00 - m22).sqrt();
            let scale = Fixed::HALF / root;
            return Self::new(
                (m10 + m01) * scale,
                Fixed::HALF * root,
                (m21 + m12) * scale,
                (m20 - m02) * scale,
            );
        }
        let root = (Fixed::ONE + m22 - m00 - m11).sqrt();
        let scale = Fixed::HALF / root;
        Self::new(
            (m20 + m02) * scale,
            (m21 + m12) * scale,
            Fixed::HALF * root,
            (m01 - m10) * scale,
        )
    }

    /// Euler angles in degrees, each in `[0, 360)` give or take a hair.
    pub fn euler_angles(self) -> FixedVec3 {
        Self::make_positive(self.to_euler_rad() * Fixed::RAD2DEG)
    }

    pub fn from_euler_angles(degrees: FixedVec3) -> Self {
        Self::from_euler_rad(degrees * Fixed::DEG2RAD)
    }

    /// Euler angles in radians (roll about X, pitch about Y, yaw about Z).
    pub fn to_euler_rad(self) -> FixedVec3 {
        let Self { x, y, z, w } = self;

        let sinr_cosp = 2 * (w * x + y * z);
        let cosr_cosp = 1 - 2 * (x * x + y * y);
        let roll = sinr_cosp.atan2(cosr_cosp);

        let sinp = 2 * (w * y - z * x);
        let pitch = if sinp.abs() >= Fixed::ONE {
            (Fixed::PI / 2).set_same_sign(sinp)
        } else {
            sinp.asin()
        };

        let siny_cosp = 2 * (w * z + x * y);
        let cosy_cosp = 1 - 2 * (y * y + z * z);
        let yaw = siny_cosp.atan2(cosy_cosp);

        FixedVec3::new(roll, pitch, yaw)
    }

    pub fn from_euler_rad(euler: FixedVec3) -> Self {
        let (sy, cy) = (euler.z * Fixed::HALF).sin_cos();
        let (sp, cp) = (euler.y * Fixed::HALF).sin_cos();
        let (sr, cr) = (euler.x * Fixed::HALF).sin_cos();

        Self::new(
            sr * cp * cy - cr * sp * sy,
            cr * sp * cy + sr * cp * sy,
            cr * cp * sy - sr * sp * cy,
            cr * cp * cy + sr * sp * sy,
        )
    }

    /// Wraps Euler angles in degrees into `[0, 360)`, tolerating a tiny
    /// negative error instead of flipping it to almost 360.
    pub fn make_positive(euler: FixedVec3) -> FixedVec3 {
        euler.map(|angle| {
            if angle < NEGATIVE_FLIP {
                angle + Fixed::THREE_SIXTY
            } else if angle > POSITIVE_FLIP {
                angle - Fixed::THREE_SIXTY
            } else {
                angle
            }
        })
    }
}

impl Mul for FixedQuat {
    type Output = FixedQuat;

    fn mul(self, rhs: FixedQuat) -> FixedQuat {
        let (l, r) = (self, rhs);
        FixedQuat::new(
            l.w * r.x + l.x * r.w + l.y * r.z - l.z * r.y,
            l.w * r.y + l.y * r.w + l.z * r.x - l.x * r.z,
            l.w * r.z + l.z * r.w + l.x * r.y - l.y * r.x,
            l.w * r.w - l.x * r.x - l.y * r.y - l.z * r.z,
        )
    }
}

impl Mul<FixedVec3> for FixedQuat {
    type Output = FixedVec3;

    /// Rotates `point`.
    fn mul(self, point: FixedVec3) -> FixedVec3 {
        let x = self.x * Fixed::TWO;
        let y = self.y * Fixed::TWO;
        let z = self.z * Fixed::TWO;
        let xx = self.x * x;
        let yy = self.y * y;
        let zz = self.z * z;
        let xy = self.x * y;
        let xz = self.x * z;
        let yz = self.y * z;
        let wx = self.w * x;
        let wy = self.w * y;
        let wz = self.w * z;

        FixedVec3::new(
            (Fixed::ONE - (yy + zz)) * point.x + (xy - wz) * point.y + (xz + wy) * point.z,
            (xy + wz) * point.x + (Fixed::ONE - (xx + zz)) * point.y + (yz - wx) * point.z,
            (xz - wy) * point.x + (yz + wx) * point.y + (Fixed::ONE - (xx + yy)) * point.z,
        )
    }
}

impl Index<usize> for FixedQuat {
    type Output = Fixed;

    fn index(&self, index: usize) -> &Fixed {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("quaternion index {} out of range 0..4", index),
        }
    }
}

impl IndexMut<usize> for FixedQuat {
    fn index_mut(&mut self, index: usize) -> &mut Fixed {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("quaternion index {} out of range 0..4", index),
        }
    }
}

impl fmt::Display for FixedQuat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}
