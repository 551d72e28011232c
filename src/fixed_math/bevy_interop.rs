//! Float views for rendering. Never feed these back into the simulation.

use bevy::math::{Quat, Vec2, Vec3, Vec4};

use super::quat::FixedQuat;
use super::scalar::Fixed;
use super::vector::{FixedVec2, FixedVec3, FixedVec4};

impl FixedVec2 {
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x.to_f32(), self.y.to_f32())
    }

    pub fn from_vec2_unsafe(v: Vec2) -> Self {
        Self::new(Fixed::from_f32_unsafe(v.x), Fixed::from_f32_unsafe(v.y))
    }
}

impl FixedVec3 {
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x.to_f32(), self.y.to_f32(), self.z.to_f32())
    }

    pub fn from_vec3_unsafe(v: Vec3) -> Self {
        Self::new(
            Fixed::from_f32_unsafe(v.x),
            Fixed::from_f32_unsafe(v.y),
            Fixed::from_f32_unsafe(v.z),
        )
    }
}

impl FixedVec4 {
    pub fn to_vec4(self) -> Vec4 {
        Vec4::new(self.x.to_f32(), self.y.to_f32(), self.z.to_f32(), self.w.to_f32())
    }

    pub fn from_vec4_unsafe(v: Vec4) -> Self {
        Self::new(
            Fixed::from_f32_unsafe(v.x),
            Fixed::from_f32_unsafe(v.y),
            Fixed::from_f32_unsafe(v.z),
            Fixed::from_f32_unsafe(v.w),
        )
    }
}

impl FixedQuat {
    pub fn to_quat(self) -> Quat {
        Quat::from_xyzw(self.x.to_f32(), self.y.to_f32(), self.z.to_f32(), self.w.to_f32())
    }

    pub fn from_quat_unsafe(q: Quat) -> Self {
        Self::new(
            Fixed::from_f32_unsafe(q.x),
            Fixed::from_f32_unsafe(q.y),
            Fixed::from_f32_unsafe(q.z),
            Fixed::from_f32_unsafe(q.w),
        )
    }
}
