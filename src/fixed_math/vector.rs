//! Component-wise vector types over [`Fixed`].
//!
//! `FixedVec2`, `FixedVec3` and `FixedVec4` share everything that is the same
//! per component (operators, dot products, magnitudes, normalization,
//! interpolation); it is generated once here. Geometry that depends on the
//! arity lives in `vec2.rs`, `vec3.rs` and `vec4.rs`.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::scalar::Fixed;

macro_rules! vector_binary_op {
    (
        $name:ident { $($field:ident),+ },
        $op:ident $method:ident,
        $op_assign:ident $method_assign:ident
    ) => {
        impl std::ops::$op for $name {
            type Output = $name;
            #[inline]
            fn $method(self, rhs: $name) -> $name {
                $name { $($field: std::ops::$op::$method(self.$field, rhs.$field)),+ }
            }
        }

        impl std::ops::$op<Fixed> for $name {
            type Output = $name;
            #[inline]
            fn $method(self, rhs: Fixed) -> $name {
                $name { $($field: std::ops::$op::$method(self.$field, rhs)),+ }
            }
        }

        impl std::ops::$op<$name> for Fixed {
            type Output = $name;
            #[inline]
            fn $method(self, rhs: $name) -> $name {
                $name { $($field: std::ops::$op::$method(self, rhs.$field)),+ }
            }
        }

        impl std::ops::$op_assign for $name {
            #[inline]
            fn $method_assign(&mut self, rhs: $name) {
                *self = std::ops::$op::$method(*self, rhs);
            }
        }

        impl std::ops::$op_assign<Fixed> for $name {
            #[inline]
            fn $method_assign(&mut self, rhs: Fixed) {
                *self = std::ops::$op::$method(*self, rhs);
            }
        }
    };
}

macro_rules! fixed_vector {
    ($(#[$meta:meta])* $name:ident { $first:ident $(, $field:ident)* }, $len:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name {
            pub $first: Fixed,
            $(pub $field: Fixed,)*
        }

        impl $name {
            pub const ZERO: Self = Self::splat(Fixed::ZERO);
            pub const ONE: Self = Self::splat(Fixed::ONE);
            pub const MINUS_ONE: Self = Self::splat(Fixed::MINUS_ONE);

            #[inline]
            pub const fn new($first: Fixed $(, $field: Fixed)*) -> Self {
                Self { $first $(, $field)* }
            }

            #[inline]
            pub const fn splat(value: Fixed) -> Self {
                Self { $first: value $(, $field: value)* }
            }

            /// Builds a vector from whole numbers.
            pub const fn from_ints($first: i32 $(, $field: i32)*) -> Self {
                Self { $first: Fixed::from_int($first) $(, $field: Fixed::from_int($field))* }
            }

            pub const fn to_array(self) -> [Fixed; $len] {
                [self.$first $(, self.$field)*]
            }

            /// Applies `f` to every component.
            #[inline]
            pub fn map(self, f: impl Fn(Fixed) -> Fixed) -> Self {
                Self { $first: f(self.$first) $(, $field: f(self.$field))* }
            }

            /// Combines matching components of two vectors.
            #[inline]
            pub fn zip_map(self, other: Self, f: impl Fn(Fixed, Fixed) -> Fixed) -> Self {
                Self {
                    $first: f(self.$first, other.$first)
                    $(, $field: f(self.$field, other.$field))*
                }
            }

            /// Sum of the components.
            pub fn sum(self) -> Fixed {
                self.$first $(+ self.$field)*
            }

            pub fn abs(self) -> Self {
                self.map(Fixed::abs)
            }

            pub fn min(self, other: Self) -> Self {
                self.zip_map(other, Fixed::min)
            }

            pub fn max(self, other: Self) -> Self {
                self.zip_map(other, Fixed::max)
            }

            /// Component-wise clamp.
            pub fn clamp(self, min: Self, max: Self) -> Self {
                Self {
                    $first: self.$first.clamp(min.$first, max.$first)
                    $(, $field: self.$field.clamp(min.$field, max.$field))*
                }
            }

            pub fn dot(self, other: Self) -> Fixed {
                self.$first * other.$first $(+ self.$field * other.$field)*
            }

            pub fn magnitude_sqr(self) -> Fixed {
                self.dot(self)
            }

            pub fn magnitude(self) -> Fixed {
                self.magnitude_sqr().sqrt()
            }

            pub fn distance(self, other: Self) -> Fixed {
                (self - other).magnitude()
            }

            pub fn distance_sqr(self, other: Self) -> Fixed {
                (self - other).magnitude_sqr()
            }

            /// Unit vector in the same direction, or `ZERO` when the magnitude
            /// does not exceed one raw unit.
            pub fn normalize(self) -> Self {
                self.normalize_with_magnitude().0
            }

            /// Like [`Self::normalize`], also returning the magnitude.
            pub fn normalize_with_magnitude(self) -> (Self, Fixed) {
                let magnitude = self.magnitude();
                if magnitude <= Fixed::EPSILON {
                    (Self::ZERO, magnitude)
                } else {
                    (self / magnitude, magnitude)
                }
            }

            /// Shortens the vector to `length` if it is longer.
            pub fn magnitude_clamp(self, length: Fixed) -> Self {
                if self.magnitude_sqr() <= length * length {
                    self
                } else {
                    self.normalize() * length
                }
            }

            pub fn magnitude_set(self, length: Fixed) -> Self {
                self.normalize() * length
            }

            /// Interpolates with `t` clamped to `[0, 1]`.
            pub fn lerp(self, to: Self, t: Fixed) -> Self {
                self.lerp_unclamped(to, t.clamp01())
            }

            pub fn lerp_unclamped(self, to: Self, t: Fixed) -> Self {
                self.zip_map(to, |from, to| from.lerp_unclamped(to, t))
            }
        }

        vector_binary_op!($name { $first $(, $field)* }, Add add, AddAssign add_assign);
        vector_binary_op!($name { $first $(, $field)* }, Sub sub, SubAssign sub_assign);
        vector_binary_op!($name { $first $(, $field)* }, Mul mul, MulAssign mul_assign);
        vector_binary_op!($name { $first $(, $field)* }, Div div, DivAssign div_assign);
        vector_binary_op!($name { $first $(, $field)* }, Rem rem, RemAssign rem_assign);

        impl std::ops::Neg for $name {
            type Output = $name;
            #[inline]
            fn neg(self) -> $name {
                self.map(|v| -v)
            }
        }

        impl From<[Fixed; $len]> for $name {
            fn from([$first $(, $field)*]: [Fixed; $len]) -> Self {
                Self::new($first $(, $field)*)
            }
        }

        impl From<$name> for [Fixed; $len] {
            fn from(value: $name) -> Self {
                value.to_array()
            }
        }

        impl std::iter::Sum for $name {
            fn sum<I: Iterator<Item = $name>>(iter: I) -> $name {
                iter.fold($name::ZERO, |acc, v| acc + v)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "(")?;
                fmt::Display::fmt(&self.$first, f)?;
                $(
                    write!(f, ", ")?;
                    fmt::Display::fmt(&self.$field, f)?;
                )*
                write!(f, ")")
            }
        }
    };
}

fixed_vector!(
    /// Two-component fixed-point vector.
    FixedVec2 { x, y },
    2
);

fixed_vector!(
    /// Three-component fixed-point vector.
    FixedVec3 { x, y, z },
    3
);

fixed_vector!(
    /// Four-component fixed-point vector.
    FixedVec4 { x, y, z, w },
    4
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_componentwise_operators() {
        let a = FixedVec3::from_ints(1, 2, 3);
        let b = FixedVec3::from_ints(4, 5, 6);
        assert_eq!(a + b, FixedVec3::from_ints(5, 7, 9));
        assert_eq!(b - a, FixedVec3::splat(Fixed::THREE));
        assert_eq!(a * b, FixedVec3::from_ints(4, 10, 18));
        assert_eq!(a * Fixed::TWO, FixedVec3::from_ints(2, 4, 6));
        assert_eq!(Fixed::TWO * a, FixedVec3::from_ints(2, 4, 6));
        assert_eq!(b / Fixed::TWO, FixedVec3::new(Fixed::TWO, Fixed::FIVE / 2, Fixed::THREE));
        assert_eq!(Fixed::SIX / a, FixedVec3::from_ints(6, 3, 2));
        assert_eq!(b % a, FixedVec3::from_ints(0, 1, 0));
        assert_eq!(-a, FixedVec3::from_ints(-1, -2, -3));
    }

    #[test]
    fn test_assign_operators() {
        let mut v = FixedVec2::ONE;
        v += FixedVec2::ONE;
        v *= Fixed::THREE;
        v -= Fixed::ONE;
        assert_eq!(v, FixedVec2::from_ints(5, 5));
    }

    #[test]
    fn test_dot_and_magnitude() {
        let v = FixedVec3::from_ints(5, 0, 0);
        assert_eq!(v.dot(v), Fixed::from_int(25));
        assert_eq!(v.magnitude_sqr(), Fixed::FIVE * Fixed::FIVE);
        assert_eq!(v.magnitude(), Fixed::FIVE);
        assert_eq!(FixedVec3::from_ints(1, 5, 4).dot(FixedVec3::from_ints(2, 0, 1)), Fixed::SIX);
        assert_eq!(FixedVec2::from_ints(3, 4).magnitude(), Fixed::FIVE);
        assert_eq!(FixedVec4::from_ints(1, 1, 1, 1).magnitude(), Fixed::TWO);
    }

    #[test]
    fn test_distance() {
        let a = FixedVec2::from_ints(1, 1);
        let b = FixedVec2::from_ints(4, 5);
        assert_eq!(a.distance(b), Fixed::FIVE);
        assert_eq!(a.distance_sqr(b), Fixed::from_int(25));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(FixedVec3::from_ints(5, 0, 0).normalize(), FixedVec3::from_ints(1, 0, 0));
        assert_eq!(FixedVec2::ZERO.normalize(), FixedVec2::ZERO);
        // Too short to carry a direction.
        let tiny = FixedVec3::new(Fixed::EPSILON, Fixed::ZERO, Fixed::ZERO);
        assert_eq!(tiny.normalize(), FixedVec3::ZERO);
        let (unit, magnitude) = FixedVec4::from_ints(0, 0, 0, 7).normalize_with_magnitude();
        assert_eq!(unit, FixedVec4::from_ints(0, 0, 0, 1));
        assert_eq!(magnitude, Fixed::SEVEN);
    }

    #[test]
    fn test_magnitude_clamp_and_set() {
        let v = FixedVec3::from_ints(5, 0, 0);
        let clamped = v.magnitude_clamp(Fixed::P1_10);
        assert!((clamped.x.to_f64() - 1.10).abs() < 0.01);
        assert_eq!(clamped.y, Fixed::ZERO);
        assert_eq!(clamped.z, Fixed::ZERO);
        assert_eq!(v.magnitude_clamp(Fixed::TEN), v);
        assert_eq!(v.magnitude_set(Fixed::TWO), FixedVec3::from_ints(2, 0, 0));
    }

    #[test]
    fn test_lerp() {
        let from = FixedVec3::from_ints(5, 0, 5);
        let half = Fixed::TWO + Fixed::HALF;
        assert_eq!(
            from.lerp(FixedVec3::ZERO, Fixed::HALF),
            FixedVec3::new(half, Fixed::ZERO, half)
        );
        assert_eq!(from.lerp(FixedVec3::ZERO, Fixed::TWO), FixedVec3::ZERO);
        assert_eq!(from.lerp_unclamped(FixedVec3::ZERO, Fixed::TWO), -from);
    }

    #[test]
    fn test_component_helpers() {
        let a = FixedVec4::from_ints(1, -2, 3, -4);
        let b = FixedVec4::from_ints(-1, 2, 2, 0);
        assert_eq!(a.sum(), Fixed::from_int(-2));
        assert_eq!(a.abs(), FixedVec4::from_ints(1, 2, 3, 4));
        assert_eq!(a.min(b), FixedVec4::from_ints(-1, -2, 2, -4));
        assert_eq!(a.max(b), FixedVec4::from_ints(1, 2, 3, 0));
        assert_eq!(
            a.clamp(FixedVec4::splat(-Fixed::TWO), FixedVec4::splat(Fixed::TWO)),
            FixedVec4::from_ints(1, -2, 2, -2)
        );
        let array: [Fixed; 4] = a.into();
        assert_eq!(FixedVec4::from(array), a);
    }

    #[test]
    fn test_display() {
        assert_eq!(FixedVec2::from_ints(1, -2).to_string(), "(1.00000, -2.00000)");
        assert_eq!(format!("{:.1}", FixedVec3::ONE), "(1.0, 1.0, 1.0)");
    }

    #[test]
    fn test_serializes_as_raw_components() {
        let v = FixedVec2::new(Fixed::ONE, Fixed::from_raw(-1));
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"x":65536,"y":-1}"#);
        assert_eq!(serde_json::from_str::<FixedVec2>(&json).unwrap(), v);
    }
}
