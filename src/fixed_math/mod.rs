//! Deterministic fixed-point mathematics library.
//!
//! This module provides a Q16.16 number type and the math built on it, using
//! only integer arithmetic and lookup tables so every platform and
//! architecture produces bit-identical results. This is critical for
//! multiplayer lockstep networking where all clients must simulate
//! identically.
//!
//! Floats appear only at the edges: the `*_unsafe` constructors and the
//! `to_f32`/`to_f64` views are for tests, tuning and rendering, never for
//! simulation state.

use fixed::types::I48F16;

pub use error::FixedError;
pub use ops::{bit_scan_reverse, count_leading_zeroes, lerp_bool};
pub use parse::DECIMAL_DIGITS;
pub use quat::FixedQuat;
pub use random::DeterministicRandom;
pub use scalar::Fixed;
pub use vector::{FixedVec2, FixedVec3, FixedVec4};

mod error;
pub mod lut;
mod ops;
mod parse;
mod quat;
mod random;
mod scalar;
mod trig;
mod vec2;
mod vec3;
mod vec4;
mod vector;

#[cfg(feature = "bevy")]
mod bevy_interop;

/// The `fixed` crate view of the same 64-bit, 16-fraction-bit layout.
///
/// Uses I48F16 format: 48 bits for the integer part, 16 bits for the fractional part.
/// [`Fixed::to_fixed_num`] and `From<FixedNum>` convert without loss.
pub type FixedNum = I48F16;
