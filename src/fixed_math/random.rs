//! Deterministic 32-bit xorshift generator producing [`Fixed`] values.
//!
//! The state is a single non-zero `u32`, so a generator can be stored in a
//! snapshot or sent over the wire as four bytes and resumed bit-exactly.

use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::FixedError;
use super::scalar::Fixed;
use super::vector::{FixedVec2, FixedVec3, FixedVec4};

/// Substitute state for an all-zero seed handed to [`SeedableRng::from_seed`].
pub const FALLBACK_SEED: u32 = 0x9E37_79B9;

/// Serializes as the bare `u32` state. Deserializing restores that state
/// without advancing and rejects zero.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct DeterministicRandom {
    state: u32,
}

impl DeterministicRandom {
    /// Seeds the generator and advances it once.
    ///
    /// # Panics
    ///
    /// Panics if `seed` is zero, which would lock xorshift at zero forever.
    pub fn new(seed: u32) -> Self {
        match Self::try_new(seed) {
            Ok(random) => random,
            Err(err) => panic!("{}", err),
        }
    }

    pub fn try_new(seed: u32) -> Result<Self, FixedError> {
        let mut random = Self { state: 1 };
        random.set_state(seed)?;
        Ok(random)
    }

    /// Reseeds in place, advancing once like [`Self::new`].
    pub fn set_state(&mut self, seed: u32) -> Result<(), FixedError> {
        if seed == 0 {
            return Err(FixedError::ZeroSeed);
        }
        self.state = seed;
        self.next_state();
        Ok(())
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    /// Returns the current state and advances.
    #[inline]
    fn next_state(&mut self) -> u32 {
        let current = self.state;
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        current
    }

    pub fn next_bool(&mut self) -> bool {
        self.next_state() & 1 == 1
    }

    /// Any `i32` except `i32::MIN`.
    pub fn next_int(&mut self) -> i32 {
        (self.next_state() as i32) ^ i32::MIN
    }

    /// Value in `[0, max)`; for `max <= 0` the result follows the same
    /// multiply-high on the sign-extended bound.
    pub fn next_int_max(&mut self, max: i32) -> i32 {
        ((self.next_state() as u64).wrapping_mul(max as i64 as u64) >> 32) as i32
    }

    /// Value in `[min, max)`.
    pub fn next_int_range(&mut self, min: i32, max: i32) -> i32 {
        let range = max.wrapping_sub(min) as u32;
        ((((self.next_state() as u64) * (range as u64)) >> 32) as i32).wrapping_add(min)
    }

    /// Value in `[0, 1)`.
    pub fn next_fixed(&mut self) -> Fixed {
        Fixed::from_raw(self.next_int_range(0, 65_535) as i64)
    }

    pub fn next_fixed_max(&mut self, max: Fixed) -> Fixed {
        self.next_fixed() * max
    }

    pub fn next_fixed_range(&mut self, min: Fixed, max: Fixed) -> Fixed {
        self.next_fixed() * (max - min) + min
    }

    /// Components drawn in `x, y` order.
    pub fn next_vec2(&mut self) -> FixedVec2 {
        let x = self.next_fixed();
        let y = self.next_fixed();
        FixedVec2::new(x, y)
    }

    /// Components drawn in `x, y, z` order.
    pub fn next_vec3(&mut self) -> FixedVec3 {
        let x = self.next_fixed();
        let y = self.next_fixed();
        let z = self.next_fixed();
        FixedVec3::new(x, y, z)
    }

    /// Components drawn in `x, y, z, w` order.
    pub fn next_vec4(&mut self) -> FixedVec4 {
        let x = self.next_fixed();
        let y = self.next_fixed();
        let z = self.next_fixed();
        let w = self.next_fixed();
        FixedVec4::new(x, y, z, w)
    }

    pub fn next_vec2_max(&mut self, max: FixedVec2) -> FixedVec2 {
        self.next_vec2() * max
    }

    pub fn next_vec3_max(&mut self, max: FixedVec3) -> FixedVec3 {
        self.next_vec3() * max
    }

    pub fn next_vec4_max(&mut self, max: FixedVec4) -> FixedVec4 {
        self.next_vec4() * max
    }

    pub fn next_vec2_range(&mut self, min: FixedVec2, max: FixedVec2) -> FixedVec2 {
        self.next_vec2() * (max - min) + min
    }

    pub fn next_vec3_range(&mut self, min: FixedVec3, max: FixedVec3) -> FixedVec3 {
        self.next_vec3() * (max - min) + min
    }

    pub fn next_vec4_range(&mut self, min: FixedVec4, max: FixedVec4) -> FixedVec4 {
        self.next_vec4() * (max - min) + min
    }

    /// Unit vector at a uniformly drawn angle, `(sin, cos)`.
    pub fn next_direction_2d(&mut self) -> FixedVec2 {
        let angle = self.next_fixed() * Fixed::PI * 2;
        let (sin, cos) = angle.sin_cos();
        FixedVec2::new(sin, cos)
    }

    /// Unit vector uniformly distributed over the sphere.
    pub fn next_direction_3d(&mut self) -> FixedVec3 {
        let z = self.next_fixed_max(Fixed::TWO) - Fixed::ONE;
        let radius = (Fixed::ONE - z * z).max(Fixed::ZERO).sqrt();
        let angle = self.next_fixed_max(Fixed::TWO_PI);
        let (sin, cos) = angle.sin_cos();
        FixedVec3::new(cos * radius, sin * radius, z)
    }
}

impl TryFrom<u32> for DeterministicRandom {
    type Error = FixedError;

    fn try_from(state: u32) -> Result<Self, Self::Error> {
        if state == 0 {
            return Err(FixedError::ZeroSeed);
        }
        Ok(Self { state })
    }
}

impl From<DeterministicRandom> for u32 {
    fn from(random: DeterministicRandom) -> Self {
        random.state
    }
}

impl RngCore for DeterministicRandom {
    fn next_u32(&mut self) -> u32 {
        self.next_state()
    }

    fn next_u64(&mut self) -> u64 {
        let low = self.next_state() as u64;
        let high = self.next_state() as u64;
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_state().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for DeterministicRandom {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        let seed = u32::from_le_bytes(seed);
        if seed == 0 {
            warn!("Zero seed replaced with {:#010x}", FALLBACK_SEED);
            return Self::new(FALLBACK_SEED);
        }
        Self::new(seed)
    }
}
