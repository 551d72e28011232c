//! Lookup tables behind the trigonometric functions, and the raw-domain
//! routines that read them.
//!
//! Angles reaching this module are turn fractions in raw units: `65536` is a
//! full circle. Sine, tangent and the interleaved sine/cosine tables sample
//! the circle at 512 points and interpolate linearly between neighbours. The
//! arcsine table holds one entry per raw input in `0..=65536`.
//!
//! Tables are generated on first use. The generator uses only `+ - * /`,
//! `sqrt` and `round` on `f64`, which IEEE 754 pins down exactly, so every
//! platform builds identical tables.

use std::f64::consts::FRAC_PI_2;
use std::sync::OnceLock;

use tracing::debug;

use super::scalar::{FRACTION_BITS, ONE_RAW};
use super::Fixed;

/// Samples per full circle.
pub const TABLE_STEPS: usize = 512;
const QUARTER_STEPS: usize = TABLE_STEPS / 4;
/// Raw units between two samples is `1 << SHIFT`.
pub const SHIFT: u32 = FRACTION_BITS - 9;
/// Entries in the arcsine table.
pub const ASIN_ENTRIES: usize = ONE_RAW as usize + 1;
/// Tangent samples at the poles and beyond the range of `i32`.
pub const TAN_CLAMP: i32 = i32::MAX;

const SERIES_TERMS: usize = 12;
const ATAN_SERIES_TERMS: usize = 20;

static SIN_LUT: OnceLock<Box<[i32]>> = OnceLock::new();
static SIN_COS_LUT: OnceLock<Box<[i32]>> = OnceLock::new();
static TAN_LUT: OnceLock<Box<[i32]>> = OnceLock::new();
static ASIN_LUT: OnceLock<Box<[i32]>> = OnceLock::new();

// ============================================================================
// Generation
// ============================================================================

fn sin_series(angle: f64) -> f64 {
    let square = angle * angle;
    let mut term = angle;
    let mut sum = angle;
    for n in 0..SERIES_TERMS {
        let k = (2 * n + 2) as f64;
        term *= -square / (k * (k + 1.0));
        sum += term;
    }
    sum
}

fn cos_series(angle: f64) -> f64 {
    let square = angle * angle;
    let mut term = 1.0;
    let mut sum = 1.0;
    for n in 0..SERIES_TERMS {
        let k = (2 * n + 1) as f64;
        term *= -square / (k * (k + 1.0));
        sum += term;
    }
    sum
}

/// Sine over the first quadrant, `QUARTER_STEPS + 1` samples.
///
/// Each series only runs on angles up to `PI / 4`, where it converges fastest.
fn quarter_wave() -> Vec<f64> {
    (0..=QUARTER_STEPS)
        .map(|i| {
            if i <= QUARTER_STEPS / 2 {
                sin_series(FRAC_PI_2 * i as f64 / QUARTER_STEPS as f64)
            } else {
                cos_series(FRAC_PI_2 * (QUARTER_STEPS - i) as f64 / QUARTER_STEPS as f64)
            }
        })
        .collect()
}

/// Unfolds a first-quadrant sample into sample `step` of the full circle.
fn unfold<T>(quarter: &[T], step: usize) -> T
where
    T: Copy + std::ops::Neg<Output = T>,
{
    match step {
        s if s <= QUARTER_STEPS => quarter[s],
        s if s <= 2 * QUARTER_STEPS => quarter[2 * QUARTER_STEPS - s],
        s if s <= 3 * QUARTER_STEPS => -quarter[s - 2 * QUARTER_STEPS],
        s => -quarter[TABLE_STEPS - s],
    }
}

fn to_raw(value: f64) -> i64 {
    (value * ONE_RAW as f64).round() as i64
}

fn build_sin() -> Box<[i32]> {
    let quarter: Vec<i32> = quarter_wave().into_iter().map(|v| to_raw(v) as i32).collect();
    let table: Box<[i32]> = (0..=TABLE_STEPS).map(|step| unfold(&quarter, step)).collect();
    debug!("Built sine table: {} entries", table.len());
    table
}

fn build_sin_cos() -> Box<[i32]> {
    let sin = sin_table();
    let table: Box<[i32]> = (0..=TABLE_STEPS)
        .flat_map(|step| [sin[step], sin[(step + QUARTER_STEPS) % TABLE_STEPS]])
        .collect();
    debug!("Built sine/cosine table: {} entries", table.len());
    table
}

fn build_tan() -> Box<[i32]> {
    let quarter = quarter_wave();
    let table: Box<[i32]> = (0..=TABLE_STEPS)
        .map(|step| {
            let sin = unfold(&quarter, step);
            let cos = unfold(&quarter, (step + QUARTER_STEPS) % TABLE_STEPS);
            if cos == 0.0 {
                return TAN_CLAMP;
            }
            to_raw(sin / cos).clamp(-(TAN_CLAMP as i64), TAN_CLAMP as i64) as i32
        })
        .collect();
    debug!("Built tangent table: {} entries", table.len());
    table
}

fn atan_series(value: f64) -> f64 {
    let square = value * value;
    let mut power = value;
    let mut sum = value;
    for n in 1..=ATAN_SERIES_TERMS {
        power *= -square;
        sum += power / (2 * n + 1) as f64;
    }
    sum
}

/// `asin(x) = 2 atan(x / (1 + sqrt(1 - x^2)))`, followed by two more
/// half-angle steps so the series argument stays below `tan(PI / 16)`.
fn asin_reference(x: f64) -> f64 {
    let mut u = x / (1.0 + ((1.0 - x) * (1.0 + x)).sqrt());
    for _ in 0..2 {
        u /= 1.0 + (1.0 + u * u).sqrt();
    }
    8.0 * atan_series(u)
}

fn build_asin() -> Box<[i32]> {
    let table: Box<[i32]> = (0..ASIN_ENTRIES)
        .map(|raw| {
            if raw as i64 == ONE_RAW {
                Fixed::PI_HALF.raw() as i32
            } else {
                to_raw(asin_reference(raw as f64 / ONE_RAW as f64)) as i32
            }
        })
        .collect();
    debug!("Built arcsine table: {} entries", table.len());
    table
}

pub fn sin_table() -> &'static [i32] {
    SIN_LUT.get_or_init(build_sin)
}

pub fn sin_cos_table() -> &'static [i32] {
    SIN_COS_LUT.get_or_init(build_sin_cos)
}

pub fn tan_table() -> &'static [i32] {
    TAN_LUT.get_or_init(build_tan)
}

pub fn asin_table() -> &'static [i32] {
    ASIN_LUT.get_or_init(build_asin)
}

/// Forces every table to be built now instead of on the first trig call.
pub fn warm_up() {
    sin_table();
    sin_cos_table();
    tan_table();
    asin_table();
}

// ============================================================================
// Raw-domain lookups
// ============================================================================

#[inline]
fn split(turn: i64) -> (usize, i64) {
    let index = turn >> SHIFT;
    let fraction = (turn - (index << SHIFT)) << (FRACTION_BITS - SHIFT);
    (index as usize, fraction)
}

#[inline]
fn blend(a: i32, b: i32, fraction: i64) -> i64 {
    let a = a as i64;
    a + (((b as i64 - a) * fraction) >> FRACTION_BITS)
}

#[inline]
fn interpolate(table: &[i32], turn: i64) -> i64 {
    let (index, fraction) = split(turn);
    blend(table[index], table[index + 1], fraction)
}

/// Sine of a turn fraction in `(-65536, 65536)`.
pub fn sin(turn: i64) -> i64 {
    let value = interpolate(sin_table(), turn.abs());
    if turn < 0 { -value } else { value }
}

/// Cosine of a turn fraction in `(-65536, 65536)`.
pub fn cos(turn: i64) -> i64 {
    let mut turn = turn.abs() + ONE_RAW / 4;
    if turn >= ONE_RAW {
        turn -= ONE_RAW;
    }
    interpolate(sin_table(), turn)
}

/// Tangent of a turn fraction in `(-65536, 65536)`.
pub fn tan(turn: i64) -> i64 {
    let value = interpolate(tan_table(), turn.abs());
    if turn < 0 { -value } else { value }
}

/// Sine and cosine of a turn fraction from one index computation.
pub fn sin_cos(turn: i64) -> (i64, i64) {
    let table = sin_cos_table();
    let (index, fraction) = split(turn.abs());
    let at = index * 2;
    let sin = blend(table[at], table[at + 2], fraction);
    let cos = blend(table[at + 1], table[at + 3], fraction);
    (if turn < 0 { -sin } else { sin }, cos)
}

/// Arcsine of a raw value in `[-65536, 65536]`. Panics outside that range.
pub fn asin(raw: i64) -> i64 {
    let value = asin_table()[raw.unsigned_abs() as usize] as i64;
    if raw < 0 { -value } else { value }
}

/// Arccosine of a raw value in `[-65536, 65536]`. Panics outside that range.
pub fn acos(raw: i64) -> i64 {
    Fixed::PI_HALF.raw() - asin(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(sin_table().len(), TABLE_STEPS + 1);
        assert_eq!(sin_cos_table().len(), 2 * (TABLE_STEPS + 1));
        assert_eq!(tan_table().len(), TABLE_STEPS + 1);
        assert_eq!(asin_table().len(), ASIN_ENTRIES);
    }

    #[test]
    fn test_sine_table_landmarks() {
        let sin = sin_table();
        assert_eq!(sin[0], 0);
        assert_eq!(sin[64], 46341); // sin(45 deg) * 65536 = 46340.95
        assert_eq!(sin[128], 65536);
        assert_eq!(sin[256], 0);
        assert_eq!(sin[384], -65536);
        assert_eq!(sin[512], 0);
    }

    #[test]
    fn test_sine_table_is_symmetric() {
        let sin = sin_table();
        for step in 0..=256 {
            assert_eq!(sin[step], -sin[512 - step], "step {}", step);
        }
        for step in 0..=128 {
            assert_eq!(sin[step], sin[256 - step], "step {}", step);
        }
    }

    #[test]
    fn test_sine_table_matches_float_sine() {
        for (step, &value) in sin_table().iter().enumerate() {
            let expected = (std::f64::consts::TAU * step as f64 / 512.0).sin() * 65536.0;
            assert!(
                (value as f64 - expected).abs() <= 0.5 + 1e-9,
                "step {}: {} vs {}",
                step,
                value,
                expected
            );
        }
    }

    #[test]
    fn test_sin_cos_table_interleaves_sine_and_cosine() {
        let sin = sin_table();
        let both = sin_cos_table();
        for step in 0..=TABLE_STEPS {
            assert_eq!(both[step * 2], sin[step]);
            assert_eq!(both[step * 2 + 1], sin[(step + 128) % 512]);
        }
        assert_eq!(both[1], 65536);
    }

    #[test]
    fn test_tangent_poles_are_clamped() {
        let tan = tan_table();
        assert_eq!(tan[0], 0);
        assert_eq!(tan[64], 65536);
        assert_eq!(tan[128], TAN_CLAMP);
        assert_eq!(tan[384], TAN_CLAMP);
        assert_eq!(tan[192], -65536);
        assert!(tan[127] > 5_000_000);
    }

    #[test]
    fn test_asin_table_landmarks() {
        let asin = asin_table();
        assert_eq!(asin[0], 0);
        assert_eq!(asin[32768], 34315); // pi/6 * 65536 = 34314.8
        assert_eq!(asin[65536], Fixed::PI_HALF.raw() as i32);
        assert!(asin.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_asin_table_matches_float_asin() {
        let asin = asin_table();
        for raw in (0..65536).step_by(97) {
            let expected = (raw as f64 / 65536.0).asin() * 65536.0;
            assert!((asin[raw] as f64 - expected).abs() <= 0.5 + 1e-6, "raw {}", raw);
        }
    }

    #[test]
    fn test_raw_lookups_hit_exact_samples() {
        assert_eq!(sin(16384), 65536);
        assert_eq!(sin(-16384), -65536);
        assert_eq!(cos(0), 65536);
        assert_eq!(cos(32768), -65536);
        assert_eq!(sin_cos(16384), (65536, 0));
        assert_eq!(acos(65536), 0);
        assert_eq!(acos(-65536), Fixed::PI.raw() - 1);
    }

    #[test]
    fn test_interpolation_between_samples() {
        // Halfway between samples 0 and 1.
        let expected = sin_table()[1] as i64 / 2;
        assert_eq!(sin(64), expected);
        let (s, c) = sin_cos(64);
        assert_eq!(s, expected);
        assert!(c < 65536 && c > 65500);
    }

    #[test]
    #[should_panic]
    fn test_asin_outside_domain_panics() {
        asin(65537);
    }
}
