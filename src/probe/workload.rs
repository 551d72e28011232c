//! The probe workload: a fixed sequence of stages per round, each pushing the
//! raw results it computes onto a trace.
//!
//! Every input comes from [`DeterministicRandom`] seeded from the config, so
//! the trace depends only on the config and the math library.

use lockstep_math_macros::profile;
use tracing::{debug, info};

use super::config::ProbeParams;
use crate::fixed_math::{DeterministicRandom, Fixed, FixedQuat, FixedVec2, FixedVec3};
use crate::profile_log;

#[profile(1)]
pub fn scalar_stage(
    params: &ProbeParams,
    _round: u32,
    random: &mut DeterministicRandom,
    trace: &mut Vec<Fixed>,
) {
    let range = params.scalar_range;
    for _ in 0..params.samples_per_round {
        let a = random.next_fixed_range(-range, range);
        let b = random.next_fixed_range(-range, range);
        trace.push(a + b);
        trace.push(a - b);
        trace.push(a * b);
        trace.push(a.checked_div(b).unwrap_or(Fixed::ZERO));
        trace.push(a.checked_rem(b).unwrap_or(Fixed::ZERO));
        trace.push(a.floor());
        trace.push(a.ceil());
        trace.push(Fixed::from_int(a.round_to_int()));
        trace.push(a.lerp(b, Fixed::P0_33));
    }
}

#[profile(1)]
pub fn trig_stage(
    params: &ProbeParams,
    round: u32,
    random: &mut DeterministicRandom,
    trace: &mut Vec<Fixed>,
) {
    let base = params.angle_step * (round as i32);
    for _ in 0..params.samples_per_round {
        let angle = base + random.next_fixed_range(-Fixed::TWO_PI, Fixed::TWO_PI);
        let (sin, cos) = angle.sin_cos();
        trace.push(sin);
        trace.push(cos);
        trace.push(angle.tan());

        let unit = random.next_fixed_range(Fixed::MINUS_ONE, Fixed::ONE);
        trace.push(unit.asin());
        trace.push(unit.acos());
        trace.push(unit.atan_approximated());
        trace.push(sin.atan2(cos + Fixed::TWO));
    }
}

#[profile(1)]
pub fn sqrt_exp_stage(
    params: &ProbeParams,
    _round: u32,
    random: &mut DeterministicRandom,
    trace: &mut Vec<Fixed>,
) {
    for _ in 0..params.samples_per_round {
        let positive = random.next_fixed_max(params.scalar_range);
        trace.push(positive.sqrt());
        trace.push(positive.checked_rcp().unwrap_or(Fixed::ZERO));
        trace.push(positive.checked_rsqrt().unwrap_or(Fixed::ZERO));

        let exponent = random.next_fixed_range(-params.exp_range, params.exp_range);
        trace.push(exponent.exp());
    }
}

#[profile(1)]
pub fn random_stage(
    params: &ProbeParams,
    _round: u32,
    random: &mut DeterministicRandom,
    trace: &mut Vec<Fixed>,
) {
    for _ in 0..params.samples_per_round {
        trace.push(Fixed::from_raw(random.next_int() as i64));
        trace.push(Fixed::from_int(random.next_int_range(-100, 100)));
        trace.push(if random.next_bool() { Fixed::ONE } else { Fixed::ZERO });
        trace.extend(random.next_direction_2d().to_array());
        trace.extend(random.next_direction_3d().to_array());
    }
}

#[profile(1)]
pub fn vector_stage(
    params: &ProbeParams,
    _round: u32,
    random: &mut DeterministicRandom,
    trace: &mut Vec<Fixed>,
) {
    let extent = FixedVec3::splat(params.scalar_range);
    for _ in 0..params.samples_per_round {
        let a = random.next_vec3_range(-extent, extent);
        let b = random.next_vec3_range(-extent, extent);
        trace.extend(a.cross(b).to_array());
        trace.extend(a.normalize().to_array());
        trace.push(a.angle(b));

        let planar = a.xy().rotate(random.next_fixed_max(Fixed::TWO_PI));
        trace.extend(planar.to_array());
        trace.push(planar.radians_signed(FixedVec2::RIGHT));

        let euler = random.next_vec3_max(FixedVec3::splat(Fixed::THREE_SIXTY));
        let rotation = FixedQuat::from_euler_angles(euler);
        trace.extend((rotation * FixedVec3::FORWARD).to_array());
        trace.extend(rotation.euler_angles().to_array());
    }
}

/// Runs every stage once, in a fixed order.
pub fn run_round(
    params: &ProbeParams,
    round: u32,
    random: &mut DeterministicRandom,
    trace: &mut Vec<Fixed>,
) {
    let _before = trace.len();
    scalar_stage(params, round, random, trace);
    trig_stage(params, round, random, trace);
    sqrt_exp_stage(params, round, random, trace);
    random_stage(params, round, random, trace);
    vector_stage(params, round, random, trace);
    profile_log!(round, "Round {} produced {} values", round, trace.len() - _before);
}

/// Runs all rounds from a fresh generator and returns the raw trace.
///
/// # Panics
///
/// Panics if `params.seed` is zero.
pub fn run_workload(params: &ProbeParams) -> Vec<Fixed> {
    let mut random = DeterministicRandom::new(params.seed);
    let mut trace = Vec::new();
    for round in 0..params.rounds {
        run_round(params, round, &mut random, &mut trace);
        debug!("Round {} done, trace length {}", round, trace.len());
    }
    info!(
        "Workload finished: {} rounds, {} values, final random state {:#010x}",
        params.rounds,
        trace.len(),
        random.state()
    );
    trace
}

/// Runs the workload twice and reports the first differing index, if any.
pub fn check_repeatable(params: &ProbeParams) -> Option<usize> {
    let first = run_workload(params);
    let second = run_workload(params);
    crate::snapshot::first_divergence(&first, &second)
}
