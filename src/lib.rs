pub mod fixed_math;
pub mod probe;
pub mod snapshot;

pub use fixed_math::{
    DeterministicRandom, Fixed, FixedError, FixedNum, FixedQuat, FixedVec2, FixedVec3, FixedVec4,
};
pub use lockstep_math_macros::profile;

// ============================================================================
// Profiling Macros
// ============================================================================

/// Conditionally log messages based on round interval when perf_stats feature is enabled.
///
/// This macro logs a message every 100 rounds. When the perf_stats feature is disabled,
/// this macro compiles to nothing - zero runtime cost.
///
/// # Example
/// ```ignore
/// profile_log!(round, "Collected {} values", trace.len());
/// ```
///
/// # Zero-Cost Abstraction
/// When compiled without the `perf_stats` feature, this expands to an empty block.
/// Even the arguments (e.g., `trace.len()`) are not evaluated.
#[macro_export]
#[cfg(feature = "perf_stats")]
macro_rules! profile_log {
    ($round:expr, $($arg:tt)*) => {
        if $round % 100 == 0 {
            ::tracing::info!($($arg)*);
        }
    };
}

#[macro_export]
#[cfg(not(feature = "perf_stats"))]
macro_rules! profile_log {
    ($round:expr, $($arg:tt)*) => {};
}
