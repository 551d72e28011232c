use thiserror::Error;

/// Errors from the fallible entry points of the fixed-point core.
///
/// Arithmetic itself never returns these: overflow wraps, and division by
/// zero panics like integer division does. Use the `checked_*` methods to
/// avoid the panic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixedError {
    #[error("invalid character {ch:?} at position {position}")]
    InvalidDigit { ch: char, position: usize },

    #[error("integer part does not fit in 64 bits")]
    IntegerOverflow,

    #[error("not a floating point number: {0}")]
    InvalidFloat(String),

    #[error("random seed must be non-zero")]
    ZeroSeed,
}
