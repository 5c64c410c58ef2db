//! The one error kind this crate reports: a violated precondition.
//!
//! Every operation checks its arguments before touching the output, so an `Err` always
//! means nothing was written.

use crate::common::{assert_error_traits, Rational};

/// A caller supplied arguments that break an operation's contract.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A decimation or expansion rate of zero.
    #[error("The rate must be at least 1")]
    ZeroRate,
    /// A polyphase bank, or a request for one, with no phases.
    #[error("The number of polyphase phases must be at least 1")]
    ZeroPhases,
    /// A prototype filter without taps.
    #[error("The filter must have at least one tap")]
    EmptyFilter,
    /// The sample rate ratio is zero or negative.
    #[error("The sample rate ratio must be positive, got {ratio}")]
    NonPositiveRatio {
        /// The rejected ratio.
        ratio: Rational,
    },
    /// The resampling start point lies before the first output sample.
    #[error("The start point must not be negative, got {start_point}")]
    NegativeStartPoint {
        /// The rejected start point.
        start_point: Rational,
    },
    /// The output buffer does not have the size the operation produces.
    #[error("The output must hold exactly {expected} samples, got {actual}")]
    OutputLength {
        /// Size implied by the input and the operation.
        expected: usize,
        /// Size of the buffer that was passed in.
        actual: usize,
    },
    /// Two operands that are combined elementwise differ in length.
    #[error("Operands must have the same length, got {left} and {right}")]
    LengthMismatch {
        /// Length of the first operand.
        left: usize,
        /// Length of the second operand.
        right: usize,
    },
    /// The requested output window ends after the last sample that can be produced.
    #[error("The requested output ends at {requested}, but at most {max} can be produced")]
    WindowOutOfBounds {
        /// One past the last requested output position.
        requested: Rational,
        /// Upper bound on the output positions.
        max: Rational,
    },
    /// A polyphase bank was asked for a phase it does not have.
    #[error("Phase {index} does not exist in a bank of {count} phases")]
    PhaseOutOfRange {
        /// The requested phase.
        index: usize,
        /// Number of phases in the bank.
        count: usize,
    },
}
assert_error_traits! {Error}

/// Result type of every fallible operation in this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Logs a precondition violation when tracing is on, then hands it back for returning.
#[inline]
pub(crate) fn violation(error: Error) -> Error {
    #[cfg(feature = "tracing")]
    tracing::debug!("precondition violated: {error}");
    error
}
