//! Precondition failures raised by pipeline stages.
//!
//! Most misuse of the pipeline is rejected by the compiler: a value that is
//! not [`Sequenceable`](crate::sequence::Sequenceable) has no stages to pipe
//! into. What remains are numeric preconditions that can only be checked once
//! a length is known, such as skipping more elements than a sequence holds.
//!
//! Those checks come in two flavours:
//!
//! - `try_*` entry points return `Result<_, PreconditionError>`.
//! - Every other entry point panics with the error's message. The panic is
//!   raised with `#[track_caller]`, so it points at the call that broke the
//!   precondition rather than at this crate.
//!
//! Running out of elements is never an error. A finished
//! [`LazyStream`](crate::stream::LazyStream) or an empty filter result is a
//! normal outcome.
//!
//! # Examples
//!
//! ```rust
//! use seqpipe::error::PreconditionError;
//! use seqpipe::stages::constructors::try_range;
//!
//! let error = try_range(5, 2).unwrap_err();
//! assert_eq!(error, PreconditionError::EmptyRange { start: 5, stop: 2 });
//! assert_eq!(
//!     error.to_string(),
//!     "range: exclusive stop 2 must be larger than inclusive start 5"
//! );
//! ```

use thiserror::Error;

/// A violated numeric precondition of a pipeline operation.
///
/// Each variant identifies which precondition failed and carries the values
/// that broke it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreconditionError {
    /// A sub-range operation asked for more elements than the source holds.
    #[error("{operation}: count {count} exceeds the {length} available elements")]
    CountExceedsLength {
        /// The operation that was asked for the sub-range (`"skip"`, `"take"`, ...).
        operation: &'static str,
        /// The requested number of elements.
        count: usize,
        /// The number of elements the source actually held.
        length: usize,
    },
    /// A range whose exclusive stop does not lie after its inclusive start.
    #[error("range: exclusive stop {stop} must be larger than inclusive start {start}")]
    EmptyRange {
        /// Inclusive start of the requested range.
        start: i32,
        /// Exclusive stop of the requested range.
        stop: i32,
    },
    /// A size parameter that must be positive was zero.
    #[error("{operation}: size must be larger than zero")]
    ZeroSize {
        /// The operation that received the zero size.
        operation: &'static str,
    },
    /// A stepped range was given a zero step and would never advance.
    #[error("range_step: step must not be zero")]
    ZeroStep,
}

impl PreconditionError {
    /// Aborts the current operation with this error.
    #[track_caller]
    pub(crate) fn raise(self) -> ! {
        panic!("precondition violated: {self}")
    }
}

/// Unwraps the value of a checked operation, or raises its precondition
/// failure at the caller's location.
pub(crate) trait OrRaise<T> {
    fn or_raise(self) -> T;
}

impl<T> OrRaise<T> for Result<T, PreconditionError> {
    #[inline]
    #[track_caller]
    fn or_raise(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => error.raise(),
        }
    }
}

/// Checks that `count` elements can be taken out of `length` available ones.
#[cfg(feature = "eager")]
pub(crate) const fn ensure_within(
    operation: &'static str,
    count: usize,
    length: usize,
) -> Result<(), PreconditionError> {
    if count <= length {
        Ok(())
    } else {
        Err(PreconditionError::CountExceedsLength {
            operation,
            count,
            length,
        })
    }
}
