//! Strict sub-ranges of a stream.
//!
//! A stream does not know its length, so a source that is too short is only
//! discovered while pulling. The pull that discovers it panics with
//! [`PreconditionError::CountExceedsLength`]; no truncated result is ever
//! yielded as if it were complete.

use crate::capture::ByValue;
use crate::compose::Stage;
use crate::error::PreconditionError;
use crate::sequence::Sequenceable;
use crate::stream::{Generator, LazyStream, Resume};

/// Drops the first elements of a stream, built by [`skip`].
#[derive(Debug, Clone, Copy)]
pub struct Skip {
    count: ByValue<usize>,
}

impl Skip {
    /// Builds the stage from an already captured count.
    #[inline]
    pub const fn captured(count: ByValue<usize>) -> Self {
        Self { count }
    }
}

/// Drops the first `count` elements and yields the rest.
///
/// # Panics
///
/// The first pull panics when the input holds fewer than `count` elements.
///
/// # Examples
///
/// ```rust
/// use seqpipe::compose::Pipe;
/// use seqpipe::stages::lazy;
///
/// let rest = [1, 2, 3, 4].then(lazy::skip(3));
/// assert_eq!(rest.collect::<Vec<_>>(), vec![4]);
/// ```
///
/// ```should_panic
/// use seqpipe::compose::Pipe;
/// use seqpipe::stages::lazy;
///
/// let mut rest = [1, 2].then(lazy::skip(3));
/// rest.next();
/// ```
#[inline]
pub const fn skip(count: usize) -> Skip {
    Skip::captured(ByValue::new(count))
}

impl<'a, S: Sequenceable + 'a> Stage<'a, S> for Skip {
    type Output = LazyStream<'a, S::Item>;

    fn apply(self, sequence: S) -> Self::Output {
        LazyStream::from_generator(SkipGenerator::new(
            "skip",
            *self.count.get(),
            sequence.into_stream(),
        ))
    }
}

/// Drops the first element of a stream, built by [`tail`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Tail;

/// Yields every element but the first.
///
/// # Panics
///
/// The first pull panics when the input is empty.
///
/// # Examples
///
/// ```rust
/// use seqpipe::compose::Pipe;
/// use seqpipe::stages::lazy;
///
/// assert_eq!("head".then(lazy::tail()).collect::<String>(), "ead");
/// ```
#[inline]
pub const fn tail() -> Tail {
    Tail
}

impl<'a, S: Sequenceable + 'a> Stage<'a, S> for Tail {
    type Output = LazyStream<'a, S::Item>;

    fn apply(self, sequence: S) -> Self::Output {
        LazyStream::from_generator(SkipGenerator::new("tail", 1, sequence.into_stream()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SkipPhase {
    Skipping,
    Forwarding,
}

struct SkipGenerator<'a, T> {
    operation: &'static str,
    count: usize,
    source: LazyStream<'a, T>,
    phase: SkipPhase,
}

impl<'a, T> SkipGenerator<'a, T> {
    const fn new(operation: &'static str, count: usize, source: LazyStream<'a, T>) -> Self {
        Self {
            operation,
            count,
            source,
            phase: SkipPhase::Skipping,
        }
    }
}

impl<T> Generator for SkipGenerator<'_, T> {
    type Yield = T;

    fn resume(&mut self) -> Resume<T> {
        if self.phase == SkipPhase::Skipping {
            for skipped in 0..self.count {
                if self.source.next().is_none() {
                    PreconditionError::CountExceedsLength {
                        operation: self.operation,
                        count: self.count,
                        length: skipped,
                    }
                    .raise();
                }
            }
            self.phase = SkipPhase::Forwarding;
        }
        self.source.next().into()
    }
}

/// Keeps the first elements of a stream, built by [`take`].
#[derive(Debug, Clone, Copy)]
pub struct Take {
    count: ByValue<usize>,
}

impl Take {
    /// Builds the stage from an already captured count.
    #[inline]
    pub const fn captured(count: ByValue<usize>) -> Self {
        Self { count }
    }
}

/// Yields the first `count` elements.
///
/// Once `count` elements have been yielded the stream finishes without
/// pulling its input again, which makes `take` the way to bound an
/// unbounded stream.
///
/// # Panics
///
/// The pull that finds the input exhausted before `count` elements panics.
///
/// # Examples
///
/// ```rust
/// use seqpipe::compose::Pipe;
/// use seqpipe::stages::lazy;
/// use seqpipe::stream;
///
/// let first = stream::range_from(1_i32).then(lazy::take(3));
/// assert_eq!(first.collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
#[inline]
pub const fn take(count: usize) -> Take {
    Take::captured(ByValue::new(count))
}

impl<'a, S: Sequenceable + 'a> Stage<'a, S> for Take {
    type Output = LazyStream<'a, S::Item>;

    fn apply(self, sequence: S) -> Self::Output {
        let count = *self.count.get();
        LazyStream::from_generator(TakeGenerator {
            count,
            source: sequence.into_stream(),
            phase: TakePhase::Taking { remaining: count },
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TakePhase {
    Taking { remaining: usize },
    Complete,
}

struct TakeGenerator<'a, T> {
    count: usize,
    source: LazyStream<'a, T>,
    phase: TakePhase,
}

impl<T> Generator for TakeGenerator<'_, T> {
    type Yield = T;

    fn resume(&mut self) -> Resume<T> {
        let TakePhase::Taking { remaining } = self.phase else {
            return Resume::Complete;
        };
        if remaining == 0 {
            self.phase = TakePhase::Complete;
            return Resume::Complete;
        }
        let Some(element) = self.source.next() else {
            PreconditionError::CountExceedsLength {
                operation: "take",
                count: self.count,
                length: self.count - remaining,
            }
            .raise();
        };
        self.phase = TakePhase::Taking {
            remaining: remaining - 1,
        };
        Resume::Yielded(element)
    }
}
