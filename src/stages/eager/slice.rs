//! Strict sub-ranges copied out of a sequence.
//!
//! The requested count is checked against the source length before anything
//! is copied. Sources that know their length are checked up front; others
//! are drained first and checked against the number of elements found.

use arrayvec::ArrayVec;

use super::materialize::plan;
use crate::compose::Stage;
use crate::error::{OrRaise, PreconditionError, ensure_within};
use crate::sequence::{Materialized, Sequenceable};

fn try_skip_from<S: Sequenceable>(
    operation: &'static str,
    sequence: S,
    count: usize,
) -> Result<Vec<S::Item>, PreconditionError> {
    let (cursor, plan) = plan(sequence);
    match plan.length() {
        Some(length) => {
            ensure_within(operation, count, length)?;
            Ok(cursor.skip(count).collect())
        }
        None => {
            let mut elements: Vec<S::Item> = cursor.collect();
            ensure_within(operation, count, elements.len())?;
            elements.drain(..count);
            Ok(elements)
        }
    }
}

fn try_take_from<S: Sequenceable>(
    sequence: S,
    count: usize,
) -> Result<Vec<S::Item>, PreconditionError> {
    let (cursor, plan) = plan(sequence);
    match plan.length() {
        Some(length) => {
            ensure_within("take", count, length)?;
            Ok(cursor.take(count).collect())
        }
        None => {
            let mut elements: Vec<S::Item> = cursor.take(count).collect();
            ensure_within("take", count, elements.len())?;
            elements.shrink_to_fit();
            Ok(elements)
        }
    }
}

// =============================================================================
// Skip
// =============================================================================

/// Drops the first elements, built by [`skip`].
#[derive(Debug, Clone, Copy)]
pub struct Skip {
    count: usize,
}

/// Collects every element after the first `count`.
///
/// # Panics
///
/// Panics when the source holds fewer than `count` elements.
///
/// # Examples
///
/// ```rust
/// use seqpipe::compose::Pipe;
/// use seqpipe::stages::eager;
///
/// assert_eq!([1, 2, 3, 4].then(eager::skip(1)), vec![2, 3, 4]);
/// ```
#[inline]
pub const fn skip(count: usize) -> Skip {
    Skip { count }
}

impl<'a, S: Sequenceable> Stage<'a, S> for Skip {
    type Output = Vec<S::Item>;

    #[track_caller]
    fn apply(self, sequence: S) -> Self::Output {
        try_skip_from("skip", sequence, self.count).or_raise()
    }
}

/// Fallibly drops the first elements, built by [`try_skip`].
#[derive(Debug, Clone, Copy)]
pub struct TrySkip {
    count: usize,
}

/// Collects every element after the first `count`, or reports a source that
/// is too short.
///
/// # Examples
///
/// ```rust
/// use seqpipe::compose::Pipe;
/// use seqpipe::error::PreconditionError;
/// use seqpipe::stages::eager;
///
/// assert_eq!(
///     vec![1, 2].then(eager::try_skip(3)),
///     Err(PreconditionError::CountExceedsLength { operation: "skip", count: 3, length: 2 })
/// );
/// ```
#[inline]
pub const fn try_skip(count: usize) -> TrySkip {
    TrySkip { count }
}

impl<'a, S: Sequenceable> Stage<'a, S> for TrySkip {
    type Output = Result<Vec<S::Item>, PreconditionError>;

    fn apply(self, sequence: S) -> Self::Output {
        try_skip_from("skip", sequence, self.count)
    }
}

/// Drops a compile-time number of elements from an array, built by
/// [`skip_static`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SkipStatic<const C: usize>;

/// Drops the first `C` elements of a fixed-size array.
///
/// The result keeps the array's fixed capacity. Using it on an array shorter
/// than `C`, or on a source without a static length, fails to compile.
///
/// # Examples
///
/// ```rust
/// use seqpipe::compose::Pipe;
/// use seqpipe::stages::eager;
///
/// let rest = [1, 2, 3, 4].then(eager::skip_static::<3>());
/// assert_eq!(rest.as_slice(), &[4]);
/// ```
///
/// ```compile_fail
/// use seqpipe::compose::Pipe;
/// use seqpipe::stages::eager;
///
/// let rest = [1, 2].then(eager::skip_static::<3>());
/// ```
#[inline]
pub const fn skip_static<const C: usize>() -> SkipStatic<C> {
    SkipStatic
}

impl<'a, S: Sequenceable, const C: usize> Stage<'a, S> for SkipStatic<C> {
    type Output = S::Materialized<S::Item>;

    fn apply(self, sequence: S) -> Self::Output {
        const {
            assert!(
                matches!(S::STATIC_LENGTH, Some(length) if C <= length),
                "skip_static: count exceeds the static length of the source"
            );
        }
        let (cursor, plan) = plan(sequence);
        let mut rest =
            <S::Materialized<S::Item> as Materialized<S::Item>>::with_capacity(plan.capacity());
        for element in cursor.skip(C) {
            rest.push(element);
        }
        rest
    }
}

// =============================================================================
// Take
// =============================================================================

/// Keeps the first elements, built by [`take`].
#[derive(Debug, Clone, Copy)]
pub struct Take {
    count: usize,
}

/// Collects the first `count` elements.
///
/// # Panics
///
/// Panics when the source holds fewer than `count` elements.
///
/// # Examples
///
/// ```rust
/// use seqpipe::compose::Pipe;
/// use seqpipe::stages::eager;
///
/// assert_eq!("sequence".then(eager::take(3)), vec!['s', 'e', 'q']);
/// ```
#[inline]
pub const fn take(count: usize) -> Take {
    Take { count }
}

impl<'a, S: Sequenceable> Stage<'a, S> for Take {
    type Output = Vec<S::Item>;

    #[track_caller]
    fn apply(self, sequence: S) -> Self::Output {
        try_take_from(sequence, self.count).or_raise()
    }
}

/// Fallibly keeps the first elements, built by [`try_take`].
#[derive(Debug, Clone, Copy)]
pub struct TryTake {
    count: usize,
}

/// Collects the first `count` elements, or reports a source that is too
/// short.
///
/// # Examples
///
/// ```rust
/// use seqpipe::compose::Pipe;
/// use seqpipe::stages::eager;
///
/// assert!([1, 2].then(eager::try_take(3)).is_err());
/// assert_eq!([1, 2].then(eager::try_take(2)), Ok(vec![1, 2]));
/// ```
#[inline]
pub const fn try_take(count: usize) -> TryTake {
    TryTake { count }
}

impl<'a, S: Sequenceable> Stage<'a, S> for TryTake {
    type Output = Result<Vec<S::Item>, PreconditionError>;

    fn apply(self, sequence: S) -> Self::Output {
        try_take_from(sequence, self.count)
    }
}

/// Keeps a compile-time number of elements of an array, built by
/// [`take_static`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TakeStatic<const C: usize>;

/// Collects the first `C` elements of a fixed-size array into an
/// [`ArrayVec`] of capacity `C`.
///
/// Using it on an array shorter than `C`, or on a source without a static
/// length, fails to compile.
///
/// # Examples
///
/// ```rust
/// use seqpipe::compose::Pipe;
/// use seqpipe::stages::eager;
///
/// let head = ['a', 'b', 'c'].then(eager::take_static::<2>());
/// assert!(head.is_full());
/// assert_eq!(head.as_slice(), &['a', 'b']);
/// ```
///
/// ```compile_fail
/// use seqpipe::compose::Pipe;
/// use seqpipe::stages::eager;
///
/// let head = vec![1, 2, 3].then(eager::take_static::<2>());
/// ```
#[inline]
pub const fn take_static<const C: usize>() -> TakeStatic<C> {
    TakeStatic
}

impl<'a, S: Sequenceable, const C: usize> Stage<'a, S> for TakeStatic<C> {
    type Output = ArrayVec<S::Item, C>;

    fn apply(self, sequence: S) -> Self::Output {
        const {
            assert!(
                matches!(S::STATIC_LENGTH, Some(length) if C <= length),
                "take_static: count exceeds the static length of the source"
            );
        }
        sequence.start_cursor().take(C).collect()
    }
}

// =============================================================================
// Tail
// =============================================================================

/// Drops the first element, built by [`tail`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Tail;

/// Collects every element but the first.
///
/// # Panics
///
/// Panics when the source is empty.
///
/// # Examples
///
/// ```rust
/// use seqpipe::compose::Pipe;
/// use seqpipe::stages::eager;
///
/// assert_eq!(vec![1, 2, 3].then(eager::tail()), vec![2, 3]);
/// ```
#[inline]
pub const fn tail() -> Tail {
    Tail
}

impl<'a, S: Sequenceable> Stage<'a, S> for Tail {
    type Output = Vec<S::Item>;

    #[track_caller]
    fn apply(self, sequence: S) -> Self::Output {
        try_skip_from("tail", sequence, 1).or_raise()
    }
}
