//! Left-to-right pipeline composition.
//!
//! A pipeline is a source followed by stages. [`Pipe::then`] hands the
//! source to a stage and returns whatever the stage produces, so chains read
//! in the order the data flows:
//!
//! - [`Pipe::then`]: method form, `source.then(stage1).then(stage2)`
//! - [`pipe`]: function form, `pipe(source, stage)`
//! - [`pipe!`](crate::pipe!): macro form, `pipe!(source, stage1, stage2)`
//! - [`chain`]: a reusable fragment made of two stages
//!
//! The first three forms are the same function application:
//! `stage2.apply(stage1.apply(source))`.
//!
//! # Resolution
//!
//! `then` exists only on [`Sequenceable`] values, so a chain whose left
//! operand is not a sequence does not compile. Lazy stages read their input
//! through [`Sequenceable::into_stream`]: a [`LazyStream`] is consumed as
//! is, any other sequence is wrapped first. A stream is never wrapped twice.
//!
//! Lazy stages do not buffer between each other. Pulling one element from
//! the end of a chain pulls at most what each stage needs from the one
//! before it.
//!
//! # Examples
//!
//! ```rust
//! use seqpipe::compose::Pipe;
//! use seqpipe::stages::{eager, lazy};
//!
//! let total = vec![1, 2, 3, 4, 5, 6]
//!     .then(lazy::filter(|n: &i32| n % 2 == 0))
//!     .then(lazy::map(|n: i32| n * 10))
//!     .then(eager::sum());
//! assert_eq!(total, 120);
//! ```
//!
//! Any `FnOnce` taking the sequence is a stage too:
//!
//! ```rust
//! use seqpipe::compose::Pipe;
//! use seqpipe::stages::lazy;
//!
//! let longest = ["a", "ccc", "bb"]
//!     .then(lazy::map(str::len))
//!     .then(|lengths: seqpipe::stream::LazyStream<'_, usize>| lengths.max());
//! assert_eq!(longest, Some(3));
//! ```
//!
//! [`LazyStream`]: crate::stream::LazyStream

mod pipe_macro;

use crate::sequence::Sequenceable;

/// A transformation that consumes a sequence.
///
/// The output is a [`LazyStream`](crate::stream::LazyStream) for lazy
/// stages, a container for eager transforms, a scalar for reductions and
/// `()` for terminal consumers. `'a` is the lifetime lazy outputs may borrow
/// for.
pub trait Stage<'a, S: Sequenceable> {
    /// What applying the stage produces.
    type Output;

    /// Consumes `sequence` and produces the output.
    fn apply(self, sequence: S) -> Self::Output;
}

impl<'a, S, O, F> Stage<'a, S> for F
where
    S: Sequenceable,
    F: FnOnce(S) -> O,
{
    type Output = O;

    #[inline]
    fn apply(self, sequence: S) -> O {
        self(sequence)
    }
}

/// The chaining method of every sequence.
pub trait Pipe: Sequenceable {
    /// Feeds `self` into `stage`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqpipe::compose::Pipe;
    /// use seqpipe::stages::lazy;
    ///
    /// let chunks: Vec<Vec<char>> = "abcde".then(lazy::chunk_by_size(2)).collect();
    /// assert_eq!(chunks, vec![vec!['a', 'b'], vec!['c', 'd'], vec!['e']]);
    /// ```
    #[inline]
    #[track_caller]
    fn then<'a, St>(self, stage: St) -> St::Output
    where
        St: Stage<'a, Self>,
    {
        stage.apply(self)
    }
}

impl<S: Sequenceable> Pipe for S {}

/// Feeds `source` into `stage`; the function form of [`Pipe::then`].
///
/// # Examples
///
/// ```rust
/// use seqpipe::compose::pipe;
/// use seqpipe::stages::eager;
///
/// assert_eq!(pipe([2_u8, 4, 6], eager::length()), 3);
/// ```
#[inline]
#[track_caller]
pub fn pipe<'a, S, St>(source: S, stage: St) -> St::Output
where
    S: Sequenceable,
    St: Stage<'a, S>,
{
    stage.apply(source)
}

/// Two stages applied one after the other, built by [`chain`].
#[derive(Debug, Clone, Copy)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

/// Combines two stages into one that applies `first`, then `second`.
///
/// Chains let a pipeline fragment be named and reused without a source.
///
/// # Examples
///
/// ```rust
/// use seqpipe::compose::{Pipe, chain};
/// use seqpipe::stages::{eager, lazy};
///
/// let evens_squared = || {
///     chain(
///         lazy::filter(|n: &i32| n % 2 == 0),
///         lazy::map(|n: i32| n * n),
///     )
/// };
/// assert_eq!(vec![1, 2, 3, 4].then(evens_squared()).then(eager::to_vector()), vec![4, 16]);
/// assert_eq!([6, 7].then(evens_squared()).then(eager::to_vector()), vec![36]);
/// ```
#[inline]
pub const fn chain<A, B>(first: A, second: B) -> Chain<A, B> {
    Chain { first, second }
}

impl<'a, S, A, B> Stage<'a, S> for Chain<A, B>
where
    S: Sequenceable,
    A: Stage<'a, S>,
    A::Output: Sequenceable,
    B: Stage<'a, A::Output>,
{
    type Output = B::Output;

    #[inline]
    fn apply(self, sequence: S) -> Self::Output {
        self.second.apply(self.first.apply(sequence))
    }
}
