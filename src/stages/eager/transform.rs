//! Eager transforms producing containers.

use super::materialize::{materialize, plan};
use crate::compose::Stage;
use crate::sequence::Sequenceable;

// =============================================================================
// Map
// =============================================================================

/// Maps every element into the source's materialized container, built by
/// [`map`].
#[derive(Debug, Clone, Copy)]
pub struct Map<F> {
    mapping: F,
}

/// Maps every element through `mapping`.
///
/// Arrays map into an [`ArrayVec`](arrayvec::ArrayVec) of the same
/// capacity, every other source into a `Vec`.
///
/// # Examples
///
/// ```rust
/// use seqpipe::compose::Pipe;
/// use seqpipe::stages::eager;
///
/// let squares = [1, 2, 3].then(eager::map(|n: i32| n * n));
/// assert_eq!(squares.as_slice(), &[1, 4, 9]);
/// ```
#[inline]
pub fn map<T, U, F>(mapping: F) -> Map<F>
where
    F: FnMut(T) -> U,
{
    Map { mapping }
}

impl<'a, S, U, F> Stage<'a, S> for Map<F>
where
    S: Sequenceable,
    F: FnMut(S::Item) -> U,
{
    type Output = S::Materialized<U>;

    #[inline]
    fn apply(self, sequence: S) -> Self::Output {
        materialize(sequence, self.mapping)
    }
}

/// Maps every element together with its index, built by [`mapi`].
#[derive(Debug, Clone, Copy)]
pub struct MapIndexed<F> {
    mapping: F,
}

/// Maps every element through `mapping`, which also receives the element's
/// zero-based position.
///
/// # Examples
///
/// ```rust
/// use seqpipe::compose::Pipe;
/// use seqpipe::stages::eager;
///
/// let offsets = vec![10, 10, 10].then(eager::mapi(|index: usize, n: usize| index + n));
/// assert_eq!(offsets, vec![10, 11, 12]);
/// ```
#[inline]
pub fn mapi<T, U, F>(mapping: F) -> MapIndexed<F>
where
    F: FnMut(usize, T) -> U,
{
    MapIndexed { mapping }
}

impl<'a, S, U, F> Stage<'a, S> for MapIndexed<F>
where
    S: Sequenceable,
    F: FnMut(usize, S::Item) -> U,
{
    type Output = S::Materialized<U>;

    fn apply(self, sequence: S) -> Self::Output {
        let mut mapping = self.mapping;
        let mut index = 0;
        materialize(sequence, |element| {
            let mapped = mapping(index, element);
            index += 1;
            mapped
        })
    }
}

// =============================================================================
// Filter
// =============================================================================

/// Keeps the elements satisfying a predicate, built by [`filter`].
#[derive(Debug, Clone, Copy)]
pub struct Filter<P> {
    predicate: P,
    shrink: bool,
}

impl<P> Filter<P> {
    /// Releases the capacity the result does not use before returning it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqpipe::compose::Pipe;
    /// use seqpipe::stages::eager;
    ///
    /// let kept = (0..100).collect::<Vec<_>>()
    ///     .then(eager::filter(|n: &i32| *n < 2).shrink_to_fit());
    /// assert_eq!(kept, vec![0, 1]);
    /// assert!(kept.capacity() < 100);
    /// ```
    #[must_use]
    pub fn shrink_to_fit(mut self) -> Self {
        self.shrink = true;
        self
    }
}

/// Keeps the elements for which `predicate` holds, in their original order.
///
/// The result is a `Vec` reserved to the source length. The capacity not
/// used by the kept elements is retained unless the stage is built with
/// [`Filter::shrink_to_fit`].
///
/// # Examples
///
/// ```rust
/// use seqpipe::compose::Pipe;
/// use seqpipe::stages::eager;
///
/// let evens = vec![1, 2, 3, 4].then(eager::filter(|n: &i32| n % 2 == 0));
/// assert_eq!(evens, vec![2, 4]);
/// assert!(evens.capacity() >= 4);
/// ```
#[inline]
pub fn filter<T, P>(predicate: P) -> Filter<P>
where
    P: FnMut(&T) -> bool,
{
    Filter {
        predicate,
        shrink: false,
    }
}

impl<'a, S, P> Stage<'a, S> for Filter<P>
where
    S: Sequenceable,
    P: FnMut(&S::Item) -> bool,
{
    type Output = Vec<S::Item>;

    fn apply(self, sequence: S) -> Self::Output {
        let Self {
            mut predicate,
            shrink,
        } = self;
        let (cursor, plan) = plan(sequence);
        let mut kept = Vec::with_capacity(plan.capacity());
        kept.extend(cursor.filter(|element| predicate(element)));
        if shrink {
            kept.shrink_to_fit();
        }
        kept
    }
}

// =============================================================================
// Pairwise
// =============================================================================

/// Pairs neighbouring elements, built by [`pairwise`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Pairwise;

/// Collects `(previous, current)` for every pair of neighbouring elements.
///
/// # Examples
///
/// ```rust
/// use seqpipe::compose::Pipe;
/// use seqpipe::stages::eager;
///
/// let steps = [1, 2, 3, 4, 5].then(eager::pairwise());
/// assert_eq!(steps, vec![(1, 2), (2, 3), (3, 4), (4, 5)]);
/// ```
#[inline]
pub const fn pairwise() -> Pairwise {
    Pairwise
}

impl<'a, S> Stage<'a, S> for Pairwise
where
    S: Sequenceable,
    S::Item: Clone,
{
    type Output = Vec<(S::Item, S::Item)>;

    fn apply(self, sequence: S) -> Self::Output {
        let (pairs, _) = collect_pairs(sequence);
        pairs
    }
}

/// Pairs neighbouring elements and the last with the first, built by
/// [`pairwise_wrap`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PairwiseWrap;

/// Collects the pairs of [`pairwise`] followed by `(last, first)`.
///
/// A single element produces no pair; two elements `a, b` produce
/// `(a, b), (b, a)`.
///
/// # Examples
///
/// ```rust
/// use seqpipe::compose::Pipe;
/// use seqpipe::stages::eager;
///
/// let ring = [1, 2, 3, 4, 5].then(eager::pairwise_wrap());
/// assert_eq!(ring, vec![(1, 2), (2, 3), (3, 4), (4, 5), (5, 1)]);
/// ```
#[inline]
pub const fn pairwise_wrap() -> PairwiseWrap {
    PairwiseWrap
}

impl<'a, S> Stage<'a, S> for PairwiseWrap
where
    S: Sequenceable,
    S::Item: Clone,
{
    type Output = Vec<(S::Item, S::Item)>;

    fn apply(self, sequence: S) -> Self::Output {
        let (mut pairs, first) = collect_pairs(sequence);
        let last = pairs.last().map(|(_, last)| last.clone());
        if let (Some(first), Some(last)) = (first, last) {
            pairs.push((last, first));
        }
        pairs
    }
}

/// Collects the neighbouring pairs of `sequence` and returns them with its
/// first element.
fn collect_pairs<S>(sequence: S) -> (Vec<(S::Item, S::Item)>, Option<S::Item>)
where
    S: Sequenceable,
    S::Item: Clone,
{
    let (mut cursor, plan) = plan(sequence);
    let mut pairs = Vec::with_capacity(plan.capacity().saturating_sub(1));
    let Some(first) = cursor.next() else {
        return (pairs, None);
    };
    let mut previous = first.clone();
    for current in cursor {
        pairs.push((previous, current.clone()));
        previous = current;
    }
    (pairs, Some(first))
}

// =============================================================================
// Append
// =============================================================================

/// Concatenates two sequences, built by [`append`].
#[derive(Debug, Clone, Copy)]
pub struct Append<O> {
    other: O,
}

/// Collects every element of the input followed by every element of
/// `other`.
///
/// # Examples
///
/// ```rust
/// use seqpipe::compose::Pipe;
/// use seqpipe::stages::eager;
///
/// let letters = "ab".then(eager::append(vec!['c']));
/// assert_eq!(letters, vec!['a', 'b', 'c']);
/// ```
#[inline]
pub const fn append<O>(other: O) -> Append<O> {
    Append { other }
}

impl<'a, S, O> Stage<'a, S> for Append<O>
where
    S: Sequenceable,
    O: Sequenceable<Item = S::Item>,
{
    type Output = Vec<S::Item>;

    fn apply(self, sequence: S) -> Self::Output {
        let (leading, leading_plan) = plan(sequence);
        let (trailing, trailing_plan) = plan(self.other);
        let mut joined = Vec::with_capacity(leading_plan.capacity() + trailing_plan.capacity());
        joined.extend(leading);
        joined.extend(trailing);
        joined
    }
}
