//! Element-wise lazy stages and concatenation.

use crate::capture::ByValue;
use crate::compose::Stage;
use crate::sequence::Sequenceable;
use crate::stream::{Generator, LazyStream, Resume};

// =============================================================================
// Wrap
// =============================================================================

/// The identity stage, built by [`wrap`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Wrap;

/// Turns the input into a lazy stream without changing its elements.
///
/// # Examples
///
/// ```rust
/// use seqpipe::compose::Pipe;
/// use seqpipe::stages::lazy;
/// use seqpipe::stream::StreamState;
///
/// let stream = vec![1, 2, 3].then(lazy::wrap());
/// assert_eq!(stream.state(), StreamState::NotStarted);
/// assert_eq!(stream.collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
#[inline]
pub const fn wrap() -> Wrap {
    Wrap
}

impl<'a, S: Sequenceable + 'a> Stage<'a, S> for Wrap {
    type Output = LazyStream<'a, S::Item>;

    #[inline]
    fn apply(self, sequence: S) -> Self::Output {
        sequence.into_stream()
    }
}

// =============================================================================
// Map
// =============================================================================

/// Applies a mapping to every element, built by [`map`].
#[derive(Debug, Clone)]
pub struct Map<F> {
    mapping: ByValue<F>,
}

impl<F> Map<F> {
    /// Builds the stage from an already captured mapping.
    #[inline]
    pub const fn captured(mapping: ByValue<F>) -> Self {
        Self { mapping }
    }
}

/// Maps every element through `mapping`.
///
/// # Examples
///
/// ```rust
/// use seqpipe::compose::Pipe;
/// use seqpipe::stages::lazy;
///
/// let lengths = ["one", "three"].then(lazy::map(str::len));
/// assert_eq!(lengths.collect::<Vec<_>>(), vec![3, 5]);
/// ```
#[inline]
pub fn map<T, U, F>(mapping: F) -> Map<F>
where
    F: FnMut(T) -> U,
{
    Map::captured(ByValue::new(mapping))
}

impl<'a, S, U, F> Stage<'a, S> for Map<F>
where
    S: Sequenceable + 'a,
    F: FnMut(S::Item) -> U + 'a,
{
    type Output = LazyStream<'a, U>;

    fn apply(self, sequence: S) -> Self::Output {
        LazyStream::from_generator(MapGenerator {
            source: sequence.into_stream(),
            mapping: self.mapping,
        })
    }
}

struct MapGenerator<'a, T, F> {
    source: LazyStream<'a, T>,
    mapping: ByValue<F>,
}

impl<T, U, F: FnMut(T) -> U> Generator for MapGenerator<'_, T, F> {
    type Yield = U;

    #[inline]
    fn resume(&mut self) -> Resume<U> {
        self.source.next().map(self.mapping.get_mut()).into()
    }
}

// =============================================================================
// Mapi
// =============================================================================

/// Applies a mapping to every element and its index, built by [`mapi`].
#[derive(Debug, Clone)]
pub struct MapIndexed<F> {
    mapping: ByValue<F>,
}

impl<F> MapIndexed<F> {
    /// Builds the stage from an already captured mapping.
    #[inline]
    pub const fn captured(mapping: ByValue<F>) -> Self {
        Self { mapping }
    }
}

/// Maps every element through `mapping`, which also receives the element's
/// zero-based position.
///
/// # Examples
///
/// ```rust
/// use seqpipe::compose::Pipe;
/// use seqpipe::stages::lazy;
///
/// let labelled = "ab".then(lazy::mapi(|index: usize, letter: char| format!("{index}{letter}")));
/// assert_eq!(labelled.collect::<Vec<_>>(), vec!["0a", "1b"]);
/// ```
#[inline]
pub fn mapi<T, U, F>(mapping: F) -> MapIndexed<F>
where
    F: FnMut(usize, T) -> U,
{
    MapIndexed::captured(ByValue::new(mapping))
}

impl<'a, S, U, F> Stage<'a, S> for MapIndexed<F>
where
    S: Sequenceable + 'a,
    F: FnMut(usize, S::Item) -> U + 'a,
{
    type Output = LazyStream<'a, U>;

    fn apply(self, sequence: S) -> Self::Output {
        LazyStream::from_generator(MapIndexedGenerator {
            source: sequence.into_stream(),
            mapping: self.mapping,
            index: 0,
        })
    }
}

struct MapIndexedGenerator<'a, T, F> {
    source: LazyStream<'a, T>,
    mapping: ByValue<F>,
    index: usize,
}

impl<T, U, F: FnMut(usize, T) -> U> Generator for MapIndexedGenerator<'_, T, F> {
    type Yield = U;

    fn resume(&mut self) -> Resume<U> {
        let Some(element) = self.source.next() else {
            return Resume::Complete;
        };
        let mapped = (self.mapping.get_mut())(self.index, element);
        self.index += 1;
        Resume::Yielded(mapped)
    }
}

// =============================================================================
// Filter
// =============================================================================

/// Keeps the elements satisfying a predicate, built by [`filter`].
#[derive(Debug, Clone)]
pub struct Filter<P> {
    predicate: ByValue<P>,
}

impl<P> Filter<P> {
    /// Builds the stage from an already captured predicate.
    #[inline]
    pub const fn captured(predicate: ByValue<P>) -> Self {
        Self { predicate }
    }
}

/// Keeps the elements for which `predicate` holds, in their original order.
///
/// # Examples
///
/// ```rust
/// use seqpipe::compose::Pipe;
/// use seqpipe::stages::lazy;
///
/// let vowels = "sequence".then(lazy::filter(|c: &char| "aeiou".contains(*c)));
/// assert_eq!(vowels.collect::<String>(), "euee");
/// ```
#[inline]
pub fn filter<T, P>(predicate: P) -> Filter<P>
where
    P: FnMut(&T) -> bool,
{
    Filter::captured(ByValue::new(predicate))
}

impl<'a, S, P> Stage<'a, S> for Filter<P>
where
    S: Sequenceable + 'a,
    P: FnMut(&S::Item) -> bool + 'a,
{
    type Output = LazyStream<'a, S::Item>;

    fn apply(self, sequence: S) -> Self::Output {
        LazyStream::from_generator(FilterGenerator {
            source: sequence.into_stream(),
            predicate: self.predicate,
        })
    }
}

struct FilterGenerator<'a, T, P> {
    source: LazyStream<'a, T>,
    predicate: ByValue<P>,
}

impl<T, P: FnMut(&T) -> bool> Generator for FilterGenerator<'_, T, P> {
    type Yield = T;

    #[inline]
    fn resume(&mut self) -> Resume<T> {
        self.source.find(self.predicate.get_mut()).into()
    }
}

// =============================================================================
// Append
// =============================================================================

/// Continues a stream with the elements of another sequence, built by
/// [`append`].
#[derive(Debug, Clone)]
pub struct Append<O> {
    other: ByValue<O>,
}

impl<O> Append<O> {
    /// Builds the stage from an already captured sequence.
    #[inline]
    pub const fn captured(other: ByValue<O>) -> Self {
        Self { other }
    }
}

/// Yields every element of the input, then every element of `other`.
///
/// `other` is only turned into a stream once the input is exhausted.
///
/// # Examples
///
/// ```rust
/// use seqpipe::compose::Pipe;
/// use seqpipe::stages::lazy;
///
/// let joined = vec![1, 2].then(lazy::append([3, 4]));
/// assert_eq!(joined.collect::<Vec<_>>(), vec![1, 2, 3, 4]);
/// ```
#[inline]
pub fn append<O: Sequenceable>(other: O) -> Append<O> {
    Append::captured(ByValue::new(other))
}

impl<'a, S, O> Stage<'a, S> for Append<O>
where
    S: Sequenceable + 'a,
    O: Sequenceable<Item = S::Item> + 'a,
{
    type Output = LazyStream<'a, S::Item>;

    fn apply(self, sequence: S) -> Self::Output {
        LazyStream::from_generator(AppendGenerator {
            leading: sequence.into_stream(),
            phase: AppendPhase::Leading(self.other),
        })
    }
}

enum AppendPhase<'a, T, O> {
    Leading(ByValue<O>),
    Trailing(LazyStream<'a, T>),
    Complete,
}

struct AppendGenerator<'a, T, O> {
    leading: LazyStream<'a, T>,
    phase: AppendPhase<'a, T, O>,
}

impl<'a, O> Generator for AppendGenerator<'a, O::Item, O>
where
    O: Sequenceable + 'a,
{
    type Yield = O::Item;

    fn resume(&mut self) -> Resume<O::Item> {
        loop {
            match &mut self.phase {
                AppendPhase::Leading(_) => {
                    if let Some(element) = self.leading.next() {
                        return Resume::Yielded(element);
                    }
                    if let AppendPhase::Leading(other) =
                        std::mem::replace(&mut self.phase, AppendPhase::Complete)
                    {
                        self.phase = AppendPhase::Trailing(other.into_inner().into_stream());
                    }
                }
                AppendPhase::Trailing(trailing) => {
                    if let Some(element) = trailing.next() {
                        return Resume::Yielded(element);
                    }
                    self.phase = AppendPhase::Complete;
                }
                AppendPhase::Complete => return Resume::Complete,
            }
        }
    }
}
