//! The capability every pipeline source must provide.
//!
//! A value takes part in a pipeline when it implements [`Sequenceable`]:
//! it can hand out a start cursor (an [`Iterator`] over its elements) and
//! describe where its end lies ([`End`]). There is no common base type and
//! no blanket implementation; each kind of source gets its own adapter:
//!
//! - **Character buffers** ([`buffers`]): `&str`, `String`, `&CStr`.
//! - **Fixed arrays and slices** ([`buffers`]): `[T; N]`, `&[T; N]`, `&[T]`.
//! - **Containers** ([`containers`]): `Vec`, `VecDeque`, `LinkedList`,
//!   `BTreeSet`, `HashSet`, `BTreeMap`, `HashMap`, `ArrayVec`.
//! - **External enumerators** ([`enumerators`]): [`Enumerator`] over any
//!   iterator, directory listings, regex matches.
//! - **Lazy streams**: a [`LazyStream`] is its own cursor.
//!
//! Because adapters are explicit, coherence guarantees that at most one of
//! them applies to a given type. Anything without an adapter is not a
//! sequence and cannot be piped into a stage:
//!
//! ```compile_fail
//! use seqpipe::compose::Pipe;
//! use seqpipe::stages::eager;
//!
//! let total = 42_i32.then(eager::sum());
//! ```
//!
//! # Examples
//!
//! ```rust
//! use seqpipe::sequence::{End, Sequenceable, length_of};
//!
//! let numbers = vec![3, 1, 4];
//! assert_eq!(numbers.end_cursor(), End::at(3));
//! assert_eq!(length_of(&numbers), 3);
//!
//! let letters: Vec<char> = "abc".start_cursor().collect();
//! assert_eq!(letters, vec!['a', 'b', 'c']);
//! ```

pub mod buffers;
pub mod containers;
pub mod enumerators;
pub mod materialized;

pub use enumerators::Enumerator;
#[cfg(feature = "regex")]
pub use enumerators::RegexMatchRange;
pub use materialized::Materialized;

use crate::stream::LazyStream;

/// The end sentinel of a sequence.
///
/// Contiguous buffers and sized containers know where their end lies
/// relative to their start, so their `End` carries that offset. Streams and
/// external enumerators only discover their end by traversal and report an
/// unbounded `End`.
///
/// # Examples
///
/// ```rust
/// use seqpipe::sequence::End;
///
/// assert_eq!(End::at(4).offset(), Some(4));
/// assert_eq!(End::unbounded().offset(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct End {
    offset: Option<usize>,
}

impl End {
    /// An end lying `offset` elements after the start cursor.
    #[inline]
    pub const fn at(offset: usize) -> Self {
        Self {
            offset: Some(offset),
        }
    }

    /// An end that is only found by advancing the start cursor.
    #[inline]
    pub const fn unbounded() -> Self {
        Self { offset: None }
    }

    /// The distance from the start cursor, when it is known up front.
    #[inline]
    pub const fn offset(self) -> Option<usize> {
        self.offset
    }

    /// Returns whether the distance from the start cursor is known.
    #[inline]
    pub const fn is_bounded(self) -> bool {
        self.offset.is_some()
    }
}

/// A value that can be traversed from a start cursor to an end.
///
/// # Required Methods
///
/// - `start_cursor`: consumes the value and returns an iterator positioned
///   at its first element
/// - `end_cursor`: describes where the traversal ends
///
/// # Provided Methods
///
/// - `into_stream`: turns the value into a [`LazyStream`]. Every source is
///   wrapped, except a `LazyStream` which returns itself.
///
/// # Associated Items
///
/// - `Item`: the element type, i.e. what the start cursor dereferences to
/// - `Materialized<U>`: the container an element-preserving eager transform
///   produces, `ArrayVec<U, N>` for arrays of length `N` and `Vec<U>`
///   otherwise
/// - `STATIC_LENGTH`: the length when it is part of the type
///
/// # Examples
///
/// ```rust
/// use seqpipe::sequence::Sequenceable;
///
/// assert_eq!(<[u8; 3] as Sequenceable>::STATIC_LENGTH, Some(3));
/// assert_eq!(<Vec<u8> as Sequenceable>::STATIC_LENGTH, None);
///
/// let doubled: Vec<i32> = [1, 2, 3].start_cursor().map(|n| n * 2).collect();
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub trait Sequenceable: Sized {
    /// The element type produced by the start cursor.
    type Item;

    /// The cursor walking from the first element to the end.
    type Cursor: Iterator<Item = Self::Item>;

    /// The container produced when every element is mapped to a `U`.
    type Materialized<U>: Materialized<U>;

    /// The number of elements, when the type itself fixes it.
    const STATIC_LENGTH: Option<usize> = None;

    /// Returns a cursor positioned at the first element.
    fn start_cursor(self) -> Self::Cursor;

    /// Returns the end sentinel of this sequence.
    fn end_cursor(&self) -> End;

    /// Converts this sequence into a lazy stream over its elements.
    ///
    /// Nothing is read from the sequence until the stream is first pulled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqpipe::sequence::Sequenceable;
    /// use seqpipe::stream::StreamState;
    ///
    /// let mut stream = vec![1, 2].into_stream();
    /// assert_eq!(stream.state(), StreamState::NotStarted);
    /// assert_eq!(stream.next(), Some(1));
    /// ```
    fn into_stream<'a>(self) -> LazyStream<'a, Self::Item>
    where
        Self: 'a,
    {
        LazyStream::from_cursor(self.start_cursor())
    }
}

/// Returns the number of elements in a sequence.
///
/// The length is the static length when the type fixes it, otherwise the
/// offset of the end sentinel, otherwise the distance walked by the start
/// cursor until it is exhausted.
///
/// # Examples
///
/// ```rust
/// use seqpipe::sequence::{Enumerator, length_of};
///
/// assert_eq!(length_of([0_u8; 16]), 16);
/// assert_eq!(length_of("héllo"), 5);
/// assert_eq!(length_of(Enumerator::new((0..10).filter(|n| n % 3 == 0))), 4);
/// ```
pub fn length_of<S: Sequenceable>(sequence: S) -> usize {
    if let Some(length) = S::STATIC_LENGTH {
        return length;
    }
    match sequence.end_cursor().offset() {
        Some(length) => length,
        None => sequence.start_cursor().count(),
    }
}

static_assertions::assert_impl_all!(&'static str: Sequenceable);
static_assertions::assert_impl_all!(String: Sequenceable);
static_assertions::assert_impl_all!([i32; 4]: Sequenceable);
static_assertions::assert_impl_all!(&'static [i32; 4]: Sequenceable);
static_assertions::assert_impl_all!(Vec<i32>: Sequenceable);
static_assertions::assert_impl_all!(LazyStream<'static, i32>: Sequenceable);
static_assertions::assert_not_impl_any!(bool: Sequenceable);
static_assertions::assert_not_impl_any!(char: Sequenceable);
static_assertions::assert_not_impl_any!(i32: Sequenceable);
static_assertions::assert_not_impl_any!(f32: Sequenceable);
static_assertions::assert_not_impl_any!(f64: Sequenceable);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::BTreeMap;

    #[rstest]
    fn end_at_reports_its_offset() {
        let end = End::at(5);
        assert!(end.is_bounded());
        assert_eq!(end.offset(), Some(5));
    }

    #[rstest]
    fn unbounded_end_has_no_offset() {
        assert!(!End::unbounded().is_bounded());
    }

    #[rstest]
    fn length_of_prefers_static_length() {
        assert_eq!(length_of([1, 2, 3, 4]), 4);
    }

    #[rstest]
    fn length_of_uses_end_offset_for_containers() {
        let map: BTreeMap<i32, char> = [(1, 'a'), (2, 'b')].into_iter().collect();
        assert_eq!(length_of(&map), 2);
    }

    #[rstest]
    fn length_of_walks_unbounded_sequences() {
        let stream = vec![1, 2, 3].into_stream();
        assert_eq!(length_of(stream), 3);
    }

    #[rstest]
    fn into_stream_defers_reading_the_source() {
        let stream = vec![1, 2, 3].into_stream();
        assert_eq!(stream.collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
