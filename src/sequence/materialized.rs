//! Containers produced by eager stages.
//!
//! An eager stage that keeps one output element per input element produces
//! the [`Sequenceable::Materialized`](super::Sequenceable::Materialized)
//! container of its source: a fixed-capacity [`ArrayVec`] when the source
//! length is part of its type, a growable [`Vec`] otherwise. Both implement
//! [`Materialized`] and dereference to a slice, so results can be indexed
//! and compared the same way regardless of which one was chosen.

use std::ops::{Deref, DerefMut};

use arrayvec::ArrayVec;

/// An owned, randomly indexable container filled by the eager materializer.
///
/// # Examples
///
/// ```rust
/// use arrayvec::ArrayVec;
/// use seqpipe::sequence::Materialized;
///
/// let mut fixed: ArrayVec<i32, 3> = Materialized::with_capacity(3);
/// Materialized::push(&mut fixed, 1);
/// assert_eq!(Materialized::capacity(&fixed), 3);
///
/// let mut growable: Vec<i32> = Materialized::with_capacity(8);
/// Materialized::push(&mut growable, 1);
/// assert_eq!(fixed.as_slice(), growable.as_slice());
/// ```
pub trait Materialized<T>: Deref<Target = [T]> + DerefMut + IntoIterator<Item = T> {
    /// Creates an empty container able to hold `capacity` elements without
    /// reallocating.
    fn with_capacity(capacity: usize) -> Self;

    /// Appends an element.
    ///
    /// # Panics
    ///
    /// Fixed-capacity containers panic when they are already full.
    fn push(&mut self, element: T);

    /// The number of elements the container can hold without reallocating.
    fn capacity(&self) -> usize;
}

impl<T> Materialized<T> for Vec<T> {
    #[inline]
    fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity(capacity)
    }

    #[inline]
    fn push(&mut self, element: T) {
        Self::push(self, element);
    }

    #[inline]
    fn capacity(&self) -> usize {
        Self::capacity(self)
    }
}

impl<T, const N: usize> Materialized<T> for ArrayVec<T, N> {
    #[inline]
    fn with_capacity(_capacity: usize) -> Self {
        Self::new()
    }

    #[inline]
    fn push(&mut self, element: T) {
        Self::push(self, element);
    }

    #[inline]
    fn capacity(&self) -> usize {
        N
    }
}
