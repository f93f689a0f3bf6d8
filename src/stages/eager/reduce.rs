//! Reductions to a single value.

use std::ops::Add;

use crate::compose::Stage;
use crate::sequence::{Sequenceable, length_of};

// =============================================================================
// Sum
// =============================================================================

/// An element type that can be summed without overflowing too early.
///
/// Integers narrower than four bytes accumulate in a four-byte integer of
/// the same signedness. Wider integers keep their own type, and
/// floating-point values start from the zero of their own type.
///
/// Borrowed elements are summed by value.
pub trait Summable {
    /// The type the sum is accumulated in.
    type Accumulator: Add<Output = Self::Accumulator>;

    /// The sum of no elements.
    const ZERO: Self::Accumulator;

    /// Converts the element into the accumulator type.
    fn widen(self) -> Self::Accumulator;
}

macro_rules! impl_summable {
    ($($element:ty => $accumulator:ty = $zero:expr;)+) => {
        $(
            impl Summable for $element {
                type Accumulator = $accumulator;

                const ZERO: $accumulator = $zero;

                #[inline]
                fn widen(self) -> $accumulator {
                    <$accumulator>::from(self)
                }
            }
        )+
    };
}

impl_summable! {
    i8 => i32 = 0;
    i16 => i32 = 0;
    i32 => i32 = 0;
    i64 => i64 = 0;
    i128 => i128 = 0;
    isize => isize = 0;
    u8 => u32 = 0;
    u16 => u32 = 0;
    u32 => u32 = 0;
    u64 => u64 = 0;
    u128 => u128 = 0;
    usize => usize = 0;
    f32 => f32 = 0.0;
    f64 => f64 = 0.0;
}

impl<T: Summable + Copy> Summable for &T {
    type Accumulator = T::Accumulator;

    const ZERO: T::Accumulator = T::ZERO;

    #[inline]
    fn widen(self) -> T::Accumulator {
        (*self).widen()
    }
}

/// Adds up every element, built by [`sum`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Sum;

/// Adds up every element in its [`Summable::Accumulator`] type.
///
/// # Examples
///
/// ```rust
/// use seqpipe::compose::Pipe;
/// use seqpipe::stages::eager;
///
/// let small: [i8; 5] = [100; 5];
/// let total: i32 = small.then(eager::sum());
/// assert_eq!(total, 500);
///
/// let halves: f32 = [0.5_f32, 0.25, 0.25].then(eager::sum());
/// assert_eq!(halves, 1.0);
/// ```
#[inline]
pub const fn sum() -> Sum {
    Sum
}

impl<'a, S> Stage<'a, S> for Sum
where
    S: Sequenceable,
    S::Item: Summable,
{
    type Output = <S::Item as Summable>::Accumulator;

    fn apply(self, sequence: S) -> Self::Output {
        sequence
            .start_cursor()
            .fold(<S::Item as Summable>::ZERO, |total, element| total + element.widen())
    }
}

// =============================================================================
// Reduce
// =============================================================================

/// Folds every element into an accumulator, built by [`reduce`].
#[derive(Debug, Clone, Copy)]
pub struct Reduce<A, F> {
    initial: A,
    folder: F,
}

/// Folds every element into `initial` with `folder(accumulator, element)`.
///
/// # Examples
///
/// ```rust
/// use seqpipe::compose::Pipe;
/// use seqpipe::stages::eager;
///
/// let append = |mut text: String, part: &str| {
///     text.push_str(part);
///     text
/// };
/// let joined = ["a", "b", "c"].then(eager::reduce(String::new(), append));
/// assert_eq!(joined, "abc");
/// ```
#[inline]
pub fn reduce<A, T, F>(initial: A, folder: F) -> Reduce<A, F>
where
    F: FnMut(A, T) -> A,
{
    Reduce { initial, folder }
}

impl<'a, S, A, F> Stage<'a, S> for Reduce<A, F>
where
    S: Sequenceable,
    F: FnMut(A, S::Item) -> A,
{
    type Output = A;

    #[inline]
    fn apply(self, sequence: S) -> A {
        sequence.start_cursor().fold(self.initial, self.folder)
    }
}

// =============================================================================
// Predicates
// =============================================================================

/// Checks that every element satisfies a predicate, built by [`forall`].
#[derive(Debug, Clone, Copy)]
pub struct ForAll<P> {
    predicate: P,
}

/// Returns whether `predicate` holds for every element.
///
/// Stops at the first element failing it; an empty sequence satisfies any
/// predicate.
///
/// # Examples
///
/// ```rust
/// use seqpipe::compose::Pipe;
/// use seqpipe::stages::eager;
///
/// assert!([2, 4, 6].then(eager::forall(|n: &i32| n % 2 == 0)));
/// assert!(Vec::<i32>::new().then(eager::forall(|n: &i32| *n > 100)));
/// ```
#[inline]
pub fn forall<T, P>(predicate: P) -> ForAll<P>
where
    P: FnMut(&T) -> bool,
{
    ForAll { predicate }
}

impl<'a, S, P> Stage<'a, S> for ForAll<P>
where
    S: Sequenceable,
    P: FnMut(&S::Item) -> bool,
{
    type Output = bool;

    fn apply(self, sequence: S) -> bool {
        let mut predicate = self.predicate;
        sequence.start_cursor().all(|element| predicate(&element))
    }
}

/// Checks that some element satisfies a predicate, built by [`exists`].
#[derive(Debug, Clone, Copy)]
pub struct Exists<P> {
    predicate: P,
}

/// Returns whether `predicate` holds for at least one element.
///
/// Stops at the first element satisfying it.
///
/// # Examples
///
/// ```rust
/// use seqpipe::compose::Pipe;
/// use seqpipe::stages::eager;
///
/// assert!("hello".then(eager::exists(|c: &char| *c == 'l')));
/// assert!(!"hello".then(eager::exists(|c: &char| c.is_uppercase())));
/// ```
#[inline]
pub fn exists<T, P>(predicate: P) -> Exists<P>
where
    P: FnMut(&T) -> bool,
{
    Exists { predicate }
}

impl<'a, S, P> Stage<'a, S> for Exists<P>
where
    S: Sequenceable,
    P: FnMut(&S::Item) -> bool,
{
    type Output = bool;

    fn apply(self, sequence: S) -> bool {
        let mut predicate = self.predicate;
        sequence.start_cursor().any(|element| predicate(&element))
    }
}

// =============================================================================
// Length
// =============================================================================

/// Counts the elements, built by [`length`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Length;

/// Returns the number of elements.
///
/// Sources that know their length answer without being traversed.
///
/// # Examples
///
/// ```rust
/// use seqpipe::compose::Pipe;
/// use seqpipe::stages::{eager, lazy};
///
/// assert_eq!("añb".then(eager::length()), 3);
/// let multiples = (0..10)
///     .collect::<Vec<i32>>()
///     .then(lazy::filter(|n: &i32| n % 3 == 0));
/// assert_eq!(multiples.then(eager::length()), 4);
/// ```
#[inline]
pub const fn length() -> Length {
    Length
}

impl<'a, S: Sequenceable> Stage<'a, S> for Length {
    type Output = usize;

    #[inline]
    fn apply(self, sequence: S) -> usize {
        length_of(sequence)
    }
}

/// Checks for the absence of elements, built by [`is_empty`].
#[derive(Debug, Clone, Copy, Default)]
pub struct IsEmpty;

/// Returns whether the sequence has no element.
///
/// A source that does not know its length is pulled at most once.
///
/// # Examples
///
/// ```rust
/// use seqpipe::compose::Pipe;
/// use seqpipe::stages::eager;
/// use seqpipe::stream;
///
/// assert!("".then(eager::is_empty()));
/// assert!(!stream::range_from(0_u8).then(eager::is_empty()));
/// ```
#[inline]
pub const fn is_empty() -> IsEmpty {
    IsEmpty
}

impl<'a, S: Sequenceable> Stage<'a, S> for IsEmpty {
    type Output = bool;

    fn apply(self, sequence: S) -> bool {
        if let Some(length) = S::STATIC_LENGTH {
            return length == 0;
        }
        match sequence.end_cursor().offset() {
            Some(length) => length == 0,
            None => sequence.start_cursor().next().is_none(),
        }
    }
}
