//! Eager sources.
//!
//! Ranges and generated sequences that start a pipeline. Lengths fixed at
//! compile time produce arrays; lengths known at run time produce `Vec`s.
//!
//! # Examples
//!
//! ```rust
//! use seqpipe::compose::Pipe;
//! use seqpipe::stages::constructors::{init_static, range};
//! use seqpipe::stages::eager;
//!
//! assert_eq!(range(2, 6).then(eager::sum()), 14);
//!
//! let squares: [usize; 4] = init_static(|index| index * index);
//! assert_eq!(squares, [0, 1, 4, 9]);
//! ```

use crate::error::{OrRaise, PreconditionError};

/// The integers from `start` (inclusive) to `stop` (exclusive).
///
/// # Panics
///
/// Panics unless `stop` is larger than `start`.
///
/// # Examples
///
/// ```rust
/// use seqpipe::stages::constructors::range;
///
/// assert_eq!(range(-1, 2), vec![-1, 0, 1]);
/// ```
#[track_caller]
pub fn range(start: i32, stop: i32) -> Vec<i32> {
    try_range(start, stop).or_raise()
}

/// Fallible form of [`range`].
///
/// # Errors
///
/// Returns [`PreconditionError::EmptyRange`] unless `stop` is larger than
/// `start`.
pub fn try_range(start: i32, stop: i32) -> Result<Vec<i32>, PreconditionError> {
    if stop <= start {
        return Err(PreconditionError::EmptyRange { start, stop });
    }
    Ok((start..stop).collect())
}

/// The integers from zero to `stop` (exclusive).
///
/// # Panics
///
/// Panics unless `stop` is positive.
#[track_caller]
pub fn range_to(stop: i32) -> Vec<i32> {
    range(0, stop)
}

/// The integers from zero to `N` (exclusive) as an array.
///
/// `N` must be positive; `range_static::<0>()` fails to compile.
///
/// # Examples
///
/// ```rust
/// use seqpipe::stages::constructors::range_static;
///
/// assert_eq!(range_static::<4>(), [0, 1, 2, 3]);
/// ```
///
/// ```compile_fail
/// use seqpipe::stages::constructors::range_static;
///
/// let nothing = range_static::<0>();
/// ```
pub fn range_static<const N: usize>() -> [i32; N] {
    const {
        assert!(N > 0, "range_static: the range must not be empty");
    }
    let mut next = 0;
    std::array::from_fn(|_| {
        let current = next;
        next += 1;
        current
    })
}

/// A `Vec` of `count` elements, the element at index `i` being
/// `generator(i)`.
///
/// # Panics
///
/// Panics when `count` is zero.
///
/// # Examples
///
/// ```rust
/// use seqpipe::stages::constructors::init;
///
/// assert_eq!(init(3, |index| index * 10), vec![0, 10, 20]);
/// ```
#[track_caller]
pub fn init<T, F>(count: usize, generator: F) -> Vec<T>
where
    F: FnMut(usize) -> T,
{
    try_init(count, generator).or_raise()
}

/// Fallible form of [`init`].
///
/// # Errors
///
/// Returns [`PreconditionError::ZeroSize`] when `count` is zero.
pub fn try_init<T, F>(count: usize, generator: F) -> Result<Vec<T>, PreconditionError>
where
    F: FnMut(usize) -> T,
{
    if count == 0 {
        return Err(PreconditionError::ZeroSize { operation: "init" });
    }
    Ok((0..count).map(generator).collect())
}

/// An array of `N` elements, the element at index `i` being `generator(i)`.
///
/// `N` must be positive.
pub fn init_static<const N: usize, T, F>(generator: F) -> [T; N]
where
    F: FnMut(usize) -> T,
{
    const {
        assert!(N > 0, "init_static: the array must not be empty");
    }
    std::array::from_fn(generator)
}

/// A one-element array.
///
/// # Examples
///
/// ```rust
/// use seqpipe::compose::Pipe;
/// use seqpipe::stages::{constructors, eager};
///
/// assert_eq!(constructors::singleton('x').then(eager::to_string()), "x");
/// ```
#[inline]
pub const fn singleton<T>(element: T) -> [T; 1] {
    [element]
}

/// An array without elements.
///
/// # Examples
///
/// ```rust
/// use seqpipe::compose::Pipe;
/// use seqpipe::stages::{constructors, eager};
///
/// assert!(constructors::empty::<u8>().then(eager::is_empty()));
/// ```
#[inline]
pub const fn empty<T>() -> [T; 0] {
    []
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 3, vec![0, 1, 2])]
    #[case(-2, 0, vec![-2, -1])]
    #[case(5, 6, vec![5])]
    fn range_cases(#[case] start: i32, #[case] stop: i32, #[case] expected: Vec<i32>) {
        assert_eq!(range(start, stop), expected);
    }

    #[rstest]
    #[case(3, 3)]
    #[case(4, 1)]
    fn empty_ranges_are_rejected(#[case] start: i32, #[case] stop: i32) {
        assert_eq!(
            try_range(start, stop),
            Err(PreconditionError::EmptyRange { start, stop })
        );
    }

    #[rstest]
    #[should_panic(expected = "range: exclusive stop 0 must be larger than inclusive start 0")]
    fn range_to_zero_panics() {
        let _ = range_to(0);
    }

    #[rstest]
    fn init_zero_is_rejected() {
        assert_eq!(
            try_init(0, |index| index),
            Err(PreconditionError::ZeroSize { operation: "init" })
        );
    }

    #[rstest]
    fn init_static_passes_indices() {
        let labels: [String; 2] = init_static(|index| format!("#{index}"));
        assert_eq!(labels, ["#0", "#1"]);
    }

    #[rstest]
    fn singleton_and_empty_have_static_lengths() {
        use crate::sequence::Sequenceable;
        assert_eq!(<[char; 1] as Sequenceable>::STATIC_LENGTH, Some(1));
        assert_eq!(singleton(4), [4]);
        assert_eq!(empty::<i32>().len(), 0);
    }
}
