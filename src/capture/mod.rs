//! Owned storage for the parameters of suspended stages.
//!
//! A lazy stage keeps using its parameters (a predicate, a mapping
//! function, a chunk size) for as long as its stream is alive, which is
//! usually well after the expression that built the pipeline has ended.
//! Every lazy generator therefore keeps its parameters in a [`ByValue`]:
//! a value moved or cloned into storage the generator owns, so the
//! parameter lives exactly as long as the stream.
//!
//! Public stage constructors take their parameters by value and capture
//! them. Callers that only hold a borrow clone it into a `ByValue` first
//! and hand the capture to the stage's `captured` constructor.
//!
//! # Examples
//!
//! ```rust
//! use seqpipe::capture::ByValue;
//! use seqpipe::compose::Pipe;
//! use seqpipe::stages::lazy;
//! use seqpipe::stream::LazyStream;
//!
//! fn keep<P>(predicate: &P) -> LazyStream<'static, i32>
//! where
//!     P: Fn(&i32) -> bool + Clone + 'static,
//! {
//!     // The stream owns a clone; the borrow of `predicate` ends here.
//!     vec![1, 2, 3, 4, 5, 6].then(lazy::Filter::captured(ByValue::cloned(predicate)))
//! }
//!
//! let is_even = |n: &i32| n % 2 == 0;
//! let stream = keep(&is_even);
//! assert_eq!(stream.collect::<Vec<_>>(), vec![2, 4, 6]);
//! ```

use std::fmt;

/// A stage parameter owned by the stream that uses it.
///
/// `ByValue` never refers to the caller's value: it is built from an owned
/// value or from a clone.
///
/// # Examples
///
/// ```rust
/// use seqpipe::capture::ByValue;
///
/// let size = 3_usize;
/// let captured = ByValue::cloned(&size);
/// assert_eq!(*captured.get(), 3);
///
/// let moved: ByValue<String> = String::from("owned").into();
/// assert_eq!(moved.into_inner(), "owned");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ByValue<T> {
    value: T,
}

impl<T> ByValue<T> {
    /// Captures a value by moving it.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Captures a copy of a borrowed value.
    #[inline]
    pub fn cloned(value: &T) -> Self
    where
        T: Clone,
    {
        Self::new(value.clone())
    }

    /// Returns a reference to the captured value.
    #[inline]
    pub const fn get(&self) -> &T {
        &self.value
    }

    /// Returns a mutable reference to the captured value.
    ///
    /// Stateful parameters such as `FnMut` closures are called through this.
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Releases the captured value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> From<T> for ByValue<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Clone> From<&T> for ByValue<T> {
    fn from(value: &T) -> Self {
        Self::cloned(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for ByValue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("ByValue").field(&self.value).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn cloned_capture_is_independent_of_the_original() {
        let mut original = vec![1, 2];
        let captured = ByValue::cloned(&original);
        original.push(3);
        assert_eq!(captured.get(), &vec![1, 2]);
    }

    #[rstest]
    fn from_reference_clones() {
        let text = String::from("seq");
        let captured: ByValue<String> = (&text).into();
        assert_eq!(captured.into_inner(), text);
    }

    #[rstest]
    fn get_mut_drives_stateful_closures() {
        let mut counter = 0;
        let mut captured = ByValue::new(move || {
            counter += 1;
            counter
        });
        assert_eq!((captured.get_mut())(), 1);
        assert_eq!((captured.get_mut())(), 2);
    }

    #[rstest]
    fn debug_shows_the_value() {
        assert_eq!(format!("{:?}", ByValue::new(7)), "ByValue(7)");
    }
}
