//! Single-pass, pull-based lazy streams.
//!
//! A [`LazyStream`] owns one suspended [`Generator`]. Nothing runs when the
//! stream is built; every call to [`Iterator::next`] resumes the generator
//! until it yields the next element or completes. Locals kept in the
//! generator survive from one pull to the next.
//!
//! ```text
//! NotStarted --pull--> Suspended --pull--> Suspended ... --pull--> Finished
//!      \_____________________________pull___________________________/
//! ```
//!
//! Dropping a stream in any state drops its generator along with everything
//! the generator owns. That is the only way to cancel a stream, and it never
//! produces partial output.
//!
//! # Examples
//!
//! ```rust
//! use seqpipe::stream::{self, LazyStream, StreamState};
//!
//! let mut countdown = LazyStream::from_fn({
//!     let mut remaining = 3;
//!     move || {
//!         (remaining > 0).then(|| {
//!             remaining -= 1;
//!             remaining + 1
//!         })
//!     }
//! });
//! assert_eq!(countdown.state(), StreamState::NotStarted);
//! assert_eq!(countdown.next(), Some(3));
//! assert_eq!(countdown.state(), StreamState::Suspended);
//! assert_eq!(countdown.by_ref().collect::<Vec<_>>(), vec![2, 1]);
//! assert!(countdown.is_finished());
//!
//! let evens: Vec<i32> = stream::range_step(0, 10, 4).collect();
//! assert_eq!(evens, vec![0, 4, 8]);
//! ```

mod generator;
mod sources;

use std::fmt;
use std::iter::FusedIterator;

pub use generator::{CursorGenerator, FromFn, Generator, Resume};
pub use sources::{range_from, range_step, try_range_step, unfold, wrap, Step};

use crate::sequence::{End, Sequenceable};

/// Where a [`LazyStream`] is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamState {
    /// Built but never pulled. The generator has run none of its body.
    NotStarted,
    /// The generator yielded an element and waits for the next pull.
    Suspended,
    /// The generator completed and has been dropped.
    Finished,
}

/// A move-only, single-pass producer of `T` values.
///
/// The lifetime `'a` bounds whatever the generator borrows, so a stream
/// cannot outlive a source or parameter it refers to. The stream is its own
/// cursor: it implements [`Iterator`], and once it returned `None` it keeps
/// returning `None`.
///
/// `LazyStream` is neither `Clone` nor `Send`. A taken-from stream
/// (`std::mem::take`) is left [`Finished`](StreamState::Finished).
///
/// # Examples
///
/// ```rust
/// use seqpipe::stream::LazyStream;
///
/// let mut original = LazyStream::from_cursor(1..=3);
/// let moved = std::mem::take(&mut original);
/// assert_eq!(original.next(), None);
/// assert_eq!(moved.collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
pub struct LazyStream<'a, T> {
    generator: Option<Box<dyn Generator<Yield = T> + 'a>>,
    state: StreamState,
    produced: usize,
}

impl<'a, T> LazyStream<'a, T> {
    /// Creates a stream that resumes `generator` on every pull.
    pub fn from_generator<G>(generator: G) -> Self
    where
        G: Generator<Yield = T> + 'a,
    {
        Self {
            generator: Some(Box::new(generator)),
            state: StreamState::NotStarted,
            produced: 0,
        }
    }

    /// Creates a stream from a closure that returns `None` once it is done.
    pub fn from_fn<F>(body: F) -> Self
    where
        F: FnMut() -> Option<T> + 'a,
    {
        Self::from_generator(FromFn::new(body))
    }

    /// Creates a stream that pulls its elements from `cursor`.
    pub fn from_cursor<I>(cursor: I) -> Self
    where
        I: Iterator<Item = T> + 'a,
    {
        Self::from_generator(CursorGenerator::new(cursor))
    }

    /// Creates a stream that is already finished.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            generator: None,
            state: StreamState::Finished,
            produced: 0,
        }
    }

    /// Returns the current lifecycle state.
    #[inline]
    pub const fn state(&self) -> StreamState {
        self.state
    }

    /// Returns whether the stream has completed.
    #[inline]
    pub const fn is_finished(&self) -> bool {
        matches!(self.state, StreamState::Finished)
    }

    /// Returns how many elements the stream has produced so far.
    #[inline]
    pub const fn produced(&self) -> usize {
        self.produced
    }

    fn finish(&mut self) {
        self.generator = None;
        self.state = StreamState::Finished;
        tracing::trace!(produced = self.produced, "lazy stream finished");
    }
}

impl<T> Iterator for LazyStream<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let generator = self.generator.as_mut()?;
        match generator.resume() {
            Resume::Yielded(element) => {
                self.state = StreamState::Suspended;
                self.produced += 1;
                Some(element)
            }
            Resume::Complete => {
                self.finish();
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.generator.is_some() {
            (0, None)
        } else {
            (0, Some(0))
        }
    }
}

impl<T> FusedIterator for LazyStream<'_, T> {}

impl<T> Default for LazyStream<'_, T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Drop for LazyStream<'_, T> {
    fn drop(&mut self) {
        if self.generator.is_some() {
            tracing::trace!(
                produced = self.produced,
                state = ?self.state,
                "lazy stream cancelled"
            );
        }
    }
}

impl<T> fmt::Debug for LazyStream<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LazyStream")
            .field("state", &self.state)
            .field("produced", &self.produced)
            .finish_non_exhaustive()
    }
}

impl<'a, T> Sequenceable for LazyStream<'a, T> {
    type Item = T;
    type Cursor = Self;
    type Materialized<U> = Vec<U>;

    #[inline]
    fn start_cursor(self) -> Self::Cursor {
        self
    }

    #[inline]
    fn end_cursor(&self) -> End {
        End::unbounded()
    }

    #[inline]
    fn into_stream<'b>(self) -> LazyStream<'b, T>
    where
        Self: 'b,
    {
        self
    }
}

static_assertions::assert_not_impl_any!(LazyStream<'static, i32>: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    #[rstest]
    fn construction_runs_nothing() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let stream = LazyStream::from_fn(move || {
            counter.set(counter.get() + 1);
            Some(())
        });
        assert_eq!(stream.state(), StreamState::NotStarted);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn each_pull_resumes_exactly_once() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut stream = LazyStream::from_fn(move || {
            counter.set(counter.get() + 1);
            Some(counter.get())
        });
        assert_eq!(stream.next(), Some(1));
        assert_eq!(stream.next(), Some(2));
        assert_eq!(calls.get(), 2);
        assert_eq!(stream.produced(), 2);
    }

    #[rstest]
    fn completion_drops_the_generator() {
        let owned = Rc::new(());
        let held = Rc::clone(&owned);
        let mut stream = LazyStream::from_fn(move || {
            let _keep = &held;
            None::<i32>
        });
        assert_eq!(Rc::strong_count(&owned), 2);
        assert_eq!(stream.next(), None);
        assert!(stream.is_finished());
        assert_eq!(Rc::strong_count(&owned), 1);
    }

    #[rstest]
    fn finished_stream_stays_finished() {
        let mut stream = LazyStream::from_cursor(std::iter::once(1));
        assert_eq!(stream.next(), Some(1));
        assert_eq!(stream.next(), None);
        assert_eq!(stream.next(), None);
        assert_eq!(stream.size_hint(), (0, Some(0)));
    }

    #[rstest]
    fn empty_stream_is_finished() {
        let mut stream = LazyStream::<u8>::empty();
        assert!(stream.is_finished());
        assert_eq!(stream.next(), None);
    }

    #[rstest]
    fn into_stream_returns_the_stream_itself() {
        let mut stream = LazyStream::from_cursor(0..5);
        stream.next();
        let same = stream.into_stream();
        assert_eq!(same.state(), StreamState::Suspended);
        assert_eq!(same.produced(), 1);
    }

    #[rstest]
    fn debug_reports_the_state() {
        let stream = LazyStream::<i32>::default();
        assert_eq!(
            format!("{stream:?}"),
            "LazyStream { state: Finished, produced: 0, .. }"
        );
    }
}
