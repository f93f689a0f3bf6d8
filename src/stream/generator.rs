//! The suspended computation behind a [`LazyStream`](super::LazyStream).
//!
//! A generator is an explicit state machine. Its struct holds every local
//! that must survive a suspension, usually next to a phase enum that acts as
//! the program counter. [`Generator::resume`] runs from the current phase
//! until the machine either yields one element or completes.

/// The outcome of resuming a [`Generator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resume<T> {
    /// The generator produced an element and suspended.
    Yielded(T),
    /// The generator ran off the end of its body.
    Complete,
}

impl<T> Resume<T> {
    /// Converts the outcome into the element it carries, if any.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Yielded(element) => Some(element),
            Self::Complete => None,
        }
    }

    /// Returns whether the generator has completed.
    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

impl<T> From<Option<T>> for Resume<T> {
    #[inline]
    fn from(element: Option<T>) -> Self {
        element.map_or(Self::Complete, Self::Yielded)
    }
}

/// A resumable computation producing elements one at a time.
///
/// After `resume` has returned [`Resume::Complete`] the generator is not
/// resumed again; [`LazyStream`](super::LazyStream) drops it at that point.
///
/// # Examples
///
/// ```rust
/// use seqpipe::stream::{Generator, LazyStream, Resume};
///
/// enum Phase {
///     Greeting,
///     Name,
///     Done,
/// }
///
/// struct Hello {
///     phase: Phase,
/// }
///
/// impl Generator for Hello {
///     type Yield = &'static str;
///
///     fn resume(&mut self) -> Resume<&'static str> {
///         match self.phase {
///             Phase::Greeting => {
///                 self.phase = Phase::Name;
///                 Resume::Yielded("hello")
///             }
///             Phase::Name => {
///                 self.phase = Phase::Done;
///                 Resume::Yielded("world")
///             }
///             Phase::Done => Resume::Complete,
///         }
///     }
/// }
///
/// let stream = LazyStream::from_generator(Hello { phase: Phase::Greeting });
/// assert_eq!(stream.collect::<Vec<_>>(), vec!["hello", "world"]);
/// ```
pub trait Generator {
    /// The type of the elements produced.
    type Yield;

    /// Runs the computation until its next suspension point.
    fn resume(&mut self) -> Resume<Self::Yield>;
}

impl<G: Generator + ?Sized> Generator for Box<G> {
    type Yield = G::Yield;

    #[inline]
    fn resume(&mut self) -> Resume<Self::Yield> {
        (**self).resume()
    }
}

/// A generator whose body is a closure returning `None` once it is done.
#[derive(Debug, Clone)]
pub struct FromFn<F> {
    body: F,
}

impl<F> FromFn<F> {
    /// Creates a generator from its body.
    #[inline]
    pub const fn new(body: F) -> Self {
        Self { body }
    }
}

impl<T, F: FnMut() -> Option<T>> Generator for FromFn<F> {
    type Yield = T;

    #[inline]
    fn resume(&mut self) -> Resume<T> {
        (self.body)().into()
    }
}

/// A generator that pulls its elements from an existing cursor.
#[derive(Debug, Clone)]
pub struct CursorGenerator<I> {
    cursor: I,
}

impl<I: Iterator> CursorGenerator<I> {
    /// Creates a generator that yields whatever `cursor` yields.
    #[inline]
    pub const fn new(cursor: I) -> Self {
        Self { cursor }
    }
}

impl<I: Iterator> Generator for CursorGenerator<I> {
    type Yield = I::Item;

    #[inline]
    fn resume(&mut self) -> Resume<I::Item> {
        self.cursor.next().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn resume_converts_from_option() {
        assert_eq!(Resume::from(Some(3)), Resume::Yielded(3));
        assert_eq!(Resume::<i32>::from(None), Resume::Complete);
    }

    #[rstest]
    fn into_option_round_trips_the_element() {
        assert_eq!(Resume::Yielded('x').into_option(), Some('x'));
        assert!(Resume::<char>::Complete.is_complete());
    }

    #[rstest]
    fn from_fn_keeps_its_state_between_resumptions() {
        let mut remaining = 2;
        let mut generator = FromFn::new(move || {
            (remaining > 0).then(|| {
                remaining -= 1;
                remaining
            })
        });
        assert_eq!(generator.resume(), Resume::Yielded(1));
        assert_eq!(generator.resume(), Resume::Yielded(0));
        assert_eq!(generator.resume(), Resume::Complete);
    }

    #[rstest]
    fn cursor_generator_follows_the_cursor() {
        let mut generator = CursorGenerator::new("ab".chars());
        assert_eq!(generator.resume(), Resume::Yielded('a'));
        assert_eq!(generator.resume(), Resume::Yielded('b'));
        assert_eq!(generator.resume(), Resume::Complete);
    }

    #[rstest]
    fn boxed_generators_resume_through_the_box() {
        let mut generator: Box<dyn Generator<Yield = u8>> =
            Box::new(CursorGenerator::new([7_u8].into_iter()));
        assert_eq!(generator.resume(), Resume::Yielded(7));
        assert!(generator.resume().is_complete());
    }
}
