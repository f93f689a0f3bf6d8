//! Streams that start a pipeline.

use super::{Generator, LazyStream, Resume};
use crate::capture::ByValue;
use crate::error::{OrRaise, PreconditionError};
use crate::sequence::Sequenceable;

/// Turns any sequence into a lazy stream over its elements.
///
/// A [`LazyStream`] is returned unchanged; any other sequence is wrapped and
/// only read once the stream is pulled.
///
/// # Examples
///
/// ```rust
/// use seqpipe::stream;
///
/// let letters = stream::wrap("abc");
/// assert_eq!(letters.collect::<String>(), "abc");
/// ```
#[inline]
pub fn wrap<'a, S: Sequenceable + 'a>(sequence: S) -> LazyStream<'a, S::Item> {
    sequence.into_stream()
}

// =============================================================================
// Stepping
// =============================================================================

/// A numeric type a range source can advance through.
///
/// Integers advance with checked addition, so a range that would step past
/// the bounds of its type finishes instead of overflowing. Floating-point
/// values always advance.
pub trait Step: Copy + PartialOrd {
    /// The zero of the type, which a step must differ from.
    const ZERO: Self;

    /// The unit step of [`range_from`].
    const ONE: Self;

    /// Returns `self + step`, or `None` when the sum is not representable.
    fn checked_step(self, step: Self) -> Option<Self>;
}

macro_rules! impl_step_for_integer {
    ($($integer:ty),+ $(,)?) => {
        $(
            impl Step for $integer {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn checked_step(self, step: Self) -> Option<Self> {
                    self.checked_add(step)
                }
            }
        )+
    };
}

impl_step_for_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_step_for_float {
    ($($float:ty),+ $(,)?) => {
        $(
            impl Step for $float {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                #[inline]
                fn checked_step(self, step: Self) -> Option<Self> {
                    Some(self + step)
                }
            }
        )+
    };
}

impl_step_for_float!(f32, f64);

// =============================================================================
// Stepped ranges
// =============================================================================

/// Counts from `start` towards the exclusive `stop` in increments of `step`.
///
/// A positive step produces an increasing range that ends before reaching
/// `stop`; a negative step produces a decreasing range that ends before
/// falling to `stop`. A range whose `start` already lies past `stop` is
/// empty. A step that would leave the bounds of `T` ends the range.
///
/// # Panics
///
/// Panics when `step` is zero.
///
/// # Examples
///
/// ```rust
/// use seqpipe::stream;
///
/// assert_eq!(stream::range_step(0, 7, 3).collect::<Vec<_>>(), vec![0, 3, 6]);
/// assert_eq!(stream::range_step(5, 0, -2).collect::<Vec<_>>(), vec![5, 3, 1]);
/// assert_eq!(stream::range_step(1.0, 2.0, 0.5).collect::<Vec<_>>(), vec![1.0, 1.5]);
/// assert_eq!(stream::range_step(250_u8, 255, 10).collect::<Vec<_>>(), vec![250]);
/// ```
#[track_caller]
pub fn range_step<'a, T: Step + 'a>(start: T, stop: T, step: T) -> LazyStream<'a, T> {
    try_range_step(start, stop, step).or_raise()
}

/// Fallible form of [`range_step`].
///
/// # Errors
///
/// Returns [`PreconditionError::ZeroStep`] when `step` is zero.
pub fn try_range_step<'a, T: Step + 'a>(
    start: T,
    stop: T,
    step: T,
) -> Result<LazyStream<'a, T>, PreconditionError> {
    let direction = if step > T::ZERO {
        Direction::Increasing
    } else if step < T::ZERO {
        Direction::Decreasing
    } else {
        return Err(PreconditionError::ZeroStep);
    };
    Ok(LazyStream::from_generator(RangeStep {
        current: Some(start),
        stop,
        step,
        direction,
    }))
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Increasing,
    Decreasing,
}

struct RangeStep<T> {
    current: Option<T>,
    stop: T,
    step: T,
    direction: Direction,
}

impl<T: Step> Generator for RangeStep<T> {
    type Yield = T;

    fn resume(&mut self) -> Resume<T> {
        let Some(element) = self.current else {
            return Resume::Complete;
        };
        let in_range = match self.direction {
            Direction::Increasing => element < self.stop,
            Direction::Decreasing => element > self.stop,
        };
        if !in_range {
            self.current = None;
            return Resume::Complete;
        }
        self.current = element.checked_step(self.step);
        Resume::Yielded(element)
    }
}

// =============================================================================
// Unbounded sources
// =============================================================================

/// Counts upwards from `start` in unit steps.
///
/// The stream only finishes after yielding the largest value of `T`; bound
/// it with a stage such as `lazy::take`, or stop pulling.
///
/// # Examples
///
/// ```rust
/// use seqpipe::stream;
///
/// let first: Vec<u64> = stream::range_from(10_u64).take(3).collect();
/// assert_eq!(first, vec![10, 11, 12]);
///
/// let last: Vec<u8> = stream::range_from(254_u8).collect();
/// assert_eq!(last, vec![254, 255]);
/// ```
pub fn range_from<'a, T: Step + 'a>(start: T) -> LazyStream<'a, T> {
    LazyStream::from_generator(RangeFrom {
        current: Some(start),
    })
}

struct RangeFrom<T> {
    current: Option<T>,
}

impl<T: Step> Generator for RangeFrom<T> {
    type Yield = T;

    #[inline]
    fn resume(&mut self) -> Resume<T> {
        let Some(element) = self.current else {
            return Resume::Complete;
        };
        self.current = element.checked_step(T::ONE);
        Resume::Yielded(element)
    }
}

/// Builds a stream by repeatedly stepping a seed.
///
/// `step` receives the seed by mutable reference and returns the next
/// element, or `None` to finish the stream. The seed and `step` are owned by
/// the stream.
///
/// # Examples
///
/// ```rust
/// use seqpipe::stream;
///
/// let fibonacci = stream::unfold((0_u32, 1_u32), |(current, next): &mut (u32, u32)| {
///     let element = *current;
///     (*current, *next) = (*next, *current + *next);
///     (element < 20).then_some(element)
/// });
/// assert_eq!(fibonacci.collect::<Vec<_>>(), vec![0, 1, 1, 2, 3, 5, 8, 13]);
/// ```
pub fn unfold<'a, S, T, F>(seed: S, step: F) -> LazyStream<'a, T>
where
    S: 'a,
    F: FnMut(&mut S) -> Option<T> + 'a,
{
    LazyStream::from_generator(Unfold {
        seed: ByValue::new(seed),
        step: ByValue::new(step),
    })
}

struct Unfold<S, F> {
    seed: ByValue<S>,
    step: ByValue<F>,
}

impl<S, T, F: FnMut(&mut S) -> Option<T>> Generator for Unfold<S, F> {
    type Yield = T;

    #[inline]
    fn resume(&mut self) -> Resume<T> {
        (self.step.get_mut())(self.seed.get_mut()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::StreamState;
    use rstest::rstest;

    #[rstest]
    #[case(0, 5, 1, vec![0, 1, 2, 3, 4])]
    #[case(0, 5, 2, vec![0, 2, 4])]
    #[case(3, 3, 1, vec![])]
    #[case(5, 0, 1, vec![])]
    #[case(10, 4, -3, vec![10, 7])]
    #[case(0, 5, -1, vec![])]
    fn range_step_cases(
        #[case] start: i32,
        #[case] stop: i32,
        #[case] step: i32,
        #[case] expected: Vec<i32>,
    ) {
        assert_eq!(range_step(start, stop, step).collect::<Vec<_>>(), expected);
    }

    #[rstest]
    fn zero_step_is_rejected() {
        assert_eq!(
            try_range_step(0, 10, 0).unwrap_err(),
            PreconditionError::ZeroStep
        );
    }

    #[rstest]
    #[should_panic(expected = "range_step: step must not be zero")]
    fn zero_step_panics() {
        let _ = range_step(0_u8, 1, 0);
    }

    #[rstest]
    fn range_from_is_unbounded_but_lazy() {
        let mut stream = range_from(i64::from(u32::MAX));
        assert_eq!(stream.state(), StreamState::NotStarted);
        assert_eq!(stream.nth(2), Some(i64::from(u32::MAX) + 2));
        assert_eq!(stream.state(), StreamState::Suspended);
    }

    #[rstest]
    #[case(0, 1, Some(1))]
    #[case(126, 1, Some(127))]
    #[case(127, 1, None)]
    #[case(-127, -1, Some(-128))]
    #[case(-128, -1, None)]
    fn integers_step_with_checked_addition(
        #[case] from: i8,
        #[case] step: i8,
        #[case] expected: Option<i8>,
    ) {
        assert_eq!(from.checked_step(step), expected);
    }

    #[rstest]
    fn range_step_ends_at_the_upper_bound_of_the_type() {
        let mut stream = range_step(250_u8, 255, 10);
        assert_eq!(stream.by_ref().collect::<Vec<_>>(), vec![250]);
        assert!(stream.is_finished());
    }

    #[rstest]
    fn range_step_ends_at_the_lower_bound_of_the_type() {
        let floor: Vec<i8> = range_step(i8::MIN + 1, i8::MIN, -3).collect();
        assert_eq!(floor, vec![i8::MIN + 1]);
    }

    #[rstest]
    fn range_from_finishes_after_the_largest_value() {
        let mut stream = range_from(u8::MAX - 1);
        assert_eq!(stream.by_ref().collect::<Vec<_>>(), vec![254, 255]);
        assert!(stream.is_finished());
    }

    #[rstest]
    fn unfold_finishes_when_step_returns_none() {
        let mut stream = unfold(3, |remaining: &mut i32| {
            *remaining -= 1;
            (*remaining >= 0).then_some(*remaining)
        });
        assert_eq!(stream.by_ref().collect::<Vec<_>>(), vec![2, 1, 0]);
        assert!(stream.is_finished());
    }

    #[rstest]
    fn wrap_keeps_an_existing_stream() {
        let mut inner = range_from(1_u32);
        inner.next();
        let wrapped = wrap(inner);
        assert_eq!(wrapped.produced(), 1);
    }
}
