//! Neighbouring pairs.

use crate::compose::Stage;
use crate::sequence::Sequenceable;
use crate::stream::{Generator, LazyStream, Resume};

/// Pairs every element with its successor, built by [`pairwise`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Pairwise;

/// Yields `(previous, current)` for every pair of neighbouring elements.
///
/// A sequence of `n > 0` elements produces `n - 1` pairs. Each element
/// except the first and the last appears in two pairs, which is why
/// elements must be `Clone`.
///
/// # Examples
///
/// ```rust
/// use seqpipe::compose::Pipe;
/// use seqpipe::stages::lazy;
///
/// let steps = [1, 2, 3, 4, 5].then(lazy::pairwise());
/// assert_eq!(steps.collect::<Vec<_>>(), vec![(1, 2), (2, 3), (3, 4), (4, 5)]);
/// ```
#[inline]
pub const fn pairwise() -> Pairwise {
    Pairwise
}

impl<'a, S> Stage<'a, S> for Pairwise
where
    S: Sequenceable + 'a,
    S::Item: Clone,
{
    type Output = LazyStream<'a, (S::Item, S::Item)>;

    fn apply(self, sequence: S) -> Self::Output {
        LazyStream::from_generator(PairwiseGenerator {
            source: sequence.into_stream(),
            phase: PairwisePhase::Priming,
        })
    }
}

enum PairwisePhase<T> {
    Priming,
    Pairing { previous: T },
    Complete,
}

struct PairwiseGenerator<'a, T> {
    source: LazyStream<'a, T>,
    phase: PairwisePhase<T>,
}

impl<T: Clone> Generator for PairwiseGenerator<'_, T> {
    type Yield = (T, T);

    fn resume(&mut self) -> Resume<(T, T)> {
        loop {
            let Some(current) = self.source.next() else {
                self.phase = PairwisePhase::Complete;
                return Resume::Complete;
            };
            match std::mem::replace(&mut self.phase, PairwisePhase::Complete) {
                PairwisePhase::Priming => {
                    self.phase = PairwisePhase::Pairing { previous: current };
                }
                PairwisePhase::Pairing { previous } => {
                    self.phase = PairwisePhase::Pairing {
                        previous: current.clone(),
                    };
                    return Resume::Yielded((previous, current));
                }
                PairwisePhase::Complete => return Resume::Complete,
            }
        }
    }
}

/// Pairs every element with its successor and the last with the first,
/// built by [`pairwise_wrap`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PairwiseWrap;

/// Yields the pairs of [`pairwise`] followed by `(last, first)`.
///
/// A sequence of `n > 1` elements produces `n` pairs. A single element
/// produces no pair at all, and two elements `a, b` produce
/// `(a, b), (b, a)`.
///
/// # Examples
///
/// ```rust
/// use seqpipe::compose::Pipe;
/// use seqpipe::stages::lazy;
///
/// let ring = [1, 2, 3].then(lazy::pairwise_wrap());
/// assert_eq!(ring.collect::<Vec<_>>(), vec![(1, 2), (2, 3), (3, 1)]);
///
/// let two = ['a', 'b'].then(lazy::pairwise_wrap());
/// assert_eq!(two.collect::<Vec<_>>(), vec![('a', 'b'), ('b', 'a')]);
/// ```
#[inline]
pub const fn pairwise_wrap() -> PairwiseWrap {
    PairwiseWrap
}

impl<'a, S> Stage<'a, S> for PairwiseWrap
where
    S: Sequenceable + 'a,
    S::Item: Clone,
{
    type Output = LazyStream<'a, (S::Item, S::Item)>;

    fn apply(self, sequence: S) -> Self::Output {
        LazyStream::from_generator(PairwiseWrapGenerator {
            source: sequence.into_stream(),
            phase: WrapPhase::Priming,
        })
    }
}

enum WrapPhase<T> {
    Priming,
    Opening { first: T },
    Pairing { first: T, previous: T },
    Complete,
}

struct PairwiseWrapGenerator<'a, T> {
    source: LazyStream<'a, T>,
    phase: WrapPhase<T>,
}

impl<T: Clone> Generator for PairwiseWrapGenerator<'_, T> {
    type Yield = (T, T);

    fn resume(&mut self) -> Resume<(T, T)> {
        loop {
            let next = match self.phase {
                WrapPhase::Complete => return Resume::Complete,
                _ => self.source.next(),
            };
            match (std::mem::replace(&mut self.phase, WrapPhase::Complete), next) {
                (WrapPhase::Priming, Some(current)) => {
                    self.phase = WrapPhase::Opening { first: current };
                }
                (WrapPhase::Opening { first }, Some(current)) => {
                    let pair = (first.clone(), current.clone());
                    self.phase = WrapPhase::Pairing {
                        first,
                        previous: current,
                    };
                    return Resume::Yielded(pair);
                }
                (WrapPhase::Pairing { first, previous }, Some(current)) => {
                    self.phase = WrapPhase::Pairing {
                        first,
                        previous: current.clone(),
                    };
                    return Resume::Yielded((previous, current));
                }
                (WrapPhase::Pairing { first, previous }, None) => {
                    return Resume::Yielded((previous, first));
                }
                (WrapPhase::Priming | WrapPhase::Opening { .. } | WrapPhase::Complete, _) => {
                    return Resume::Complete;
                }
            }
        }
    }
}
