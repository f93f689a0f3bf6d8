//! Fixed-size chunking.

use crate::capture::ByValue;
use crate::compose::Stage;
use crate::error::{OrRaise, PreconditionError};
use crate::sequence::Sequenceable;
use crate::stream::{Generator, LazyStream, Resume};

/// Groups consecutive elements into chunks, built by [`chunk_by_size`].
#[derive(Debug, Clone, Copy)]
pub struct ChunkBySize {
    size: ByValue<usize>,
}

impl ChunkBySize {
    /// Builds the stage from an already captured chunk size.
    ///
    /// # Errors
    ///
    /// Returns [`PreconditionError::ZeroSize`] when the size is zero.
    pub fn captured(size: ByValue<usize>) -> Result<Self, PreconditionError> {
        if *size.get() == 0 {
            return Err(PreconditionError::ZeroSize {
                operation: "chunk_by_size",
            });
        }
        Ok(Self { size })
    }
}

/// Groups consecutive elements into chunks of `size` elements.
///
/// Every chunk holds exactly `size` elements except the last one, which
/// holds whatever remains. Concatenating the chunks gives back the input.
///
/// # Panics
///
/// Panics when `size` is zero.
///
/// # Examples
///
/// ```rust
/// use seqpipe::compose::Pipe;
/// use seqpipe::stages::lazy;
///
/// let chunks = [1, 2, 3, 4, 5].then(lazy::chunk_by_size(2));
/// assert_eq!(chunks.collect::<Vec<_>>(), vec![vec![1, 2], vec![3, 4], vec![5]]);
/// ```
#[track_caller]
pub fn chunk_by_size(size: usize) -> ChunkBySize {
    try_chunk_by_size(size).or_raise()
}

/// Fallible form of [`chunk_by_size`].
///
/// # Errors
///
/// Returns [`PreconditionError::ZeroSize`] when `size` is zero.
pub fn try_chunk_by_size(size: usize) -> Result<ChunkBySize, PreconditionError> {
    ChunkBySize::captured(ByValue::new(size))
}

impl<'a, S: Sequenceable + 'a> Stage<'a, S> for ChunkBySize {
    type Output = LazyStream<'a, Vec<S::Item>>;

    fn apply(self, sequence: S) -> Self::Output {
        LazyStream::from_generator(ChunkGenerator {
            source: sequence.into_stream(),
            size: self.size,
            buffer: Vec::new(),
            phase: ChunkPhase::Filling,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChunkPhase {
    Filling,
    Complete,
}

struct ChunkGenerator<'a, T> {
    source: LazyStream<'a, T>,
    size: ByValue<usize>,
    buffer: Vec<T>,
    phase: ChunkPhase,
}

impl<T> Generator for ChunkGenerator<'_, T> {
    type Yield = Vec<T>;

    fn resume(&mut self) -> Resume<Vec<T>> {
        if self.phase == ChunkPhase::Complete {
            return Resume::Complete;
        }
        let size = *self.size.get();
        while let Some(element) = self.source.next() {
            self.buffer.push(element);
            if self.buffer.len() == size {
                return Resume::Yielded(std::mem::take(&mut self.buffer));
            }
        }
        self.phase = ChunkPhase::Complete;
        if self.buffer.is_empty() {
            Resume::Complete
        } else {
            Resume::Yielded(std::mem::take(&mut self.buffer))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::Pipe;
    use rstest::rstest;

    #[rstest]
    #[case(vec![], 3, vec![])]
    #[case(vec![1], 3, vec![vec![1]])]
    #[case(vec![1, 2, 3], 3, vec![vec![1, 2, 3]])]
    #[case(vec![1, 2, 3, 4], 1, vec![vec![1], vec![2], vec![3], vec![4]])]
    #[case(vec![1, 2, 3, 4, 5, 6, 7], 3, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]])]
    fn chunk_cases(
        #[case] source: Vec<i32>,
        #[case] size: usize,
        #[case] expected: Vec<Vec<i32>>,
    ) {
        assert_eq!(source.then(chunk_by_size(size)).collect::<Vec<_>>(), expected);
    }

    #[rstest]
    fn zero_size_is_rejected() {
        assert_eq!(
            try_chunk_by_size(0).unwrap_err(),
            PreconditionError::ZeroSize {
                operation: "chunk_by_size"
            }
        );
    }

    #[rstest]
    #[should_panic(expected = "chunk_by_size: size must be larger than zero")]
    fn zero_size_panics() {
        let _ = chunk_by_size(0);
    }

    #[rstest]
    fn chunks_of_an_unbounded_stream_are_produced_on_demand() {
        let mut chunks = crate::stream::range_from(0_u8).then(chunk_by_size(2));
        assert_eq!(chunks.next(), Some(vec![0, 1]));
        assert_eq!(chunks.next(), Some(vec![2, 3]));
    }
}
