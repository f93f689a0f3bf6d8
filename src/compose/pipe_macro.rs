/// Pipes a source through a series of stages from left to right.
///
/// `pipe!(source, first, second, third)` is equivalent to
/// `source.then(first).then(second).then(third)`.
///
/// Every intermediate result must itself be a
/// [`Sequenceable`](crate::sequence::Sequenceable), which holds for lazy
/// streams and for the containers eager transforms return. A stage producing
/// a scalar therefore ends the chain.
///
/// # Syntax
///
/// - `pipe!(source)` - Returns `source` unchanged
/// - `pipe!(source, stage)` - Returns `source.then(stage)`
/// - `pipe!(source, stage1, stage2, ...)` - Applies each stage in turn
///
/// # Examples
///
/// ## Lazy chain ending in a reduction
///
/// ```
/// use seqpipe::pipe;
/// use seqpipe::stages::{eager, lazy};
///
/// let total = pipe!(
///     [1, 2, 3, 4, 5],
///     lazy::map(|n: i32| n * n),
///     lazy::filter(|n: &i32| n % 2 == 1),
///     eager::sum(),
/// );
/// assert_eq!(total, 1 + 9 + 25);
/// ```
///
/// ## Mixing eager and lazy stages
///
/// ```
/// use seqpipe::pipe;
/// use seqpipe::stages::{eager, lazy};
///
/// let pairs = pipe!(
///     "hello",
///     eager::filter(|c: &char| *c != 'l'),
///     lazy::pairwise(),
///     eager::to_vector(),
/// );
/// assert_eq!(pairs, vec![('h', 'e'), ('e', 'o')]);
/// ```
#[macro_export]
macro_rules! pipe {
    // Source only: return as is
    ($source:expr) => {
        $source
    };

    // Single stage: apply it
    ($source:expr, $stage:expr $(,)?) => {
        $crate::compose::Pipe::then($source, $stage)
    };

    // Multiple stages: apply left to right recursively
    ($source:expr, $stage:expr, $($remaining_stages:expr),+ $(,)?) => {
        $crate::pipe!($crate::compose::Pipe::then($source, $stage), $($remaining_stages),+)
    };
}
