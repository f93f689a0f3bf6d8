//! The driver shared by element-preserving eager stages.

use crate::sequence::{Materialized, Sequenceable};

/// How much room a materialized container is given up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CapacityPlan {
    /// The length is part of the source type; the container is fixed.
    Static(usize),
    /// The end offset of the source is known before traversal.
    Known(usize),
    /// The source only discovers its end by traversal; the cursor's lower
    /// size hint is reserved and the container grows as needed.
    Estimated(usize),
}

impl CapacityPlan {
    /// The source length, when it is known before traversal.
    #[inline]
    pub(crate) const fn length(self) -> Option<usize> {
        match self {
            Self::Static(length) | Self::Known(length) => Some(length),
            Self::Estimated(_) => None,
        }
    }

    /// The number of elements to reserve.
    #[inline]
    pub(crate) const fn capacity(self) -> usize {
        match self {
            Self::Static(capacity) | Self::Known(capacity) | Self::Estimated(capacity) => capacity,
        }
    }
}

/// Splits a source into its cursor and the capacity its output should get.
pub(crate) fn plan<S: Sequenceable>(sequence: S) -> (S::Cursor, CapacityPlan) {
    let end = sequence.end_cursor();
    let cursor = sequence.start_cursor();
    let plan = match (S::STATIC_LENGTH, end.offset()) {
        (Some(length), _) => CapacityPlan::Static(length),
        (None, Some(length)) => CapacityPlan::Known(length),
        (None, None) => CapacityPlan::Estimated(cursor.size_hint().0),
    };
    tracing::trace!(?plan, "planned materialized capacity");
    (cursor, plan)
}

/// Drains `sequence`, mapping every element into the source's
/// [`Materialized`] container.
///
/// Arrays produce a fixed-capacity [`ArrayVec`](arrayvec::ArrayVec) of the
/// same length; every other source produces a `Vec` reserved to the source
/// length, or to the cursor's lower size hint when the length is unknown.
///
/// # Examples
///
/// ```rust
/// use arrayvec::ArrayVec;
/// use seqpipe::stages::eager::materialize;
///
/// let fixed: ArrayVec<i32, 3> = materialize([1, 2, 3], |n| n * 2);
/// assert_eq!(fixed.as_slice(), &[2, 4, 6]);
///
/// let growable: Vec<usize> = materialize(vec!["a", "bb"], str::len);
/// assert_eq!(growable, vec![1, 2]);
/// ```
pub fn materialize<S, U, F>(sequence: S, mapping: F) -> S::Materialized<U>
where
    S: Sequenceable,
    F: FnMut(S::Item) -> U,
{
    let (cursor, plan) = plan(sequence);
    let mut output = <S::Materialized<U> as Materialized<U>>::with_capacity(plan.capacity());
    for element in cursor.map(mapping) {
        output.push(element);
    }
    output
}
