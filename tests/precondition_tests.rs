#![cfg(all(feature = "eager", feature = "lazy"))]
//! Tests for runtime precondition violations.
//!
//! Every violation is reported as a panic naming the failed precondition,
//! or as a `PreconditionError` from the matching `try_*` entry point.
//! Running out of elements is never a violation.

use rstest::rstest;
use seqpipe::PreconditionError;
use seqpipe::prelude::*;
use seqpipe::stream;
use std::panic::{AssertUnwindSafe, catch_unwind};

fn panic_message(result: std::thread::Result<()>) -> String {
    let payload = match result {
        Ok(()) => return String::new(),
        Err(payload) => payload,
    };
    payload
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| payload.downcast_ref::<&str>().map(ToString::to_string))
        .unwrap_or_default()
}

// =============================================================================
// Sub-ranges
// =============================================================================

#[rstest]
#[case::eager_skip(|| { let _ = [1, 2, 3].then(eager::skip(4)); }, "skip: count 4 exceeds the 3 available elements")]
#[case::eager_take(|| { let _ = vec![1].then(eager::take(2)); }, "take: count 2 exceeds the 1 available elements")]
#[case::eager_tail(|| { let _ = Vec::<u8>::new().then(eager::tail()); }, "tail: count 1 exceeds the 0 available elements")]
#[case::lazy_skip(|| { let _ = vec![1, 2].then(lazy::skip(3)).count(); }, "skip: count 3 exceeds the 2 available elements")]
#[case::lazy_take(|| { let _ = "ab".then(lazy::take(5)).count(); }, "take: count 5 exceeds the 2 available elements")]
#[case::lazy_tail(|| { let _ = "".then(lazy::tail()).count(); }, "tail: count 1 exceeds the 0 available elements")]
fn short_sources_are_reported(#[case] operation: fn(), #[case] expected: &str) {
    let message = panic_message(catch_unwind(AssertUnwindSafe(operation)));
    assert_eq!(message, format!("precondition violated: {expected}"));
}

#[rstest]
fn counts_equal_to_the_length_are_accepted() {
    assert!([1, 2, 3].then(eager::skip(3)).is_empty());
    assert_eq!([1, 2, 3].then(eager::take(3)), vec![1, 2, 3]);
    assert_eq!(vec![1, 2].then(lazy::take(2)).count(), 2);
}

#[rstest]
fn try_variants_return_the_error() {
    assert_eq!(
        vec!['a'].then(eager::try_take(2)),
        Err(PreconditionError::CountExceedsLength {
            operation: "take",
            count: 2,
            length: 1,
        })
    );
    assert_eq!(
        lazy::try_chunk_by_size(0).err(),
        Some(PreconditionError::ZeroSize {
            operation: "chunk_by_size"
        })
    );
    assert_eq!(
        stream::try_range_step(1, 5, 0).err(),
        Some(PreconditionError::ZeroStep)
    );
}

// =============================================================================
// Parameters
// =============================================================================

#[rstest]
#[should_panic(expected = "precondition violated: chunk_by_size: size must be larger than zero")]
fn zero_chunk_size_panics_when_the_stage_is_built() {
    let _ = lazy::chunk_by_size(0);
}

#[rstest]
#[should_panic(expected = "range: exclusive stop 1 must be larger than inclusive start 1")]
fn empty_range_panics() {
    let _ = constructors::range(1, 1);
}

#[rstest]
#[should_panic(expected = "init: size must be larger than zero")]
fn empty_init_panics() {
    let _ = constructors::init(0, |index| index);
}

// =============================================================================
// Exhaustion
// =============================================================================

#[rstest]
fn exhaustion_is_not_an_error() {
    assert!(vec![1, 3, 5].then(eager::filter(|n: &i32| n % 2 == 0)).is_empty());
    let mut finished = vec![1].then(lazy::wrap());
    finished.next();
    assert_eq!(finished.next(), None);
    assert_eq!(finished.next(), None);
}
