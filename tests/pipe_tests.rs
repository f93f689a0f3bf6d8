#![cfg(all(feature = "eager", feature = "lazy"))]
//! Tests for pipeline composition.
//!
//! Tests cover:
//! - Equivalence of `then`, `pipe` and `pipe!`
//! - Streams passed through without re-wrapping
//! - Closures and chains as stages
//! - Eager stages ending a lazy chain

use rstest::rstest;
use seqpipe::compose::chain;
use seqpipe::pipe;
use seqpipe::prelude::*;

// =============================================================================
// Equivalent Forms
// =============================================================================

#[rstest]
fn method_function_and_macro_agree() {
    let by_method = vec![1, 2, 3, 4]
        .then(lazy::map(|n: i32| n + 1))
        .then(eager::filter(|n: &i32| n % 2 == 0));
    let by_function = seqpipe::compose::pipe(
        seqpipe::compose::pipe(vec![1, 2, 3, 4], lazy::map(|n: i32| n + 1)),
        eager::filter(|n: &i32| n % 2 == 0),
    );
    let by_macro = pipe!(
        vec![1, 2, 3, 4],
        lazy::map(|n: i32| n + 1),
        eager::filter(|n: &i32| n % 2 == 0),
    );
    assert_eq!(by_method, vec![2, 4]);
    assert_eq!(by_function, by_method);
    assert_eq!(by_macro, by_method);
}

#[rstest]
fn stage_application_is_function_application() {
    let stage = eager::map(|c: char| c.is_alphabetic());
    assert_eq!(stage.apply("a1"), "a1".then(stage));
}

// =============================================================================
// Stream Resolution
// =============================================================================

#[rstest]
fn a_stream_is_never_wrapped_twice() {
    let mut stream = vec![1, 2, 3, 4].then(lazy::wrap());
    stream.next();
    let rest = stream.then(lazy::wrap()).then(lazy::wrap());
    assert_eq!(rest.produced(), 1);
    assert_eq!(rest.state(), StreamState::Suspended);
}

#[rstest]
fn lazy_stage_wraps_containers_without_reading_them() {
    let stream = vec![1, 2].then(lazy::map(|n: i32| n * 3));
    assert_eq!(stream.state(), StreamState::NotStarted);
    assert_eq!(stream.collect::<Vec<_>>(), vec![3, 6]);
}

#[rstest]
fn eager_stage_ends_a_lazy_chain() {
    let total: u32 = "abc"
        .then(lazy::map(|c: char| u32::from(c)))
        .then(lazy::pairwise())
        .then(eager::map(|(first, second): (u32, u32)| second - first))
        .then(eager::sum());
    assert_eq!(total, 2);
}

// =============================================================================
// Closures and Chains
// =============================================================================

#[rstest]
fn closures_take_part_in_chains() {
    let largest = vec![3, 9, 4]
        .then(lazy::map(|n: i32| n * 2))
        .then(|stream: LazyStream<'_, i32>| stream.max());
    assert_eq!(largest, Some(18));
}

#[rstest]
fn chains_are_reusable_fragments() {
    let normalise = || {
        chain(
            lazy::filter(|c: &char| !c.is_whitespace()),
            chain(lazy::map(|c: char| c.to_ascii_lowercase()), eager::to_string()),
        )
    };
    assert_eq!("A b C".then(normalise()), "abc");
    assert_eq!(String::from(" X ").then(normalise()), "x");
}

#[rstest]
fn macro_accepts_a_single_stage_and_trailing_commas() {
    assert_eq!(pipe!([4, 5], eager::length(),), 2);
    assert_eq!(pipe!("text"), "text");
}
