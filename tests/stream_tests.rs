#![cfg(feature = "lazy")]
//! Unit tests for LazyStream.
//!
//! Tests cover:
//! - Lifecycle state transitions
//! - Deferred execution and one-element-at-a-time pulls
//! - Cancellation by drop, with a resource counter
//! - Move semantics and fused iteration
//! - Capture of stage parameters beyond the building scope
//! - Range sources that reach the bounds of their element type

use rstest::rstest;
use seqpipe::capture::ByValue;
use seqpipe::compose::Pipe;
use seqpipe::stages::lazy;
use seqpipe::stream::{self, Generator, LazyStream, Resume, StreamState};
use std::cell::Cell;
use std::rc::Rc;

// =============================================================================
// Resource Counter
// =============================================================================

/// A scoped resource that counts how many instances are alive.
struct Acquired {
    alive: Rc<Cell<usize>>,
}

impl Acquired {
    fn new(alive: &Rc<Cell<usize>>) -> Self {
        alive.set(alive.get() + 1);
        Self {
            alive: Rc::clone(alive),
        }
    }
}

impl Drop for Acquired {
    fn drop(&mut self) {
        self.alive.set(self.alive.get() - 1);
    }
}

/// A generator holding one resource for its whole life and one per element.
struct Holding {
    _session: Acquired,
    alive: Rc<Cell<usize>>,
    buffered: Vec<Acquired>,
}

impl Generator for Holding {
    type Yield = usize;

    fn resume(&mut self) -> Resume<usize> {
        self.buffered.push(Acquired::new(&self.alive));
        Resume::Yielded(self.buffered.len())
    }
}

fn holding(alive: &Rc<Cell<usize>>) -> LazyStream<'static, usize> {
    LazyStream::from_generator(Holding {
        _session: Acquired::new(alive),
        alive: Rc::clone(alive),
        buffered: Vec::new(),
    })
}

// =============================================================================
// Lifecycle
// =============================================================================

#[rstest]
fn stream_starts_not_started() {
    let stream = stream::range_step(0, 3, 1);
    assert_eq!(stream.state(), StreamState::NotStarted);
    assert_eq!(stream.produced(), 0);
}

#[rstest]
fn stream_moves_through_every_state() {
    let mut stream = stream::range_step(0, 2, 1);
    assert_eq!(stream.next(), Some(0));
    assert_eq!(stream.state(), StreamState::Suspended);
    assert_eq!(stream.next(), Some(1));
    assert_eq!(stream.state(), StreamState::Suspended);
    assert_eq!(stream.next(), None);
    assert_eq!(stream.state(), StreamState::Finished);
}

#[rstest]
fn empty_source_finishes_on_the_first_pull() {
    let mut stream = Vec::<i32>::new().then(lazy::wrap());
    assert_eq!(stream.state(), StreamState::NotStarted);
    assert_eq!(stream.next(), None);
    assert_eq!(stream.state(), StreamState::Finished);
}

#[rstest]
fn finished_stream_never_produces_again() {
    let mut stream = vec![1].then(lazy::wrap());
    assert_eq!(stream.by_ref().count(), 1);
    assert_eq!(stream.next(), None);
    assert_eq!(stream.by_ref().count(), 0);
}

#[rstest]
fn taken_stream_is_left_finished() {
    let mut original = vec![1, 2, 3].then(lazy::wrap());
    original.next();
    let moved = std::mem::take(&mut original);
    assert!(original.is_finished());
    assert_eq!(original.next(), None);
    assert_eq!(moved.collect::<Vec<_>>(), vec![2, 3]);
}

// =============================================================================
// Laziness
// =============================================================================

#[rstest]
fn building_a_chain_runs_no_stage() {
    let calls = Cell::new(0);
    let chain = stream::range_from(0_u32)
        .then(lazy::map(|n: u32| {
            calls.set(calls.get() + 1);
            n
        }))
        .then(lazy::filter(|n: &u32| n % 2 == 0))
        .then(lazy::chunk_by_size(3));
    assert_eq!(calls.get(), 0);
    drop(chain);
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn pulling_n_elements_evaluates_n_stage_bodies() {
    let calls = Cell::new(0);
    let mut chain = stream::range_from(1_u64).then(lazy::map(|n: u64| {
        calls.set(calls.get() + 1);
        n * n
    }));
    let first: Vec<u64> = chain.by_ref().take(5).collect();
    assert_eq!(first, vec![1, 4, 9, 16, 25]);
    assert_eq!(calls.get(), 5);
}

#[rstest]
fn filter_then_map_interleave_per_element() {
    let log = std::cell::RefCell::new(Vec::new());
    let mut chain = vec![1, 2, 3]
        .then(lazy::filter(|n: &i32| {
            log.borrow_mut().push(format!("filter {n}"));
            true
        }))
        .then(lazy::map(|n: i32| {
            log.borrow_mut().push(format!("map {n}"));
            n
        }));
    chain.next();
    chain.next();
    drop(chain);
    assert_eq!(
        log.into_inner(),
        vec!["filter 1", "map 1", "filter 2", "map 2"]
    );
}

// =============================================================================
// Cancellation
// =============================================================================

#[rstest]
fn dropping_a_partially_consumed_stream_releases_everything() {
    let alive = Rc::new(Cell::new(0));
    let mut stream = holding(&alive);
    assert_eq!(alive.get(), 1);

    assert_eq!(stream.next(), Some(1));
    assert_eq!(stream.next(), Some(2));
    assert_eq!(alive.get(), 3);

    drop(stream);
    assert_eq!(alive.get(), 0);
}

#[rstest]
fn dropping_an_unstarted_stream_releases_everything() {
    let alive = Rc::new(Cell::new(0));
    let stream = holding(&alive).then(lazy::map(|n: usize| n + 1));
    assert_eq!(alive.get(), 1);
    drop(stream);
    assert_eq!(alive.get(), 0);
}

#[rstest]
fn cancelling_a_chain_releases_the_innermost_generator() {
    let alive = Rc::new(Cell::new(0));
    let mut chain = holding(&alive)
        .then(lazy::chunk_by_size(2))
        .then(lazy::pairwise());
    assert_eq!(chain.next(), Some((vec![1, 2], vec![3, 4])));
    assert!(alive.get() > 0);
    drop(chain);
    assert_eq!(alive.get(), 0);
}

#[rstest]
fn bounded_chain_over_a_resource_releases_it_on_completion() {
    let alive = Rc::new(Cell::new(0));
    let mut bounded = holding(&alive).then(lazy::take(3));
    assert_eq!(bounded.by_ref().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert!(bounded.is_finished());
    assert_eq!(alive.get(), 0);
}

// =============================================================================
// Capture
// =============================================================================

fn multiples_of(divisor: u32) -> LazyStream<'static, u32> {
    let size = 2_usize;
    stream::range_from(1_u32)
        .then(lazy::filter(move |n: &u32| n % divisor == 0))
        .then(lazy::take(size))
}

#[rstest]
fn parameters_outlive_the_building_scope() {
    let stream = multiples_of(7);
    assert_eq!(stream.collect::<Vec<_>>(), vec![7, 14]);
}

#[rstest]
fn cloned_captures_leave_the_original_untouched() {
    let mut offsets = vec![10, 20];
    let captured = ByValue::cloned(&offsets);
    let stream = [0_usize, 1].then(lazy::Map::captured(ByValue::new(move |index: usize| {
        captured.get()[index]
    })));
    offsets.clear();
    assert_eq!(stream.collect::<Vec<_>>(), vec![10, 20]);
    assert!(offsets.is_empty());
}

// =============================================================================
// Bounds of the Element Type
// =============================================================================

#[rstest]
fn range_from_yields_up_to_the_largest_value() {
    let tail: Vec<u8> = stream::range_from(250_u8).then(lazy::take(6)).collect();
    assert_eq!(tail, vec![250, 251, 252, 253, 254, 255]);
}

#[rstest]
fn range_from_the_largest_value_finishes_after_one_element() {
    let mut source = stream::range_from(u8::MAX);
    assert_eq!(source.next(), Some(u8::MAX));
    assert_eq!(source.next(), None);
    assert_eq!(source.state(), StreamState::Finished);
}

#[rstest]
#[case(250, 255, 10, vec![250])]
#[case(253, 255, 1, vec![253, 254])]
#[case(0, 255, 128, vec![0, 128])]
fn range_step_stops_instead_of_stepping_past_u8_max(
    #[case] start: u8,
    #[case] stop: u8,
    #[case] step: u8,
    #[case] expected: Vec<u8>,
) {
    assert_eq!(stream::range_step(start, stop, step).collect::<Vec<_>>(), expected);
}

#[rstest]
fn range_step_stops_below_i32_max() {
    let mut source = stream::range_step(i32::MAX - 1, i32::MAX, 2);
    assert_eq!(source.by_ref().collect::<Vec<_>>(), vec![i32::MAX - 1]);
    assert!(source.is_finished());
}

#[rstest]
fn decreasing_range_step_stops_above_i8_min() {
    let floor: Vec<i8> = stream::range_step(i8::MIN + 1, i8::MIN, -2).collect();
    assert_eq!(floor, vec![i8::MIN + 1]);
}

#[rstest]
fn range_from_i64_max_does_not_wrap() {
    let values: Vec<i64> = stream::range_from(i64::MAX - 1).collect();
    assert_eq!(values, vec![i64::MAX - 1, i64::MAX]);
}
