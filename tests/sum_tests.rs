#![cfg(feature = "eager")]
//! Tests for eager sums and their accumulator widening.
//!
//! Narrow integers are summed in a four-byte accumulator of the same
//! signedness; every other numeric type keeps its own width.

use paste::paste;
use rstest::rstest;
use seqpipe::compose::Pipe;
use seqpipe::stages::eager::{self, Summable};
use seqpipe::stream::LazyStream;
use std::any::TypeId;

// =============================================================================
// Widening Table
// =============================================================================

fn accumulator_of<T: Summable>() -> TypeId
where
    T::Accumulator: 'static,
{
    TypeId::of::<T::Accumulator>()
}

macro_rules! accumulator_tests {
    ($($element:ident => $accumulator:ident),+ $(,)?) => {
        paste! {
            $(
                #[rstest]
                fn [<accumulator_of_ $element _is_ $accumulator>]() {
                    assert_eq!(accumulator_of::<$element>(), TypeId::of::<$accumulator>());
                    assert_eq!(accumulator_of::<&$element>(), TypeId::of::<$accumulator>());
                }

                #[rstest]
                fn [<sum_of_ $element _matches_a_manual_fold>]() {
                    let values: [$element; 4] = [1 as $element, 2 as $element, 3 as $element, 4 as $element];
                    let total: $accumulator = values.then(eager::sum());
                    assert_eq!(total, 10 as $accumulator);
                }
            )+
        }
    };
}

accumulator_tests! {
    i8 => i32,
    i16 => i32,
    i32 => i32,
    i64 => i64,
    isize => isize,
    u8 => u32,
    u16 => u32,
    u32 => u32,
    u64 => u64,
    usize => usize,
    f32 => f32,
    f64 => f64,
}

// =============================================================================
// Overflow Avoidance
// =============================================================================

#[rstest]
fn five_hundreds_of_one_byte_sum_to_five_hundred() {
    let source: [i8; 5] = [100; 5];
    assert_eq!(source.then(eager::sum()), 500);
}

#[rstest]
fn negative_one_byte_values_sum_below_their_range() {
    let source = vec![i8::MIN; 4];
    assert_eq!(source.then(eager::sum()), -512);
}

#[rstest]
fn two_byte_values_sum_above_their_range() {
    let source = LazyStream::from_cursor(std::iter::repeat_n(u16::MAX, 3));
    assert_eq!(source.then(eager::sum()), 196_605_u32);
}

#[rstest]
fn bytes_of_a_c_string_sum_without_wrapping() {
    let text = c"zzz";
    assert_eq!(text.then(eager::sum()), 3 * u32::from(b'z'));
}

// =============================================================================
// Floating Point
// =============================================================================

#[rstest]
fn single_precision_stays_single_precision() {
    let total: f32 = [0.1_f32; 10].then(eager::sum());
    let manual = (0..10).fold(0.0_f32, |total, _| total + 0.1_f32);
    assert_eq!(total.to_bits(), manual.to_bits());
}

#[rstest]
fn empty_float_sum_is_zero() {
    assert_eq!(Vec::<f32>::new().then(eager::sum()), 0.0_f32);
}
