//! Recovers a hidden message from a block of digits.
//!
//! The message was encoded by a fixed series of steps, so decoding is the
//! same steps inverted and applied in reverse order. The whole decoder is a
//! lazy pipeline: nothing runs until `to_string` drains it.
//!
//! Run with `RUST_LOG=seqpipe=trace` to watch the stream lifecycle.

use seqpipe::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const ENCODED: &str = concat!(
    "06101806104807422602216321616921308",
    "70442480520660680410810340950880141",
    "01012032080043001127245120008067110",
);

/// Reads three decimal digits as the low byte of a signed integer.
fn to_signed_byte(chunk: Vec<char>) -> i32 {
    let value = chunk
        .iter()
        .filter_map(|digit| digit.to_digit(10))
        .fold(0_i32, |number, digit| number * 10 + digit as i32);
    (value ^ 0x80) - 0x80
}

/// Adds a pair and reads the wrapped low byte as a character.
fn to_character((first, second): (i32, i32)) -> char {
    char::from((first + second - 12).to_le_bytes()[0])
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seqpipe=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let decode = ENCODED
        .then(lazy::chunk_by_size(3))
        .then(lazy::map(to_signed_byte))
        // The first chunk is random padding.
        .then(lazy::tail())
        .then(lazy::filter(|number: &i32| number % 22 != 0))
        .then(lazy::pairwise())
        .then(lazy::map(to_character));

    tracing::info!(state = ?decode.state(), "decoder built");

    let message = decode.then(eager::to_string());
    println!("{message}");
}
