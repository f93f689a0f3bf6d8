//! The squares of the even numbers below five, computed lazily.

use seqpipe::prelude::*;

fn main() {
    let squares = constructors::range_to(5)
        .then(lazy::filter(|n: &i32| n % 2 == 0))
        .then(lazy::map(|n: i32| n * n));

    for square in squares {
        print!("{square} ");
    }
    println!();
}
