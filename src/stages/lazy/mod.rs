//! Lazy stages.
//!
//! Every stage here turns its input into a [`LazyStream`] (a stream input is
//! consumed as is, any other sequence is wrapped) and returns a new stream
//! whose generator owns the input stream and the stage parameters. Nothing
//! is read from the input until the output is pulled, and each pull reads
//! only as much input as the stage needs.
//!
//! Stage parameters are moved into a [`ByValue`](crate::capture::ByValue).
//! Each stage also has a `captured` constructor taking an existing
//! `ByValue`, for callers that hold a parameter by reference and clone it.
//!
//! | Stage | Output element | Notes |
//! |-------|----------------|-------|
//! | [`wrap`] | `T` | identity |
//! | [`map`] | `U` | |
//! | [`mapi`] | `U` | mapping receives `(index, element)` |
//! | [`filter`] | `T` | predicate receives `&T` |
//! | [`chunk_by_size`] | `Vec<T>` | last chunk may be shorter |
//! | [`pairwise`] | `(T, T)` | `T: Clone` |
//! | [`pairwise_wrap`] | `(T, T)` | adds `(last, first)` |
//! | [`skip`] / [`take`] / [`tail`] | `T` | panic on a short source |
//! | [`append`] | `T` | |
//!
//! Closure parameters need type annotations, because a stage is built
//! before it knows which sequence it will be applied to.
//!
//! # Examples
//!
//! ```rust
//! use seqpipe::compose::Pipe;
//! use seqpipe::stages::lazy;
//! use seqpipe::stream;
//!
//! let squares_of_odds: Vec<u64> = stream::range_from(0_u64)
//!     .then(lazy::filter(|n: &u64| n % 2 == 1))
//!     .then(lazy::map(|n: u64| n * n))
//!     .then(lazy::take(4))
//!     .collect();
//! assert_eq!(squares_of_odds, vec![1, 9, 25, 49]);
//! ```
//!
//! [`LazyStream`]: crate::stream::LazyStream

mod chunk;
mod pairwise;
mod slice;
mod transform;

pub use chunk::{ChunkBySize, chunk_by_size, try_chunk_by_size};
pub use pairwise::{Pairwise, PairwiseWrap, pairwise, pairwise_wrap};
pub use slice::{Skip, Tail, Take, skip, tail, take};
pub use transform::{Append, Filter, Map, MapIndexed, Wrap, append, filter, map, mapi, wrap};
