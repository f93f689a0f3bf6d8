//! Eager stages.
//!
//! An eager stage drains its source as soon as it is applied. What it
//! returns depends on the kind of stage:
//!
//! - Element-preserving transforms ([`map`], [`mapi`], [`skip_static`])
//!   return the source's [`Materialized`](crate::sequence::Materialized)
//!   container: a fixed-capacity `ArrayVec` for arrays, a `Vec` otherwise.
//! - Transforms whose output length is only known afterwards ([`filter`],
//!   [`pairwise`], [`append`], [`skip`], [`take`], [`tail`]) return a `Vec`.
//! - Reductions ([`sum`], [`reduce`], [`forall`], [`exists`], [`length`],
//!   [`is_empty`]) return a scalar.
//! - Consumers ([`iter`], [`iteri`]) return `()`, collectors ([`to_vector`],
//!   [`to_string`]) a `Vec` or a `String`.
//!
//! Containers are reserved up front: to the static length of an array, to
//! the end offset of a sized container, or to the lower size hint of a
//! stream.
//!
//! # Examples
//!
//! ```rust
//! use seqpipe::compose::Pipe;
//! use seqpipe::stages::eager;
//!
//! let readings: [u8; 4] = [200, 180, 220, 250];
//! let total = readings.then(eager::sum());
//! assert_eq!(total, 850_u32);
//!
//! let high = readings.then(eager::filter(|r: &u8| *r > 190));
//! assert_eq!(high, vec![200, 220, 250]);
//! ```

mod collect;
mod materialize;
mod reduce;
mod slice;
mod transform;

pub use collect::{Iter, IterIndexed, ToText, ToVector, iter, iteri, to_string, to_vector};
pub use materialize::materialize;
pub use reduce::{
    Exists, ForAll, IsEmpty, Length, Reduce, Sum, Summable, exists, forall, is_empty, length,
    reduce, sum,
};
pub use slice::{
    Skip, SkipStatic, Tail, Take, TakeStatic, TrySkip, TryTake, skip, skip_static, tail, take,
    take_static, try_skip, try_take,
};
pub use transform::{
    Append, Filter, Map, MapIndexed, Pairwise, PairwiseWrap, append, filter, map, mapi, pairwise,
    pairwise_wrap,
};
