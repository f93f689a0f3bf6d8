//! # seqpipe
//!
//! Composable sequence pipelines, evaluated eagerly or lazily, over any
//! iterable source.
//!
//! ## Overview
//!
//! A pipeline is a source followed by stages, read left to right:
//!
//! ```rust
//! use seqpipe::prelude::*;
//!
//! let chunks: Vec<Vec<i32>> = vec![1, 2, 3, 4, 5]
//!     .then(lazy::chunk_by_size(2))
//!     .collect();
//! assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
//! ```
//!
//! The crate is organised around a few pieces:
//!
//! - **Sources** ([`sequence`]): the [`Sequenceable`](sequence::Sequenceable)
//!   trait, implemented for strings, C strings, arrays, slices, the standard
//!   collections, directory listings and regex matches. Anything else cannot
//!   start a pipeline.
//! - **Lazy streams** ([`stream`]): single-pass, pull-based producers driven
//!   by explicit [`Generator`](stream::Generator) state machines.
//! - **Capture** ([`capture`]): the owned storage lazy stages keep their
//!   parameters in, so a stream never outlives what it uses.
//! - **Composition** ([`compose`]): [`Pipe::then`](compose::Pipe::then),
//!   [`pipe`](compose::pipe) and [`pipe!`].
//! - **Stages** ([`stages`]): the lazy and eager catalogs and the eager
//!   constructors.
//!
//! ## Feature Flags
//!
//! - `eager`: Eager stages and constructors (default)
//! - `lazy`: Lazy stages (default)
//! - `fs`: Directory listings as sources (default)
//! - `regex`: Regex matches as sources
//! - `full`: Enable all features
//!
//! ## Logging
//!
//! Streams and the eager materializer emit `tracing` events at the `TRACE`
//! level: stream completion and cancellation, and the capacity planned for
//! materialized containers. Install any `tracing` subscriber to see them.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the chaining traits, the stream type and the stage catalogs
/// as modules, so stages are written `lazy::map(...)` and `eager::sum()`.
///
/// # Usage
///
/// ```rust
/// use seqpipe::prelude::*;
///
/// assert_eq!([1, 2, 3].then(eager::sum()), 6);
/// ```
pub mod prelude {
    pub use crate::capture::ByValue;
    pub use crate::compose::{Pipe, Stage, pipe};
    pub use crate::sequence::{End, Sequenceable};
    pub use crate::stream::{LazyStream, StreamState};

    #[cfg(feature = "eager")]
    pub use crate::stages::{constructors, eager};

    #[cfg(feature = "lazy")]
    pub use crate::stages::lazy;
}

pub mod capture;
pub mod compose;
pub mod error;
pub mod sequence;
pub mod stages;
pub mod stream;

pub use error::PreconditionError;
