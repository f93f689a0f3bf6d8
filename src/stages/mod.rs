//! The stage catalogs.
//!
//! - [`lazy`]: stages producing a [`LazyStream`](crate::stream::LazyStream).
//!   Their parameters are captured by value and nothing runs until the
//!   stream is pulled.
//! - [`eager`]: stages draining their source right away into a container,
//!   a scalar or a side effect.
//! - [`constructors`]: eager sources (ranges, generated arrays).
//!
//! Both catalogs use the same names for the same transformations, so a
//! pipeline switches between lazy and eager evaluation by changing the
//! module a stage comes from.

#[cfg(feature = "eager")]
pub mod constructors;
#[cfg(feature = "eager")]
pub mod eager;
#[cfg(feature = "lazy")]
pub mod lazy;
