//! Terminal consumers: side effects and plain collections.

use crate::compose::Stage;
use crate::sequence::Sequenceable;

/// Runs an action on every element, built by [`iter`].
#[derive(Debug, Clone, Copy)]
pub struct Iter<F> {
    action: F,
}

/// Calls `action` with every element, in order.
///
/// # Examples
///
/// ```rust
/// use seqpipe::compose::Pipe;
/// use seqpipe::stages::eager;
///
/// let mut seen = Vec::new();
/// [3, 1, 2].then(eager::iter(|n: i32| seen.push(n)));
/// assert_eq!(seen, vec![3, 1, 2]);
/// ```
#[inline]
pub fn iter<T, F>(action: F) -> Iter<F>
where
    F: FnMut(T),
{
    Iter { action }
}

impl<'a, S, F> Stage<'a, S> for Iter<F>
where
    S: Sequenceable,
    F: FnMut(S::Item),
{
    type Output = ();

    #[inline]
    fn apply(self, sequence: S) {
        sequence.start_cursor().for_each(self.action);
    }
}

/// Runs an action on every element and its index, built by [`iteri`].
#[derive(Debug, Clone, Copy)]
pub struct IterIndexed<F> {
    action: F,
}

/// Calls `action` with the zero-based index and the value of every element.
///
/// # Examples
///
/// ```rust
/// use seqpipe::compose::Pipe;
/// use seqpipe::stages::eager;
///
/// let mut lines = Vec::new();
/// "ab".then(eager::iteri(|index: usize, c: char| lines.push(format!("{index}: {c}"))));
/// assert_eq!(lines, vec!["0: a", "1: b"]);
/// ```
#[inline]
pub fn iteri<T, F>(action: F) -> IterIndexed<F>
where
    F: FnMut(usize, T),
{
    IterIndexed { action }
}

impl<'a, S, F> Stage<'a, S> for IterIndexed<F>
where
    S: Sequenceable,
    F: FnMut(usize, S::Item),
{
    type Output = ();

    fn apply(self, sequence: S) {
        let mut action = self.action;
        for (index, element) in sequence.start_cursor().enumerate() {
            action(index, element);
        }
    }
}

/// Collects every element into a `Vec`, built by [`to_vector`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ToVector;

/// Collects every element into a `Vec`.
///
/// This ends a lazy chain.
///
/// # Examples
///
/// ```rust
/// use seqpipe::compose::Pipe;
/// use seqpipe::stages::{eager, lazy};
///
/// let doubled = [1, 2].then(lazy::map(|n: i32| n * 2)).then(eager::to_vector());
/// assert_eq!(doubled, vec![2, 4]);
/// ```
#[inline]
pub const fn to_vector() -> ToVector {
    ToVector
}

impl<'a, S: Sequenceable> Stage<'a, S> for ToVector {
    type Output = Vec<S::Item>;

    fn apply(self, sequence: S) -> Self::Output {
        let (cursor, plan) = super::materialize::plan(sequence);
        let mut elements = Vec::with_capacity(plan.capacity());
        elements.extend(cursor);
        elements
    }
}

/// Collects characters into a `String`, built by [`to_string`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ToText;

/// Collects every element, converted into a `char`, into a `String`.
///
/// # Examples
///
/// ```rust
/// use seqpipe::compose::Pipe;
/// use seqpipe::stages::{eager, lazy};
///
/// let shouted = "quiet"
///     .then(lazy::map(|c: char| c.to_ascii_uppercase()))
///     .then(eager::to_string());
/// assert_eq!(shouted, "QUIET");
///
/// let bytes = [b'o', b'k'].then(eager::to_string());
/// assert_eq!(bytes, "ok");
/// ```
#[inline]
pub const fn to_string() -> ToText {
    ToText
}

impl<'a, S> Stage<'a, S> for ToText
where
    S: Sequenceable,
    S::Item: Into<char>,
{
    type Output = String;

    fn apply(self, sequence: S) -> String {
        sequence.start_cursor().map(Into::<char>::into).collect()
    }
}
