//! Adapters for sources that are already cursors.
//!
//! An enumerator is its own start cursor and only finds its end by being
//! advanced, so these adapters are the identity on the cursor side and
//! report an unbounded [`End`] unless the iterator knows its exact length.

#[cfg(feature = "fs")]
use std::fs::ReadDir;

use super::{End, Sequenceable};

/// Lifts any iterator into a sequence.
///
/// Iterators are not sequences on their own, which keeps every other
/// adapter unambiguous. Wrapping one in `Enumerator` opts it in.
///
/// # Examples
///
/// ```rust
/// use seqpipe::compose::Pipe;
/// use seqpipe::sequence::Enumerator;
/// use seqpipe::stages::eager;
///
/// let words = Enumerator::new("a bb ccc".split(' '));
/// let lengths = words.then(eager::map(str::len));
/// assert_eq!(lengths, vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct Enumerator<I> {
    cursor: I,
}

impl<I: Iterator> Enumerator<I> {
    /// Wraps an iterator positioned at its first element.
    #[inline]
    pub const fn new(cursor: I) -> Self {
        Self { cursor }
    }

    /// Returns the wrapped iterator.
    #[inline]
    pub fn into_inner(self) -> I {
        self.cursor
    }
}

impl<I: Iterator> From<I> for Enumerator<I> {
    fn from(cursor: I) -> Self {
        Self::new(cursor)
    }
}

impl<I: Iterator> Sequenceable for Enumerator<I> {
    type Item = I::Item;
    type Cursor = I;
    type Materialized<U> = Vec<U>;

    #[inline]
    fn start_cursor(self) -> Self::Cursor {
        self.cursor
    }

    fn end_cursor(&self) -> End {
        match self.cursor.size_hint() {
            (lower, Some(upper)) if lower == upper => End::at(lower),
            _ => End::unbounded(),
        }
    }
}

#[cfg(feature = "fs")]
impl Sequenceable for ReadDir {
    type Item = std::io::Result<std::fs::DirEntry>;
    type Cursor = Self;
    type Materialized<U> = Vec<U>;

    #[inline]
    fn start_cursor(self) -> Self::Cursor {
        self
    }

    #[inline]
    fn end_cursor(&self) -> End {
        End::unbounded()
    }
}

/// The matches of a regular expression over an owned piece of text.
///
/// The range owns both its content and its compiled pattern. Borrowing it
/// yields every non-overlapping [`regex::Match`] from left to right.
///
/// # Examples
///
/// ```rust
/// use seqpipe::compose::Pipe;
/// use seqpipe::sequence::RegexMatchRange;
/// use seqpipe::stages::eager;
///
/// let range = RegexMatchRange::new("a1 b22 c333", r"\d+").unwrap();
/// let digits = (&range).then(eager::map(|found: regex::Match<'_>| found.as_str().len()));
/// assert_eq!(digits, vec![1, 2, 3]);
/// ```
#[cfg(feature = "regex")]
#[derive(Debug, Clone)]
pub struct RegexMatchRange {
    content: String,
    pattern: regex::Regex,
}

#[cfg(feature = "regex")]
impl RegexMatchRange {
    /// Compiles `pattern` and pairs it with `content`.
    ///
    /// # Errors
    ///
    /// Returns the compilation error when `pattern` is not a valid regular
    /// expression.
    pub fn new(content: impl Into<String>, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::from_regex(content, regex::Regex::new(pattern)?))
    }

    /// Pairs an already compiled pattern with `content`.
    pub fn from_regex(content: impl Into<String>, pattern: regex::Regex) -> Self {
        Self {
            content: content.into(),
            pattern,
        }
    }

    /// The text the pattern is matched against.
    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(feature = "regex")]
impl<'s> Sequenceable for &'s RegexMatchRange {
    type Item = regex::Match<'s>;
    type Cursor = regex::Matches<'s, 's>;
    type Materialized<U> = Vec<U>;

    #[inline]
    fn start_cursor(self) -> Self::Cursor {
        self.pattern.find_iter(&self.content)
    }

    #[inline]
    fn end_cursor(&self) -> End {
        End::unbounded()
    }
}
