//! Adapters for contiguous buffers: text, C strings, arrays and slices.
//!
//! Text is traversed character by character. A C string is traversed byte
//! by byte up to, and excluding, its terminating nul. Fixed-size arrays are
//! the only sources whose length is part of their type; they advertise it
//! through [`Sequenceable::STATIC_LENGTH`] and materialize into
//! fixed-capacity [`ArrayVec`]s.

use std::ffi::{CStr, CString};
use std::iter::Copied;
use std::str::Chars;

use arrayvec::ArrayVec;

use super::{End, Sequenceable};

// =============================================================================
// Text
// =============================================================================

impl<'s> Sequenceable for &'s str {
    type Item = char;
    type Cursor = Chars<'s>;
    type Materialized<U> = Vec<U>;

    #[inline]
    fn start_cursor(self) -> Self::Cursor {
        self.chars()
    }

    fn end_cursor(&self) -> End {
        End::at(self.chars().count())
    }
}

impl<'s> Sequenceable for &'s String {
    type Item = char;
    type Cursor = Chars<'s>;
    type Materialized<U> = Vec<U>;

    #[inline]
    fn start_cursor(self) -> Self::Cursor {
        self.as_str().chars()
    }

    fn end_cursor(&self) -> End {
        End::at(self.chars().count())
    }
}

impl Sequenceable for String {
    type Item = char;
    type Cursor = TextCursor;
    type Materialized<U> = Vec<U>;

    #[inline]
    fn start_cursor(self) -> Self::Cursor {
        TextCursor {
            text: self,
            position: 0,
        }
    }

    fn end_cursor(&self) -> End {
        End::at(self.chars().count())
    }
}

/// A cursor over the characters of an owned `String`.
///
/// The cursor owns the text, so a stream built from a `String` does not
/// borrow from the expression that created it.
#[derive(Debug, Clone)]
pub struct TextCursor {
    text: String,
    position: usize,
}

impl Iterator for TextCursor {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let character = self.text[self.position..].chars().next()?;
        self.position += character.len_utf8();
        Some(character)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining_bytes = self.text.len() - self.position;
        (remaining_bytes.div_ceil(4), Some(remaining_bytes))
    }
}

impl std::iter::FusedIterator for TextCursor {}

// =============================================================================
// C strings
// =============================================================================

impl<'s> Sequenceable for &'s CStr {
    type Item = u8;
    type Cursor = Copied<std::slice::Iter<'s, u8>>;
    type Materialized<U> = Vec<U>;

    #[inline]
    fn start_cursor(self) -> Self::Cursor {
        self.to_bytes().iter().copied()
    }

    #[inline]
    fn end_cursor(&self) -> End {
        End::at(self.to_bytes().len())
    }
}

impl Sequenceable for CString {
    type Item = u8;
    type Cursor = std::vec::IntoIter<u8>;
    type Materialized<U> = Vec<U>;

    #[inline]
    fn start_cursor(self) -> Self::Cursor {
        self.into_bytes().into_iter()
    }

    #[inline]
    fn end_cursor(&self) -> End {
        End::at(self.as_bytes().len())
    }
}

// =============================================================================
// Arrays and slices
// =============================================================================

impl<T, const N: usize> Sequenceable for [T; N] {
    type Item = T;
    type Cursor = std::array::IntoIter<T, N>;
    type Materialized<U> = ArrayVec<U, N>;

    const STATIC_LENGTH: Option<usize> = Some(N);

    #[inline]
    fn start_cursor(self) -> Self::Cursor {
        self.into_iter()
    }

    #[inline]
    fn end_cursor(&self) -> End {
        End::at(N)
    }
}

impl<'s, T, const N: usize> Sequenceable for &'s [T; N] {
    type Item = &'s T;
    type Cursor = std::slice::Iter<'s, T>;
    type Materialized<U> = ArrayVec<U, N>;

    const STATIC_LENGTH: Option<usize> = Some(N);

    #[inline]
    fn start_cursor(self) -> Self::Cursor {
        self.iter()
    }

    #[inline]
    fn end_cursor(&self) -> End {
        End::at(N)
    }
}

impl<'s, T> Sequenceable for &'s [T] {
    type Item = &'s T;
    type Cursor = std::slice::Iter<'s, T>;
    type Materialized<U> = Vec<U>;

    #[inline]
    fn start_cursor(self) -> Self::Cursor {
        self.iter()
    }

    #[inline]
    fn end_cursor(&self) -> End {
        End::at(self.len())
    }
}
