//! Bridges for text. Strings are enumerated as [`char`]s, and can be built from chars or from
//! other strings.

use std::iter::Rev;
use std::str::Chars;

use crate::enumeration::{
    Backwards, Count, Cursor, Enum, FromEnum, IntoEnum, IterCursor, ToEnum, of_iter,
};

impl ToEnum for str {
    type Item<'a> = char;

    type Cursor<'a> = IterCursor<Chars<'a>>;

    fn to_enum(&self) -> Enum<Self::Cursor<'_>> {
        of_iter(self.chars())
    }
}

impl Backwards for str {
    type BackCursor<'a> = IterCursor<Rev<Chars<'a>>>;

    fn backwards(&self) -> Enum<Self::BackCursor<'_>> {
        of_iter(self.chars().rev())
    }
}

impl ToEnum for String {
    type Item<'a> = char;

    type Cursor<'a> = IterCursor<Chars<'a>>;

    fn to_enum(&self) -> Enum<Self::Cursor<'_>> {
        self.as_str().to_enum()
    }
}

impl Backwards for String {
    type BackCursor<'a> = IterCursor<Rev<Chars<'a>>>;

    fn backwards(&self) -> Enum<Self::BackCursor<'_>> {
        self.as_str().backwards()
    }
}

impl IntoEnum for String {
    type Item = char;

    type Cursor = IntoChars;

    fn into_enum(self) -> Enum<IntoChars> {
        Enum::new(IntoChars {
            string: self,
            position: 0,
        })
    }
}

/// An owning [`Cursor`] over the chars of a [`String`], see [`IntoEnum`].
#[derive(Debug, Clone)]
pub struct IntoChars {
    string: String,
    /// Byte offset of the next char, always on a char boundary.
    position: usize,
}

impl Cursor for IntoChars {
    type Item = char;

    fn pull(&mut self) -> Option<char> {
        let next = self.string[self.position..].chars().next()?;
        self.position += next.len_utf8();
        Some(next)
    }

    fn count(&self) -> Count {
        if self.position == self.string.len() {
            Count::Known(0)
        } else {
            Count::Unknown
        }
    }
}

impl FromEnum<char> for String {
    fn of_enum<C: Cursor<Item = char>>(seq: Enum<C>) -> Self {
        let mut string = String::with_capacity(seq.count().known().unwrap_or(0));
        seq.for_each(|c| string.push(c));
        string
    }
}

impl<'a> FromEnum<&'a str> for String {
    fn of_enum<C: Cursor<Item = &'a str>>(seq: Enum<C>) -> Self {
        seq.fold(String::new(), |mut string, part| {
            string.push_str(part);
            string
        })
    }
}

impl FromEnum<String> for String {
    fn of_enum<C: Cursor<Item = String>>(seq: Enum<C>) -> Self {
        seq.fold(String::new(), |mut string, part| {
            string.push_str(&part);
            string
        })
    }
}
