//! Bridges for ordered sequences: slices, [`Vec`], [`VecDeque`] and [`LinkedList`].
//!
//! Elements are enumerated in container order. Enums over slices, Vecs and VecDeques count and
//! fast-forward in `O(1)`.

use std::collections::{LinkedList, VecDeque, linked_list, vec_deque};
use std::iter::Rev;
use std::{slice, vec};

use crate::enumeration::{
    Backwards, Cursor, Enum, FromEnum, IndexOutOfBounds, IntoEnum, IterCursor, Positional, ToEnum,
    of_iter,
};

/// Checks that `start..start + len` lies within a collection of `size` elements, returning the end
/// of the range.
fn checked_range(start: usize, len: usize, size: usize) -> Result<usize, IndexOutOfBounds> {
    match start.checked_add(len) {
        Some(end) if end <= size => Ok(end),
        _ => Err(IndexOutOfBounds {
            index: start.saturating_add(len),
            len: size,
        }),
    }
}

impl<T> ToEnum for [T] {
    type Item<'a> = &'a T where Self: 'a;

    type Cursor<'a> = IterCursor<slice::Iter<'a, T>> where Self: 'a;

    fn to_enum(&self) -> Enum<Self::Cursor<'_>> {
        of_iter(self.iter())
    }
}

impl<T> Backwards for [T] {
    type BackCursor<'a> = IterCursor<Rev<slice::Iter<'a, T>>> where Self: 'a;

    fn backwards(&self) -> Enum<Self::BackCursor<'_>> {
        of_iter(self.iter().rev())
    }
}

impl<T> Positional for [T] {
    fn sub(&self, start: usize, len: usize) -> Result<Enum<Self::Cursor<'_>>, IndexOutOfBounds> {
        let end = checked_range(start, len, self.len())?;
        Ok(of_iter(self[start..end].iter()))
    }
}

impl<T> ToEnum for Vec<T> {
    type Item<'a> = &'a T where Self: 'a;

    type Cursor<'a> = IterCursor<slice::Iter<'a, T>> where Self: 'a;

    fn to_enum(&self) -> Enum<Self::Cursor<'_>> {
        self.as_slice().to_enum()
    }
}

impl<T> Backwards for Vec<T> {
    type BackCursor<'a> = IterCursor<Rev<slice::Iter<'a, T>>> where Self: 'a;

    fn backwards(&self) -> Enum<Self::BackCursor<'_>> {
        self.as_slice().backwards()
    }
}

impl<T> Positional for Vec<T> {
    fn sub(&self, start: usize, len: usize) -> Result<Enum<Self::Cursor<'_>>, IndexOutOfBounds> {
        self.as_slice().sub(start, len)
    }
}

impl<T> IntoEnum for Vec<T> {
    type Item = T;

    type Cursor = IterCursor<vec::IntoIter<T>>;

    fn into_enum(self) -> Enum<Self::Cursor> {
        of_iter(self)
    }
}

impl<T> FromEnum<T> for Vec<T> {
    fn of_enum<C: Cursor<Item = T>>(seq: Enum<C>) -> Self {
        let mut vec = Vec::with_capacity(seq.count().known().unwrap_or(0));
        seq.for_each(|item| vec.push(item));
        vec
    }
}

impl<T> ToEnum for VecDeque<T> {
    type Item<'a> = &'a T where Self: 'a;

    type Cursor<'a> = IterCursor<vec_deque::Iter<'a, T>> where Self: 'a;

    fn to_enum(&self) -> Enum<Self::Cursor<'_>> {
        of_iter(self.iter())
    }
}

impl<T> Backwards for VecDeque<T> {
    type BackCursor<'a> = IterCursor<Rev<vec_deque::Iter<'a, T>>> where Self: 'a;

    fn backwards(&self) -> Enum<Self::BackCursor<'_>> {
        of_iter(self.iter().rev())
    }
}

impl<T> Positional for VecDeque<T> {
    fn sub(&self, start: usize, len: usize) -> Result<Enum<Self::Cursor<'_>>, IndexOutOfBounds> {
        let end = checked_range(start, len, self.len())?;
        Ok(of_iter(self.range(start..end)))
    }
}

impl<T> IntoEnum for VecDeque<T> {
    type Item = T;

    type Cursor = IterCursor<vec_deque::IntoIter<T>>;

    fn into_enum(self) -> Enum<Self::Cursor> {
        of_iter(self)
    }
}

impl<T> FromEnum<T> for VecDeque<T> {
    fn of_enum<C: Cursor<Item = T>>(seq: Enum<C>) -> Self {
        let mut deque = VecDeque::with_capacity(seq.count().known().unwrap_or(0));
        seq.for_each(|item| deque.push_back(item));
        deque
    }
}

impl<T> ToEnum for LinkedList<T> {
    type Item<'a> = &'a T where Self: 'a;

    type Cursor<'a> = IterCursor<linked_list::Iter<'a, T>> where Self: 'a;

    fn to_enum(&self) -> Enum<Self::Cursor<'_>> {
        of_iter(self.iter())
    }
}

impl<T> Backwards for LinkedList<T> {
    type BackCursor<'a> = IterCursor<Rev<linked_list::Iter<'a, T>>> where Self: 'a;

    fn backwards(&self) -> Enum<Self::BackCursor<'_>> {
        of_iter(self.iter().rev())
    }
}

impl<T> IntoEnum for LinkedList<T> {
    type Item = T;

    type Cursor = IterCursor<linked_list::IntoIter<T>>;

    fn into_enum(self) -> Enum<Self::Cursor> {
        of_iter(self)
    }
}

impl<T> FromEnum<T> for LinkedList<T> {
    fn of_enum<C: Cursor<Item = T>>(seq: Enum<C>) -> Self {
        let mut list = LinkedList::new();
        seq.for_each(|item| list.push_back(item));
        list
    }
}
