//! Bridges for sets.

use std::collections::{BTreeSet, HashSet, btree_set, hash_set};
use std::hash::{BuildHasher, Hash};
use std::iter::Rev;

use crate::enumeration::{
    Backwards, Cursor, Enum, FromEnum, IntoEnum, IterCursor, ToEnum, of_iter,
};

impl<T, S> ToEnum for HashSet<T, S> {
    type Item<'a> = &'a T where Self: 'a;

    type Cursor<'a> = IterCursor<hash_set::Iter<'a, T>> where Self: 'a;

    fn to_enum(&self) -> Enum<Self::Cursor<'_>> {
        of_iter(self.iter())
    }
}

impl<T, S> IntoEnum for HashSet<T, S> {
    type Item = T;

    type Cursor = IterCursor<hash_set::IntoIter<T>>;

    fn into_enum(self) -> Enum<Self::Cursor> {
        of_iter(self)
    }
}

impl<T: Hash + Eq, S: BuildHasher + Default> FromEnum<T> for HashSet<T, S> {
    fn of_enum<C: Cursor<Item = T>>(seq: Enum<C>) -> Self {
        let mut set = HashSet::with_capacity_and_hasher(
            seq.count().known().unwrap_or(0),
            S::default(),
        );
        seq.for_each(|item| {
            set.replace(item);
        });
        set
    }
}

impl<T> ToEnum for BTreeSet<T> {
    type Item<'a> = &'a T where Self: 'a;

    type Cursor<'a> = IterCursor<btree_set::Iter<'a, T>> where Self: 'a;

    fn to_enum(&self) -> Enum<Self::Cursor<'_>> {
        of_iter(self.iter())
    }
}

impl<T> Backwards for BTreeSet<T> {
    type BackCursor<'a> = IterCursor<Rev<btree_set::Iter<'a, T>>> where Self: 'a;

    fn backwards(&self) -> Enum<Self::BackCursor<'_>> {
        of_iter(self.iter().rev())
    }
}

impl<T> IntoEnum for BTreeSet<T> {
    type Item = T;

    type Cursor = IterCursor<btree_set::IntoIter<T>>;

    fn into_enum(self) -> Enum<Self::Cursor> {
        of_iter(self)
    }
}

impl<T: Ord> FromEnum<T> for BTreeSet<T> {
    fn of_enum<C: Cursor<Item = T>>(seq: Enum<C>) -> Self {
        let mut set = BTreeSet::new();
        seq.for_each(|item| {
            set.replace(item);
        });
        set
    }
}
