use std::collections::{btree_map, btree_set, BTreeSet};
use std::iter::{FusedIterator, Rev};

use super::MultiMap;
use crate::enumeration::{Backwards, Enum, IntoEnum, IterCursor, ToEnum, of_iter};

impl<'a, K, V> IntoIterator for &'a MultiMap<K, V> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            outer: self.map.iter(),
            front: None,
            back: None,
            len: self.len,
        }
    }
}

/// A borrowed iterator over the key-value pairs of a [`MultiMap`], ordered by key and then by
/// value.
pub struct Iter<'a, K, V> {
    pub(crate) outer: btree_map::Iter<'a, K, BTreeSet<V>>,
    pub(crate) front: Option<(&'a K, btree_set::Iter<'a, V>)>,
    pub(crate) back: Option<(&'a K, btree_set::Iter<'a, V>)>,
    pub(crate) len: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((key, values)) = &mut self.front
                && let Some(value) = values.next()
            {
                self.len -= 1;
                return Some((*key, value));
            }

            match self.outer.next() {
                Some((key, values)) => self.front = Some((key, values.iter())),
                None => {
                    // The back iterator might still hold values of the last key.
                    let (key, values) = self.back.as_mut()?;
                    let value = values.next()?;
                    self.len -= 1;
                    return Some((*key, value));
                },
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((key, values)) = &mut self.back
                && let Some(value) = values.next_back()
            {
                self.len -= 1;
                return Some((*key, value));
            }

            match self.outer.next_back() {
                Some((key, values)) => self.back = Some((key, values.iter())),
                None => {
                    let (key, values) = self.front.as_mut()?;
                    let value = values.next_back()?;
                    self.len -= 1;
                    return Some((*key, value));
                },
            }
        }
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            outer: self.outer.clone(),
            front: self.front.clone(),
            back: self.back.clone(),
            len: self.len,
        }
    }
}

impl<K: Clone, V> IntoIterator for MultiMap<K, V> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            outer: self.map.into_iter(),
            current: None,
            len: self.len,
        }
    }
}

/// An owned iterator over the key-value pairs of a [`MultiMap`]. Keys are cloned once for each of
/// their values except the last.
pub struct IntoIter<K, V> {
    pub(crate) outer: btree_map::IntoIter<K, BTreeSet<V>>,
    pub(crate) current: Option<(K, btree_set::IntoIter<V>)>,
    pub(crate) len: usize,
}

impl<K: Clone, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((key, values)) = &mut self.current
                && let Some(value) = values.next()
            {
                self.len -= 1;
                if values.len() != 0 {
                    return Some((key.clone(), value));
                }
                // Last value for this key, so the key can be moved out.
                return self.current.take().map(|(key, _)| (key, value));
            }

            let (key, values) = self.outer.next()?;
            self.current = Some((key, values.into_iter()));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K: Clone, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K: Clone, V> FusedIterator for IntoIter<K, V> {}

impl<K, V> ToEnum for MultiMap<K, V> {
    type Item<'a> = (&'a K, &'a V) where Self: 'a;

    type Cursor<'a> = IterCursor<Iter<'a, K, V>> where Self: 'a;

    fn to_enum(&self) -> Enum<Self::Cursor<'_>> {
        of_iter(self)
    }
}

impl<K, V> Backwards for MultiMap<K, V> {
    type BackCursor<'a> = IterCursor<Rev<Iter<'a, K, V>>> where Self: 'a;

    fn backwards(&self) -> Enum<Self::BackCursor<'_>> {
        of_iter(self.iter().rev())
    }
}

impl<K: Clone, V> IntoEnum for MultiMap<K, V> {
    type Item = (K, V);

    type Cursor = IterCursor<IntoIter<K, V>>;

    fn into_enum(self) -> Enum<Self::Cursor> {
        of_iter(self)
    }
}
