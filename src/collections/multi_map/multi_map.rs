use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{self, Debug, Display, Formatter};

use derive_more::IsVariant;

use super::Iter;
use crate::enumeration::{Cursor, Enum, FromEnum};

/// An ordered map from keys to non-empty sets of values.
///
/// A key is present exactly as long as at least one value is associated with it: removing a key's
/// last value removes the key as well.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `k`: The number of keys in the MultiMap.
/// - `v`: The number of values associated with the key in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len`, `key_count` | `O(1)` |
/// | `add` | `O(log k + log v)` |
/// | `remove` | `O(log k + log v)` |
/// | `remove_all` | `O(log k)` |
/// | `contains_key`, `get` | `O(log k)` |
/// | `contains` | `O(log k + log v)` |
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct MultiMap<K, V> {
    pub(crate) map: BTreeMap<K, BTreeSet<V>>,
    pub(crate) len: usize,
}

/// A single edit to a [`MultiMap`], see [`MultiMap::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Change<K, V> {
    Add(K, V),
    Remove(K, V),
}

impl<K, V> MultiMap<K, V> {
    pub const fn new() -> MultiMap<K, V> {
        MultiMap {
            map: BTreeMap::new(),
            len: 0,
        }
    }

    /// Returns the number of key-value pairs in the MultiMap.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of distinct keys in the MultiMap.
    pub fn key_count(&self) -> usize {
        self.map.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }
}

impl<K: Ord, V: Ord> MultiMap<K, V> {
    /// Associates `value` with `key`, returning true if the pair wasn't already present.
    pub fn add(&mut self, key: K, value: V) -> bool {
        let added = self.map.entry(key).or_default().insert(value);
        if added {
            self.len += 1;
        }
        added
    }

    /// Removes the pair of `key` and `value`, returning true if it was present. If `value` was the
    /// last value associated with `key`, the key is removed too.
    pub fn remove<Q, R>(&mut self, key: &Q, value: &R) -> bool
    where
        K: Borrow<Q>,
        V: Borrow<R>,
        Q: Ord + ?Sized,
        R: Ord + ?Sized,
    {
        let Some(values) = self.map.get_mut(key) else {
            return false;
        };
        if !values.remove(value) {
            return false;
        }

        self.len -= 1;
        if values.is_empty() {
            self.map.remove(key);
        }
        true
    }

    /// Removes `key` along with all of its values, returning the values if the key was present.
    pub fn remove_all<Q>(&mut self, key: &Q) -> Option<BTreeSet<V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let values = self.map.remove(key)?;
        self.len -= values.len();
        Some(values)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.map.contains_key(key)
    }

    pub fn contains<Q, R>(&self, key: &Q, value: &R) -> bool
    where
        K: Borrow<Q>,
        V: Borrow<R>,
        Q: Ord + ?Sized,
        R: Ord + ?Sized,
    {
        self.map.get(key).is_some_and(|values| values.contains(value))
    }

    /// Returns the values associated with `key`. The returned set is never empty.
    pub fn get<Q>(&self, key: &Q) -> Option<&BTreeSet<V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.map.get(key)
    }

    /// Applies a single [`Change`], returning true if the MultiMap was modified.
    pub fn apply(&mut self, change: Change<K, V>) -> bool {
        match change {
            Change::Add(key, value) => self.add(key, value),
            Change::Remove(key, value) => self.remove(&key, &value),
        }
    }

    /// Like `add`, but a pair equal to an existing one replaces both its key and its value.
    fn replace(&mut self, key: K, value: V) {
        let mut values = self.map.remove(&key).unwrap_or_default();
        if values.replace(value).is_none() {
            self.len += 1;
        }
        self.map.insert(key, values);
    }
}

impl<K, V> Default for MultiMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V: Ord> FromEnum<(K, V)> for MultiMap<K, V> {
    fn of_enum<C: Cursor<Item = (K, V)>>(seq: Enum<C>) -> Self {
        let mut multi_map = MultiMap::new();
        seq.for_each(|(key, value)| multi_map.replace(key, value));
        multi_map
    }
}

impl<K: Ord, V: Ord> FromEnum<Change<K, V>> for MultiMap<K, V> {
    /// Replays a sequence of edits, starting from an empty MultiMap.
    fn of_enum<C: Cursor<Item = Change<K, V>>>(seq: Enum<C>) -> Self {
        let mut multi_map = MultiMap::new();
        seq.for_each(|change| {
            multi_map.apply(change);
        });
        multi_map
    }
}

impl<K: Ord, V: Ord> FromIterator<(K, V)> for MultiMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut multi_map = MultiMap::new();
        for (key, value) in iter {
            multi_map.replace(key, value);
        }
        multi_map
    }
}

impl<K: Debug, V: Debug> Debug for MultiMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.map.iter()).finish()
    }
}

impl<K: Display, V: Display> Display for MultiMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, values)) in self.map.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: [")?;
            for (j, value) in values.iter().enumerate() {
                if j != 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{value}")?;
            }
            write!(f, "]")?;
        }
        write!(f, "}}")
    }
}
