//! Bridges for key-value maps. Maps are enumerated as `(key, value)` pairs.

use std::collections::{BTreeMap, HashMap, btree_map, hash_map};
use std::hash::{BuildHasher, Hash};
use std::iter::Rev;

use crate::enumeration::{
    Backwards, Cursor, Enum, FromEnum, IntoEnum, IterCursor, ToEnum, of_iter,
};

impl<K, V, S> ToEnum for HashMap<K, V, S> {
    type Item<'a> = (&'a K, &'a V) where Self: 'a;

    type Cursor<'a> = IterCursor<hash_map::Iter<'a, K, V>> where Self: 'a;

    fn to_enum(&self) -> Enum<Self::Cursor<'_>> {
        of_iter(self.iter())
    }
}

impl<K, V, S> IntoEnum for HashMap<K, V, S> {
    type Item = (K, V);

    type Cursor = IterCursor<hash_map::IntoIter<K, V>>;

    fn into_enum(self) -> Enum<Self::Cursor> {
        of_iter(self)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher + Default> FromEnum<(K, V)> for HashMap<K, V, S> {
    fn of_enum<C: Cursor<Item = (K, V)>>(seq: Enum<C>) -> Self {
        let mut map = HashMap::with_capacity_and_hasher(
            seq.count().known().unwrap_or(0),
            S::default(),
        );
        seq.for_each(|(key, value)| {
            // Inserting alone would keep the earlier key.
            map.remove(&key);
            map.insert(key, value);
        });
        map
    }
}

impl<K, V> ToEnum for BTreeMap<K, V> {
    type Item<'a> = (&'a K, &'a V) where Self: 'a;

    type Cursor<'a> = IterCursor<btree_map::Iter<'a, K, V>> where Self: 'a;

    fn to_enum(&self) -> Enum<Self::Cursor<'_>> {
        of_iter(self.iter())
    }
}

impl<K, V> Backwards for BTreeMap<K, V> {
    type BackCursor<'a> = IterCursor<Rev<btree_map::Iter<'a, K, V>>> where Self: 'a;

    fn backwards(&self) -> Enum<Self::BackCursor<'_>> {
        of_iter(self.iter().rev())
    }
}

impl<K, V> IntoEnum for BTreeMap<K, V> {
    type Item = (K, V);

    type Cursor = IterCursor<btree_map::IntoIter<K, V>>;

    fn into_enum(self) -> Enum<Self::Cursor> {
        of_iter(self)
    }
}

impl<K: Ord, V> FromEnum<(K, V)> for BTreeMap<K, V> {
    fn of_enum<C: Cursor<Item = (K, V)>>(seq: Enum<C>) -> Self {
        let mut map = BTreeMap::new();
        seq.for_each(|(key, value)| {
            map.remove(&key);
            map.insert(key, value);
        });
        map
    }
}
