//! A module containing [`MultiMap`] and associated types.
//!
//! A MultiMap associates each key with a set of distinct values. Keys and values are both kept in
//! order, so every traversal visits keys in ascending order and each key's values in ascending
//! order.
//!
//! [`MultiMap`] is also re-exported under the parent module.

mod iter;
mod multi_map;

pub use iter::*;
pub use multi_map::*;
