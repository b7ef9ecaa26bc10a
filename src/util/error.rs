use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// An index (or the end of a range) didn't fit within a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The offending index, for ranges the index one past their end.
    pub index: usize,
    /// The length of the collection.
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}
