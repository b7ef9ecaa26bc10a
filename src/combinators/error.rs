use derive_more::{Display, Error};

/// Two sequences which were required to have the same length didn't. `index` is the position at
/// which the shorter one ran out.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("sequences differ in length, the shorter one ended at element {index}")]
pub struct LengthMismatch {
    pub index: usize,
}
