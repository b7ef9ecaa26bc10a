use super::LengthMismatch;
use crate::enumeration::{Count, Cursor, Enum};

impl<C: Cursor> Enum<C> {
    /// Pairs up the elements of `self` and `other`, stopping as soon as either runs out.
    pub fn zip<D: Cursor>(self, other: Enum<D>) -> Enum<Zip<C, D>> {
        Enum::new(Zip {
            left: self,
            right: other,
        })
    }

    /// Pairs up the elements of `self` and `other`, which must have the same length.
    ///
    /// # Errors
    /// If both lengths are already known and differ, [`LengthMismatch`] is returned immediately.
    /// Otherwise the mismatch is reported by the first pull at which one side runs out before the
    /// other, as an [`Err`] element, after which the Enum is exhausted.
    pub fn combine<D: Cursor>(self, other: Enum<D>) -> Result<Enum<Combine<C, D>>, LengthMismatch> {
        if let (Count::Known(left), Count::Known(right)) = (self.count(), other.count())
            && left != right
        {
            return Err(LengthMismatch {
                index: left.min(right),
            });
        }

        Ok(Enum::new(Combine {
            left: self,
            right: other,
            index: 0,
            failed: false,
        }))
    }
}

#[derive(Debug, Clone)]
pub struct Zip<C: Cursor, D: Cursor> {
    left: Enum<C>,
    right: Enum<D>,
}

impl<C: Cursor, D: Cursor> Cursor for Zip<C, D> {
    type Item = (C::Item, D::Item);

    fn pull(&mut self) -> Option<Self::Item> {
        let left = self.left.next()?;
        let right = self.right.next()?;
        Some((left, right))
    }

    fn count(&self) -> Count {
        self.left.count().min(self.right.count())
    }

    fn fast_forward(&mut self, n: usize) -> usize {
        let skipped = self.left.fast_forward(n);
        self.right.fast_forward(skipped)
    }
}

#[derive(Debug, Clone)]
pub struct Combine<C: Cursor, D: Cursor> {
    left: Enum<C>,
    right: Enum<D>,
    index: usize,
    failed: bool,
}

impl<C: Cursor, D: Cursor> Cursor for Combine<C, D> {
    type Item = Result<(C::Item, D::Item), LengthMismatch>;

    fn pull(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        match (self.left.next(), self.right.next()) {
            (Some(left), Some(right)) => {
                self.index += 1;
                Some(Ok((left, right)))
            },
            (None, None) => None,
            _ => {
                self.failed = true;
                Some(Err(LengthMismatch {
                    index: self.index,
                }))
            },
        }
    }

    fn count(&self) -> Count {
        if self.failed {
            return Count::Known(0);
        }

        match (self.left.count(), self.right.count()) {
            (Count::Known(left), Count::Known(right)) if left == right => Count::Known(left),
            // One more element to report the mismatch.
            (Count::Known(left), Count::Known(right)) => Count::Known(left.min(right) + 1),
            _ => Count::Unknown,
        }
    }
}
