use std::collections::VecDeque;

use crate::enumeration::{Count, Cursor, Enum};

impl<C: Cursor> Enum<C> {
    /// Produces every run of `size` consecutive elements, as an owned [`Vec`], sliding forward by
    /// one element at a time. An Enum with fewer than `size` elements produces no windows.
    ///
    /// # Panics
    /// Panics if `size` is 0.
    pub fn windows(self, size: usize) -> Enum<Windows<C>>
    where
        C::Item: Clone,
    {
        assert!(size != 0, "Window size must be greater than 0!");

        Enum::new(Windows {
            inner: self,
            window: VecDeque::new(),
            size,
        })
    }
}

pub struct Windows<C: Cursor> {
    inner: Enum<C>,
    window: VecDeque<C::Item>,
    size: usize,
}

impl<C: Cursor> Cursor for Windows<C>
where
    C::Item: Clone,
{
    type Item = Vec<C::Item>;

    fn pull(&mut self) -> Option<Vec<C::Item>> {
        if self.window.len() == self.size {
            self.window.pop_front();
        }
        while self.window.len() < self.size {
            self.window.push_back(self.inner.next()?);
        }
        Some(self.window.iter().cloned().collect())
    }

    fn count(&self) -> Count {
        // A full window is about to lose its front element, so each remaining element completes
        // exactly one window. Otherwise the window still has to be filled first.
        let buffered = match self.window.len() {
            len if len == self.size => self.size - 1,
            len => len,
        };
        self.inner.count().map(|left| left.saturating_add(buffered + 1).saturating_sub(self.size))
    }
}

impl<C: Cursor + Clone> Clone for Windows<C>
where
    C::Item: Clone,
{
    fn clone(&self) -> Self {
        Windows {
            inner: self.inner.clone(),
            window: self.window.clone(),
            size: self.size,
        }
    }
}
