use std::cell::RefCell;
use std::fmt::{self, Debug, Formatter};
use std::mem;
use std::rc::Rc;

use crate::enumeration::{Count, Cursor, Enum};

impl<C: Cursor> Enum<C> {
    /// Makes any Enum cloneable, including ones over single-pass sources such as generators or
    /// channels.
    ///
    /// All clones of the result share a lazily built buffer: each element is pulled from `self`
    /// exactly once, the first time any clone reaches it, and handed out to every clone as a
    /// clone of the buffered element. Buffered elements are released as soon as every clone has
    /// moved past them, so the buffer only ever spans the distance between the slowest and the
    /// fastest clone.
    ///
    /// The buffer is reference-counted without synchronization, so memoized Enums stay on one
    /// thread.
    pub fn memo(self) -> Enum<Memo<C>>
    where
        C::Item: Clone,
    {
        Enum::new(Memo {
            source: Rc::new(RefCell::new(self)),
            position: Link::unforced(),
        })
    }
}

/// A slot of the shared buffer. Slots are forced (filled from the source) at most once.
enum Slot<T> {
    Unforced,
    Forced(Option<(T, Link<T>)>),
}

struct Link<T>(Rc<RefCell<Slot<T>>>);

impl<T> Link<T> {
    fn unforced() -> Link<T> {
        Link(Rc::new(RefCell::new(Slot::Unforced)))
    }
}

impl<T> Clone for Link<T> {
    fn clone(&self) -> Self {
        Link(Rc::clone(&self.0))
    }
}

pub struct Memo<C: Cursor> {
    source: Rc<RefCell<Enum<C>>>,
    position: Link<C::Item>,
}

impl<C: Cursor> Cursor for Memo<C>
where
    C::Item: Clone,
{
    type Item = C::Item;

    fn pull(&mut self) -> Option<C::Item> {
        let (item, next) = {
            let mut cell = self.position.0.borrow_mut();
            if let Slot::Unforced = *cell {
                let pulled = self.source.borrow_mut().next();
                *cell = Slot::Forced(pulled.map(|item| (item, Link::unforced())));
            }

            let Slot::Forced(Some((item, next))) = &*cell else {
                return None;
            };
            (item.clone(), next.clone())
        };

        self.position = next;
        Some(item)
    }

    fn count(&self) -> Count {
        let mut buffered = 0;
        let mut link = self.position.clone();
        loop {
            let next = match &*link.0.borrow() {
                Slot::Unforced => break,
                Slot::Forced(None) => return Count::Known(buffered),
                Slot::Forced(Some((_, next))) => next.clone(),
            };
            buffered += 1;
            link = next;
        }

        self.source.borrow().count().map(|left| left + buffered)
    }
}

impl<C: Cursor> Clone for Memo<C> {
    fn clone(&self) -> Self {
        Memo {
            source: Rc::clone(&self.source),
            position: self.position.clone(),
        }
    }
}

impl<C: Cursor> Drop for Memo<C> {
    fn drop(&mut self) {
        // Release the slots nobody else points to one at a time, rather than recursively through
        // the chain of Rcs.
        let mut link = Some(mem::replace(&mut self.position, Link::unforced()).0);
        while let Some(current) = link.take() {
            if let Ok(cell) = Rc::try_unwrap(current)
                && let Slot::Forced(Some((_, next))) = cell.into_inner()
            {
                link = Some(next.0);
            }
        }
    }
}

impl<C: Cursor> Debug for Memo<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memo")
            .field("clones", &Rc::strong_count(&self.source))
            .finish_non_exhaustive()
    }
}
