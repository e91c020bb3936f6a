//! Single-slot look-ahead buffering.
//!
//! The slot is an explicit two-state machine: either nothing has been pulled
//! since the last consume, or exactly one pull result (which may be "parent
//! exhausted") is cached. This is what lets `has_next`/`peek` answer without
//! losing the probed element.

use std::fmt;
use std::mem;

use super::Cursor;

/// State of the look-ahead slot.
#[derive(Debug)]
enum Slot<T> {
    /// No probe has happened since the last consume.
    NotPulled,

    /// One probe result is cached; `None` records an exhausted parent.
    Pulled(Option<T>),
}

/// Cursor returned by [`Cursor::look_ahead`].
///
/// `has_next` and `peek` pull at most one element from the parent; repeated
/// calls never re-pull or advance further. Consuming with `next` resets the
/// slot.
///
/// The view is read-only: with an element buffered, forwarding `remove`
/// would target the wrong position.
pub struct LookAhead<C: Cursor> {
    parent: C,
    slot: Slot<C::Item>,
}

impl<C: Cursor> LookAhead<C> {
    pub(crate) fn new(parent: C) -> Self {
        Self {
            parent,
            slot: Slot::NotPulled,
        }
    }

    /// Pull once if nothing is cached yet.
    fn fill(&mut self) {
        if matches!(self.slot, Slot::NotPulled) {
            self.slot = Slot::Pulled(self.parent.next());
        }
    }

    /// Whether a further element is available. Idempotent: never advances
    /// past the probed element.
    pub fn has_next(&mut self) -> bool {
        self.fill();
        matches!(self.slot, Slot::Pulled(Some(_)))
    }

    /// Borrow the next element without consuming it.
    pub fn peek(&mut self) -> Option<&C::Item> {
        self.fill();
        match &self.slot {
            Slot::Pulled(cached) => cached.as_ref(),
            Slot::NotPulled => None,
        }
    }
}

impl<C: Cursor> Cursor for LookAhead<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match mem::replace(&mut self.slot, Slot::NotPulled) {
            Slot::Pulled(cached) => cached,
            Slot::NotPulled => self.parent.next(),
        }
    }
}

impl<C> fmt::Debug for LookAhead<C>
where
    C: Cursor + fmt::Debug,
    C::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LookAhead")
            .field("parent", &self.parent)
            .field("slot", &self.slot)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::super::over;
    use super::*;

    #[test]
    fn repeated_has_next_pulls_once() {
        let pulls = std::cell::Cell::new(0);
        let mut ahead = over((0..3).map(|v| {
            pulls.set(pulls.get() + 1);
            v
        }))
        .look_ahead();
        assert!(ahead.has_next());
        assert!(ahead.has_next());
        assert!(ahead.has_next());
        assert_eq!(pulls.get(), 1);
        assert_eq!(ahead.next(), Some(0));
    }

    #[test]
    fn peek_does_not_consume() {
        let mut ahead = over(vec![7, 8]).look_ahead();
        assert_eq!(ahead.peek(), Some(&7));
        assert_eq!(ahead.peek(), Some(&7));
        assert_eq!(ahead.next(), Some(7));
        assert_eq!(ahead.next(), Some(8));
        assert!(!ahead.has_next());
        assert_eq!(ahead.peek(), None);
    }
}
