//! Bidirectional cursor contract and direction-preserving operations.
//!
//! A [`ListCursor`] sits *between* elements: `next` consumes forward,
//! `previous` consumes backward, and the position indices obey
//! `next_index == previous_index + 1` whenever both are defined. Derived
//! operations here preserve both directions; the forward-only combinators
//! inherited from [`Cursor`] remain available but discard the backward
//! capability.

mod adapters;
mod sources;

pub use adapters::{
    ListExtract, ListFilter, ListFlatten, ListGroup, ListMap, ListSkip, ListTake,
    ListUnmodifiable,
};
pub use sources::{SliceListCursor, VecListCursor};

use crate::cursor::Cursor;
use crate::{Direction, TraverseError};

/// A cursor supporting traversal in both directions with position indices.
pub trait ListCursor: Cursor {
    /// Step backward past the previous element and return it, or `None`
    /// at the start of the sequence.
    fn previous(&mut self) -> Option<Self::Item>;

    /// Index of the element a call to [`next`](Cursor::next) would return;
    /// equals the sequence length when the cursor is at the end.
    fn next_index(&self) -> usize;

    /// Index of the element a call to [`previous`](ListCursor::previous)
    /// would return, or `None` at the start.
    fn previous_index(&self) -> Option<usize> {
        self.next_index().checked_sub(1)
    }

    /// Whether a forward step would produce an element.
    ///
    /// The default probes with [`next`](Cursor::next) and restores with
    /// [`previous`](ListCursor::previous); implementations that know their
    /// position answer directly.
    fn has_next(&mut self) -> bool {
        if self.next().is_some() {
            self.previous();
            true
        } else {
            false
        }
    }

    /// Whether a backward step would produce an element.
    fn has_previous(&mut self) -> bool {
        if self.previous().is_some() {
            self.next();
            true
        } else {
            false
        }
    }

    /// Like [`previous`](ListCursor::previous), but exhaustion is reported
    /// as an error.
    fn try_previous(&mut self) -> Result<Self::Item, TraverseError> {
        self.previous()
            .ok_or(TraverseError::Exhausted(Direction::Backward))
    }

    /// Replace the element most recently returned by `next` or `previous`.
    ///
    /// Rejected by every transforming view.
    fn set(&mut self, _value: Self::Item) -> Result<(), TraverseError> {
        Err(TraverseError::unsupported("set", "read-only"))
    }

    /// Insert an element at the cursor position, before the implicit next
    /// element.
    ///
    /// Rejected by every transforming view.
    fn insert(&mut self, _value: Self::Item) -> Result<(), TraverseError> {
        Err(TraverseError::unsupported("insert", "read-only"))
    }

    /// Keep only elements accepted by `predicate`, preserving both
    /// directions.
    ///
    /// Probing is un-buffered: the cursor itself doubles as the probe
    /// position, so reported indices are the underlying cursor's.
    fn filter_list<P>(self, predicate: P) -> ListFilter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        ListFilter::new(self, predicate)
    }

    /// Filter and transform in one step, preserving both directions.
    fn extract_list<B, F>(self, extractor: F) -> ListExtract<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Option<B>,
    {
        ListExtract::new(self, extractor)
    }

    /// Transform each element, preserving both directions.
    fn map_list<B, F>(self, f: F) -> ListMap<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> B,
    {
        ListMap::new(self, f)
    }

    /// A `[0, count)` window anchored at the current position, traversable
    /// in both directions with view-local indices.
    fn take_list(self, count: usize) -> ListTake<Self>
    where
        Self: Sized,
    {
        ListTake::new(self, count)
    }

    /// Discard the first `min(count, available)` elements, lazily on first
    /// access; indices behave as if the discard had already happened.
    fn skip_list(self, count: usize) -> ListSkip<Self>
    where
        Self: Sized,
    {
        ListSkip::new(self, count)
    }

    /// Fixed-size batches in either direction.
    ///
    /// Before producing a batch the underlying cursor is realigned to the
    /// multiple-of-`size` boundary of the batch containing it, so
    /// `next_index() / size` always addresses that batch.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    fn group_list<B, F>(self, size: usize, factory: F) -> ListGroup<Self, F>
    where
        Self: Sized,
        B: Extend<Self::Item>,
        F: FnMut(usize) -> B,
    {
        ListGroup::new(self, size, factory)
    }

    /// [`group_list`](ListCursor::group_list) specialized to `Vec` batches.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    fn group_list_vec(self, size: usize) -> ListGroup<Self, fn(usize) -> Vec<Self::Item>>
    where
        Self: Sized,
    {
        ListGroup::new(self, size, Vec::with_capacity as fn(usize) -> Vec<Self::Item>)
    }

    /// Traverse a list cursor of list cursors depth-first, in both
    /// directions.
    ///
    /// Crossing into an inner cursor positions it at its start (forward) or
    /// its end (backward) before exposing it; empty inners are stepped over
    /// inside the call.
    fn flatten_list(self) -> ListFlatten<Self>
    where
        Self: Sized,
        Self::Item: ListCursor,
    {
        ListFlatten::new(self)
    }

    /// A bidirectional view whose mutation operations always fail.
    ///
    /// Idempotent: re-wrapping resolves to the inherent
    /// `ListUnmodifiable::unmodifiable_list`, which returns `self`.
    fn unmodifiable_list(self) -> ListUnmodifiable<Self>
    where
        Self: Sized,
    {
        ListUnmodifiable::new(self)
    }
}

// Plain decorators forward the full bidirectional contract, mutation
// included.

impl<C: ListCursor + ?Sized> ListCursor for &mut C {
    fn previous(&mut self) -> Option<Self::Item> {
        (**self).previous()
    }

    fn next_index(&self) -> usize {
        (**self).next_index()
    }

    fn previous_index(&self) -> Option<usize> {
        (**self).previous_index()
    }

    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    fn has_previous(&mut self) -> bool {
        (**self).has_previous()
    }

    fn set(&mut self, value: Self::Item) -> Result<(), TraverseError> {
        (**self).set(value)
    }

    fn insert(&mut self, value: Self::Item) -> Result<(), TraverseError> {
        (**self).insert(value)
    }
}

impl<C: ListCursor + ?Sized> ListCursor for Box<C> {
    fn previous(&mut self) -> Option<Self::Item> {
        (**self).previous()
    }

    fn next_index(&self) -> usize {
        (**self).next_index()
    }

    fn previous_index(&self) -> Option<usize> {
        (**self).previous_index()
    }

    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    fn has_previous(&mut self) -> bool {
        (**self).has_previous()
    }

    fn set(&mut self, value: Self::Item) -> Result<(), TraverseError> {
        (**self).set(value)
    }

    fn insert(&mut self, value: Self::Item) -> Result<(), TraverseError> {
        (**self).insert(value)
    }
}
