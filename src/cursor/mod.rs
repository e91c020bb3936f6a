//! Forward cursor contract and derived pipeline operations.
//!
//! A [`Cursor`] is a single-advance traversal over a sequence. Every derived
//! operation returns a new cursor that exclusively owns its parent and pulls
//! no more of it than the current call requires; the eager exceptions
//! (`fold`, `count`, `drain_into`, ...) are terminal by design.
//!
//! A panic in a caller-supplied closure propagates from the call that
//! triggered it and leaves the cursor at an undefined position; nothing here
//! catches, wraps, or retries.

mod adapters;
mod lookahead;
mod sources;

pub use adapters::{
    Append, CursorIter, Extract, Filter, FlatMap, Flatten, Group, Map, Skip, Take, Unmodifiable,
    Zip,
};
pub use lookahead::LookAhead;
pub use sources::{empty, over, Empty, IterCursor, VecCursor};

use std::cmp::Ordering;

use crate::accum::Accumulator;
use crate::{Direction, TraverseError};

/// A single-advance cursor over a sequence of elements.
///
/// The core contract is [`next`](Cursor::next): advance past the next element
/// and return it, or return `None` once the sequence is exhausted. Mutation
/// ([`remove`](Cursor::remove)) is rejected by default; only cursors over
/// owned storage and pure forwarding decorators support it. Every other
/// method is a derived operation with a default implementation.
pub trait Cursor {
    /// Element type produced by the cursor.
    type Item;

    /// Advance past the next element and return it, or `None` when exhausted.
    fn next(&mut self) -> Option<Self::Item>;

    /// Remove the element most recently returned by [`next`](Cursor::next)
    /// from the underlying storage.
    ///
    /// Transforming views (filter, map, extract, group, flatten, zip,
    /// unmodifiable, look-ahead) reject this with
    /// [`TraverseError::Unsupported`].
    fn remove(&mut self) -> Result<(), TraverseError> {
        Err(TraverseError::unsupported("remove", "read-only"))
    }

    /// Like [`next`](Cursor::next), but exhaustion is reported as an error.
    fn try_next(&mut self) -> Result<Self::Item, TraverseError> {
        self.next()
            .ok_or(TraverseError::Exhausted(Direction::Forward))
    }

    /// Keep only elements accepted by `predicate`.
    ///
    /// Rejected elements are skipped silently; probing continues until an
    /// accepted element is found or the parent is exhausted.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Transform each element through `f`.
    fn map<B, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> B,
    {
        Map::new(self, f)
    }

    /// Filter and transform in one step: elements for which `extractor`
    /// returns `None` are skipped.
    fn extract<B, F>(self, extractor: F) -> Extract<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Option<B>,
    {
        Extract::new(self, extractor)
    }

    /// Stop after at most `count` elements, even if the parent has more.
    fn take(self, count: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, count)
    }

    /// Discard the first `min(count, available)` elements.
    ///
    /// Discarding happens lazily on the first access, not at construction.
    fn skip(self, count: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip::new(self, count)
    }

    /// Drain up to `size` elements per call into a fresh collection built by
    /// `factory` (called with a size hint).
    ///
    /// Batch boundaries are fixed at construction; the final batch may be
    /// shorter than `size` but is never empty.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    fn group<B, F>(self, size: usize, factory: F) -> Group<Self, F>
    where
        Self: Sized,
        B: Extend<Self::Item>,
        F: FnMut(usize) -> B,
    {
        Group::new(self, size, factory)
    }

    /// [`group`](Cursor::group) specialized to `Vec` batches.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    fn group_vec(self, size: usize) -> Group<Self, fn(usize) -> Vec<Self::Item>>
    where
        Self: Sized,
    {
        Group::new(self, size, Vec::with_capacity as fn(usize) -> Vec<Self::Item>)
    }

    /// Pair this cursor with `other` in lockstep.
    ///
    /// The result ends as soon as either parent does, yielding
    /// `min(len_a, len_b)` pairs. The zipped view is read-only.
    fn zip<C>(self, other: C) -> Zip<Self, C>
    where
        Self: Sized,
        C: Cursor,
    {
        Zip::new(self, other)
    }

    /// Yield all of this cursor's elements, then all of `other`'s.
    fn append<C>(self, other: C) -> Append<Self, C>
    where
        Self: Sized,
        C: Cursor<Item = Self::Item>,
    {
        Append::new(self, other)
    }

    /// Map each element to a cursor and traverse the results depth-first.
    ///
    /// Empty inner cursors are stepped over inside the call.
    fn flat_map<I, F>(self, f: F) -> FlatMap<Self, F, I>
    where
        Self: Sized,
        I: Cursor,
        F: FnMut(Self::Item) -> I,
    {
        FlatMap::new(self, f)
    }

    /// Traverse a cursor of cursors depth-first.
    fn flatten(self) -> Flatten<Self>
    where
        Self: Sized,
        Self::Item: Cursor,
    {
        Flatten::new(self)
    }

    /// Wrap this cursor in a single-slot look-ahead buffer, enabling
    /// [`has_next`](LookAhead::has_next) and [`peek`](LookAhead::peek).
    fn look_ahead(self) -> LookAhead<Self>
    where
        Self: Sized,
    {
        LookAhead::new(self)
    }

    /// A view whose mutation operations always fail, regardless of whether
    /// the wrapped source supports them.
    ///
    /// Wrapping an already-unmodifiable view is the identity: the inherent
    /// `Unmodifiable::unmodifiable` resolves first and returns `self`.
    fn unmodifiable(self) -> Unmodifiable<Self>
    where
        Self: Sized,
    {
        Unmodifiable::new(self)
    }

    /// Bridge into the standard iterator ecosystem.
    fn into_iter(self) -> CursorIter<Self>
    where
        Self: Sized,
    {
        CursorIter::new(self)
    }

    /// Feed every remaining element into `sink`, in order.
    fn drain_into<S>(mut self, sink: &mut S)
    where
        Self: Sized,
        S: Accumulator<Item = Self::Item> + ?Sized,
    {
        while let Some(item) = self.next() {
            sink.add(item);
        }
    }

    /// Materialize the remaining elements into a `Vec`.
    fn collect_vec(mut self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        let mut collected = Vec::new();
        while let Some(item) = self.next() {
            collected.push(item);
        }
        collected
    }

    /// Reduce the remaining elements into `init` through `f`.
    fn fold<S, F>(mut self, init: S, mut f: F) -> S
    where
        Self: Sized,
        F: FnMut(S, Self::Item) -> S,
    {
        let mut state = init;
        while let Some(item) = self.next() {
            state = f(state, item);
        }
        state
    }

    /// Count the remaining elements.
    fn count(mut self) -> usize
    where
        Self: Sized,
    {
        let mut total = 0;
        while self.next().is_some() {
            total += 1;
        }
        total
    }

    /// The next element, if any. Consumes the cursor.
    fn first(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next()
    }

    /// The first element accepted by `predicate`, if any.
    fn find<P>(mut self, mut predicate: P) -> Option<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        while let Some(item) = self.next() {
            if predicate(&item) {
                return Some(item);
            }
        }
        None
    }

    /// The first extraction `extractor` produces, if any.
    fn extract_first<B, F>(mut self, mut extractor: F) -> Option<B>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Option<B>,
    {
        while let Some(item) = self.next() {
            if let Some(found) = extractor(item) {
                return Some(found);
            }
        }
        None
    }

    /// Whether any remaining element satisfies `predicate`.
    fn any<P>(self, predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        self.find(predicate).is_some()
    }

    /// Whether every remaining element satisfies `predicate`.
    fn all<P>(mut self, mut predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        while let Some(item) = self.next() {
            if !predicate(&item) {
                return false;
            }
        }
        true
    }

    /// The minimum of the remaining elements under `compare`.
    ///
    /// The first of equal elements wins.
    fn least_by<F>(mut self, mut compare: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        let mut best = self.next()?;
        while let Some(item) = self.next() {
            if compare(&item, &best) == Ordering::Less {
                best = item;
            }
        }
        Some(best)
    }

    /// The maximum of the remaining elements under `compare`.
    ///
    /// The first of equal elements wins.
    fn greatest_by<F>(mut self, mut compare: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        let mut best = self.next()?;
        while let Some(item) = self.next() {
            if compare(&item, &best) == Ordering::Greater {
                best = item;
            }
        }
        Some(best)
    }

    /// Apply `f` to every remaining element, in order.
    fn for_each<F>(mut self, mut f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        while let Some(item) = self.next() {
            f(item);
        }
    }
}

// Plain decorators: mutable references and boxes forward the full contract,
// mutation included.

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }

    fn remove(&mut self) -> Result<(), TraverseError> {
        (**self).remove()
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }

    fn remove(&mut self) -> Result<(), TraverseError> {
        (**self).remove()
    }
}
