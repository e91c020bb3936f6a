//! Lazy adapters returned by the derived [`Cursor`] operations.
//!
//! Each adapter exclusively owns its parent cursor (two parents for
//! [`Zip`]/[`Append`]); composition is a strict one-directional chain.

use std::fmt;
use std::iter::once;

use super::Cursor;
use crate::TraverseError;

/// Cursor returned by [`Cursor::filter`].
pub struct Filter<C, P> {
    parent: C,
    predicate: P,
}

impl<C, P> Filter<C, P> {
    pub(crate) fn new(parent: C, predicate: P) -> Self {
        Self { parent, predicate }
    }
}

impl<C, P> Cursor for Filter<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.parent.next()?;
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
    }
}

impl<C: fmt::Debug, P> fmt::Debug for Filter<C, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("parent", &self.parent)
            .finish_non_exhaustive()
    }
}

/// Cursor returned by [`Cursor::map`].
pub struct Map<C, F> {
    parent: C,
    f: F,
}

impl<C, F> Map<C, F> {
    pub(crate) fn new(parent: C, f: F) -> Self {
        Self { parent, f }
    }
}

impl<C, F, B> Cursor for Map<C, F>
where
    C: Cursor,
    F: FnMut(C::Item) -> B,
{
    type Item = B;

    fn next(&mut self) -> Option<Self::Item> {
        self.parent.next().map(&mut self.f)
    }
}

impl<C: fmt::Debug, F> fmt::Debug for Map<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("parent", &self.parent)
            .finish_non_exhaustive()
    }
}

/// Cursor returned by [`Cursor::extract`].
pub struct Extract<C, F> {
    parent: C,
    extractor: F,
}

impl<C, F> Extract<C, F> {
    pub(crate) fn new(parent: C, extractor: F) -> Self {
        Self { parent, extractor }
    }
}

impl<C, F, B> Cursor for Extract<C, F>
where
    C: Cursor,
    F: FnMut(C::Item) -> Option<B>,
{
    type Item = B;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.parent.next()?;
            if let Some(extracted) = (self.extractor)(item) {
                return Some(extracted);
            }
        }
    }
}

impl<C: fmt::Debug, F> fmt::Debug for Extract<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Extract")
            .field("parent", &self.parent)
            .finish_non_exhaustive()
    }
}

/// Cursor returned by [`Cursor::take`].
#[derive(Debug)]
pub struct Take<C> {
    parent: C,
    remaining: usize,
}

impl<C> Take<C> {
    pub(crate) fn new(parent: C, count: usize) -> Self {
        Self {
            parent,
            remaining: count,
        }
    }
}

impl<C: Cursor> Cursor for Take<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.parent.next()
    }
}

/// Cursor returned by [`Cursor::skip`].
#[derive(Debug)]
pub struct Skip<C> {
    parent: C,
    pending: usize,
}

impl<C> Skip<C> {
    pub(crate) fn new(parent: C, count: usize) -> Self {
        Self {
            parent,
            pending: count,
        }
    }
}

impl<C: Cursor> Cursor for Skip<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pending > 0 {
            self.pending -= 1;
            self.parent.next()?;
        }
        self.parent.next()
    }
}

/// Cursor returned by [`Cursor::group`]: fixed-size batches of consecutive
/// elements, materialized into factory-built collections.
pub struct Group<C, F> {
    parent: C,
    size: usize,
    factory: F,
}

impl<C, F> Group<C, F> {
    pub(crate) fn new(parent: C, size: usize, factory: F) -> Self {
        assert!(size > 0, "group size must be non-zero");
        Self {
            parent,
            size,
            factory,
        }
    }
}

impl<C, F, B> Cursor for Group<C, F>
where
    C: Cursor,
    F: FnMut(usize) -> B,
    B: Extend<C::Item>,
{
    type Item = B;

    fn next(&mut self) -> Option<Self::Item> {
        // Pull one element before building the batch so an exhausted parent
        // never produces a trailing empty batch.
        let head = self.parent.next()?;
        let mut batch = (self.factory)(self.size);
        batch.extend(once(head));
        for _ in 1..self.size {
            match self.parent.next() {
                Some(item) => batch.extend(once(item)),
                None => break,
            }
        }
        Some(batch)
    }
}

impl<C: fmt::Debug, F> fmt::Debug for Group<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Group")
            .field("parent", &self.parent)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

/// Cursor returned by [`Cursor::zip`]: lockstep pairs from two parents.
///
/// Ends with the shorter parent; the longer parent's remainder is left
/// unconsumed except for at most one element pulled by the final call.
#[derive(Debug)]
pub struct Zip<A, B> {
    left: A,
    right: B,
}

impl<A, B> Zip<A, B> {
    pub(crate) fn new(left: A, right: B) -> Self {
        Self { left, right }
    }
}

impl<A: Cursor, B: Cursor> Cursor for Zip<A, B> {
    type Item = (A::Item, B::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let left = self.left.next()?;
        let right = self.right.next()?;
        Some((left, right))
    }
}

/// Cursor returned by [`Cursor::append`]: sequential concatenation.
#[derive(Debug)]
pub struct Append<A, B> {
    first: A,
    second: B,
    in_second: bool,
}

impl<A, B> Append<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Self {
            first,
            second,
            in_second: false,
        }
    }
}

impl<A, B> Cursor for Append<A, B>
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.in_second {
            if let Some(item) = self.first.next() {
                return Some(item);
            }
            self.in_second = true;
        }
        self.second.next()
    }

    fn remove(&mut self) -> Result<(), TraverseError> {
        // Forward to whichever parent produced the last element.
        if self.in_second {
            self.second.remove()
        } else {
            self.first.remove()
        }
    }
}

/// Cursor returned by [`Cursor::flat_map`].
pub struct FlatMap<C, F, I> {
    parent: C,
    f: F,
    current: Option<I>,
}

impl<C, F, I> FlatMap<C, F, I> {
    pub(crate) fn new(parent: C, f: F) -> Self {
        Self {
            parent,
            f,
            current: None,
        }
    }
}

impl<C, F, I> Cursor for FlatMap<C, F, I>
where
    C: Cursor,
    I: Cursor,
    F: FnMut(C::Item) -> I,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(inner) = self.current.as_mut() {
                if let Some(item) = inner.next() {
                    return Some(item);
                }
            }
            let outer = self.parent.next()?;
            self.current = Some((self.f)(outer));
        }
    }
}

impl<C, F, I> fmt::Debug for FlatMap<C, F, I>
where
    C: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlatMap")
            .field("parent", &self.parent)
            .finish_non_exhaustive()
    }
}

/// Cursor returned by [`Cursor::flatten`].
pub struct Flatten<C: Cursor> {
    parent: C,
    current: Option<C::Item>,
}

impl<C: Cursor> Flatten<C> {
    pub(crate) fn new(parent: C) -> Self {
        Self {
            parent,
            current: None,
        }
    }
}

impl<C> Cursor for Flatten<C>
where
    C: Cursor,
    C::Item: Cursor,
{
    type Item = <C::Item as Cursor>::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(inner) = self.current.as_mut() {
                if let Some(item) = inner.next() {
                    return Some(item);
                }
            }
            self.current = Some(self.parent.next()?);
        }
    }
}

impl<C> fmt::Debug for Flatten<C>
where
    C: Cursor + fmt::Debug,
    C::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flatten")
            .field("parent", &self.parent)
            .field("current", &self.current)
            .finish()
    }
}

/// Cursor returned by [`Cursor::unmodifiable`]: forwards all reads, rejects
/// all mutation.
#[derive(Debug)]
pub struct Unmodifiable<C> {
    parent: C,
}

impl<C> Unmodifiable<C> {
    pub(crate) fn new(parent: C) -> Self {
        Self { parent }
    }

    /// Re-wrapping an unmodifiable view is the identity.
    ///
    /// This inherent method shadows [`Cursor::unmodifiable`], so the
    /// idempotence holds by construction rather than by runtime inspection.
    pub fn unmodifiable(self) -> Unmodifiable<C> {
        self
    }
}

impl<C: Cursor> Cursor for Unmodifiable<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.parent.next()
    }

    fn remove(&mut self) -> Result<(), TraverseError> {
        Err(TraverseError::unsupported("remove", "unmodifiable"))
    }
}

/// Bridge from [`Cursor`] to [`Iterator`], returned by
/// [`Cursor::into_iter`].
#[derive(Debug)]
pub struct CursorIter<C> {
    cursor: C,
}

impl<C> CursorIter<C> {
    pub(crate) fn new(cursor: C) -> Self {
        Self { cursor }
    }
}

impl<C: Cursor> Iterator for CursorIter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next()
    }
}
