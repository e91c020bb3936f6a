//! Direction-preserving adapters returned by the derived [`ListCursor`]
//! operations.
//!
//! Unlike the forward-only adapters, nothing here buffers elements: the
//! underlying cursor position doubles as the probe position, and backward
//! operations mirror the forward ones symmetrically.

use std::fmt;
use std::iter::once;

use super::ListCursor;
use crate::cursor::Cursor;
use crate::TraverseError;

/// Bidirectional cursor returned by [`ListCursor::filter_list`].
pub struct ListFilter<C, P> {
    parent: C,
    predicate: P,
}

impl<C, P> ListFilter<C, P> {
    pub(crate) fn new(parent: C, predicate: P) -> Self {
        Self { parent, predicate }
    }
}

impl<C, P> Cursor for ListFilter<C, P>
where
    C: ListCursor,
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

impl<C, P> ListCursor for ListFilter<C, P>
where
    C: ListCursor,
    P: FnMut(&C::Item) -> bool,
{
    fn previous(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.parent.previous()?;
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
    }

    fn next_index(&self) -> usize {
        self.parent.next_index()
    }

    fn has_next(&mut self) -> bool {
        // Probe forward, then undo every raw step so the underlying
        // position is observably unchanged.
        let mut steps = 0;
        let mut found = false;
        while let Some(item) = self.parent.next() {
            steps += 1;
            if (self.predicate)(&item) {
                found = true;
                break;
            }
        }
        for _ in 0..steps {
            self.parent.previous();
        }
        found
    }

    fn has_previous(&mut self) -> bool {
        let mut steps = 0;
        let mut found = false;
        while let Some(item) = self.parent.previous() {
            steps += 1;
            if (self.predicate)(&item) {
                found = true;
                break;
            }
        }
        for _ in 0..steps {
            self.parent.next();
        }
        found
    }
}

impl<C: fmt::Debug, P> fmt::Debug for ListFilter<C, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListFilter")
            .field("parent", &self.parent)
            .finish_non_exhaustive()
    }
}

/// Bidirectional cursor returned by [`ListCursor::extract_list`].
pub struct ListExtract<C, F> {
    parent: C,
    extractor: F,
}

impl<C, F> ListExtract<C, F> {
    pub(crate) fn new(parent: C, extractor: F) -> Self {
        Self { parent, extractor }
    }
}

impl<C, F, B> Cursor for ListExtract<C, F>
where
    C: ListCursor,
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

impl<C, F, B> ListCursor for ListExtract<C, F>
where
    C: ListCursor,
    F: FnMut(C::Item) -> Option<B>,
{
    fn previous(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.parent.previous()?;
            if let Some(extracted) = (self.extractor)(item) {
                return Some(extracted);
            }
        }
    }

    fn next_index(&self) -> usize {
        self.parent.next_index()
    }

    fn has_next(&mut self) -> bool {
        let mut steps = 0;
        let mut found = false;
        while let Some(item) = self.parent.next() {
            steps += 1;
            if (self.extractor)(item).is_some() {
                found = true;
                break;
            }
        }
        for _ in 0..steps {
            self.parent.previous();
        }
        found
    }

    fn has_previous(&mut self) -> bool {
        let mut steps = 0;
        let mut found = false;
        while let Some(item) = self.parent.previous() {
            steps += 1;
            if (self.extractor)(item).is_some() {
                found = true;
                break;
            }
        }
        for _ in 0..steps {
            self.parent.next();
        }
        found
    }
}

impl<C: fmt::Debug, F> fmt::Debug for ListExtract<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListExtract")
            .field("parent", &self.parent)
            .finish_non_exhaustive()
    }
}

/// Bidirectional cursor returned by [`ListCursor::map_list`].
pub struct ListMap<C, F> {
    parent: C,
    f: F,
}

impl<C, F> ListMap<C, F> {
    pub(crate) fn new(parent: C, f: F) -> Self {
        Self { parent, f }
    }
}

impl<C, F, B> Cursor for ListMap<C, F>
where
    C: ListCursor,
    F: FnMut(C::Item) -> B,
{
    type Item = B;

    fn next(&mut self) -> Option<Self::Item> {
        self.parent.next().map(&mut self.f)
    }
}

impl<C, F, B> ListCursor for ListMap<C, F>
where
    C: ListCursor,
    F: FnMut(C::Item) -> B,
{
    fn previous(&mut self) -> Option<Self::Item> {
        self.parent.previous().map(&mut self.f)
    }

    fn next_index(&self) -> usize {
        self.parent.next_index()
    }

    fn has_next(&mut self) -> bool {
        self.parent.has_next()
    }

    fn has_previous(&mut self) -> bool {
        self.parent.has_previous()
    }
}

impl<C: fmt::Debug, F> fmt::Debug for ListMap<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListMap")
            .field("parent", &self.parent)
            .finish_non_exhaustive()
    }
}

/// Bidirectional cursor returned by [`ListCursor::take_list`]: a fixed
/// window anchored at the construction position.
#[derive(Debug)]
pub struct ListTake<C> {
    parent: C,
    limit: usize,
    position: usize,
}

impl<C> ListTake<C> {
    pub(crate) fn new(parent: C, limit: usize) -> Self {
        Self {
            parent,
            limit,
            position: 0,
        }
    }
}

impl<C: ListCursor> Cursor for ListTake<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.limit {
            return None;
        }
        let item = self.parent.next()?;
        self.position += 1;
        Some(item)
    }
}

impl<C: ListCursor> ListCursor for ListTake<C> {
    fn previous(&mut self) -> Option<Self::Item> {
        if self.position == 0 {
            return None;
        }
        let item = self.parent.previous()?;
        self.position -= 1;
        Some(item)
    }

    fn next_index(&self) -> usize {
        self.position
    }

    fn has_next(&mut self) -> bool {
        self.position < self.limit && self.parent.has_next()
    }

    fn has_previous(&mut self) -> bool {
        self.position > 0
    }
}

/// Bidirectional cursor returned by [`ListCursor::skip_list`]: a lazily
/// resolved forward offset.
#[derive(Debug)]
pub struct ListSkip<C> {
    parent: C,
    offset: usize,
    resolved: bool,
}

impl<C> ListSkip<C> {
    pub(crate) fn new(parent: C, offset: usize) -> Self {
        Self {
            parent,
            offset,
            resolved: false,
        }
    }
}

impl<C: ListCursor> ListSkip<C> {
    /// Drain the pending offset from the parent on first access.
    fn resolve(&mut self) {
        if self.resolved {
            return;
        }
        self.resolved = true;
        for _ in 0..self.offset {
            if self.parent.next().is_none() {
                break;
            }
        }
    }
}

impl<C: ListCursor> Cursor for ListSkip<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.resolve();
        self.parent.next()
    }
}

impl<C: ListCursor> ListCursor for ListSkip<C> {
    fn previous(&mut self) -> Option<Self::Item> {
        self.resolve();
        // The first `offset` elements are outside the view.
        if self.parent.next_index() > self.offset {
            self.parent.previous()
        } else {
            None
        }
    }

    fn next_index(&self) -> usize {
        if self.resolved {
            self.parent.next_index().saturating_sub(self.offset)
        } else {
            0
        }
    }

    fn has_next(&mut self) -> bool {
        self.resolve();
        self.parent.has_next()
    }

    fn has_previous(&mut self) -> bool {
        self.resolve();
        self.parent.next_index() > self.offset
    }
}

/// Bidirectional cursor returned by [`ListCursor::group_list`].
///
/// Batch boundaries are absolute multiples of the batch size; alignment
/// before each read keeps `next_index` addressing the batch containing the
/// underlying cursor.
pub struct ListGroup<C, F> {
    parent: C,
    size: usize,
    factory: F,
}

impl<C, F> ListGroup<C, F> {
    pub(crate) fn new(parent: C, size: usize, factory: F) -> Self {
        assert!(size > 0, "group size must be non-zero");
        Self {
            parent,
            size,
            factory,
        }
    }
}

impl<C, F, B> Cursor for ListGroup<C, F>
where
    C: ListCursor,
    F: FnMut(usize) -> B,
    B: Extend<C::Item>,
{
    type Item = B;

    fn next(&mut self) -> Option<Self::Item> {
        // Align up to the boundary ahead; only the exhausted tail of a
        // partial batch can be unaligned here, so this never skips over
        // unread elements mid-stream.
        while self.parent.next_index() % self.size != 0 {
            if self.parent.next().is_none() {
                break;
            }
        }
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

impl<C, F, B> ListCursor for ListGroup<C, F>
where
    C: ListCursor,
    F: FnMut(usize) -> B,
    B: Extend<C::Item>,
{
    fn previous(&mut self) -> Option<Self::Item> {
        let index = self.parent.next_index();
        // Floor boundary of the batch behind the cursor: one full batch
        // below when already aligned, otherwise the boundary of the batch
        // the cursor is inside.
        let target = if index % self.size == 0 {
            index.checked_sub(self.size)?
        } else {
            index - index % self.size
        };
        let mut collected = Vec::with_capacity(self.size);
        while self.parent.next_index() > target {
            match self.parent.previous() {
                Some(item) => collected.push(item),
                None => break,
            }
        }
        if collected.is_empty() {
            return None;
        }
        collected.reverse();
        let mut batch = (self.factory)(collected.len());
        batch.extend(collected);
        Some(batch)
    }

    fn next_index(&self) -> usize {
        self.parent.next_index().div_ceil(self.size)
    }

    fn has_next(&mut self) -> bool {
        self.parent.has_next()
    }

    fn has_previous(&mut self) -> bool {
        self.parent.has_previous()
    }
}

impl<C: fmt::Debug, F> fmt::Debug for ListGroup<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListGroup")
            .field("parent", &self.parent)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

/// Bidirectional cursor returned by [`ListCursor::flatten_list`].
///
/// The parent stays positioned just past the active inner cursor; crossing
/// a boundary repositions the freshly produced inner at its start (forward)
/// or end (backward) before it is exposed.
pub struct ListFlatten<C: Cursor> {
    parent: C,
    current: Option<C::Item>,
    position: usize,
}

impl<C: Cursor> ListFlatten<C> {
    pub(crate) fn new(parent: C) -> Self {
        Self {
            parent,
            current: None,
            position: 0,
        }
    }
}

impl<C> Cursor for ListFlatten<C>
where
    C: ListCursor,
    C::Item: ListCursor,
{
    type Item = <C::Item as Cursor>::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(inner) = self.current.as_mut() {
                if let Some(item) = inner.next() {
                    self.position += 1;
                    return Some(item);
                }
            }
            let mut inner = self.parent.next()?;
            while inner.previous().is_some() {}
            self.current = Some(inner);
        }
    }
}

impl<C> ListCursor for ListFlatten<C>
where
    C: ListCursor,
    C::Item: ListCursor,
{
    fn previous(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(inner) = self.current.as_mut() {
                if let Some(item) = inner.previous() {
                    self.position -= 1;
                    return Some(item);
                }
            }
            if self.current.take().is_some() {
                // The parent sits just past the spent inner; step back over
                // it before fetching the one before.
                self.parent.previous();
            }
            let mut inner = self.parent.previous()?;
            while inner.next().is_some() {}
            self.current = Some(inner);
            // Restore the just-past-active-inner invariant.
            self.parent.next();
        }
    }

    fn next_index(&self) -> usize {
        self.position
    }
}

impl<C> fmt::Debug for ListFlatten<C>
where
    C: Cursor + fmt::Debug,
    C::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListFlatten")
            .field("parent", &self.parent)
            .field("current", &self.current)
            .field("position", &self.position)
            .finish()
    }
}

/// Bidirectional cursor returned by [`ListCursor::unmodifiable_list`]:
/// forwards all reads in both directions, rejects all mutation.
#[derive(Debug)]
pub struct ListUnmodifiable<C> {
    parent: C,
}

impl<C> ListUnmodifiable<C> {
    pub(crate) fn new(parent: C) -> Self {
        Self { parent }
    }

    /// Re-wrapping an unmodifiable view is the identity.
    pub fn unmodifiable_list(self) -> ListUnmodifiable<C> {
        self
    }
}

impl<C: ListCursor> Cursor for ListUnmodifiable<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.parent.next()
    }

    fn remove(&mut self) -> Result<(), TraverseError> {
        Err(TraverseError::unsupported("remove", "unmodifiable"))
    }
}

impl<C: ListCursor> ListCursor for ListUnmodifiable<C> {
    fn previous(&mut self) -> Option<Self::Item> {
        self.parent.previous()
    }

    fn next_index(&self) -> usize {
        self.parent.next_index()
    }

    fn previous_index(&self) -> Option<usize> {
        self.parent.previous_index()
    }

    fn has_next(&mut self) -> bool {
        self.parent.has_next()
    }

    fn has_previous(&mut self) -> bool {
        self.parent.has_previous()
    }

    fn set(&mut self, _value: Self::Item) -> Result<(), TraverseError> {
        Err(TraverseError::unsupported("set", "unmodifiable"))
    }

    fn insert(&mut self, _value: Self::Item) -> Result<(), TraverseError> {
        Err(TraverseError::unsupported("insert", "unmodifiable"))
    }
}
