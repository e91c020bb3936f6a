//! Source cursors: the leaves every pipeline is built on.

use std::marker::PhantomData;

use super::Cursor;
use crate::TraverseError;

/// Wrap anything iterable as a read-only forward cursor.
///
/// This is the main entry point for building pipelines:
///
/// ```
/// use penelope::cursor::{over, Cursor};
///
/// let doubled = over(vec![1, 2, 3]).map(|v| v * 2).collect_vec();
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub fn over<I: IntoIterator>(source: I) -> IterCursor<I::IntoIter> {
    IterCursor::new(source.into_iter())
}

/// A fresh, stateless empty cursor.
///
/// A pure factory: every call returns a new value, there is no shared
/// singleton.
pub fn empty<T>() -> Empty<T> {
    Empty {
        _marker: PhantomData,
    }
}

/// Read-only cursor over any [`Iterator`], created by [`over`].
#[derive(Debug, Clone)]
pub struct IterCursor<I> {
    inner: I,
}

impl<I: Iterator> IterCursor<I> {
    /// Wrap an iterator directly; [`over`] is usually more convenient.
    pub fn new(inner: I) -> Self {
        Self { inner }
    }
}

impl<I: Iterator> Cursor for IterCursor<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

/// The cursor with no elements, created by [`empty`].
#[derive(Debug, Clone, Copy)]
pub struct Empty<T> {
    _marker: PhantomData<T>,
}

impl<T> Cursor for Empty<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        None
    }
}

/// Forward cursor over a `Vec` that supports removing the element most
/// recently returned.
///
/// This is the mutation ground truth for the forward contract: plain
/// decorators (`&mut`, `Box`) forward `remove` here, while every
/// transforming view rejects it.
#[derive(Debug)]
pub struct VecCursor<'a, T> {
    items: &'a mut Vec<T>,
    position: usize,
    returned: bool,
}

impl<'a, T> VecCursor<'a, T> {
    /// Open a cursor positioned before the first element.
    pub fn new(items: &'a mut Vec<T>) -> Self {
        Self {
            items,
            position: 0,
            returned: false,
        }
    }
}

impl<T: Clone> Cursor for VecCursor<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.items.get(self.position)?.clone();
        self.position += 1;
        self.returned = true;
        Some(item)
    }

    fn remove(&mut self) -> Result<(), TraverseError> {
        if !self.returned {
            return Err(TraverseError::NoCurrentElement {
                operation: "remove",
            });
        }
        self.position -= 1;
        self.items.remove(self.position);
        self.returned = false;
        Ok(())
    }
}
