//! Bidirectional source cursors over slices and vectors.

use super::ListCursor;
use crate::cursor::Cursor;
use crate::TraverseError;

/// Read-only bidirectional cursor over a slice.
///
/// Elements are cloned out on each step; the cursor sits between elements
/// and can re-traverse freely in both directions.
#[derive(Debug, Clone)]
pub struct SliceListCursor<'a, T> {
    items: &'a [T],
    position: usize,
}

impl<'a, T> SliceListCursor<'a, T> {
    /// Open a cursor positioned before the first element.
    pub fn new(items: &'a [T]) -> Self {
        Self { items, position: 0 }
    }
}

impl<T: Clone> Cursor for SliceListCursor<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.items.get(self.position)?.clone();
        self.position += 1;
        Some(item)
    }
}

impl<T: Clone> ListCursor for SliceListCursor<'_, T> {
    fn previous(&mut self) -> Option<Self::Item> {
        if self.position == 0 {
            return None;
        }
        self.position -= 1;
        Some(self.items[self.position].clone())
    }

    fn next_index(&self) -> usize {
        self.position
    }

    fn has_next(&mut self) -> bool {
        self.position < self.items.len()
    }

    fn has_previous(&mut self) -> bool {
        self.position > 0
    }
}

/// Which step produced the current element of a [`VecListCursor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LastStep {
    Forward,
    Backward,
}

/// Bidirectional cursor over a `Vec` supporting `remove`, `set` and
/// `insert` — the mutation ground truth the plain decorators forward to.
#[derive(Debug)]
pub struct VecListCursor<'a, T> {
    items: &'a mut Vec<T>,
    position: usize,
    last: Option<LastStep>,
}

impl<'a, T> VecListCursor<'a, T> {
    /// Open a cursor positioned before the first element.
    pub fn new(items: &'a mut Vec<T>) -> Self {
        Self {
            items,
            position: 0,
            last: None,
        }
    }

    /// Index of the element most recently returned, if one is current.
    fn current_index(&self) -> Option<usize> {
        match self.last? {
            LastStep::Forward => Some(self.position - 1),
            LastStep::Backward => Some(self.position),
        }
    }
}

impl<T: Clone> Cursor for VecListCursor<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.items.get(self.position)?.clone();
        self.position += 1;
        self.last = Some(LastStep::Forward);
        Some(item)
    }

    fn remove(&mut self) -> Result<(), TraverseError> {
        let index = self
            .current_index()
            .ok_or(TraverseError::NoCurrentElement {
                operation: "remove",
            })?;
        self.items.remove(index);
        if self.last == Some(LastStep::Forward) {
            self.position -= 1;
        }
        self.last = None;
        Ok(())
    }
}

impl<T: Clone> ListCursor for VecListCursor<'_, T> {
    fn previous(&mut self) -> Option<Self::Item> {
        if self.position == 0 {
            return None;
        }
        self.position -= 1;
        self.last = Some(LastStep::Backward);
        Some(self.items[self.position].clone())
    }

    fn next_index(&self) -> usize {
        self.position
    }

    fn has_next(&mut self) -> bool {
        self.position < self.items.len()
    }

    fn has_previous(&mut self) -> bool {
        self.position > 0
    }

    fn set(&mut self, value: Self::Item) -> Result<(), TraverseError> {
        let index = self
            .current_index()
            .ok_or(TraverseError::NoCurrentElement { operation: "set" })?;
        self.items[index] = value;
        Ok(())
    }

    fn insert(&mut self, value: Self::Item) -> Result<(), TraverseError> {
        // Inserted before the implicit next element; a subsequent
        // `previous` returns the new element, `next` is unaffected.
        self.items.insert(self.position, value);
        self.position += 1;
        self.last = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_stay_consistent_in_both_directions() {
        let values = [10, 20, 30];
        let mut cursor = SliceListCursor::new(&values);
        assert_eq!(cursor.next_index(), 0);
        assert_eq!(cursor.previous_index(), None);

        assert_eq!(cursor.next(), Some(10));
        assert_eq!(cursor.next_index(), 1);
        assert_eq!(cursor.previous_index(), Some(0));

        assert_eq!(cursor.previous(), Some(10));
        assert_eq!(cursor.next_index(), 0);
        assert_eq!(cursor.previous_index(), None);
    }

    #[test]
    fn set_replaces_the_last_returned_element() {
        let mut values = vec![1, 2, 3];
        let mut cursor = VecListCursor::new(&mut values);
        cursor.next();
        cursor.set(9).expect("set after next succeeds");
        cursor.next();
        cursor.previous();
        cursor.set(8).expect("set after previous succeeds");
        assert_eq!(values, vec![9, 8, 3]);
    }

    #[test]
    fn insert_lands_before_the_implicit_next_element() {
        let mut values = vec![1, 3];
        let mut cursor = VecListCursor::new(&mut values);
        cursor.next();
        cursor.insert(2).expect("insert succeeds");
        assert_eq!(cursor.next(), Some(3));
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn remove_after_backward_step_deletes_that_element() {
        let mut values = vec![1, 2, 3];
        let mut cursor = VecListCursor::new(&mut values);
        cursor.next();
        cursor.next();
        cursor.previous();
        cursor.remove().expect("remove after previous succeeds");
        assert_eq!(cursor.next(), Some(3));
        assert_eq!(values, vec![1, 3]);
    }
}
