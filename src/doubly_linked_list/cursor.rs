use crate::doubly_linked_list::{DoublyLinkedList, Node};
use crate::error::{CollectionError, Result};
use std::fmt;
use std::fmt::Formatter;
use std::ptr::NonNull;

/// A cursor over a `DoublyLinkedList` with editing operations.
///
/// A `CursorMut` is the live view of the list that may change it while
/// walking: it can insert or remove elements around its position and keep
/// moving, and every change is visible to the rest of the walk. Elements
/// pushed behind the back of the list, for instance, are reached by moving
/// forward.
///
/// In a list with length *n*, there are *n* + 1 valid positions for the
/// cursor, indexed by 0, 1, ..., *n*, where *n* is past the last element.
///
/// # Examples
///
/// ```
/// use linear_collections::prelude::*;
///
/// let mut list: DoublyLinkedList<_> = [1, 2, 3].into_iter().collect();
/// let mut cursor = list.cursor_front_mut();
/// let mut seen = Vec::new();
/// while let Some(&value) = cursor.current() {
///     seen.push(value);
///     if value == 1 {
///         cursor.push_back(4); // observed later in this walk
///     }
///     if value == 2 {
///         cursor.remove(); // moves to the next element
///         continue;
///     }
///     cursor.move_next().unwrap();
/// }
/// assert_eq!(seen, vec![1, 2, 3, 4]);
/// assert_eq!(list.to_array(), vec![1, 3, 4]);
/// ```
///
/// The list cannot be read while a cursor borrows it:
///
/// ```compile_fail
/// use linear_collections::prelude::*;
///
/// let mut list: DoublyLinkedList<_> = [1, 2, 3].into_iter().collect();
/// let mut cursor = list.cursor_front_mut();
/// println!("{:?}", list.back());
/// println!("{:?}", cursor.current());
/// ```
pub struct CursorMut<'a, T: 'a> {
    index: usize,
    current: Option<NonNull<Node<T>>>,
    list: &'a mut DoublyLinkedList<T>,
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(
        index: usize,
        current: Option<NonNull<Node<T>>>,
        list: &'a mut DoublyLinkedList<T>,
    ) -> Self {
        Self {
            index,
            current,
            list,
        }
    }

    /// Position of the cursor; equal to the list length when the cursor is
    /// past the last element.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns a reference to the element at the cursor, or `None` if the
    /// cursor is past the last element.
    pub fn current(&self) -> Option<&T> {
        // SAFETY: `current` is a live node of the list borrowed by `self`.
        self.current.map(|node| unsafe { &(*node.as_ptr()).element })
    }

    /// Returns a mutable reference to the element at the cursor, or `None`
    /// if the cursor is past the last element.
    pub fn current_mut(&mut self) -> Option<&mut T> {
        // SAFETY: `current` is a live node of the list borrowed mutably by
        // `self`, and the returned reference borrows `self`.
        self.current
            .map(|node| unsafe { &mut (*node.as_ptr()).element })
    }

    /// Move the cursor to the next element, or past the last element.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NoMoreElements`] if the cursor is already past the
    /// last element.
    pub fn move_next(&mut self) -> Result<()> {
        let node = self.current.ok_or(CollectionError::NoMoreElements)?;
        // SAFETY: `node` is a live node of the list.
        self.current = unsafe { node.as_ref().next };
        self.index += 1;
        Ok(())
    }

    /// Move the cursor to the previous element.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NoMoreElements`] if the cursor is at the front.
    pub fn move_prev(&mut self) -> Result<()> {
        if self.index == 0 {
            return Err(CollectionError::NoMoreElements);
        }
        self.current = match self.current {
            // SAFETY: `node` is a live node of the list.
            Some(node) => unsafe { node.as_ref().prev },
            None => self.list.tail_node(),
        };
        self.index -= 1;
        Ok(())
    }

    /// Inserts `item` right before the cursor. The cursor keeps pointing at
    /// the same element, whose index grows by one.
    ///
    /// This operation should compute in *O*(1) time.
    pub fn insert(&mut self, item: T) {
        // SAFETY: `current` belongs to the list, or is `None` for the tail.
        unsafe { self.list.attach_before(self.current, item) };
        self.index += 1;
    }

    /// Removes the element at the cursor and returns it, or returns `None`
    /// if the cursor is past the last element. After removal the cursor
    /// points at the element that followed the removed one.
    ///
    /// This operation should compute in *O*(1) time.
    pub fn remove(&mut self) -> Option<T> {
        let node = self.current?;
        // SAFETY: `node` is a live node of the list.
        let node = unsafe { self.list.detach_node(node) };
        self.current = node.next;
        Some(node.element)
    }

    /// Adds an element first in the list. The cursor keeps pointing at the
    /// same element.
    pub fn push_front(&mut self, item: T) {
        self.list.push_front(item);
        self.index += 1;
    }

    /// Appends an element to the back of the list. A cursor that is past
    /// the last element stays past it.
    pub fn push_back(&mut self, item: T) {
        self.list.push_back(item);
        if self.current.is_none() {
            self.index += 1;
        }
    }

    /// Temporarily views the list.
    pub fn view(&self) -> &DoublyLinkedList<T> {
        self.list
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for CursorMut<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("index", &self.index)
            .field("current", &self.current())
            .field("list", &self.list)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::adt::{Collection, ListAdt};
    use crate::doubly_linked_list::DoublyLinkedList;
    use crate::error::CollectionError;

    #[test]
    fn cursor_walk_and_edit() {
        let mut list = DoublyLinkedList::from_iter(0..5);
        let mut cursor = list.cursor_mut(2).unwrap();
        assert_eq!(cursor.current(), Some(&2));

        cursor.insert(10);
        assert_eq!(cursor.index(), 3);
        assert_eq!(cursor.current(), Some(&2));

        assert_eq!(cursor.remove(), Some(2));
        assert_eq!(cursor.index(), 3);
        assert_eq!(cursor.current(), Some(&3));

        if let Some(value) = cursor.current_mut() {
            *value *= 10;
        }
        assert!(cursor.move_prev().is_ok());
        assert_eq!(cursor.current(), Some(&10));
        assert_eq!(cursor.view().to_array(), vec![0, 1, 10, 30, 4]);
        assert_eq!(list.size(), 5);
    }

    #[test]
    fn cursor_bounds() {
        let mut list = DoublyLinkedList::from_iter(['a', 'b']);
        let mut cursor = list.cursor_front_mut();
        assert_eq!(cursor.move_prev(), Err(CollectionError::NoMoreElements));
        assert!(cursor.move_next().is_ok());
        assert!(cursor.move_next().is_ok());
        assert_eq!(cursor.index(), 2);
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.remove(), None);
        assert_eq!(cursor.move_next(), Err(CollectionError::NoMoreElements));

        assert!(cursor.move_prev().is_ok());
        assert_eq!(cursor.current(), Some(&'b'));
        assert_eq!(
            list.cursor_mut(3).err(),
            Some(CollectionError::IndexOutOfRange { index: 3, len: 2 })
        );
    }

    #[test]
    fn cursor_sees_changes_ahead() {
        let mut list = DoublyLinkedList::new();
        list.add("x").unwrap();
        let mut cursor = list.cursor_front_mut();
        cursor.push_back("y");
        cursor.push_front("w");
        assert_eq!(cursor.index(), 1);
        let mut walked = Vec::new();
        while let Some(value) = cursor.current() {
            walked.push(*value);
            cursor.move_next().unwrap();
        }
        assert_eq!(walked, vec!["x", "y"]);
        cursor.push_back("z");
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.index(), 4);
        assert_eq!(list.to_array(), vec!["w", "x", "y", "z"]);
    }

    #[test]
    fn cursor_on_empty_list() {
        let mut list = DoublyLinkedList::new();
        let mut cursor = list.cursor_front_mut();
        assert_eq!(cursor.current(), None);
        cursor.insert(1);
        assert_eq!(cursor.index(), 1);
        assert_eq!(cursor.current(), None);
        assert!(cursor.move_prev().is_ok());
        assert_eq!(cursor.current(), Some(&1));
        assert_eq!(list.to_array(), vec![1]);
    }
}
