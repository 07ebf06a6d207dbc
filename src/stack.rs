//! A last-in first-out stack stored in one contiguous buffer.

use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::iter::Rev;

use crate::adt::{Collection, StackAdt};
use crate::buffer::{self, SlotBuffer, DEFAULT_CAPACITY};
use crate::error::{CollectionError, Result};
use crate::snapshot::Snapshot;

/// Borrowing iterator over a stack, top to bottom.
pub type Iter<'a, T> = Rev<buffer::Iter<'a, T>>;

/// A stack backed by a contiguous buffer whose top is the last occupied
/// slot. The buffer doubles when a push finds it full.
///
/// Iteration and [`equals`] go from the top down, while [`to_array`] keeps
/// the storage order, bottom first.
///
/// The stack is not synchronized. Sharing one stack between threads that
/// mutate it requires an external lock.
///
/// # Examples
///
/// ```
/// use linear_collections::prelude::*;
///
/// let mut stack = Stack::new();
/// for tag in ["a", "b", "c"] {
///     stack.push(tag).unwrap();
/// }
/// assert_eq!(stack.search(&"a"), Some(3));
/// assert_eq!(stack.to_array(), vec!["a", "b", "c"]);
///
/// assert_eq!(stack.pop(), Ok("c"));
/// assert_eq!(stack.pop(), Ok("b"));
/// assert_eq!(stack.pop(), Ok("a"));
/// assert_eq!(stack.pop(), Err(CollectionError::EmptyCollection));
/// ```
///
/// [`equals`]: StackAdt::equals
/// [`to_array`]: Collection::to_array
pub struct Stack<T> {
    buffer: SlotBuffer<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack with the default capacity of 10.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty stack with room for `capacity` elements before the
    /// first growth. A capacity of 0 is rounded up to 1.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: SlotBuffer::with_capacity(capacity),
        }
    }

    /// Number of elements the stack can hold before it has to grow.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Returns a snapshot iterator over clones of the current elements, top
    /// to bottom.
    ///
    /// The snapshot is independent of the stack: pushing or popping
    /// afterwards does not change what the iterator yields.
    pub fn iterator(&self) -> Snapshot<T>
    where
        T: Clone,
    {
        Snapshot::new(self.iter().cloned().collect())
    }
}

impl<T> Collection<T> for Stack<T> {
    type Iter<'a> = Iter<'a, T> where T: 'a;

    #[inline]
    fn size(&self) -> usize {
        self.buffer.len()
    }

    fn clear(&mut self) {
        self.buffer.clear();
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.buffer.iter().rev()
    }

    /// Copies the elements bottom to top, i.e. in the order they were pushed.
    fn to_array(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.buffer.iter().cloned().collect()
    }
}

impl<T> StackAdt<T> for Stack<T> {
    fn push(&mut self, value: impl Into<Option<T>>) -> Result<()> {
        let value = value.into().ok_or(CollectionError::InvalidArgument)?;
        self.buffer.push(value);
        Ok(())
    }

    fn pop(&mut self) -> Result<T> {
        self.buffer.pop().ok_or(CollectionError::EmptyCollection)
    }

    fn peek(&self) -> Result<&T> {
        self.buffer.last().ok_or(CollectionError::EmptyCollection)
    }

    /// Returns `true` when the stack holds as many elements as its current
    /// capacity. The next push still succeeds; it grows the buffer first.
    fn stack_overflow(&self) -> bool {
        self.buffer.is_full()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        Self {
            buffer: self.buffer.clone(),
        }
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T: Hash> Hash for Stack<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.buffer.len().hash(state);
        self.iter().for_each(|item| item.hash(state));
    }
}

/// Collecting pushes the items in order, so the last item ends up on top.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.buffer.push(item));
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for Stack<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

/// Moves the elements into a [`Snapshot`], top to bottom.
impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = Snapshot<T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut items = self.buffer.into_vec();
        items.reverse();
        Snapshot::new(items)
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
