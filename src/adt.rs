//! The contract shared by every collection of the crate.
//!
//! All four containers implement [`Collection`]; the index-addressed ones add
//! [`ListAdt`], the FIFO one [`QueueAdt`] and the LIFO one [`StackAdt`].
//!
//! Values enter through `impl Into<Option<T>>`, so a caller may pass an
//! element directly or `None` to stand for "no value". Mutating operations
//! and [`Collection::contains`] reject `None` with
//! [`CollectionError::InvalidArgument`]; `search` treats it as "not found".

use crate::error::{CollectionError, Result};

/// Operations every collection supports.
pub trait Collection<T> {
    /// Borrowing iterator in the collection's own order: front to back for
    /// lists and queues, top to bottom for stacks.
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Number of elements.
    fn size(&self) -> usize;

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Removes all elements. Clearing an empty collection is a no-op.
    fn clear(&mut self);

    /// Iterates over the elements by reference.
    fn iter(&self) -> Self::Iter<'_>;

    /// Returns `true` if any element equals `value`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidArgument`] if `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_collections::prelude::*;
    ///
    /// let mut list: ArrayList<i32> = ArrayList::new();
    /// list.add(3).unwrap();
    /// assert_eq!(list.contains(&3), Ok(true));
    /// assert_eq!(list.contains(&4), Ok(false));
    /// assert_eq!(list.contains(None), Err(CollectionError::InvalidArgument));
    /// ```
    fn contains<'v>(&self, value: impl Into<Option<&'v T>>) -> Result<bool>
    where
        T: PartialEq + 'v,
    {
        let value = value.into().ok_or(CollectionError::InvalidArgument)?;
        Ok(self.iter().any(|item| item == value))
    }

    /// Copies the elements into a new dense vector of exactly `size()`
    /// elements.
    fn to_array(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Copies the elements into `holder` if it has room, otherwise into a
    /// fresh vector of exactly `size()` slots.
    ///
    /// When `holder` has more slots than elements, the slot right after the
    /// last element is set to `None`; slots beyond it are left as they were.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_collections::prelude::*;
    ///
    /// let list: ArrayList<_> = [1, 2].into_iter().collect();
    ///
    /// let holder = list.to_array_into(vec![Some(9); 4]);
    /// assert_eq!(holder, vec![Some(1), Some(2), None, Some(9)]);
    ///
    /// let fresh = list.to_array_into(vec![Some(9)]);
    /// assert_eq!(fresh, vec![Some(1), Some(2)]);
    /// ```
    fn to_array_into(&self, mut holder: Vec<Option<T>>) -> Vec<Option<T>>
    where
        T: Clone,
    {
        let len = self.size();
        let items = self.to_array();
        if holder.len() < len {
            return items.into_iter().map(Some).collect();
        }
        for (slot, item) in holder.iter_mut().zip(items) {
            *slot = Some(item);
        }
        if let Some(slot) = holder.get_mut(len) {
            *slot = None;
        }
        holder
    }
}

/// An index-addressed sequence.
pub trait ListAdt<T>: Collection<T> {
    /// Appends `value` at the end.
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidArgument`] if `value` is `None`.
    fn add(&mut self, value: impl Into<Option<T>>) -> Result<()> {
        let len = self.size();
        self.add_at(len, value)
    }

    /// Inserts `value` at `index`, shifting the elements at `index..` one
    /// position towards the end.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::IndexOutOfRange`] if `index > size()`;
    /// - [`CollectionError::InvalidArgument`] if `value` is `None`.
    fn add_at(&mut self, index: usize, value: impl Into<Option<T>>) -> Result<()>;

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfRange`] if `index >= size()`.
    fn remove_at(&mut self, index: usize) -> Result<T>;

    /// Removes the first element equal to `value` and returns it, or returns
    /// `Ok(None)` if no element matched.
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidArgument`] if `value` is `None`.
    fn remove<'v>(&mut self, value: impl Into<Option<&'v T>>) -> Result<Option<T>>
    where
        T: PartialEq + 'v;

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfRange`] if `index >= size()`.
    fn get(&self, index: usize) -> Result<&T>;

    /// Replaces the element at `index` and returns the old one.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::IndexOutOfRange`] if `index >= size()`;
    /// - [`CollectionError::InvalidArgument`] if `value` is `None`.
    fn set(&mut self, index: usize, value: impl Into<Option<T>>) -> Result<T>;

    /// Appends clones of every element of `other`, keeping their order.
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidArgument`] if `other` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_collections::prelude::*;
    ///
    /// let mut list: ArrayList<_> = [1, 2].into_iter().collect();
    /// let other: DoublyLinkedList<_> = [3, 4].into_iter().collect();
    /// list.add_all(&other).unwrap();
    /// assert_eq!(list.to_array(), vec![1, 2, 3, 4]);
    ///
    /// let missing: Option<&DoublyLinkedList<i32>> = None;
    /// assert_eq!(list.add_all(missing), Err(CollectionError::InvalidArgument));
    /// ```
    fn add_all<'l, L>(&mut self, other: impl Into<Option<&'l L>>) -> Result<()>
    where
        L: ListAdt<T> + ?Sized + 'l,
        T: Clone,
    {
        let other = other.into().ok_or(CollectionError::InvalidArgument)?;
        for item in other.to_array() {
            self.add(item)?;
        }
        Ok(())
    }
}

/// A first-in first-out queue.
pub trait QueueAdt<T>: Collection<T> {
    /// Appends `value` at the back.
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidArgument`] if `value` is `None`.
    fn enqueue(&mut self, value: impl Into<Option<T>>) -> Result<()>;

    /// Removes and returns the front element.
    ///
    /// # Errors
    ///
    /// [`CollectionError::EmptyCollection`] if the queue is empty.
    fn dequeue(&mut self) -> Result<T>;

    /// Returns the front element without removing it.
    ///
    /// # Errors
    ///
    /// [`CollectionError::EmptyCollection`] if the queue is empty.
    fn peek(&self) -> Result<&T>;

    /// Removes all elements.
    fn dequeue_all(&mut self) {
        self.clear();
    }

    /// Returns the 1-based distance of the first match from the front, or
    /// `None` if nothing matches.
    ///
    /// Unlike [`Collection::contains`], an absent `value` is not an error
    /// here: it simply matches nothing.
    fn search<'v>(&self, value: impl Into<Option<&'v T>>) -> Option<usize>
    where
        T: PartialEq + 'v,
    {
        let value = value.into()?;
        self.iter().position(|item| item == value).map(|pos| pos + 1)
    }

    /// Structural equality: same size and pairwise equal elements, front to
    /// back. An absent `other` is never equal.
    fn equals<'q, Q>(&self, other: impl Into<Option<&'q Q>>) -> bool
    where
        Q: QueueAdt<T> + ?Sized + 'q,
        T: PartialEq,
    {
        match other.into() {
            Some(other) => other.size() == self.size() && self.iter().eq(other.iter()),
            None => false,
        }
    }

    /// Whether the queue cannot accept more elements.
    fn is_full(&self) -> bool {
        false
    }
}

/// A last-in first-out stack.
pub trait StackAdt<T>: Collection<T> {
    /// Puts `value` on top.
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidArgument`] if `value` is `None`.
    fn push(&mut self, value: impl Into<Option<T>>) -> Result<()>;

    /// Removes and returns the top element.
    ///
    /// # Errors
    ///
    /// [`CollectionError::EmptyCollection`] if the stack is empty.
    fn pop(&mut self) -> Result<T>;

    /// Returns the top element without removing it.
    ///
    /// # Errors
    ///
    /// [`CollectionError::EmptyCollection`] if the stack is empty.
    fn peek(&self) -> Result<&T>;

    /// Returns the 1-based distance of the nearest match from the top (the
    /// top itself is at distance 1), or `None` if nothing matches.
    ///
    /// An absent `value` matches nothing rather than being an error.
    fn search<'v>(&self, value: impl Into<Option<&'v T>>) -> Option<usize>
    where
        T: PartialEq + 'v,
    {
        let value = value.into()?;
        self.iter().position(|item| item == value).map(|pos| pos + 1)
    }

    /// Structural equality: same size and pairwise equal elements, top to
    /// bottom. An absent `other` is never equal.
    fn equals<'s, S>(&self, other: impl Into<Option<&'s S>>) -> bool
    where
        S: StackAdt<T> + ?Sized + 's,
        T: PartialEq,
    {
        match other.into() {
            Some(other) => other.size() == self.size() && self.iter().eq(other.iter()),
            None => false,
        }
    }

    /// Returns `true` exactly when the next push has to grow the storage.
    fn stack_overflow(&self) -> bool;
}

/// A one-shot forward iterator that can report exhaustion as an error.
///
/// [`Iterator::next`] keeps returning `None` once the iterator is exhausted;
/// [`CollectionIterator::try_next`] returns
/// [`CollectionError::NoMoreElements`] instead.
pub trait CollectionIterator: Iterator {
    /// Returns `true` if another call to `next` would yield an element.
    fn has_next(&self) -> bool;

    /// Advances the iterator.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NoMoreElements`] once every element was yielded.
    fn try_next(&mut self) -> Result<Self::Item> {
        self.next().ok_or(CollectionError::NoMoreElements)
    }
}
