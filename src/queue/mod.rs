use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::adt::{Collection, QueueAdt};
use crate::error::{CollectionError, Result};

use self::iterator::Iter;

pub mod iterator;

/// An unbounded first-in first-out queue over a singly-linked chain.
///
/// The queue owns its nodes through `head`; `tail` is a plain back
/// reference to the last node, so that both [`enqueue`] and [`dequeue`]
/// take *O*(1) time. The queue is empty if and only if both `head` and
/// `tail` are empty, and `tail.next` is always empty.
///
/// Iteration walks the live chain, like [`DoublyLinkedList`]. Unlike the
/// list, the queue has no mutating cursor: its iterator borrows the queue,
/// so the queue cannot be changed in the middle of a walk, and the only
/// way to change it is through [`enqueue`] and [`dequeue`] between walks.
///
/// The queue is not synchronized; sharing one queue between threads that
/// mutate it requires an external lock.
///
/// # Examples
///
/// ```
/// use linear_collections::prelude::*;
///
/// let mut queue = Queue::new();
/// queue.enqueue("x").unwrap();
/// queue.enqueue("y").unwrap();
/// assert_eq!(queue.search(&"y"), Some(2));
///
/// assert_eq!(queue.dequeue(), Ok("x"));
/// assert_eq!(queue.peek(), Ok(&"y"));
/// assert_eq!(queue.dequeue(), Ok("y"));
/// assert_eq!(queue.dequeue(), Err(CollectionError::EmptyCollection));
/// ```
///
/// [`enqueue`]: QueueAdt::enqueue
/// [`dequeue`]: QueueAdt::dequeue
/// [`DoublyLinkedList`]: crate::DoublyLinkedList
pub struct Queue<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

pub(crate) struct Node<T> {
    pub(crate) next: Option<NonNull<Node<T>>>,
    pub(crate) element: T,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    #[inline]
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the live iterator of the queue, front to back. Same as
    /// [`Collection::iter`].
    ///
    /// The iterator borrows the queue, so the queue cannot be changed until
    /// the iterator is dropped:
    ///
    /// ```compile_fail
    /// use linear_collections::prelude::*;
    ///
    /// let mut queue: Queue<_> = [1, 2].into_iter().collect();
    /// let mut iter = queue.iterator();
    ///
    /// // Won't compile, because queue is already borrowed immutably.
    /// queue.enqueue(3).unwrap();
    /// println!("{:?}", iter.next());
    /// ```
    #[inline]
    pub fn iterator(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    fn push_back(&mut self, element: T) {
        let node = NonNull::from(Box::leak(Box::new(Node {
            next: None,
            element,
        })));
        match self.tail {
            // SAFETY: `tail` is the live last node of the queue.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        // SAFETY: `head` is a live node owned by the queue; it is unlinked
        // right away, so the box is the only owner left.
        let node = unsafe { Box::from_raw(head.as_ptr()) };
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Some(node.element)
    }
}

impl<T> Collection<T> for Queue<T> {
    type Iter<'a> = Iter<'a, T> where T: 'a;

    #[inline]
    fn size(&self) -> usize {
        self.len
    }

    /// Drops every node. Same as [`QueueAdt::dequeue_all`].
    fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        Iter::new(self)
    }
}

impl<T> QueueAdt<T> for Queue<T> {
    fn enqueue(&mut self, value: impl Into<Option<T>>) -> Result<()> {
        let value = value.into().ok_or(CollectionError::InvalidArgument)?;
        self.push_back(value);
        Ok(())
    }

    fn dequeue(&mut self) -> Result<T> {
        self.pop_front().ok_or(CollectionError::EmptyCollection)
    }

    fn peek(&self) -> Result<&T> {
        self.head
            // SAFETY: `head` is a live node for as long as `self` is borrowed.
            .map(|node| unsafe { &(*node.as_ptr()).element })
            .ok_or(CollectionError::EmptyCollection)
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Queue<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T: Hash> Hash for Queue<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        self.iter().for_each(|item| item.hash(state));
    }
}

impl<T> Drop for Queue<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send> Send for Queue<T> {}

unsafe impl<T: Sync> Sync for Queue<T> {}

#[cfg(test)]
mod tests {
    use crate::adt::{Collection, CollectionIterator, QueueAdt};
    use crate::error::CollectionError;
    use crate::queue::Queue;
    use std::cell::RefCell;

    #[test]
    fn queue_fifo_order() {
        let mut queue = Queue::new();
        for i in 0..5 {
            queue.enqueue(i).unwrap();
        }
        assert_eq!(queue.size(), 5);
        assert_eq!(queue.peek(), Ok(&0));
        for i in 0..5 {
            assert_eq!(queue.dequeue(), Ok(i));
        }
        assert!(queue.is_empty());
        assert!(queue.head.is_none());
        assert!(queue.tail.is_none());
        assert_eq!(queue.dequeue(), Err(CollectionError::EmptyCollection));
        assert_eq!(queue.peek(), Err(CollectionError::EmptyCollection));
    }

    #[test]
    fn queue_reuse_after_empty() {
        let mut queue = Queue::new();
        queue.enqueue('a').unwrap();
        assert_eq!(queue.dequeue(), Ok('a'));
        queue.enqueue('b').unwrap();
        queue.enqueue('c').unwrap();
        assert_eq!(queue.to_array(), vec!['b', 'c']);
    }

    #[test]
    fn queue_absent_values() {
        let mut queue: Queue<&str> = Queue::new();
        assert_eq!(queue.enqueue(None), Err(CollectionError::InvalidArgument));
        queue.enqueue("a").unwrap();
        assert_eq!(queue.contains(None), Err(CollectionError::InvalidArgument));
        assert_eq!(queue.contains(&"a"), Ok(true));
        // `search` reports "not found" instead of rejecting an absent value.
        assert_eq!(queue.search(None), None);
    }

    #[test]
    fn queue_search() {
        let queue = Queue::from_iter(["a", "b", "c", "b"]);
        assert_eq!(queue.search(&"a"), Some(1));
        assert_eq!(queue.search(&"b"), Some(2));
        assert_eq!(queue.search(&"c"), Some(3));
        assert_eq!(queue.search(&"z"), None);
    }

    #[test]
    fn queue_equals() {
        let a = Queue::from_iter([1, 2, 3]);
        let b = Queue::from_iter([1, 2, 3]);
        let c = Queue::from_iter([1, 2]);
        let d = Queue::from_iter([1, 2, 4]);
        assert!(a.equals(&b));
        assert!(!a.equals(&c));
        assert!(!a.equals(&d));
        assert!(!a.equals(None::<&Queue<i32>>));
        assert_eq!(a, b);
    }

    #[test]
    fn queue_dequeue_all() {
        let mut queue = Queue::from_iter(0..3);
        queue.dequeue_all();
        assert_eq!(queue.size(), 0);
        queue.dequeue_all();
        assert_eq!(queue.size(), 0);
        assert!(!queue.is_full());
        queue.enqueue(7).unwrap();
        assert_eq!(queue.peek(), Ok(&7));
    }

    #[test]
    fn queue_live_iterator() {
        let queue = Queue::from_iter([1, 2]);
        let mut iter = queue.iterator();
        assert!(iter.has_next());
        assert_eq!(iter.try_next(), Ok(&1));
        assert_eq!(iter.try_next(), Ok(&2));
        assert!(!iter.has_next());
        assert_eq!(iter.try_next(), Err(CollectionError::NoMoreElements));
    }

    #[test]
    fn queue_to_array_into() {
        let queue = Queue::from_iter([1, 2]);
        assert_eq!(
            queue.to_array_into(vec![Some(0); 3]),
            vec![Some(1), Some(2), None]
        );
        assert_eq!(queue.to_array_into(vec![Some(0)]), vec![Some(1), Some(2)]);
    }

    #[test]
    fn queue_drop() {
        struct DropChecker<'a> {
            value: u8,
            dropped: &'a RefCell<Vec<u8>>,
        }
        impl Drop for DropChecker<'_> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::new());
        let mut queue = Queue::new();
        for value in 1..=3 {
            queue.push_back(DropChecker {
                value,
                dropped: &dropped,
            });
        }
        drop(queue);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }
}
