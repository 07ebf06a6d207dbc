use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::adt::{Collection, ListAdt};
use crate::error::{CollectionError, Result};

use self::cursor::CursorMut;
use self::iterator::{IntoIter, Iter};

pub mod cursor;
pub mod iterator;

mod algorithms;

/// A doubly-linked list with owned nodes and `head`/`tail` end pointers.
///
/// Inserting or removing at either end takes *O*(1) time. Any other index is
/// reached by walking from the nearer end, so accessing position `i` takes
/// *O*(min(*i*, *n* - *i*)) time.
///
/// # Memory Layout
///
/// ```text
///               ┌──────────┐     ┌──────────┐             ┌──────────┐
///   head ─────→ │   next   │ ──→ │   next   │ ──→ ┄┄ ──→  │   next   │ ──→ ∅
///         ∅ ←── │   prev   │ ←── │   prev   │ ←── ┄┄ ←──  │   prev   │
///               │ element  │     │ element  │             │ element  │
///               └──────────┘     └──────────┘             └──────────┘
///                  Node 0           Node 1                 Node n - 1 ←── tail
/// ```
/// Every node is allocated on the heap and owned by the list through the
/// chain starting at `head`; `prev` links and `tail` never own anything.
/// The list keeps these invariants:
/// - `head.prev` and `tail.next` are empty;
/// - the list is empty if and only if both `head` and `tail` are empty;
/// - following `next` from `head` reaches exactly `len` nodes, the last of
///   which is `tail`.
///
/// # Iteration
///
/// Unlike the array-backed collections, the list iterates over its live
/// nodes instead of a snapshot. A plain [`Iter`] borrows the list, so the
/// list cannot be changed while it is alive; to change the list in the
/// middle of a walk and see the change, use a [`CursorMut`].
///
/// The list is not synchronized. Sharing one list between threads that
/// mutate it requires an external lock.
pub struct DoublyLinkedList<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    /// the length of the list
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

pub(crate) struct Node<T> {
    pub(crate) next: Option<NonNull<Node<T>>>,
    pub(crate) prev: Option<NonNull<Node<T>>>,
    pub(crate) element: T,
}

// private methods
impl<T> DoublyLinkedList<T> {
    pub(crate) fn head_node(&self) -> Option<NonNull<Node<T>>> {
        self.head
    }
    pub(crate) fn tail_node(&self) -> Option<NonNull<Node<T>>> {
        self.tail
    }

    /// Find the node at `index`, walking from `head` if the index lies in the
    /// front half and from `tail` otherwise. Returns `None` if `index >= len`.
    pub(crate) fn node_at(&self, index: usize) -> Option<NonNull<Node<T>>> {
        if index >= self.len {
            return None;
        }
        // SAFETY: `index < len`, so every step below stays inside the chain.
        unsafe {
            if index < self.len / 2 {
                let mut node = self.head?;
                for _ in 0..index {
                    node = node.as_ref().next?;
                }
                Some(node)
            } else {
                let mut node = self.tail?;
                for _ in index + 1..self.len {
                    node = node.as_ref().prev?;
                }
                Some(node)
            }
        }
    }

    /// Attach a new node holding `element` right before `next`, or at the tail
    /// if `next` is `None`, and return the new node.
    ///
    /// It is unsafe because it does not check whether `next` belongs to the
    /// list. If it does not, this function call will make the list ill-formed.
    pub(crate) unsafe fn attach_before(
        &mut self,
        next: Option<NonNull<Node<T>>>,
        element: T,
    ) -> NonNull<Node<T>> {
        let prev = match next {
            Some(next) => next.as_ref().prev,
            None => self.tail,
        };
        let node = Node::new_detached(element, prev, next);
        match prev {
            Some(mut prev) => prev.as_mut().next = Some(node),
            None => self.head = Some(node),
        }
        match next {
            Some(mut next) => next.as_mut().prev = Some(node),
            None => self.tail = Some(node),
        }
        self.len += 1;
        #[cfg(debug_assertions)]
        self.assert_boundaries();
        node
    }

    /// Detach `node` from the list, splicing its neighbors together, and
    /// return it as a box.
    ///
    /// It is unsafe because it does not check whether `node` belongs to the
    /// list. If it does not, this function call will make the list ill-formed.
    pub(crate) unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        let node = Box::from_raw(node.as_ptr());
        match node.prev {
            Some(mut prev) => prev.as_mut().next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(mut next) => next.as_mut().prev = node.prev,
            None => self.tail = node.prev,
        }
        self.len -= 1;
        #[cfg(debug_assertions)]
        self.assert_boundaries();
        node
    }

    /// Walk forward from `head` and return the first node whose element
    /// satisfies `pred`.
    fn find_node(&self, mut pred: impl FnMut(&T) -> bool) -> Option<NonNull<Node<T>>> {
        let mut current = self.head;
        while let Some(node) = current {
            // SAFETY: `node` is reachable from `head`, so it is a live node.
            let node_ref = unsafe { node.as_ref() };
            if pred(&node_ref.element) {
                return Some(node);
            }
            current = node_ref.next;
        }
        None
    }

    #[cfg(debug_assertions)]
    fn assert_boundaries(&self) {
        assert_eq!(self.head.is_none(), self.len == 0);
        assert_eq!(self.tail.is_none(), self.len == 0);
        // SAFETY: `head` and `tail` are live nodes of the list.
        unsafe {
            if let Some(head) = self.head {
                assert!(head.as_ref().prev.is_none());
            }
            if let Some(tail) = self.tail {
                assert!(tail.as_ref().next.is_none());
            }
        }
    }
}

impl<T> DoublyLinkedList<T> {
    /// Create an empty `DoublyLinkedList`
    ///
    /// # Examples
    /// ```
    /// use linear_collections::DoublyLinkedList;
    /// let list: DoublyLinkedList<u32> = DoublyLinkedList::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_collections::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        // SAFETY: `head` is either empty or a live node owned by the list.
        self.head.map(|node| unsafe { &(*node.as_ptr()).element })
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_collections::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Some(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        // SAFETY: `tail` is either empty or a live node owned by the list.
        self.tail.map(|node| unsafe { &(*node.as_ptr()).element })
    }

    /// Adds an element first in the list.
    ///
    /// This operation should compute in *O*(1) time.
    pub fn push_front(&mut self, elt: T) {
        // SAFETY: `head` belongs to the list.
        unsafe { self.attach_before(self.head, elt) };
    }

    /// Appends an element to the back of the list.
    ///
    /// This operation should compute in *O*(1) time.
    pub fn push_back(&mut self, elt: T) {
        // SAFETY: attaching before "nothing" appends at the tail.
        unsafe { self.attach_before(None, elt) };
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_collections::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        // SAFETY: `head` belongs to the list.
        self.head
            .map(|node| unsafe { self.detach_node(node) }.element)
    }

    /// Removes the last element and returns it, or `None` if the list is
    /// empty.
    pub fn pop_back(&mut self) -> Option<T> {
        // SAFETY: `tail` belongs to the list.
        self.tail
            .map(|node| unsafe { self.detach_node(node) }.element)
    }

    /// Returns the live iterator of the list. Same as [`Collection::iter`].
    ///
    /// The iterator walks the nodes of the list as they are when each step is
    /// taken; no copy is made.
    ///
    /// The iterator borrows the list, so the list cannot be changed until the
    /// iterator is dropped:
    ///
    /// ```compile_fail
    /// use linear_collections::prelude::*;
    ///
    /// let mut list: DoublyLinkedList<_> = [1, 2, 3].into_iter().collect();
    /// let mut iter = list.iterator();
    ///
    /// // Won't compile, because list is already borrowed immutably.
    /// list.add(4).unwrap();
    /// println!("{:?}", iter.next());
    /// ```
    ///
    /// Use [`DoublyLinkedList::cursor_mut`] to change the list during a walk.
    #[inline]
    pub fn iterator(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a cursor at the node with given index, reached from the
    /// nearer end.
    ///
    /// By convention, the cursor is past the last element if `at == len`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfRange`] if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_collections::prelude::*;
    ///
    /// let mut list: DoublyLinkedList<_> = (0..5).collect();
    /// let cursor = list.cursor_mut(3).unwrap();
    /// assert_eq!(cursor.current(), Some(&3));
    ///
    /// let cursor = list.cursor_mut(5).unwrap();
    /// assert_eq!(cursor.current(), None);
    ///
    /// assert!(list.cursor_mut(6).is_err());
    /// ```
    pub fn cursor_mut(&mut self, at: usize) -> Result<CursorMut<'_, T>> {
        if at > self.len {
            return Err(CollectionError::out_of_range(at, self.len));
        }
        let current = self.node_at(at);
        Ok(CursorMut::new(at, current, self))
    }

    /// Provides a cursor at the first element.
    #[inline]
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        let current = self.head;
        CursorMut::new(0, current, self)
    }
}

impl<T> Collection<T> for DoublyLinkedList<T> {
    type Iter<'a> = Iter<'a, T> where T: 'a;

    /// Returns the length of the list.
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    fn size(&self) -> usize {
        self.len
    }

    /// Removes all elements from the list.
    ///
    /// This operation should compute in *O*(*n*) time.
    fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        Iter::new(self)
    }
}

impl<T> ListAdt<T> for DoublyLinkedList<T> {
    /// Inserts `value` at `index`. Inserting at 0 or at `size()` takes
    /// *O*(1) time; any other position is reached from the nearer end.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_collections::prelude::*;
    ///
    /// let mut list = DoublyLinkedList::new();
    /// list.add_at(0, "p").unwrap();
    /// list.add_at(1, "q").unwrap();
    /// list.add_at(1, "r").unwrap();
    /// assert_eq!(list.to_array(), vec!["p", "r", "q"]);
    /// ```
    fn add_at(&mut self, index: usize, value: impl Into<Option<T>>) -> Result<()> {
        let value = value.into().ok_or(CollectionError::InvalidArgument)?;
        if index > self.len {
            return Err(CollectionError::out_of_range(index, self.len));
        }
        let next = self.node_at(index);
        // SAFETY: `next` is either a node of the list or `None` for the tail.
        unsafe { self.attach_before(next, value) };
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<T> {
        let node = self
            .node_at(index)
            .ok_or_else(|| CollectionError::out_of_range(index, self.len))?;
        // SAFETY: `node_at` only returns nodes of the list.
        Ok(unsafe { self.detach_node(node) }.element)
    }

    fn remove<'v>(&mut self, value: impl Into<Option<&'v T>>) -> Result<Option<T>>
    where
        T: PartialEq + 'v,
    {
        let value = value.into().ok_or(CollectionError::InvalidArgument)?;
        Ok(self
            .find_node(|element| element == value)
            // SAFETY: `find_node` only returns nodes of the list.
            .map(|node| unsafe { self.detach_node(node) }.element))
    }

    fn get(&self, index: usize) -> Result<&T> {
        let node = self
            .node_at(index)
            .ok_or_else(|| CollectionError::out_of_range(index, self.len))?;
        // SAFETY: the node is live for as long as `self` is borrowed.
        Ok(unsafe { &(*node.as_ptr()).element })
    }

    fn set(&mut self, index: usize, value: impl Into<Option<T>>) -> Result<T> {
        let node = self
            .node_at(index)
            .ok_or_else(|| CollectionError::out_of_range(index, self.len))?;
        let value = value.into().ok_or(CollectionError::InvalidArgument)?;
        // SAFETY: the node is live and `self` is borrowed mutably.
        Ok(std::mem::replace(
            unsafe { &mut (*node.as_ptr()).element },
            value,
        ))
    }
}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    /// Allocate a node on the heap and leak it; the list that links it in
    /// becomes its owner.
    pub(crate) fn new_detached(
        element: T,
        prev: Option<NonNull<Node<T>>>,
        next: Option<NonNull<Node<T>>>,
    ) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node {
            next,
            prev,
            element,
        })))
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send> Send for DoublyLinkedList<T> {}

unsafe impl<T: Sync> Sync for DoublyLinkedList<T> {}

// Ensure that the list and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: DoublyLinkedList<&'static str>) -> DoublyLinkedList<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}
