use crate::adt::CollectionIterator;
use crate::queue::{Node, Queue};
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// A live iterator over the elements of a `Queue`, front to back.
///
/// Like the iterator of the doubly-linked list, it follows the `next` links
/// of the queue itself rather than a copy, and borrows the queue for its
/// whole life.
pub struct Iter<'a, T: 'a> {
    current: Option<NonNull<Node<T>>>,
    len: usize,
    _marker: PhantomData<&'a Queue<T>>,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(queue: &'a Queue<T>) -> Self {
        Self {
            current: queue.head,
            len: queue.len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        // SAFETY: `current` is either empty or a live node of the borrowed queue.
        let node = unsafe { &*self.current?.as_ptr() };
        self.current = node.next;
        self.len -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

impl<'a, T: 'a> CollectionIterator for Iter<'a, T> {
    fn has_next(&self) -> bool {
        self.current.is_some()
    }
}

/// An owning iterator that dequeues every element, front to back.
pub struct IntoIter<T> {
    queue: Queue<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.queue).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len, Some(self.queue.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { queue: self }
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.push_back(item));
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for Queue<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}

unsafe impl<T: Sync> Sync for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::queue::Queue;

    #[test]
    fn queue_iterators() {
        let queue = Queue::from_iter(0..4);
        let iter = (&queue).into_iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(format!("{:?}", iter), "[0, 1, 2, 3]");
        assert_eq!(Vec::from_iter(iter.copied()), vec![0, 1, 2, 3]);

        let mut owned = queue.into_iter();
        assert_eq!(owned.next(), Some(0));
        assert_eq!(owned.len(), 3);
        assert_eq!(Vec::from_iter(owned), vec![1, 2, 3]);
    }

    #[test]
    fn queue_extend_by_reference() {
        let mut queue = Queue::from_iter([1]);
        queue.extend(&[2, 3]);
        queue.extend([4].iter());
        assert_eq!(Vec::from_iter(queue), vec![1, 2, 3, 4]);
    }
}
