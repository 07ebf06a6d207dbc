use crate::adt::CollectionIterator;
use crate::doubly_linked_list::{DoublyLinkedList, Node};
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// A live iterator over the elements of a `DoublyLinkedList`.
///
/// It walks the nodes of the list directly instead of a copy, using the pair
/// `front..=back` of nodes not yet yielded and their count `len`.
///
/// Though the `Iter` does not hold a reference from the list,
/// it actually *borrows* (immutably) from the list, so a phantom
/// marker of `&'a DoublyLinkedList<T>` is added to protect the list from
/// being written.
pub struct Iter<'a, T: 'a> {
    front: Option<NonNull<Node<T>>>,
    back: Option<NonNull<Node<T>>>,
    len: usize,
    _marker: PhantomData<&'a DoublyLinkedList<T>>,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a DoublyLinkedList<T>) -> Self {
        Self {
            front: list.head_node(),
            back: list.tail_node(),
            len: list.len,
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
        f.debug_tuple("Iter").field(&self.len).finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    /// Return `*front` and move `front` to `front.next`, or return `None` if
    /// every node was already yielded.
    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: `len > 0`, so `front` is a live node of the borrowed list.
        let current = unsafe { &*self.front?.as_ptr() };
        self.front = current.next;
        self.len -= 1;
        Some(&current.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
    /// Return `*back` and move `back` to `back.prev`, or return `None` if
    /// every node was already yielded.
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: `len > 0`, so `back` is a live node of the borrowed list.
        let current = unsafe { &*self.back?.as_ptr() };
        self.back = current.prev;
        self.len -= 1;
        Some(&current.element)
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

impl<'a, T: 'a> CollectionIterator for Iter<'a, T> {
    fn has_next(&self) -> bool {
        self.len > 0
    }
}

/// An owning iterator over the elements of a `DoublyLinkedList`.
///
/// This `struct` is created by the [`into_iter`] method on
/// [`DoublyLinkedList`] (provided by the `IntoIterator` trait).
///
/// [`into_iter`]: DoublyLinkedList::into_iter
pub struct IntoIter<T> {
    list: DoublyLinkedList<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("list", &self.list)
            .finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.push_back(item));
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}

unsafe impl<T: Sync> Sync for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::doubly_linked_list::DoublyLinkedList;
    use std::fmt::Debug;

    #[test]
    fn test_iter() {
        fn test_iter<T, I>(input: I, mid: usize)
        where
            T: Eq + Debug + Clone,
            I: IntoIterator<Item = T>,
        {
            let vec = Vec::from_iter(input);
            let list = DoublyLinkedList::from_iter(vec.clone());
            let len = vec.len();

            let mut iter = list.iterator();
            for (i, item) in vec.iter().enumerate() {
                assert_eq!(iter.next(), Some(item));
                assert_eq!(iter.len(), len - i - 1);
            }
            assert_eq!(iter.next(), None);
            assert_eq!(iter.next(), None);
            assert_eq!(iter.next_back(), None);

            let mut iter = list.iterator();
            for item in vec.iter().take(mid) {
                assert_eq!(iter.next(), Some(item));
            }
            let mut iter = iter.rev();
            for (i, item) in vec.iter().skip(mid).rev().enumerate() {
                assert_eq!(iter.next(), Some(item));
                assert_eq!(iter.len(), len - mid - i - 1);
            }
            assert_eq!(iter.next(), None);
            assert_eq!(iter.next_back(), None);
        }
        test_iter(0..10, 10);
        test_iter(0..10, 5);
        test_iter(0..10, 0);
        test_iter(0..2, 1);
        test_iter(0..1, 1);
        test_iter(0..1, 0);
        test_iter(0..0, 0);
    }

    #[test]
    fn test_into_iter() {
        let list = DoublyLinkedList::from_iter(0..4);
        let mut iter = list.into_iter();
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next_back(), Some(3));
        assert_eq!(iter.len(), 2);
        assert_eq!(Vec::from_iter(iter), vec![1, 2]);
    }

    #[test]
    fn test_extend() {
        let mut list: DoublyLinkedList<i32> = DoublyLinkedList::new();
        list.extend(&[1, 2]);
        list.extend(vec![3]);
        assert_eq!(Vec::from_iter(list), vec![1, 2, 3]);
    }
}
