use std::fmt::{Debug, Formatter};
use std::iter::FusedIterator;
use std::slice;

/// Capacity of a freshly created array-backed collection.
pub const DEFAULT_CAPACITY: usize = 10;

/// Contiguous storage with an explicit capacity, shared by `ArrayList` and
/// `Stack`.
///
/// The buffer is a boxed slice of `capacity` slots. Slots `0..len` are
/// always `Some`, slots `len..` are always `None`, so a removed element is
/// never retained by the buffer. When a push or an insertion finds the
/// buffer full, the capacity is doubled.
pub(crate) struct SlotBuffer<T> {
    slots: Box<[Option<T>]>,
    len: usize,
}

/// A borrowing iterator over the elements of an array-backed collection,
/// in storage order.
pub struct Iter<'a, T: 'a> {
    slots: slice::Iter<'a, Option<T>>,
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> SlotBuffer<T> {
    /// Creates an empty buffer with room for `capacity` elements (at least one,
    /// so that doubling always makes progress).
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: empty_slots(capacity.max(1)),
            len: 0,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    fn grow(&mut self) {
        let mut slots = empty_slots(self.capacity() * 2);
        for (new, old) in slots.iter_mut().zip(self.slots.iter_mut()) {
            *new = old.take();
        }
        self.slots = slots;
    }

    fn reserve_one(&mut self) {
        if self.is_full() {
            self.grow();
        }
        debug_assert!(self.len < self.capacity());
    }

    pub(crate) fn push(&mut self, value: T) {
        self.reserve_one();
        self.slots[self.len] = Some(value);
        self.len += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        self.slots[self.len].take()
    }

    /// Inserts `value` at `index <= len`, shifting `index..len` one slot to
    /// the right.
    pub(crate) fn insert(&mut self, index: usize, value: T) {
        debug_assert!(index <= self.len);
        self.reserve_one();
        // `slots[len]` is the empty slot that ends up at `index`.
        self.slots[index..=self.len].rotate_right(1);
        self.slots[index] = Some(value);
        self.len += 1;
    }

    /// Removes the element at `index < len`, shifting `index + 1..len` one
    /// slot to the left. The vacated trailing slot is left empty.
    pub(crate) fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let removed = self.slots[index].take();
        self.slots[index..self.len].rotate_left(1);
        self.len -= 1;
        removed
    }

    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        self.slots[..self.len].get(index)?.as_ref()
    }

    /// Puts `value` in the live slot `index` and returns the previous element.
    pub(crate) fn replace(&mut self, index: usize, value: T) -> Option<T> {
        self.slots[..self.len].get_mut(index)?.replace(value)
    }

    pub(crate) fn last(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|index| self.get(index))
    }

    pub(crate) fn position(&self, pred: impl FnMut(&T) -> bool) -> Option<usize> {
        self.iter().position(pred)
    }

    pub(crate) fn clear(&mut self) {
        self.slots[..self.len].iter_mut().for_each(|slot| *slot = None);
        self.len = 0;
    }

    /// Moves the elements out, in storage order.
    pub(crate) fn into_vec(self) -> Vec<T> {
        self.slots.into_vec().into_iter().flatten().collect()
    }

    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: self.slots[..self.len].iter(),
        }
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        // Live slots are never empty, so this never stops early.
        self.slots.next()?.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back()?.as_ref()
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

impl<'a, T: Debug + 'a> Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Iter")
            .field(&self.slots.as_slice())
            .finish()
    }
}

impl<T: Clone> Clone for SlotBuffer<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            len: self.len,
        }
    }
}

impl<T: Debug> Debug for SlotBuffer<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::SlotBuffer;

    #[test]
    fn buffer_doubles_when_full() {
        let mut buffer = SlotBuffer::with_capacity(2);
        buffer.push(1);
        buffer.push(2);
        assert!(buffer.is_full());
        assert_eq!(buffer.capacity(), 2);
        buffer.push(3);
        assert_eq!(buffer.capacity(), 4);
        assert_eq!(buffer.len(), 3);
        assert_eq!(Vec::from_iter(buffer.iter().copied()), vec![1, 2, 3]);
    }

    #[test]
    fn buffer_zero_capacity_still_grows() {
        let mut buffer = SlotBuffer::with_capacity(0);
        assert_eq!(buffer.capacity(), 1);
        buffer.push('a');
        buffer.push('b');
        assert_eq!(buffer.capacity(), 2);
    }

    #[test]
    fn buffer_insert_and_remove_shift() {
        let mut buffer = SlotBuffer::with_capacity(3);
        buffer.push(0);
        buffer.push(2);
        buffer.insert(1, 1);
        buffer.insert(3, 3);
        buffer.insert(0, -1);
        assert_eq!(Vec::from_iter(buffer.iter().copied()), vec![-1, 0, 1, 2, 3]);
        assert_eq!(buffer.capacity(), 6);

        assert_eq!(buffer.remove(0), Some(-1));
        assert_eq!(buffer.remove(3), Some(3));
        assert_eq!(buffer.remove(3), None);
        assert_eq!(Vec::from_iter(buffer.iter().copied()), vec![0, 1, 2]);
        assert!(buffer.slots[3..].iter().all(Option::is_none));
    }

    #[test]
    fn buffer_iter_clones_without_cloneable_elements() {
        #[derive(Debug, PartialEq)]
        struct Opaque(u8);

        let mut buffer = SlotBuffer::with_capacity(2);
        buffer.push(Opaque(1));
        buffer.push(Opaque(2));
        let mut iter = buffer.iter();
        assert_eq!(iter.next(), Some(&Opaque(1)));
        let rest = iter.clone();
        assert_eq!(iter.next(), Some(&Opaque(2)));
        assert_eq!(Vec::from_iter(rest), vec![&Opaque(2)]);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn buffer_clears_vacated_slots() {
        let mut buffer = SlotBuffer::with_capacity(4);
        buffer.push(String::from("a"));
        buffer.push(String::from("b"));
        assert_eq!(buffer.pop().as_deref(), Some("b"));
        assert!(buffer.slots[1].is_none());
        buffer.clear();
        assert!(buffer.slots.iter().all(Option::is_none));
        assert_eq!(buffer.pop(), None);
        assert_eq!(buffer.last(), None);
    }
}
