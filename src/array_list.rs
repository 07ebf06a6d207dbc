//! A growable, index-addressed sequence stored in one contiguous buffer.

use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};

use crate::adt::{Collection, ListAdt};
use crate::buffer::{SlotBuffer, DEFAULT_CAPACITY};
use crate::error::{CollectionError, Result};
use crate::snapshot::Snapshot;

pub use crate::buffer::Iter;

/// A list backed by a contiguous buffer that doubles when it runs out of
/// room.
///
/// Appending is amortized *O*(1); inserting or removing at an index shifts
/// the following elements and takes *O*(*n*); reading or replacing at an
/// index takes *O*(1).
///
/// The list is not synchronized. Sharing one list between threads that
/// mutate it requires an external lock.
///
/// # Examples
///
/// ```
/// use linear_collections::prelude::*;
///
/// let mut list = ArrayList::new();
/// list.add("b").unwrap();
/// list.add_at(0, "a").unwrap();
/// list.add("c").unwrap();
/// assert_eq!(list.to_array(), vec!["a", "b", "c"]);
///
/// assert_eq!(list.remove_at(1), Ok("b"));
/// assert_eq!(list.get(1), Ok(&"c"));
/// assert_eq!(
///     list.get(2),
///     Err(CollectionError::IndexOutOfRange { index: 2, len: 2 })
/// );
/// ```
pub struct ArrayList<T> {
    buffer: SlotBuffer<T>,
}

impl<T> ArrayList<T> {
    /// Creates an empty list with the default capacity of 10.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty list with room for `capacity` elements before the
    /// first growth. A capacity of 0 is rounded up to 1.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: SlotBuffer::with_capacity(capacity),
        }
    }

    /// Number of elements the list can hold before it has to grow.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Returns a snapshot iterator over clones of the current elements.
    ///
    /// The snapshot is independent of the list: mutating the list afterwards
    /// does not change what the iterator yields.
    ///
    /// # Examples
    ///
    /// ```
    /// use linear_collections::prelude::*;
    ///
    /// let mut list: ArrayList<_> = [1, 2, 3].into_iter().collect();
    /// let snapshot = list.iterator();
    /// list.remove_at(0).unwrap();
    /// list.add(4).unwrap();
    /// assert_eq!(snapshot.collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    pub fn iterator(&self) -> Snapshot<T>
    where
        T: Clone,
    {
        Snapshot::new(self.to_array())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.buffer.len() {
            Ok(())
        } else {
            Err(CollectionError::out_of_range(index, self.buffer.len()))
        }
    }
}

impl<T> Collection<T> for ArrayList<T> {
    type Iter<'a> = Iter<'a, T> where T: 'a;

    #[inline]
    fn size(&self) -> usize {
        self.buffer.len()
    }

    fn clear(&mut self) {
        self.buffer.clear();
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.buffer.iter()
    }
}

impl<T> ListAdt<T> for ArrayList<T> {
    fn add(&mut self, value: impl Into<Option<T>>) -> Result<()> {
        let value = value.into().ok_or(CollectionError::InvalidArgument)?;
        self.buffer.push(value);
        Ok(())
    }

    fn add_at(&mut self, index: usize, value: impl Into<Option<T>>) -> Result<()> {
        let value = value.into().ok_or(CollectionError::InvalidArgument)?;
        if index > self.buffer.len() {
            return Err(CollectionError::out_of_range(index, self.buffer.len()));
        }
        self.buffer.insert(index, value);
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;
        self.buffer
            .remove(index)
            .ok_or_else(|| CollectionError::out_of_range(index, self.buffer.len()))
    }

    fn remove<'v>(&mut self, value: impl Into<Option<&'v T>>) -> Result<Option<T>>
    where
        T: PartialEq + 'v,
    {
        let value = value.into().ok_or(CollectionError::InvalidArgument)?;
        Ok(self
            .buffer
            .position(|item| item == value)
            .and_then(|index| self.buffer.remove(index)))
    }

    fn get(&self, index: usize) -> Result<&T> {
        self.buffer
            .get(index)
            .ok_or_else(|| CollectionError::out_of_range(index, self.buffer.len()))
    }

    fn set(&mut self, index: usize, value: impl Into<Option<T>>) -> Result<T> {
        self.check_index(index)?;
        let value = value.into().ok_or(CollectionError::InvalidArgument)?;
        let len = self.buffer.len();
        self.buffer
            .replace(index, value)
            .ok_or_else(|| CollectionError::out_of_range(index, len))
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        Self {
            buffer: self.buffer.clone(),
        }
    }
}

impl<T: Debug> Debug for ArrayList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.buffer.fmt(f)
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.buffer.len() == other.buffer.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T: Hash> Hash for ArrayList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.buffer.len().hash(state);
        self.iter().for_each(|item| item.hash(state));
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = ArrayList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.buffer.push(item));
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

/// Moves the elements into a [`Snapshot`], front to back.
impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = Snapshot<T>;

    fn into_iter(self) -> Self::IntoIter {
        Snapshot::new(self.buffer.into_vec())
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::adt::{Collection, CollectionIterator, ListAdt};
    use crate::array_list::ArrayList;
    use crate::error::CollectionError;
    use std::cell::RefCell;

    #[test]
    fn list_create() {
        let mut list = ArrayList::<i32>::new();
        assert!(list.is_empty());
        assert_eq!(list.capacity(), 10);
        list.add(1).unwrap();
        assert!(!list.is_empty());
        assert_eq!(list.remove_at(0), Ok(1));
        assert!(list.is_empty());
    }

    #[test]
    fn list_rejects_absent_values() {
        let mut list: ArrayList<&str> = ArrayList::new();
        assert_eq!(list.add(None), Err(CollectionError::InvalidArgument));
        assert_eq!(list.add_at(0, None), Err(CollectionError::InvalidArgument));
        list.add("x").unwrap();
        assert_eq!(list.set(0, None), Err(CollectionError::InvalidArgument));
        assert_eq!(list.contains(None), Err(CollectionError::InvalidArgument));
        assert_eq!(list.remove(None), Err(CollectionError::InvalidArgument));
        assert_eq!(list.to_array(), vec!["x"]);
    }

    #[test]
    fn list_index_bounds() {
        let mut list: ArrayList<char> = ArrayList::new();
        assert_eq!(list.add_at(0, 'b'), Ok(()));
        assert_eq!(list.add_at(1, 'c'), Ok(()));
        assert_eq!(
            list.add_at(3, 'z'),
            Err(CollectionError::IndexOutOfRange { index: 3, len: 2 })
        );
        assert_eq!(
            list.remove_at(2),
            Err(CollectionError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            list.set(2, 'z'),
            Err(CollectionError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(list.set(0, 'a'), Ok('b'));
        assert_eq!(list.get(0), Ok(&'a'));
        assert_eq!(list.to_array(), vec!['a', 'c']);
    }

    #[test]
    fn list_insert_and_remove() {
        let mut list = ArrayList::from_iter(0..10);
        list.add_at(5, 10).unwrap();
        assert_eq!(
            list.to_array(),
            Vec::from_iter((0..5).chain(Some(10)).chain(5..10))
        );

        assert_eq!(list.remove_at(10), Ok(9));
        assert_eq!(list.remove(&10), Ok(Some(10)));
        assert_eq!(list.remove(&10), Ok(None));
        assert_eq!(list.to_array(), Vec::from_iter(0..9));
        assert_eq!(list.size(), 9);
    }

    #[test]
    fn list_remove_by_value_takes_first_match() {
        let mut list = ArrayList::from_iter(["a", "b", "a"]);
        assert_eq!(list.remove(&"a"), Ok(Some("a")));
        assert_eq!(list.to_array(), vec!["b", "a"]);
    }

    #[test]
    fn list_grows_by_doubling() {
        let mut list = ArrayList::with_capacity(2);
        for i in 0..5 {
            list.add(i).unwrap();
        }
        assert_eq!(list.capacity(), 8);
        assert_eq!(list.size(), 5);
        assert_eq!(list.to_array(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn list_add_all() {
        let mut list = ArrayList::from_iter([1, 2]);
        let other = ArrayList::from_iter([3, 4]);
        list.add_all(&other).unwrap();
        assert_eq!(list.to_array(), vec![1, 2, 3, 4]);
        assert_eq!(
            list.add_all(None::<&ArrayList<i32>>),
            Err(CollectionError::InvalidArgument)
        );
        assert_eq!(other.size(), 2);
    }

    #[test]
    fn list_snapshot_isolation() {
        let mut list = ArrayList::from_iter(["p", "q"]);
        let mut iter = list.iterator();
        list.set(0, "changed").unwrap();
        list.clear();
        assert_eq!(iter.try_next(), Ok("p"));
        assert!(iter.has_next());
        assert_eq!(iter.try_next(), Ok("q"));
        assert_eq!(iter.try_next(), Err(CollectionError::NoMoreElements));
    }

    #[test]
    fn list_to_array_into() {
        let list = ArrayList::from_iter([1, 2, 3]);
        assert_eq!(
            list.to_array_into(vec![None; 3]),
            vec![Some(1), Some(2), Some(3)]
        );
        assert_eq!(
            list.to_array_into(vec![Some(0); 5]),
            vec![Some(1), Some(2), Some(3), None, Some(0)]
        );
        assert_eq!(list.to_array_into(Vec::new()).len(), 3);
    }

    #[test]
    fn list_clear_twice() {
        let mut list = ArrayList::from_iter(0..3);
        list.clear();
        assert_eq!(list.size(), 0);
        list.clear();
        assert_eq!(list.size(), 0);
        assert!(list.is_empty());
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a> {
            value: i32,
            dropped: &'a RefCell<Vec<i32>>,
        }
        impl Drop for DropChecker<'_> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::new());
        let mut list = ArrayList::new();
        for value in 1..=3 {
            list.add(DropChecker {
                value,
                dropped: &dropped,
            })
            .unwrap();
        }
        drop(list.remove_at(1));
        assert_eq!(dropped.borrow().as_slice(), &[2]);
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[2, 1, 3]);
    }

    #[test]
    fn list_equality_and_debug() {
        let a = ArrayList::from_iter([1, 2]);
        let mut b = ArrayList::with_capacity(1);
        b.add(1).unwrap();
        b.add(2).unwrap();
        assert_eq!(a, b);
        assert_eq!(format!("{:?}", a), "[1, 2]");
        assert_eq!(a.clone().to_array(), vec![1, 2]);
        assert_eq!(Vec::from_iter(b), vec![1, 2]);
    }

    #[test]
    fn list_extend_by_reference() {
        let mut list = ArrayList::from_iter([1]);
        list.extend(&[2, 3]);
        list.extend([4].iter());
        assert_eq!(list.to_array(), vec![1, 2, 3, 4]);
    }
}
