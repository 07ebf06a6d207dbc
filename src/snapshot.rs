use crate::adt::CollectionIterator;
use std::fmt;
use std::iter::FusedIterator;
use std::vec;

/// An owning iterator over a copy of a collection taken when the iterator
/// was created.
///
/// This is the iterator returned by [`ArrayList::iterator`] and
/// [`Stack::iterator`]. Because it owns its elements, the source collection
/// can be mutated freely while the snapshot is being drained, and the
/// snapshot still yields exactly the elements present at creation.
///
/// # Examples
///
/// ```
/// use linear_collections::prelude::*;
///
/// let mut list: ArrayList<_> = ['a', 'b'].into_iter().collect();
/// let mut snapshot = list.iterator();
/// list.clear();
/// list.add('z').unwrap();
///
/// assert_eq!(snapshot.try_next(), Ok('a'));
/// assert_eq!(snapshot.try_next(), Ok('b'));
/// assert_eq!(snapshot.try_next(), Err(CollectionError::NoMoreElements));
/// ```
///
/// [`ArrayList::iterator`]: crate::ArrayList::iterator
/// [`Stack::iterator`]: crate::Stack::iterator
#[derive(Clone)]
pub struct Snapshot<T> {
    items: vec::IntoIter<T>,
}

impl<T> Snapshot<T> {
    pub(crate) fn new(items: Vec<T>) -> Self {
        Self {
            items: items.into_iter(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Snapshot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Snapshot")
            .field(&self.items.as_slice())
            .finish()
    }
}

impl<T> Iterator for Snapshot<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<T> DoubleEndedIterator for Snapshot<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.items.next_back()
    }
}

impl<T> ExactSizeIterator for Snapshot<T> {}

impl<T> FusedIterator for Snapshot<T> {}

impl<T> CollectionIterator for Snapshot<T> {
    fn has_next(&self) -> bool {
        self.items.len() > 0
    }
}
