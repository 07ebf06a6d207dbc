use crate::adt::Collection;
use crate::doubly_linked_list::DoublyLinkedList;
use std::hash::{Hash, Hasher};

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, other: &Self) {
        let mut cursor = self.cursor_front_mut();
        for elem_other in other {
            match cursor.current_mut() {
                Some(elem) => elem.clone_from(elem_other),
                None => {
                    cursor.push_back(elem_other.clone());
                    continue;
                }
            }
            if cursor.move_next().is_err() {
                break;
            }
        }
        while cursor.remove().is_some() {}
    }
}

impl<T: Hash> Hash for DoublyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::doubly_linked_list::DoublyLinkedList;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn list_eq_and_hash() {
        let a = DoublyLinkedList::from_iter([1, 2, 3]);
        let b = DoublyLinkedList::from_iter([1, 2, 3]);
        let c = DoublyLinkedList::from_iter([1, 2]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn list_clone_from() {
        fn check(target: &[i32], source: &[i32]) {
            let mut list = DoublyLinkedList::from_iter(target.iter().copied());
            let other = DoublyLinkedList::from_iter(source.iter().copied());
            list.clone_from(&other);
            assert_eq!(list, other);
            assert_eq!(Vec::from_iter(list), source.to_vec());
        }
        check(&[1, 2, 3], &[4, 5]);
        check(&[1], &[4, 5, 6]);
        check(&[], &[7]);
        check(&[1, 2], &[]);
    }
}
