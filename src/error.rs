use thiserror::Error;

/// The error kinds shared by every collection in this crate.
///
/// None of them is fatal: each is returned to the caller as soon as the
/// condition is detected and the collection is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum CollectionError {
    /// An absent value (`None`) was given where an element is required.
    #[error("an absent value was given where an element is required")]
    InvalidArgument,
    /// An index outside `0..len` (`0..=len` for insertion).
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// `dequeue`, `pop` or `peek` on a collection with no elements.
    #[error("the collection is empty")]
    EmptyCollection,
    /// An iterator was advanced past its last element.
    #[error("the iterator has no more elements")]
    NoMoreElements,
}

/// Result alias used by all fallible collection operations.
pub type Result<T, E = CollectionError> = std::result::Result<T, E>;

impl CollectionError {
    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        CollectionError::IndexOutOfRange { index, len }
    }
}

#[cfg(test)]
mod tests {
    use super::CollectionError;

    #[test]
    fn error_display() {
        assert_eq!(
            CollectionError::out_of_range(4, 2).to_string(),
            "index 4 is out of range for length 2"
        );
        assert_eq!(
            CollectionError::EmptyCollection.to_string(),
            "the collection is empty"
        );
    }
}
