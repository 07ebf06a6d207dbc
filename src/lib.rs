//! This crate provides four linear collections sharing one contract: an
//! array-backed list, a doubly-linked list, a FIFO queue and a LIFO stack.
//!
//! Every collection implements [`Collection`], which gives sizes, clearing,
//! membership tests, iteration and copying out to a vector. On top of it,
//! [`ArrayList`] and [`DoublyLinkedList`] implement [`ListAdt`] (index
//! addressed access), [`Queue`] implements [`QueueAdt`] and [`Stack`]
//! implements [`StackAdt`].
//!
//! Here is a quick example showing how the collections work.
//!
//! ```
//! use linear_collections::prelude::*;
//!
//! let mut list = ArrayList::new();
//! list.add("a").unwrap();
//! list.add_at(0, "b").unwrap();
//! assert_eq!(list.to_array(), vec!["b", "a"]);
//!
//! let mut stack = Stack::new();
//! for item in list.iterator() {
//!     stack.push(item).unwrap();
//! }
//! assert_eq!(stack.pop(), Ok("a"));
//!
//! let mut queue = Queue::new();
//! queue.enqueue(stack.pop().unwrap()).unwrap();
//! assert_eq!(queue.dequeue(), Ok("b"));
//! assert_eq!(queue.dequeue(), Err(CollectionError::EmptyCollection));
//! ```
//!
//! # Absent Values
//!
//! No collection stores an absent value. Operations taking a value accept
//! `impl Into<Option<T>>`, so both `list.add(1)` and `list.add(None)` type
//! check, and the latter fails with [`CollectionError::InvalidArgument`].
//! Callers that need optional elements store `Option<T>` explicitly.
//!
//! # Memory Layout
//!
//! [`ArrayList`] and [`Stack`] keep their elements in one contiguous buffer
//! of slots, which doubles when an insertion finds it full:
//! ```text
//!    len = 3                 capacity = 4
//!    ╔═══════╤═══════╤═══════╤═══════╗
//!    ║ elem0 │ elem1 │ elem2 │ empty ║
//!    ╚═══════╧═══════╧═══════╧═══════╝
//!     bottom                   ↑ the top of a stack is elem2
//! ```
//! Slots at or beyond `len` are always empty, so removed elements are
//! dropped right away.
//!
//! [`DoublyLinkedList`] owns a chain of heap nodes linked both ways, with
//! `head` and `tail` pointing at its ends:
//! ```text
//!    ╔═══════════╗           ╔═══════════╗           ╔═══════════╗
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ║   next    ║ ──→ ∅
//!    ╟───────────╢           ╟───────────╢           ╟───────────╢
//! ∅ ←║   prev    ║ ←──────── ║   prev    ║ ←──────── ║   prev    ║
//!    ╟───────────╢           ╟───────────╢           ╟───────────╢
//!    ║ payload T ║           ║ payload T ║           ║ payload T ║
//!    ╚═══════════╝           ╚═══════════╝           ╚═══════════╝
//!         ↑ head                                          ↑ tail
//! ```
//! [`Queue`] uses the same layout without the `prev` links: nodes leave at
//! `head` and join at `tail`.
//!
//! The `next` links own the nodes while `prev` and `tail` are plain back
//! references, so dropping a collection frees each node exactly once.
//!
//! # Iteration
//!
//! The array-backed collections hand out *snapshots* from `iterator()`:
//! the iterator owns clones of the elements, and changing the collection
//! afterwards does not affect it. The linked collections hand out *live*
//! iterators that borrow the collection, so it cannot change while one is
//! in use. [`CursorMut`] is the live view that may edit a
//! [`DoublyLinkedList`] mid-walk and observe its own edits.
//!
//! Every `iterator()` implements [`CollectionIterator`], whose
//! [`try_next`] reports [`CollectionError::NoMoreElements`] past the end.
//!
//! ## Examples
//!
//! ```
//! use linear_collections::prelude::*;
//!
//! let mut list: DoublyLinkedList<_> = [1, 2, 3].into_iter().collect();
//! let mut iter = list.iterator();
//! assert_eq!(iter.try_next(), Ok(&1));
//! assert_eq!(iter.next_back(), Some(&3));
//! assert_eq!(iter.try_next(), Ok(&2));
//! assert_eq!(iter.try_next(), Err(CollectionError::NoMoreElements));
//!
//! let mut cursor = list.cursor_front_mut();
//! cursor.insert(0); // becomes [0, 1, 2, 3], points to 1
//! assert_eq!(cursor.current(), Some(&1));
//! assert_eq!(list.to_array(), vec![0, 1, 2, 3]);
//! ```
//!
//! # Thread Safety
//!
//! Collections are `Send` and `Sync` when their elements are, but no
//! operation synchronizes internally. Mutating one collection from several
//! threads requires an external lock such as a `Mutex`.
//!
//! # Features
//!
//! - `tag-validator` (default): the [`tag_validator`] module, a line-based
//!   checker of XML-like tag nesting built on [`Stack`] and [`Queue`].
//!
//! [`try_next`]: CollectionIterator::try_next
//! [`CursorMut`]: crate::doubly_linked_list::cursor::CursorMut
//! [`tag_validator`]: crate::tag_validator

pub mod adt;
pub mod array_list;
pub mod doubly_linked_list;
pub mod error;
pub mod queue;
pub mod snapshot;
pub mod stack;
#[cfg(feature = "tag-validator")]
pub mod tag_validator;

mod buffer;

#[doc(inline)]
pub use adt::{Collection, CollectionIterator, ListAdt, QueueAdt, StackAdt};
#[doc(inline)]
pub use array_list::ArrayList;
pub use buffer::DEFAULT_CAPACITY;
#[doc(inline)]
pub use doubly_linked_list::DoublyLinkedList;
#[doc(inline)]
pub use error::{CollectionError, Result};
#[doc(inline)]
pub use queue::Queue;
#[doc(inline)]
pub use snapshot::Snapshot;
#[doc(inline)]
pub use stack::Stack;

/// Everything needed to use the collections, in one import.
///
/// ```
/// use linear_collections::prelude::*;
///
/// let queue: Queue<u8> = Queue::new();
/// assert!(queue.is_empty());
/// ```
pub mod prelude {
    pub use crate::adt::{Collection, CollectionIterator, ListAdt, QueueAdt, StackAdt};
    pub use crate::array_list::ArrayList;
    pub use crate::doubly_linked_list::DoublyLinkedList;
    pub use crate::error::CollectionError;
    pub use crate::queue::Queue;
    pub use crate::stack::Stack;
}
