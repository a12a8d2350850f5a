//! This crate provides a list of owned nodes linked by a single forward
//! pointer and bounded by two sentinel nodes, with bidirectional cursors and
//! positional insertion and erasure.
//!
//! The [`List`] moves forward in constant time. Nodes do not know their
//! predecessor, so moving backward, and inserting or erasing at a position
//! (which must relink the predecessor), scan the list from its head and take
//! *O*(*n*) time.
//!
//! A short tour:
//!
//! ```
//! use ring_list::List;
//!
//! let mut list: List<&str> = ["red", "blue"].iter().copied().collect();
//!
//! // A cursor that can edit: insert before "blue", then step past it.
//! let mut cursor = list.cursor_begin_mut();
//! cursor.move_next().unwrap();
//! cursor.insert("green");
//! assert_eq!(cursor.current(), Some(&"blue"));
//! cursor.move_next().unwrap();
//! assert!(cursor.is_end());
//!
//! // Stepping back from the end scans from the head.
//! assert_eq!(cursor.remove(), None);
//! cursor.move_prev().unwrap();
//! assert_eq!(cursor.remove(), Some("blue"));
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), ["red", "green"]);
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!    ┌─────────────────────────────────────────────────────────────────────────┐
//!    ↓                                                                         │
//! ┌───────────┐     ╔═══════════╗     ╔═══════════╗              ┌───────────┐ │
//! │   next    │ ──→ ║   next    ║ ──→ ║   next    ║ ──→ ┄┄ ────→ │   next    │ ┘
//! ├───────────┤     ╟───────────╢     ╟───────────╢              ├───────────┤
//! ┊No payload ┊     ║ payload T ║     ║ payload T ║              ┊No payload ┊
//! └╌╌╌╌╌╌╌╌╌╌╌┘     ╚═══════════╝     ╚═══════════╝              └╌╌╌╌╌╌╌╌╌╌╌┘
//!  Head sentinel        Node 0            Node 1                 Tail sentinel
//!       ↑                                                             ↑
//! ╔═══════════╗                                                       │
//! ║   head    ║ ──────┘                                               │
//! ╟───────────╢                                                       │
//! ║   tail    ║ ──────────────────────────────────────────────────────┘
//! ╟───────────╢
//! ║    len    ║
//! ╚═══════════╝
//!     List
//! ```
//! The `List` contains:
//! - a pointer `head` to the head sentinel;
//! - a pointer `tail` to the tail sentinel;
//! - a length field `len` indicating the number of elements.
//!
//! Each element node of the list `List<T>` is allocated on heap, and contains
//! the `next` pointer to its successor (the tail sentinel for the last one)
//! and the payload `T`. The sentinels have *NO* payload.
//!
//! The `next` pointer of the tail sentinel always points back to the head
//! sentinel, so the ring is closed and no pointer is ever null. That link is
//! structural only: the list owns every node, and the sentinels are released
//! when the list is dropped.
//!
//! # Positions and Cursors
//!
//! A [`Position`] is the identity of a node, detached from any borrow of the
//! list. It addresses [`List::insert`] and [`List::erase`], and stays valid
//! until its own node is erased.
//!
//! The cursors [`Cursor`] and [`CursorMut`] borrow the list and move over it.
//! In a list with length *n* there are *n* + 1 valid locations for a cursor,
//! the last one being the tail sentinel (the end position). Both cursors share
//! the same traversal; [`CursorMut`] adds element writes and structural edits,
//! and can always be used as a [`Cursor`].
//!
//! ## Examples
//!
//! ```
//! use ring_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter(['a', 'c']);
//!
//! let mut cursor = list.cursor_end();
//! cursor.move_prev().unwrap(); // a backward step scans from the head
//! let c = cursor.position();
//!
//! let b = list.insert(c, 'b');
//! assert_eq!(Vec::from_iter(list.iter().copied()), vec!['a', 'b', 'c']);
//!
//! assert_eq!(list.erase(b), c);
//! assert_eq!(Vec::from_iter(list), vec!['a', 'c']);
//! ```
//!
//! # Iteration
//!
//! [`Iter`] and [`IterMut`] walk `begin..end` once and stop (they never wrap
//! around through the sentinels). They are double-ended, but every step from
//! the back pays a scan.
//!
//! ```
//! use ring_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter(1..=3);
//! for item in list.iter_mut() {
//!     *item *= 10;
//! }
//! let mut iter = list.iter();
//! assert_eq!(iter.next_back(), Some(&30));
//! assert_eq!(iter.collect::<Vec<_>>(), [&10, &20]);
//! assert_eq!(list.into_iter().rev().collect::<Vec<_>>(), [30, 20, 10]);
//! ```
//!
//! [`List`]: crate::List
//! [`Position`]: crate::Position
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`Cursor`]: crate::list::cursor::Cursor
//! [`CursorMut`]: crate::list::cursor::CursorMut
//! [`List::insert`]: crate::List::insert
//! [`List::erase`]: crate::List::erase

#[doc(inline)]
pub use list::cursor::{Cursor, CursorError, CursorMut};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::position::Position;
#[doc(inline)]
pub use list::List;

pub mod demo;
pub mod experiments;
pub mod list;
