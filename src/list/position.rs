use crate::list::{Link, Node};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// The identity of a node in a `List`, detached from any borrow of the list.
///
/// A `Position` addresses [`List::insert`] and [`List::erase`], and can be
/// turned back into a cursor with [`List::cursor_at`]. Two positions are equal
/// if and only if they refer to the same node; the elements are never compared.
///
/// A position stays valid across insertions and erasures of other nodes. It
/// becomes stale once its own node is erased, and using a stale position is a
/// caller error. The list operations look a position up on the ring before
/// using it, so a position of another list, or a stale one whose node has not
/// been replaced, makes them panic. That check is best-effort: once the list
/// allocates a new node at the freed address, a stale position silently
/// refers to that new node.
///
/// [`List::insert`]: crate::List::insert
/// [`List::erase`]: crate::List::erase
/// [`List::cursor_at`]: crate::List::cursor_at
pub struct Position<T> {
    link: Link,
    _marker: PhantomData<*const Node<T>>,
}

impl<T> Position<T> {
    pub(crate) fn new(link: Link) -> Self {
        let _marker = PhantomData;
        Self { link, _marker }
    }

    pub(crate) fn link(self) -> Link {
        self.link
    }
}

impl<T> Clone for Position<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Position<T> {}

impl<T> PartialEq for Position<T> {
    fn eq(&self, other: &Self) -> bool {
        self.link == other.link
    }
}

impl<T> Eq for Position<T> {}

impl<T> Hash for Position<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.link.hash(state);
    }
}

impl<T> fmt::Debug for Position<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Position").field(&self.link).finish()
    }
}
