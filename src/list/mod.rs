use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use log::trace;

use crate::list::cursor::{Cursor, CursorMut};
use crate::list::position::Position;
use crate::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;
pub mod position;

mod algorithms;

/// The `List` is a sequence of owned nodes linked by a single forward pointer,
/// bounded by a head sentinel and a tail sentinel that close it into a ring.
///
/// Moving forward is *O*(1). Since no node stores its predecessor, every
/// backward step (and therefore every positional [`insert`] or [`erase`],
/// which must relink the predecessor) scans the ring from the head sentinel
/// and takes *O*(*n*) time.
///
/// The `List` contains:
/// - a pointer `head` to the head sentinel, whose `next` is the first element
///   (or the tail sentinel if the list is empty);
/// - a pointer `tail` to the tail sentinel, whose `next` is always `head`;
/// - a length field `len` indicating the number of element nodes.
///
/// # Naming Conventions
///
/// - `begin..end`: the half-open range of element nodes, where `end` is the
///   tail sentinel;
/// - `front`/`back`: the first/last element node.
///
/// [`insert`]: List::insert
/// [`erase`]: List::erase
pub struct List<T> {
    head: Link,
    tail: Link,
    /// the number of element nodes
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

/// A node of the ring.
///
/// Sentinels are allocated as `Node<Erased>` and carry no element; element
/// nodes are allocated as `Node<T>`. Links are always typed as
/// `Node<Erased>`, which only exposes the `next` field shared by both.
#[repr(C)]
pub(crate) struct Node<T> {
    pub(crate) next: Link,
    pub(crate) element: T,
}

pub(crate) struct Erased;

pub(crate) type Link = NonNull<Node<Erased>>;

/// Reads the successor of `link`.
///
/// # Safety
///
/// `link` must point to a live node (sentinel or element) of a list.
#[inline]
pub(crate) unsafe fn next_of(link: Link) -> Link {
    (*link.as_ptr()).next
}

/// # Safety
///
/// `link` must point to a live node of a list.
#[inline]
unsafe fn set_next(link: Link, next: Link) {
    (*link.as_ptr()).next = next;
}

/// # Safety
///
/// `link` must point to a live element node (never a sentinel) holding a `T`,
/// and the returned reference must not outlive that node.
#[inline]
pub(crate) unsafe fn element<'a, T>(link: Link) -> &'a T {
    &(*link.cast::<Node<T>>().as_ptr()).element
}

/// # Safety
///
/// Same as [`element`], and no other reference to the element may be alive.
#[inline]
pub(crate) unsafe fn element_mut<'a, T>(link: Link) -> &'a mut T {
    &mut (*link.cast::<Node<T>>().as_ptr()).element
}

// private methods
impl<T> List<T> {
    pub(crate) fn tail_node(&self) -> Link {
        self.tail
    }
    pub(crate) fn front_node(&self) -> Link {
        // SAFETY: `head` is live as long as the list is.
        unsafe { next_of(self.head) }
    }

    /// Find the node whose successor is `target`, scanning forward from the
    /// head sentinel. Returns `None` if `target` is the head sentinel or is
    /// not on this ring at all.
    ///
    /// This is the only way to step backward, so it costs *O*(*n*).
    pub(crate) fn find_prev(&self, target: Link) -> Option<Link> {
        if target == self.head {
            return None;
        }
        let mut prev = self.head;
        loop {
            // SAFETY: only nodes reachable from `head` are visited, and the ring
            // is closed, so every visited node is live.
            let next = unsafe { next_of(prev) };
            if next == target {
                return Some(prev);
            }
            if next == self.head {
                return None;
            }
            prev = next;
        }
    }

    /// Find the element node right before `target`, or `None` if `target` is
    /// the first position (or not on this ring).
    pub(crate) fn find_prev_element(&self, target: Link) -> Option<Link> {
        self.find_prev(target).filter(|&prev| prev != self.head)
    }

    /// Attach a detached node right after `prev`.
    ///
    /// It is unsafe because it does not check whether `prev` belongs to the
    /// list, or whether `prev` is the tail sentinel.
    unsafe fn attach_after(&mut self, prev: Link, node: Link) {
        debug_assert!(prev != self.tail, "Cannot attach after the tail sentinel");
        set_next(node, next_of(prev));
        set_next(prev, node);
        self.len += 1;
        #[cfg(debug_assertions)]
        self.assert_ring_closed();
    }

    /// Detach the element node at `node` and return it as a box.
    ///
    /// # Panics
    ///
    /// Panics if `node` is the tail sentinel, or if it is not on this ring.
    fn detach(&mut self, node: Link) -> Box<Node<T>> {
        assert!(node != self.tail, "Cannot erase at the end of the list");
        let prev = self
            .find_prev(node)
            .expect("Cannot erase at a position outside of the list");
        // SAFETY: `prev` and `node` are adjacent nodes of this ring, and `node`
        // is neither sentinel, so it was allocated by `Node::new_detached`.
        unsafe {
            set_next(prev, next_of(node));
            self.len -= 1;
            #[cfg(debug_assertions)]
            self.assert_ring_closed();
            Box::from_raw(node.cast::<Node<T>>().as_ptr())
        }
    }

    #[cfg(debug_assertions)]
    fn assert_ring_closed(&self) {
        // SAFETY: `tail` is live as long as the list is.
        assert_eq!(unsafe { next_of(self.tail) }, self.head, "The ring is not closed");
    }
}

impl<T> List<T> {
    /// Create an empty `List`, made of its two sentinels only.
    ///
    /// # Examples
    /// ```
    /// use ring_list::List;
    /// let list: List<u32> = List::new();
    /// assert_eq!(list.begin(), list.end());
    /// ```
    #[inline]
    pub fn new() -> Self {
        let head = new_sentinel();
        let tail = new_sentinel();
        // SAFETY: both sentinels were just allocated.
        unsafe {
            set_next(head, tail);
            set_next(tail, head);
        }
        let _marker = PhantomData;
        Self {
            head,
            tail,
            len: 0,
            _marker,
        }
    }

    /// Returns `true` if the list holds no element, that is, if the head
    /// sentinel links straight to the tail sentinel. *O*(1).
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_back('a');
    /// assert!(!list.is_empty());
    /// assert_ne!(list.begin(), list.end());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements. The count is kept up to date by every
    /// insertion and erasure, so this is *O*(1).
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(0..4);
    /// assert_eq!(list.len(), 4);
    ///
    /// list.erase(list.begin());
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the position of the first element, or [`end`](List::end) if the
    /// list is empty.
    #[inline]
    pub fn begin(&self) -> Position<T> {
        Position::new(self.front_node())
    }

    /// Returns the position of the tail sentinel, one past the last element.
    #[inline]
    pub fn end(&self) -> Position<T> {
        Position::new(self.tail)
    }

    /// Drops every element, front to back. Both sentinels are kept, so the
    /// list stays usable and [`end`](List::end) is unchanged.
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(["x", "y"]);
    /// let end = list.end();
    ///
    /// list.clear();
    /// assert!(list.is_empty());
    /// assert_eq!(list.end(), end);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        trace!("clearing list of {} elements", self.len);
        while self.pop_front().is_some() {}
    }

    /// Returns the first element, or `None` on an empty list.
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// assert_eq!(List::<u8>::new().front(), None);
    /// assert_eq!(List::from_iter([7, 8]).front(), Some(&7));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.cursor_begin().current()
    }

    /// Mutable counterpart of [`front`](List::front).
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.cursor_begin_mut().into_current_mut()
    }

    /// Returns the last element, or `None` on an empty list.
    ///
    /// The last element is the one before the tail sentinel, which is only
    /// found by scanning from the head: *O*(*n*).
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// assert_eq!(List::<u8>::new().back(), None);
    /// assert_eq!(List::from_iter([7, 8]).back(), Some(&8));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.cursor_end().previous()
    }

    /// Mutable counterpart of [`back`](List::back), with the same scan.
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2]);
    /// *list.back_mut().unwrap() += 40;
    /// *list.front_mut().unwrap() -= 1;
    /// assert_eq!(Vec::from_iter(list), vec![0, 42]);
    /// ```
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.cursor_end_mut().into_previous_mut()
    }

    /// Inserts `element` right before `pos`, and returns the position of the
    /// new node. All other positions stay valid.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time: the predecessor of `pos`
    /// is found by scanning from the head sentinel.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not found on this ring, for instance a position of
    /// another list. See [`Position`] for stale positions, which are a caller
    /// error that is only detected on a best-effort basis.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 3]);
    /// let mut cursor = list.cursor_begin();
    /// cursor.move_next().unwrap();
    /// let pos = cursor.position();
    ///
    /// let inserted = list.insert(pos, 2);
    /// assert_eq!(list.cursor_at(inserted).current(), Some(&2));
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3]);
    /// ```
    pub fn insert(&mut self, pos: Position<T>, element: T) -> Position<T> {
        let prev = self
            .find_prev(pos.link())
            .expect("Cannot insert at a position outside of the list");
        let node = Node::new_detached(element);
        // SAFETY: `prev` is on this ring and is not the tail sentinel, since
        // the tail sentinel's successor is the head sentinel.
        unsafe { self.attach_after(prev, node) };
        trace!("inserted {:p}, len = {}", node, self.len);
        Position::new(node)
    }

    /// Removes and drops the element at `pos`, and returns the position of its
    /// successor. Only positions of the erased node become invalid.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is [`end`](List::end), or is not found on this ring.
    /// As for [`insert`](List::insert), passing a stale position is a caller
    /// error that may go undetected.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let next = list.erase(list.begin());
    /// assert_eq!(next, list.begin());
    /// assert_eq!(Vec::from_iter(list), vec![2, 3]);
    /// ```
    pub fn erase(&mut self, pos: Position<T>) -> Position<T> {
        let (_element, next) = self.erase_element(pos);
        next
    }

    /// Unlinks the node at `pos` and hands back its element together with the
    /// position of its successor. Every removal goes through here.
    pub(crate) fn erase_element(&mut self, pos: Position<T>) -> (T, Position<T>) {
        let node = self.detach(pos.link());
        let next = Position::new(node.next);
        trace!("erased {:p}, len = {}", pos.link(), self.len);
        (node.into_element(), next)
    }

    /// Erases every element in `from..to`, and returns `to`.
    ///
    /// This is exactly a loop of [`erase`](List::erase), so it should compute
    /// in *O*(*n* * *k*) time for *k* erased elements.
    ///
    /// # Panics
    ///
    /// Panics if `to` cannot be reached from `from` without passing the end of
    /// the list, or if `from` does not belong to the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3, 4]);
    /// let mut cursor = list.cursor_begin();
    /// cursor.seek_forward(3).unwrap();
    /// let to = cursor.position();
    ///
    /// assert_eq!(list.erase_range(list.begin(), to), to);
    /// assert_eq!(Vec::from_iter(list), vec![4]);
    /// ```
    pub fn erase_range(&mut self, from: Position<T>, to: Position<T>) -> Position<T> {
        let mut pos = from;
        while pos != to {
            pos = self.erase(pos);
        }
        to
    }

    /// Inserts `elt` before the first element. The predecessor of the first
    /// position is the head sentinel, which the scan finds at once: *O*(1).
    pub fn push_front(&mut self, elt: T) {
        self.insert(self.begin(), elt);
    }

    /// Removes the first element and returns it, or `None` on an empty list.
    /// *O*(1), like [`push_front`](List::push_front).
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_front("b");
    /// list.push_front("a");
    ///
    /// assert_eq!(list.pop_front(), Some("a"));
    /// assert_eq!(list.pop_front(), Some("b"));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let (element, _) = self.erase_element(self.begin());
        Some(element)
    }

    /// Inserts `elt` before the tail sentinel. The scan for the node linking to
    /// the tail sentinel walks the whole list: *O*(*n*).
    pub fn push_back(&mut self, elt: T) {
        self.insert(self.end(), elt);
    }

    /// Removes the last element and returns it, or `None` on an empty list.
    ///
    /// One scan finds the last element, and detaching it scans again for its
    /// predecessor, so this is *O*(*n*).
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(2);
    /// list.push_front(0);
    ///
    /// assert_eq!(list.pop_back(), Some(2));
    /// assert_eq!(list.pop_back(), Some(1));
    /// assert_eq!(list.pop_back(), Some(0));
    /// assert_eq!(list.pop_back(), None);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        let back = Position::new(self.find_prev_element(self.tail)?);
        let (element, _) = self.erase_element(back);
        Some(element)
    }

    /// Takes all elements out of the list, leaving `self` as a freshly
    /// initialized empty list with new sentinels.
    ///
    /// The returned list owns the old sentinels and nodes; no element is
    /// copied or moved.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let taken = list.take();
    ///
    /// assert!(list.is_empty());
    /// assert_eq!(list.begin(), list.end());
    /// assert_eq!(Vec::from_iter(taken), vec![1, 2, 3]);
    /// ```
    pub fn take(&mut self) -> Self {
        trace!("taking list of {} elements", self.len);
        mem::take(self)
    }

    /// Provides a cursor at `pos`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time, since `pos` is checked
    /// to belong to the list.
    ///
    /// # Panics
    ///
    /// Panics if `pos` does not belong to the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.cursor_at(list.begin()).current(), Some(&1));
    /// assert_eq!(list.cursor_at(list.end()).current(), None);
    /// ```
    pub fn cursor_at(&self, pos: Position<T>) -> Cursor<'_, T> {
        assert!(
            self.find_prev(pos.link()).is_some(),
            "Cannot create cursor at a position outside of the list"
        );
        Cursor::new(self, pos.link())
    }

    /// Provides a cursor at the first node.
    ///
    /// The cursor is at the tail sentinel if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let cursor = list.cursor_begin();
    /// assert_eq!(cursor.current(), Some(&1));
    /// ```
    pub fn cursor_begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.front_node())
    }

    /// Provides a cursor at the tail sentinel.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let cursor = list.cursor_end();
    /// assert_eq!(cursor.current(), None);
    /// assert_eq!(cursor.previous(), Some(&3));
    /// ```
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.tail)
    }

    /// Provides a cursor with editing operations at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` does not belong to the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let pos = list.begin();
    /// let mut cursor = list.cursor_mut_at(pos);
    ///
    /// if let Some(x) = cursor.current_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.current(), Some(&5));
    /// ```
    pub fn cursor_mut_at(&mut self, pos: Position<T>) -> CursorMut<'_, T> {
        assert!(
            self.find_prev(pos.link()).is_some(),
            "Cannot create cursor at a position outside of the list"
        );
        CursorMut::new(self, pos.link())
    }

    /// Provides a cursor with editing operations at the first node.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_begin_mut();
    ///
    /// assert_eq!(cursor.remove(), Some(1));
    /// assert_eq!(cursor.current(), Some(&2));
    /// ```
    pub fn cursor_begin_mut(&mut self) -> CursorMut<'_, T> {
        let front = self.front_node();
        CursorMut::new(self, front)
    }

    /// Provides a cursor with editing operations at the tail sentinel.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_end_mut();
    ///
    /// if let Some(x) = cursor.previous_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.previous(), Some(&15));
    /// ```
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        let tail = self.tail;
        CursorMut::new(self, tail)
    }

    /// Iterates over `begin..end` by shared reference.
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter(1..=4);
    /// assert_eq!(list.iter().sum::<i32>(), 10);
    /// assert_eq!(list.iter().rev().next(), Some(&4));
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Iterates over `begin..end` by mutable reference.
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(vec![String::from("a"), String::from("b")]);
    /// list.iter_mut().for_each(|s| s.push('!'));
    /// assert_eq!(list.front().map(String::as_str), Some("a!"));
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    /// Create a detached node with given element. Its `next` is dangling until
    /// it is attached.
    pub(crate) fn new_detached(element: T) -> Link {
        let next = NonNull::dangling();
        NonNull::from(Box::leak(Box::new(Node { next, element }))).cast()
    }

    pub(crate) fn into_element(self: Box<Self>) -> T {
        self.element
    }
}

fn new_sentinel() -> Link {
    let next = NonNull::dangling();
    NonNull::from(Box::leak(Box::new(Node {
        next,
        element: Erased,
    })))
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
        // SAFETY: both sentinels were leaked by `new_sentinel` and are owned by
        // this list only; no element node refers to them any more.
        unsafe {
            drop(Box::from_raw(self.head.as_ptr()));
            drop(Box::from_raw(self.tail.as_ptr()));
        }
    }
}

unsafe impl<T: Send> Send for List<T> {}

unsafe impl<T: Sync> Sync for List<T> {}

// Ensure that `List` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
impl<T> List<T> {
    /// Walk the whole ring and check the structural invariants.
    pub(crate) fn check_invariants(&self) {
        unsafe {
            assert_eq!(next_of(self.tail), self.head, "tail.next must be head");
            let mut count = 0;
            let mut node = next_of(self.head);
            while node != self.tail {
                assert_ne!(node, self.head, "head reached before tail");
                count += 1;
                node = next_of(node);
            }
            assert_eq!(count, self.len, "len must match the element nodes");
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use std::cell::RefCell;
    use std::fmt::Debug;
    use std::iter::FromIterator;
    use std::panic::{self, AssertUnwindSafe};

    #[derive(Debug)]
    struct DropChecker<'a, T: Copy> {
        value: T,
        dropped: &'a RefCell<Vec<T>>,
    }
    impl<'a, T: Copy> DropChecker<'a, T> {
        fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
            Self { value, dropped }
        }
    }
    impl<'a, T: Copy> Drop for DropChecker<'a, T> {
        fn drop(&mut self) {
            self.dropped.borrow_mut().push(self.value);
        }
    }

    fn list_eq<T, I>(list: &List<T>, expected: I)
    where
        T: Debug + Clone + Eq,
        I: IntoIterator<Item = T>,
    {
        list.check_invariants();
        assert_eq!(
            Vec::from_iter(list.iter().cloned()),
            Vec::from_iter(expected)
        );
    }

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        assert_eq!(list.begin(), list.end());
        list.check_invariants();
        list.push_back(1);
        assert!(!list.is_empty());
        assert_ne!(list.begin(), list.end());
        assert_eq!(list.pop_back(), Some(1));
        assert!(list.is_empty());
        list.check_invariants();
    }

    #[test]
    fn list_drop() {
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        list.push_back(DropChecker::new(1, &dropped));
        list.push_back(DropChecker::new(2, &dropped));
        list.push_back(DropChecker::new(3, &dropped));
        list.push_back(DropChecker::new(4, &dropped));

        // erasing drops exactly the erased element
        let second = list.erase(list.begin());
        assert_eq!(dropped.borrow().as_slice(), &[1]);
        assert_eq!(list.cursor_at(second).current().map(|d| d.value), Some(2));

        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn list_removals_hand_back_elements() {
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::from_iter((1..=5).map(|i| DropChecker::new(i, &dropped)));

        let front = list.pop_front().unwrap();
        let back = list.pop_back().unwrap();
        let mut cursor = list.cursor_begin_mut();
        let removed = cursor.remove().unwrap();
        assert_eq!(cursor.current().map(|d| d.value), Some(3));

        // popped and removed elements are moved out, not dropped
        assert!(dropped.borrow().is_empty());
        assert_eq!((front.value, back.value, removed.value), (1, 5, 2));
        assert_eq!(list.len(), 2);
        list.check_invariants();

        list.erase(list.begin());
        assert_eq!(dropped.borrow().as_slice(), &[3]);

        drop((front, back, removed));
        assert_eq!(dropped.borrow().len(), 4);
        drop(list);
        assert_eq!(dropped.borrow().len(), 5);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);

        list.push_back(1);
        assert_eq!(list.back(), Some(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        list.push_front(1);
        list.push_front(2);
        list.push_back(3);
        list.check_invariants();
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_back(), Some(3));

        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert!(list.is_empty());
        list.check_invariants();
    }

    #[test]
    fn list_push_back_keeps_order() {
        let mut list = List::new();
        for i in 0..10 {
            list.push_back(i);
            assert_eq!(list.len(), i + 1);
        }
        list_eq(&list, 0..10);
    }

    #[test]
    fn list_insert_and_erase() {
        let mut list = List::from_iter(0..10);

        let mut cursor = list.cursor_begin();
        cursor.seek_forward(5).unwrap();
        let at_five = cursor.position();

        let inserted = list.insert(at_five, 10);
        assert_eq!(list.cursor_at(inserted).current(), Some(&10));
        let mut cursor = list.cursor_at(inserted);
        cursor.move_next().unwrap();
        assert_eq!(cursor.position(), at_five);
        list_eq(&list, (0..5).chain(Some(10)).chain(5..10));

        // positions elsewhere survive the insertion
        assert_eq!(list.cursor_at(at_five).current(), Some(&5));

        let after = list.erase(inserted);
        assert_eq!(after, at_five);
        assert_eq!(list.len(), 10);
        list_eq(&list, 0..10);

        let inserted = list.insert(list.begin(), 11);
        assert_eq!(list.begin(), inserted);
        assert_eq!(list.front(), Some(&11));

        let inserted = list.insert(list.end(), 12);
        assert_eq!(list.back(), Some(&12));
        assert_eq!(list.erase(inserted), list.end());
        list_eq(&list, Some(11).into_iter().chain(0..10));
    }

    #[test]
    fn list_erase_range() {
        let mut list = List::from_iter(0..6);
        let mut cursor = list.cursor_begin();
        cursor.seek_forward(1).unwrap();
        let from = cursor.position();
        cursor.seek_forward(3).unwrap();
        let to = cursor.position();

        assert_eq!(list.erase_range(from, to), to);
        list_eq(&list, vec![0, 4, 5]);

        assert_eq!(list.erase_range(to, to), to);
        assert_eq!(list.len(), 3);

        assert_eq!(list.erase_range(list.begin(), list.end()), list.end());
        assert!(list.is_empty());
        list.check_invariants();
    }

    #[test]
    #[should_panic(expected = "Cannot erase at the end of the list")]
    fn list_erase_end() {
        let mut list = List::from_iter(0..3);
        list.erase(list.end());
    }

    #[test]
    #[should_panic(expected = "outside of the list")]
    fn list_erase_foreign_position() {
        let mut list = List::from_iter(0..3);
        let other = List::from_iter(0..3);
        list.erase(other.begin());
    }

    #[test]
    #[should_panic(expected = "outside of the list")]
    fn list_insert_foreign_position() {
        let mut list = List::from_iter(0..3);
        let other = List::from_iter(0..3);
        list.insert(other.end(), 4);
    }

    #[test]
    fn list_stale_position_after_reuse() {
        let mut list = List::from_iter([1, 2, 3]);
        let stale = list.begin();
        list.erase(stale);
        list.push_back(99);

        let mut cursor = list.cursor_end();
        cursor.move_prev().unwrap();
        if cursor.position() == stale {
            // the freed node was reallocated, so the stale position names it
            assert_eq!(list.cursor_at(stale).current(), Some(&99));
            assert_eq!(list.erase(stale), list.end());
            list_eq(&list, vec![2, 3]);
        } else {
            let result = panic::catch_unwind(AssertUnwindSafe(|| list.erase(stale)));
            assert!(result.is_err());
            list_eq(&list, vec![2, 3, 99]);
        }
    }

    #[test]
    fn list_take() {
        let mut list = List::from_iter(0..5);
        let old_end = list.end();
        let taken = list.take();

        assert!(list.is_empty());
        assert_eq!(list.begin(), list.end());
        assert_ne!(list.end(), old_end);
        list.check_invariants();

        assert_eq!(taken.end(), old_end);
        list_eq(&taken, 0..5);

        list.push_back(7);
        list_eq(&list, Some(7));
    }

    #[test]
    fn list_front_and_back_mut() {
        let mut list = List::from_iter(0..3);
        *list.front_mut().unwrap() = 10;
        *list.back_mut().unwrap() = 12;
        list_eq(&list, vec![10, 1, 12]);

        let mut empty = List::<i32>::new();
        assert_eq!(empty.front_mut(), None);
        assert_eq!(empty.back_mut(), None);
    }

    #[test]
    fn list_clear() {
        let mut list = List::from_iter(0..5);
        let end = list.end();
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.end(), end);
        list.check_invariants();
    }

    mod proptests {
        use crate::list::List;
        use proptest::prelude::*;
        use std::iter::FromIterator;

        #[derive(Debug, Clone)]
        enum Op {
            PushBack(i32),
            PushFront(i32),
            PopBack,
            PopFront,
            Insert(usize, i32),
            Erase(usize),
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                any::<i32>().prop_map(Op::PushBack),
                any::<i32>().prop_map(Op::PushFront),
                Just(Op::PopBack),
                Just(Op::PopFront),
                (any::<usize>(), any::<i32>()).prop_map(|(at, v)| Op::Insert(at, v)),
                any::<usize>().prop_map(Op::Erase),
            ]
        }

        proptest! {
            #[test]
            fn push_back_matches_vec(values in proptest::collection::vec(any::<i32>(), 0..64)) {
                let mut list = List::new();
                for &v in &values {
                    list.push_back(v);
                }
                list.check_invariants();
                prop_assert_eq!(list.len(), values.len());
                prop_assert_eq!(Vec::from_iter(list.iter().copied()), values);
            }

            #[test]
            fn operations_match_vec(ops in proptest::collection::vec(op(), 0..64)) {
                let mut list = List::new();
                let mut model = Vec::new();
                for op in ops {
                    match op {
                        Op::PushBack(v) => {
                            list.push_back(v);
                            model.push(v);
                        }
                        Op::PushFront(v) => {
                            list.push_front(v);
                            model.insert(0, v);
                        }
                        Op::PopBack => {
                            prop_assert_eq!(list.pop_back(), model.pop());
                        }
                        Op::PopFront => {
                            let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                            prop_assert_eq!(list.pop_front(), expected);
                        }
                        Op::Insert(at, v) => {
                            let at = at % (model.len() + 1);
                            let mut cursor = list.cursor_begin();
                            cursor.seek_forward(at).unwrap();
                            let pos = cursor.position();
                            let inserted = list.insert(pos, v);
                            prop_assert_eq!(list.cursor_at(inserted).current(), Some(&v));
                            model.insert(at, v);
                        }
                        Op::Erase(at) => {
                            if model.is_empty() {
                                continue;
                            }
                            let at = at % model.len();
                            let mut cursor = list.cursor_begin();
                            cursor.seek_forward(at).unwrap();
                            let pos = cursor.position();
                            list.erase(pos);
                            model.remove(at);
                        }
                    }
                    list.check_invariants();
                    prop_assert_eq!(list.len(), model.len());
                }
                prop_assert_eq!(Vec::from_iter(list), model);
            }
        }
    }
}
