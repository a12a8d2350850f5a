use crate::list::position::Position;
use crate::list::{element, element_mut, next_of, Link, List};
use std::fmt;
use std::ops::Deref;

/// A cursor over a `List`, generic over how the list is borrowed.
///
/// The traversal (forward and backward steps, seeking, boundary checks) is
/// written once here, for any `L` that dereferences to a `List<T>`. The two
/// instances are [`Cursor`] (shared borrow, read-only) and [`CursorMut`]
/// (exclusive borrow, which adds element writes and structural edits).
///
/// In a list with length *n*, there are *n* + 1 valid locations for the
/// cursor: the *n* elements, and the tail sentinel (the end position). A
/// cursor never rests on the head sentinel.
#[derive(Clone)]
pub struct CursorBase<L> {
    pub(crate) current: Link,
    pub(crate) list: L,
}

/// A read-only cursor over a `List`.
///
/// # Examples
///
/// Here is a simple example showing how the cursors work. (The tail sentinel
/// of the list is denoted by `#`).
/// ```
/// use ring_list::List;
/// use std::iter::FromIterator;
///
/// // Create a list: [ A B C D #]
/// let list = List::from_iter(['A', 'B', 'C', 'D']);
///
/// // Create a cursor at begin: [|A B C D #]
/// let mut cursor = list.cursor_begin();
/// assert_eq!(cursor.current(), Some(&'A'));
///
/// // Move cursor forward: [ A|B C D #]
/// assert!(cursor.move_next().is_ok());
/// assert_eq!(cursor.current(), Some(&'B'));
///
/// // Create a cursor in the end: [ A B C D|#]
/// let mut cursor = list.cursor_end();
/// assert_eq!(cursor.current(), None);
/// assert!(cursor.move_next().is_err());
///
/// // Move cursor backward, which scans from the head: [ A B C|D #]
/// assert!(cursor.move_prev().is_ok());
/// assert_eq!(cursor.current(), Some(&'D'));
/// ```
pub type Cursor<'a, T> = CursorBase<&'a List<T>>;

/// A cursor over a `List` with editing operations.
///
/// A `CursorMut` supports every operation of [`Cursor`], plus mutable access to
/// the elements and insertion/removal at the cursor. It can be viewed as a
/// `Cursor` with [`as_cursor`](CursorBase::as_cursor) or converted with
/// [`into_cursor`](CursorBase::into_cursor), but never the other way round.
///
/// # Examples
///
/// ```compile_fail
/// use ring_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut cursor = list.cursor_begin_mut();
/// println!("{:?}", list.back());
/// println!("{:?}", cursor.current());
/// ```
pub type CursorMut<'a, T> = CursorBase<&'a mut List<T>>;

/// An error returned when a cursor would move across a boundary of the list.
///
/// `steps` is the number of single steps completed before the boundary was
/// hit; the cursor stays at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorError {
    /// The cursor is at the end position and cannot move forward.
    PastEnd { steps: usize },
    /// The cursor is at the first position and cannot move backward.
    BeforeBegin { steps: usize },
}

impl CursorError {
    /// Returns the number of steps completed before the boundary.
    pub fn steps(&self) -> usize {
        match *self {
            CursorError::PastEnd { steps } | CursorError::BeforeBegin { steps } => steps,
        }
    }
}

impl fmt::Display for CursorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CursorError::PastEnd { steps } => {
                write!(f, "cannot move past the end of the list after {} steps", steps)
            }
            CursorError::BeforeBegin { steps } => write!(
                f,
                "cannot move before the beginning of the list after {} steps",
                steps
            ),
        }
    }
}

impl std::error::Error for CursorError {}

/// Compare cursors by their positions, whatever their mutability.
///
/// Cursors of distinct lists never refer to the same node, so they are never
/// equal.
///
/// # Examples
/// ```
/// use ring_list::List;
/// use std::iter::FromIterator;
///
/// let list = List::from_iter([1, 2, 3]);
/// let cursor1 = list.cursor_begin();
/// let mut cursor2 = cursor1.clone();
/// assert_eq!(cursor1, cursor2);
///
/// cursor2.move_next().unwrap();
/// assert_ne!(cursor1, cursor2);
///
/// let another_list = list.clone();
/// assert_ne!(cursor1, another_list.cursor_begin());
/// ```
impl<L, M> PartialEq<CursorBase<M>> for CursorBase<L> {
    fn eq(&self, other: &CursorBase<M>) -> bool {
        self.current == other.current
    }
}

impl<L> Eq for CursorBase<L> {}

// Traversal shared by `Cursor` and `CursorMut`.
impl<T, L> CursorBase<L>
where
    L: Deref<Target = List<T>>,
{
    /// Returns the detached position of the cursor.
    pub fn position(&self) -> Position<T> {
        Position::new(self.current)
    }

    /// Returns `true` if the cursor is at the end position (the tail sentinel).
    pub fn is_end(&self) -> bool {
        self.current == self.list.tail_node()
    }

    /// Returns `true` if the cursor is at the first position.
    pub fn is_begin(&self) -> bool {
        self.current == self.list.front_node()
    }

    /// Returns `true` if the `List` is empty. See [`List::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Move the cursor to the next position.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::PastEnd`] if the cursor is at the end position;
    /// the cursor stays put.
    pub fn move_next(&mut self) -> Result<(), CursorError> {
        if self.is_end() {
            return Err(CursorError::PastEnd { steps: 0 });
        }
        // SAFETY: `current` is a node of the borrowed list, which cannot be
        // edited except through this cursor.
        self.current = unsafe { next_of(self.current) };
        Ok(())
    }

    /// Move the cursor to the previous position.
    ///
    /// Nodes do not store their predecessor, so the list is scanned from the
    /// head sentinel until the node linking to the current one is found. This
    /// operation should compute in *O*(*n*) time.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::BeforeBegin`] if the cursor is at the first
    /// position; the cursor stays put.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_begin();
    ///
    /// // Forbid to move before the first node
    /// assert!(cursor.move_prev().is_err());
    /// assert_eq!(cursor.current(), Some(&1));
    /// ```
    pub fn move_prev(&mut self) -> Result<(), CursorError> {
        match self.list.find_prev_element(self.current) {
            Some(prev) => {
                self.current = prev;
                Ok(())
            }
            None => Err(CursorError::BeforeBegin { steps: 0 }),
        }
    }

    /// Move forward the cursor by given steps.
    ///
    /// This operation should compute in *O*(`steps`) time.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::PastEnd`] with the completed steps if the end
    /// position is reached first. The cursor stays at the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_begin();
    ///
    /// assert!(cursor.seek_forward(2).is_ok());
    /// assert_eq!(cursor.current(), Some(&3));
    ///
    /// assert_eq!(cursor.seek_forward(5).unwrap_err().steps(), 1);
    /// assert!(cursor.is_end());
    /// ```
    pub fn seek_forward(&mut self, steps: usize) -> Result<(), CursorError> {
        (0..steps).try_for_each(|i| {
            self.move_next()
                .map_err(|_| CursorError::PastEnd { steps: i })
        })
    }

    /// Move backward the cursor by given steps. Every step is a scan from the
    /// head sentinel, so this operation should compute in *O*(*n* * `steps`)
    /// time.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::BeforeBegin`] with the completed steps if the
    /// first position is reached first. The cursor stays at the first position.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_end();
    ///
    /// assert!(cursor.seek_backward(2).is_ok());
    /// assert_eq!(cursor.current(), Some(&2));
    ///
    /// assert_eq!(cursor.seek_backward(5).unwrap_err().steps(), 1);
    /// assert_eq!(cursor.current(), Some(&1));
    /// ```
    pub fn seek_backward(&mut self, steps: usize) -> Result<(), CursorError> {
        (0..steps).try_for_each(|i| {
            self.move_prev()
                .map_err(|_| CursorError::BeforeBegin { steps: i })
        })
    }

    /// Set the cursor to the first position.
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn move_to_begin(&mut self) {
        self.current = self.list.front_node();
    }

    /// Set the cursor to the end position (the tail sentinel).
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn move_to_end(&mut self) {
        self.current = self.list.tail_node();
    }
}

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(list: &'a List<T>, current: Link) -> Self {
        Self { current, list }
    }

    /// Return an immutable reference of the current element of the cursor,
    /// or return `None` if it is at the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2]);
    /// let mut cursor = list.cursor_begin();
    /// assert_eq!(cursor.current(), Some(&1));
    /// cursor.move_to_end();
    /// assert_eq!(cursor.current(), None);
    /// ```
    pub fn current(&self) -> Option<&'a T> {
        if self.is_end() {
            return None;
        }
        // SAFETY: the cursor is not on a sentinel, and the list is borrowed
        // immutably for `'a`.
        Some(unsafe { element(self.current) })
    }

    /// Return an immutable reference of the element before the cursor, or
    /// `None` if the cursor is at the first position. This is a backward step,
    /// so it computes in *O*(*n*) time.
    pub fn previous(&self) -> Option<&'a T> {
        let prev = self.list.find_prev_element(self.current)?;
        // SAFETY: `prev` is an element node of the list borrowed for `'a`.
        Some(unsafe { element(prev) })
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>, current: Link) -> Self {
        Self { current, list }
    }

    /// Borrow the cursor as a read-only [`Cursor`] at the same position.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&*self.list, self.current)
    }

    /// Convert the cursor into a read-only [`Cursor`] at the same position.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        Cursor::new(self.list, self.current)
    }

    /// Temporarily view the underlying list.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_begin_mut();
    /// cursor.remove();
    /// assert_eq!(cursor.view(), &List::from_iter([2, 3]));
    /// ```
    pub fn view(&self) -> &List<T> {
        &*self.list
    }

    /// Return an immutable reference of the current element, or `None` at the
    /// end position.
    pub fn current(&self) -> Option<&T> {
        self.as_cursor().current()
    }

    /// Return an immutable reference of the element before the cursor, or
    /// `None` at the first position.
    pub fn previous(&self) -> Option<&T> {
        self.as_cursor().previous()
    }

    /// Return a mutable reference of the current element, or `None` at the
    /// end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_begin_mut();
    /// *cursor.current_mut().unwrap() *= 5;
    /// assert_eq!(cursor.current(), Some(&5));
    ///
    /// // Cannot mutate the tail sentinel.
    /// cursor.move_to_end();
    /// assert!(cursor.current_mut().is_none());
    /// ```
    pub fn current_mut(&mut self) -> Option<&mut T> {
        if self.is_end() {
            return None;
        }
        // SAFETY: the cursor is not on a sentinel, and the returned reference
        // borrows the cursor (hence the list) exclusively.
        Some(unsafe { element_mut(self.current) })
    }

    /// Like [`current_mut`](CursorBase::current_mut), but consumes the cursor so
    /// the reference can live as long as the borrow of the list.
    pub fn into_current_mut(self) -> Option<&'a mut T> {
        if self.is_end() {
            return None;
        }
        // SAFETY: the cursor is consumed, so the returned reference is the
        // only access left to the list for `'a`.
        Some(unsafe { element_mut(self.current) })
    }

    /// Return a mutable reference of the element before the cursor, or `None`
    /// at the first position.
    pub fn previous_mut(&mut self) -> Option<&mut T> {
        let prev = self.list.find_prev_element(self.current)?;
        // SAFETY: `prev` is an element node of the exclusively borrowed list.
        Some(unsafe { element_mut(prev) })
    }

    /// Like [`previous_mut`](CursorBase::previous_mut), but consumes the
    /// cursor.
    pub fn into_previous_mut(self) -> Option<&'a mut T> {
        let prev = self.list.find_prev_element(self.current)?;
        // SAFETY: see `into_current_mut`.
        Some(unsafe { element_mut(prev) })
    }

    /// Insert a new item before the cursor, and return its position. The
    /// cursor stays at the current node.
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 3]);
    /// let mut cursor = list.cursor_begin_mut();
    /// cursor.move_next().unwrap();
    ///
    /// cursor.insert(2);
    /// assert_eq!(cursor.current(), Some(&3));
    /// assert_eq!(cursor.previous(), Some(&2));
    /// assert_eq!(cursor.view(), &List::from_iter([1, 2, 3]));
    /// ```
    pub fn insert(&mut self, item: T) -> Position<T> {
        let at = self.position();
        self.list.insert(at, item)
    }

    /// Remove the current element and return it, moving the cursor to its
    /// successor. Returns `None` at the end position.
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_begin_mut();
    /// cursor.move_next().unwrap();
    ///
    /// assert_eq!(cursor.remove(), Some(2));
    /// assert_eq!(cursor.current(), Some(&3));
    /// assert_eq!(cursor.remove(), Some(3));
    /// assert_eq!(cursor.remove(), None);
    /// assert_eq!(cursor.view(), &List::from_iter([1]));
    /// ```
    pub fn remove(&mut self) -> Option<T> {
        if self.is_end() {
            return None;
        }
        let (element, next) = self.list.erase_element(self.position());
        self.current = next.link();
        Some(element)
    }
}

impl<'a, T: 'a> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(cursor: CursorMut<'a, T>) -> Self {
        cursor.into_cursor()
    }
}

impl<T: fmt::Debug, L> fmt::Debug for CursorBase<L>
where
    L: Deref<Target = List<T>>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let current = if self.is_end() {
            None
        } else {
            // SAFETY: not a sentinel, and the list is borrowed by `self`.
            Some(unsafe { element::<T>(self.current) })
        };
        f.debug_struct("Cursor")
            .field("list", &*self.list)
            .field("current", &current)
            .finish()
    }
}
