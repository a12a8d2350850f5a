use crate::list::{element, element_mut, next_of, Link, List};
use std::fmt;
use std::iter::{FromIterator, FusedIterator};
use std::marker::PhantomData;

/// The half-open node range `start..end` walked by [`Iter`] and [`IterMut`].
///
/// Taking from the front follows one `next` link. Taking from the back has no
/// link to follow, so it scans from `start` for the node right before `end`.
#[derive(Clone, Copy)]
struct NodeRange {
    start: Link,
    end: Link,
    len: usize,
}

impl NodeRange {
    fn of<T>(list: &List<T>) -> Self {
        NodeRange {
            start: list.front_node(),
            end: list.tail_node(),
            len: list.len(),
        }
    }

    fn take_front(&mut self) -> Option<Link> {
        if self.start == self.end {
            return None;
        }
        let node = self.start;
        // SAFETY: the range is not empty, so `start` is a live element node.
        self.start = unsafe { next_of(node) };
        self.len -= 1;
        Some(node)
    }

    fn take_back(&mut self) -> Option<Link> {
        if self.start == self.end {
            return None;
        }
        let mut last = self.start;
        // SAFETY: every node from `start` up to `end` is live, and `end` is
        // reachable from `start`.
        unsafe {
            while next_of(last) != self.end {
                last = next_of(last);
            }
        }
        self.end = last;
        self.len -= 1;
        Some(last)
    }
}

/// An iterator over the elements of a `List`.
///
/// Iterating from the back is supported, but since nodes only link forward,
/// every `next_back` scans the remaining range and takes *O*(*n*) time.
///
/// # Examples
///
/// ```compile_fail
/// use ring_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut iter = list.iter();
///
/// // Won't compile, because list is already borrowed immutably.
/// list.push_back(4);
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a> {
    range: NodeRange,
    _marker: PhantomData<&'a List<T>>,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        Self {
            range: NodeRange::of(list),
            _marker: PhantomData,
        }
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            range: self.range,
            _marker: PhantomData,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        // SAFETY: nodes taken from the range are element nodes of the
        // borrowed list.
        self.range.take_front().map(|node| unsafe { element(node) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.range.len, Some(self.range.len))
    }

    fn count(self) -> usize {
        self.range.len
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.range.take_back().map(|node| unsafe { element(node) })
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// A mutable iterator over the elements of a `List`.
///
/// # Examples
///
/// `List` is not readable after an `IterMut` is created.
/// ```compile_fail
/// use ring_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut iter = list.iter_mut();
/// println!("{:?}", list.back());
/// println!("{:?}", iter.next());
/// ```
pub struct IterMut<'a, T: 'a> {
    range: NodeRange,
    _marker: PhantomData<&'a mut List<T>>,
}

impl<'a, T: 'a> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>) -> Self {
        Self {
            range: NodeRange::of(list),
            _marker: PhantomData,
        }
    }
}

impl<'a, T: 'a> fmt::Debug for IterMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut")
            .field("remaining", &self.range.len)
            .finish()
    }
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        // SAFETY: a node leaves the range before its element is handed out,
        // so no element is yielded twice.
        self.range.take_front().map(|node| unsafe { element_mut(node) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.range.len, Some(self.range.len))
    }

    fn count(self) -> usize {
        self.range.len
    }
}

impl<'a, T: 'a> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        // SAFETY: the backward scan reads `next` links only, never the
        // elements already handed out.
        self.range.take_back().map(|node| unsafe { element_mut(node) })
    }
}

impl<'a, T: 'a> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T: 'a> FusedIterator for IterMut<'a, T> {}

/// An owning iterator over the elements of a `List`, created by
/// [`List::into_iter`].
///
/// Popping from the back still scans, like [`List::pop_back`].
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.list).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    /// Appends every item at the back. Each push scans to the tail sentinel,
    /// so extending by *k* items computes in *O*(*k* * *n*) time.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for List<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}

unsafe impl<T: Sync> Sync for Iter<'_, T> {}

unsafe impl<T: Send> Send for IterMut<'_, T> {}

unsafe impl<T: Sync> Sync for IterMut<'_, T> {}
