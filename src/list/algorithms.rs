use crate::list::List;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::mem;

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    /// Copy the elements one by one, in forward order, into a fresh ring.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Copy `other` into a fresh ring first, and only then swap it in, so that
    /// `self` is left untouched if cloning an element panics.
    fn clone_from(&mut self, other: &Self) {
        let mut copy = other.clone();
        mem::swap(self, &mut copy);
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::cell::Cell;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::iter::FromIterator;
    use std::panic::{self, AssertUnwindSafe};

    #[test]
    fn clone_is_deep() {
        let list = List::from_iter(vec![1, 2, 3]);
        let mut copy = list.clone();
        assert_eq!(copy, list);
        copy.check_invariants();

        *copy.front_mut().unwrap() = 10;
        copy.push_back(4);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2, 3]);
        assert_eq!(Vec::from_iter(copy.iter().copied()), vec![10, 2, 3, 4]);
        assert_ne!(copy, list);
    }

    #[test]
    fn clone_from_replaces_contents() {
        let source = List::from_iter(0..3);
        let mut target = List::from_iter(10..20);
        target.clone_from(&source);
        target.check_invariants();
        assert_eq!(target, source);

        target.clone_from(&List::new());
        assert!(target.is_empty());
    }

    #[test]
    fn clone_from_keeps_target_on_panic() {
        struct Bomb<'a> {
            value: i32,
            clones_left: &'a Cell<usize>,
        }
        impl<'a> Clone for Bomb<'a> {
            fn clone(&self) -> Self {
                let left = self.clones_left.get();
                if left == 0 {
                    panic!("clone budget exhausted");
                }
                self.clones_left.set(left - 1);
                Bomb {
                    value: self.value,
                    clones_left: self.clones_left,
                }
            }
        }

        let budget = Cell::new(usize::MAX);
        let source = List::from_iter((0..4).map(|value| Bomb {
            value,
            clones_left: &budget,
        }));
        let mut target = List::from_iter((10..12).map(|value| Bomb {
            value,
            clones_left: &budget,
        }));

        budget.set(2);
        let result = panic::catch_unwind(AssertUnwindSafe(|| target.clone_from(&source)));
        assert!(result.is_err());

        target.check_invariants();
        let values = Vec::from_iter(target.iter().map(|b| b.value));
        assert_eq!(values, vec![10, 11]);
    }

    #[test]
    fn compare_and_hash() {
        fn hash_of<T: Hash>(value: &T) -> u64 {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }
        let a = List::from_iter(vec![1, 2, 3]);
        let b = List::from_iter(vec![1, 2, 4]);
        let c = List::from_iter(vec![1, 2]);
        assert!(a < b);
        assert!(c < a);
        assert_eq!(hash_of(&a), hash_of(&a.clone()));
        assert_ne!(a, c);
        assert!(a.contains(&3));
        assert!(!c.contains(&3));
    }
}
