use std::fmt::{Display, Write};

use log::debug;

use crate::demo::InputError;
use crate::List;

/// Walk `base` and `other` in lockstep and return a copy of `base` extended
/// with every element of `other` that differs from its counterpart in `base`,
/// in the order they are found.
///
/// # Errors
///
/// Returns [`InputError::SizeMismatch`] if the lists differ in length.
///
/// # Examples
///
/// ```
/// use ring_list::demo::append_mismatched;
/// use ring_list::List;
/// use std::iter::FromIterator;
///
/// let base = List::from_iter([1, 2, 3]);
/// let other = List::from_iter([1, 5, 6]);
/// let merged = append_mismatched(&base, &other).unwrap();
/// assert_eq!(merged, List::from_iter([1, 2, 3, 5, 6]));
/// ```
pub fn append_mismatched<T>(base: &List<T>, other: &List<T>) -> Result<List<T>, InputError>
where
    T: Clone + PartialEq,
{
    if base.len() != other.len() {
        return Err(InputError::SizeMismatch {
            left: base.len(),
            right: other.len(),
        });
    }
    let mut merged = base.clone();
    let mut appended = 0;
    for (left, right) in base.iter().zip(other) {
        if left != right {
            merged.push_back(right.clone());
            appended += 1;
        }
    }
    debug!("appended {} mismatched elements", appended);
    Ok(merged)
}

/// Erase from `list` every element equal to some element of `other`, and
/// return how many were erased.
///
/// Each erasure pays the predecessor scan, so this is *O*(*n*²) in the worst
/// case on top of the `contains` lookups.
///
/// # Examples
///
/// ```
/// use ring_list::demo::erase_matching;
/// use ring_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 1, 3]);
/// assert_eq!(erase_matching(&mut list, &List::from_iter([1])), 2);
/// assert_eq!(list, List::from_iter([2, 3]));
/// ```
pub fn erase_matching<T: PartialEq>(list: &mut List<T>, other: &List<T>) -> usize {
    let mut erased = 0;
    let mut cursor = list.cursor_begin_mut();
    while let Some(current) = cursor.current() {
        if other.contains(current) {
            cursor.remove();
            erased += 1;
        } else {
            cursor
                .move_next()
                .expect("a cursor on an element can step forward");
        }
    }
    debug!("erased {} matching elements", erased);
    erased
}

/// Render `list` on one line after `label`, each element followed by two
/// spaces.
///
/// ```
/// use ring_list::demo::{format_row, Rectangle};
/// use ring_list::List;
/// use std::iter::FromIterator;
///
/// let list = List::from_iter([Rectangle::new(1.0, 2.0), Rectangle::new(3.0, 4.0)]);
/// assert_eq!(format_row("L1: ", &list), "L1: 1 2  3 4  ");
/// ```
pub fn format_row<T: Display>(label: &str, list: &List<T>) -> String {
    let mut row = String::from(label);
    for item in list {
        // Writing into a `String` cannot fail.
        let _ = write!(row, "{}  ", item);
    }
    row
}

#[cfg(test)]
mod tests {
    use super::{append_mismatched, erase_matching, format_row};
    use crate::demo::{InputError, Rectangle};
    use crate::List;
    use std::iter::FromIterator;

    fn rects(sides: &[(f64, f64)]) -> List<Rectangle> {
        sides.iter().map(|&(l, w)| Rectangle::new(l, w)).collect()
    }

    #[test]
    fn append_mismatched_rectangles() {
        let l1 = rects(&[(1.0, 2.0), (3.0, 4.0)]);
        let l3 = rects(&[(3.0, 4.0), (5.0, 6.0)]);
        let merged = append_mismatched(&l1, &l3).unwrap();
        assert_eq!(
            merged,
            rects(&[(1.0, 2.0), (3.0, 4.0), (3.0, 4.0), (5.0, 6.0)])
        );
        merged.check_invariants();
        assert_eq!(l1.len(), 2);
    }

    #[test]
    fn append_mismatched_identical_lists() {
        let l1 = rects(&[(1.0, 1.0), (2.0, 2.0)]);
        let merged = append_mismatched(&l1, &l1.clone()).unwrap();
        assert_eq!(merged, l1);
    }

    #[test]
    fn append_mismatched_rejects_size_mismatch() {
        let err = append_mismatched(&List::from_iter([1, 2]), &List::from_iter([1])).unwrap_err();
        assert!(matches!(err, InputError::SizeMismatch { left: 2, right: 1 }));
    }

    #[test]
    fn erase_matching_rectangles() {
        let mut l2 = rects(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
        let l3 = rects(&[(2.0, 2.0)]);
        assert_eq!(erase_matching(&mut l2, &l3), 1);
        assert_eq!(l2, rects(&[(1.0, 1.0), (3.0, 3.0)]));
        l2.check_invariants();
    }

    #[test]
    fn erase_matching_everything_and_nothing() {
        let mut list = List::from_iter(vec![4, 4, 4]);
        assert_eq!(erase_matching(&mut list, &List::from_iter([5])), 0);
        assert_eq!(list.len(), 3);
        assert_eq!(erase_matching(&mut list, &List::from_iter([4])), 3);
        assert!(list.is_empty());
        assert_eq!(erase_matching(&mut list, &List::from_iter([4])), 0);
    }

    #[test]
    fn format_rows() {
        assert_eq!(format_row("L2: ", &List::<Rectangle>::new()), "L2: ");
        assert_eq!(
            format_row("L3: ", &rects(&[(1.5, 2.0)])),
            "L3: 1.5 2  "
        );
    }
}
