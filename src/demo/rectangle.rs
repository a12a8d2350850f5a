use std::cmp::Ordering;
use std::fmt;

/// An axis-aligned rectangle given by its two side lengths.
///
/// Rectangles compare equal when both sides are equal. One rectangle is less
/// than another only if *both* of its sides are smaller, so most pairs are
/// not comparable at all.
///
/// # Examples
///
/// ```
/// use ring_list::demo::Rectangle;
///
/// let small = Rectangle::new(1.0, 2.0);
/// let large = Rectangle::new(3.0, 4.0);
/// let wide = Rectangle::new(5.0, 1.0);
///
/// assert!(small < large);
/// assert_eq!(small.partial_cmp(&wide), None);
/// assert_eq!(large.to_string(), "3 4");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rectangle {
    length: f64,
    width: f64,
}

impl Rectangle {
    pub fn new(length: f64, width: f64) -> Self {
        Self { length, width }
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn area(&self) -> f64 {
        self.length * self.width
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * (self.length + self.width)
    }
}

impl PartialOrd for Rectangle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.length < other.length && self.width < other.width {
            Some(Ordering::Less)
        } else if self.length > other.length && self.width > other.width {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.length, self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::Rectangle;
    use std::cmp::Ordering;

    #[test]
    fn measures() {
        let r = Rectangle::new(3.0, 4.5);
        assert_eq!(r.length(), 3.0);
        assert_eq!(r.width(), 4.5);
        assert_eq!(r.area(), 13.5);
        assert_eq!(r.perimeter(), 15.0);
        assert_eq!(Rectangle::default().area(), 0.0);
    }

    #[test]
    fn ordering_needs_both_sides() {
        let a = Rectangle::new(1.0, 1.0);
        let b = Rectangle::new(2.0, 2.0);
        let c = Rectangle::new(2.0, 0.5);
        assert_eq!(a.partial_cmp(&b), Some(Ordering::Less));
        assert_eq!(b.partial_cmp(&a), Some(Ordering::Greater));
        assert_eq!(a.partial_cmp(&a), Some(Ordering::Equal));
        assert_eq!(a.partial_cmp(&c), None);
        assert_eq!(b.partial_cmp(&c), None);
        assert!(!(b < c) && !(c < b));
    }

    #[test]
    fn display() {
        assert_eq!(Rectangle::new(1.0, 2.0).to_string(), "1 2");
        assert_eq!(Rectangle::new(1.5, 0.25).to_string(), "1.5 0.25");
    }
}
