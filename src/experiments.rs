//! A safe deque with stored predecessor links, branded by a [`GhostToken`].
//!
//! [`List`](crate::List) keeps a single forward link per node, so stepping
//! back from the end is a scan. [`BrandedDeque`] is the other way of building
//! the same deque operations: every node holds both links, each node is owned
//! in two halves (one by each neighbour, or by the deque at either end), and
//! all nodes are borrowed through one token. Both ends are then reached in
//! *O*(1) time without any `unsafe` code.
//!
//! A `BrandedDeque` must be emptied (for instance with [`BrandedDeque::clear`])
//! before it is dropped, since its nodes can only be released with the token.
//!
//! ```
//! use ghost_cell::GhostToken;
//! use ring_list::experiments::BrandedDeque;
//!
//! GhostToken::new(|mut token| {
//!     let mut deque = BrandedDeque::new();
//!     deque.push_back(2, &mut token);
//!     deque.push_front(1, &mut token);
//!     assert_eq!(deque.back(&token), Some(&2));
//!     assert_eq!(deque.pop_front(&mut token), Some(1));
//!     deque.clear(&mut token);
//!     assert!(deque.is_empty());
//! });
//! ```

use ghost_cell::{GhostCell, GhostToken};
use static_rc::StaticRc;
use std::ops::Deref;

type Half<T> = StaticRc<T, 1, 2>;
type Whole<T> = StaticRc<T, 2, 2>;

type NodeHalf<'id, T> = Half<GhostCell<'id, DequeNode<'id, T>>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum End {
    Front,
    Back,
}

impl End {
    fn index(self) -> usize {
        self as usize
    }

    fn opposite(self) -> End {
        match self {
            End::Front => End::Back,
            End::Back => End::Front,
        }
    }
}

struct DequeNode<'id, T> {
    /// `toward[end]` is the neighbour in the direction of `end`, if any.
    toward: [Option<NodeHalf<'id, T>>; 2],
    value: T,
}

impl<'id, T> DequeNode<'id, T> {
    fn new(value: T) -> Self {
        DequeNode {
            toward: [None, None],
            value,
        }
    }
}

/// A deque whose nodes are each owned in two halves, reached in *O*(1) from
/// both ends. See the [module documentation](self).
pub struct BrandedDeque<'id, T> {
    /// `ends[end]` holds one half of the node at `end`.
    ends: [Option<NodeHalf<'id, T>>; 2],
    len: usize,
}

impl<'id, T> Default for BrandedDeque<'id, T> {
    fn default() -> Self {
        BrandedDeque {
            ends: [None, None],
            len: 0,
        }
    }
}

impl<'id, T> BrandedDeque<'id, T> {
    fn push(&mut self, end: End, value: T, token: &mut GhostToken<'id>) {
        let inward = end.opposite().index();
        let (inner, outer) = Whole::split(Whole::new(GhostCell::new(DequeNode::new(value))));
        match self.ends[end.index()].take() {
            Some(old_end) => {
                // The old end node keeps `inner`, the new node keeps `old_end`.
                old_end.deref().borrow_mut(token).toward[end.index()] = Some(inner);
                outer.deref().borrow_mut(token).toward[inward] = Some(old_end);
            }
            // A lone node is held by both ends.
            None => self.ends[inward] = Some(inner),
        }
        self.ends[end.index()] = Some(outer);
        self.len += 1;
    }

    fn pop(&mut self, end: End, token: &mut GhostToken<'id>) -> Option<T> {
        let inward = end.opposite().index();
        let outer = self.ends[end.index()].take()?;
        let neighbour = outer.deref().borrow_mut(token).toward[inward].take();
        let inner = match neighbour {
            Some(neighbour) => {
                let inner = neighbour.deref().borrow_mut(token).toward[end.index()].take();
                self.ends[end.index()] = Some(neighbour);
                inner
            }
            None => self.ends[inward].take(),
        };
        let inner = inner.expect("every node is owned in exactly two halves");
        self.len -= 1;
        Some(Whole::into_box(Whole::join(inner, outer)).into_inner().value)
    }

    fn peek<'a>(&'a self, end: End, token: &'a GhostToken<'id>) -> Option<&'a T> {
        self.ends[end.index()]
            .as_ref()
            .map(|node| &node.deref().borrow(token).value)
    }
}

impl<'id, T> BrandedDeque<'id, T> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn front<'a>(&'a self, token: &'a GhostToken<'id>) -> Option<&'a T> {
        self.peek(End::Front, token)
    }

    pub fn back<'a>(&'a self, token: &'a GhostToken<'id>) -> Option<&'a T> {
        self.peek(End::Back, token)
    }

    pub fn push_front(&mut self, value: T, token: &mut GhostToken<'id>) {
        self.push(End::Front, value, token)
    }

    pub fn push_back(&mut self, value: T, token: &mut GhostToken<'id>) {
        self.push(End::Back, value, token)
    }

    pub fn pop_front(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        self.pop(End::Front, token)
    }

    pub fn pop_back(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        self.pop(End::Back, token)
    }

    /// Pops every element. Must be called before the deque is dropped.
    pub fn clear(&mut self, token: &mut GhostToken<'id>) {
        while self.pop_front(token).is_some() {}
    }
}
