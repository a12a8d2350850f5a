//! A small rectangle workload for [`List`](crate::List).
//!
//! The `rectangles` binary reads three lists of rectangles, then prints the
//! first list extended with the mismatching elements of the third, and the
//! second list with every element of the third erased.

pub mod input;
pub mod ops;
pub mod rectangle;

#[doc(inline)]
pub use input::{read_lists, read_rectangles, InputError};
#[doc(inline)]
pub use ops::{append_mismatched, erase_matching, format_row};
#[doc(inline)]
pub use rectangle::Rectangle;
