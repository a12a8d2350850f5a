use std::io::{self, BufRead};

use log::debug;
use thiserror::Error;

use crate::demo::Rectangle;
use crate::List;

/// The number of lists the `rectangles` workload reads.
pub const LIST_COUNT: usize = 3;

/// An error raised while reading or combining rectangle lists.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("invalid number `{0}`")]
    InvalidNumber(String),

    /// The input ended before `expected` rectangles were read.
    #[error("expected {expected} rectangles, but the input ended after {found}")]
    MissingValue { expected: usize, found: usize },

    /// Two lists that must be walked in lockstep differ in length.
    #[error("lists must be the same size, found {left} and {right}")]
    SizeMismatch { left: usize, right: usize },
}

fn parse_value(token: &str) -> Result<f64, InputError> {
    token
        .parse()
        .map_err(|_| InputError::InvalidNumber(token.to_owned()))
}

/// Read `count` rectangles, each given as a `length width` pair of tokens.
///
/// # Examples
///
/// ```
/// use ring_list::demo::{read_rectangles, Rectangle};
///
/// let mut tokens = "1 2 3.5 4".split_whitespace();
/// let list = read_rectangles(&mut tokens, 2).unwrap();
/// assert_eq!(list.back(), Some(&Rectangle::new(3.5, 4.0)));
/// ```
pub fn read_rectangles<'a, I>(tokens: &mut I, count: usize) -> Result<List<Rectangle>, InputError>
where
    I: Iterator<Item = &'a str>,
{
    let mut list = List::new();
    for found in 0..count {
        let missing = || InputError::MissingValue {
            expected: count,
            found,
        };
        let length = parse_value(tokens.next().ok_or_else(missing)?)?;
        let width = parse_value(tokens.next().ok_or_else(missing)?)?;
        list.push_back(Rectangle::new(length, width));
    }
    Ok(list)
}

/// Read [`LIST_COUNT`] lists of `count` rectangles each from `reader`.
///
/// Tokens left over after the last list are ignored.
pub fn read_lists<R: BufRead>(
    mut reader: R,
    count: usize,
) -> Result<[List<Rectangle>; LIST_COUNT], InputError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let mut tokens = text.split_whitespace();
    let mut next = || read_rectangles(&mut tokens, count);
    let lists = [next()?, next()?, next()?];
    debug!("read {} lists of {} rectangles", LIST_COUNT, count);
    Ok(lists)
}
