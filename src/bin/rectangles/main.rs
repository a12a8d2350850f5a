//! Reads three lists of rectangles from stdin and prints:
//!
//! - `(a)` the three lists as read;
//! - `(b)` the first list extended with every element of the third list that
//!   differs from the element at the same place in the first;
//! - `(c)` the second list after erasing every element found in the third.
//!
//! Each list holds 9 rectangles unless another length is given as the first
//! argument. The log level is read from `RING_LIST_LOG`.

mod logger;

use std::io::{self, BufRead, Write};
use std::process;

use log::{error, info};

use ring_list::demo::{append_mismatched, erase_matching, format_row, read_lists, InputError};

const DEFAULT_LENGTH: usize = 9;

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error("invalid list length `{0}`")]
    Usage(String),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

fn list_length() -> Result<usize, Error> {
    match std::env::args().nth(1) {
        Some(arg) => arg.parse().map_err(|_| Error::Usage(arg)),
        None => Ok(DEFAULT_LENGTH),
    }
}

/// Read three lists of `length` rectangles from `input` and write the three
/// report sections to `out`.
fn run<R: BufRead, W: Write>(length: usize, input: R, out: &mut W) -> Result<(), Error> {
    let [l1, mut l2, l3] = read_lists(input, length)?;
    info!("read three lists of {} rectangles", length);

    writeln!(out, "(a)")?;
    writeln!(out, "{}\n", format_row("L1: ", &l1))?;
    writeln!(out, "{}\n", format_row("L2: ", &l2))?;
    writeln!(out, "{}\n\n", format_row("L3: ", &l3))?;

    let l1 = append_mismatched(&l1, &l3)?;
    writeln!(out, "(b)")?;
    writeln!(out, "{}\n\n", format_row("L1: ", &l1))?;

    erase_matching(&mut l2, &l3);
    writeln!(out, "(c)")?;
    writeln!(out, "{}", format_row("L3: ", &l2))?;
    out.flush()?;
    Ok(())
}

fn main() {
    if let Err(err) = logger::logger_init() {
        eprintln!("failed to install logger: {}", err);
    }
    let result = list_length().and_then(|length| {
        let stdin = io::stdin();
        let stdout = io::stdout();
        run(length, stdin.lock(), &mut stdout.lock())
    });
    if let Err(err) = result {
        error!("{}", err);
        process::exit(1);
    }
}
