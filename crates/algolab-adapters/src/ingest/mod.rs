//! CSV ingestion.
//!
//! Readers are line-oriented and forgiving: a malformed row is logged and
//! skipped, and the rest of the file is still loaded. Bytes that are not
//! UTF-8 decode as U+FFFD. Only a missing or unreadable file is an error.

mod csv;
mod movies;
mod orders;
mod timestamp;

pub use csv::split_quoted;
pub use movies::{load_movies, parse_movie_row, read_movies};
pub use orders::{load_orders, read_orders};
pub use timestamp::{parse_timestamp, timestamp_or_zero};

use std::fs::File;
use std::io::{self, BufRead, BufReader, ErrorKind};
use std::path::Path;

use algolab_common::utils::error::{Error, Result};

/// Opens `path` for buffered reading, mapping "not found" to [`Error::InputMissing`].
fn open(path: &Path) -> Result<BufReader<File>> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(Error::InputMissing(path.to_path_buf())),
        Err(e) => Err(e.into()),
    }
}

/// Splits `reader` into lines like [`BufRead::lines`], but decodes each line
/// lossily instead of failing on invalid UTF-8.
fn lossy_lines<R: BufRead>(mut reader: R) -> impl Iterator<Item = io::Result<String>> {
    let mut buf = Vec::new();
    std::iter::from_fn(move || {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => None,
            Ok(_) => {
                if buf.ends_with(b"\n") {
                    buf.pop();
                    if buf.ends_with(b"\r") {
                        buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&buf).into_owned()))
            }
            Err(e) => Some(Err(e)),
        }
    })
}
