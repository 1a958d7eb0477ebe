//! IMDB top-1000 style movie dataset.

use std::io::BufRead;
use std::path::Path;

use algolab_common::utils::error::{Error, Result};
use algolab_common::MovieRecord;

use super::csv::split_quoted;

const NAME_COLUMN: usize = 1;
const YEAR_COLUMN: usize = 2;
const RATING_COLUMN: usize = 6;
const VOTES_COLUMN: usize = 14;

/// Loads every parseable movie from the CSV file at `path`.
pub fn load_movies(path: impl AsRef<Path>) -> Result<Vec<MovieRecord>> {
    read_movies(super::open(path.as_ref())?)
}

/// Reads movies from any buffered reader, skipping the header line and any
/// row that fails to parse.
pub fn read_movies(reader: impl BufRead) -> Result<Vec<MovieRecord>> {
    let mut movies = Vec::new();
    let mut skipped = 0usize;

    for (index, line) in super::lossy_lines(reader).enumerate().skip(1) {
        let line = line?;
        match parse_movie_row(&line, index + 1) {
            Ok(movie) => movies.push(movie),
            Err(e) => {
                tracing::warn!(error = %e, "movie row skipped");
                skipped += 1;
            }
        }
    }

    tracing::debug!(loaded = movies.len(), skipped, "movies read");
    Ok(movies)
}

/// Parses one data row.
///
/// The year and vote count keep only their digits, so `"(1994)"` and
/// `"2,343,110"` both parse. `line` is used in error messages.
pub fn parse_movie_row(row: &str, line: usize) -> Result<MovieRecord> {
    let fields = split_quoted(row);
    let field = |column: usize| {
        fields.get(column).copied().ok_or_else(|| Error::Parse {
            line,
            message: format!("missing column {column}"),
        })
    };

    let name = field(NAME_COLUMN)?.replace('"', "");
    let year = digits(field(YEAR_COLUMN)?)
        .parse::<i32>()
        .map_err(|e| parse_error(line, "year", &e))?;
    let rating = field(RATING_COLUMN)?
        .trim()
        .parse::<f64>()
        .map_err(|e| parse_error(line, "rating", &e))?;
    let popularity = digits(field(VOTES_COLUMN)?)
        .parse::<u64>()
        .map_err(|e| parse_error(line, "vote count", &e))?;

    Ok(MovieRecord::new(name, rating, year, popularity))
}

fn digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

fn parse_error(line: usize, what: &str, e: &dyn std::fmt::Display) -> Error {
    Error::Parse {
        line,
        message: format!("bad {what}: {e}"),
    }
}
