//! Records ingested from CSV files and fed to the sort engines.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::utils::error::Error;

/// A CSV row keyed by its epoch-millisecond timestamp.
///
/// The row is kept verbatim so the driver can print it unchanged after
/// sorting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Milliseconds since the Unix epoch (UTC). Zero when the timestamp
    /// could not be parsed.
    pub timestamp_ms: i64,
    /// The full, unparsed CSV line.
    pub row: String,
}

impl OrderRecord {
    /// Creates a new order record.
    #[must_use]
    pub fn new(timestamp_ms: i64, row: impl Into<String>) -> Self {
        Self {
            timestamp_ms,
            row: row.into(),
        }
    }

    /// Ordering key for the merge sort.
    #[must_use]
    pub fn key(&self) -> i64 {
        self.timestamp_ms
    }
}

/// A movie with the three attributes the recommender can sort by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    /// Title, with surrounding quotes stripped.
    pub name: String,
    /// IMDB rating.
    pub rating: f64,
    /// Release year.
    pub year: i32,
    /// Number of votes, used as a popularity measure.
    pub popularity: u64,
}

impl MovieRecord {
    /// Creates a new movie record.
    #[must_use]
    pub fn new(name: impl Into<String>, rating: f64, year: i32, popularity: u64) -> Self {
        Self {
            name: name.into(),
            rating,
            year,
            popularity,
        }
    }

    /// Returns true if `self` is strictly greater than `other` on `attribute`.
    #[must_use]
    pub fn is_greater(&self, other: &Self, attribute: SortAttribute) -> bool {
        match attribute {
            SortAttribute::Rating => self.rating > other.rating,
            SortAttribute::Year => self.year > other.year,
            SortAttribute::Popularity => self.popularity > other.popularity,
        }
    }
}

impl fmt::Display for MovieRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<45} | Rating: {:.1} | Year: {} | Popularity: {}",
            self.name, self.rating, self.year, self.popularity
        )
    }
}

/// Movie attribute selected as the quicksort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortAttribute {
    /// IMDB rating (real).
    #[default]
    Rating,
    /// Release year (integer).
    Year,
    /// Vote count (integer).
    Popularity,
}

impl SortAttribute {
    /// All recognized attributes, in menu order.
    pub const ALL: [SortAttribute; 3] = [Self::Rating, Self::Year, Self::Popularity];

    /// Returns the lowercase configuration name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rating => "rating",
            Self::Year => "year",
            Self::Popularity => "popularity",
        }
    }
}

impl FromStr for SortAttribute {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|attr| attr.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::InvalidSortAttribute(trimmed.to_string()))
    }
}

impl fmt::Display for SortAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
