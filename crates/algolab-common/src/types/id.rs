//! Identifier types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::error::Error;

/// Dense vertex identifier, an index in `0..vertex_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(u32);

impl VertexId {
    /// Creates a vertex identifier from a raw index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Returns the index as `usize`, for slice access.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for VertexId {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

impl TryFrom<usize> for VertexId {
    type Error = Error;

    /// Fails with [`Error::VertexOutOfRange`] when `index` does not fit in `u32`.
    fn try_from(index: usize) -> Result<Self, Error> {
        u32::try_from(index).map(Self).map_err(|_| Error::VertexOutOfRange {
            vertex: index,
            vertex_count: u32::MAX as usize,
        })
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
