//! Errors from forcing table construction.

use std::error::Error;
use std::fmt;

use pointsnow_core::Timestamp;

/// Errors detected while building a [`ForcingTable`](crate::ForcingTable).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableError {
    /// The same timestamp appears twice in the index.
    DuplicateTimestamp {
        /// The repeated timestamp.
        timestamp: Timestamp,
    },
    /// A column with this name already exists.
    DuplicateColumn {
        /// The repeated column name.
        name: String,
    },
    /// A column does not have one value per timestamp.
    LengthMismatch {
        /// The offending column.
        name: String,
        /// Number of timestamps in the index.
        expected: usize,
        /// Number of values supplied.
        found: usize,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateTimestamp { timestamp } => {
                write!(f, "timestamp {timestamp} appears more than once")
            }
            Self::DuplicateColumn { name } => write!(f, "column '{name}' already exists"),
            Self::LengthMismatch {
                name,
                expected,
                found,
            } => write!(
                f,
                "column '{name}' has {found} values, index has {expected} timestamps"
            ),
        }
    }
}

impl Error for TableError {}
