//! Error types for trestle tables.

use core::fmt;

/// Result type alias for table operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type for table operations.
///
/// The only recoverable failure is [`Error::Duplicate`]. Contract violations
/// (erasing a row that is not in the table, indexing with a stale row id)
/// panic instead, and allocation failure aborts like any other Rust
/// collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// An insert was refused because some index already contains a row with
    /// an equal key. The table is left unchanged; use `upsert` or `find` to
    /// reach the existing row.
    Duplicate,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Duplicate => write!(f, "inserted row already exists in table"),
        }
    }
}
