//! Error types for record construction and store operations.

use crate::order::IndexOrder;
use crate::record::Field;

/// Errors that can occur when building a record from caller-supplied text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordError {
    /// A data field was absent.
    MissingField(Field),
    /// A pattern was requested without a wildcard placeholder.
    MissingWildcard,
}

impl std::fmt::Display for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "record is missing its {field}"),
            Self::MissingWildcard => write!(f, "pattern record requires a wildcard placeholder"),
        }
    }
}

impl std::error::Error for RecordError {}

/// Errors that can occur during store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Caller input could not be turned into a record.
    InvalidInput(RecordError),
    /// An index does not hold the same records as the arena.
    IndexMismatch {
        /// The index that diverged.
        order: IndexOrder,
        /// Number of live records in the arena.
        records: usize,
        /// Number of entries in the index.
        entries: usize,
        /// Number of index entries that point at a live record under its own key.
        agreeing: usize,
    },
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(e) => write!(f, "invalid input: {e}"),
            Self::IndexMismatch {
                order,
                records,
                entries,
                agreeing,
            } => write!(
                f,
                "{order} index out of sync: {records} records, {entries} entries, {agreeing} agreeing"
            ),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInput(e) => Some(e),
            Self::IndexMismatch { .. } => None,
        }
    }
}

impl From<RecordError> for StoreError {
    fn from(e: RecordError) -> Self {
        Self::InvalidInput(e)
    }
}
