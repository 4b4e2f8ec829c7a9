//! Error types

/// Error type for reading values off a cursor.
#[derive(Debug, thiserror::Error)]
pub enum CursorError {
    /// The cursor has no column with this name.
    #[error("Column '{column}' not found in cursor")]
    UnknownColumn { column: String },

    /// The cell exists but holds a different type than requested.
    #[error("Column '{column}' type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        column: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// A value was requested before the cursor was moved onto a row.
    #[error("cursor is not positioned on a row")]
    NotPositioned,

    /// The cursor has been closed.
    #[error("cursor is closed")]
    Closed,

    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

impl CursorError {
    /// Creates a new unknown column error.
    pub fn unknown_column(column: impl Into<String>) -> Self {
        Self::UnknownColumn {
            column: column.into(),
        }
    }

    /// Creates a new type mismatch error.
    pub fn type_mismatch(
        column: impl Into<String>,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            column: column.into(),
            expected,
            actual,
        }
    }
}

/// Error type for adapter operations.
///
/// Bind failures mean the rendering surface is out of sync with the last
/// count the adapter reported. They are never absorbed by the adapter.
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    /// A bind was requested while no cursor is installed.
    #[error("bind requested for position {position} but no cursor is set")]
    NoCursor { position: usize },

    /// The cursor could not be moved to the requested position.
    #[error("bind requested for position {position} but the cursor has {count} rows")]
    InvalidPosition { position: usize, count: usize },

    /// Reading the row into the holder's item failed.
    #[error("failed to read row: {0}")]
    Cursor(#[from] CursorError),
}

impl AdapterError {
    /// Returns `true` if this error signals a surface/adapter desync rather
    /// than a failed column read.
    pub fn is_state_violation(&self) -> bool {
        matches!(self, Self::NoCursor { .. } | Self::InvalidPosition { .. })
    }
}
