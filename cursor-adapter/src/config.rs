//! Adapter configuration

use crate::cursor::Column;

/// Construction-time options for a [`CursorAdapter`](crate::CursorAdapter).
///
/// The options are read once when the adapter is built and cannot be
/// changed afterwards.
///
/// # Example
///
/// ```
/// use cursor_adapter::{AdapterConfig, Column};
///
/// let config = AdapterConfig::new().with_id_column(Column::new("_id"));
/// assert!(config.has_stable_ids());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AdapterConfig {
    /// Column holding a distinct, non-null 64-bit id for every row.
    ///
    /// Setting it enables stable item ids for the adapter's lifetime.
    ///
    /// Default: none
    pub id_column: Option<Column<i64>>,
}

impl AdapterConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the id column.
    pub fn with_id_column(mut self, column: Column<i64>) -> Self {
        self.id_column = Some(column);
        self
    }

    /// Whether an adapter built from this config reports stable ids.
    pub fn has_stable_ids(&self) -> bool {
        self.id_column.is_some()
    }
}
