//! In-memory cursor over materialized rows.

use crate::error::CursorError;
use crate::value::Value;

use super::Cursor;

/// A cursor over rows held in memory.
///
/// Rows are built up front and are immutable afterwards. Closing the cursor
/// drops them.
///
/// # Example
///
/// ```
/// use cursor_adapter::{Cursor, MemoryCursor, Value};
///
/// let mut cursor = MemoryCursor::new(["_id", "title"])
///     .row([Value::from(1i64), Value::from("Milk")])
///     .row([Value::from(2i64), Value::from("Eggs")]);
///
/// assert_eq!(cursor.count(), 2);
/// assert!(cursor.move_to_position(1));
/// assert_eq!(cursor.get("title").unwrap(), Value::from("Eggs"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryCursor {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
    position: Option<usize>,
    closed: bool,
}

impl MemoryCursor {
    /// Create an empty cursor with the given column names.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Append a row. Missing trailing cells are stored as `Null`, extra
    /// cells are dropped.
    pub fn row<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.push_row(values.into_iter().map(Into::into).collect());
        self
    }

    pub(crate) fn from_parts(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        let mut cursor = Self {
            columns,
            ..Default::default()
        };
        for row in rows {
            cursor.push_row(row);
        }
        cursor
    }

    fn push_row(&mut self, mut row: Vec<Value>) {
        row.resize(self.columns.len(), Value::Null);
        self.rows.push(row);
    }
}

impl Cursor for MemoryCursor {
    fn count(&self) -> usize {
        self.rows.len()
    }

    fn position(&self) -> Option<usize> {
        self.position
    }

    fn move_to_position(&mut self, position: usize) -> bool {
        if self.closed || position >= self.rows.len() {
            return false;
        }
        self.position = Some(position);
        true
    }

    fn column_names(&self) -> &[String] {
        &self.columns
    }

    fn get(&self, column: &str) -> Result<Value, CursorError> {
        if self.closed {
            return Err(CursorError::Closed);
        }
        let index = self
            .column_index(column)
            .ok_or_else(|| CursorError::unknown_column(column))?;
        let row = self
            .position
            .and_then(|p| self.rows.get(p))
            .ok_or(CursorError::NotPositioned)?;
        Ok(row[index].clone())
    }

    fn close(&mut self) {
        self.closed = true;
        self.rows.clear();
        self.position = None;
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_rows() -> MemoryCursor {
        MemoryCursor::new(["_id", "title"])
            .row([Value::from(10i64), Value::from("a")])
            .row([Value::from(20i64), Value::from("b")])
            .row([Value::from(30i64), Value::from("c")])
    }

    #[test]
    fn test_move_in_range() {
        let mut cursor = three_rows();
        assert_eq!(cursor.position(), None);
        assert!(cursor.move_to_position(2));
        assert_eq!(cursor.get("_id").unwrap(), Value::Integer(30));
        // Repeated moves are fine.
        assert!(cursor.move_to_position(0));
        assert!(cursor.move_to_position(0));
        assert_eq!(cursor.get("title").unwrap(), Value::from("a"));
    }

    #[test]
    fn test_move_out_of_range_keeps_position() {
        let mut cursor = three_rows();
        assert!(cursor.move_to_position(1));
        assert!(!cursor.move_to_position(3));
        assert_eq!(cursor.position(), Some(1));
    }

    #[test]
    fn test_get_before_move() {
        let cursor = three_rows();
        assert!(matches!(cursor.get("_id"), Err(CursorError::NotPositioned)));
    }

    #[test]
    fn test_short_rows_are_padded() {
        let mut cursor = MemoryCursor::new(["a", "b"]).row([1i64]);
        assert!(cursor.move_to_position(0));
        assert_eq!(cursor.get("b").unwrap(), Value::Null);
    }

    #[test]
    fn test_closed_cursor() {
        let mut cursor = three_rows();
        assert!(cursor.move_to_position(0));
        cursor.close();
        assert!(cursor.is_closed());
        assert_eq!(cursor.count(), 0);
        assert!(!cursor.move_to_position(0));
        assert!(matches!(cursor.get("_id"), Err(CursorError::Closed)));
    }
}
