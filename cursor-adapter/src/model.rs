//! Models populated from cursor rows

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use crate::cursor::{Column, Cursor};
use crate::error::CursorError;
use crate::value::{FromValue, Value};

/// An item that can populate itself from the current row of a cursor.
///
/// The adapter calls [`read_from_cursor`](Model::read_from_cursor) after
/// moving the cursor onto the row being bound. Implementations read every
/// column they map.
///
/// # Example
///
/// ```
/// use cursor_adapter::{Column, Cursor, CursorError, Model};
///
/// const TITLE: Column<String> = Column::new("title");
///
/// #[derive(Default)]
/// struct Task {
///     title: String,
/// }
///
/// impl Model for Task {
///     fn read_from_cursor(&mut self, cursor: &dyn Cursor) -> Result<(), CursorError> {
///         self.title = TITLE.read(cursor)?;
///         Ok(())
///     }
/// }
/// ```
pub trait Model {
    fn read_from_cursor(&mut self, cursor: &dyn Cursor) -> Result<(), CursorError>;
}

/// A dynamic model holding cells by column name.
///
/// With no projection a record maps every column the cursor has; with
/// [`with_columns`](Record::with_columns) it maps only the listed ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Columns to read. Empty means all.
    #[serde(skip)]
    projection: Vec<String>,

    /// The cell values.
    fields: HashMap<String, Value>,
}

impl Record {
    /// Creates a record mapping every cursor column.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a record mapping only the given columns.
    pub fn with_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            projection: columns.into_iter().map(Into::into).collect(),
            fields: HashMap::new(),
        }
    }

    /// Returns a reference to the cell value, if it exists.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields.get(column)
    }

    /// Returns a typed cell value.
    pub fn get_as<T: FromValue>(&self, column: &str) -> Result<T, CursorError> {
        let value = self
            .fields
            .get(column)
            .cloned()
            .ok_or_else(|| CursorError::unknown_column(column))?;
        T::from_value(value, column)
    }

    /// Returns the typed value of a column.
    pub fn column<T: FromValue>(&self, column: Column<T>) -> Result<T, CursorError> {
        self.get_as(column.name())
    }

    /// Sets a cell value.
    pub fn set(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(column.into(), value.into());
        self
    }

    /// Returns the number of populated cells.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no cells are populated.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Model for Record {
    // A failed read leaves the previous fields in place.
    fn read_from_cursor(&mut self, cursor: &dyn Cursor) -> Result<(), CursorError> {
        let columns = if self.projection.is_empty() {
            cursor.column_names()
        } else {
            &self.projection[..]
        };
        let fields = columns
            .iter()
            .map(|name| -> Result<_, CursorError> { Ok((name.clone(), cursor.get(name)?)) })
            .collect::<Result<HashMap<_, _>, _>>()?;
        self.fields = fields;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::MemoryCursor;

    fn cursor() -> MemoryCursor {
        let mut cursor = MemoryCursor::new(["_id", "title", "done"])
            .row([Value::from(1i64), Value::from("Milk"), Value::from(true)]);
        assert!(cursor.move_to_position(0));
        cursor
    }

    #[test]
    fn test_read_all_columns() {
        let mut record = Record::new();
        record.read_from_cursor(&cursor()).unwrap();
        assert_eq!(record.len(), 3);
        assert_eq!(record.get_as::<i64>("_id").unwrap(), 1);
        assert!(record.get_as::<bool>("done").unwrap());
    }

    #[test]
    fn test_read_projection() {
        let mut record = Record::with_columns(["title"]);
        record.read_from_cursor(&cursor()).unwrap();
        assert_eq!(record.len(), 1);
        assert_eq!(record.column(Column::<String>::new("title")).unwrap(), "Milk");
        assert!(record.get("_id").is_none());
    }

    #[test]
    fn test_projection_unknown_column_fails() {
        let mut record = Record::with_columns(["missing"]);
        let err = record.read_from_cursor(&cursor()).unwrap_err();
        assert!(matches!(err, CursorError::UnknownColumn { .. }));
    }

    #[test]
    fn test_reread_replaces_fields() {
        let mut record = Record::new().set("stale", 5i64);
        record.read_from_cursor(&cursor()).unwrap();
        assert!(record.get("stale").is_none());
    }

    #[test]
    fn test_failed_read_keeps_previous_fields() {
        let mut record = Record::with_columns(["_id", "missing"]).set("_id", 99i64);
        assert!(record.read_from_cursor(&cursor()).is_err());
        assert_eq!(record.len(), 1);
        assert_eq!(record.get_as::<i64>("_id").unwrap(), 99);
    }

    #[test]
    fn test_serialize_fields() {
        let record = Record::new().set("title", "Milk");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"fields":{"title":"Milk"}}"#);
    }
}
