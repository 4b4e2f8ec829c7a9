//! SQLite-backed cursor.

use log::debug;
use rusqlite::{Connection, Params};

use crate::error::CursorError;
use crate::value::Value;

use super::{Cursor, MemoryCursor};

/// A cursor over the result of a SQLite query.
///
/// The query runs once in [`query`](SqliteCursor::query) and its rows are
/// materialized, so positioning and reads never touch the connection again.
/// To pick up new data, run a fresh query and hand the new cursor to
/// [`CursorAdapter::change_cursor`](crate::CursorAdapter::change_cursor).
#[derive(Debug)]
pub struct SqliteCursor {
    sql: String,
    rows: MemoryCursor,
}

impl SqliteCursor {
    /// Run `sql` with `params` on `conn` and materialize the result.
    pub fn query<P: Params>(conn: &Connection, sql: &str, params: P) -> Result<Self, CursorError> {
        let mut stmt = conn.prepare(sql)?;
        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();
        let width = columns.len();

        let rows = stmt
            .query_map(params, |row| {
                (0..width)
                    .map(|i| row.get_ref(i).map(Value::from))
                    .collect::<Result<Vec<_>, _>>()
            })?
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Query returned {} rows: {}", rows.len(), sql);

        Ok(Self {
            sql: sql.to_string(),
            rows: MemoryCursor::from_parts(columns, rows),
        })
    }

    /// The SQL this cursor was produced from.
    pub fn sql(&self) -> &str {
        &self.sql
    }
}

impl Cursor for SqliteCursor {
    fn count(&self) -> usize {
        self.rows.count()
    }

    fn position(&self) -> Option<usize> {
        self.rows.position()
    }

    fn move_to_position(&mut self, position: usize) -> bool {
        self.rows.move_to_position(position)
    }

    fn column_names(&self) -> &[String] {
        self.rows.column_names()
    }

    fn get(&self, column: &str) -> Result<Value, CursorError> {
        self.rows.get(column)
    }

    fn close(&mut self) {
        debug!("Closing cursor: {}", self.sql);
        self.rows.close();
    }

    fn is_closed(&self) -> bool {
        self.rows.is_closed()
    }
}
