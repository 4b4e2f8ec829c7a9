//! Tests for the SQLite cursor and its use behind an adapter.

use cursor_adapter::{
    Adapter, Column, Cursor, CursorAdapter, CursorError, CursorHandle, NO_ID, Record, SqliteCursor,
    Value, ViewHolder,
};
use rusqlite::Connection;

const ID: Column<i64> = Column::new("_id");

fn open() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE tasks (
            _id INTEGER PRIMARY KEY,
            title TEXT NOT NULL,
            priority REAL,
            done INTEGER NOT NULL DEFAULT 0,
            attachment BLOB
        );
        INSERT INTO tasks (_id, title, priority, done, attachment) VALUES
            (10, 'Milk', 1.5, 0, NULL),
            (20, 'Eggs', NULL, 1, x'0102'),
            (30, 'Bread', 0.5, 0, NULL);",
    )
    .unwrap();
    conn
}

fn query(conn: &Connection, sql: &str) -> CursorHandle<SqliteCursor> {
    CursorHandle::new(SqliteCursor::query(conn, sql, []).unwrap())
}

#[test]
fn test_query_materializes_rows() {
    let conn = open();
    let mut cursor = SqliteCursor::query(&conn, "SELECT * FROM tasks ORDER BY _id", []).unwrap();

    assert_eq!(cursor.count(), 3);
    assert_eq!(
        cursor.column_names(),
        ["_id", "title", "priority", "done", "attachment"]
    );
    assert_eq!(cursor.sql(), "SELECT * FROM tasks ORDER BY _id");

    assert!(cursor.move_to_position(1));
    assert_eq!(cursor.get("_id").unwrap(), Value::Integer(20));
    assert_eq!(cursor.get("title").unwrap(), Value::from("Eggs"));
    assert_eq!(cursor.get("priority").unwrap(), Value::Null);
    assert_eq!(cursor.get("attachment").unwrap(), Value::Blob(vec![1, 2]));
    assert!(!cursor.move_to_position(3));
}

#[test]
fn test_query_with_params() {
    let conn = open();
    let cursor = SqliteCursor::query(&conn, "SELECT _id FROM tasks WHERE done = ?1", [1]).unwrap();
    assert_eq!(cursor.count(), 1);
}

#[test]
fn test_query_error() {
    let conn = open();
    let err = SqliteCursor::query(&conn, "SELECT * FROM missing", []).unwrap_err();
    assert!(matches!(err, CursorError::Sqlite(_)));
}

#[test]
fn test_closed_sqlite_cursor() {
    let conn = open();
    let mut cursor = SqliteCursor::query(&conn, "SELECT * FROM tasks", []).unwrap();
    cursor.close();
    assert!(cursor.is_closed());
    assert_eq!(cursor.count(), 0);
    assert!(!cursor.move_to_position(0));
}

#[test]
fn test_adapter_over_query() {
    let conn = open();
    let cursor = query(&conn, "SELECT _id, title, done FROM tasks ORDER BY _id");

    let mut adapter = CursorAdapter::create(
        Some(cursor),
        Some(ID),
        |holder: &mut ViewHolder<Record, String>, _position: usize| {
            let title: String = holder.item.get_as("title").unwrap_or_default();
            let done: bool = holder.item.get_as("done").unwrap_or(false);
            holder.view = format!("[{}] {}", if done { "x" } else { " " }, title);
        },
    );

    assert_eq!(adapter.item_count(), 3);
    assert_eq!(adapter.item_id(2), 30);

    let mut holder = ViewHolder::new(Record::new(), String::new());
    adapter.bind(&mut holder, 1).unwrap();
    assert_eq!(holder.view, "[x] Eggs");
}

#[test]
fn test_requery_with_change_cursor() {
    let conn = open();
    let first = query(&conn, "SELECT _id FROM tasks ORDER BY _id");
    let mut adapter = CursorAdapter::create(
        Some(first.clone()),
        Some(ID),
        |_: &mut ViewHolder<Record, ()>, _: usize| {},
    );

    conn.execute("DELETE FROM tasks WHERE _id = 10", []).unwrap();
    // Materialized rows do not see the delete.
    assert_eq!(adapter.item_count(), 3);

    adapter.change_cursor(Some(query(&conn, "SELECT _id FROM tasks ORDER BY _id")));
    assert!(first.is_closed());
    assert_eq!(adapter.item_count(), 2);
    assert_eq!(adapter.item_id(0), 20);
    assert_eq!(adapter.item_id(2), NO_ID);
}
