//! Cursor-backed list adapter.
//!
//! Binds a positionable, closeable result set ([`Cursor`]) to a list
//! rendering surface. The [`CursorAdapter`] reports item counts and stable
//! item ids, populates recycled [`ViewHolder`]s from the current row, and
//! owns the replace protocol for the cursor it is bound to.

pub mod adapter;
pub mod config;
pub mod cursor;
pub mod error;
pub mod model;
pub mod value;

pub use adapter::{
    Adapter, CursorAdapter, DataObserver, DataSetNotify, ItemBinder, NO_ID, ViewHolder,
};
pub use config::AdapterConfig;
pub use cursor::{Column, Cursor, CursorHandle, MemoryCursor, SqliteCursor};
pub use error::{AdapterError, CursorError};
pub use model::{Model, Record};
pub use value::{FromValue, Value};
