//! Cursor adapter - binds a cursor to a list rendering surface.
//!
//! The adapter provides:
//! - Item count and stable item ids read from the installed cursor
//! - Two-phase binding: row → model, then model → view via an [`ItemBinder`]
//! - Cursor replacement with and without disposal of the old cursor
//! - Change notification for the surface
//!
//! # Example
//!
//! ```
//! use cursor_adapter::{
//!     Adapter, Column, CursorAdapter, CursorHandle, MemoryCursor, Record, Value, ViewHolder,
//! };
//!
//! let cursor = CursorHandle::new(
//!     MemoryCursor::new(["_id", "title"])
//!         .row([Value::from(1i64), Value::from("Milk")])
//!         .row([Value::from(2i64), Value::from("Eggs")]),
//! );
//!
//! let mut adapter = CursorAdapter::create(
//!     Some(cursor),
//!     Some(Column::new("_id")),
//!     |holder: &mut ViewHolder<Record, String>, _position: usize| {
//!         holder.view = holder.item.get_as::<String>("title").unwrap_or_default();
//!     },
//! );
//!
//! assert_eq!(adapter.item_count(), 2);
//! assert_eq!(adapter.item_id(1), 2);
//!
//! let mut holder = ViewHolder::new(Record::new(), String::new());
//! adapter.bind(&mut holder, 0).unwrap();
//! assert_eq!(holder.view, "Milk");
//! ```

mod holder;
mod notify;
mod state;
mod traits;

pub use holder::{ItemBinder, ViewHolder};
pub use notify::{DataObserver, DataSetNotify};
pub use state::CursorAdapter;
pub use traits::{Adapter, NO_ID, default_item_id};
