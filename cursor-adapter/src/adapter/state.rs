//! Cursor adapter state.

use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use log::{debug, trace, warn};

use crate::config::AdapterConfig;
use crate::cursor::{Column, Cursor, CursorHandle};
use crate::error::AdapterError;
use crate::model::Model;

use super::holder::{ItemBinder, ViewHolder};
use super::notify::{DataObserver, DataSetNotify};
use super::traits::{Adapter, NO_ID, default_item_id};

/// An [`Adapter`] backed by a [`Cursor`].
///
/// `CursorAdapter` holds zero or one cursor and:
/// - Reports the cursor's row count as the item count
/// - Reports the id column as a stable item id, if one was configured
/// - Binds holders by reading the row into `holder.item`, then calling the binder
/// - Replaces its cursor with [`swap_cursor`](Self::swap_cursor) (caller
///   keeps the old cursor) or [`change_cursor`](Self::change_cursor) (adapter
///   closes it)
///
/// The adapter never closes a cursor on its own, including when dropped.
pub struct CursorAdapter<C: Cursor, M, V, B> {
    /// Installed cursor.
    cursor: Option<CursorHandle<C>>,
    /// Id column. Fixed at construction.
    id_column: Option<Column<i64>>,
    /// Second bind phase.
    binder: B,
    /// Change notification for the surface.
    notify: DataSetNotify,
    _holder: PhantomData<fn(&mut ViewHolder<M, V>)>,
}

impl<C, M, V, B> CursorAdapter<C, M, V, B>
where
    C: Cursor,
    M: Model,
    B: ItemBinder<M, V>,
{
    /// Create an adapter with no cursor and no stable ids.
    pub fn new(binder: B) -> Self {
        Self::create(None, None, binder)
    }

    /// Create an adapter backed by `cursor`, without stable ids.
    pub fn with_cursor(cursor: CursorHandle<C>, binder: B) -> Self {
        Self::create(Some(cursor), None, binder)
    }

    /// Create an adapter with no cursor that reads item ids from `id_column`.
    ///
    /// The column should be distinct and non-null for every row.
    pub fn with_id_column(id_column: Column<i64>, binder: B) -> Self {
        Self::create(None, Some(id_column), binder)
    }

    /// Create an adapter.
    ///
    /// Passing an id column enables stable ids for the adapter's lifetime.
    pub fn create(
        cursor: Option<CursorHandle<C>>,
        id_column: Option<Column<i64>>,
        binder: B,
    ) -> Self {
        Self {
            cursor,
            id_column,
            binder,
            notify: DataSetNotify::new(),
            _holder: PhantomData,
        }
    }

    /// Create an adapter from a config.
    pub fn from_config(config: AdapterConfig, cursor: Option<CursorHandle<C>>, binder: B) -> Self {
        Self::create(cursor, config.id_column, binder)
    }

    // -------------------------------------------------------------------------
    // Cursor
    // -------------------------------------------------------------------------

    /// Get the installed cursor.
    pub fn cursor(&self) -> Option<&CursorHandle<C>> {
        self.cursor.as_ref()
    }

    /// Get the id column, if stable ids are enabled.
    pub fn id_column(&self) -> Option<Column<i64>> {
        self.id_column
    }

    /// Replace the cursor and return the previous one without closing it.
    ///
    /// If `new_cursor` is the installed cursor (or both are absent) nothing
    /// happens and `None` is returned. Otherwise observers are notified once
    /// before this returns. Closing the returned cursor is the caller's job.
    #[must_use = "the previous cursor is not closed; close it or use change_cursor"]
    pub fn swap_cursor(&mut self, new_cursor: Option<CursorHandle<C>>) -> Option<CursorHandle<C>> {
        let unchanged = match (&self.cursor, &new_cursor) {
            (None, None) => true,
            (Some(current), Some(new)) => current.ptr_eq(new),
            _ => false,
        };
        if unchanged {
            trace!("Ignoring swap to the installed cursor");
            return None;
        }

        let old = std::mem::replace(&mut self.cursor, new_cursor);
        debug!(
            "Swapped cursor: {} -> {} rows",
            old.as_ref().map_or(0, CursorHandle::count),
            self.item_count()
        );
        self.notify.notify_changed();
        old
    }

    /// Replace the cursor and close the previous one.
    ///
    /// The adapter owns the disposal here; the caller must not close the old
    /// cursor again. `new_cursor` is never closed by this call.
    pub fn change_cursor(&mut self, new_cursor: Option<CursorHandle<C>>) {
        if let Some(old) = self.swap_cursor(new_cursor) {
            debug!("Closing replaced cursor");
            old.close();
        }
    }

    // -------------------------------------------------------------------------
    // Observation
    // -------------------------------------------------------------------------

    /// Register an observer for data set changes.
    pub fn register_observer(&mut self, observer: Rc<dyn DataObserver>) {
        self.notify.register(observer);
    }

    /// Remove a registered observer. Returns `false` if it was not registered.
    pub fn unregister_observer(&mut self, observer: &Rc<dyn DataObserver>) -> bool {
        self.notify.unregister(observer)
    }

    /// Check if the data set changed since the last [`clear_dirty`](Self::clear_dirty).
    pub fn is_dirty(&self) -> bool {
        self.notify.is_dirty()
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.notify.clear_dirty();
    }
}

impl<C, M, V, B> Adapter for CursorAdapter<C, M, V, B>
where
    C: Cursor,
    M: Model,
    B: ItemBinder<M, V>,
{
    type Holder = ViewHolder<M, V>;

    fn item_count(&self) -> usize {
        self.cursor.as_ref().map_or(0, CursorHandle::count)
    }

    fn has_stable_ids(&self) -> bool {
        self.id_column.is_some()
    }

    fn item_id(&self, position: usize) -> i64 {
        let Some(column) = self.id_column else {
            return default_item_id(position);
        };
        let Some(handle) = &self.cursor else {
            return NO_ID;
        };

        let mut cursor = handle.borrow_mut();
        if !cursor.move_to_position(position) {
            return NO_ID;
        }
        match column.read(&*cursor) {
            Ok(id) => id,
            Err(e) => {
                warn!("Unreadable id at position {}: {}", position, e);
                NO_ID
            }
        }
    }

    fn bind(&mut self, holder: &mut Self::Holder, position: usize) -> Result<(), AdapterError> {
        let Some(handle) = &self.cursor else {
            return Err(AdapterError::NoCursor { position });
        };

        // The cursor borrow must end before the binder runs.
        {
            let mut cursor = handle.borrow_mut();
            if !cursor.move_to_position(position) {
                return Err(AdapterError::InvalidPosition {
                    position,
                    count: cursor.count(),
                });
            }
            holder.item.read_from_cursor(&*cursor)?;
        }

        trace!("Bound position {}", position);
        self.binder.bind_item(holder, position);
        Ok(())
    }
}

impl<C: Cursor, M, V, B> fmt::Debug for CursorAdapter<C, M, V, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorAdapter")
            .field("cursor", &self.cursor)
            .field("id_column", &self.id_column)
            .field("notify", &self.notify)
            .finish_non_exhaustive()
    }
}
