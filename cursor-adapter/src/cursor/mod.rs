//! Cursor contract, typed columns and shared cursor handles.
//!
//! A cursor is a positionable, closeable reader over a result set of rows.
//! The adapter only depends on the [`Cursor`] trait; [`MemoryCursor`] and
//! [`SqliteCursor`] are the implementations shipped with the crate.

mod memory;
mod sqlite;

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

pub use memory::MemoryCursor;
pub use sqlite::SqliteCursor;

use crate::error::CursorError;
use crate::value::{FromValue, Value};

/// A positionable, closeable reader over rows.
///
/// `move_to_position` may be called any number of times. Once closed, a
/// cursor refuses to move and reports zero rows.
pub trait Cursor {
    /// Number of rows in the result set.
    fn count(&self) -> usize;

    /// Current row, if the cursor has been moved onto one.
    fn position(&self) -> Option<usize>;

    /// Move to `position`. Returns `false` (and leaves the position
    /// unchanged) if the position is out of range or the cursor is closed.
    fn move_to_position(&mut self, position: usize) -> bool;

    /// Column names, in result order.
    fn column_names(&self) -> &[String];

    /// Read a cell from the current row.
    fn get(&self, column: &str) -> Result<Value, CursorError>;

    /// Release the underlying rows.
    fn close(&mut self);

    /// Whether [`close`](Cursor::close) has been called.
    fn is_closed(&self) -> bool;

    /// Index of a column by name.
    fn column_index(&self, column: &str) -> Option<usize> {
        self.column_names().iter().position(|name| name == column)
    }
}

// =============================================================================
// Typed columns
// =============================================================================

/// A typed reference to a cursor column.
///
/// # Example
///
/// ```
/// use cursor_adapter::{Column, Cursor, MemoryCursor};
///
/// const ID: Column<i64> = Column::new("_id");
///
/// let mut cursor = MemoryCursor::new(["_id"]).row([7i64]);
/// assert!(cursor.move_to_position(0));
/// assert_eq!(ID.read(&cursor).unwrap(), 7);
/// ```
pub struct Column<T> {
    name: &'static str,
    _type: PhantomData<fn() -> T>,
}

impl<T> Column<T> {
    /// Creates a column reference for `name`.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _type: PhantomData,
        }
    }

    /// Returns the column name.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<T: FromValue> Column<T> {
    /// Read this column from the cursor's current row.
    pub fn read(&self, cursor: &dyn Cursor) -> Result<T, CursorError> {
        T::from_value(cursor.get(self.name)?, self.name)
    }
}

// Manual impls: derives would put bounds on T.
impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Column<T> {}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Column").field(&self.name).finish()
    }
}

impl<T> PartialEq for Column<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<T> Eq for Column<T> {}

// =============================================================================
// Shared handle
// =============================================================================

/// Shared, single-threaded handle to a cursor.
///
/// Cloning a handle shares the cursor; [`ptr_eq`](CursorHandle::ptr_eq)
/// tells whether two handles refer to the same instance. The handle is
/// `!Send`, so an adapter holding one stays on the thread that created it.
pub struct CursorHandle<C: Cursor> {
    inner: Rc<RefCell<C>>,
}

impl<C: Cursor> CursorHandle<C> {
    /// Wrap a cursor in a new handle.
    pub fn new(cursor: C) -> Self {
        Self {
            inner: Rc::new(RefCell::new(cursor)),
        }
    }

    /// Whether both handles refer to the same cursor instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Borrow the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is currently mutably borrowed.
    pub fn borrow(&self) -> Ref<'_, C> {
        self.inner.borrow()
    }

    /// Mutably borrow the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is currently borrowed.
    pub fn borrow_mut(&self) -> RefMut<'_, C> {
        self.inner.borrow_mut()
    }

    /// Number of rows in the cursor.
    pub fn count(&self) -> usize {
        self.inner.borrow().count()
    }

    /// Close the cursor.
    pub fn close(&self) {
        self.inner.borrow_mut().close();
    }

    /// Whether the cursor has been closed.
    pub fn is_closed(&self) -> bool {
        self.inner.borrow().is_closed()
    }
}

impl<C: Cursor> Clone for CursorHandle<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<C: Cursor> fmt::Debug for CursorHandle<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorHandle")
            .field("ptr", &Rc::as_ptr(&self.inner))
            .finish()
    }
}

impl<C: Cursor> From<C> for CursorHandle<C> {
    fn from(cursor: C) -> Self {
        Self::new(cursor)
    }
}
