//! Data set change notification.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Receives data set change events from an adapter.
///
/// After `on_changed` the item count, item ids and contents are all stale
/// and must be queried again.
///
/// `on_changed` runs inside [`swap_cursor`](crate::CursorAdapter::swap_cursor),
/// while the adapter is still mutably borrowed. An observer sharing the
/// adapter through `Rc<RefCell<_>>` cannot borrow it from the callback; it
/// should record the change and re-query after the swap returns, or the
/// surface should poll [`DataSetNotify::is_dirty`] instead.
///
/// Implemented for any `Fn()`.
pub trait DataObserver {
    fn on_changed(&self);
}

impl<F: Fn()> DataObserver for F {
    fn on_changed(&self) {
        self()
    }
}

/// Observer registry with a dirty flag.
///
/// Surfaces can either register an observer to be called synchronously, or
/// poll [`is_dirty`](DataSetNotify::is_dirty) before their next layout pass.
#[derive(Default)]
pub struct DataSetNotify {
    observers: Vec<Rc<dyn DataObserver>>,
    dirty: Cell<bool>,
}

impl DataSetNotify {
    /// Create a registry with no observers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer.
    pub fn register(&mut self, observer: Rc<dyn DataObserver>) {
        self.observers.push(observer);
    }

    /// Remove a previously registered observer.
    ///
    /// Returns `false` if it was not registered.
    pub fn unregister(&mut self, observer: &Rc<dyn DataObserver>) -> bool {
        let before = self.observers.len();
        self.observers.retain(|o| !Rc::ptr_eq(o, observer));
        self.observers.len() != before
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Mark the data set changed and call every observer once.
    pub fn notify_changed(&self) {
        self.dirty.set(true);
        for observer in &self.observers {
            observer.on_changed();
        }
    }

    /// Check if the data set changed since the last [`clear_dirty`](DataSetNotify::clear_dirty).
    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    /// Clear the dirty flag after the surface has re-rendered.
    pub fn clear_dirty(&self) {
        self.dirty.set(false);
    }
}

impl fmt::Debug for DataSetNotify {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataSetNotify")
            .field("observers", &self.observers.len())
            .field("dirty", &self.dirty.get())
            .finish()
    }
}
