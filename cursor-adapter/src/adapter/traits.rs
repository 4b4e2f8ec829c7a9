//! The contract a list rendering surface consumes.

use crate::error::AdapterError;

/// Reserved item id meaning "no stable id for this item".
///
/// A real id equal to this value cannot be told apart from the sentinel.
pub const NO_ID: i64 = -1;

/// Item id reported by adapters without stable ids.
pub fn default_item_id(_position: usize) -> i64 {
    NO_ID
}

/// Trait for data sources a list surface renders from.
///
/// The surface asks for the item count, recycles holders and asks the
/// adapter to bind them by position. Adapters that opt into stable ids let
/// the surface match items across data set changes.
///
/// # Implementors
///
/// - `CursorAdapter<C, M, V, B>` - Rows from a [`Cursor`](crate::Cursor)
pub trait Adapter {
    /// Holder type the surface recycles.
    type Holder;

    /// Number of items the surface should lay out.
    fn item_count(&self) -> usize;

    /// Whether [`item_id`](Adapter::item_id) returns stable ids.
    fn has_stable_ids(&self) -> bool {
        false
    }

    /// Stable id of the item at `position`.
    fn item_id(&self, position: usize) -> i64 {
        default_item_id(position)
    }

    /// Populate `holder` for the item at `position`.
    ///
    /// Only called for positions below the last reported count; anything
    /// else is a state violation and must be reported as an error.
    fn bind(&mut self, holder: &mut Self::Holder, position: usize) -> Result<(), AdapterError>;
}
