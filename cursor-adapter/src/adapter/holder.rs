//! View holders and the bind hook.

/// A recycled pair of model item and view.
///
/// The surface keeps a pool of holders and rebinds them as items scroll in
/// and out. The adapter fills `item` from the cursor before the
/// [`ItemBinder`] applies it to `view`.
#[derive(Debug, Clone, Default)]
pub struct ViewHolder<M, V> {
    /// Model populated from the bound row.
    pub item: M,
    /// Caller-defined visual representation.
    pub view: V,
}

impl<M, V> ViewHolder<M, V> {
    /// Create a holder.
    pub fn new(item: M, view: V) -> Self {
        Self { item, view }
    }
}

/// Applies a populated item to its view.
///
/// Called after the holder's item has been read from the row at
/// `position`, so `holder.item` is fully populated.
///
/// Implemented for any `FnMut(&mut ViewHolder<M, V>, usize)`.
pub trait ItemBinder<M, V> {
    fn bind_item(&mut self, holder: &mut ViewHolder<M, V>, position: usize);
}

impl<M, V, F> ItemBinder<M, V> for F
where
    F: FnMut(&mut ViewHolder<M, V>, usize),
{
    fn bind_item(&mut self, holder: &mut ViewHolder<M, V>, position: usize) {
        self(holder, position)
    }
}
