//! Entity trait: identity + continuity across state changes.

use crate::timestamps::Timestamps;

/// Entity marker + minimal interface.
///
/// Catalog entities are immutable: a change yields a new, revalidated instance
/// carrying the same id.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Audit timestamps of the record.
    fn timestamps(&self) -> &Timestamps;

    /// Whether the record carries a soft-delete marker.
    fn is_deleted(&self) -> bool {
        self.timestamps().is_deleted()
    }
}
