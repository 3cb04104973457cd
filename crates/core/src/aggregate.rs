//! Aggregate root trait for consistency boundaries that own child entities.

use crate::entity::Entity;

/// Aggregate root: an entity that owns a collection of children and keeps
/// derived state over them consistent.
///
/// Children are only reachable through the root, and the root is persisted as
/// a single unit together with everything it owns. Deleting the root deletes
/// its children.
pub trait AggregateRoot: Entity {
    /// Owned child type.
    type Child;

    /// Children currently attached to this root, in insertion order.
    fn children(&self) -> &[Self::Child];
}
