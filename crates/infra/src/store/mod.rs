//! Entity storage abstractions.

pub mod in_memory;
#[cfg(feature = "postgres")]
pub mod postgres;

pub use in_memory::InMemoryStore;
#[cfg(feature = "postgres")]
pub use postgres::PostgresStore;

use std::sync::Arc;

use burgerstream_core::{AggregateRoot, Entity};

/// Key/value store for one kind of entity, keyed by the entity's id.
///
/// Each call is one atomic unit against the store. Listing preserves
/// insertion order; updating a record keeps its position.
pub trait EntityStore<V: Entity>: Send + Sync {
    fn get(&self, id: &V::Id) -> Option<V>;
    /// Records for the ids that exist; unknown ids are skipped.
    fn get_many(&self, ids: &[V::Id]) -> Vec<V>;
    fn list(&self) -> Vec<V>;
    fn find(&self, predicate: &dyn Fn(&V) -> bool) -> Vec<V>;
    fn upsert(&self, value: V);
    /// Persist a batch under a single write.
    fn upsert_many(&self, values: Vec<V>);
    fn remove(&self, id: &V::Id) -> Option<V>;
    fn count(&self) -> usize;
}

/// Shared handle used by the services.
pub type SharedStore<V> = Arc<dyn EntityStore<V>>;

/// Children owned across every stored aggregate of one kind.
pub fn count_children<A: AggregateRoot>(store: &dyn EntityStore<A>) -> usize {
    store.list().iter().map(|root| root.children().len()).sum()
}

impl<V, S> EntityStore<V> for Arc<S>
where
    V: Entity,
    S: EntityStore<V> + ?Sized,
{
    fn get(&self, id: &V::Id) -> Option<V> {
        (**self).get(id)
    }

    fn get_many(&self, ids: &[V::Id]) -> Vec<V> {
        (**self).get_many(ids)
    }

    fn list(&self) -> Vec<V> {
        (**self).list()
    }

    fn find(&self, predicate: &dyn Fn(&V) -> bool) -> Vec<V> {
        (**self).find(predicate)
    }

    fn upsert(&self, value: V) {
        (**self).upsert(value)
    }

    fn upsert_many(&self, values: Vec<V>) {
        (**self).upsert_many(values)
    }

    fn remove(&self, id: &V::Id) -> Option<V> {
        (**self).remove(id)
    }

    fn count(&self) -> usize {
        (**self).count()
    }
}
