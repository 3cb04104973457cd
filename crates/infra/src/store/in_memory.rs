use std::collections::HashMap;
use std::sync::RwLock;

use burgerstream_core::Entity;

use super::EntityStore;

#[derive(Debug)]
struct Row<V> {
    seq: u64,
    value: V,
}

#[derive(Debug)]
struct Table<V: Entity> {
    rows: HashMap<V::Id, Row<V>>,
    next_seq: u64,
}

impl<V: Entity> Table<V> {
    fn put(&mut self, value: V) {
        let id = value.id().clone();
        match self.rows.get_mut(&id) {
            Some(row) => row.value = value,
            None => {
                let seq = self.next_seq;
                self.next_seq += 1;
                self.rows.insert(id, Row { seq, value });
            }
        }
    }
}

/// In-memory entity store for tests/dev.
#[derive(Debug)]
pub struct InMemoryStore<V: Entity> {
    inner: RwLock<Table<V>>,
}

impl<V: Entity> InMemoryStore<V> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Table {
                rows: HashMap::new(),
                next_seq: 0,
            }),
        }
    }
}

impl<V: Entity> Default for InMemoryStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> InMemoryStore<V>
where
    V: Entity + Clone,
{
    fn collect(&self, predicate: &dyn Fn(&V) -> bool) -> Vec<V> {
        let table = match self.inner.read() {
            Ok(t) => t,
            Err(_) => return vec![],
        };

        let mut rows = table
            .rows
            .values()
            .filter(|row| predicate(&row.value))
            .collect::<Vec<_>>();
        rows.sort_by_key(|row| row.seq);
        rows.into_iter().map(|row| row.value.clone()).collect()
    }
}

impl<V> EntityStore<V> for InMemoryStore<V>
where
    V: Entity + Clone + Send + Sync + 'static,
    V::Id: Send + Sync,
{
    fn get(&self, id: &V::Id) -> Option<V> {
        let table = self.inner.read().ok()?;
        table.rows.get(id).map(|row| row.value.clone())
    }

    fn get_many(&self, ids: &[V::Id]) -> Vec<V> {
        let table = match self.inner.read() {
            Ok(t) => t,
            Err(_) => return vec![],
        };
        ids.iter()
            .filter_map(|id| table.rows.get(id).map(|row| row.value.clone()))
            .collect()
    }

    fn list(&self) -> Vec<V> {
        self.collect(&|_: &V| true)
    }

    fn find(&self, predicate: &dyn Fn(&V) -> bool) -> Vec<V> {
        self.collect(predicate)
    }

    fn upsert(&self, value: V) {
        if let Ok(mut table) = self.inner.write() {
            table.put(value);
        }
    }

    fn upsert_many(&self, values: Vec<V>) {
        if let Ok(mut table) = self.inner.write() {
            for value in values {
                table.put(value);
            }
        }
    }

    fn remove(&self, id: &V::Id) -> Option<V> {
        let mut table = self.inner.write().ok()?;
        table.rows.remove(id).map(|row| row.value)
    }

    fn count(&self) -> usize {
        self.inner.read().map(|t| t.rows.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Note {
        id: u32,
        text: &'static str,
    }

    impl Entity for Note {
        type Id = u32;

        fn id(&self) -> &u32 {
            &self.id
        }
    }

    fn note(id: u32, text: &'static str) -> Note {
        Note { id, text }
    }

    #[test]
    fn list_preserves_insertion_order_across_updates() {
        let store = InMemoryStore::new();
        store.upsert(note(3, "c"));
        store.upsert(note(1, "a"));
        store.upsert(note(2, "b"));
        store.upsert(note(3, "c2"));

        let texts = store.list().into_iter().map(|n| n.text).collect::<Vec<_>>();
        assert_eq!(texts, vec!["c2", "a", "b"]);
    }

    #[test]
    fn get_many_skips_unknown_ids() {
        let store = InMemoryStore::new();
        store.upsert_many(vec![note(1, "a"), note(2, "b")]);

        let found = store.get_many(&[2, 9, 1]);
        assert_eq!(found, vec![note(2, "b"), note(1, "a")]);
    }

    #[test]
    fn remove_and_count() {
        let store = InMemoryStore::new();
        store.upsert(note(1, "a"));
        assert_eq!(store.count(), 1);
        assert_eq!(store.remove(&1), Some(note(1, "a")));
        assert_eq!(store.remove(&1), None);
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn find_filters() {
        let store = InMemoryStore::new();
        store.upsert_many(vec![note(1, "keep"), note(2, "drop"), note(3, "keep")]);
        let kept = store.find(&|n: &Note| n.text == "keep");
        assert_eq!(kept.iter().map(|n| n.id).collect::<Vec<_>>(), vec![1, 3]);
    }
}
