//! Size option association for drinks and sides.
//!
//! Both variants share the same many-to-many rules, so the logic lives here
//! once and is parameterised over [`SizedMenuItem`].

use std::marker::PhantomData;

use tracing::{debug, info};

use burgerstream_core::{DomainError, DomainResult, Entity, MenuItemId, SizeOptionId};
use burgerstream_menu::{MenuItem, SizeOption, SizedMenuItem};

use crate::store::{EntityStore, SharedStore};

pub struct SizeAssignment<T> {
    menu: SharedStore<MenuItem>,
    sizes: SharedStore<SizeOption>,
    _kind: PhantomData<fn() -> T>,
}

impl<T> Clone for SizeAssignment<T> {
    fn clone(&self) -> Self {
        Self {
            menu: self.menu.clone(),
            sizes: self.sizes.clone(),
            _kind: PhantomData,
        }
    }
}

impl<T: SizedMenuItem> SizeAssignment<T> {
    pub fn new(menu: SharedStore<MenuItem>, sizes: SharedStore<SizeOption>) -> Self {
        Self {
            menu,
            sizes,
            _kind: PhantomData,
        }
    }

    pub fn load(&self, id: MenuItemId) -> DomainResult<T> {
        self.menu
            .get(&id)
            .and_then(|item| T::from_menu_item(&item).cloned())
            .ok_or_else(|| DomainError::not_found(T::KIND.as_str(), id))
    }

    fn load_size(&self, size_id: SizeOptionId) -> DomainResult<SizeOption> {
        self.sizes
            .get(&size_id)
            .ok_or_else(|| DomainError::not_found("Size", size_id))
    }

    /// Size options associated with the item, ordered by size id.
    pub fn sizes_of(&self, id: MenuItemId) -> DomainResult<Vec<SizeOption>> {
        let item = self.load(id)?;
        let ids: Vec<SizeOptionId> = item.size_options().iter().copied().collect();
        Ok(self.sizes.get_many(&ids))
    }

    /// Associate an existing size with an existing item. Idempotent.
    pub fn add(&self, id: MenuItemId, size_id: SizeOptionId) -> DomainResult<T> {
        let mut item = self.load(id)?;
        self.load_size(size_id)?;

        if item.add_size_option(size_id) {
            info!(kind = %T::KIND, item_id = %id, size_id = %size_id, "size option associated");
        } else {
            debug!(kind = %T::KIND, item_id = %id, size_id = %size_id, "size option already associated");
        }
        self.menu.upsert(item.clone().into());
        Ok(item)
    }

    /// Drop the association. Both ends must exist; a missing association is
    /// not an error and the item is persisted either way.
    pub fn remove(&self, id: MenuItemId, size_id: SizeOptionId) -> DomainResult<T> {
        let mut item = self.load(id)?;
        self.load_size(size_id)?;

        if item.remove_size_option(&size_id) {
            info!(kind = %T::KIND, item_id = %id, size_id = %size_id, "size option detached");
        }
        self.menu.upsert(item.clone().into());
        Ok(item)
    }

    /// Associate one size with many items in a single write.
    ///
    /// An empty id list is rejected before the size is looked up. Ids that
    /// do not resolve to an item of this kind are skipped.
    pub fn assign_bulk(&self, size_id: SizeOptionId, ids: &[MenuItemId]) -> DomainResult<Vec<T>> {
        if ids.is_empty() {
            let noun = T::KIND.as_str().to_lowercase();
            return Err(DomainError::invalid_argument(format!(
                "At least one {noun} must be provided"
            )));
        }
        self.load_size(size_id)?;

        let mut updated = Vec::with_capacity(ids.len());
        for item in self.menu.get_many(ids) {
            let Some(found) = T::from_menu_item(&item) else {
                debug!(kind = %T::KIND, item_id = %item.id(), "skipping item of another kind");
                continue;
            };
            let mut found = found.clone();
            found.add_size_option(size_id);
            updated.push(found);
        }
        if updated.len() < ids.len() {
            debug!(
                kind = %T::KIND,
                requested = ids.len(),
                resolved = updated.len(),
                "unknown ids skipped during bulk assignment"
            );
        }

        self.menu
            .upsert_many(updated.iter().cloned().map(Into::into).collect());
        info!(kind = %T::KIND, size_id = %size_id, count = updated.len(), "size option assigned in bulk");
        Ok(updated)
    }
}
