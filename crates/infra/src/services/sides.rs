use tracing::info;

use burgerstream_core::{DomainResult, Entity, MenuItemId, SizeOptionId};
use burgerstream_menu::{MenuItem, SizeOption, Side, SideFilter, SideInput};

use super::SizeAssignment;
use crate::store::{EntityStore, SharedStore};

#[derive(Clone)]
pub struct SideService {
    menu: SharedStore<MenuItem>,
    sizes: SizeAssignment<Side>,
}

impl SideService {
    pub fn new(menu: SharedStore<MenuItem>, sizes: SharedStore<SizeOption>) -> Self {
        Self {
            sizes: SizeAssignment::new(menu.clone(), sizes),
            menu,
        }
    }

    pub fn create(&self, input: SideInput) -> DomainResult<Side> {
        let side = input.into_side(MenuItemId::new())?;
        self.menu.upsert(side.clone().into());
        info!(side_id = %side.id(), name = %side.priced().name, "side created");
        Ok(side)
    }

    pub fn get(&self, id: MenuItemId) -> DomainResult<Side> {
        self.sizes.load(id)
    }

    pub fn filtered(&self, filter: SideFilter) -> Vec<Side> {
        self.menu
            .find(&|item: &MenuItem| matches!(item, MenuItem::Side(s) if filter.matches(s)))
            .into_iter()
            .filter_map(|item| match item {
                MenuItem::Side(s) => Some(s),
                _ => None,
            })
            .collect()
    }

    pub fn update(&self, id: MenuItemId, input: SideInput) -> DomainResult<Side> {
        let mut side = self.get(id)?;
        let item = input.item.validate()?;

        side.overwrite(item, input.shareable);
        self.menu.upsert(side.clone().into());
        info!(side_id = %id, "side updated");
        Ok(side)
    }

    pub fn delete(&self, id: MenuItemId) -> DomainResult<()> {
        self.get(id)?;
        self.menu.remove(&id);
        info!(side_id = %id, "side deleted");
        Ok(())
    }

    pub fn sizes(&self, id: MenuItemId) -> DomainResult<Vec<SizeOption>> {
        self.sizes.sizes_of(id)
    }

    pub fn add_size(&self, id: MenuItemId, size_id: SizeOptionId) -> DomainResult<Side> {
        self.sizes.add(id, size_id)
    }

    pub fn remove_size(&self, id: MenuItemId, size_id: SizeOptionId) -> DomainResult<Side> {
        self.sizes.remove(id, size_id)
    }
}
