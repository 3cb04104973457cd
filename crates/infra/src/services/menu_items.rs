use burgerstream_core::{DomainError, DomainResult, MenuItemId};
use burgerstream_menu::MenuItem;

use crate::store::{EntityStore, SharedStore};

/// Variant-agnostic read access to the catalog.
#[derive(Clone)]
pub struct MenuItemService {
    menu: SharedStore<MenuItem>,
}

impl MenuItemService {
    pub fn new(menu: SharedStore<MenuItem>) -> Self {
        Self { menu }
    }

    pub fn list(&self) -> Vec<MenuItem> {
        self.menu.list()
    }

    pub fn get(&self, id: MenuItemId) -> DomainResult<MenuItem> {
        self.menu
            .get(&id)
            .ok_or_else(|| DomainError::not_found("Menu Item", id))
    }
}
