use tracing::{debug, info};

use burgerstream_core::{DomainError, DomainResult, Entity, MenuItemId};
use burgerstream_menu::{Burger, BurgerFilter, BurgerInput, BurgerQuery, MenuItem};

use crate::store::{EntityStore, SharedStore};

#[derive(Clone)]
pub struct BurgerService {
    menu: SharedStore<MenuItem>,
}

impl BurgerService {
    pub fn new(menu: SharedStore<MenuItem>) -> Self {
        Self { menu }
    }

    pub fn create(&self, input: BurgerInput) -> DomainResult<Burger> {
        let burger = input.into_burger(MenuItemId::new())?;
        self.menu.upsert(burger.clone().into());
        info!(burger_id = %burger.id(), name = %burger.priced().name, "burger created");
        Ok(burger)
    }

    pub fn get(&self, id: MenuItemId) -> DomainResult<Burger> {
        self.menu
            .get(&id)
            .and_then(|item| item.as_burger().cloned())
            .ok_or_else(|| DomainError::not_found("Burger", id))
    }

    pub fn count(&self) -> usize {
        self.menu
            .find(&|item: &MenuItem| matches!(item, MenuItem::Burger(_)))
            .len()
    }

    /// Resolve the filter cascade, then query. A contradictory filter
    /// (vegan and chicken) never reaches the store.
    pub fn filtered(&self, filter: BurgerFilter) -> Vec<Burger> {
        let query = filter.query();
        debug!(?filter, ?query, "burger filter resolved");
        if query == BurgerQuery::Nothing {
            return Vec::new();
        }

        self.menu
            .find(&|item: &MenuItem| item.as_burger().is_some_and(|b| query.matches(b)))
            .into_iter()
            .filter_map(|item| match item {
                MenuItem::Burger(b) => Some(b),
                _ => None,
            })
            .collect()
    }

    pub fn update(&self, id: MenuItemId, input: BurgerInput) -> DomainResult<Burger> {
        let mut burger = self.get(id)?;
        let item = input.item.validate()?;

        burger.overwrite(item, input.flags());
        self.menu.upsert(burger.clone().into());
        info!(burger_id = %id, "burger updated");
        Ok(burger)
    }

    pub fn delete(&self, id: MenuItemId) -> DomainResult<()> {
        self.get(id)?;
        self.menu.remove(&id);
        info!(burger_id = %id, "burger deleted");
        Ok(())
    }
}
