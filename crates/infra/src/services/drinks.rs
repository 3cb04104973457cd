use tracing::{debug, info};

use burgerstream_core::{DomainResult, Entity, MenuItemId, SizeOptionId};
use burgerstream_menu::{Drink, DrinkFilter, DrinkInput, MenuItem, SizeOption};

use super::SizeAssignment;
use crate::store::{EntityStore, SharedStore};

#[derive(Clone)]
pub struct DrinkService {
    menu: SharedStore<MenuItem>,
    sizes: SizeAssignment<Drink>,
}

impl DrinkService {
    pub fn new(menu: SharedStore<MenuItem>, sizes: SharedStore<SizeOption>) -> Self {
        Self {
            sizes: SizeAssignment::new(menu.clone(), sizes),
            menu,
        }
    }

    pub fn create(&self, input: DrinkInput) -> DomainResult<Drink> {
        let drink = input.into_drink(MenuItemId::new())?;
        self.menu.upsert(drink.clone().into());
        info!(drink_id = %drink.id(), name = %drink.priced().name, "drink created");
        Ok(drink)
    }

    pub fn get(&self, id: MenuItemId) -> DomainResult<Drink> {
        self.sizes.load(id)
    }

    pub fn filtered(&self, filter: DrinkFilter) -> Vec<Drink> {
        let query = filter.query();
        debug!(?filter, ?query, "drink filter resolved");
        self.menu
            .find(&|item: &MenuItem| matches!(item, MenuItem::Drink(d) if query.matches(d)))
            .into_iter()
            .filter_map(|item| match item {
                MenuItem::Drink(d) => Some(d),
                _ => None,
            })
            .collect()
    }

    /// Replace every field except the id and the size associations.
    pub fn update(&self, id: MenuItemId, input: DrinkInput) -> DomainResult<Drink> {
        let mut drink = self.get(id)?;
        let item = input.item.validate()?;

        drink.overwrite(item, input.carbonated, input.lactose_free);
        self.menu.upsert(drink.clone().into());
        info!(drink_id = %id, "drink updated");
        Ok(drink)
    }

    pub fn delete(&self, id: MenuItemId) -> DomainResult<()> {
        self.get(id)?;
        self.menu.remove(&id);
        info!(drink_id = %id, "drink deleted");
        Ok(())
    }

    pub fn sizes(&self, id: MenuItemId) -> DomainResult<Vec<SizeOption>> {
        self.sizes.sizes_of(id)
    }

    pub fn add_size(&self, id: MenuItemId, size_id: SizeOptionId) -> DomainResult<Drink> {
        self.sizes.add(id, size_id)
    }

    pub fn remove_size(&self, id: MenuItemId, size_id: SizeOptionId) -> DomainResult<Drink> {
        self.sizes.remove(id, size_id)
    }
}
