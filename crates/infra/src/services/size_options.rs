use tracing::info;

use burgerstream_core::{DomainError, DomainResult, Entity, MenuItemId, SizeOptionId};
use burgerstream_menu::{Drink, MenuItem, Side, SizeOption, SizeOptionInput};

use super::SizeAssignment;
use crate::store::{EntityStore, SharedStore};

#[derive(Clone)]
pub struct SizeOptionService {
    sizes: SharedStore<SizeOption>,
    menu: SharedStore<MenuItem>,
    drinks: SizeAssignment<Drink>,
    sides: SizeAssignment<Side>,
}

impl SizeOptionService {
    pub fn new(sizes: SharedStore<SizeOption>, menu: SharedStore<MenuItem>) -> Self {
        Self {
            drinks: SizeAssignment::new(menu.clone(), sizes.clone()),
            sides: SizeAssignment::new(menu.clone(), sizes.clone()),
            sizes,
            menu,
        }
    }

    pub fn list(&self) -> Vec<SizeOption> {
        self.sizes.list()
    }

    pub fn create(&self, input: SizeOptionInput) -> DomainResult<SizeOption> {
        let option = input.into_size_option(SizeOptionId::new())?;
        self.sizes.upsert(option.clone());
        info!(size_id = %option.id(), label = %option.label(), size_label = %option.size_label(), "size option created");
        Ok(option)
    }

    pub fn get(&self, id: SizeOptionId) -> DomainResult<SizeOption> {
        self.sizes
            .get(&id)
            .ok_or_else(|| DomainError::not_found("Size", id))
    }

    /// Payload problems are reported before the lookup.
    pub fn update(&self, id: SizeOptionId, input: SizeOptionInput) -> DomainResult<SizeOption> {
        input.validate()?;
        let mut option = self.get(id)?;
        option.overwrite(input)?;
        self.sizes.upsert(option.clone());
        info!(size_id = %id, "size option updated");
        Ok(option)
    }

    /// Delete the option and detach it from every drink and side.
    pub fn delete(&self, id: SizeOptionId) -> DomainResult<()> {
        self.get(id)?;

        let mut detached = Vec::new();
        for mut item in self.menu.list() {
            if item.detach_size_option(&id) {
                detached.push(item);
            }
        }
        let detached_count = detached.len();
        self.menu.upsert_many(detached);
        self.sizes.remove(&id);
        info!(size_id = %id, detached_from = detached_count, "size option deleted");
        Ok(())
    }

    /// Bulk-associate the option with drinks; returns the option.
    pub fn assign_to_drinks(&self, id: SizeOptionId, drinks: &[MenuItemId]) -> DomainResult<SizeOption> {
        self.drinks.assign_bulk(id, drinks)?;
        self.get(id)
    }

    /// Bulk-associate the option with sides; returns the option.
    pub fn assign_to_sides(&self, id: SizeOptionId, sides: &[MenuItemId]) -> DomainResult<SizeOption> {
        self.sides.assign_bulk(id, sides)?;
        self.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burgerstream_core::Money;
    use burgerstream_menu::{DrinkInput, PricedItemInput, SideInput, SizedMenuItem};

    use crate::Services;

    fn small() -> SizeOptionInput {
        SizeOptionInput::new("Cold Beverage", "Small", Money::ZERO)
    }

    fn drink(services: &Services, name: &str) -> Drink {
        services
            .drinks
            .create(DrinkInput::new(PricedItemInput::new(name, Money::from_major(20))))
            .unwrap()
    }

    #[test]
    fn create_then_get() {
        let services = Services::in_memory();
        let created = services.size_options.create(small()).unwrap();
        assert_eq!(services.size_options.get(*created.id()).unwrap(), created);
        assert_eq!(services.size_options.list().len(), 1);
    }

    #[test]
    fn update_validates_before_lookup() {
        let services = Services::in_memory();
        let err = services
            .size_options
            .update(SizeOptionId::new(), SizeOptionInput::default())
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(m) if m.contains("label")));

        let err = services
            .size_options
            .update(SizeOptionId::new(), small())
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[test]
    fn update_overwrites_fields() {
        let services = Services::in_memory();
        let created = services.size_options.create(small()).unwrap();
        let updated = services
            .size_options
            .update(
                *created.id(),
                SizeOptionInput::new("Cold Beverage", "Large", Money::from_major(8)),
            )
            .unwrap();
        assert_eq!(updated.id(), created.id());
        assert_eq!(updated.size_label(), "Large");
        assert_eq!(updated.extra_price(), Money::from_major(8));
    }

    #[test]
    fn bulk_assignment_skips_unknown_ids() {
        let services = Services::in_memory();
        let size = services.size_options.create(small()).unwrap();
        let cola = drink(&services, "Cola");
        let tea = drink(&services, "Iced Tea");

        let returned = services
            .size_options
            .assign_to_drinks(*size.id(), &[*cola.id(), MenuItemId::new(), *tea.id()])
            .unwrap();

        assert_eq!(returned, size);
        assert!(services.drinks.get(*cola.id()).unwrap().size_options().contains(size.id()));
        assert!(services.drinks.get(*tea.id()).unwrap().size_options().contains(size.id()));
    }

    #[test]
    fn bulk_assignment_rejects_empty_list_before_size_lookup() {
        let services = Services::in_memory();
        let err = services
            .size_options
            .assign_to_drinks(SizeOptionId::new(), &[])
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::invalid_argument("At least one drink must be provided")
        );

        let err = services
            .size_options
            .assign_to_sides(SizeOptionId::new(), &[])
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::invalid_argument("At least one side must be provided")
        );
    }

    #[test]
    fn bulk_assignment_unknown_size_is_not_found() {
        let services = Services::in_memory();
        let cola = drink(&services, "Cola");
        let err = services
            .size_options
            .assign_to_drinks(SizeOptionId::new(), &[*cola.id()])
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[test]
    fn bulk_assignment_ignores_items_of_other_kinds() {
        let services = Services::in_memory();
        let size = services.size_options.create(small()).unwrap();
        let cola = drink(&services, "Cola");

        services
            .size_options
            .assign_to_sides(*size.id(), &[*cola.id()])
            .unwrap();
        assert!(services.drinks.get(*cola.id()).unwrap().size_options().is_empty());
    }

    #[test]
    fn delete_detaches_from_drinks_and_sides() {
        let services = Services::in_memory();
        let size = services.size_options.create(small()).unwrap();
        let cola = drink(&services, "Cola");
        let fries = services
            .sides
            .create(SideInput::new(PricedItemInput::new("Fries", Money::from_major(25))))
            .unwrap();
        services.drinks.add_size(*cola.id(), *size.id()).unwrap();
        services.sides.add_size(*fries.id(), *size.id()).unwrap();

        services.size_options.delete(*size.id()).unwrap();

        assert!(matches!(
            services.size_options.get(*size.id()),
            Err(DomainError::NotFound(_))
        ));
        assert!(services.drinks.sizes(*cola.id()).unwrap().is_empty());
        assert!(services.sides.get(*fries.id()).unwrap().size_options().is_empty());
    }
}
