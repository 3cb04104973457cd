//! One-time catalog bootstrap.

use tracing::info;

use burgerstream_core::{DomainResult, Entity, Money};
use burgerstream_menu::{BurgerInput, DrinkInput, PricedItemInput, SideInput, SizeOptionInput};
use burgerstream_orders::CustomerDetails;

use crate::services::{NewOrder, NewOrderLine, Services};

/// Populate the demo catalog and a sample order.
///
/// Skipped when any burger already exists. Returns whether data was written.
pub fn seed_catalog(services: &Services) -> DomainResult<bool> {
    if services.burgers.count() > 0 {
        info!("catalog already populated, skipping seed");
        return Ok(false);
    }

    let sizes = &services.size_options;
    let small = sizes.create(SizeOptionInput::new("Cold Beverage", "Small", Money::ZERO))?;
    let medium = sizes.create(SizeOptionInput::new("Cold Beverage", "Medium", Money::from_major(5)))?;
    let large = sizes.create(SizeOptionInput::new("Fries Pack", "Large", Money::from_major(10)))?;

    services.burgers.create(
        BurgerInput::new(
            PricedItemInput::new("Classic Burger", Money::from_major(75))
                .with_description("Beef patty, cheddar, lettuce and tomato"),
        ),
    )?;
    services.burgers.create(
        BurgerInput::new(
            PricedItemInput::new("Vegan Delight", Money::from_major(80))
                .with_description("Plant-based patty with avocado"),
        )
        .vegan(true),
    )?;

    let fries = services.sides.create(
        SideInput::new(PricedItemInput::new("French Fries", Money::from_major(25))).shareable(true),
    )?;
    services
        .sides
        .create(SideInput::new(PricedItemInput::new("Mac n Cheese", Money::from_major(30))))?;
    services.sides.add_size(*fries.id(), *large.id())?;

    let cola = services.drinks.create(
        DrinkInput::new(PricedItemInput::new("Cola", Money::from_major(20)))
            .carbonated(true)
            .lactose_free(true),
    )?;
    let shake = services.drinks.create(DrinkInput::new(PricedItemInput::new(
        "Chocolate Milkshake",
        Money::from_major(35),
    )))?;
    for drink in [&cola, &shake] {
        services.drinks.add_size(*drink.id(), *small.id())?;
        services.drinks.add_size(*drink.id(), *medium.id())?;
    }

    let order = services.orders.create(NewOrder {
        customer: CustomerDetails::new("John Doe", "John@Example.com"),
        items: vec![
            NewOrderLine {
                menu_item_id: *cola.id(),
                size_option_id: Some(*medium.id()),
                amount: 1,
                item_end_price: Money::from_major(30),
            },
            NewOrderLine {
                menu_item_id: *fries.id(),
                size_option_id: Some(*large.id()),
                amount: 2,
                item_end_price: Money::from_major(70),
            },
        ],
    })?;

    info!(
        menu_items = services.menu_items.list().len(),
        size_options = services.size_options.list().len(),
        order_id = %order.id(),
        "catalog seeded"
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use burgerstream_menu::{BurgerFilter, SideFilter};

    #[test]
    fn seeds_once() {
        let services = Services::in_memory();
        assert!(seed_catalog(&services).unwrap());
        assert!(!seed_catalog(&services).unwrap());

        assert_eq!(services.menu_items.list().len(), 6);
        assert_eq!(services.size_options.list().len(), 3);
        assert_eq!(services.orders.count(), 1);
        assert_eq!(services.orders.count_order_items(), 2);
    }

    #[test]
    fn seeded_order_total_is_derived() {
        let services = Services::in_memory();
        seed_catalog(&services).unwrap();

        let order = services.orders.list().remove(0);
        assert_eq!(order.customer_name(), "John Doe");
        assert_eq!(order.order_end_price(), Money::from_major(100));
    }

    #[test]
    fn seeded_flags_and_sizes() {
        let services = Services::in_memory();
        seed_catalog(&services).unwrap();

        let vegan = services.burgers.filtered(BurgerFilter::new(true, false, false));
        assert_eq!(vegan.len(), 1);
        assert!(vegan[0].is_lactose_free());

        let shareable = services
            .sides
            .filtered(SideFilter { shareable: Some(true) });
        assert_eq!(services.sides.sizes(*shareable[0].id()).unwrap().len(), 1);

        for drink in services.drinks.filtered(Default::default()) {
            assert_eq!(services.drinks.sizes(*drink.id()).unwrap().len(), 2);
        }
    }
}
