//! Application services: one per catalog component plus orders.
//!
//! Services orchestrate lookups, domain rules and store writes. They hold no
//! state of their own beyond shared store handles.

pub mod burgers;
pub mod drinks;
pub mod menu_items;
pub mod orders;
pub mod sides;
pub mod size_assignment;
pub mod size_options;

use std::sync::Arc;

use burgerstream_menu::{MenuItem, SizeOption};
use burgerstream_orders::Order;

use crate::store::{InMemoryStore, SharedStore};

pub use burgers::BurgerService;
pub use drinks::DrinkService;
pub use menu_items::MenuItemService;
pub use orders::{NewOrder, NewOrderLine, OrderService};
pub use sides::SideService;
pub use size_assignment::SizeAssignment;
pub use size_options::SizeOptionService;

/// Every service, wired against one set of stores.
#[derive(Clone)]
pub struct Services {
    pub menu_items: MenuItemService,
    pub burgers: BurgerService,
    pub drinks: DrinkService,
    pub sides: SideService,
    pub size_options: SizeOptionService,
    pub orders: OrderService,
}

impl Services {
    pub fn new(
        menu: SharedStore<MenuItem>,
        sizes: SharedStore<SizeOption>,
        orders: SharedStore<Order>,
    ) -> Self {
        Self {
            menu_items: MenuItemService::new(menu.clone()),
            burgers: BurgerService::new(menu.clone()),
            drinks: DrinkService::new(menu.clone(), sizes.clone()),
            sides: SideService::new(menu.clone(), sizes.clone()),
            size_options: SizeOptionService::new(sizes.clone(), menu.clone()),
            orders: OrderService::new(orders, menu, sizes),
        }
    }

    /// In-memory wiring (dev/test).
    pub fn in_memory() -> Self {
        let menu: SharedStore<MenuItem> = Arc::new(InMemoryStore::<MenuItem>::new());
        let sizes: SharedStore<SizeOption> = Arc::new(InMemoryStore::<SizeOption>::new());
        let orders: SharedStore<Order> = Arc::new(InMemoryStore::<Order>::new());
        Self::new(menu, sizes, orders)
    }

    /// Postgres wiring; every store shares `pool`. Run
    /// [`crate::store::postgres::migrate`] first.
    #[cfg(feature = "postgres")]
    pub fn postgres(pool: sqlx::PgPool) -> Self {
        use crate::store::PostgresStore;

        let menu: SharedStore<MenuItem> = Arc::new(PostgresStore::<MenuItem>::new(pool.clone()));
        let sizes: SharedStore<SizeOption> = Arc::new(PostgresStore::<SizeOption>::new(pool.clone()));
        let orders: SharedStore<Order> = Arc::new(PostgresStore::<Order>::new(pool));
        Self::new(menu, sizes, orders)
    }
}
