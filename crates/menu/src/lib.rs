//! Menu catalog domain module.
//!
//! Business rules for menu items (burgers, drinks, sides), their dietary
//! flags, filter cascades and size options, implemented as deterministic
//! domain logic (no IO, no HTTP, no storage).

pub mod burger;
pub mod drink;
pub mod item;
pub mod side;
pub mod size_option;

pub use burger::{Burger, BurgerFilter, BurgerInput, BurgerQuery, DietaryFlags, FlagChange};
pub use drink::{Drink, DrinkFilter, DrinkInput, DrinkQuery};
pub use item::{MenuItem, MenuItemKind, PricedItem, PricedItemInput, SizedMenuItem};
pub use side::{Side, SideFilter, SideInput};
pub use size_option::{SizeOption, SizeOptionInput};
