//! Orders domain module.
//!
//! An [`Order`] owns an ordered collection of [`OrderItem`]s and keeps its
//! derived total consistent as items are attached and detached.

pub mod order;
pub mod order_item;

pub use order::{CustomerDetails, Order};
pub use order_item::OrderItem;
