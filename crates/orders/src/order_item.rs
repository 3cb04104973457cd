use serde::{Deserialize, Serialize};

use burgerstream_core::{MenuItemId, Money, OrderId, OrderItemId, SizeOptionId};

/// Order line: a menu item, an optional size, a quantity and a line price.
///
/// `id` stays `None` until the owning order is persisted. `order_id` is a
/// lookup back-reference maintained only by [`crate::Order`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    id: Option<OrderItemId>,
    order_id: Option<OrderId>,
    menu_item_id: MenuItemId,
    size_option_id: Option<SizeOptionId>,
    amount: i32,
    item_end_price: Money,
}

impl OrderItem {
    pub fn new(menu_item_id: MenuItemId, size_option_id: Option<SizeOptionId>) -> Self {
        Self {
            id: None,
            order_id: None,
            menu_item_id,
            size_option_id,
            amount: 0,
            item_end_price: Money::ZERO,
        }
    }

    /// An item that already carries a persisted id.
    pub fn with_id(mut self, id: OrderItemId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn id(&self) -> Option<OrderItemId> {
        self.id
    }

    pub fn order_id(&self) -> Option<OrderId> {
        self.order_id
    }

    pub fn menu_item_id(&self) -> MenuItemId {
        self.menu_item_id
    }

    pub fn size_option_id(&self) -> Option<SizeOptionId> {
        self.size_option_id
    }

    pub fn amount(&self) -> i32 {
        self.amount
    }

    pub fn item_end_price(&self) -> Money {
        self.item_end_price
    }

    /// Record the quantity and scale the *currently stored* line price by it.
    ///
    /// The price is not recomputed from a base price: calling this twice
    /// compounds (`price * a1 * a2`).
    pub fn set_amount(&mut self, amount: i32) {
        self.amount = amount;
        self.item_end_price = self.item_end_price.times(amount);
    }

    pub fn set_item_end_price(&mut self, item_end_price: Money) {
        self.item_end_price = item_end_price;
    }

    pub(crate) fn attach_to(&mut self, order_id: OrderId) {
        self.order_id = Some(order_id);
    }

    pub(crate) fn detach(&mut self) {
        self.order_id = None;
    }

    pub(crate) fn assign_id(&mut self) {
        if self.id.is_none() {
            self.id = Some(OrderItemId::new());
        }
    }
}
