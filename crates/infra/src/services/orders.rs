use chrono::Utc;
use tracing::info;

use burgerstream_core::{DomainError, DomainResult, Entity, MenuItemId, Money, OrderId, SizeOptionId};
use burgerstream_menu::{MenuItem, SizeOption};
use burgerstream_orders::{CustomerDetails, Order, OrderItem};

use crate::store::{count_children, EntityStore, SharedStore};

/// One submitted order line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrderLine {
    pub menu_item_id: MenuItemId,
    pub size_option_id: Option<SizeOptionId>,
    pub amount: i32,
    pub item_end_price: Money,
}

impl NewOrderLine {
    /// The quantity is applied to the fresh (zero-priced) item first, so the
    /// submitted price ends up as the line total. Prices outside
    /// `0..=Money::MAX_STORABLE` are rejected.
    fn into_item(self) -> DomainResult<OrderItem> {
        if !self.item_end_price.is_storable() {
            return Err(DomainError::validation(format!(
                "Order item price must be between 0.00 and {}",
                Money::MAX_STORABLE
            )));
        }
        let mut item = OrderItem::new(self.menu_item_id, self.size_option_id);
        item.set_amount(self.amount);
        item.set_item_end_price(self.item_end_price);
        Ok(item)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub customer: CustomerDetails,
    pub items: Vec<NewOrderLine>,
}

#[derive(Clone)]
pub struct OrderService {
    orders: SharedStore<Order>,
    menu: SharedStore<MenuItem>,
    sizes: SharedStore<SizeOption>,
}

impl OrderService {
    pub fn new(
        orders: SharedStore<Order>,
        menu: SharedStore<MenuItem>,
        sizes: SharedStore<SizeOption>,
    ) -> Self {
        Self { orders, menu, sizes }
    }

    /// Build the aggregate and persist it together with its items in one
    /// write. Every referenced menu item and size option must exist.
    pub fn create(&self, request: NewOrder) -> DomainResult<Order> {
        let items = request
            .items
            .into_iter()
            .map(NewOrderLine::into_item)
            .collect::<DomainResult<Vec<OrderItem>>>()?;
        let mut order = Order::create(OrderId::new(), request.customer, Utc::now(), items)?;

        for item in order.order_items() {
            self.ensure_references(item)?;
        }

        order.assign_item_ids();
        self.orders.upsert(order.clone());
        info!(
            order_id = %order.id(),
            items = order.order_items().len(),
            total = %order.order_end_price(),
            "order created"
        );
        Ok(order)
    }

    fn ensure_references(&self, item: &OrderItem) -> DomainResult<()> {
        let menu_item_id = item.menu_item_id();
        if self.menu.get(&menu_item_id).is_none() {
            return Err(DomainError::not_found("Menu Item", menu_item_id));
        }
        if let Some(size_id) = item.size_option_id() {
            if self.sizes.get(&size_id).is_none() {
                return Err(DomainError::not_found("Size", size_id));
            }
        }
        Ok(())
    }

    pub fn get(&self, id: OrderId) -> DomainResult<Order> {
        self.orders
            .get(&id)
            .ok_or_else(|| DomainError::not_found("Order", id))
    }

    pub fn list(&self) -> Vec<Order> {
        self.orders.list()
    }

    pub fn items(&self, id: OrderId) -> DomainResult<Vec<OrderItem>> {
        Ok(self.get(id)?.order_items().to_vec())
    }

    /// Only the customer fields change; date and items stay as created.
    pub fn update_customer(&self, id: OrderId, customer: CustomerDetails) -> DomainResult<Order> {
        let mut order = self.get(id)?;
        order.update_customer(customer)?;
        self.orders.upsert(order.clone());
        info!(order_id = %id, "order customer updated");
        Ok(order)
    }

    /// Persist an aggregate edited in memory. Items detached from it are
    /// gone from the store afterwards.
    ///
    /// The order must already exist, keep at least one item and carry valid
    /// customer details. Items added since the last write must reference an
    /// existing menu item and size.
    pub fn save(&self, mut order: Order) -> DomainResult<Order> {
        self.get(*order.id())?;
        if order.order_items().is_empty() {
            return Err(DomainError::invalid_order("Cannot create order with no items."));
        }
        order.customer().validate()?;
        for item in order.order_items().iter().filter(|item| item.id().is_none()) {
            self.ensure_references(item)?;
        }

        order.assign_item_ids();
        self.orders.upsert(order.clone());
        info!(order_id = %order.id(), items = order.order_items().len(), "order saved");
        Ok(order)
    }

    /// Removes the order and every item it owns.
    pub fn delete(&self, id: OrderId) -> DomainResult<()> {
        let removed = self
            .orders
            .remove(&id)
            .ok_or_else(|| DomainError::not_found("Order", id))?;
        info!(order_id = %id, items = removed.order_items().len(), "order deleted");
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.orders.count()
    }

    pub fn count_order_items(&self) -> usize {
        count_children(&*self.orders)
    }
}
