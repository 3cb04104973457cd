use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use burgerstream_core::{AggregateRoot, DomainError, DomainResult, Entity, Money, OrderId};

use crate::order_item::OrderItem;

/// Customer contact fields, the only part of an order that can change after
/// creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    #[serde(default, alias = "customerName")]
    pub customer_name: String,
    #[serde(default, alias = "customerEmail")]
    pub customer_email: String,
}

impl CustomerDetails {
    pub fn new(customer_name: impl Into<String>, customer_email: impl Into<String>) -> Self {
        Self {
            customer_name: customer_name.into(),
            customer_email: customer_email.into(),
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.customer_name.trim().is_empty() {
            return Err(DomainError::validation("Order must have a customer name"));
        }
        if self.customer_email.trim().is_empty() {
            return Err(DomainError::validation("Order must have a customer email"));
        }
        Ok(())
    }
}

/// Aggregate root: Order.
///
/// Invariant: `order_end_price` equals the sum of `item_end_price` over the
/// attached items, as maintained by [`Order::add_order_item`] and
/// [`Order::remove_order_item`]. Items are only reachable read-only.
/// Deserializing re-attaches the stored items, so the total is recomputed
/// rather than read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "OrderRecord")]
pub struct Order {
    id: OrderId,
    date: DateTime<Utc>,
    customer_name: String,
    customer_email: String,
    order_items: Vec<OrderItem>,
    order_end_price: Money,
}

impl Order {
    /// An order without items; the total starts at zero. Outside this crate
    /// orders come from [`Order::create`], which checks the customer.
    pub(crate) fn new(id: OrderId, customer: CustomerDetails, date: DateTime<Utc>) -> Self {
        Self {
            id,
            date,
            customer_name: customer.customer_name,
            customer_email: customer.customer_email,
            order_items: Vec::new(),
            order_end_price: Money::ZERO,
        }
    }

    /// Build a new order from its submitted items.
    ///
    /// Fails with `InvalidOrder` when there are no items. Each item is
    /// attached through [`Order::add_order_item`].
    pub fn create(
        id: OrderId,
        customer: CustomerDetails,
        date: DateTime<Utc>,
        items: Vec<OrderItem>,
    ) -> DomainResult<Self> {
        if items.is_empty() {
            return Err(DomainError::invalid_order("Cannot create order with no items."));
        }
        customer.validate()?;

        let mut order = Self::new(id, customer, date);
        for item in items {
            order.add_order_item(item);
        }
        Ok(order)
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn customer_email(&self) -> &str {
        &self.customer_email
    }

    pub fn customer(&self) -> CustomerDetails {
        CustomerDetails::new(self.customer_name.clone(), self.customer_email.clone())
    }

    pub fn order_items(&self) -> &[OrderItem] {
        &self.order_items
    }

    pub fn order_end_price(&self) -> Money {
        self.order_end_price
    }

    /// Append an item, add its price to the total and point it at this order.
    ///
    /// Items without an id are always accepted; an item whose id is already
    /// present is ignored. Returns whether the item was attached.
    pub fn add_order_item(&mut self, mut item: OrderItem) -> bool {
        let duplicate = item
            .id()
            .is_some_and(|id| self.order_items.iter().any(|i| i.id() == Some(id)));
        if duplicate {
            return false;
        }

        self.order_end_price += item.item_end_price();
        item.attach_to(self.id);
        self.order_items.push(item);
        true
    }

    /// Detach the item sharing `item`'s id, subtracting its price.
    ///
    /// No-op (returns `None`) when `item` has no id or no attached item
    /// matches. The returned item no longer references this order.
    pub fn remove_order_item(&mut self, item: &OrderItem) -> Option<OrderItem> {
        let id = item.id()?;
        let pos = self.order_items.iter().position(|i| i.id() == Some(id))?;

        let mut removed = self.order_items.remove(pos);
        self.order_end_price -= removed.item_end_price();
        removed.detach();
        Some(removed)
    }

    /// Replace the customer fields; date and items are untouched.
    pub fn update_customer(&mut self, customer: CustomerDetails) -> DomainResult<()> {
        customer.validate()?;
        self.customer_name = customer.customer_name;
        self.customer_email = customer.customer_email;
        Ok(())
    }

    /// Give every not-yet-persisted item a fresh id.
    pub fn assign_item_ids(&mut self) {
        for item in &mut self.order_items {
            item.assign_id();
        }
    }
}

#[derive(Deserialize)]
struct OrderRecord {
    id: OrderId,
    date: DateTime<Utc>,
    customer_name: String,
    customer_email: String,
    #[serde(default)]
    order_items: Vec<OrderItem>,
}

impl From<OrderRecord> for Order {
    fn from(record: OrderRecord) -> Self {
        let customer = CustomerDetails::new(record.customer_name, record.customer_email);
        let mut order = Order::new(record.id, customer, record.date);
        for item in record.order_items {
            order.add_order_item(item);
        }
        order
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &OrderId {
        &self.id
    }
}

impl AggregateRoot for Order {
    type Child = OrderItem;

    fn children(&self) -> &[OrderItem] {
        &self.order_items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burgerstream_core::{MenuItemId, OrderItemId, SizeOptionId};

    fn customer() -> CustomerDetails {
        CustomerDetails::new("John Doe", "John@Doe.com")
    }

    fn priced_item(major: i64) -> OrderItem {
        let mut item = OrderItem::new(MenuItemId::new(), Some(SizeOptionId::new()));
        item.set_item_end_price(Money::from_major(major));
        item
    }

    fn empty_order() -> Order {
        Order::new(OrderId::new(), customer(), Utc::now())
    }

    #[test]
    fn create_sums_item_prices() {
        let order = Order::create(
            OrderId::new(),
            customer(),
            Utc::now(),
            vec![priced_item(30), priced_item(70)],
        )
        .unwrap();

        assert_eq!(order.order_end_price(), Money::from_major(100));
        assert_eq!(order.order_items().len(), 2);
        assert!(order.order_items().iter().all(|i| i.order_id() == Some(*order.id())));
    }

    #[test]
    fn create_without_items_is_invalid_order() {
        let err = Order::create(OrderId::new(), customer(), Utc::now(), vec![]).unwrap_err();
        assert_eq!(err, DomainError::invalid_order("Cannot create order with no items."));
    }

    #[test]
    fn create_requires_customer_fields() {
        let err = Order::create(
            OrderId::new(),
            CustomerDetails::new("John Doe", "  "),
            Utc::now(),
            vec![priced_item(10)],
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn add_ignores_duplicate_ids_but_not_missing_ids() {
        let mut order = empty_order();
        let id = OrderItemId::new();

        assert!(order.add_order_item(priced_item(10).with_id(id)));
        assert!(!order.add_order_item(priced_item(99).with_id(id)));
        assert!(order.add_order_item(priced_item(5)));
        assert!(order.add_order_item(priced_item(5)));

        assert_eq!(order.order_items().len(), 3);
        assert_eq!(order.order_end_price(), Money::from_major(20));
    }

    #[test]
    fn remove_subtracts_and_detaches() {
        let mut order = empty_order();
        let item = priced_item(70).with_id(OrderItemId::new());
        order.add_order_item(priced_item(30).with_id(OrderItemId::new()));
        order.add_order_item(item.clone());

        let removed = order.remove_order_item(&item).unwrap();
        assert_eq!(removed.order_id(), None);
        assert_eq!(order.order_items().len(), 1);
        assert_eq!(order.order_end_price(), Money::from_major(30));

        assert!(order.remove_order_item(&item).is_none());
        assert_eq!(order.order_end_price(), Money::from_major(30));
    }

    #[test]
    fn remove_without_id_is_noop() {
        let mut order = empty_order();
        let item = priced_item(10);
        order.add_order_item(item.clone());
        assert!(order.remove_order_item(&item).is_none());
        assert_eq!(order.order_end_price(), Money::from_major(10));
    }

    #[test]
    fn update_customer_keeps_date_and_items() {
        let mut order =
            Order::create(OrderId::new(), customer(), Utc::now(), vec![priced_item(70)]).unwrap();
        let date = order.date();

        order
            .update_customer(CustomerDetails::new("James Gunn", "James@Gunn.com"))
            .unwrap();
        assert_eq!(order.customer_name(), "James Gunn");
        assert_eq!(order.customer_email(), "James@Gunn.com");
        assert_eq!(order.date(), date);
        assert_eq!(order.order_end_price(), Money::from_major(70));
    }

    #[test]
    fn assign_item_ids_fills_only_missing() {
        let existing = OrderItemId::new();
        let mut order = empty_order();
        order.add_order_item(priced_item(1).with_id(existing));
        order.add_order_item(priced_item(2));

        order.assign_item_ids();
        assert_eq!(order.children()[0].id(), Some(existing));
        assert!(order.children()[1].id().is_some());
    }

    #[test]
    fn serializes_items_with_back_reference() {
        let order = Order::create(OrderId::new(), customer(), Utc::now(), vec![priced_item(30)]).unwrap();
        let json = serde_json::to_value(&order).unwrap();

        assert_eq!(json["customer_name"], "John Doe");
        assert_eq!(json["order_end_price"], 3000);
        assert_eq!(json["order_items"][0]["order_id"], json["id"]);
        assert!(json["order_items"][0]["id"].is_null());
    }

    #[test]
    fn loading_recomputes_total_and_back_references() {
        let order = Order::create(
            OrderId::new(),
            customer(),
            Utc::now(),
            vec![priced_item(30), priced_item(70)],
        )
        .unwrap();
        let mut json = serde_json::to_value(&order).unwrap();
        json["order_end_price"] = serde_json::json!(1);
        json["order_items"][1]["order_id"] = serde_json::Value::Null;

        let loaded: Order = serde_json::from_value(json).unwrap();
        assert_eq!(loaded, order);
        assert_eq!(loaded.order_end_price(), Money::from_major(100));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: the total equals the sum of attached item prices.
            #[test]
            fn total_matches_items(prices in proptest::collection::vec(0i64..100_000, 1..20)) {
                let items = prices.iter().map(|c| {
                    let mut item = OrderItem::new(MenuItemId::new(), None);
                    item.set_item_end_price(Money::from_cents(*c));
                    item
                }).collect::<Vec<_>>();

                let order = Order::create(OrderId::new(), customer(), Utc::now(), items).unwrap();
                let expected: Money = prices.into_iter().map(Money::from_cents).sum();
                prop_assert_eq!(order.order_end_price(), expected);
                let from_items: Money = order.order_items().iter().map(OrderItem::item_end_price).sum();
                prop_assert_eq!(order.order_end_price(), from_items);
            }

            /// Property: add then remove of an identified item restores the total.
            #[test]
            fn add_then_remove_restores_total(
                base in proptest::collection::vec(0i64..100_000, 0..10),
                extra in 0i64..100_000,
            ) {
                let mut order = empty_order();
                for c in base {
                    let mut item = OrderItem::new(MenuItemId::new(), None).with_id(OrderItemId::new());
                    item.set_item_end_price(Money::from_cents(c));
                    order.add_order_item(item);
                }
                let before = order.order_end_price();

                let mut item = OrderItem::new(MenuItemId::new(), None).with_id(OrderItemId::new());
                item.set_item_end_price(Money::from_cents(extra));
                order.add_order_item(item.clone());
                order.remove_order_item(&item);

                prop_assert_eq!(order.order_end_price(), before);
            }
        }
    }
}
