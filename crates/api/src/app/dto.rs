use chrono::SecondsFormat;
use serde::Deserialize;
use serde_json::{json, Value};

use burgerstream_core::{DomainResult, Entity, MenuItemId, Money, SizeOptionId};
use burgerstream_infra::services::{NewOrder, NewOrderLine};
use burgerstream_menu::{Burger, Drink, MenuItem, PricedItem, Side, SizeOption, SizedMenuItem};
use burgerstream_orders::{CustomerDetails, Order, OrderItem};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(flatten)]
    pub customer: CustomerDetails,
    #[serde(default, alias = "orderItems", alias = "order_items")]
    pub items: Vec<OrderLineRequest>,
}

#[derive(Debug, Deserialize)]
pub struct OrderLineRequest {
    #[serde(alias = "menuItemId")]
    pub menu_item_id: String,
    #[serde(default, alias = "sizeOptionId")]
    pub size_option_id: Option<String>,
    #[serde(default = "default_amount")]
    pub amount: i32,
    #[serde(default, alias = "itemEndPrice")]
    pub item_end_price: Money,
}

fn default_amount() -> i32 {
    1
}

impl CreateOrderRequest {
    /// Resolve the string ids; a malformed id is an `InvalidId` error.
    pub fn into_new_order(self) -> DomainResult<NewOrder> {
        let items = self
            .items
            .into_iter()
            .map(|line| -> DomainResult<NewOrderLine> {
                Ok(NewOrderLine {
                    menu_item_id: line.menu_item_id.parse::<MenuItemId>()?,
                    size_option_id: line
                        .size_option_id
                        .as_deref()
                        .map(str::parse::<SizeOptionId>)
                        .transpose()?,
                    amount: line.amount,
                    item_end_price: line.item_end_price,
                })
            })
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(NewOrder {
            customer: self.customer,
            items,
        })
    }
}

/// Body of the bulk size assignment endpoints: a list of menu item ids.
pub type AssignSizeRequest = Vec<String>;

// -------------------------
// JSON mapping
// -------------------------

fn priced_fields(id: MenuItemId, kind: &str, item: &PricedItem) -> serde_json::Map<String, Value> {
    let mut map = serde_json::Map::new();
    map.insert("id".into(), json!(id.to_string()));
    map.insert("type".into(), json!(kind));
    map.insert("name".into(), json!(item.name));
    map.insert("description".into(), json!(item.description));
    map.insert("base_price".into(), json!(item.base_price.cents()));
    map.insert("image_url".into(), json!(item.image_url));
    map
}

fn size_ids<T: SizedMenuItem>(item: &T) -> Vec<String> {
    item.size_options().iter().map(ToString::to_string).collect()
}

pub fn burger_to_json(burger: &Burger) -> Value {
    let mut map = priced_fields(*burger.id(), "burger", burger.priced());
    map.insert("vegan".into(), json!(burger.is_vegan()));
    map.insert("chicken".into(), json!(burger.is_chicken()));
    map.insert("lactose_free".into(), json!(burger.is_lactose_free()));
    Value::Object(map)
}

pub fn drink_to_json(drink: &Drink) -> Value {
    let mut map = priced_fields(*drink.id(), "drink", drink.priced());
    map.insert("carbonated".into(), json!(drink.is_carbonated()));
    map.insert("lactose_free".into(), json!(drink.is_lactose_free()));
    map.insert("size_option_ids".into(), json!(size_ids(drink)));
    Value::Object(map)
}

pub fn side_to_json(side: &Side) -> Value {
    let mut map = priced_fields(*side.id(), "side", side.priced());
    map.insert("shareable".into(), json!(side.is_shareable()));
    map.insert("size_option_ids".into(), json!(size_ids(side)));
    Value::Object(map)
}

pub fn menu_item_to_json(item: &MenuItem) -> Value {
    match item {
        MenuItem::Burger(b) => burger_to_json(b),
        MenuItem::Drink(d) => drink_to_json(d),
        MenuItem::Side(s) => side_to_json(s),
    }
}

pub fn size_option_to_json(option: &SizeOption) -> Value {
    json!({
        "id": option.id().to_string(),
        "label": option.label(),
        "size_label": option.size_label(),
        "extra_price": option.extra_price().cents(),
    })
}

pub fn order_item_to_json(item: &OrderItem) -> Value {
    json!({
        "id": item.id().map(|id| id.to_string()),
        "order_id": item.order_id().map(|id| id.to_string()),
        "menu_item_id": item.menu_item_id().to_string(),
        "size_option_id": item.size_option_id().map(|id| id.to_string()),
        "amount": item.amount(),
        "item_end_price": item.item_end_price().cents(),
    })
}

pub fn order_to_json(order: &Order) -> Value {
    json!({
        "id": order.id().to_string(),
        "date": order.date().to_rfc3339_opts(SecondsFormat::Millis, true),
        "customer_name": order.customer_name(),
        "customer_email": order.customer_email(),
        "order_end_price": order.order_end_price().cents(),
        "order_items": order.order_items().iter().map(order_item_to_json).collect::<Vec<_>>(),
    })
}

pub fn list_to_json<T>(items: &[T], f: impl Fn(&T) -> Value) -> Value {
    json!({ "items": items.iter().map(f).collect::<Vec<_>>() })
}
