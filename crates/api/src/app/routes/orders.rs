use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use burgerstream_core::OrderId;
use burgerstream_infra::Services;
use burgerstream_orders::CustomerDetails;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_order).get(list_orders))
        .route("/:id", get(get_order).put(update_order).delete(delete_order))
        .route("/:id/items", get(list_order_items))
}

pub async fn create_order(
    Extension(services): Extension<Arc<Services>>,
    Json(body): Json<dto::CreateOrderRequest>,
) -> axum::response::Response {
    let request = match body.into_new_order() {
        Ok(r) => r,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match services.orders.create(request) {
        Ok(order) => (StatusCode::CREATED, Json(dto::order_to_json(&order))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_orders(Extension(services): Extension<Arc<Services>>) -> axum::response::Response {
    let orders = services.orders.list();
    (StatusCode::OK, Json(dto::list_to_json(&orders, dto::order_to_json))).into_response()
}

pub async fn get_order(
    Extension(services): Extension<Arc<Services>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: OrderId = match errors::parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.orders.get(id) {
        Ok(order) => (StatusCode::OK, Json(dto::order_to_json(&order))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// Only the customer fields are taken from the body.
pub async fn update_order(
    Extension(services): Extension<Arc<Services>>,
    Path(id): Path<String>,
    Json(body): Json<CustomerDetails>,
) -> axum::response::Response {
    let id: OrderId = match errors::parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.orders.update_customer(id, body) {
        Ok(order) => (StatusCode::OK, Json(dto::order_to_json(&order))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_order(
    Extension(services): Extension<Arc<Services>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: OrderId = match errors::parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.orders.delete(id) {
        Ok(()) => (StatusCode::OK, Json(json!({ "deleted": true }))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_order_items(
    Extension(services): Extension<Arc<Services>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: OrderId = match errors::parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.orders.items(id) {
        Ok(items) => {
            (StatusCode::OK, Json(dto::list_to_json(&items, dto::order_item_to_json))).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}
