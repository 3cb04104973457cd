use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use burgerstream_core::MenuItemId;
use burgerstream_infra::Services;
use burgerstream_menu::{BurgerFilter, BurgerInput};

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_burger).get(list_burgers))
        .route("/:id", get(get_burger).put(update_burger).delete(delete_burger))
}

pub async fn create_burger(
    Extension(services): Extension<Arc<Services>>,
    Json(body): Json<BurgerInput>,
) -> axum::response::Response {
    match services.burgers.create(body) {
        Ok(burger) => (StatusCode::CREATED, Json(dto::burger_to_json(&burger))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// `?vegan&chicken&lactoseFree`; see [`BurgerFilter::query`] for precedence.
pub async fn list_burgers(
    Extension(services): Extension<Arc<Services>>,
    Query(filter): Query<BurgerFilter>,
) -> axum::response::Response {
    let burgers = services.burgers.filtered(filter);
    (StatusCode::OK, Json(dto::list_to_json(&burgers, dto::burger_to_json))).into_response()
}

pub async fn get_burger(
    Extension(services): Extension<Arc<Services>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: MenuItemId = match errors::parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.burgers.get(id) {
        Ok(burger) => (StatusCode::OK, Json(dto::burger_to_json(&burger))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_burger(
    Extension(services): Extension<Arc<Services>>,
    Path(id): Path<String>,
    Json(body): Json<BurgerInput>,
) -> axum::response::Response {
    let id: MenuItemId = match errors::parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.burgers.update(id, body) {
        Ok(burger) => (StatusCode::OK, Json(dto::burger_to_json(&burger))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_burger(
    Extension(services): Extension<Arc<Services>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: MenuItemId = match errors::parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.burgers.delete(id) {
        Ok(()) => (StatusCode::OK, Json(json!({ "deleted": true }))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
