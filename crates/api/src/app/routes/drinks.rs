use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use serde_json::json;

use burgerstream_core::{MenuItemId, SizeOptionId};
use burgerstream_infra::Services;
use burgerstream_menu::{DrinkFilter, DrinkInput};

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_drink).get(list_drinks))
        .route("/:id", get(get_drink).put(update_drink).delete(delete_drink))
        .route("/:id/sizes", get(list_drink_sizes))
        .route("/:id/sizes/:size_id", put(add_drink_size).delete(remove_drink_size))
}

pub async fn create_drink(
    Extension(services): Extension<Arc<Services>>,
    Json(body): Json<DrinkInput>,
) -> axum::response::Response {
    match services.drinks.create(body) {
        Ok(drink) => (StatusCode::CREATED, Json(dto::drink_to_json(&drink))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_drinks(
    Extension(services): Extension<Arc<Services>>,
    Query(filter): Query<DrinkFilter>,
) -> axum::response::Response {
    let drinks = services.drinks.filtered(filter);
    (StatusCode::OK, Json(dto::list_to_json(&drinks, dto::drink_to_json))).into_response()
}

pub async fn get_drink(
    Extension(services): Extension<Arc<Services>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: MenuItemId = match errors::parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.drinks.get(id) {
        Ok(drink) => (StatusCode::OK, Json(dto::drink_to_json(&drink))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_drink(
    Extension(services): Extension<Arc<Services>>,
    Path(id): Path<String>,
    Json(body): Json<DrinkInput>,
) -> axum::response::Response {
    let id: MenuItemId = match errors::parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.drinks.update(id, body) {
        Ok(drink) => (StatusCode::OK, Json(dto::drink_to_json(&drink))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_drink(
    Extension(services): Extension<Arc<Services>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: MenuItemId = match errors::parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.drinks.delete(id) {
        Ok(()) => (StatusCode::OK, Json(json!({ "deleted": true }))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_drink_sizes(
    Extension(services): Extension<Arc<Services>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: MenuItemId = match errors::parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.drinks.sizes(id) {
        Ok(sizes) => {
            (StatusCode::OK, Json(dto::list_to_json(&sizes, dto::size_option_to_json))).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn add_drink_size(
    Extension(services): Extension<Arc<Services>>,
    Path((id, size_id)): Path<(String, String)>,
) -> axum::response::Response {
    let (id, size_id): (MenuItemId, SizeOptionId) =
        match (errors::parse_id(&id), errors::parse_id(&size_id)) {
            (Ok(id), Ok(size_id)) => (id, size_id),
            (Err(resp), _) | (_, Err(resp)) => return resp,
        };
    match services.drinks.add_size(id, size_id) {
        Ok(drink) => (StatusCode::OK, Json(dto::drink_to_json(&drink))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn remove_drink_size(
    Extension(services): Extension<Arc<Services>>,
    Path((id, size_id)): Path<(String, String)>,
) -> axum::response::Response {
    let (id, size_id): (MenuItemId, SizeOptionId) =
        match (errors::parse_id(&id), errors::parse_id(&size_id)) {
            (Ok(id), Ok(size_id)) => (id, size_id),
            (Err(resp), _) | (_, Err(resp)) => return resp,
        };
    match services.drinks.remove_size(id, size_id) {
        Ok(drink) => (StatusCode::OK, Json(dto::drink_to_json(&drink))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
