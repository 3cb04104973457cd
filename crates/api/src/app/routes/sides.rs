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
use burgerstream_menu::{SideFilter, SideInput};

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_side).get(list_sides))
        .route("/:id", get(get_side).put(update_side).delete(delete_side))
        .route("/:id/sizes", get(list_side_sizes))
        .route("/:id/sizes/:size_id", put(add_side_size).delete(remove_side_size))
}

pub async fn create_side(
    Extension(services): Extension<Arc<Services>>,
    Json(body): Json<SideInput>,
) -> axum::response::Response {
    match services.sides.create(body) {
        Ok(side) => (StatusCode::CREATED, Json(dto::side_to_json(&side))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_sides(
    Extension(services): Extension<Arc<Services>>,
    Query(filter): Query<SideFilter>,
) -> axum::response::Response {
    let sides = services.sides.filtered(filter);
    (StatusCode::OK, Json(dto::list_to_json(&sides, dto::side_to_json))).into_response()
}

pub async fn get_side(
    Extension(services): Extension<Arc<Services>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: MenuItemId = match errors::parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.sides.get(id) {
        Ok(side) => (StatusCode::OK, Json(dto::side_to_json(&side))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_side(
    Extension(services): Extension<Arc<Services>>,
    Path(id): Path<String>,
    Json(body): Json<SideInput>,
) -> axum::response::Response {
    let id: MenuItemId = match errors::parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.sides.update(id, body) {
        Ok(side) => (StatusCode::OK, Json(dto::side_to_json(&side))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_side(
    Extension(services): Extension<Arc<Services>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: MenuItemId = match errors::parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.sides.delete(id) {
        Ok(()) => (StatusCode::OK, Json(json!({ "deleted": true }))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_side_sizes(
    Extension(services): Extension<Arc<Services>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: MenuItemId = match errors::parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.sides.sizes(id) {
        Ok(sizes) => {
            (StatusCode::OK, Json(dto::list_to_json(&sizes, dto::size_option_to_json))).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn add_side_size(
    Extension(services): Extension<Arc<Services>>,
    Path((id, size_id)): Path<(String, String)>,
) -> axum::response::Response {
    let (id, size_id): (MenuItemId, SizeOptionId) =
        match (errors::parse_id(&id), errors::parse_id(&size_id)) {
            (Ok(id), Ok(size_id)) => (id, size_id),
            (Err(resp), _) | (_, Err(resp)) => return resp,
        };
    match services.sides.add_size(id, size_id) {
        Ok(side) => (StatusCode::OK, Json(dto::side_to_json(&side))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn remove_side_size(
    Extension(services): Extension<Arc<Services>>,
    Path((id, size_id)): Path<(String, String)>,
) -> axum::response::Response {
    let (id, size_id): (MenuItemId, SizeOptionId) =
        match (errors::parse_id(&id), errors::parse_id(&size_id)) {
            (Ok(id), Ok(size_id)) => (id, size_id),
            (Err(resp), _) | (_, Err(resp)) => return resp,
        };
    match services.sides.remove_size(id, size_id) {
        Ok(side) => (StatusCode::OK, Json(dto::side_to_json(&side))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
