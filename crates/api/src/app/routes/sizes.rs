use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use serde_json::json;

use burgerstream_core::{MenuItemId, SizeOptionId};
use burgerstream_infra::Services;
use burgerstream_menu::SizeOptionInput;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_size).get(list_sizes))
        .route("/:id", get(get_size).put(update_size).delete(delete_size))
        .route("/:id/assign/drinks", put(assign_size_to_drinks))
        .route("/:id/assign/sides", put(assign_size_to_sides))
}

pub async fn create_size(
    Extension(services): Extension<Arc<Services>>,
    Json(body): Json<SizeOptionInput>,
) -> axum::response::Response {
    match services.size_options.create(body) {
        Ok(option) => (StatusCode::CREATED, Json(dto::size_option_to_json(&option))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_sizes(Extension(services): Extension<Arc<Services>>) -> axum::response::Response {
    let sizes = services.size_options.list();
    (StatusCode::OK, Json(dto::list_to_json(&sizes, dto::size_option_to_json))).into_response()
}

pub async fn get_size(
    Extension(services): Extension<Arc<Services>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: SizeOptionId = match errors::parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.size_options.get(id) {
        Ok(option) => (StatusCode::OK, Json(dto::size_option_to_json(&option))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_size(
    Extension(services): Extension<Arc<Services>>,
    Path(id): Path<String>,
    Json(body): Json<SizeOptionInput>,
) -> axum::response::Response {
    let id: SizeOptionId = match errors::parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.size_options.update(id, body) {
        Ok(option) => (StatusCode::OK, Json(dto::size_option_to_json(&option))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_size(
    Extension(services): Extension<Arc<Services>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: SizeOptionId = match errors::parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.size_options.delete(id) {
        Ok(()) => (StatusCode::OK, Json(json!({ "deleted": true }))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn assign_size_to_drinks(
    Extension(services): Extension<Arc<Services>>,
    Path(id): Path<String>,
    Json(body): Json<dto::AssignSizeRequest>,
) -> axum::response::Response {
    let (id, drinks) = match parse_assignment(&id, &body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.size_options.assign_to_drinks(id, &drinks) {
        Ok(option) => (StatusCode::OK, Json(dto::size_option_to_json(&option))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn assign_size_to_sides(
    Extension(services): Extension<Arc<Services>>,
    Path(id): Path<String>,
    Json(body): Json<dto::AssignSizeRequest>,
) -> axum::response::Response {
    let (id, sides) = match parse_assignment(&id, &body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.size_options.assign_to_sides(id, &sides) {
        Ok(option) => (StatusCode::OK, Json(dto::size_option_to_json(&option))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

fn parse_assignment(
    id: &str,
    targets: &[String],
) -> Result<(SizeOptionId, Vec<MenuItemId>), axum::response::Response> {
    Ok((errors::parse_id(id)?, errors::parse_ids(targets)?))
}
