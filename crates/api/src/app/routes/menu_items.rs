use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use burgerstream_core::MenuItemId;
use burgerstream_infra::Services;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_menu_items))
        .route("/:id", get(get_menu_item))
}

pub async fn list_menu_items(Extension(services): Extension<Arc<Services>>) -> axum::response::Response {
    let items = services.menu_items.list();
    (StatusCode::OK, Json(dto::list_to_json(&items, dto::menu_item_to_json))).into_response()
}

pub async fn get_menu_item(
    Extension(services): Extension<Arc<Services>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: MenuItemId = match errors::parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.menu_items.get(id) {
        Ok(item) => (StatusCode::OK, Json(dto::menu_item_to_json(&item))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
