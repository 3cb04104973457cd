use axum::Router;

pub mod burgers;
pub mod drinks;
pub mod menu_items;
pub mod orders;
pub mod sides;
pub mod sizes;
pub mod system;

/// Router for every catalog and order endpoint.
pub fn router() -> Router {
    Router::new()
        .nest("/menu/items", menu_items::router())
        .nest("/menu/burgers", burgers::router())
        .nest("/menu/drinks", drinks::router())
        .nest("/menu/sides", sides::router())
        .nest("/menu/sizes", sizes::router())
        .nest("/orders", orders::router())
}
