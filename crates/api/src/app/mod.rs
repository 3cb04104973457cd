//! HTTP application wiring (Axum router + service wiring).
//!
//! - `services.rs`: store/service construction and catalog bootstrap
//! - `routes/`: HTTP routes + handlers (one file per catalog area)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use burgerstream_infra::Services;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Path prefix of every catalog/order endpoint.
pub const API_PREFIX: &str = "/api/v1/BurgerStream";

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(services: Services) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .nest(API_PREFIX, routes::router())
        .layer(ServiceBuilder::new().layer(Extension(Arc::new(services))))
}
