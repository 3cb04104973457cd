//! Infrastructure layer: entity storage, application services, bootstrap.

pub mod seed;
pub mod services;
pub mod store;

pub use services::Services;
