//! HTTP application wiring (Axum router + service wiring).
//!
//! - `services.rs`: repository access used by handlers, plus demo seed data
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: form payloads and their mapping to domain types
//! - `views.rs`: server-side HTML rendering
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use itemservice_items::ItemRepository;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;
pub mod views;

/// Build the full HTTP router around an already-constructed repository.
///
/// Seeding is the caller's job (see [`services::seed_items`]).
pub fn build_app(repository: Arc<dyn ItemRepository>) -> Router {
    let services = Arc::new(services::AppServices::new(repository));

    let pages = routes::router().layer(Extension(services));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(pages)
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(middleware::request_trace)))
}
