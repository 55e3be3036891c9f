//! HTTP handlers for the portal

pub mod health;
pub mod openapi;
pub mod pages;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Member pages
        .route("/pages/members/:id", get(pages::member_detail))
        .route(
            "/pages/members/:id/new",
            get(pages::new_borrowing).post(pages::borrow_book),
        )
        .route("/pages/members/:id/return", post(pages::return_book))
        .with_state(state);

    Router::new()
        .merge(routes)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
