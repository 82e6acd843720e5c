//! HTTP application wiring (Axum router + service wiring).
//!
//! This folder is structured like:
//! - `services.rs`: store and mutation-service wiring (in-memory or Postgres)
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs and their mapping onto form fields
//! - `cache.rs`: the listing cache mutations invalidate
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};

use crate::credentials::EnvCredentials;
use crate::middleware;

pub mod cache;
pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub async fn build_app(credentials: EnvCredentials) -> Router {
    build_app_with(services::build_services(credentials).await)
}

/// Build the router over already-wired services. Tests use this to keep a
/// handle on the stores the server runs against.
pub fn build_app_with(services: services::AppServices) -> Router {
    let session_state = middleware::SessionState {
        sessions: services.sessions.clone(),
    };
    let services = Arc::new(services);

    // Everything under /dashboard requires a live session.
    let protected = routes::router().layer(axum::middleware::from_fn_with_state(
        session_state,
        middleware::session_middleware,
    ));

    Router::new()
        .route("/health", get(routes::system::health))
        .route("/login", post(routes::session::login))
        .merge(protected)
        .layer(Extension(services))
}
