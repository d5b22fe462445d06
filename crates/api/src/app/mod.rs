//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: shared stores, hasher and token issuer
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response bodies
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

use bookshelf_auth::Hs256Jwt;

use crate::config::AppConfig;
use crate::middleware::AuthState;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: &AppConfig) -> Router {
    let jwt = Arc::new(Hs256Jwt::with_ttl(config.jwt_secret.as_bytes(), config.token_ttl));
    let services = services::AppServices::from_config(config, jwt.clone());
    build_app_with(services, AuthState { jwt })
}

/// Build the router around already-wired services.
pub fn build_app_with(services: services::AppServices, auth_state: AuthState) -> Router {
    routes::router(auth_state).layer(ServiceBuilder::new().layer(Extension(Arc::new(services))))
}
