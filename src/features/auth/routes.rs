use crate::features::auth::handlers;
use crate::features::auth::services::AuthService;
use axum::{routing::post, Router};
use std::sync::Arc;

/// Public auth routes (no authentication required)
pub fn public_routes(service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/api/accounts/register", post(handlers::register))
        .route("/api/accounts/login", post(handlers::login))
        .route("/api/accounts/refresh", post(handlers::refresh_token))
        .with_state(service)
}
