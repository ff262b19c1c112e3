use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::accounts::handlers;
use crate::features::accounts::services::UserService;

/// Create routes for the accounts feature
///
/// Note: This feature requires authentication
pub fn routes(service: Arc<UserService>) -> Router {
    Router::new()
        .route(
            "/api/accounts/profile",
            get(handlers::get_profile).put(handlers::update_profile),
        )
        .with_state(service)
}
