use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::accounts::services::UserService;
use crate::features::admin::handlers::{self, AdminState};
use crate::features::admin::services::AdminService;

/// Create routes for the admin console
///
/// Note: This feature requires authentication; every handler additionally
/// checks the administrator flag through the `RequireAdmin` guard.
pub fn routes(admin: Arc<AdminService>, users: Arc<UserService>) -> Router {
    let state = AdminState { admin, users };

    Router::new()
        .route(
            "/api/admin/unverified-users",
            get(handlers::unverified_users_count),
        )
        .route(
            "/api/admin/moderation-queue",
            get(handlers::moderation_queue_count),
        )
        .route("/api/admin/users/{id}/verify", post(handlers::verify_user))
        .route(
            "/api/admin/users/{id}/unverify",
            post(handlers::unverify_user),
        )
        .route(
            "/api/admin/advertisements/approve",
            post(handlers::bulk_approve_advertisements),
        )
        .route(
            "/api/admin/advertisements/reject",
            post(handlers::bulk_reject_advertisements),
        )
        .with_state(state)
}
