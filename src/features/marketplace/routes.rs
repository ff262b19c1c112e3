use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::marketplace::handlers;
use crate::features::marketplace::services::AdvertisementService;

/// Create routes for the marketplace feature.
///
/// Mounted behind the optional-auth middleware: reads work for guests, while
/// a valid bearer token widens visibility to the caller's own listings.
/// Mutations enforce authentication through the `AuthenticatedUser` extractor
/// and moderation actions through the `RequireAdmin` guard.
pub fn routes(service: Arc<AdvertisementService>) -> Router {
    Router::new()
        // Static segment must be registered before the {id} routes
        .route(
            "/api/marketplace/advertisements/my_ads",
            get(handlers::my_ads),
        )
        .route(
            "/api/marketplace/advertisements",
            get(handlers::list_advertisements).post(handlers::create_advertisement),
        )
        .route(
            "/api/marketplace/advertisements/{id}",
            get(handlers::get_advertisement)
                .put(handlers::update_advertisement)
                .delete(handlers::delete_advertisement),
        )
        .route(
            "/api/marketplace/advertisements/{id}/deactivate",
            post(handlers::deactivate_advertisement),
        )
        .route(
            "/api/marketplace/advertisements/{id}/approve",
            post(handlers::approve_advertisement),
        )
        .route(
            "/api/marketplace/advertisements/{id}/reject",
            post(handlers::reject_advertisement),
        )
        .with_state(service)
}
