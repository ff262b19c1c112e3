use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::church::handlers;
use crate::features::church::services::ChurchService;

/// Create routes for the church feature.
///
/// Reads are public; create/update/delete and the bulk toggles are enforced
/// through the `RequireAdmin` guard. Static segments (`photos`, `videos`,
/// `set-active`, `set-published`) are registered before the `{id}` routes.
pub fn routes(service: Arc<ChurchService>) -> Router {
    Router::new()
        // Priests
        .route(
            "/api/church/priests/set-active",
            post(handlers::set_priests_active),
        )
        .route(
            "/api/church/priests",
            get(handlers::list_priests).post(handlers::create_priest),
        )
        .route(
            "/api/church/priests/{id}",
            get(handlers::get_priest)
                .put(handlers::update_priest)
                .delete(handlers::delete_priest),
        )
        // Service schedule
        .route(
            "/api/church/schedule/set-active",
            post(handlers::set_schedule_active),
        )
        .route(
            "/api/church/schedule",
            get(handlers::list_schedule).post(handlers::create_schedule_entry),
        )
        .route(
            "/api/church/schedule/{id}",
            get(handlers::get_schedule_entry)
                .put(handlers::update_schedule_entry)
                .delete(handlers::delete_schedule_entry),
        )
        // Announcements
        .route(
            "/api/church/announcements/set-active",
            post(handlers::set_announcements_active),
        )
        .route(
            "/api/church/announcements",
            get(handlers::list_announcements).post(handlers::create_announcement),
        )
        .route(
            "/api/church/announcements/{id}",
            get(handlers::get_announcement)
                .put(handlers::update_announcement)
                .delete(handlers::delete_announcement),
        )
        // Media gallery
        .route(
            "/api/church/media/photos",
            get(handlers::church_media_photos),
        )
        .route(
            "/api/church/media/videos",
            get(handlers::church_media_videos),
        )
        .route(
            "/api/church/media/set-published",
            post(handlers::set_church_media_published),
        )
        .route(
            "/api/church/media",
            get(handlers::list_church_media).post(handlers::create_church_media),
        )
        .route(
            "/api/church/media/{id}",
            get(handlers::get_church_media)
                .put(handlers::update_church_media)
                .delete(handlers::delete_church_media),
        )
        .with_state(service)
}
