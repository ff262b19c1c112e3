use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::community::handlers;
use crate::features::community::services::CommunityService;

/// Create routes for the community feature.
///
/// Reads are public; writes are enforced through the `RequireAdmin` guard.
/// Static segments are registered before the `{id}` routes.
pub fn routes(service: Arc<CommunityService>) -> Router {
    Router::new()
        // News
        .route(
            "/api/community/news-items/news",
            get(handlers::front_page_news),
        )
        .route(
            "/api/community/news-items/important",
            get(handlers::front_page_important),
        )
        .route(
            "/api/community/news-items/set-active",
            post(handlers::set_news_active),
        )
        .route(
            "/api/community/news-items",
            get(handlers::list_news_items).post(handlers::create_news_item),
        )
        .route(
            "/api/community/news-items/{id}",
            get(handlers::get_news_item)
                .put(handlers::update_news_item)
                .delete(handlers::delete_news_item),
        )
        // Media gallery
        .route(
            "/api/community/media/photos",
            get(handlers::community_media_photos),
        )
        .route(
            "/api/community/media/videos",
            get(handlers::community_media_videos),
        )
        .route(
            "/api/community/media/set-published",
            post(handlers::set_community_media_published),
        )
        .route(
            "/api/community/media",
            get(handlers::list_community_media).post(handlers::create_community_media),
        )
        .route(
            "/api/community/media/{id}",
            get(handlers::get_community_media)
                .put(handlers::update_community_media)
                .delete(handlers::delete_community_media),
        )
        // Useful phones
        .route(
            "/api/community/useful-phones/set-active",
            post(handlers::set_useful_phones_active),
        )
        .route(
            "/api/community/useful-phones",
            get(handlers::list_useful_phones).post(handlers::create_useful_phone),
        )
        .route(
            "/api/community/useful-phones/{id}",
            get(handlers::get_useful_phone)
                .put(handlers::update_useful_phone)
                .delete(handlers::delete_useful_phone),
        )
        .with_state(service)
}
