use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::accounts::models::Village;
use crate::features::accounts::{dtos as accounts_dtos, handlers::profile_handler};
use crate::features::admin::{dtos as admin_dtos, handlers as admin_handlers};
use crate::features::auth::{self, dtos as auth_dtos};
use crate::features::church::models::{AnnouncementType, MediaType, ServiceDay};
use crate::features::church::{dtos as church_dtos, handlers as church_handlers};
use crate::features::community::models::{MediaVillage, NewsType, PhoneCategory};
use crate::features::community::{dtos as community_dtos, handlers as community_handlers};
use crate::features::marketplace::models::{AdType, AdVillage, ModerationStatus};
use crate::features::marketplace::{dtos as marketplace_dtos, handlers as marketplace_handlers};
use crate::shared::types::Meta;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth::handlers::register,
        auth::handlers::login,
        auth::handlers::refresh_token,
        // Accounts
        profile_handler::get_profile,
        profile_handler::update_profile,
        // Marketplace
        marketplace_handlers::list_advertisements,
        marketplace_handlers::get_advertisement,
        marketplace_handlers::create_advertisement,
        marketplace_handlers::update_advertisement,
        marketplace_handlers::delete_advertisement,
        marketplace_handlers::my_ads,
        marketplace_handlers::deactivate_advertisement,
        marketplace_handlers::approve_advertisement,
        marketplace_handlers::reject_advertisement,
        // Church
        church_handlers::list_priests,
        church_handlers::get_priest,
        church_handlers::create_priest,
        church_handlers::update_priest,
        church_handlers::delete_priest,
        church_handlers::set_priests_active,
        church_handlers::list_schedule,
        church_handlers::get_schedule_entry,
        church_handlers::create_schedule_entry,
        church_handlers::update_schedule_entry,
        church_handlers::delete_schedule_entry,
        church_handlers::set_schedule_active,
        church_handlers::list_announcements,
        church_handlers::get_announcement,
        church_handlers::create_announcement,
        church_handlers::update_announcement,
        church_handlers::delete_announcement,
        church_handlers::set_announcements_active,
        church_handlers::list_church_media,
        church_handlers::church_media_photos,
        church_handlers::church_media_videos,
        church_handlers::get_church_media,
        church_handlers::create_church_media,
        church_handlers::update_church_media,
        church_handlers::delete_church_media,
        church_handlers::set_church_media_published,
        // Community
        community_handlers::list_news_items,
        community_handlers::front_page_news,
        community_handlers::front_page_important,
        community_handlers::get_news_item,
        community_handlers::create_news_item,
        community_handlers::update_news_item,
        community_handlers::delete_news_item,
        community_handlers::set_news_active,
        community_handlers::list_community_media,
        community_handlers::community_media_photos,
        community_handlers::community_media_videos,
        community_handlers::get_community_media,
        community_handlers::create_community_media,
        community_handlers::update_community_media,
        community_handlers::delete_community_media,
        community_handlers::set_community_media_published,
        community_handlers::list_useful_phones,
        community_handlers::get_useful_phone,
        community_handlers::create_useful_phone,
        community_handlers::update_useful_phone,
        community_handlers::delete_useful_phone,
        community_handlers::set_useful_phones_active,
        // Admin
        admin_handlers::unverified_users_count,
        admin_handlers::moderation_queue_count,
        admin_handlers::verify_user,
        admin_handlers::unverify_user,
        admin_handlers::bulk_approve_advertisements,
        admin_handlers::bulk_reject_advertisements,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Domain enums
            Village,
            AdType,
            AdVillage,
            ModerationStatus,
            MediaType,
            MediaVillage,
            NewsType,
            PhoneCategory,
            AnnouncementType,
            ServiceDay,
            // Auth
            auth::model::AuthenticatedUser,
            auth_dtos::RegisterRequestDto,
            auth_dtos::LoginRequestDto,
            auth_dtos::RefreshTokenRequestDto,
            auth_dtos::AuthResponseDto,
            // Accounts
            accounts_dtos::UserDto,
            accounts_dtos::UpdateProfileDto,
            // Marketplace
            marketplace_dtos::AdvertisementResponseDto,
            marketplace_dtos::AdvertisementAuthorDto,
            marketplace_dtos::AdvertisementImageDto,
            marketplace_dtos::AdvertisementPayloadDto,
            marketplace_dtos::RejectRequestDto,
            // Church
            church_dtos::PriestDto,
            church_dtos::PriestPayloadDto,
            church_dtos::ServiceScheduleDto,
            church_dtos::SchedulePayloadDto,
            church_dtos::ChurchAnnouncementDto,
            church_dtos::AnnouncementPayloadDto,
            church_dtos::ChurchMediaDto,
            church_dtos::ChurchMediaPayloadDto,
            church_dtos::BulkActivateDto,
            church_dtos::BulkPublishDto,
            // Community
            community_dtos::NewsItemDto,
            community_dtos::NewsItemPayloadDto,
            community_dtos::CommunityMediaDto,
            community_dtos::CommunityMediaPayloadDto,
            community_dtos::UsefulPhoneDto,
            community_dtos::UsefulPhonePayloadDto,
            // Admin
            admin_dtos::CountDto,
            admin_dtos::BulkApproveDto,
            admin_dtos::BulkRejectDto,
            admin_dtos::BulkModerationResultDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login and token refresh"),
        (name = "accounts", description = "User profile"),
        (name = "marketplace", description = "Classified listings and moderation"),
        (name = "church", description = "Church schedule, announcements and media"),
        (name = "community", description = "News, gallery and phone directory"),
        (name = "admin", description = "Administrator console")
    )
)]
pub struct ApiDoc;

/// Registers the bearer token security scheme
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Applies the configured title/version/description to the generated document
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
