use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::AppError;
use crate::features::accounts::models::Village;
use crate::features::marketplace::models::{
    AdType, AdVillage, Advertisement, AdvertisementImage, ModerationStatus,
};
use crate::shared::constants::MAX_AD_IMAGES;

/// Listing author as embedded in advertisement responses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdvertisementAuthorDto {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub village: Option<Village>,
    pub is_verified: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdvertisementImageDto {
    pub id: Uuid,
    pub image_url: String,
    pub sort_order: i32,
    pub uploaded_at: DateTime<Utc>,
}

impl From<AdvertisementImage> for AdvertisementImageDto {
    fn from(img: AdvertisementImage) -> Self {
        Self {
            id: img.id,
            image_url: img.image_url,
            sort_order: img.sort_order,
            uploaded_at: img.uploaded_at,
        }
    }
}

/// Full listing representation (read)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdvertisementResponseDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub ad_type: AdType,
    #[schema(value_type = Option<String>)]
    pub price: Option<Decimal>,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub author: AdvertisementAuthorDto,
    pub village: AdVillage,
    pub moderation_status: ModerationStatus,
    pub moderation_comment: String,
    pub is_active: bool,
    pub views: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub images: Vec<AdvertisementImageDto>,
    pub main_image_url: Option<String>,
    pub contact_info: String,
}

impl AdvertisementResponseDto {
    pub fn from_parts(
        ad: Advertisement,
        author: AdvertisementAuthorDto,
        images: Vec<AdvertisementImageDto>,
    ) -> Self {
        let contact_info = ad.contact_info();
        let main_image_url = images.first().map(|img| img.image_url.clone());

        Self {
            id: ad.id,
            title: ad.title,
            description: ad.description,
            ad_type: ad.ad_type,
            price: ad.price,
            phone: ad.phone,
            email: ad.email,
            address: ad.address,
            author,
            village: ad.village,
            moderation_status: ad.moderation_status,
            moderation_comment: ad.moderation_comment,
            is_active: ad.is_active,
            views: ad.views,
            created_at: ad.created_at,
            updated_at: ad.updated_at,
            images,
            main_image_url,
            contact_info,
        }
    }
}

/// Request DTO used for both listing submission and author edits.
/// Image URLs replace the stored set wholesale, positions follow list order.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AdvertisementPayloadDto {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    pub ad_type: AdType,

    #[schema(value_type = Option<String>)]
    pub price: Option<Decimal>,

    #[validate(length(max = 20, message = "Phone must not exceed 20 characters"))]
    pub phone: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(max = 200, message = "Address must not exceed 200 characters"))]
    pub address: Option<String>,

    pub village: AdVillage,

    #[serde(default)]
    pub images: Vec<String>,
}

impl AdvertisementPayloadDto {
    /// Cross-field listing rules that `validator` attributes cannot express:
    /// price presence per listing type, at least one contact, image cap.
    pub fn validate_listing_rules(&self) -> Result<(), AppError> {
        if self.ad_type.requires_price() && self.price.is_none() {
            return Err(AppError::Validation(
                "Для объявлений «Продам» и «Сдам в аренду» необходимо указать цену".to_string(),
            ));
        }

        if self.ad_type.forbids_price() && self.price.is_some() {
            return Err(AppError::Validation(
                "Для объявлений «Отдам в хорошие руки» цена не указывается".to_string(),
            ));
        }

        if let Some(price) = self.price {
            if price.is_sign_negative() {
                return Err(AppError::Validation("Цена не может быть отрицательной".to_string()));
            }
        }

        let has_phone = self.phone.as_deref().is_some_and(|p| !p.is_empty());
        let has_email = self.email.as_deref().is_some_and(|e| !e.is_empty());
        if !has_phone && !has_email {
            return Err(AppError::Validation(
                "Укажите хотя бы один контакт: телефон или email".to_string(),
            ));
        }

        if self.images.len() > MAX_AD_IMAGES {
            return Err(AppError::Validation(
                "Можно загрузить максимум 3 изображения".to_string(),
            ));
        }

        Ok(())
    }
}

/// Filter parameters for the public listing feed; pagination travels in the
/// shared `PaginationQuery`
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct AdvertisementListQuery {
    pub ad_type: Option<AdType>,
    pub village: Option<AdVillage>,
    /// Free-text search over title and description
    pub search: Option<String>,
    /// Sort key: created_at, price or views; prefix with '-' for descending
    pub ordering: Option<String>,
}

/// Request DTO for rejecting a listing
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RejectRequestDto {
    /// Reason shown to the author; must not be empty
    pub comment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(ad_type: AdType, price: Option<Decimal>) -> AdvertisementPayloadDto {
        AdvertisementPayloadDto {
            title: "Продам велосипед".to_string(),
            description: "Почти новый".to_string(),
            ad_type,
            price,
            phone: Some("+7 (903) 123-45-67".to_string()),
            email: None,
            address: None,
            village: AdVillage::Bunyakovo,
            images: vec![],
        }
    }

    #[test]
    fn test_sale_and_rent_require_price() {
        assert!(payload(AdType::Sale, None).validate_listing_rules().is_err());
        assert!(payload(AdType::Rent, None).validate_listing_rules().is_err());
        assert!(payload(AdType::Sale, Some(Decimal::new(10000, 2)))
            .validate_listing_rules()
            .is_ok());
    }

    #[test]
    fn test_free_forbids_price() {
        assert!(payload(AdType::Free, Some(Decimal::ONE))
            .validate_listing_rules()
            .is_err());
        assert!(payload(AdType::Free, None).validate_listing_rules().is_ok());
    }

    #[test]
    fn test_buy_and_handmade_price_is_optional() {
        assert!(payload(AdType::Buy, None).validate_listing_rules().is_ok());
        assert!(payload(AdType::Handmade, Some(Decimal::ONE))
            .validate_listing_rules()
            .is_ok());
    }

    #[test]
    fn test_at_least_one_contact_required() {
        let mut dto = payload(AdType::Buy, None);
        dto.phone = None;
        dto.email = None;
        assert!(dto.validate_listing_rules().is_err());

        dto.email = Some("buyer@example.com".to_string());
        assert!(dto.validate_listing_rules().is_ok());

        // Empty strings do not count as contacts
        dto.email = Some(String::new());
        dto.phone = Some(String::new());
        assert!(dto.validate_listing_rules().is_err());
    }

    #[test]
    fn test_negative_price_rejected() {
        assert!(payload(AdType::Sale, Some(Decimal::new(-100, 2)))
            .validate_listing_rules()
            .is_err());
    }

    #[test]
    fn test_image_cap() {
        let mut dto = payload(AdType::Buy, None);
        dto.images = vec![
            "a.jpg".to_string(),
            "b.jpg".to_string(),
            "c.jpg".to_string(),
        ];
        assert!(dto.validate_listing_rules().is_ok());

        dto.images.push("d.jpg".to_string());
        assert!(dto.validate_listing_rules().is_err());
    }
}
