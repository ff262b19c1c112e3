use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Listing type, matching the `ad_type` database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "ad_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AdType {
    Sale,
    Buy,
    Rent,
    Free,
    Handmade,
}

impl AdType {
    /// Human-readable label shown in notifications
    pub fn display_name(&self) -> &'static str {
        match self {
            AdType::Sale => "Продам",
            AdType::Buy => "Куплю",
            AdType::Rent => "Сдам в аренду",
            AdType::Free => "Отдам в хорошие руки",
            AdType::Handmade => "Услуги мастера",
        }
    }

    /// Listings of these types must carry a price
    pub fn requires_price(&self) -> bool {
        matches!(self, AdType::Sale | AdType::Rent)
    }

    /// Listings of these types must not carry a price
    pub fn forbids_price(&self) -> bool {
        matches!(self, AdType::Free)
    }
}

impl std::fmt::Display for AdType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdType::Sale => write!(f, "sale"),
            AdType::Buy => write!(f, "buy"),
            AdType::Rent => write!(f, "rent"),
            AdType::Free => write!(f, "free"),
            AdType::Handmade => write!(f, "handmade"),
        }
    }
}

/// Locality a listing belongs to, matching the `ad_village` database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "ad_village", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AdVillage {
    Bunyakovo,
    Ryabtsevo,
    Other,
}

impl AdVillage {
    pub fn display_name(&self) -> &'static str {
        match self {
            AdVillage::Bunyakovo => "Буняково",
            AdVillage::Ryabtsevo => "Рябцево",
            AdVillage::Other => "Другое",
        }
    }
}

impl std::fmt::Display for AdVillage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdVillage::Bunyakovo => write!(f, "bunyakovo"),
            AdVillage::Ryabtsevo => write!(f, "ryabtsevo"),
            AdVillage::Other => write!(f, "other"),
        }
    }
}

/// Moderation lifecycle flag, matching the `moderation_status` database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "moderation_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ModerationStatus {
    Pending,
    Approved,
    Rejected,
}

impl std::fmt::Display for ModerationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModerationStatus::Pending => write!(f, "pending"),
            ModerationStatus::Approved => write!(f, "approved"),
            ModerationStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// Database model for an advertisement
#[derive(Debug, Clone, FromRow)]
pub struct Advertisement {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub ad_type: AdType,
    pub price: Option<Decimal>,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub author_id: Uuid,
    pub village: AdVillage,
    pub moderation_status: ModerationStatus,
    pub moderation_comment: String,
    pub is_active: bool,
    pub views: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Advertisement {
    /// A listing appears in public lists only when it is active and approved
    pub fn is_publicly_visible(&self) -> bool {
        self.is_active && self.moderation_status == ModerationStatus::Approved
    }

    /// Contact lines the way they are rendered in the listing card
    pub fn contact_info(&self) -> String {
        let mut contacts = Vec::new();
        if !self.phone.is_empty() {
            contacts.push(format!("📞 {}", self.phone));
        }
        if !self.email.is_empty() {
            contacts.push(format!("✉️ {}", self.email));
        }
        if !self.address.is_empty() {
            contacts.push(format!("📍 {}", self.address));
        }
        contacts.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(is_active: bool, status: ModerationStatus) -> Advertisement {
        Advertisement {
            id: Uuid::new_v4(),
            title: "Продам велосипед".to_string(),
            description: "Почти новый".to_string(),
            ad_type: AdType::Sale,
            price: Some(Decimal::new(10000, 2)),
            phone: "+7 (903) 123-45-67".to_string(),
            email: String::new(),
            address: String::new(),
            author_id: Uuid::new_v4(),
            village: AdVillage::Bunyakovo,
            moderation_status: status,
            moderation_comment: String::new(),
            is_active,
            views: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_public_visibility_requires_active_and_approved() {
        assert!(listing(true, ModerationStatus::Approved).is_publicly_visible());
        assert!(!listing(false, ModerationStatus::Approved).is_publicly_visible());
        assert!(!listing(true, ModerationStatus::Pending).is_publicly_visible());
        assert!(!listing(true, ModerationStatus::Rejected).is_publicly_visible());
    }

    #[test]
    fn test_status_and_type_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&ModerationStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(serde_json::to_string(&AdType::Handmade).unwrap(), "\"handmade\"");
        assert_eq!(
            serde_json::from_str::<AdVillage>("\"ryabtsevo\"").unwrap(),
            AdVillage::Ryabtsevo
        );
    }

    #[test]
    fn test_price_rules_per_type() {
        assert!(AdType::Sale.requires_price());
        assert!(AdType::Rent.requires_price());
        assert!(!AdType::Buy.requires_price());
        assert!(AdType::Free.forbids_price());
        assert!(!AdType::Handmade.forbids_price());
    }

    #[test]
    fn test_contact_info_skips_empty_fields() {
        let mut ad = listing(true, ModerationStatus::Approved);
        ad.email = "seller@example.com".to_string();
        assert_eq!(
            ad.contact_info(),
            "📞 +7 (903) 123-45-67\n✉️ seller@example.com"
        );

        ad.phone.clear();
        ad.email.clear();
        assert_eq!(ad.contact_info(), "");
    }
}
