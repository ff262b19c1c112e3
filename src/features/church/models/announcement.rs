use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Announcement category, matching the `announcement_type` database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "announcement_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AnnouncementType {
    General,
    Service,
    Event,
    Prayer,
    Urgent,
}

/// Database model for an announcement from the priest
#[derive(Debug, Clone, FromRow)]
pub struct ChurchAnnouncement {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub announcement_type: AnnouncementType,
    pub priest_id: Option<Uuid>,
    pub is_active: bool,
    pub priority: i32,
    pub valid_from: DateTime<Utc>,
    pub valid_until: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ChurchAnnouncement {
    /// An announcement is shown while inside its validity window.
    /// The list queries apply the same condition in SQL.
    #[allow(dead_code)]
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        if self.valid_from > now {
            return false;
        }
        match self.valid_until {
            Some(until) => until >= now,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn announcement(
        valid_from: DateTime<Utc>,
        valid_until: Option<DateTime<Utc>>,
    ) -> ChurchAnnouncement {
        ChurchAnnouncement {
            id: Uuid::new_v4(),
            title: "Престольный праздник".to_string(),
            content: "Приглашаем всех".to_string(),
            announcement_type: AnnouncementType::Event,
            priest_id: None,
            is_active: true,
            priority: 0,
            valid_from,
            valid_until,
            created_at: valid_from,
            updated_at: valid_from,
        }
    }

    #[test]
    fn test_validity_window() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        let before = now - chrono::Duration::days(1);
        let after = now + chrono::Duration::days(1);

        assert!(announcement(before, None).is_valid_at(now));
        assert!(announcement(before, Some(after)).is_valid_at(now));
        assert!(!announcement(after, None).is_valid_at(now));
        assert!(!announcement(before, Some(before)).is_valid_at(now));
    }
}
