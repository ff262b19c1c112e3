use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Day a service takes place, matching the `service_day` database enum.
/// The enum declaration order (Monday..Sunday, then Holiday) doubles as the
/// sort order of the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "service_day", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ServiceDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
    Holiday,
}

/// Database model for one service schedule entry
#[derive(Debug, Clone, FromRow)]
pub struct ServiceSchedule {
    pub id: Uuid,
    pub day_of_week: ServiceDay,
    pub date: Option<NaiveDate>,
    pub service_name: String,
    pub starts_at: NaiveTime,
    pub description: Option<String>,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
