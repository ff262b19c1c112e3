use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::accounts::dtos::UpdateProfileDto;
use crate::features::accounts::models::{User, Village};

const USER_COLUMNS: &str = "id, username, email, password_hash, first_name, last_name, \
     phone, village, avatar_url, is_verified, is_admin, created_at, updated_at";

/// Fields required to insert a new user; hashing happens in the auth service
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub village: Option<Village>,
}

/// Service for user records
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new user; duplicate username/email maps to Conflict
    pub async fn create(&self, data: NewUser) -> Result<User> {
        let query = format!(
            "INSERT INTO users (username, email, password_hash, first_name, last_name, phone, village)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {USER_COLUMNS}"
        );

        let user = sqlx::query_as::<_, User>(&query)
            .bind(&data.username)
            .bind(&data.email)
            .bind(&data.password_hash)
            .bind(&data.first_name)
            .bind(&data.last_name)
            .bind(&data.phone)
            .bind(data.village)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                    AppError::Conflict("Username or email is already taken".to_string())
                }
                _ => {
                    tracing::error!("Failed to insert user: {:?}", e);
                    AppError::Database(e)
                }
            })?;

        tracing::info!("User registered: id={}, username={}", user.id, user.username);

        Ok(user)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<User> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");

        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get user by id: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", id)))
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE username = $1");

        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get user by username: {:?}", e);
                AppError::Database(e)
            })
    }

    /// Partial profile update; `is_verified`/`is_admin` are not touchable here
    pub async fn update_profile(&self, id: Uuid, dto: UpdateProfileDto) -> Result<User> {
        let query = format!(
            "UPDATE users
             SET email = COALESCE($2, email),
                 first_name = COALESCE($3, first_name),
                 last_name = COALESCE($4, last_name),
                 phone = COALESCE($5, phone),
                 village = COALESCE($6, village),
                 avatar_url = COALESCE($7, avatar_url),
                 updated_at = NOW()
             WHERE id = $1
             RETURNING {USER_COLUMNS}"
        );

        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(dto.email)
            .bind(dto.first_name)
            .bind(dto.last_name)
            .bind(dto.phone)
            .bind(dto.village)
            .bind(dto.avatar_url)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                    AppError::Conflict("Email is already taken".to_string())
                }
                _ => {
                    tracing::error!("Failed to update profile: {:?}", e);
                    AppError::Database(e)
                }
            })?
            .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", id)))
    }

    /// Admin-only verification toggle
    pub async fn set_verified(&self, id: Uuid, verified: bool) -> Result<User> {
        let query = format!(
            "UPDATE users SET is_verified = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {USER_COLUMNS}"
        );

        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(verified)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to set verification flag: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", id)))
    }
}
