use std::sync::Arc;

use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, SaltString};
use argon2::{Argon2, PasswordVerifier};

use crate::core::error::{AppError, Result};
use crate::features::accounts::services::{NewUser, UserService};
use crate::features::auth::dtos::{AuthResponseDto, LoginRequestDto, RegisterRequestDto};
use crate::features::auth::services::TokenService;
use crate::features::notifications::{AdminNotifier, NewUserEvent};

/// Service for registration, login and token refresh
pub struct AuthService {
    users: Arc<UserService>,
    tokens: Arc<TokenService>,
    notifier: Arc<AdminNotifier>,
}

impl AuthService {
    pub fn new(
        users: Arc<UserService>,
        tokens: Arc<TokenService>,
        notifier: Arc<AdminNotifier>,
    ) -> Self {
        Self {
            users,
            tokens,
            notifier,
        }
    }

    /// Register a new user, hand out a token pair and notify the admins
    pub async fn register(&self, dto: RegisterRequestDto) -> Result<AuthResponseDto> {
        if dto.password != dto.password2 {
            return Err(AppError::Validation("Passwords do not match".to_string()));
        }

        let password_hash = hash_password(&dto.password)?;

        let user = self
            .users
            .create(NewUser {
                username: dto.username,
                email: dto.email,
                password_hash,
                first_name: dto.first_name.unwrap_or_default(),
                last_name: dto.last_name.unwrap_or_default(),
                phone: dto.phone.unwrap_or_default(),
                village: dto.village,
            })
            .await?;

        // Admins review every registration; delivery stays off the request path
        self.notifier.dispatch_new_user(NewUserEvent::from_user(&user));

        let tokens = self.tokens.issue_pair(&user)?;
        Ok(AuthResponseDto::new(user, tokens))
    }

    /// Verify credentials and hand out a fresh token pair
    pub async fn login(&self, dto: LoginRequestDto) -> Result<AuthResponseDto> {
        let user = self
            .users
            .find_by_username(&dto.username)
            .await?
            .ok_or_else(|| AppError::Auth("Invalid username or password".to_string()))?;

        if !verify_password(&dto.password, &user.password_hash)? {
            return Err(AppError::Auth("Invalid username or password".to_string()));
        }

        tracing::info!("User logged in: id={}, username={}", user.id, user.username);

        let tokens = self.tokens.issue_pair(&user)?;
        Ok(AuthResponseDto::new(user, tokens))
    }

    /// Exchange a refresh token for a new pair.
    /// Re-reads the user so revoked admin rights do not survive a refresh.
    pub async fn refresh(&self, refresh_token: &str) -> Result<AuthResponseDto> {
        let user_id = self.tokens.validate_refresh_token(refresh_token)?;
        let user = self.users.find_by_id(user_id).await.map_err(|e| match e {
            AppError::NotFound(_) => AppError::Auth("Unknown token subject".to_string()),
            other => other,
        })?;

        let tokens = self.tokens.issue_pair(&user)?;
        Ok(AuthResponseDto::new(user, tokens))
    }
}

/// Hash a password with Argon2id and a random salt
fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {e}")))
}

/// Verify a password against a stored hash
fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| AppError::Internal(format!("Invalid hash: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_round_trip() {
        let hash = hash_password("correct horse battery staple").unwrap();
        assert!(verify_password("correct horse battery staple", &hash).unwrap());
        assert!(!verify_password("wrong password", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("same password").unwrap();
        let second = hash_password("same password").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_garbage_hash_is_an_error() {
        assert!(verify_password("whatever", "not-a-phc-string").is_err());
    }
}
