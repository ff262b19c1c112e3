use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::accounts::models::User;
use crate::features::auth::model::AuthenticatedUser;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum TokenKind {
    Access,
    Refresh,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: Uuid,
    username: String,
    is_admin: bool,
    token_type: TokenKind,
    iat: i64,
    exp: i64,
}

/// Access/refresh token pair handed out on register and login
#[derive(Debug)]
pub struct IssuedTokens {
    pub access: String,
    pub refresh: String,
    pub expires_in: i64,
}

/// Service issuing and validating locally signed HS256 tokens
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    config: AuthConfig,
}

impl TokenService {
    pub fn new(config: AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            config,
        }
    }

    fn issue(&self, user: &User, kind: TokenKind, ttl_secs: i64) -> Result<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user.id,
            username: user.username.clone(),
            is_admin: user.is_admin,
            token_type: kind,
            iat: now,
            exp: now + ttl_secs,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))
    }

    /// Issue an access/refresh pair for a freshly authenticated user
    pub fn issue_pair(&self, user: &User) -> Result<IssuedTokens> {
        let access_ttl = self.config.access_token_ttl.as_secs() as i64;
        let refresh_ttl = self.config.refresh_token_ttl.as_secs() as i64;

        Ok(IssuedTokens {
            access: self.issue(user, TokenKind::Access, access_ttl)?,
            refresh: self.issue(user, TokenKind::Refresh, refresh_ttl)?,
            expires_in: access_ttl,
        })
    }

    fn decode_claims(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = self.config.jwt_leeway.as_secs();

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::Auth(format!("Invalid token: {}", e)))
    }

    /// Validate an access token and produce the request identity
    pub fn validate_access_token(&self, token: &str) -> Result<AuthenticatedUser> {
        let claims = self.decode_claims(token)?;

        if claims.token_type != TokenKind::Access {
            return Err(AppError::Auth("Token is not an access token".to_string()));
        }

        Ok(AuthenticatedUser {
            id: claims.sub,
            username: claims.username,
            is_admin: claims.is_admin,
        })
    }

    /// Validate a refresh token and return the user it was issued to
    pub fn validate_refresh_token(&self, token: &str) -> Result<Uuid> {
        let claims = self.decode_claims(token)?;

        if claims.token_type != TokenKind::Refresh {
            return Err(AppError::Auth("Token is not a refresh token".to_string()));
        }

        Ok(claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::time::Duration;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "a-test-secret-that-is-long-enough-to-sign".to_string(),
            access_token_ttl: Duration::from_secs(900),
            refresh_token_ttl: Duration::from_secs(3600),
            jwt_leeway: Duration::from_secs(0),
        }
    }

    fn test_user(is_admin: bool) -> User {
        User {
            id: Uuid::new_v4(),
            username: "resident".to_string(),
            email: "resident@example.com".to_string(),
            password_hash: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            phone: String::new(),
            village: None,
            avatar_url: None,
            is_verified: false,
            is_admin,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_access_token_round_trip() {
        let service = TokenService::new(test_config());
        let user = test_user(true);

        let tokens = service.issue_pair(&user).unwrap();
        let identity = service.validate_access_token(&tokens.access).unwrap();

        assert_eq!(identity.id, user.id);
        assert_eq!(identity.username, "resident");
        assert!(identity.is_admin);
        assert_eq!(tokens.expires_in, 900);
    }

    #[test]
    fn test_refresh_token_rejected_as_access() {
        let service = TokenService::new(test_config());
        let tokens = service.issue_pair(&test_user(false)).unwrap();

        let err = service.validate_access_token(&tokens.refresh).unwrap_err();
        assert!(matches!(err, AppError::Auth(_)));
    }

    #[test]
    fn test_access_token_rejected_as_refresh() {
        let service = TokenService::new(test_config());
        let tokens = service.issue_pair(&test_user(false)).unwrap();

        let err = service.validate_refresh_token(&tokens.access).unwrap_err();
        assert!(matches!(err, AppError::Auth(_)));
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = TokenService::new(test_config());
        let expired = service.issue(&test_user(false), TokenKind::Access, -120).unwrap();

        let err = service.validate_access_token(&expired).unwrap_err();
        assert!(matches!(err, AppError::Auth(_)));
    }

    #[test]
    fn test_token_signed_with_other_secret_rejected() {
        let service = TokenService::new(test_config());
        let mut other_config = test_config();
        other_config.jwt_secret = "a-different-secret-also-long-enough!!".to_string();
        let other = TokenService::new(other_config);

        let tokens = other.issue_pair(&test_user(false)).unwrap();
        let err = service.validate_access_token(&tokens.access).unwrap_err();
        assert!(matches!(err, AppError::Auth(_)));
    }
}
