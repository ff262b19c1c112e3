//! Authorization guards for the application.
//!
//! Regular users can manage their own listings and profile; administrators
//! additionally moderate listings, verify users and edit the content
//! collections.

use crate::core::error::AppError;
use crate::features::auth::model::AuthenticatedUser;
use axum::{extract::FromRequestParts, http::request::Parts};

/// Guard for checking that the caller is an administrator.
///
/// # Example
/// ```ignore
/// pub async fn handler(RequireAdmin(user): RequireAdmin) { ... }
/// ```
pub struct RequireAdmin(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .ok_or_else(|| AppError::Unauthorized("User not authenticated".to_string()))?;

        if !user.is_admin {
            return Err(AppError::Forbidden("Administrator access required".to_string()));
        }

        Ok(RequireAdmin(user.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{create_admin_user, create_regular_user};
    use axum::http::Request;

    async fn extract(user: AuthenticatedUser) -> Result<RequireAdmin, AppError> {
        let mut parts = Request::builder()
            .uri("/api/admin/moderation-queue")
            .body(())
            .unwrap()
            .into_parts()
            .0;
        parts.extensions.insert(user);
        RequireAdmin::from_request_parts(&mut parts, &()).await
    }

    #[test]
    fn test_admin_passes_guard() {
        let result = tokio_test::block_on(extract(create_admin_user()));
        assert!(result.is_ok());
    }

    #[test]
    fn test_regular_user_is_forbidden() {
        let result = tokio_test::block_on(extract(create_regular_user()));
        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }

    #[test]
    fn test_missing_user_is_unauthorized() {
        let mut parts = Request::builder()
            .uri("/api/admin/moderation-queue")
            .body(())
            .unwrap()
            .into_parts()
            .0;
        let result = tokio_test::block_on(RequireAdmin::from_request_parts(&mut parts, &()));
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }
}
