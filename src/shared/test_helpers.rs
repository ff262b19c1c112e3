#[cfg(test)]
use crate::features::auth::model::AuthenticatedUser;

#[cfg(test)]
use uuid::Uuid;

#[cfg(test)]
pub fn create_admin_user() -> AuthenticatedUser {
    AuthenticatedUser {
        id: Uuid::new_v4(),
        username: "test-admin".to_string(),
        is_admin: true,
    }
}

#[cfg(test)]
pub fn create_regular_user() -> AuthenticatedUser {
    AuthenticatedUser {
        id: Uuid::new_v4(),
        username: "test-user".to_string(),
        is_admin: false,
    }
}
