//! User Service
//!
//! Handles user management operations.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{User, UserRepository};

/// User service trait
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, user_id: &str) -> Result<UserDto, UserError>;

    /// Get user by username
    async fn get_user_by_username(&self, username: &str) -> Result<UserDto, UserError>;

    /// Update user profile
    async fn update_profile(
        &self,
        user_id: &str,
        update: UpdateProfileDto,
    ) -> Result<UserDto, UserError>;

    /// Delete user account
    async fn delete_user(&self, user_id: &str) -> Result<(), UserError>;
}

/// User data transfer object
#[derive(Debug, Clone)]
pub struct UserDto {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at.to_rfc3339(),
        }
    }
}

/// Update profile request
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileDto {
    pub username: Option<String>,
    pub email: Option<String>,
}

/// User service errors
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("User not found")]
    NotFound,

    #[error("Username already taken")]
    UsernameTaken,

    #[error("Email already registered")]
    EmailTaken,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// UserService implementation
pub struct UserServiceImpl<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> UserServiceImpl<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<U> UserService for UserServiceImpl<U>
where
    U: UserRepository + 'static,
{
    async fn get_user(&self, user_id: &str) -> Result<UserDto, UserError> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await
            .map_err(|e| UserError::Internal(e.to_string()))?
            .ok_or(UserError::NotFound)?;

        Ok(UserDto::from(user))
    }

    async fn get_user_by_username(&self, username: &str) -> Result<UserDto, UserError> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await
            .map_err(|e| UserError::Internal(e.to_string()))?
            .ok_or(UserError::NotFound)?;

        Ok(UserDto::from(user))
    }

    async fn update_profile(
        &self,
        user_id: &str,
        update: UpdateProfileDto,
    ) -> Result<UserDto, UserError> {
        // Get existing user
        let mut user = self
            .user_repo
            .find_by_id(user_id)
            .await
            .map_err(|e| UserError::Internal(e.to_string()))?
            .ok_or(UserError::NotFound)?;

        // Check if username is being changed and if it's available
        if let Some(ref new_username) = update.username {
            if new_username != &user.username {
                let exists = self
                    .user_repo
                    .username_exists(new_username)
                    .await
                    .map_err(|e| UserError::Internal(e.to_string()))?;

                if exists {
                    return Err(UserError::UsernameTaken);
                }
                user.username = new_username.clone();
            }
        }

        // Check if email is being changed and if it's available
        if let Some(ref new_email) = update.email {
            if new_email != &user.email {
                let exists = self
                    .user_repo
                    .email_exists(new_email)
                    .await
                    .map_err(|e| UserError::Internal(e.to_string()))?;

                if exists {
                    return Err(UserError::EmailTaken);
                }
                user.email = new_email.clone();
            }
        }

        // Save updates
        let updated = self
            .user_repo
            .update(&user)
            .await
            .map_err(|e| UserError::Internal(e.to_string()))?;

        Ok(UserDto::from(updated))
    }

    async fn delete_user(&self, user_id: &str) -> Result<(), UserError> {
        self.user_repo
            .delete(user_id)
            .await
            .map_err(|e| UserError::Internal(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MockUserRepository;
    use mockall::predicate::eq;

    fn sample_user(id: &str) -> User {
        User {
            id: id.to_string(),
            username: "testuser".to_string(),
            email: "test@example.com".to_string(),
            password_hash: "hash".to_string(),
            ..User::default()
        }
    }

    #[tokio::test]
    async fn test_get_user_returns_repository_record() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(eq("USR-TEST1"))
            .returning(|id| Ok(Some(sample_user(id))));

        let service = UserServiceImpl::new(Arc::new(repo));
        let dto = service.get_user("USR-TEST1").await.expect("should find user");

        assert_eq!(dto.id, "USR-TEST1");
        assert_eq!(dto.username, "testuser");
    }

    #[tokio::test]
    async fn test_get_user_missing_is_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = UserServiceImpl::new(Arc::new(repo));
        let result = service.get_user("USR-MISSING").await;

        assert!(matches!(result, Err(UserError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_profile_rejects_taken_username() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(sample_user(id))));
        repo.expect_username_exists()
            .with(eq("taken"))
            .returning(|_| Ok(true));

        let service = UserServiceImpl::new(Arc::new(repo));
        let update = UpdateProfileDto {
            username: Some("taken".to_string()),
            ..UpdateProfileDto::default()
        };
        let result = service.update_profile("USR-TEST1", update).await;

        assert!(matches!(result, Err(UserError::UsernameTaken)));
    }

    #[tokio::test]
    async fn test_update_profile_applies_changes() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(sample_user(id))));
        repo.expect_username_exists().returning(|_| Ok(false));
        repo.expect_update()
            .withf(|user| user.username == "renamed")
            .returning(|user| Ok(user.clone()));

        let service = UserServiceImpl::new(Arc::new(repo));
        let update = UpdateProfileDto {
            username: Some("renamed".to_string()),
            ..UpdateProfileDto::default()
        };
        let dto = service
            .update_profile("USR-TEST1", update)
            .await
            .expect("update should succeed");

        assert_eq!(dto.username, "renamed");
    }
}
