//! User Session entity and repository trait.
//!
//! Maps to the `user_sessions` table in the database schema.
//! Used for JWT refresh token management.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;
use crate::shared::ids::{new_id, IdPrefix};

/// Represents a user session for JWT refresh token management.
///
/// Maps to the `user_sessions` table:
/// - id: TEXT PRIMARY KEY (prefixed ID, `SES-…`)
/// - user_id: TEXT NOT NULL REFERENCES users(id)
/// - refresh_token_hash: VARCHAR(255) NOT NULL (SHA-256 hash)
/// - expires_at: TIMESTAMPTZ NOT NULL
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - last_used_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - revoked_at: TIMESTAMPTZ NULL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Prefixed ID (primary key)
    pub id: String,

    /// User ID this session belongs to
    pub user_id: String,

    /// SHA-256 hash of the refresh token (never store raw tokens)
    #[serde(skip_serializing)]
    pub refresh_token_hash: String,

    /// When this session expires
    pub expires_at: DateTime<Utc>,

    /// When the session was created
    pub created_at: DateTime<Utc>,

    /// When the session was last used (refresh token used)
    pub last_used_at: DateTime<Utc>,

    /// When the session was revoked (None if active)
    pub revoked_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Create a new active session.
    pub fn new(user_id: String, refresh_token_hash: String, expires_at: DateTime<Utc>) -> Self {
        let now = Utc::now();
        Self {
            id: new_id(IdPrefix::Session),
            user_id,
            refresh_token_hash,
            expires_at,
            created_at: now,
            last_used_at: now,
            revoked_at: None,
        }
    }

    /// Check if the session is currently active (not expired, not revoked).
    pub fn is_active(&self) -> bool {
        self.revoked_at.is_none() && self.expires_at > Utc::now()
    }
}

/// Repository trait for Session data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Create a new session.
    async fn create(&self, session: &Session) -> Result<Session, AppError>;

    /// Find a session by its refresh token hash.
    async fn find_by_token_hash(&self, token_hash: &str) -> Result<Option<Session>, AppError>;

    /// Replace the refresh token hash and expiry (token rotation).
    async fn update_token_hash(
        &self,
        id: &str,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), AppError>;

    /// Revoke a session.
    async fn revoke(&self, id: &str) -> Result<(), AppError>;

    /// Delete sessions that expired before the given cutoff.
    async fn delete_expired(&self, cutoff: DateTime<Utc>) -> Result<u64, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_new_session_is_active() {
        let session = Session::new(
            "USR-test1".to_string(),
            "hash".to_string(),
            Utc::now() + Duration::days(7),
        );

        assert!(session.is_active());
        assert!(session.id.starts_with("SES-"));
        assert!(session.revoked_at.is_none());
    }

    #[test]
    fn test_expired_session_is_not_active() {
        let session = Session::new(
            "USR-test1".to_string(),
            "hash".to_string(),
            Utc::now() - Duration::minutes(1),
        );

        assert!(!session.is_active());
    }

    #[test]
    fn test_revoked_session_is_not_active() {
        let mut session = Session::new(
            "USR-test1".to_string(),
            "hash".to_string(),
            Utc::now() + Duration::days(7),
        );
        session.revoked_at = Some(Utc::now());

        assert!(!session.is_active());
    }

    #[test]
    fn test_token_hash_not_serialized() {
        let session = Session::new(
            "USR-test1".to_string(),
            "secret_hash".to_string(),
            Utc::now() + Duration::days(7),
        );

        let serialized = serde_json::to_string(&session).expect("Failed to serialize session");
        assert!(!serialized.contains("secret_hash"));
    }
}
