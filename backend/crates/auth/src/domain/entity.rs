//! Auth Session Entity
//!
//! Represents an authenticated user session.
//! Stored in database with cookie-based token reference.

use chrono::{DateTime, Duration, Utc};
use kernel::id::UserKey;

/// Auth session entity
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// Opaque session token (cookie value)
    pub token: String,
    /// Identity of the session owner
    pub user_id: UserKey,
    /// Session expiration (Unix timestamp ms)
    pub expires_at_ms: i64,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl AuthSession {
    /// Create a new auth session
    ///
    /// TTL is provided by the caller, not hard-coded here.
    pub fn new(token: String, user_id: UserKey, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            token,
            user_id,
            expires_at_ms: (now + ttl).timestamp_millis(),
            created_at: now,
        }
    }

    /// Check if session has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }

    /// Get remaining time until expiration
    pub fn remaining_ms(&self) -> i64 {
        let now_ms = Utc::now().timestamp_millis();
        (self.expires_at_ms - now_ms).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_not_expired() {
        let session = AuthSession::new(
            "tok".into(),
            UserKey::Text("42".into()),
            Duration::hours(1),
        );
        assert!(!session.is_expired());
        assert!(session.remaining_ms() > 0);
    }

    #[test]
    fn test_expired_session() {
        let mut session = AuthSession::new(
            "tok".into(),
            UserKey::Text("42".into()),
            Duration::hours(1),
        );
        session.expires_at_ms = Utc::now().timestamp_millis() - 1_000;
        assert!(session.is_expired());
        assert_eq!(session.remaining_ms(), 0);
    }
}
