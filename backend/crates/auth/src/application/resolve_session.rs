//! Resolve Session Use Case
//!
//! Answers "who is the caller" for a request-supplied session token.

use std::sync::Arc;

use crate::domain::entity::AuthSession;
use crate::domain::repository::SessionRepository;
use crate::error::AuthResult;

/// Resolve session use case
pub struct ResolveSessionUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
}

impl<S> ResolveSessionUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>) -> Self {
        Self { session_repo }
    }

    /// Resolve an optional cookie token to a session
    ///
    /// Returns `None` when no token was supplied, the token is unknown,
    /// or the row has expired. Storage failures propagate.
    pub async fn resolve(&self, token: Option<&str>) -> AuthResult<Option<AuthSession>> {
        let Some(token) = token else {
            return Ok(None);
        };

        let session = self.session_repo.find_by_token(token).await?;

        match session {
            Some(s) if s.is_expired() => {
                tracing::debug!("Session token expired");
                Ok(None)
            }
            other => Ok(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use kernel::id::UserKey;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MapSessionRepository {
        sessions: Mutex<HashMap<String, AuthSession>>,
    }

    impl MapSessionRepository {
        fn with(session: AuthSession) -> Arc<Self> {
            let repo = Self::default();
            repo.sessions
                .lock()
                .unwrap()
                .insert(session.token.clone(), session);
            Arc::new(repo)
        }
    }

    impl SessionRepository for MapSessionRepository {
        async fn find_by_token(&self, token: &str) -> AuthResult<Option<AuthSession>> {
            Ok(self.sessions.lock().unwrap().get(token).cloned())
        }

        async fn delete_expired(&self) -> AuthResult<u64> {
            let mut sessions = self.sessions.lock().unwrap();
            let before = sessions.len();
            sessions.retain(|_, s| !s.is_expired());
            Ok((before - sessions.len()) as u64)
        }
    }

    #[tokio::test]
    async fn test_resolves_known_token() {
        let session = AuthSession::new(
            "tok".into(),
            UserKey::Text("42".into()),
            Duration::hours(1),
        );
        let use_case = ResolveSessionUseCase::new(MapSessionRepository::with(session));

        let resolved = use_case.resolve(Some("tok")).await.unwrap().unwrap();
        assert_eq!(resolved.user_id, UserKey::Text("42".into()));
    }

    #[tokio::test]
    async fn test_missing_token_is_none() {
        let use_case = ResolveSessionUseCase::new(Arc::new(MapSessionRepository::default()));
        assert!(use_case.resolve(None).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unknown_token_is_none() {
        let use_case = ResolveSessionUseCase::new(Arc::new(MapSessionRepository::default()));
        assert!(use_case.resolve(Some("tok")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_expired_token_is_none() {
        let session = AuthSession::new(
            "tok".into(),
            UserKey::Text("42".into()),
            Duration::seconds(-10),
        );
        let use_case = ResolveSessionUseCase::new(MapSessionRepository::with(session));

        assert!(use_case.resolve(Some("tok")).await.unwrap().is_none());
    }
}
