//! Repository Traits
//!
//! Interfaces for session persistence. Implementation is in infrastructure layer.

use crate::domain::entity::AuthSession;
use crate::error::AuthResult;

/// Session repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Find a session by its opaque token
    ///
    /// Expiry is re-checked by the caller, so implementations may but
    /// need not filter expired rows themselves.
    async fn find_by_token(&self, token: &str) -> AuthResult<Option<AuthSession>>;

    /// Delete expired sessions, returning the number of rows removed
    async fn delete_expired(&self) -> AuthResult<u64>;
}
