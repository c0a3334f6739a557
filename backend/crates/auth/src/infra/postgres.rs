//! PostgreSQL Repository Implementations

use chrono::Utc;
use kernel::id::UserKey;
use sqlx::PgPool;

use crate::domain::entity::AuthSession;
use crate::domain::repository::SessionRepository;
use crate::error::AuthResult;

/// PostgreSQL-backed session repository
#[derive(Clone)]
pub struct PgSessionRepository {
    pool: PgPool,
}

impl PgSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl SessionRepository for PgSessionRepository {
    async fn find_by_token(&self, token: &str) -> AuthResult<Option<AuthSession>> {
        let now_ms = Utc::now().timestamp_millis();

        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT
                token,
                user_id,
                expires_at_ms,
                created_at
            FROM sessions
            WHERE token = $1 AND expires_at_ms > $2
            "#,
        )
        .bind(token)
        .bind(now_ms)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(SessionRow::into_session))
    }

    async fn delete_expired(&self) -> AuthResult<u64> {
        let now_ms = Utc::now().timestamp_millis();

        let deleted = sqlx::query("DELETE FROM sessions WHERE expires_at_ms < $1")
            .bind(now_ms)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!(sessions = deleted, "Cleaned up expired sessions");

        Ok(deleted)
    }
}

// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct SessionRow {
    token: String,
    user_id: String,
    expires_at_ms: i64,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl SessionRow {
    fn into_session(self) -> AuthSession {
        AuthSession {
            token: self.token,
            user_id: UserKey::Text(self.user_id),
            expires_at_ms: self.expires_at_ms,
            created_at: self.created_at,
        }
    }
}
