//! PostgreSQL Repository Implementations

use kernel::id::BoardId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{Board, DEFAULT_COLUMNS, NewBoard};
use crate::domain::repository::BoardRepository;
use crate::error::BoardsResult;

/// PostgreSQL-backed board repository
#[derive(Clone)]
pub struct PgBoardRepository {
    pool: PgPool,
}

impl PgBoardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl BoardRepository for PgBoardRepository {
    async fn create_with_default_columns(&self, board: &NewBoard) -> BoardsResult<Board> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, BoardRow>(
            r#"
            INSERT INTO boards (name, description, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, name, description, user_id, created_at
            "#,
        )
        .bind(board.name.as_str())
        .bind(board.description.as_deref())
        .bind(&board.user_id)
        .fetch_one(&mut *tx)
        .await?;

        for column in DEFAULT_COLUMNS {
            sqlx::query(
                r#"
                INSERT INTO columns (name, position, board_id)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(column.name)
            .bind(column.position)
            .bind(row.id)
            .execute(&mut *tx)
            .await?;
        }

        // Any `?` above drops `tx`, which rolls the transaction back.
        tx.commit().await?;

        tracing::info!(
            board_id = %row.id,
            user_id = %row.user_id,
            "Board and default columns committed"
        );

        Ok(row.into_board())
    }
}

// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct BoardRow {
    id: Uuid,
    name: String,
    description: Option<String>,
    user_id: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl BoardRow {
    fn into_board(self) -> Board {
        Board {
            id: BoardId::from_uuid(self.id),
            name: self.name,
            description: self.description,
            user_id: self.user_id,
            created_at: self.created_at,
        }
    }
}
