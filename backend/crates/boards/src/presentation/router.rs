//! Boards Router

use std::sync::Arc;

use auth::{PgSessionRepository, SessionRepository};
use axum::{Router, routing::post};

use crate::application::config::BoardsConfig;
use crate::domain::repository::BoardRepository;
use crate::infra::postgres::PgBoardRepository;
use crate::presentation::handlers::{self, BoardsAppState};

/// Create the boards router with PostgreSQL repositories
pub fn boards_router(
    sessions: PgSessionRepository,
    repo: PgBoardRepository,
    config: BoardsConfig,
) -> Router {
    let state = BoardsAppState {
        sessions: Arc::new(sessions),
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/",
            post(handlers::create_board::<PgSessionRepository, PgBoardRepository>),
        )
        .with_state(state)
}

/// Create a generic boards router for any repository implementations
pub fn boards_router_generic<S, B>(sessions: S, repo: B, config: BoardsConfig) -> Router
where
    S: SessionRepository + Clone + Send + Sync + 'static,
    B: BoardRepository + Clone + Send + Sync + 'static,
{
    let state = BoardsAppState {
        sessions: Arc::new(sessions),
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/", post(handlers::create_board::<S, B>))
        .with_state(state)
}
