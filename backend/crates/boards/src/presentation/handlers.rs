//! HTTP Handlers

use crate::application::config::BoardsConfig;
use crate::application::create_board::{CreateBoardInput, CreateBoardUseCase};
use crate::domain::repository::BoardRepository;
use crate::error::{BoardsError, BoardsResult};
use crate::presentation::dto::{CreateBoardRequest, CreateBoardResponse};
use auth::{ResolveSessionUseCase, SessionRepository};
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use std::sync::Arc;

/// Shared state for board handlers
#[derive(Clone)]
pub struct BoardsAppState<S, B>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
    B: BoardRepository + Clone + Send + Sync + 'static,
{
    pub sessions: Arc<S>,
    pub repo: Arc<B>,
    pub config: Arc<BoardsConfig>,
}

/// POST /api/boards
///
/// Linear sequence: authenticate, parse, validate, authorize, transact.
/// Every failure path produces exactly one response; nothing is retried.
pub async fn create_board<S, B>(
    State(state): State<BoardsAppState<S, B>>,
    headers: HeaderMap,
    body: Bytes,
) -> BoardsResult<impl IntoResponse>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
    B: BoardRepository + Clone + Send + Sync + 'static,
{
    // Authenticate before touching the body
    let token = platform::cookie::extract_cookie(&headers, &state.config.session_cookie_name);

    let resolve = ResolveSessionUseCase::new(state.sessions.clone());
    let session = resolve
        .resolve(token.as_deref())
        .await?
        .ok_or(BoardsError::Unauthenticated)?;

    // A syntactically invalid body surfaces through the outer error path
    // as 500; schema violations on well-formed JSON, including fields of
    // the wrong JSON type, are 400 field issues.
    let value: serde_json::Value = serde_json::from_slice(&body)
        .map_err(|e| BoardsError::Internal(format!("Malformed request body: {e}")))?;

    let req = CreateBoardRequest::from_value(&value).map_err(BoardsError::Validation)?;

    let use_case = CreateBoardUseCase::new(state.repo.clone());

    let input = CreateBoardInput {
        name: req.name,
        description: req.description,
        user_id: req.user_id,
    };

    let board = use_case.execute(input, &session.user_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateBoardResponse {
            message: "Board created".to_string(),
            board: board.into(),
        }),
    ))
}
