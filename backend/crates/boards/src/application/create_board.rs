//! Create Board Use Case
//!
//! Validates the request payload, enforces the ownership boundary, and
//! persists the board with its default columns.

use std::sync::Arc;

use kernel::id::UserKey;

use crate::domain::entities::{Board, NewBoard};
use crate::domain::repository::BoardRepository;
use crate::domain::value_objects::{BOARD_NAME_MAX_LENGTH, BoardName, BoardNameError};
use crate::error::{BoardsError, BoardsResult, ValidationIssue};

/// Input DTO for create board
#[derive(Debug, Clone)]
pub struct CreateBoardInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub user_id: Option<UserKey>,
}

/// Create Board Use Case
pub struct CreateBoardUseCase<B>
where
    B: BoardRepository,
{
    board_repo: Arc<B>,
}

impl<B> CreateBoardUseCase<B>
where
    B: BoardRepository,
{
    pub fn new(board_repo: Arc<B>) -> Self {
        Self { board_repo }
    }

    /// Execute the creation for an already-authenticated caller
    ///
    /// Order of checks: schema validation (400), ownership (403),
    /// persistence (500). Nothing is written before all checks pass.
    pub async fn execute(
        &self,
        input: CreateBoardInput,
        session_user: &UserKey,
    ) -> BoardsResult<Board> {
        let (name, owner) = validate(&input)?;

        if !session_user.same_user(&owner) {
            tracing::warn!(
                session_user = %session_user,
                requested_owner = %owner,
                "Board owner mismatch"
            );
            return Err(BoardsError::ForeignOwner);
        }

        let new_board = NewBoard::new(name, input.description, &owner);

        let board = self
            .board_repo
            .create_with_default_columns(&new_board)
            .await?;

        tracing::info!(
            board_id = %board.id,
            user_id = %board.user_id,
            "Board created"
        );

        Ok(board)
    }
}

/// Validate the raw payload, collecting every field-level violation
fn validate(input: &CreateBoardInput) -> Result<(BoardName, UserKey), BoardsError> {
    let mut issues = Vec::new();

    let name = match &input.name {
        None => {
            issues.push(ValidationIssue::new("name", "Name is required"));
            None
        }
        Some(raw) => match BoardName::new(raw.clone()) {
            Ok(name) => Some(name),
            Err(BoardNameError::Empty) => {
                issues.push(ValidationIssue::new("name", "Name must not be empty"));
                None
            }
            Err(BoardNameError::TooLong { .. }) => {
                issues.push(ValidationIssue::new(
                    "name",
                    format!("Name must be at most {BOARD_NAME_MAX_LENGTH} characters"),
                ));
                None
            }
        },
    };

    let owner = match &input.user_id {
        None => {
            issues.push(ValidationIssue::new("userId", "userId is required"));
            None
        }
        Some(key) if !key.is_valid() => {
            issues.push(ValidationIssue::new(
                "userId",
                "userId must be a non-empty string or a positive integer",
            ));
            None
        }
        Some(key) => Some(key.clone()),
    };

    match (name, owner) {
        (Some(name), Some(owner)) if issues.is_empty() => Ok((name, owner)),
        _ => Err(BoardsError::Validation(issues)),
    }
}
