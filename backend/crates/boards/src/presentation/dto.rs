//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::id::UserKey;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::domain::entities::Board;
use crate::error::ValidationIssue;

/// Request for POST /api/boards
///
/// Built from an already-parsed JSON document, so a missing or
/// wrong-typed field becomes a field-level issue (400) rather than a
/// parse failure.
#[derive(Debug, Clone)]
pub struct CreateBoardRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    /// String or positive integer; normalized before comparison
    pub user_id: Option<UserKey>,
}

impl CreateBoardRequest {
    /// Extract the request fields from a well-formed JSON document
    ///
    /// Missing and null fields pass through as `None` for the use case
    /// to judge; fields of the wrong JSON type are collected as issues.
    pub fn from_value(value: &Value) -> Result<Self, Vec<ValidationIssue>> {
        let mut issues = Vec::new();

        let name = match value.get("name") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                issues.push(ValidationIssue::new("name", "Name must be a string"));
                None
            }
        };

        let description = match value.get("description") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                issues.push(ValidationIssue::new(
                    "description",
                    "Description must be a string",
                ));
                None
            }
        };

        let user_id = match value.get("userId") {
            None | Some(Value::Null) => None,
            Some(raw) => match serde_json::from_value::<UserKey>(raw.clone()) {
                Ok(key) => Some(key),
                Err(_) => {
                    issues.push(ValidationIssue::new(
                        "userId",
                        "userId must be a string or an integer",
                    ));
                    None
                }
            },
        };

        if issues.is_empty() {
            Ok(Self {
                name,
                description,
                user_id,
            })
        } else {
            Err(issues)
        }
    }
}

/// Board payload as returned by storage
///
/// Serialized with the raw row field names (`user_id`, not `userId`).
#[derive(Debug, Clone, Serialize)]
pub struct BoardPayload {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<Board> for BoardPayload {
    fn from(board: Board) -> Self {
        Self {
            id: board.id.into_uuid(),
            name: board.name,
            description: board.description,
            user_id: board.user_id,
            created_at: board.created_at,
        }
    }
}

/// Response for POST /api/boards (201)
#[derive(Debug, Clone, Serialize)]
pub struct CreateBoardResponse {
    pub message: String,
    pub board: BoardPayload,
}
