//! Domain Entities
//!
//! Core business entities for the boards domain.

use chrono::{DateTime, Utc};
use kernel::id::{BoardId, UserKey};

use crate::domain::value_objects::BoardName;

/// A workflow stage created for every new board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultColumn {
    pub name: &'static str,
    pub position: i32,
}

/// The three columns every board starts with, in insertion order
pub const DEFAULT_COLUMNS: [DefaultColumn; 3] = [
    DefaultColumn {
        name: "To Do",
        position: 0,
    },
    DefaultColumn {
        name: "In Progress",
        position: 1,
    },
    DefaultColumn {
        name: "Done",
        position: 2,
    },
];

/// Board entity - a persisted board row
#[derive(Debug, Clone)]
pub struct Board {
    pub id: BoardId,
    pub name: String,
    pub description: Option<String>,
    /// Owner identity in canonical string form
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

/// A validated board payload ready for insertion
///
/// Construction requires a valid [`BoardName`] and an owner key, so an
/// unvalidated request can never reach the repository.
#[derive(Debug, Clone)]
pub struct NewBoard {
    pub name: BoardName,
    pub description: Option<String>,
    /// Owner identity in canonical string form
    pub user_id: String,
}

impl NewBoard {
    pub fn new(name: BoardName, description: Option<String>, owner: &UserKey) -> Self {
        Self {
            name,
            description,
            user_id: owner.canonical().into_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_columns() {
        assert_eq!(DEFAULT_COLUMNS.len(), 3);
        assert_eq!(DEFAULT_COLUMNS[0].name, "To Do");
        assert_eq!(DEFAULT_COLUMNS[0].position, 0);
        assert_eq!(DEFAULT_COLUMNS[1].name, "In Progress");
        assert_eq!(DEFAULT_COLUMNS[1].position, 1);
        assert_eq!(DEFAULT_COLUMNS[2].name, "Done");
        assert_eq!(DEFAULT_COLUMNS[2].position, 2);
    }

    #[test]
    fn test_new_board_normalizes_owner() {
        let name = BoardName::new("Sprint Board".to_string()).unwrap();
        let board = NewBoard::new(name, None, &UserKey::Numeric(42));
        assert_eq!(board.user_id, "42");
    }
}
