//! Boards Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers
//!
//! ## Consistency Model
//! - A board and its three default columns ("To Do", "In Progress", "Done")
//!   are written in one database transaction; they become visible atomically
//!   or not at all
//! - A caller may only create boards attributed to their own session identity
//! - Nothing is retried; every failure path produces exactly one response

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::BoardsConfig;
pub use application::create_board::{CreateBoardInput, CreateBoardUseCase};
pub use domain::entities::{Board, DEFAULT_COLUMNS, NewBoard};
pub use domain::repository::BoardRepository;
pub use error::{BoardsError, BoardsResult, ValidationIssue};
pub use infra::postgres::PgBoardRepository;
pub use presentation::router::{boards_router, boards_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
