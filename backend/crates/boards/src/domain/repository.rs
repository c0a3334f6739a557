//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entities::{Board, NewBoard};
use crate::error::BoardsResult;

/// Board repository trait
#[trait_variant::make(BoardRepository: Send)]
pub trait LocalBoardRepository {
    /// Create a board together with its three default columns
    ///
    /// The write is all-or-nothing: either the board row and all of its
    /// column rows become visible, or none of them do.
    async fn create_with_default_columns(&self, board: &NewBoard) -> BoardsResult<Board>;
}
