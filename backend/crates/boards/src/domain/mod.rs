//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Board, the default column set)
//! - Domain value objects (BoardName)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod value_objects;
