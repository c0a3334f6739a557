//! Domain Layer - Session entity and repository trait

pub mod entity;
pub mod repository;
