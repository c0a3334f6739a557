//! Auth (Session Resolution) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Session entity and repository trait
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//!
//! ## Security Model
//! - Sessions are server-side rows referenced by an opaque cookie token
//! - This crate only *resolves* who the caller is; token issuance and
//!   signature verification are not part of this service
//! - Expired rows are treated as absent and swept at startup

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use application::resolve_session::ResolveSessionUseCase;
pub use domain::entity::AuthSession;
pub use domain::repository::SessionRepository;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgSessionRepository;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
