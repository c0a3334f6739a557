//! Application Configuration
//!
//! Configuration for the boards application layer.

/// Boards application configuration
#[derive(Debug, Clone)]
pub struct BoardsConfig {
    /// Cookie name carrying the session token
    pub session_cookie_name: String,
}

impl Default for BoardsConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "session".to_string(),
        }
    }
}
