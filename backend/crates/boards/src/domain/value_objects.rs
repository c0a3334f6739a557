//! Domain Value Objects
//!
//! ボード名は、ボードを識別するための表示名。
//!
//! ## 不変条件
//! - 長さ: 1〜255文字（文字数で数える、バイト数ではない）
//! - トリムは行わない（入力をそのまま保持する）

use std::fmt;

/// Minimum length for a board name (in characters)
pub const BOARD_NAME_MIN_LENGTH: usize = 1;

/// Maximum length for a board name (in characters)
pub const BOARD_NAME_MAX_LENGTH: usize = 255;

/// Error returned when board name validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardNameError {
    /// Name is missing or empty
    Empty,
    /// Name exceeds the maximum length
    TooLong { length: usize },
}

impl fmt::Display for BoardNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardNameError::Empty => write!(f, "Board name must not be empty"),
            BoardNameError::TooLong { length } => write!(
                f,
                "Board name must be at most {} characters (got {})",
                BOARD_NAME_MAX_LENGTH, length
            ),
        }
    }
}

impl std::error::Error for BoardNameError {}

/// Board name value object
///
/// Holds a name that is guaranteed to be 1 to 255 characters long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardName(String);

impl BoardName {
    /// Validate and wrap a raw name
    pub fn new(raw: String) -> Result<Self, BoardNameError> {
        let length = raw.chars().count();

        if length < BOARD_NAME_MIN_LENGTH {
            return Err(BoardNameError::Empty);
        }
        if length > BOARD_NAME_MAX_LENGTH {
            return Err(BoardNameError::TooLong { length });
        }

        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for BoardName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_boundary_lengths() {
        assert!(BoardName::new("x".to_string()).is_ok());
        assert!(BoardName::new("x".repeat(255)).is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(
            BoardName::new(String::new()).unwrap_err(),
            BoardNameError::Empty
        );
    }

    #[test]
    fn test_rejects_too_long() {
        assert_eq!(
            BoardName::new("x".repeat(256)).unwrap_err(),
            BoardNameError::TooLong { length: 256 }
        );
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // 255 multi-byte characters are within the limit
        assert!(BoardName::new("あ".repeat(255)).is_ok());
        assert!(BoardName::new("あ".repeat(256)).is_err());
    }

    #[test]
    fn test_does_not_trim() {
        let name = BoardName::new("  padded  ".to_string()).unwrap();
        assert_eq!(name.as_str(), "  padded  ");
    }
}
