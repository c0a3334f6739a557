//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities, plus the [`UserKey`]
//! user identifier shared by the auth and boards domains.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use uuid::Uuid;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type BoardId = Id<markers::Board>;
/// ```
pub struct Id<T> {
    value: uuid::Uuid,
    _marker: PhantomData<T>,
}

// Implemented manually rather than derived: derives would require the
// marker type `T` to implement these, and markers carry no data.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> Id<T> {
    /// Create a new random ID (UUID v4)
    pub fn new() -> Self {
        Self {
            value: Uuid::new_v4(),
            _marker: PhantomData,
        }
    }

    /// Create from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            value: uuid,
            _marker: PhantomData,
        }
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.value
    }

    /// Convert to UUID
    pub fn into_uuid(self) -> Uuid {
        self.value
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<Uuid> for Id<T> {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl<T> From<Id<T>> for Uuid {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for Board IDs
    pub struct Board;

    /// Marker for board Column IDs
    pub struct Column;
}

/// Type aliases for common IDs
pub type BoardId = Id<markers::Board>;
pub type ColumnId = Id<markers::Column>;

// ============================================================================
// UserKey
// ============================================================================

/// ユーザー識別子（タグ付きユニオン型）
///
/// クライアントはユーザー ID を文字列または整数のどちらでも送信できます。
/// 比較は必ず正規化した文字列（[`UserKey::canonical`]）を通して行います。
///
/// ## 不変条件
/// - 文字列: 空でないこと
/// - 整数: 正の値であること
///
/// ## Examples
/// ```rust
/// use kernel::id::UserKey;
///
/// let a = UserKey::Text("42".to_string());
/// let b = UserKey::Numeric(42);
/// assert_eq!(a.canonical(), b.canonical());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserKey {
    /// String identifier, stored as-is
    Text(String),
    /// Integer identifier, normalized to its decimal string form
    Numeric(i64),
}

impl UserKey {
    /// 正規化した文字列表現を取得
    ///
    /// 文字列はそのまま、整数は 10 進文字列に変換されます。
    pub fn canonical(&self) -> Cow<'_, str> {
        match self {
            UserKey::Text(s) => Cow::Borrowed(s.as_str()),
            UserKey::Numeric(n) => Cow::Owned(n.to_string()),
        }
    }

    /// 識別子として有効かどうかを判定
    ///
    /// 文字列は空でないこと、整数は正であることを要求します。
    pub fn is_valid(&self) -> bool {
        match self {
            UserKey::Text(s) => !s.is_empty(),
            UserKey::Numeric(n) => *n > 0,
        }
    }

    /// 2 つの識別子が同一ユーザーを指すかどうかを判定
    ///
    /// 正規形同士の厳密一致で比較します（`"42"` と `42` は同一）。
    pub fn same_user(&self, other: &UserKey) -> bool {
        self.canonical() == other.canonical()
    }
}

impl fmt::Display for UserKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

impl From<String> for UserKey {
    fn from(s: String) -> Self {
        UserKey::Text(s)
    }
}

impl From<&str> for UserKey {
    fn from(s: &str) -> Self {
        UserKey::Text(s.to_string())
    }
}

impl From<i64> for UserKey {
    fn from(n: i64) -> Self {
        UserKey::Numeric(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_type_safety() {
        let board_id: BoardId = Id::new();
        let column_id: ColumnId = Id::new();

        // These are different types, cannot be mixed
        let _b: Uuid = board_id.into_uuid();
        let _c: Uuid = column_id.into_uuid();
    }

    #[test]
    fn test_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id: BoardId = Id::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
    }

    #[test]
    fn test_id_is_copy_and_comparable() {
        // Markers implement nothing, so Copy and Eq must not depend on them
        let id: BoardId = Id::new();
        let copy = id;
        assert_eq!(id, copy);
        assert_ne!(id, BoardId::new());

        let mut seen = std::collections::HashSet::new();
        assert!(seen.insert(id));
        assert!(!seen.insert(copy));
    }

    #[test]
    fn test_user_key_canonical() {
        assert_eq!(UserKey::Text("42".into()).canonical(), "42");
        assert_eq!(UserKey::Numeric(42).canonical(), "42");
        assert_eq!(UserKey::Text("alice".into()).canonical(), "alice");
    }

    #[test]
    fn test_user_key_same_user() {
        let text = UserKey::Text("42".into());
        let numeric = UserKey::Numeric(42);
        assert!(text.same_user(&numeric));
        assert!(numeric.same_user(&text));
        assert!(!text.same_user(&UserKey::Numeric(99)));
        assert!(!text.same_user(&UserKey::Text("042".into())));
    }

    #[test]
    fn test_user_key_validity() {
        assert!(UserKey::Text("42".into()).is_valid());
        assert!(UserKey::Numeric(1).is_valid());
        assert!(!UserKey::Text(String::new()).is_valid());
        assert!(!UserKey::Numeric(0).is_valid());
        assert!(!UserKey::Numeric(-5).is_valid());
    }

    #[test]
    fn test_user_key_deserialize_both_forms() {
        let text: UserKey = serde_json::from_str(r#""42""#).unwrap();
        assert_eq!(text, UserKey::Text("42".into()));

        let numeric: UserKey = serde_json::from_str("42").unwrap();
        assert_eq!(numeric, UserKey::Numeric(42));
    }
}
