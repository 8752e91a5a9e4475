//! Stable identity keys for sections and rows.
//!
//! A [`Key`] names a section within its content, or a row within its
//! section. Keys must stay the same across configurations for the same
//! logical item so the backing view can match old and new snapshots.

use std::fmt;
use std::sync::Arc;

/// A stable, hashable identity value.
///
/// Integer and string keys never compare equal to each other, so
/// `Key::from(1)` and `Key::from("1")` name different items.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// An integer key, such as a database row id.
    Int(i64),
    /// A string key, such as a slug or UUID.
    Str(Arc<str>),
}

impl Key {
    /// Returns the string form if this is a string key.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            Self::Int(_) => None,
        }
    }

    /// Returns the integer form if this is an integer key.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            Self::Str(_) => None,
        }
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "Key({i})"),
            Self::Str(s) => write!(f, "Key({s:?})"),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Self::Str(Arc::from(value))
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Self::Str(Arc::from(value))
    }
}

impl From<Arc<str>> for Key {
    fn from(value: Arc<str>) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        // Indices beyond i64::MAX are not realistic list positions.
        Self::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_int_and_string_keys_differ() {
        assert_ne!(Key::from(1), Key::from("1"));

        let mut set = HashSet::new();
        set.insert(Key::from(1));
        set.insert(Key::from("1"));
        set.insert(Key::from(1usize));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display_and_accessors() {
        let key = Key::from("podcasts");
        assert_eq!(key.to_string(), "podcasts");
        assert_eq!(key.as_str(), Some("podcasts"));
        assert_eq!(key.as_int(), None);

        let key = Key::from(42);
        assert_eq!(format!("{key:?}"), "Key(42)");
        assert_eq!(key.as_int(), Some(42));
    }
}
