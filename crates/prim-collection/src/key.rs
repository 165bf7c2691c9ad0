//! Collection keys
//!
//! A [`Key`] is either an integer or a string, as in an ordered map with
//! mixed keys. Strings are never coerced to integers: `"1"` and `1` are
//! distinct keys.

use serde::{Serialize, Serializer};
use std::fmt::{self, Display, Formatter};

/// Integer or string key of a [`Collection`](crate::Collection)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Integer index
    Int(i64),
    /// Named key
    Str(String),
}

impl Key {
    /// Integer key, if this is one
    #[inline]
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(index) => Some(*index),
            Self::Str(_) => None,
        }
    }

    /// String key, if this is one
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(name) => Some(name),
            Self::Int(_) => None,
        }
    }

    /// Check if the key is an integer
    #[inline]
    #[must_use]
    pub fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }
}

impl From<i64> for Key {
    fn from(index: i64) -> Self {
        Self::Int(index)
    }
}

impl From<i32> for Key {
    fn from(index: i32) -> Self {
        Self::Int(i64::from(index))
    }
}

impl From<u32> for Key {
    fn from(index: u32) -> Self {
        Self::Int(i64::from(index))
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self::Str(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Self::Str(name)
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(index) => write!(f, "{index}"),
            Self::Str(name) => f.write_str(name),
        }
    }
}

// JSON object keys accept both forms; integers are rendered as strings.
impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Int(index) => serializer.serialize_i64(*index),
            Self::Str(name) => serializer.serialize_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_strings_stay_strings() {
        assert_ne!(Key::from("1"), Key::from(1));
        assert_eq!(Key::from("1").as_int(), None);
        assert_eq!(Key::from(1).as_int(), Some(1));
    }

    #[test]
    fn accessors() {
        assert_eq!(Key::from("name").as_str(), Some("name"));
        assert!(Key::from(3u32).is_int());
        assert!(!Key::from(String::from("x")).is_int());
    }

    #[test]
    fn display() {
        assert_eq!(Key::from(-4).to_string(), "-4");
        assert_eq!(Key::from("total").to_string(), "total");
    }

    #[test]
    fn integers_sort_before_strings() {
        let mut keys = vec![Key::from("b"), Key::from(2), Key::from("a"), Key::from(-1)];
        keys.sort();
        assert_eq!(keys, vec![Key::from(-1), Key::from(2), Key::from("a"), Key::from("b")]);
    }
}
