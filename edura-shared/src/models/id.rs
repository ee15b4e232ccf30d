use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Opaque identifier of a backend entity.
///
/// The backend is free to emit identifiers as JSON strings or integers; both
/// are accepted and kept as text so they can be placed in URLs unchanged.
/// Serialization always produces a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct EntityId(String);

impl EntityId {
    /// Wraps an identifier.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Serialize for EntityId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => Self(text),
            RawId::Signed(number) => Self(number.to_string()),
            RawId::Unsigned(number) => Self(number.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_string_and_numeric_ids() {
        let text: EntityId = serde_json::from_str(r#""64f1c0ffee""#).unwrap();
        let number: EntityId = serde_json::from_str("42").unwrap();

        assert_eq!(text.as_str(), "64f1c0ffee");
        assert_eq!(number.as_str(), "42");
    }

    #[test]
    fn serializes_as_string() {
        let id = EntityId::new("7");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""7""#);
    }

    #[test]
    fn rejects_non_scalar_ids() {
        assert!(serde_json::from_str::<EntityId>("{}").is_err());
        assert!(serde_json::from_str::<EntityId>("1.5").is_err());
    }

    #[test]
    fn displays_raw_text() {
        assert_eq!(EntityId::from("abc").to_string(), "abc");
    }
}
