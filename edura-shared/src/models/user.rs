use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::EntityId;

/// The authenticated user as returned by the auth endpoints.
///
/// Only the identity fields are interpreted by the client; anything else the
/// backend sends is kept in [`UserProfile::extra`] so that the profile
/// round-trips through durable storage without loss.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Backend identifier of the user.
    pub id: EntityId,

    /// The user's email address.
    pub email: String,

    /// Given name.
    #[serde(default)]
    pub first_name: String,

    /// Family name.
    #[serde(default)]
    pub last_name: String,

    /// Fields the client does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    /// Name to show in the header, falling back to the email address.
    #[must_use]
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() {
            self.email.clone()
        } else {
            full.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_keeps_unknown_fields() {
        let json = r#"{
            "id": 12,
            "email": "ada@example.com",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "role": "student",
            "avatar": "/img/ada.png"
        }"#;

        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.id.as_str(), "12");
        assert_eq!(profile.first_name, "Ada");
        assert_eq!(profile.extra.get("role"), Some(&Value::from("student")));

        let stored = serde_json::to_string(&profile).unwrap();
        let restored: UserProfile = serde_json::from_str(&stored).unwrap();
        assert_eq!(restored, profile);
    }

    #[test]
    fn test_missing_names_default_to_empty() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"id":"u1","email":"x@example.com"}"#).unwrap();
        assert!(profile.first_name.is_empty());
        assert!(profile.last_name.is_empty());
        assert!(profile.extra.is_empty());
    }

    #[test]
    fn test_display_name() {
        let mut profile = UserProfile {
            id: EntityId::new("1"),
            email: "grace@example.com".to_string(),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            extra: Map::new(),
        };
        assert_eq!(profile.display_name(), "Grace Hopper");

        profile.last_name.clear();
        assert_eq!(profile.display_name(), "Grace");

        profile.first_name = "  ".to_string();
        assert_eq!(profile.display_name(), "grace@example.com");
    }
}
