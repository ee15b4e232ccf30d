use serde::{Deserialize, Serialize};

use super::UserProfile;

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// The user's email address.
    pub email: String,
    /// The user's password.
    pub password: String,
}

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// The user's email address.
    pub email: String,
    /// The chosen password.
    pub password: String,
}

/// Successful response of the login and register endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    /// Opaque bearer token.
    pub token: String,
    /// Profile of the authenticated user.
    pub user: UserProfile,
}

/// Body of `POST /auth/refresh`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefreshRequest {
    /// The token being exchanged.
    pub token: String,
}

/// Response of `POST /auth/refresh`.
///
/// The backend may omit the token when it declines to rotate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RefreshResponse {
    /// Replacement bearer token.
    #[serde(default)]
    pub token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_uses_camel_case() {
        let request = RegisterRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "engine".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["lastName"], "Lovelace");
        assert!(json.get("first_name").is_none());
    }

    #[test]
    fn test_auth_response_deserialization() {
        let json = r#"{
            "token": "jwt.abc.def",
            "user": { "id": "u-1", "email": "ada@example.com", "firstName": "Ada", "lastName": "Lovelace" }
        }"#;

        let response: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.token, "jwt.abc.def");
        assert_eq!(response.user.email, "ada@example.com");
    }

    #[test]
    fn test_refresh_response_without_token() {
        let response: RefreshResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.token, None);
    }
}
