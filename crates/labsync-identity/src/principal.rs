use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Metadata keys tried, in order, for each profile default. Identity
/// providers disagree on claim names; the first non-empty value wins.
pub const FIRST_NAME_KEYS: &[&str] = &["first_name", "given_name"];
pub const LAST_NAME_KEYS: &[&str] = &["last_name", "family_name"];
pub const AVATAR_KEYS: &[&str] = &["avatar_url", "picture"];

/// An authenticated identity as handed over by the external identity
/// service, before it is mapped to an application profile.
///
/// Read-only to this crate: the identity service owns credential storage,
/// token issuance and the OAuth handshakes that produce this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionPrincipal {
    /// Identity-service subject id; the stored profile is keyed by it.
    pub id: String,

    pub email: String,

    /// Provider the identity service says performed the sign-in, when it
    /// says anything at all.
    #[serde(default)]
    pub provider: Option<String>,

    /// Verified-email signal carried by the session itself.
    #[serde(default)]
    pub email_verified: bool,

    /// Free-form provider claims: given/family name, avatar URL, custom
    /// claims. Shapes vary by provider.
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl SessionPrincipal {
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            provider: None,
            email_verified: false,
            metadata: Map::new(),
        }
    }

    /// First non-empty string value among `keys`, in order.
    pub fn first_non_empty(&self, keys: &[&str]) -> Option<&str> {
        keys.iter()
            .filter_map(|key| self.metadata.get(*key))
            .filter_map(Value::as_str)
            .map(str::trim)
            .find(|value| !value.is_empty())
    }

    /// Convenience for building test/demo principals.
    pub fn with_metadata(mut self, key: &str, value: &str) -> Self {
        self.metadata
            .insert(key.to_string(), Value::String(value.to_string()));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_non_empty_respects_key_order() {
        let principal = SessionPrincipal::new("u1", "a@b.com")
            .with_metadata("given_name", "Ada")
            .with_metadata("first_name", "Augusta");
        assert_eq!(principal.first_non_empty(FIRST_NAME_KEYS), Some("Augusta"));
    }

    #[test]
    fn test_first_non_empty_skips_blank_values() {
        let principal = SessionPrincipal::new("u1", "a@b.com")
            .with_metadata("first_name", "  ")
            .with_metadata("given_name", "Ada");
        assert_eq!(principal.first_non_empty(FIRST_NAME_KEYS), Some("Ada"));
    }

    #[test]
    fn test_first_non_empty_ignores_non_string_claims() {
        let mut principal = SessionPrincipal::new("u1", "a@b.com");
        principal
            .metadata
            .insert("first_name".to_string(), Value::Bool(true));
        assert_eq!(principal.first_non_empty(FIRST_NAME_KEYS), None);
    }

    #[test]
    fn test_deserializes_with_missing_optional_fields() {
        let principal: SessionPrincipal =
            serde_json::from_str(r#"{"id":"u1","email":"a@b.com"}"#).unwrap();
        assert_eq!(principal.provider, None);
        assert!(!principal.email_verified);
        assert!(principal.metadata.is_empty());
    }
}
