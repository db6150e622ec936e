use crate::principal::SessionPrincipal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How an account authenticates with LabSync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    Google,
    Apple,
    Email,
}

/// Consumer webmail domains whose presence implies a specific provider's
/// sign-in flow. Checked only when the identity service did not declare a
/// provider itself.
pub const WEBMAIL_DOMAINS: &[(&str, AuthProvider)] = &[
    ("gmail.com", AuthProvider::Google),
    ("googlemail.com", AuthProvider::Google),
    ("icloud.com", AuthProvider::Apple),
    ("me.com", AuthProvider::Apple),
    ("mac.com", AuthProvider::Apple),
];

impl AuthProvider {
    pub fn as_str(self) -> &'static str {
        match self {
            AuthProvider::Google => "google",
            AuthProvider::Apple => "apple",
            AuthProvider::Email => "email",
        }
    }

    /// Parse a declared provider name; unknown names are not coerced.
    pub fn from_name(name: &str) -> Option<AuthProvider> {
        match name {
            "google" => Some(AuthProvider::Google),
            "apple" => Some(AuthProvider::Apple),
            "email" => Some(AuthProvider::Email),
            _ => None,
        }
    }

    /// OAuth providers whose accounts arrive with a verified email.
    pub fn is_trusted(self) -> bool {
        matches!(self, AuthProvider::Google | AuthProvider::Apple)
    }

    /// Attribute a provider from the email domain alone.
    pub fn from_email_domain(email: &str) -> AuthProvider {
        let domain = email.rsplit('@').next().unwrap_or("").to_lowercase();
        WEBMAIL_DOMAINS
            .iter()
            .find(|(known, _)| *known == domain)
            .map(|(_, provider)| *provider)
            .unwrap_or(AuthProvider::Email)
    }

    /// Classify a principal: the identity service's declared provider wins
    /// when it names one we recognize, otherwise fall back to the webmail
    /// heuristic, otherwise `email`.
    pub fn classify(principal: &SessionPrincipal) -> AuthProvider {
        principal
            .provider
            .as_deref()
            .and_then(AuthProvider::from_name)
            .unwrap_or_else(|| AuthProvider::from_email_domain(&principal.email))
    }
}

impl fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_heuristic() {
        assert_eq!(
            AuthProvider::from_email_domain("a@gmail.com"),
            AuthProvider::Google
        );
        assert_eq!(
            AuthProvider::from_email_domain("a@GMail.com"),
            AuthProvider::Google
        );
        assert_eq!(
            AuthProvider::from_email_domain("a@icloud.com"),
            AuthProvider::Apple
        );
        assert_eq!(
            AuthProvider::from_email_domain("a@university.edu"),
            AuthProvider::Email
        );
    }

    #[test]
    fn test_declared_provider_wins() {
        let mut principal = SessionPrincipal::new("u1", "someone@gmail.com");
        principal.provider = Some("apple".to_string());
        assert_eq!(AuthProvider::classify(&principal), AuthProvider::Apple);
    }

    #[test]
    fn test_unrecognized_declared_provider_falls_back_to_heuristic() {
        let mut principal = SessionPrincipal::new("u1", "someone@gmail.com");
        principal.provider = Some("saml-corp".to_string());
        assert_eq!(AuthProvider::classify(&principal), AuthProvider::Google);
    }

    #[test]
    fn test_unknown_domain_is_email() {
        let principal = SessionPrincipal::new("u1", "a@b.com");
        assert_eq!(AuthProvider::classify(&principal), AuthProvider::Email);
    }

    #[test]
    fn test_trusted_set() {
        assert!(AuthProvider::Google.is_trusted());
        assert!(AuthProvider::Apple.is_trusted());
        assert!(!AuthProvider::Email.is_trusted());
    }
}
