/*!
# Post-Authentication Access Policy

Decides, from a reconciled profile alone, whether an account still owes
profile completion or email verification, whether it may use the
application at all, and where the UI should send it next.
*/

use crate::profile::ReconciledProfile;
use crate::provider::AuthProvider;

/// Where an authenticated (or unauthenticated) visitor should land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostAuthDestination {
    Login,
    VerifyEmail,
    CompleteProfile,
    Dashboard,
}

impl PostAuthDestination {
    /// The route the UI layer redirects to.
    pub fn path(self) -> &'static str {
        match self {
            PostAuthDestination::Login => "/auth/login",
            PostAuthDestination::VerifyEmail => "/auth/verify-email",
            PostAuthDestination::CompleteProfile => "/auth/complete-profile",
            PostAuthDestination::Dashboard => "/dashboard",
        }
    }
}

/// Whether the account still needs to finish its profile.
///
/// OAuth accounts owe completion until the flag is set and both names are
/// on file; email accounts owe it until registration completes.
pub fn needs_profile_completion(profile: Option<&ReconciledProfile>) -> bool {
    let Some(profile) = profile else {
        return true;
    };

    if profile.auth_provider != AuthProvider::Email {
        return !profile.profile_completed
            || profile.first_name.is_empty()
            || profile.last_name.is_empty();
    }

    !profile.registration_completed
}

/// Whether the account still needs to verify its email address. Trusted
/// OAuth providers arrive verified.
pub fn needs_email_verification(profile: Option<&ReconciledProfile>) -> bool {
    let Some(profile) = profile else {
        return true;
    };

    if profile.auth_provider.is_trusted() {
        return false;
    }

    !profile.email_verified
}

/// Whether the account may use the application: verified where required,
/// profile complete, and not deactivated.
pub fn can_access(profile: Option<&ReconciledProfile>) -> bool {
    let Some(profile) = profile else {
        return false;
    };

    if needs_email_verification(Some(profile)) {
        return false;
    }

    if needs_profile_completion(Some(profile)) {
        return false;
    }

    profile.is_active
}

/// The post-auth routing decision: unauthenticated visitors to login,
/// then verification, then completion, then the dashboard.
pub fn destination_for(
    authenticated: bool,
    profile: Option<&ReconciledProfile>,
) -> PostAuthDestination {
    if !authenticated {
        return PostAuthDestination::Login;
    }

    let Some(profile) = profile else {
        return PostAuthDestination::CompleteProfile;
    };

    if needs_email_verification(Some(profile)) {
        return PostAuthDestination::VerifyEmail;
    }

    if needs_profile_completion(Some(profile)) {
        return PostAuthDestination::CompleteProfile;
    }

    PostAuthDestination::Dashboard
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::principal::SessionPrincipal;
    use crate::reconcile::reconcile;

    fn oauth_profile() -> ReconciledProfile {
        let mut principal = SessionPrincipal::new("u1", "ada@gmail.com")
            .with_metadata("given_name", "Ada")
            .with_metadata("family_name", "Lovelace");
        principal.provider = Some("google".to_string());
        reconcile(&principal, None)
    }

    fn email_profile() -> ReconciledProfile {
        reconcile(&SessionPrincipal::new("u2", "grace@university.edu"), None)
    }

    #[test]
    fn test_missing_profile_owes_everything() {
        assert!(needs_profile_completion(None));
        assert!(needs_email_verification(None));
        assert!(!can_access(None));
    }

    #[test]
    fn test_fresh_oauth_account_owes_completion_not_verification() {
        let profile = oauth_profile();
        assert!(needs_profile_completion(Some(&profile)));
        assert!(!needs_email_verification(Some(&profile)));
        assert_eq!(
            destination_for(true, Some(&profile)),
            PostAuthDestination::CompleteProfile
        );
    }

    #[test]
    fn test_oauth_account_with_flag_but_no_names_still_owes_completion() {
        let mut profile = oauth_profile();
        profile.profile_completed = true;
        profile.first_name.clear();
        assert!(needs_profile_completion(Some(&profile)));
    }

    #[test]
    fn test_fresh_email_signup_owes_verification_first() {
        let profile = email_profile();
        assert!(needs_email_verification(Some(&profile)));
        assert_eq!(
            destination_for(true, Some(&profile)),
            PostAuthDestination::VerifyEmail
        );
    }

    #[test]
    fn test_completed_active_account_reaches_dashboard() {
        let mut profile = oauth_profile();
        profile.profile_completed = true;
        assert!(can_access(Some(&profile)));
        assert_eq!(
            destination_for(true, Some(&profile)),
            PostAuthDestination::Dashboard
        );
    }

    #[test]
    fn test_deactivated_account_cannot_access() {
        let mut profile = oauth_profile();
        profile.profile_completed = true;
        profile.is_active = false;
        assert!(!can_access(Some(&profile)));
        // Routing still sends them to the dashboard; the dashboard itself
        // surfaces the deactivation notice.
        assert_eq!(
            destination_for(true, Some(&profile)),
            PostAuthDestination::Dashboard
        );
    }

    #[test]
    fn test_unauthenticated_goes_to_login() {
        assert_eq!(destination_for(false, None), PostAuthDestination::Login);
        assert_eq!(PostAuthDestination::Login.path(), "/auth/login");
    }
}
