/*!
# LabSync Identity

This crate turns **externally authenticated sessions into application
profiles** and owns the pure policy decisions around them.

The identity service (credential storage, token issuance, OAuth
handshakes, email delivery) and the profile store are external
collaborators. Everything in this crate is a synchronous pure function
over its inputs: callers fetch the stored profile, call in here, and
persist whatever comes back.

## Pieces

- [`principal`]: the [`SessionPrincipal`] shape handed over by the
  identity service, with ordered-fallback metadata lookup.
- [`provider`]: [`AuthProvider`] classification (declared provider first,
  then the webmail-domain heuristic) and the trusted-provider set.
- [`reconcile`]: default-profile derivation and the right-biased,
  null-coalescing merge against a stored row.
- [`access`]: profile-completion, email-verification and routing
  decisions over a reconciled profile.
- [`approval`]: the admin queue heuristic for inactive staff accounts.
- [`registration`]: sign-up field rules, password strength scoring and
  the role/ID cross-field requirement.

## Usage

```rust
use labsync_identity::{reconcile, PostAuthDestination, SessionPrincipal};
use labsync_identity::access::destination_for;

let principal = SessionPrincipal::new("u1", "ada@gmail.com")
    .with_metadata("given_name", "Ada")
    .with_metadata("family_name", "Lovelace");

let profile = reconcile(&principal, None);
assert_eq!(profile.first_name, "Ada");
assert_eq!(
    destination_for(true, Some(&profile)),
    PostAuthDestination::CompleteProfile
);
```
*/

pub mod access;
pub mod approval;
pub mod principal;
pub mod profile;
pub mod provider;
pub mod reconcile;
pub mod registration;

// Re-export main types for convenience
pub use access::{
    can_access, destination_for, needs_email_verification, needs_profile_completion,
    PostAuthDestination,
};
pub use approval::{needs_approval, ApprovalPolicy};
pub use principal::{SessionPrincipal, AVATAR_KEYS, FIRST_NAME_KEYS, LAST_NAME_KEYS};
pub use profile::{ReconciledProfile, StoredProfile};
pub use provider::{AuthProvider, WEBMAIL_DOMAINS};
pub use reconcile::{default_profile, reconcile};
pub use registration::{password_strength, PasswordStrength, RegistrationError, RegistrationForm};
