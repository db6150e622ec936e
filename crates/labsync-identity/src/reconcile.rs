/*!
# Identity Reconciliation

Maps an authenticated principal onto an application profile. A default
profile is derived from provider claims; if the store already holds a row
for this principal, stored fields override the defaults wherever they are
actually present (right-biased merge with null-coalescing, so a legacy row
with null columns cannot blank out sensible defaults).

Pure over its inputs: no I/O, no clock, no randomness. Fetching and
upserting the profile is the external store's job.
*/

use crate::principal::{SessionPrincipal, AVATAR_KEYS, FIRST_NAME_KEYS, LAST_NAME_KEYS};
use crate::profile::{ReconciledProfile, StoredProfile};
use crate::provider::AuthProvider;
use labsync_entities::Role;
use tracing::debug;

fn stored_string(stored: &Option<String>, default: String) -> String {
    match stored.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => default,
    }
}

fn stored_opt_string(stored: &Option<String>, default: Option<String>) -> Option<String> {
    match stored.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => Some(value.to_string()),
        _ => default,
    }
}

/// The profile a principal gets on first sight, before any stored row is
/// consulted. Authoritative for brand-new accounts.
pub fn default_profile(principal: &SessionPrincipal) -> ReconciledProfile {
    let provider = AuthProvider::classify(principal);

    ReconciledProfile {
        id: principal.id.clone(),
        email: principal.email.clone(),
        first_name: principal
            .first_non_empty(FIRST_NAME_KEYS)
            .unwrap_or_default()
            .to_string(),
        last_name: principal
            .first_non_empty(LAST_NAME_KEYS)
            .unwrap_or_default()
            .to_string(),
        role: Role::Student,
        department: None,
        profile_image_url: principal
            .first_non_empty(AVATAR_KEYS)
            .map(|url| url.to_string()),
        is_active: true,
        employee_id: None,
        student_id: None,
        phone_number: None,
        auth_provider: provider,
        profile_completed: false,
        // OAuth accounts are immediately usable; email signups finish
        // registration after verifying their address.
        registration_completed: provider != AuthProvider::Email,
        email_verified: provider.is_trusted() || principal.email_verified,
        created_at: None,
    }
}

/// Merge a stored row over the derived defaults. Stored fields win only
/// when present (non-null, non-empty).
fn merge(defaults: ReconciledProfile, stored: &StoredProfile) -> ReconciledProfile {
    ReconciledProfile {
        id: defaults.id,
        email: stored_string(&stored.email, defaults.email),
        first_name: stored_string(&stored.first_name, defaults.first_name),
        last_name: stored_string(&stored.last_name, defaults.last_name),
        role: stored.role.unwrap_or(defaults.role),
        department: stored_opt_string(&stored.department, defaults.department),
        profile_image_url: stored_opt_string(&stored.profile_image_url, defaults.profile_image_url),
        is_active: stored.is_active.unwrap_or(defaults.is_active),
        employee_id: stored_opt_string(&stored.employee_id, defaults.employee_id),
        student_id: stored_opt_string(&stored.student_id, defaults.student_id),
        phone_number: stored_opt_string(&stored.phone_number, defaults.phone_number),
        auth_provider: stored.auth_provider.unwrap_or(defaults.auth_provider),
        profile_completed: stored.profile_completed.unwrap_or(defaults.profile_completed),
        registration_completed: stored
            .registration_completed
            .unwrap_or(defaults.registration_completed),
        email_verified: stored.email_verified.unwrap_or(defaults.email_verified),
        created_at: stored.created_at.or(defaults.created_at),
    }
}

/// Reconcile a principal with whatever the store already holds for it.
///
/// With no stored row the defaults are the creation candidate; with one,
/// stored fields override defaults field by field. Identical inputs give
/// identical output.
pub fn reconcile(
    principal: &SessionPrincipal,
    stored: Option<&StoredProfile>,
) -> ReconciledProfile {
    let defaults = default_profile(principal);

    match stored {
        None => {
            debug!("no stored profile for {}, using derived defaults", principal.id);
            defaults
        }
        Some(row) => merge(defaults, row),
    }
}
