use crate::provider::AuthProvider;
use chrono::{DateTime, Utc};
use labsync_entities::Role;
use serde::{Deserialize, Serialize};

/// A previously persisted profile row, fetched by the external store
/// using the principal's id as key.
///
/// Every field is optional: legacy rows predate several columns and may be
/// partially null. The merge in [`crate::reconcile`] only lets a stored
/// field override a default when it is actually present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredProfile {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub auth_provider: Option<AuthProvider>,
    #[serde(default)]
    pub profile_completed: Option<bool>,
    #[serde(default)]
    pub registration_completed: Option<bool>,
    #[serde(default)]
    pub email_verified: Option<bool>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// The merged application-level view of a principal, ready for the
/// external store to upsert and for the UI to route on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciledProfile {
    pub id: String,
    pub email: String,
    /// Empty string when no provider claim supplied one; the
    /// complete-profile flow collects it later.
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub department: Option<String>,
    pub profile_image_url: Option<String>,
    pub is_active: bool,
    pub employee_id: Option<String>,
    pub student_id: Option<String>,
    pub phone_number: Option<String>,
    pub auth_provider: AuthProvider,
    pub profile_completed: bool,
    pub registration_completed: bool,
    pub email_verified: bool,
    /// Copied through from the stored row, never generated here.
    pub created_at: Option<DateTime<Utc>>,
}
