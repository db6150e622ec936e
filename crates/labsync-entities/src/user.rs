use crate::role::Role;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Simple RFC-5322-lite shape check applied everywhere an email enters
/// the system: registration forms and CSV import batches alike.
pub fn is_valid_email(email: &str) -> bool {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").map_or(false, |re| re.is_match(email))
}

/// Department options offered during registration and profile completion.
pub const DEPARTMENTS: &[&str] = &[
    "Computer Science",
    "Information Technology",
    "Software Engineering",
    "Data Science",
    "Cybersecurity",
    "Network Engineering",
    "Digital Media",
    "Game Development",
    "Web Development",
    "Mobile Development",
    "Other",
];

/// The canonical user shape flowing through import, export and
/// reconciliation.
///
/// Records are constructed transiently while parsing an import batch or
/// rendering an export; persisting them is the external store's job.
/// `created_at` and `last_login` are only populated on the export path,
/// where they come straight from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub department: Option<String>,
    pub employee_id: Option<String>,
    pub student_id: Option<String>,
    pub phone_number: Option<String>,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub last_login: Option<DateTime<Utc>>,
}

impl UserRecord {
    /// A record with the required fields set and everything else at its
    /// import-time default (active, no optional fields, no timestamps).
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            role,
            department: None,
            employee_id: None,
            student_id: None,
            phone_number: None,
            is_active: true,
            created_at: None,
            last_login: None,
        }
    }

    /// Whether `name` is one of the known department options.
    pub fn is_known_department(name: &str) -> bool {
        DEPARTMENTS.contains(&name)
    }
}
