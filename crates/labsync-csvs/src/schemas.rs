/*!
# CSV Schema Definitions

This module defines the CSV data contracts between the admin console's
import/export surface and whoever produces or consumes the files:

- **Import** (`users.csv` uploads) → consumed by [`crate::import`]
- **Export** (`users-export-*.csv` downloads) → produced by [`crate::export`]
- **Template** (`user-import-template.csv`) → self-service onboarding
*/

use serde::{Deserialize, Serialize};

/// Headers every import file must carry, matched case-insensitively.
pub const IMPORT_REQUIRED_HEADERS: &[&str] = &["email", "first_name", "last_name", "role"];

/// Optional import headers that map into a record when present.
pub const IMPORT_OPTIONAL_HEADERS: &[&str] =
    &["department", "employee_id", "student_id", "phone_number"];

/// Export column order, fixed.
pub const EXPORT_HEADERS: &[&str] = &[
    "email",
    "first_name",
    "last_name",
    "role",
    "department",
    "employee_id",
    "student_id",
    "phone_number",
    "is_active",
    "created_at",
    "last_login",
];

/// Template column order, fixed. A byte-exact contract: consumers fill the
/// template in and upload it unchanged.
pub const TEMPLATE_HEADERS: &[&str] = &[
    "email",
    "first_name",
    "last_name",
    "role",
    "department",
    "employee_id",
    "student_id",
    "phone_number",
];

const TEMPLATE_SAMPLE_ROW: &[&str] = &[
    "john.doe@university.edu",
    "John",
    "Doe",
    "student",
    "Computer Science",
    "",
    "CS2024001",
    "+1234567890",
];

/// The two-line import template: header row plus one literal sample row.
/// Byte-identical across calls.
pub fn user_import_template() -> String {
    [TEMPLATE_HEADERS.join(","), TEMPLATE_SAMPLE_ROW.join(",")].join("\n")
}

/// One fully rendered export line, every cell already a display string.
///
/// Rendering rules live in [`crate::export`]; this struct is the wire
/// shape in [`EXPORT_HEADERS`] order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportUserRow {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub department: String,
    pub employee_id: String,
    pub student_id: String,
    pub phone_number: String,
    pub is_active: String,
    pub created_at: String,
    pub last_login: String,
}

impl ExportUserRow {
    /// Cells in [`EXPORT_HEADERS`] order.
    pub fn into_fields(self) -> Vec<String> {
        vec![
            self.email,
            self.first_name,
            self.last_name,
            self.role,
            self.department,
            self.employee_id,
            self.student_id,
            self.phone_number,
            self.is_active,
            self.created_at,
            self.last_login,
        ]
    }
}

/// Header presence check used by the import validator: which required
/// headers are absent from an already lowercased header row.
pub fn missing_required_headers(headers: &[String]) -> Vec<String> {
    IMPORT_REQUIRED_HEADERS
        .iter()
        .filter(|required| !headers.iter().any(|header| header == *required))
        .map(|required| required.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_is_byte_stable() {
        let expected = "email,first_name,last_name,role,department,employee_id,student_id,phone_number\n\
                        john.doe@university.edu,John,Doe,student,Computer Science,,CS2024001,+1234567890";
        assert_eq!(user_import_template(), expected);
        assert_eq!(user_import_template(), user_import_template());
        assert_eq!(user_import_template().lines().count(), 2);
    }

    #[test]
    fn test_template_headers_match_sample_width() {
        assert_eq!(TEMPLATE_HEADERS.len(), TEMPLATE_SAMPLE_ROW.len());
    }

    #[test]
    fn test_template_headers_are_required_plus_optional() {
        let expected: Vec<&str> = IMPORT_REQUIRED_HEADERS
            .iter()
            .chain(IMPORT_OPTIONAL_HEADERS.iter())
            .copied()
            .collect();
        assert_eq!(TEMPLATE_HEADERS, expected.as_slice());
    }

    #[test]
    fn test_missing_required_headers() {
        let headers = vec!["email".to_string(), "first_name".to_string()];
        assert_eq!(
            missing_required_headers(&headers),
            vec!["last_name".to_string(), "role".to_string()]
        );

        let full: Vec<String> = IMPORT_REQUIRED_HEADERS
            .iter()
            .map(|h| h.to_string())
            .collect();
        assert!(missing_required_headers(&full).is_empty());
    }

    #[test]
    fn test_export_row_field_order_matches_headers() {
        let row = ExportUserRow {
            email: "e".into(),
            first_name: "f".into(),
            last_name: "l".into(),
            role: "r".into(),
            department: "d".into(),
            employee_id: "emp".into(),
            student_id: "stu".into(),
            phone_number: "p".into(),
            is_active: "a".into(),
            created_at: "c".into(),
            last_login: "ll".into(),
        };
        assert_eq!(row.into_fields().len(), EXPORT_HEADERS.len());
    }
}
