/*!
# Registration Validation

Field rules for sign-up and profile completion, ported from the web form
layer so server-side callers enforce the same contract: password strength
scoring, name/phone/ID shapes, and the cross-field rule tying roles to
employee or student IDs.
*/

use labsync_entities::{is_valid_email, Role, UserRecord};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Outcome of scoring a candidate password, one point per satisfied
/// check. `feedback` lists what is still missing, in check order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordStrength {
    pub score: u8,
    pub feedback: Vec<String>,
    pub is_valid: bool,
}

/// Score a password against the five checks: length of at least 8,
/// uppercase, lowercase, digit, special character.
pub fn password_strength(password: &str) -> PasswordStrength {
    let mut score = 0;
    let mut feedback = Vec::new();

    if password.len() >= 8 {
        score += 1;
    } else {
        feedback.push("Use at least 8 characters".to_string());
    }

    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    } else {
        feedback.push("Add uppercase letters".to_string());
    }

    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    } else {
        feedback.push("Add lowercase letters".to_string());
    }

    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    } else {
        feedback.push("Add numbers".to_string());
    }

    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    } else {
        feedback.push("Add special characters".to_string());
    }

    PasswordStrength {
        score,
        is_valid: score >= 5,
        feedback,
    }
}

/// Violations surfaced by [`RegistrationForm::validate`], each naming the
/// field at fault.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Password is not strong enough: {}", .feedback.join(", "))]
    WeakPassword { feedback: Vec<String> },

    #[error("{field} must be 2-50 characters of letters, spaces, hyphens, and apostrophes")]
    InvalidName { field: &'static str },

    #[error("Unknown department \"{value}\"")]
    UnknownDepartment { value: String },

    #[error("{field} must be 3-20 characters of letters, numbers, hyphens, and underscores")]
    InvalidId { field: &'static str },

    #[error("Please enter a valid phone number")]
    InvalidPhoneNumber,

    #[error("Employee ID is required for staff roles, Student ID is required for students")]
    MissingRoleId,
}

/// A sign-up or profile-completion submission, before account creation is
/// handed to the external identity service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub department: Option<String>,
    pub employee_id: Option<String>,
    pub student_id: Option<String>,
    pub phone_number: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn valid_name(value: &str) -> bool {
    (2..=50).contains(&value.chars().count())
        && Regex::new(r"^[a-zA-Z\s'-]+$").map_or(false, |re| re.is_match(value))
}

fn valid_id(value: &str) -> bool {
    (3..=20).contains(&value.chars().count())
        && Regex::new(r"^[A-Za-z0-9-_]+$").map_or(false, |re| re.is_match(value))
}

fn valid_phone(value: &str) -> bool {
    Regex::new(r"^[+]?[1-9][\d]{0,15}$").map_or(false, |re| re.is_match(value))
}

impl RegistrationForm {
    /// Check every field rule plus the cross-field role/ID requirement.
    ///
    /// This rule is deliberately not re-checked by the CSV import
    /// validator: admin imports may pre-provision accounts before IDs are
    /// issued.
    pub fn validate(&self) -> Result<(), RegistrationError> {
        if !is_valid_email(&self.email) {
            return Err(RegistrationError::InvalidEmail);
        }

        let strength = password_strength(&self.password);
        if !strength.is_valid {
            return Err(RegistrationError::WeakPassword {
                feedback: strength.feedback,
            });
        }

        if !valid_name(self.first_name.trim()) {
            return Err(RegistrationError::InvalidName {
                field: "First name",
            });
        }
        if !valid_name(self.last_name.trim()) {
            return Err(RegistrationError::InvalidName { field: "Last name" });
        }

        if let Some(department) = present(&self.department) {
            if !UserRecord::is_known_department(department) {
                return Err(RegistrationError::UnknownDepartment {
                    value: department.to_string(),
                });
            }
        }

        if let Some(employee_id) = present(&self.employee_id) {
            if !valid_id(employee_id) {
                return Err(RegistrationError::InvalidId {
                    field: "Employee ID",
                });
            }
        }
        if let Some(student_id) = present(&self.student_id) {
            if !valid_id(student_id) {
                return Err(RegistrationError::InvalidId {
                    field: "Student ID",
                });
            }
        }

        if let Some(phone) = present(&self.phone_number) {
            if !valid_phone(phone) {
                return Err(RegistrationError::InvalidPhoneNumber);
            }
        }

        if self.role.requires_employee_id() && present(&self.employee_id).is_none() {
            return Err(RegistrationError::MissingRoleId);
        }
        if self.role.requires_student_id() && present(&self.student_id).is_none() {
            return Err(RegistrationError::MissingRoleId);
        }

        Ok(())
    }
}
