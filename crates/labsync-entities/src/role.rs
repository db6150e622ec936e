use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The closed set of LabSync user roles.
///
/// The wire form (CSV cells, JSON payloads, database rows) is the
/// snake_case name. Parsing anything outside this set is a hard error;
/// unknown roles are never coerced to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Admin,
    LabManager,
    Instructor,
    LabStaff,
    Student,
}

/// Raised when a string does not name one of the six roles.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown role \"{value}\" (valid roles: {})", Role::wire_names())]
pub struct RoleParseError {
    pub value: String,
}

impl Role {
    /// All roles in wire order.
    pub const ALL: [Role; 6] = [
        Role::SuperAdmin,
        Role::Admin,
        Role::LabManager,
        Role::Instructor,
        Role::LabStaff,
        Role::Student,
    ];

    /// The snake_case wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::Admin => "admin",
            Role::LabManager => "lab_manager",
            Role::Instructor => "instructor",
            Role::LabStaff => "lab_staff",
            Role::Student => "student",
        }
    }

    /// Human-readable label used in exports and the admin console.
    pub fn label(self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super Admin",
            Role::Admin => "Admin",
            Role::LabManager => "Lab Manager",
            Role::Instructor => "Instructor",
            Role::LabStaff => "Lab Staff",
            Role::Student => "Student",
        }
    }

    /// Comma-separated wire names, in the order error messages list them.
    pub fn wire_names() -> String {
        Role::ALL
            .iter()
            .map(|role| role.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Every role except `student` counts as staff.
    pub fn is_staff(self) -> bool {
        !matches!(self, Role::Student)
    }

    /// Staff roles register with an employee ID.
    pub fn requires_employee_id(self) -> bool {
        self.is_staff()
    }

    /// Students register with a student ID.
    pub fn requires_student_id(self) -> bool {
        matches!(self, Role::Student)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .iter()
            .copied()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| RoleParseError {
                value: s.to_string(),
            })
    }
}
