//! Role-based permission tables.
//!
//! Grants are `resource:action` strings checked by the admin console and
//! API layer. `super_admin` carries the wildcard and passes every check.

use crate::role::Role;

/// Grant string that matches every permission.
pub const PERMISSION_WILDCARD: &str = "*";

const SUPER_ADMIN_PERMISSIONS: &[&str] = &[PERMISSION_WILDCARD];

const ADMIN_PERMISSIONS: &[&str] = &[
    "users:read",
    "users:write",
    "labs:read",
    "labs:write",
    "equipment:read",
    "equipment:write",
    "courses:read",
    "courses:write",
    "reports:read",
];

const LAB_MANAGER_PERMISSIONS: &[&str] = &[
    "labs:read",
    "labs:write",
    "equipment:read",
    "equipment:write",
    "users:read",
    "sessions:read",
    "sessions:write",
];

const INSTRUCTOR_PERMISSIONS: &[&str] = &[
    "courses:read",
    "courses:write",
    "sessions:read",
    "sessions:write",
    "students:read",
    "grading:read",
    "grading:write",
];

const LAB_STAFF_PERMISSIONS: &[&str] = &[
    "equipment:read",
    "equipment:write",
    "sessions:read",
    "maintenance:read",
    "maintenance:write",
];

const STUDENT_PERMISSIONS: &[&str] = &[
    "sessions:read",
    "submissions:read",
    "submissions:write",
    "grades:read",
];

impl Role {
    /// The role's grant list.
    pub fn permissions(self) -> &'static [&'static str] {
        match self {
            Role::SuperAdmin => SUPER_ADMIN_PERMISSIONS,
            Role::Admin => ADMIN_PERMISSIONS,
            Role::LabManager => LAB_MANAGER_PERMISSIONS,
            Role::Instructor => INSTRUCTOR_PERMISSIONS,
            Role::LabStaff => LAB_STAFF_PERMISSIONS,
            Role::Student => STUDENT_PERMISSIONS,
        }
    }

    /// Whether the role holds `permission`, honoring the wildcard.
    pub fn has_permission(self, permission: &str) -> bool {
        self.permissions()
            .iter()
            .any(|grant| *grant == PERMISSION_WILDCARD || *grant == permission)
    }
}
