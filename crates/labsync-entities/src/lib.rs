/*!
# LabSync Entity Model

This crate provides the **authoritative user model** shared across LabSync.

## Purpose

This crate serves as the **single source of truth** for the user data
contract between:

- **CSV import/export** (`labsync-csvs`) → Parses and serializes user rows
- **Identity reconciliation** (`labsync-identity`) → Derives profiles from
  authenticated sessions
- **Admin console / API layer** (external consumers) → Displays and edits
  user accounts

## What lives here

- [`Role`]: the closed six-value role enumeration. Any value outside the
  set is a hard parse error, never silently coerced.
- [`UserRecord`]: the canonical user shape flowing through import, export
  and reconciliation. Constructed transiently; persistence belongs to the
  external store.
- Role→permission tables with the `super_admin` wildcard.
- The fixed department option list.

## Usage

```rust
use labsync_entities::{Role, UserRecord};

let record = UserRecord::new("ada@university.edu", "Ada", "Lovelace", Role::Instructor);
assert!(record.is_active);
assert!(record.role.has_permission("courses:write"));
assert_eq!(record.role.to_string(), "instructor");
```
*/

pub mod permissions;
pub mod role;
pub mod user;

// Re-export main types for convenience
pub use permissions::PERMISSION_WILDCARD;
pub use role::{Role, RoleParseError};
pub use user::{is_valid_email, UserRecord, DEPARTMENTS};
