use chrono::{DateTime, Duration, Utc};
use labsync_entities::{Role, UserRecord};

/// Tunables for the admin approval queue.
///
/// Passed in explicitly by the caller rather than read from the
/// environment, so the heuristic stays a pure function.
#[derive(Debug, Clone)]
pub struct ApprovalPolicy {
    /// How many days after creation a staff account still counts as
    /// awaiting approval rather than explicitly deactivated.
    pub window_days: i64,
}

impl Default for ApprovalPolicy {
    fn default() -> Self {
        Self { window_days: 30 }
    }
}

/// Whether an account belongs in the approval queue.
///
/// Students self-register and never need approval. Active accounts are
/// already approved. An inactive staff account counts as pending only if
/// it was created inside the policy window and has never signed in;
/// anything older or previously signed in was deactivated on purpose.
pub fn needs_approval(record: &UserRecord, now: DateTime<Utc>, policy: &ApprovalPolicy) -> bool {
    if record.role == Role::Student {
        return false;
    }
    if record.is_active {
        return false;
    }

    let Some(created_at) = record.created_at else {
        return false;
    };

    created_at > now - Duration::days(policy.window_days) && record.last_login.is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn pending_staff() -> UserRecord {
        let mut record = UserRecord::new("new@lab.edu", "New", "Hire", Role::LabStaff);
        record.is_active = false;
        record.created_at = Some(now() - Duration::days(3));
        record
    }

    #[test]
    fn test_fresh_inactive_staff_needs_approval() {
        assert!(needs_approval(&pending_staff(), now(), &ApprovalPolicy::default()));
    }

    #[test]
    fn test_students_never_need_approval() {
        let mut record = pending_staff();
        record.role = Role::Student;
        assert!(!needs_approval(&record, now(), &ApprovalPolicy::default()));
    }

    #[test]
    fn test_active_accounts_never_need_approval() {
        let mut record = pending_staff();
        record.is_active = true;
        assert!(!needs_approval(&record, now(), &ApprovalPolicy::default()));
    }

    #[test]
    fn test_old_inactive_account_was_deactivated_on_purpose() {
        let mut record = pending_staff();
        record.created_at = Some(now() - Duration::days(45));
        assert!(!needs_approval(&record, now(), &ApprovalPolicy::default()));
    }

    #[test]
    fn test_previously_signed_in_account_is_not_pending() {
        let mut record = pending_staff();
        record.last_login = Some(now() - Duration::days(1));
        assert!(!needs_approval(&record, now(), &ApprovalPolicy::default()));
    }

    #[test]
    fn test_missing_created_at_is_not_pending() {
        let mut record = pending_staff();
        record.created_at = None;
        assert!(!needs_approval(&record, now(), &ApprovalPolicy::default()));
    }

    #[test]
    fn test_policy_window_is_configurable() {
        let mut record = pending_staff();
        record.created_at = Some(now() - Duration::days(10));
        let tight = ApprovalPolicy { window_days: 7 };
        assert!(!needs_approval(&record, now(), &tight));
        assert!(needs_approval(&record, now(), &ApprovalPolicy::default()));
    }
}
