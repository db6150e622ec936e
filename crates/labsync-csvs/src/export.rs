/*!
# User Export Serialization

Renders store-backed user records into the fixed-order export CSV served
by the admin console. Every cell is a display string: human role labels,
`Active`/`Inactive`, `%Y-%m-%d` dates, `Never` for accounts that have not
signed in.
*/

use crate::codec;
use crate::schemas::{ExportUserRow, EXPORT_HEADERS};
use chrono::{DateTime, Utc};
use labsync_entities::UserRecord;

fn render_date(value: Option<DateTime<Utc>>) -> String {
    value.map_or_else(String::new, |date| date.format("%Y-%m-%d").to_string())
}

/// Render one record into its export row.
pub fn render_record(record: &UserRecord) -> ExportUserRow {
    ExportUserRow {
        email: record.email.clone(),
        first_name: record.first_name.clone(),
        last_name: record.last_name.clone(),
        role: record.role.label().to_string(),
        department: record.department.clone().unwrap_or_default(),
        employee_id: record.employee_id.clone().unwrap_or_default(),
        student_id: record.student_id.clone().unwrap_or_default(),
        phone_number: record.phone_number.clone().unwrap_or_default(),
        is_active: if record.is_active {
            "Active".to_string()
        } else {
            "Inactive".to_string()
        },
        created_at: render_date(record.created_at),
        last_login: record
            .last_login
            .map_or_else(|| "Never".to_string(), |date| render_date(Some(date))),
    }
}

/// Serialize records to export CSV text: header line first, one line per
/// record, in input order. An empty record list yields an empty string.
pub fn users_to_csv(records: &[UserRecord]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let mut rows = Vec::with_capacity(records.len() + 1);
    rows.push(EXPORT_HEADERS.iter().map(|h| h.to_string()).collect());
    rows.extend(
        records
            .iter()
            .map(|record| render_record(record).into_fields()),
    );

    codec::encode(&rows)
}
