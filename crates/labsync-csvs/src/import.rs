/*!
# User Import Validation

Turns decoded CSV rows into validated [`UserRecord`]s, or fails the whole
batch with an error naming the offending row. Partial imports are not
supported here: downstream account creation is not transactional across
rows either, so the validator is all-or-nothing per call and any
per-row-continue policy belongs to the caller.
*/

use crate::codec;
use crate::errors::{CsvError, CsvResult};
use crate::schemas::missing_required_headers;
use labsync_entities::{is_valid_email, Role, UserRecord};
use tracing::debug;

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Validate decoded rows into user records.
///
/// The first row is the header, matched case-insensitively. Missing
/// required headers abort before any data row is read. Data rows that are
/// entirely blank are skipped; unrecognized headers are ignored so newer
/// exports keep importing. Row numbers in errors are 1-based positions in
/// the original file, header included, so "row 2" is the first data row.
pub fn users_from_rows(rows: &[Vec<String>]) -> CsvResult<Vec<UserRecord>> {
    if rows.len() < 2 {
        return Err(CsvError::TooFewRows);
    }

    let headers: Vec<String> = rows[0]
        .iter()
        .map(|header| header.trim().to_lowercase())
        .collect();

    let missing = missing_required_headers(&headers);
    if !missing.is_empty() {
        return Err(CsvError::MissingHeaders { missing });
    }

    let mut users = Vec::new();

    for (index, row) in rows.iter().enumerate().skip(1) {
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let row_number = index + 1;

        let mut email = None;
        let mut first_name = None;
        let mut last_name = None;
        let mut role = None;
        let mut department = None;
        let mut employee_id = None;
        let mut student_id = None;
        let mut phone_number = None;

        for (column, header) in headers.iter().enumerate() {
            let value = row.get(column).map(String::as_str).unwrap_or("").trim();

            match header.as_str() {
                "email" => email = non_empty(value),
                "first_name" => first_name = non_empty(value),
                "last_name" => last_name = non_empty(value),
                "role" => {
                    let parsed = value.parse::<Role>().map_err(|_| CsvError::InvalidRole {
                        row: row_number,
                        value: value.to_string(),
                        valid: Role::wire_names(),
                    })?;
                    role = Some(parsed);
                }
                "department" => department = non_empty(value),
                "employee_id" => employee_id = non_empty(value),
                "student_id" => student_id = non_empty(value),
                "phone_number" => phone_number = non_empty(value),
                _ => {}
            }
        }

        let (Some(email), Some(first_name), Some(last_name), Some(role)) =
            (email, first_name, last_name, role)
        else {
            return Err(CsvError::MissingRequiredFields { row: row_number });
        };

        if !is_valid_email(&email) {
            return Err(CsvError::InvalidEmail {
                row: row_number,
                value: email,
            });
        }

        let mut record = UserRecord::new(email, first_name, last_name, role);
        record.department = department;
        record.employee_id = employee_id;
        record.student_id = student_id;
        record.phone_number = phone_number;
        users.push(record);
    }

    debug!("validated {} user rows from import batch", users.len());
    Ok(users)
}

/// Decode raw CSV text and validate it in one step.
pub fn parse_users_csv(text: &str) -> CsvResult<Vec<UserRecord>> {
    users_from_rows(&codec::decode(text))
}
