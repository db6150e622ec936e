use thiserror::Error;

pub type CsvResult<T> = Result<T, CsvError>;

/// Errors raised while validating a user import batch.
///
/// Structural errors surface before any data row is processed; row errors
/// carry the 1-based row number as it appears in the original file (the
/// header is row 1) so an admin can fix the offending line without
/// re-deriving anything. Any row error aborts the whole batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CsvError {
    #[error("CSV must contain at least a header row and one data row")]
    TooFewRows,

    #[error("Missing required headers: {}", .missing.join(", "))]
    MissingHeaders { missing: Vec<String> },

    #[error("Invalid role \"{value}\" in row {row}. Valid roles: {valid}")]
    InvalidRole {
        row: usize,
        value: String,
        valid: String,
    },

    #[error("Missing required fields in row {row}")]
    MissingRequiredFields { row: usize },

    #[error("Invalid email format \"{value}\" in row {row}")]
    InvalidEmail { row: usize, value: String },
}
