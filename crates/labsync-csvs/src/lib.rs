/*!
# LabSync CSV Schemas & Validation

This crate provides the **CSV import/export workflow** for LabSync user
accounts.

## Purpose

This crate is the single source of truth for the CSV data contracts
between:

- **Admin console** (producer/consumer) → Uploads import batches, downloads
  exports and the self-service template
- **Bulk provisioning scripts** (producers) → Generate import files
- **API layer** (future consumer) → Will accept CSV uploads

## Pieces

- [`codec`]: the delimited-text decoder/encoder. The grammar is
  deliberately minimal (structural quotes, per-field trimming) so files
  hand-edited in spreadsheets keep parsing.
- [`import`]: header contract plus fail-fast row validation into
  [`labsync_entities::UserRecord`]s.
- [`export`]: fixed-order export rendering over the codec.
- [`schemas`]: header constants, the export row shape and the byte-stable
  import template.

## Usage

```rust
use labsync_csvs::{parse_users_csv, user_import_template, users_to_csv, CsvResult};

fn example() -> CsvResult<()> {
    let batch = parse_users_csv(&user_import_template())?;
    assert_eq!(batch.len(), 1);

    let round_tripped = users_to_csv(&batch);
    assert!(round_tripped.starts_with("email,"));
    Ok(())
}
```

Any row failing validation aborts the whole batch; the error names the
offending 1-based row. Callers wanting best-effort imports decide that
policy themselves, one row at a time.
*/

pub mod codec;
pub mod errors;
pub mod export;
pub mod import;
pub mod schemas;

// Re-export main entry points for convenience
pub use codec::{decode, encode, escape_field};
pub use errors::{CsvError, CsvResult};
pub use export::{render_record, users_to_csv};
pub use import::{parse_users_csv, users_from_rows};
pub use schemas::{
    user_import_template, ExportUserRow, EXPORT_HEADERS, IMPORT_REQUIRED_HEADERS, TEMPLATE_HEADERS,
};
