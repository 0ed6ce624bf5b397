use std::fs;
use std::path::Path;

use intake_core::models::log_entry::IntakeLogEntry;
use intake_core::schema::COLUMNS;

use crate::encode::parse_rows;
use crate::error::LogError;

/// Read the whole log back. The header row is checked against the fixed
/// schema; every data row must decode to an [`IntakeLogEntry`].
pub fn read_entries(path: &Path) -> Result<Vec<IntakeLogEntry>, LogError> {
    let content = fs::read_to_string(path)?;
    let rows = parse_rows(&content);

    let Some((header, data)) = rows.split_first() else {
        return Ok(Vec::new());
    };

    if header.len() != COLUMNS.len() || header.iter().zip(COLUMNS).any(|(h, c)| h.as_str() != c) {
        return Err(LogError::MalformedHeader {
            found: header.join(","),
        });
    }

    data.iter()
        .enumerate()
        .map(|(i, row)| {
            // Rows are 1-indexed with the header as row 1.
            let row_number = i + 2;
            let fields: &[String; COLUMNS.len()] =
                row.as_slice()
                    .try_into()
                    .map_err(|_| LogError::MalformedRow {
                        row: row_number,
                        reason: format!("expected {} fields, got {}", COLUMNS.len(), row.len()),
                    })?;
            IntakeLogEntry::from_fields(fields).map_err(|e| LogError::MalformedRow {
                row: row_number,
                reason: e.to_string(),
            })
        })
        .collect()
}
