use std::path::Path;

use thiserror::Error;

use crate::core::record::{CoordinateRecord, ParseError};
use crate::hashing::canon::format_record;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no records found in coordinate table")]
    Empty,

    #[error("line {line}: {source}")]
    Record {
        line: usize,
        #[source]
        source: ParseError,
    },
}

/// A parsed coordinate table: the column count observed in the file and the
/// records in file order.
#[derive(Debug, Clone)]
pub struct ParsedTable {
    pub columns: usize,
    pub records: Vec<CoordinateRecord>,
}

/// Parse a coordinate table file.
///
/// # Errors
///
/// Returns `TableError::Io` if the file cannot be read, or other table
/// errors if the content is invalid.
pub fn parse_table_file(path: &Path) -> Result<ParsedTable, TableError> {
    let content = std::fs::read_to_string(path)?;
    parse_table_text(&content)
}

/// Parse coordinate table text.
///
/// The first data line fixes the column count (6 or 7); every following line
/// must match it. Blank lines and lines starting with `#` are ignored.
///
/// # Errors
///
/// Returns `TableError::Empty` when no records are found, or
/// `TableError::Record` naming the offending line for any malformed record,
/// including an unsupported column count.
pub fn parse_table_text(text: &str) -> Result<ParsedTable, TableError> {
    let mut columns = None;
    let mut records = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;

        let columns = *columns.get_or_insert_with(|| line.split_whitespace().count());
        let record = CoordinateRecord::parse(line, columns).map_err(|source| {
            TableError::Record {
                line: line_num,
                source,
            }
        })?;
        records.push(record);
    }

    match columns {
        Some(columns) if !records.is_empty() => Ok(ParsedTable { columns, records }),
        _ => Err(TableError::Empty),
    }
}

/// Render records as table text, one line per record in the given order.
#[must_use]
pub fn write_table(records: &[CoordinateRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&format_record(record));
        out.push('\n');
    }
    out
}
