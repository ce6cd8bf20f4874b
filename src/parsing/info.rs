//! Reader and writer for scheme metadata documents (`info.json`).

use std::path::Path;

use thiserror::Error;

use crate::core::scheme::SchemeInfo;

#[derive(Error, Debug)]
pub enum InfoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read a metadata document.
///
/// Missing required keys do not fail here; they surface as findings during
/// validation.
///
/// # Errors
///
/// Returns `InfoError::Io` if the file cannot be read or `InfoError::Json`
/// if it is not a well-formed metadata document.
pub fn read_info_file(path: &Path) -> Result<SchemeInfo, InfoError> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Render a metadata document as pretty-printed JSON with a trailing newline.
///
/// # Errors
///
/// Returns `InfoError::Json` if serialization fails.
pub fn write_info(info: &SchemeInfo) -> Result<String, InfoError> {
    let mut out = serde_json::to_string_pretty(info)?;
    out.push('\n');
    Ok(out)
}
