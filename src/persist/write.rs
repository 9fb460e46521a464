/// Serialize a record list as 2-space indented JSON.
use std::fs;
use std::path::Path;

use serde_json::Value;

use super::errors::PersistError;

/// Default output file name, relative to the current directory.
pub const DEFAULT_OUTPUT: &str = "models.json";

/// Render `records` as a JSON array indented with two spaces.
///
/// # Errors
///
/// Returns `PersistError::Serialize` if a record cannot be serialized.
pub fn render_records(records: &[Value]) -> Result<String, PersistError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Write `records` to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns `PersistError` on serialization or I/O failure.
pub fn write_records(path: &Path, records: &[Value]) -> Result<(), PersistError> {
    let rendered = render_records(records)?;
    fs::write(path, &rendered).map_err(|source| PersistError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = rendered.len(), "records written");
    Ok(())
}
