//! Loader: reads the data file and decodes its `[title, description]` pairs.

use std::path::Path;

use tracing::{debug, info, instrument};

use nocindex_shared::{NocIndexError, Record, Result};

/// Read and parse the records stored at `path`.
///
/// Invalid UTF-8 is replaced rather than rejected; the file only has to be
/// well-formed JSON once decoded.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let bytes = std::fs::read(path).map_err(|e| NocIndexError::read(path, e))?;
    debug!(bytes = bytes.len(), "read data file");

    let content = String::from_utf8_lossy(&bytes);
    let records = parse_records(&content).map_err(|e| e.with_path(path))?;

    info!(records = records.len(), "loaded records");
    Ok(records)
}

/// Parse a JSON array of `[title, description]` string pairs.
pub fn parse_records(content: &str) -> Result<Vec<Record>> {
    serde_json::from_str(content).map_err(|e| NocIndexError::parse(e.to_string()))
}
