//! End-to-end pipeline: data file → records → links → rendered index.

use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::{info, instrument};

use nocindex_shared::{AppConfig, NocIndexError, Result};

use crate::loader::load_records;
use crate::render::render;

/// Configuration for a single index run.
#[derive(Debug, Clone)]
pub struct IndexConfig {
    /// JSON file holding the records.
    pub data_file: PathBuf,
}

impl From<&AppConfig> for IndexConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            data_file: config.data_file.clone(),
        }
    }
}

/// Result of a successful [`write_index`] run.
#[derive(Debug)]
pub struct IndexSummary {
    /// Number of records rendered (one output line each).
    pub record_count: usize,
    /// Total elapsed time.
    pub elapsed: Duration,
}

/// Load the data file, render every record, and write the index to `out`
/// followed by one newline.
///
/// Nothing is written unless every record renders.
#[instrument(skip_all, fields(data_file = %config.data_file.display()))]
pub fn write_index(config: &IndexConfig, out: &mut impl Write) -> Result<IndexSummary> {
    let start = Instant::now();

    let records = load_records(&config.data_file)?;
    let rendered = render(&records)?;

    writeln!(out, "{rendered}").map_err(NocIndexError::Output)?;
    out.flush().map_err(NocIndexError::Output)?;

    let summary = IndexSummary {
        record_count: records.len(),
        elapsed: start.elapsed(),
    };
    info!(
        records = summary.record_count,
        elapsed_ms = summary.elapsed.as_millis() as u64,
        "index written"
    );
    Ok(summary)
}
