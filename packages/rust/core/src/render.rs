//! Renderer: one `<a>` line per record, joined with newlines.

use nocindex_shared::{Record, Result};

use crate::link::derive_link;

/// Render a single record as `<a href="<link>"><title>: <description></a>`.
///
/// Title and description are copied verbatim, without HTML escaping.
pub fn render_line(record: &Record) -> Result<String> {
    let link = derive_link(&record.title)?;
    Ok(format!(
        "<a href=\"{link}\">{}: {}</a>",
        record.title, record.description
    ))
}

/// Render all records in input order, one per line, without a trailing
/// newline. The first malformed title aborts the whole render.
pub fn render(records: &[Record]) -> Result<String> {
    let lines = records
        .iter()
        .map(render_line)
        .collect::<Result<Vec<_>>>()?;
    Ok(lines.join("\n"))
}
