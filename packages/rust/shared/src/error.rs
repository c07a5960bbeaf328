//! Error types for noc-index.
//!
//! Library crates use [`NocIndexError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all noc-index operations.
#[derive(Debug, thiserror::Error)]
pub enum NocIndexError {
    /// The data file is missing or unreadable.
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The data file is not a JSON array of `[title, description]` pairs.
    #[error("{}", parse_message(.path.as_deref(), .message))]
    Parse {
        path: Option<PathBuf>,
        message: String,
    },

    /// A title has no space-delimited chapter/example token.
    #[error("malformed title {title:?}: expected \"<label> <chapter>.<example>\"")]
    Format { title: String },

    /// Writing the rendered index to the output sink failed.
    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, NocIndexError>;

fn parse_message(path: Option<&std::path::Path>, message: &str) -> String {
    match path {
        Some(path) => format!("parse error in {}: {message}", path.display()),
        None => format!("parse error: {message}"),
    }
}

impl NocIndexError {
    /// Wrap a `std::io::Error` raised while reading `path`.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error that is not tied to a file.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            path: None,
            message: msg.into(),
        }
    }

    /// Create a format error for the offending title.
    pub fn format(title: impl Into<String>) -> Self {
        Self::Format {
            title: title.into(),
        }
    }

    /// Attach the source file to a parse error. Other variants pass through.
    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::Parse { message, .. } => Self::Parse {
                path: Some(path.into()),
                message,
            },
            other => other,
        }
    }
}
