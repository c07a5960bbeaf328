//! Runtime configuration for noc-index.
//!
//! The data file location is fixed; only log verbosity is adjustable, from
//! CLI flags. Library entry points still take the data path explicitly.

use std::path::PathBuf;

/// Data file read by the binary, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "../noc-data.json";

/// Top-level runtime config.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// JSON file holding the `[title, description]` records.
    pub data_file: PathBuf,

    /// Logging settings.
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log: LogConfig::default(),
        }
    }
}

/// Logging settings, merged from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    /// Number of `-v` flags given.
    pub verbosity: u8,
}

impl LogConfig {
    /// `EnvFilter` directive for the configured verbosity.
    ///
    /// Quiet by default so stderr stays clean next to the copy-paste output.
    pub fn filter_directive(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_parent_data_file() {
        let config = AppConfig::default();
        assert_eq!(config.data_file, PathBuf::from("../noc-data.json"));
        assert_eq!(config.log.verbosity, 0);
    }

    #[test]
    fn verbosity_maps_to_filter() {
        let mut log = LogConfig::default();
        assert_eq!(log.filter_directive(), "warn");
        log.verbosity = 1;
        assert_eq!(log.filter_directive(), "info");
        log.verbosity = 2;
        assert_eq!(log.filter_directive(), "debug");
        log.verbosity = 9;
        assert_eq!(log.filter_directive(), "trace");
    }
}
