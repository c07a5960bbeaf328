//! CLI definition, tracing setup, and the single index command.

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use nocindex_core::pipeline::{IndexConfig, write_index};
use nocindex_shared::{AppConfig, LogConfig};
use tracing::{debug, info};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// Generate the example index links from `../noc-data.json`.
#[derive(Parser)]
#[command(
    name = "noc-index",
    version,
    about = "Print an HTML link for every example listed in ../noc-data.json.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text")]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

impl Cli {
    /// Resolve runtime config: fixed data file, verbosity from flags.
    fn app_config(&self) -> AppConfig {
        AppConfig {
            log: LogConfig {
                verbosity: self.verbose,
            },
            ..AppConfig::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags. Logs go to stderr; stdout is
/// reserved for the rendered index.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let log = cli.app_config().log;
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log.filter_directive()));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// Render the index and print it to stdout.
pub(crate) fn run(cli: Cli) -> Result<()> {
    let config = cli.app_config();
    debug!(?config, "resolved configuration");

    let index_config = IndexConfig::from(&config);
    let stdout = std::io::stdout();
    let summary = write_index(&index_config, &mut stdout.lock()).wrap_err_with(|| {
        format!(
            "could not generate index from {}",
            index_config.data_file.display()
        )
    })?;

    info!(
        records = summary.record_count,
        elapsed_ms = summary.elapsed.as_millis() as u64,
        "done"
    );
    Ok(())
}
