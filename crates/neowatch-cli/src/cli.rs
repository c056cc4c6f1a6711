//! CLI argument definitions for neowatch.
//!
//! # Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--view` | `all` | Record view (all, hazardous, distance, size) |
//! | `--format` | `table` | Output format (table, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--summary-only` | `false` | Print the summary without records |
//! | `--no-progress` | `false` | Silence the stderr progress line |
//! | `--log-level` | `warn` | Log level, overridden by `RUST_LOG` |
//! | `--api-key` | env | Overrides `NEOWATCH_API_KEY` / `NASA_API_KEY` |
//! | `--base-url` | env | Overrides `NEOWATCH_BASE_URL` |
//! | `--timeout-ms` | env | Per-request timeout, overrides `NEOWATCH_TIMEOUT_MS` |
//! | `--max-attempts` | env | Attempts per day, overrides `NEOWATCH_MAX_ATTEMPTS` |
//!
//! # Examples
//!
//! ```bash
//! # Closest approaches this week
//! neowatch --view distance
//!
//! # Hazardous objects as JSON
//! neowatch --view hazardous --format json --pretty
//! ```

use clap::{Parser, ValueEnum};
use neowatch_core::config::{
    ENV_API_KEY, ENV_API_KEY_FALLBACK, ENV_BASE_URL, ENV_MAX_ATTEMPTS, ENV_TIMEOUT_MS,
};
use neowatch_core::{ConfigError, FeedConfig, View};
use tracing_subscriber::filter::LevelFilter;

/// Near-Earth objects passing by over the next seven days.
#[derive(Debug, Parser)]
#[command(
    name = "neowatch",
    author,
    version,
    about = "Near-Earth objects over the coming week, from NASA NeoWs"
)]
pub struct Cli {
    /// Which records to show and in what order: all, hazardous, distance or size.
    #[arg(long, default_value = "all")]
    pub view: View,

    /// Output format for results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, default_value_t = false)]
    pub pretty: bool,

    /// Print the summary only.
    #[arg(long, default_value_t = false)]
    pub summary_only: bool,

    /// Do not report per-day progress on stderr.
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,

    /// Default log level; `RUST_LOG` takes precedence.
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// NeoWs API key.
    #[arg(long)]
    pub api_key: Option<String>,

    /// Feed endpoint.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Per-request timeout in milliseconds.
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Total attempts per day, including the first.
    #[arg(long)]
    pub max_attempts: Option<u32>,
}

impl Cli {
    /// Environment configuration with command-line overrides applied.
    pub fn feed_config(&self) -> Result<FeedConfig, ConfigError> {
        self.feed_config_with(|name| std::env::var(name).ok())
    }

    /// Like [`feed_config`](Self::feed_config) over an arbitrary lookup.
    ///
    /// A variable shadowed by a flag is never read, so a bad value there
    /// cannot fail the run. Validation happens once, after the flags.
    pub fn feed_config_with<F>(&self, lookup: F) -> Result<FeedConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = FeedConfig::read_lookup(|name| {
            if self.shadows(name) {
                None
            } else {
                lookup(name)
            }
        })?;

        if let Some(api_key) = &self.api_key {
            config = config.with_api_key(api_key.as_str());
        }
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url.as_str());
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config = config.with_timeout_ms(timeout_ms);
        }
        if let Some(max_attempts) = self.max_attempts {
            config = config.with_max_attempts(max_attempts);
        }

        config.validate()?;
        Ok(config)
    }

    fn shadows(&self, variable: &str) -> bool {
        match variable {
            ENV_API_KEY | ENV_API_KEY_FALLBACK => self.api_key.is_some(),
            ENV_BASE_URL => self.base_url.is_some(),
            ENV_TIMEOUT_MS => self.timeout_ms.is_some(),
            ENV_MAX_ATTEMPTS => self.max_attempts.is_some(),
            _ => false,
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Summary block and one card per asteroid.
    Table,
    /// Single JSON object.
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}
