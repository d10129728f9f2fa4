//! Application configuration management.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Balance sheet report configuration.
    pub report: ReportConfig,
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

/// Balance sheet report configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// JSON file holding the exported account rows.
    pub accounts_path: PathBuf,
    /// JSON file holding the exported journal lines.
    ///
    /// When absent, the balances stored on the account rows are used as-is.
    #[serde(default)]
    pub journal_path: Option<PathBuf>,
    /// Reference date of the statement (defaults to today).
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
    /// First day of the period whose journal lines are summed.
    #[serde(default)]
    pub period_start: Option<NaiveDate>,
    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,
}

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable statement.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON log lines instead of the human-readable format.
    #[serde(default)]
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

fn default_log_filter() -> String {
    "razao=info".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, lowest precedence first: `config/default.toml`,
    /// `config/{RUN_MODE}.toml`, then `RAZAO__SECTION__KEY` variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("RAZAO")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
