//! Quote CLI configuration

use std::path::PathBuf;

use clap::{Args, Parser};
use jiff::Timestamp;

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Quote a catalog item from the command line
#[derive(Debug, Parser)]
#[command(name = "fitout-quote", about = "Quote van fit-out parts from a pricing catalog", long_about = None)]
pub struct QuoteConfig {
    /// Path to a YAML catalog fixture
    #[arg(short, long, env = "FITOUT_CATALOG")]
    pub catalog: PathBuf,

    /// Item key within the catalog
    #[arg(short, long)]
    pub item: String,

    /// Number of units to quote
    #[arg(short, long, default_value_t = 1)]
    pub quantity: u32,

    /// Point in time to price at (RFC 3339); defaults to now
    #[arg(long)]
    pub at: Option<Timestamp>,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl QuoteConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// The point in time to price at.
    pub fn now(&self) -> Timestamp {
        self.at.unwrap_or_else(Timestamp::now)
    }
}
