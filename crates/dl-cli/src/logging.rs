//! Logging setup for the doclook CLI.

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level.
    pub level: Level,
    /// Whether to include file/line info.
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            include_location: false,
        }
    }
}

impl LoggingConfig {
    /// Verbose configuration for `--verbose` runs.
    pub fn verbose() -> Self {
        Self {
            level: Level::DEBUG,
            include_location: true,
        }
    }
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` overrides the configured level when set.
pub fn init_logging(config: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "dl_core={level},dl_client={level},dl_export={level},dl_cli={level}",
            level = config.level
        ))
    });

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_file(config.include_location)
        .with_line_number(config.include_location)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
