//! Logging setup
//!
//! Installs the global `tracing` subscriber from [`LoggingConfig`].

mod types;

pub use types::LogLevel;

use crate::config::{LogFormat, LoggingConfig};
use crate::utils::error::{PlacementError, Result};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level when set. SeaORM statement
/// logging arrives through the `log` facade and is filtered the same way.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level: LogLevel = config.level.parse()?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            EnvFilter::default().add_directive(level.level_filter().into())
        });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };

    installed.map_err(|e| PlacementError::config(format!("Failed to install logger: {}", e)))
}
