use tracing_subscriber::EnvFilter;

use super::config::{LogFormat, LoggingConfig};

/// Installs the global subscriber once for the entire application.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn setup_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let result = match config.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    if let Err(e) = result {
        tracing::warn!(error = %e, "Tracing was already initialized");
    }
}
