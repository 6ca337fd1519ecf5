//! Logging initialization.
//!
//! Diagnostics go to stderr through `tracing-subscriber`; stdout is reserved
//! for results so `--json` output stays machine readable.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{LogFormat, LoggingConfig};
use crate::error::{AnalystError, Result};

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Must be called at
/// most once per process.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let registry = tracing_subscriber::registry().with(env_filter);
    let fmt = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let result = match config.format {
        LogFormat::Compact => registry.with(fmt.compact()).try_init(),
        LogFormat::Pretty => registry.with(fmt.pretty()).try_init(),
        LogFormat::Json => registry.with(fmt.json()).try_init(),
    };

    result.map_err(|e| {
        AnalystError::Logging(format!(
            "failed to initialize {} tracing subscriber: {}",
            config.format, e
        ))
    })
}
