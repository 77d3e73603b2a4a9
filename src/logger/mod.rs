//! Console logging based on `tracing-subscriber`.
//!
//! The notifier runs inside a host's save pipeline, so the only sink is the
//! console; format and level come from [`LogConfig`]. `RUST_LOG` overrides the
//! configured level when set.

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogConfig;
use crate::error::{AppError, AppResult};

/// Initialize the global tracing subscriber from the logging configuration.
///
/// Safe to call more than once: a second initialization (common in tests) is
/// reported as an error by `tracing` and ignored here.
pub fn init_logger(config: &LogConfig) -> AppResult<()> {
    config.validate().map_err(AppError::from)?;

    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(_) => EnvFilter::from_default_env(),
        Err(_) => EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info")),
    };

    let use_ansi = std::io::stdout().is_terminal();

    let result = match config.format.as_str() {
        "json" => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_target(true).with_level(true))
            .try_init(),
        "compact" => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .compact()
                    .with_ansi(use_ansi)
                    .with_target(true)
                    .with_level(true),
            )
            .try_init(),
        _ => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_ansi(use_ansi)
                    .with_target(true)
                    .with_level(true),
            )
            .try_init(),
    };

    // Already-initialized is fine; keep the first subscriber.
    let _ = result;

    Ok(())
}
