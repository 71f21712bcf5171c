//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the Savoten application.

use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;
use crate::utils::errors::{Result, SavotenError};

/// Initialize logging based on configuration.
///
/// `RUST_LOG` wins over the configured level when set. The returned guard
/// flushes the log file on drop and must be held for the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| SavotenError::Config(format!("Invalid log filter: {e}")))?;

    let (file_layer, guard) = match &config.file_path {
        Some(directory) => {
            ensure_log_directory(directory)?;
            let file_appender = tracing_appender::rolling::daily(directory, "savoten.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer().with_ansi(false).with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let json_layer = config.json.then(|| fmt::layer().json());
    let text_layer = (!config.json).then(|| fmt::layer().with_writer(std::io::stdout));

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| SavotenError::Config(format!("Logging already initialized: {e}")))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Create the log directory (and parents) if missing
fn ensure_log_directory(directory: &str) -> Result<()> {
    std::fs::create_dir_all(directory)?;
    Ok(())
}

/// Log user actions with structured data
pub fn log_user_action(user_id: i64, action: &str, details: Option<&str>) {
    info!(
        user_id = user_id,
        action = action,
        details = details,
        "User action performed"
    );
}

/// Log event management actions
pub fn log_event_action(event_id: i64, action: &str, details: Option<&str>) {
    info!(
        event_id = event_id,
        action = action,
        details = details,
        "Event action performed"
    );
}

/// Log repository operations
pub fn log_repository_operation(operation: &str, entity: &str, id: Option<i64>, success: bool) {
    if success {
        debug!(
            operation = operation,
            entity = entity,
            id = id,
            "Repository operation completed"
        );
    } else {
        warn!(
            operation = operation,
            entity = entity,
            id = id,
            "Repository operation rejected"
        );
    }
}
