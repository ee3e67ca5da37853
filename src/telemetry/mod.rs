//! Telemetry and logging configuration using env_logger.
//!
//! Logging goes to stderr so it never mixes with resolved paths printed on
//! stdout. The mapping-file cache is the main client: background refresh
//! failures are logged here instead of interrupting commands.

use anyhow::Result;
use log::{Level, error, info, warn};
use std::sync::Once;

static INIT: Once = Once::new();

/// Log message with context
pub struct LogMessage {
    /// The message to log
    pub message: String,

    /// The module where the log originated
    pub module: &'static str,

    /// Optional key-value pairs of additional context
    pub context: Option<Vec<(&'static str, String)>>,
}

/// Initialize env_logger-based logging with stderr output.
///
/// Safe to call more than once; only the first call configures the global
/// logger.
pub fn init() -> Result<()> {
    let mut result = Ok(());

    INIT.call_once(|| match setup_telemetry() {
        Ok(_) => {
            info!("Logging initialized with stderr output");
        }
        Err(e) => {
            // cannot use logging yet since it failed to initialize
            eprintln!("Failed to initialize logging: {}", e);
            result = Err(e);
        }
    });

    result
}

/// Log a message with the given level and context
///
/// # Example
///
/// ```
/// use pathport::telemetry::{log_with_context, LogMessage};
/// use log::Level;
///
/// log_with_context(
///     Level::Warn,
///     LogMessage {
///         message: "Map file refresh failed".to_string(),
///         module: "mapfile",
///         context: Some(vec![
///             ("path", "/path/to/map.json".to_string()),
///         ]),
///     }
/// );
/// ```
pub fn log_with_context(level: Level, msg: LogMessage) {
    match level {
        Level::Error => {
            error!(target: msg.module, "{}", format_context(&msg));
        }
        Level::Warn => {
            warn!(target: msg.module, "{}", format_context(&msg));
        }
        Level::Info => {
            info!(target: msg.module, "{}", format_context(&msg));
        }
        Level::Debug => {
            log::debug!(target: msg.module, "{}", format_context(&msg));
        }
        Level::Trace => {
            log::trace!(target: msg.module, "{}", format_context(&msg));
        }
    }
}

/// Format a log message with its context for display
fn format_context(msg: &LogMessage) -> String {
    if let Some(context) = &msg.context {
        let context_str = context
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(", ");

        format!("{} [{}]", msg.message, context_str)
    } else {
        msg.message.clone()
    }
}

/// Set up the logging pipeline
fn setup_telemetry() -> Result<()> {
    env_logger::Builder::new()
        .filter(None, log::LevelFilter::Info)
        .format_timestamp(None)
        .format_target(true)
        .format_module_path(false)
        .init();

    Ok(())
}
