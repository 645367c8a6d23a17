//! Logging bootstrap
//!
//! Logs go to stderr through `flexi_logger`. `RUST_LOG` takes precedence
//! over the level picked from the command line.

use crate::error::{DisciplineError, Result};
use flexi_logger::{Logger, LoggerHandle};
use log::debug;

/// Map the number of `-v` flags to a log level
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Start the logger. Keep the returned handle alive for the whole process.
pub fn init_logging(level: &str) -> Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str(level)
        .map_err(|e| DisciplineError::Logging(format!("invalid log level `{}`: {}", level, e)))?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
        .map_err(|e| DisciplineError::Logging(format!("failed to start logger: {}", e)))?;

    debug!(
        "event=logging_init level={} version={}",
        level,
        env!("CARGO_PKG_VERSION")
    );
    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for_verbosity(0), "warn");
        assert_eq!(level_for_verbosity(1), "info");
        assert_eq!(level_for_verbosity(2), "debug");
        assert_eq!(level_for_verbosity(9), "trace");
    }
}
