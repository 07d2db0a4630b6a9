//! Logging utilities
//!
//! Diagnostics go to stderr so the report on stdout stays pipeable.

use tracing::{warn, Level};
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Log level configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn to_tracing_level(self) -> Level {
        match self {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }
}

fn level_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::new(format!("jasmine_console={}", level.to_tracing_level()))
}

/// Build the filter; an explicit directive string takes precedence over the level
pub fn build_filter(level: LogLevel, directives: Option<&str>) -> Result<EnvFilter, ParseError> {
    match directives {
        Some(directives) => EnvFilter::try_new(directives),
        None => Ok(level_filter(level)),
    }
}

/// Initialize the logger with specified level
///
/// An invalid directive string falls back to `level` and is reported once the
/// subscriber is installed.
pub fn init_logger(level: LogLevel, directives: Option<&str>) {
    let (filter, rejected) = match build_filter(level, directives) {
        Ok(filter) => (filter, None),
        Err(err) => (level_filter(level), Some(err)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    if let Some(err) = rejected {
        warn!(
            "Ignoring invalid log filter {:?}: {err}",
            directives.unwrap_or_default()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_from_str() {
        assert_eq!(LogLevel::from_str("info"), Some(LogLevel::Info));
        assert_eq!(LogLevel::from_str("DEBUG"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::from_str("warning"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::from_str("unknown"), None);
    }

    #[test]
    fn test_build_filter() {
        use tracing::level_filters::LevelFilter;

        let filter = build_filter(LogLevel::Debug, None).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));

        let filter = build_filter(LogLevel::Debug, Some("trace")).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn test_build_filter_reports_invalid_directives() {
        assert!(build_filter(LogLevel::Warn, Some("jasmine_console=loud")).is_err());
    }
}
