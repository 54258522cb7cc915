//! Logging infrastructure for diagram processing
//!
//! Structured logging via `tracing`. The parser, layout and renderer emit
//! spans and events; a binary decides where they go by calling
//! [`init_logging`]. Logs are written to stderr so rendered diagrams on stdout
//! are never interleaved with log lines.
//!
//! # Environment Variables
//!
//! - `LIFELINE_LOG_LEVEL`: log level or full filter directive
//! - `LIFELINE_LOG_FORMAT`: `compact`, `pretty` or `json`
//! - `RUST_LOG`: standard `tracing-subscriber` filter, used when
//!   `LIFELINE_LOG_LEVEL` is unset
//!
//! # Filtering Logs
//!
//! ```bash
//! # Watch every shift the offset calculator applies
//! RUST_LOG="lifeline::sequence::layout=debug" lifeline convert -i flow.txt
//! ```

use std::str::FromStr;

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Log format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact single-line format
    Compact,
    /// Pretty multi-line format with colors
    Pretty,
    /// JSON format for log aggregation
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

/// Resolve the filter directive from the argument, then the environment
fn resolve_level(level: Option<&str>) -> String {
    level
        .map(|s| s.to_string())
        .or_else(|| std::env::var("LIFELINE_LOG_LEVEL").ok())
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| "info".to_string())
}

fn resolve_format(format: Option<&str>) -> Result<LogFormat, String> {
    let name = format
        .map(|s| s.to_string())
        .or_else(|| std::env::var("LIFELINE_LOG_FORMAT").ok())
        .unwrap_or_else(|| "compact".to_string());
    LogFormat::from_str(&name)
}

/// Initialize the tracing subscriber with the given log level and format
///
/// # Arguments
///
/// * `level` - Optional filter directive (trace|debug|info|warn|error|off or a
///   full `EnvFilter` directive). If None, uses `LIFELINE_LOG_LEVEL`, then
///   `RUST_LOG`, then `info`. Unparseable directives fall back to `info`.
/// * `format` - Optional log format (compact|pretty|json). If None, uses
///   `LIFELINE_LOG_FORMAT`, then `compact`.
///
/// # Returns
///
/// Returns an error for an unknown format or when a global subscriber is
/// already installed.
///
/// # Example
///
/// ```rust
/// use lifeline::core::logging::init_logging;
///
/// let _ = init_logging(Some("debug"), Some("pretty"));
/// ```
pub fn init_logging(
    level: Option<&str>,
    format: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let format = resolve_format(format).map_err(|e| format!("Invalid log format: {}", e))?;

    let log_level = resolve_level(level);
    let filter = if log_level == "off" {
        EnvFilter::new("off")
    } else {
        EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info"))
    };

    match format {
        LogFormat::Compact => {
            Registry::default()
                .with(filter)
                .with(
                    fmt::Layer::default()
                        .with_writer(std::io::stderr)
                        .with_target(false)
                        .with_level(true)
                        .with_span_events(FmtSpan::NONE),
                )
                .try_init()?;
        }
        LogFormat::Pretty => {
            Registry::default()
                .with(filter)
                .with(
                    fmt::Layer::default()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true)
                        .with_span_events(FmtSpan::CLOSE)
                        .pretty(),
                )
                .try_init()?;
        }
        LogFormat::Json => {
            Registry::default()
                .with(filter)
                .with(
                    fmt::Layer::default()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_span_events(FmtSpan::CLOSE)
                        .json(),
                )
                .try_init()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!(LogFormat::from_str("compact").unwrap(), LogFormat::Compact);
        assert_eq!(LogFormat::from_str("pretty").unwrap(), LogFormat::Pretty);
        assert_eq!(LogFormat::from_str("JSON").unwrap(), LogFormat::Json);
        assert!(LogFormat::from_str("invalid").is_err());
    }

    #[test]
    fn test_explicit_arguments_win() {
        assert_eq!(resolve_level(Some("trace")), "trace");
        assert_eq!(resolve_format(Some("pretty")), Ok(LogFormat::Pretty));
    }

    #[test]
    fn test_unknown_format_is_rejected_before_install() {
        assert!(init_logging(Some("info"), Some("xml")).is_err());
    }
}
