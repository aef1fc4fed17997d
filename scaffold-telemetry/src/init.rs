//! Telemetry initialization

use std::sync::OnceLock;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: OnceLock<Result<(), String>> = OnceLock::new();

/// Output format of the console log layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human readable lines.
    #[default]
    Pretty,
    /// One JSON object per line, for log collectors.
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = TelemetryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(TelemetryError::Format(other.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("unknown log format '{0}' (expected 'pretty' or 'json')")]
    Format(String),

    #[error("failed to initialize telemetry: {0}")]
    Init(String),
}

/// Initialize console logging with the default (pretty) format.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Only the first
/// call in a process installs a subscriber; later calls return the first
/// call's outcome.
///
/// # Example
/// ```
/// use scaffold_telemetry::init_telemetry;
/// init_telemetry("my-agent-service").expect("Failed to initialize telemetry");
/// ```
pub fn init_telemetry(service_name: &str) -> Result<(), TelemetryError> {
    init_telemetry_with_format(service_name, LogFormat::Pretty)
}

/// Initialize console logging with an explicit output format.
pub fn init_telemetry_with_format(
    service_name: &str,
    format: LogFormat,
) -> Result<(), TelemetryError> {
    INIT.get_or_init(|| install(service_name, format)).clone().map_err(TelemetryError::Init)
}

fn install(service_name: &str, format: LogFormat) -> Result<(), String> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| e.to_string())?;

    let registry = tracing_subscriber::registry().with(filter);
    let installed = match format {
        LogFormat::Pretty => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_line_number(true),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_line_number(true),
            )
            .try_init(),
    };
    installed.map_err(|e| e.to_string())?;

    tracing::info!(service.name = service_name, ?format, "Telemetry initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_format() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!(" Pretty ".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert!(matches!("xml".parse::<LogFormat>(), Err(TelemetryError::Format(_))));
    }

    #[test]
    fn test_init_is_idempotent() {
        let first = init_telemetry("telemetry-test").is_ok();
        let second = init_telemetry_with_format("telemetry-test", LogFormat::Json).is_ok();
        assert_eq!(first, second);
    }
}
