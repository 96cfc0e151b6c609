//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info,blog_api=debug,blog_infra=debug";

/// Output format of the fmt layer, from `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    /// Unset or unrecognised values fall back to `Pretty`.
    fn parse(value: Option<&str>) -> (Self, Option<String>) {
        match value.map(|v| v.trim().to_ascii_lowercase()) {
            None => (LogFormat::Pretty, None),
            Some(v) if v == "pretty" || v.is_empty() => (LogFormat::Pretty, None),
            Some(v) if v == "json" => (LogFormat::Json, None),
            Some(other) => (LogFormat::Pretty, Some(other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub format: LogFormat,
    /// Also reported to MongoDB as the driver app name.
    pub service_name: String,
    /// A `LOG_FORMAT` value that was not understood, reported once logging is up.
    unknown_format: Option<String>,
}

impl TelemetryConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var("LOG_FORMAT").ok().as_deref(),
            std::env::var("SERVICE_NAME").ok(),
        )
    }

    fn from_values(log_format: Option<&str>, service_name: Option<String>) -> Self {
        let (format, unknown_format) = LogFormat::parse(log_format);
        Self {
            format,
            service_name: service_name
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "blog-api".to_string()),
            unknown_format,
        }
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init_telemetry(config: &TelemetryConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let registry = tracing_subscriber::registry().with(env_filter);

    match config.format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer().pretty()).init(),
    }

    if let Some(value) = &config.unknown_format {
        tracing::warn!(log_format = %value, "Unknown LOG_FORMAT, using pretty output");
    }
    tracing::info!(
        service = %config.service_name,
        format = ?config.format,
        "Logging initialized"
    );
}
