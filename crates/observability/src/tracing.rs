//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Human-readable multi-line output.
    Pretty,
}

impl LogFormat {
    /// Parse a format name. Returns `None` for unknown values.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Some(LogFormat::Json),
            "pretty" => Some(LogFormat::Pretty),
            _ => None,
        }
    }

    /// Read `LOG_FORMAT`, returning the format and the rejected value if any.
    fn from_env_raw() -> (Self, Option<String>) {
        Self::from_setting(std::env::var(LOG_FORMAT_ENV).ok())
    }

    fn from_setting(raw: Option<String>) -> (Self, Option<String>) {
        match raw {
            Some(raw) => match Self::parse(&raw) {
                Some(format) => (format, None),
                None => (LogFormat::default(), Some(raw)),
            },
            None => (LogFormat::default(), None),
        }
    }

    /// Format selected by `LOG_FORMAT` (default: JSON).
    pub fn from_env() -> Self {
        Self::from_env_raw().0
    }
}

/// Initialize tracing/logging for the process from the environment.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let (format, rejected) = LogFormat::from_env_raw();
    init_with(format);

    if let Some(raw) = rejected {
        tracing::warn!(value = %raw, "unknown {LOG_FORMAT_ENV}; falling back to json");
    }
}

/// Initialize tracing/logging with an explicit format.
///
/// The filter still comes from `RUST_LOG` (default `info`).
pub fn init_with(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let _ = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
}
