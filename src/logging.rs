// model = "claude-opus-4-5"
// created = 2026-10-19
// modified = 2026-10-19
// driver = "Isaac Clayton"

//! Log subscriber setup for the `chirp` binary.
//!
//! The library only emits `tracing` events; it never installs a subscriber.
//! Logs go to stderr so that stdout carries nothing but command output.
//! `RUST_LOG` takes precedence over the configured level.

use std::fmt;
use std::str::FromStr;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt as subscriber_fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::error::LoggingError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        return match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
    }
}

impl FromStr for LogLevel {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<LogLevel, LoggingError> {
        return match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(LoggingError::UnknownLevel(s.to_string())),
        };
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str(self.as_str());
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogConfig {
    pub level: LogLevel,
    /// Include the module path of each event.
    pub with_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        return LogConfig {
            level: LogLevel::default(),
            with_target: false,
        };
    }
}

impl LogConfig {
    pub fn new(level: LogLevel) -> LogConfig {
        return LogConfig {
            level,
            ..LogConfig::default()
        };
    }

    pub fn with_target(mut self, enabled: bool) -> LogConfig {
        self.with_target = enabled;
        return self;
    }

    /// The filter this config installs when `RUST_LOG` is unset.
    pub fn filter(&self) -> EnvFilter {
        return EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.level.as_str()));
    }
}

/// Install a global stderr subscriber. Fails if one is already installed.
pub fn init_logging_with_config(config: LogConfig) -> Result<(), LoggingError> {
    let layer = subscriber_fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(config.with_target);

    tracing_subscriber::registry()
        .with(config.filter())
        .with(layer)
        .try_init()
        .map_err(|err| LoggingError::Init(err.to_string()))?;
    return Ok(());
}
