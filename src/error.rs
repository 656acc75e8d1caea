// model = "claude-opus-4-5"
// created = 2026-10-19
// modified = 2026-10-19
// driver = "Isaac Clayton"

//! Error types.
//!
//! The feed operations themselves are total. The only core failure is running
//! the clock out of times; everything else here belongs to configuration and
//! the script front end.

use thiserror::Error;

/// Errors from feed operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FeedError {
    /// Every logical time has been handed out.
    #[error("logical clock exhausted: no times left to assign")]
    ClockExhausted,
}

/// Errors from building or loading a [`FeedConfig`](crate::FeedConfig).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("feed length must be at least 1")]
    ZeroFeedLen,

    #[error("feed length {len} exceeds the maximum of {max}")]
    FeedLenTooLarge { len: usize, max: usize },

    #[error("invalid value {value:?} for environment variable {var}")]
    InvalidEnv { var: &'static str, value: String },
}

/// Errors from parsing a feed script. Lines are 1-based.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command {command:?}")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: `{command}` is missing its {argument} argument")]
    MissingArgument {
        line: usize,
        command: &'static str,
        argument: &'static str,
    },

    #[error("line {line}: {argument} {value:?} is not an integer")]
    InvalidInteger {
        line: usize,
        argument: &'static str,
        value: String,
    },

    #[error("line {line}: unexpected argument {value:?} after `{command}`")]
    TrailingArgument {
        line: usize,
        command: &'static str,
        value: String,
    },
}

impl ScriptError {
    /// The 1-based line the error was found on.
    pub fn line(&self) -> usize {
        return match self {
            ScriptError::UnknownCommand { line, .. } => *line,
            ScriptError::MissingArgument { line, .. } => *line,
            ScriptError::InvalidInteger { line, .. } => *line,
            ScriptError::TrailingArgument { line, .. } => *line,
        };
    }
}

/// Errors from installing the log subscriber.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LoggingError {
    #[error("unknown log level {0:?}")]
    UnknownLevel(String),

    #[error("failed to install log subscriber: {0}")]
    Init(String),
}
