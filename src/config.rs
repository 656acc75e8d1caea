// model = "claude-opus-4-5"
// created = 2026-10-19
// modified = 2026-10-19
// driver = "Isaac Clayton"

//! Feed configuration.
//!
//! There is one knob: how many items a feed returns. It defaults to 10.

use crate::error::ConfigError;

/// Number of items a feed returns unless configured otherwise.
pub const DEFAULT_FEED_LEN: usize = 10;

/// Largest feed length accepted.
pub const MAX_FEED_LEN: usize = 1024;

/// Environment variable read by [`FeedConfig::from_env`].
pub const FEED_LEN_ENV: &str = "CHIRP_FEED_LEN";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeedConfig {
    /// Maximum number of items returned by a feed request.
    pub feed_len: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        return FeedConfig {
            feed_len: DEFAULT_FEED_LEN,
        };
    }
}

impl FeedConfig {
    pub fn new(feed_len: usize) -> FeedConfig {
        return FeedConfig { feed_len };
    }

    pub fn with_feed_len(mut self, feed_len: usize) -> FeedConfig {
        self.feed_len = feed_len;
        return self;
    }

    /// Load from the environment, falling back to defaults for unset variables.
    ///
    /// The result is not validated; pass it through [`FeedConfig::validate`]
    /// or [`Feed::with_config`](crate::Feed::with_config).
    pub fn from_env() -> Result<FeedConfig, ConfigError> {
        return Self::from_lookup(|var| std::env::var(var).ok());
    }

    /// Like [`FeedConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<FeedConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = FeedConfig::default();
        if let Some(value) = lookup(FEED_LEN_ENV) {
            config.feed_len = value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                var: FEED_LEN_ENV,
                value: value.clone(),
            })?;
        }
        return Ok(config);
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.feed_len == 0 {
            return Err(ConfigError::ZeroFeedLen);
        }
        if self.feed_len > MAX_FEED_LEN {
            return Err(ConfigError::FeedLenTooLarge {
                len: self.feed_len,
                max: MAX_FEED_LEN,
            });
        }
        return Ok(());
    }
}
