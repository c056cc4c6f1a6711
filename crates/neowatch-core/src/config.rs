//! Feed client configuration.
//!
//! # Environment Variables
//!
//! | Setting | Primary Env Var | Fallback Env Var | Default |
//! |---------|-----------------|------------------|---------|
//! | API key | `NEOWATCH_API_KEY` | `NASA_API_KEY` | `DEMO_KEY` |
//! | Base URL | `NEOWATCH_BASE_URL` | - | NeoWs feed endpoint |
//! | Timeout | `NEOWATCH_TIMEOUT_MS` | - | `5000` |
//! | Attempts | `NEOWATCH_MAX_ATTEMPTS` | - | `2` |

use std::env;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://api.nasa.gov/neo/rest/v1/feed";
pub const DEFAULT_API_KEY: &str = "DEMO_KEY";
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 2;

pub const ENV_API_KEY: &str = "NEOWATCH_API_KEY";
pub const ENV_API_KEY_FALLBACK: &str = "NASA_API_KEY";
pub const ENV_BASE_URL: &str = "NEOWATCH_BASE_URL";
pub const ENV_TIMEOUT_MS: &str = "NEOWATCH_TIMEOUT_MS";
pub const ENV_MAX_ATTEMPTS: &str = "NEOWATCH_MAX_ATTEMPTS";

/// Settings for [`NeoFeedClient`](crate::NeoFeedClient).
#[derive(Clone, PartialEq, Eq)]
pub struct FeedConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout_ms: u64,
    pub max_attempts: u32,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            api_key: String::from(DEFAULT_API_KEY),
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

// The api key stays out of debug output so it never reaches the logs.
impl std::fmt::Debug for FeedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.timeout_ms)
            .field("max_attempts", &self.max_attempts)
            .finish()
    }
}

impl FeedConfig {
    /// Builds a configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds and validates a configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self::read_lookup(lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Applies the variables `lookup` knows over the defaults.
    ///
    /// Only malformed numbers are rejected here. Callers layering further
    /// overrides on top must call [`validate`](Self::validate) themselves.
    pub fn read_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(api_key) = lookup(ENV_API_KEY).or_else(|| lookup(ENV_API_KEY_FALLBACK)) {
            config.api_key = api_key;
        }
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            config.base_url = base_url;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            config.timeout_ms = parse_env(ENV_TIMEOUT_MS, raw)?;
        }
        if let Some(raw) = lookup(ENV_MAX_ATTEMPTS) {
            config.max_attempts = parse_env(ENV_MAX_ATTEMPTS, raw)?;
        }

        Ok(config)
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(name: &'static str, raw: String) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidEnvValue { name, value: raw })
}
