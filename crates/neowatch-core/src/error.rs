use thiserror::Error;

/// Failure of a single feed request for one date.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("feed request timed out after {after_ms} ms")]
    Timeout { after_ms: u64 },

    #[error("feed returned HTTP status {status}")]
    Http { status: u16 },

    #[error("failed to decode feed payload: {0}")]
    Decode(String),

    #[error("feed transport error: {0}")]
    Transport(String),
}

impl FetchError {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Timeout { .. } => "fetch.timeout",
            Self::Http { .. } => "fetch.http",
            Self::Decode(_) => "fetch.decode",
            Self::Transport(_) => "fetch.transport",
        }
    }
}

/// Failure of a whole window load.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("no asteroid data could be loaded for any of the {days} requested days")]
    TotalLoadFailure { days: usize },
}

/// Invalid feed configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("api key cannot be empty")]
    EmptyApiKey,
    #[error("base url cannot be empty")]
    EmptyBaseUrl,
    #[error("timeout must be greater than zero")]
    ZeroTimeout,
    #[error("environment variable '{name}' has invalid value '{value}'")]
    InvalidEnvValue { name: &'static str, value: String },
}

/// Unknown view name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown view '{value}', expected one of all, hazardous, distance, size")]
pub struct ViewParseError {
    pub value: String,
}
