use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Environment error: {0}")]
    #[diagnostic(code(calendar_events::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(calendar_events::config))]
    Config(String),

    #[error("Entity error: {0}")]
    #[diagnostic(code(calendar_events::entity))]
    Entity(String),

    #[error("Failed to read {}: {source}", path.display())]
    #[diagnostic(code(calendar_events::read))]
    Read {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(code(calendar_events::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(calendar_events::serialization))]
    Serialization(String),
}

// Implement From for TOML serialization errors
impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

// Implement From for TOML deserialization errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type EventResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Invalid environment variable: {}", var))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create entity errors
pub fn entity_error(message: &str) -> Error {
    Error::Entity(message.to_string())
}
