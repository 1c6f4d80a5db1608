//! Error type for configuration and host setup.

use thiserror::Error;

/// Errors raised while configuring effects or attaching them to a page.
///
/// Per-frame simulation and drawing never fail; only setup paths return these.
#[derive(Error, Debug)]
pub enum AurumError {
    /// Configuration JSON could not be parsed.
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Configuration parsed but holds an unusable value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A required page element was not found.
    #[error("Element '{0}' not found")]
    MissingElement(String),

    /// A browser object or drawing context could not be obtained.
    #[error("Context unavailable: {0}")]
    ContextUnavailable(String),
}

/// Result alias used by setup functions.
pub type Result<T> = std::result::Result<T, AurumError>;
