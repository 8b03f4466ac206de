//! Configuration errors
//!
//! Drawing itself never fails; the only thing that can go wrong is the
//! host handing us bad numbers, and that is reported once at construction.

use std::fmt;

/// Errors raised while building settings or a particle configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Host-supplied JSON could not be parsed.
    Parse(serde_json::Error),
    /// A numeric field is out of range or not a number.
    InvalidValue {
        field: &'static str,
        reason: &'static str,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: &'static str) -> Self {
        ConfigError::InvalidValue { field, reason }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "Failed to parse settings: {}", e),
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "Invalid value for `{}`: {}", field, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            ConfigError::InvalidValue { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}
