//! Structured error types for configuration loading, saving and argument parsing.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error categories for programmatic handling by the caller.
///
/// Each category implies a different recovery hint for the user: parse errors
/// show the raw parser message, validation errors are followed by the default
/// INI template, argument errors by the usage text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The file could not be opened or is not valid INI.
    Parse,
    /// A required key is missing or a value has the wrong type.
    Validation,
    /// The command line could not be parsed.
    Arguments,
    /// The configuration could not be written.
    Save,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Parse => write!(f, "parse"),
            ErrorKind::Validation => write!(f, "validation"),
            ErrorKind::Arguments => write!(f, "arguments"),
            ErrorKind::Save => write!(f, "save"),
        }
    }
}

/// Error raised by the configuration aggregate and the argument parser.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {reason}", path.display())]
    Syntax { path: PathBuf, reason: String },

    #[error("Required key \"{0}\" missing.")]
    MissingKey(String),

    #[error("Key \"{key}\" is of invalid type.")]
    InvalidType { key: String, value: String },

    #[error("cannot write config file {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Arguments(#[from] clap::Error),
}

impl ConfigError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::Read { .. } | ConfigError::Syntax { .. } => ErrorKind::Parse,
            ConfigError::MissingKey(_) | ConfigError::InvalidType { .. } => ErrorKind::Validation,
            ConfigError::Arguments(_) => ErrorKind::Arguments,
            ConfigError::Save { .. } => ErrorKind::Save,
        }
    }

    /// The configuration key this error is about, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            ConfigError::MissingKey(key) | ConfigError::InvalidType { key, .. } => Some(key),
            _ => None,
        }
    }

    // Convenience constructors

    pub fn missing_key(key: &str) -> Self {
        ConfigError::MissingKey(key.to_string())
    }

    pub fn invalid_type(key: &str, value: &str) -> Self {
        ConfigError::InvalidType {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    pub fn syntax(path: impl Into<PathBuf>, reason: impl fmt::Display) -> Self {
        ConfigError::Syntax {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
