use std::io;

use thiserror::Error;

/// Library-wide error type for mlfleet operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration file missing.
    #[error("Configuration file not found: {0}")]
    ConfigMissing(String),

    /// TOML parsing error, including missing or mistyped keys.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Configuration content failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Team identifier is invalid.
    #[error(
        "Invalid team name '{0}': must start with a letter or digit and contain only letters, digits, hyphens, or underscores (max 63 chars)"
    )]
    InvalidTeamName(String),

    /// Port allocation ran past the valid port range.
    #[error("Port for team '{team}' overflows: base port {base_port} + index {index} exceeds 65535")]
    PortOverflow { team: String, base_port: u16, index: usize },

    /// Template registration or rendering failed.
    #[error("Template '{name}' failed: {details}")]
    Template { name: String, details: String },

    /// External address lookup failed.
    #[error("External address lookup via {url} failed: {details}")]
    HostLookup { url: String, details: String },

    /// Output path escapes the output directory.
    #[error("Path traversal detected: {0}")]
    PathTraversal(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::InvalidConfig(message.into())
    }

    pub(crate) fn template<N: Into<String>>(name: N, err: impl std::fmt::Display) -> Self {
        AppError::Template { name: name.into(), details: err.to_string() }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::ConfigMissing(_) => io::ErrorKind::NotFound,
            AppError::TomlParse(_)
            | AppError::InvalidConfig(_)
            | AppError::InvalidTeamName(_)
            | AppError::PortOverflow { .. }
            | AppError::PathTraversal(_) => io::ErrorKind::InvalidInput,
            AppError::Template { .. } => io::ErrorKind::InvalidData,
            AppError::HostLookup { .. } => io::ErrorKind::Other,
        }
    }
}
