//! Error types for relnotes

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using RelnotesError
pub type Result<T> = std::result::Result<T, RelnotesError>;

/// Main error type for relnotes operations
#[derive(Debug, Error)]
pub enum RelnotesError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Changelog-related errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Changelog-related errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// Empty version identifier
    #[error("Version identifier cannot be empty")]
    EmptyVersion,

    /// No section heading matches the requested version
    #[error("No changelog section found for version {version}")]
    VersionNotFound { version: String },

    /// Changelog file could not be read
    #[error("Failed to read changelog at {}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Section pattern failed to compile
    #[error("Invalid section pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

impl ChangelogError {
    /// Whether this error means the requested version has no section
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::VersionNotFound { .. })
    }
}
