//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_changelog(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_changelog(config: &Config) -> Result<()> {
    if config.changelog.file.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.file".to_string(),
            message: "file cannot be empty".to_string(),
        }
        .into());
    }

    if config.changelog.heading_prefix.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.heading_prefix".to_string(),
            message: "heading prefix cannot be empty".to_string(),
        }
        .into());
    }

    if config.changelog.section_delimiter.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.section_delimiter".to_string(),
            message: "section delimiter cannot be empty".to_string(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_empty_file() {
        let mut config = Config::default();
        config.changelog.file = PathBuf::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_empty_heading_prefix() {
        let mut config = Config::default();
        config.changelog.heading_prefix = String::new();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("changelog.heading_prefix"));
    }

    #[test]
    fn test_validate_empty_delimiter() {
        let mut config = Config::default();
        config.changelog.section_delimiter = String::new();
        assert!(validate_config(&config).is_err());
    }
}
