//! TOML configuration file I/O
//!
//! Handles loading and saving otpin configuration to/from TOML files
//! in the user's configuration directory.

use crate::config::OtpConfig;
use crate::error::{ConfigError, OtpinError};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default configuration file name
const CONFIG_FILE_NAME: &str = "config.toml";

/// Get the default configuration directory
///
/// Returns ~/.config/otpin, or the OTPIN_CONFIG_DIR environment
/// variable if set (used by the test suites).
pub fn get_config_dir() -> Result<PathBuf, OtpinError> {
    if let Ok(config_dir) = std::env::var("OTPIN_CONFIG_DIR") {
        return Ok(PathBuf::from(config_dir));
    }

    let home = std::env::var("HOME").map_err(|_| {
        OtpinError::Config(ConfigError::IoError {
            message: "HOME environment variable not set".to_string(),
        })
    })?;

    Ok(PathBuf::from(home).join(".config").join("otpin"))
}

/// Get the default configuration file path
pub fn get_config_path() -> Result<PathBuf, OtpinError> {
    let config_dir = get_config_dir()?;
    Ok(config_dir.join(CONFIG_FILE_NAME))
}

/// Load configuration from the default TOML file
pub fn load_config() -> Result<OtpConfig, OtpinError> {
    let config_path = get_config_path()?;
    load_config_from_path(&config_path)
}

/// Load configuration from a specific TOML file
pub fn load_config_from_path<P: AsRef<Path>>(path: P) -> Result<OtpConfig, OtpinError> {
    let contents = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => OtpinError::Config(ConfigError::LoadFailed {
            path: path.as_ref().to_string_lossy().to_string(),
        }),
        _ => OtpinError::Config(ConfigError::IoError {
            message: format!("Failed to read config file: {}", e),
        }),
    })?;

    let config: OtpConfig = toml::from_str(&contents).map_err(|e| {
        OtpinError::Config(ConfigError::IoError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })?;

    config
        .validate()
        .map_err(|e| OtpinError::Config(ConfigError::ValidationError { message: e }))?;

    debug!("Loaded configuration from {:?}", path.as_ref());
    Ok(config)
}

/// Save configuration to the default TOML file
pub fn save_config(config: &OtpConfig) -> Result<(), OtpinError> {
    let config_path = get_config_path()?;
    save_config_to_path(config, &config_path)
}

/// Save configuration to a specific TOML file
pub fn save_config_to_path<P: AsRef<Path>>(config: &OtpConfig, path: P) -> Result<(), OtpinError> {
    // Validate configuration before saving
    config
        .validate()
        .map_err(|e| OtpinError::Config(ConfigError::ValidationError { message: e }))?;

    // Ensure config directory exists
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            OtpinError::Config(ConfigError::IoError {
                message: format!("Failed to create config directory: {}", e),
            })
        })?;
    }

    let contents = toml::to_string_pretty(config)?;

    std::fs::write(&path, contents).map_err(|_e| {
        OtpinError::Config(ConfigError::SaveFailed {
            path: path.as_ref().to_string_lossy().to_string(),
        })
    })?;

    debug!("Saved configuration to {:?}", path.as_ref());
    Ok(())
}

/// Check if a configuration file exists
pub fn config_exists() -> Result<bool, OtpinError> {
    let config_path = get_config_path()?;
    Ok(config_path.exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("test_config.toml");

        let original_config = OtpConfig {
            account: "alice@example.com".to_string(),
            issuer: "Example".to_string(),
            secret_length: Some(16),
        };

        save_config_to_path(&original_config, &config_path).unwrap();
        let loaded_config = load_config_from_path(&config_path).unwrap();

        assert_eq!(original_config, loaded_config);
    }

    #[test]
    fn test_missing_config_reports_load_failed() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("nope.toml");

        let error = load_config_from_path(&missing).unwrap_err();
        assert!(matches!(
            error,
            OtpinError::Config(ConfigError::LoadFailed { .. })
        ));
    }

    #[test]
    fn test_invalid_config_validation() {
        let invalid_configs = vec![
            OtpConfig::new("".to_string(), "Example".to_string()),
            OtpConfig {
                account: "alice".to_string(),
                issuer: String::new(),
                secret_length: Some(0),
            },
        ];

        for config in invalid_configs {
            assert!(config.validate().is_err());
        }
    }

    #[test]
    fn test_issuer_defaults_to_empty() {
        let config: OtpConfig = toml::from_str("account = \"alice\"\n").unwrap();
        assert_eq!(config.issuer, "");
        assert_eq!(config.secret_length, None);
    }
}
