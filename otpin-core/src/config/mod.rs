//! Configuration module
//!
//! Handles loading and saving otpin configuration from TOML files.

use serde::{Deserialize, Serialize};

pub mod toml_config;

/// otpin configuration structure
///
/// Contains the non-sensitive defaults used when minting secrets and
/// building provisioning URIs. Secrets themselves are never written
/// here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpConfig {
    /// Account label shown by authenticator apps (e.g. an email address)
    pub account: String,

    /// Issuer label shown by authenticator apps (may be empty)
    #[serde(default)]
    pub issuer: String,

    /// Length of newly generated secrets in characters
    pub secret_length: Option<usize>,
}

impl OtpConfig {
    /// Create a new configuration
    pub fn new(account: String, issuer: String) -> Self {
        Self {
            account,
            issuer,
            secret_length: None,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.account.is_empty() {
            return Err("Account cannot be empty".to_string());
        }

        if self.account.chars().any(|c| c.is_control()) {
            return Err("Account contains control characters".to_string());
        }

        if let Some(length) = self.secret_length {
            if length == 0 {
                return Err("Secret length cannot be zero".to_string());
            }
        }

        Ok(())
    }
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            account: String::new(),
            issuer: String::new(),
            secret_length: Some(crate::otp::keygen::DEFAULT_SECRET_LENGTH),
        }
    }
}
