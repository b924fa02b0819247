//! Uri command implementation
//!
//! Prints the otpauth:// provisioning URI for an existing secret, using
//! configured account/issuer labels unless overridden by flags.

use otpin_core::config::toml_config;
use otpin_core::error::{ConfigError, OtpinError};
use otpin_core::otp::provision;

/// Run the uri command
///
/// Outputs only the URI to stdout for machine-parsable usage.
pub fn run_uri(
    secret: Option<&str>,
    ascii: bool,
    account: Option<&str>,
    issuer: Option<&str>,
) -> Result<(), OtpinError> {
    let secret = crate::cli::read_secret(secret, ascii)?;
    let (account, issuer) = resolve_labels(account, issuer)?;

    let uri = provision::provisioning_uri(&secret, &account, &issuer)?;
    println!("{}", uri);

    Ok(())
}

/// Resolve account and issuer labels from flags, falling back to the
/// saved configuration
fn resolve_labels(
    account: Option<&str>,
    issuer: Option<&str>,
) -> Result<(String, String), OtpinError> {
    if let (Some(account), Some(issuer)) = (account, issuer) {
        return Ok((account.to_string(), issuer.to_string()));
    }

    let config = if toml_config::config_exists()? {
        Some(toml_config::load_config()?)
    } else {
        None
    };

    let account = match account {
        Some(value) => value.to_string(),
        None => config
            .as_ref()
            .map(|c| c.account.clone())
            .unwrap_or_default(),
    };

    if account.is_empty() {
        return Err(OtpinError::Config(ConfigError::ValidationError {
            message: "No account label configured: pass --account or run `otpin setup`"
                .to_string(),
        }));
    }

    let issuer = match issuer {
        Some(value) => value.to_string(),
        None => config.map(|c| c.issuer).unwrap_or_default(),
    };

    Ok((account, issuer))
}
