//! New command implementation
//!
//! Mints a fresh shared secret and prints every form the user needs:
//! the typable secret itself, its Base32 transport encoding, and (when
//! an account is configured) the provisioning URI to feed a QR encoder.

use otpin_core::config::toml_config;
use otpin_core::error::OtpinError;
use otpin_core::otp::{keygen, provision};
use tracing::info;

/// Run the new command
pub fn run_new(length: Option<usize>) -> Result<(), OtpinError> {
    let config = if toml_config::config_exists()? {
        Some(toml_config::load_config()?)
    } else {
        None
    };

    let length = length
        .or_else(|| config.as_ref().and_then(|c| c.secret_length))
        .unwrap_or(keygen::DEFAULT_SECRET_LENGTH);

    let secret = keygen::generate_secret_key(length)?;
    info!("Generated a new {}-character secret", length);

    // The generated key material is ASCII by construction
    println!("Secret:  {}", String::from_utf8_lossy(secret.expose()));
    println!("Base32:  {}", secret.to_base32()?);

    match config {
        Some(config) if !config.account.is_empty() => {
            let uri = provision::provisioning_uri(&secret, &config.account, &config.issuer)?;
            println!("URI:     {}", uri);
        }
        _ => {
            println!();
            println!("Run `otpin setup` to configure an account label and get a");
            println!("provisioning URI with future secrets.");
        }
    }

    Ok(())
}
