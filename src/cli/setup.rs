//! Setup command implementation
//!
//! Interactive command that records the account and issuer labels used
//! when minting secrets and building provisioning URIs. Secrets are
//! never written to the configuration file.

use crate::cli::prompt_input;
use otpin_core::{
    config::{toml_config, OtpConfig},
    error::{ConfigError, OtpinError},
    otp::keygen,
};

/// Run the setup command
pub fn run_setup() -> Result<(), OtpinError> {
    println!("otpin setup");
    println!("===========");
    println!();
    println!("Configuration will be saved to ~/.config/otpin/config.toml");
    println!();

    // Check if already configured
    if let Ok(true) = toml_config::config_exists() {
        println!("Existing configuration detected.");
        if !prompt_yes_no("Overwrite existing setup? (y/N)", false)? {
            println!("Setup cancelled.");
            return Ok(());
        }
        println!();
    }

    let config = collect_config()?;

    config.validate().map_err(|e| {
        OtpinError::Config(ConfigError::ValidationError {
            message: format!("Configuration validation failed: {}", e),
        })
    })?;

    toml_config::save_config(&config)?;

    println!();
    println!("Setup complete. You can now use:");
    println!("  otpin new             - Mint a new secret");
    println!("  otpin pin <SECRET>    - Print the current pin");
    println!("  otpin verify <PIN>    - Check a pin against a secret");

    Ok(())
}

/// Collect configuration interactively
fn collect_config() -> Result<OtpConfig, OtpinError> {
    println!("Authenticator labels:");
    println!("---------------------");

    let account = prompt_required("Account (shown in the authenticator app)", "")?;
    let issuer = prompt_optional("Issuer (optional)", "")?;

    let default_length = keygen::DEFAULT_SECRET_LENGTH.to_string();
    let secret_length: Option<usize> =
        prompt_optional("New-secret length in characters", &default_length)?
            .parse()
            .ok();

    Ok(OtpConfig {
        account,
        issuer: issuer.trim().to_string(),
        secret_length,
    })
}

/// Prompt for a required value with default
fn prompt_required(prompt: &str, default: &str) -> Result<String, OtpinError> {
    let prompt_text = if default.is_empty() {
        format!("{}: ", prompt)
    } else {
        format!("{} [{}]: ", prompt, default)
    };

    loop {
        let input = prompt_input(&prompt_text)?;

        if input.trim().is_empty() {
            if !default.is_empty() {
                return Ok(default.to_string());
            }
            println!("This field is required. Please enter a value.");
            continue;
        }

        return Ok(input.trim().to_string());
    }
}

/// Prompt for an optional value
fn prompt_optional(prompt: &str, default: &str) -> Result<String, OtpinError> {
    let prompt_text = format!("{} [{}]: ", prompt, default);
    let input = prompt_input(&prompt_text)?;

    if input.trim().is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input.trim().to_string())
    }
}

/// Prompt for yes/no with default
fn prompt_yes_no(prompt: &str, default_yes: bool) -> Result<bool, OtpinError> {
    let default_indicator = if default_yes { "[Y/n]" } else { "[y/N]" };
    let prompt_text = format!("{} {}: ", prompt, default_indicator);

    loop {
        let input = prompt_input(&prompt_text)?.to_lowercase();

        match input.as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            "" => return Ok(default_yes),
            _ => {
                println!("Please enter 'y' for yes or 'n' for no.");
                continue;
            }
        }
    }
}
