//! CLI command implementations
//!
//! This module contains the implementation of all CLI subcommands.

pub mod new;
pub mod pin;
pub mod setup;
pub mod uri;
pub mod verify;

use otpin_core::error::OtpinError;
use otpin_core::types::SecretKey;
use std::io::{self, Write};

/// Obtain the secret from the argument or an interactive prompt
///
/// With `ascii` set the input bytes are the key material directly (the
/// classic console convention); otherwise the input is Base32-decoded.
pub(crate) fn read_secret(arg: Option<&str>, ascii: bool) -> Result<SecretKey, OtpinError> {
    let raw = match arg {
        Some(value) => value.to_string(),
        None => prompt_input("Secret: ")?,
    };
    let text = raw.trim();

    if ascii {
        Ok(SecretKey::from_bytes(text.as_bytes().to_vec())?)
    } else {
        SecretKey::from_base32(text)
    }
}

/// Low-level input prompting
pub(crate) fn prompt_input(prompt: &str) -> Result<String, OtpinError> {
    print!("{}", prompt);
    io::stdout().flush().map_err(OtpinError::Io)?;

    let mut input = String::new();
    io::stdin().read_line(&mut input).map_err(OtpinError::Io)?;

    Ok(input.trim_end().to_string())
}
