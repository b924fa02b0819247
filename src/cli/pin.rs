//! Pin command implementation
//!
//! This module implements the `otpin pin` command that generates and
//! outputs the current 6-digit pin for a secret.

use chrono::Utc;
use otpin_core::error::OtpinError;
use otpin_core::otp::hotp;

/// Run the pin command
///
/// Outputs only the pin to stdout for machine-parsable usage. Errors
/// are sent to stderr. No additional formatting or text.
pub fn run_pin(secret: Option<&str>, ascii: bool) -> Result<(), OtpinError> {
    let secret = crate::cli::read_secret(secret, ascii)?;

    // The clock is read exactly once, here
    let pin = hotp::current_pin(&secret, Utc::now())?;

    println!("{}", pin.expose());

    Ok(())
}
