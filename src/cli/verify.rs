//! Verify command implementation
//!
//! Checks a user-supplied pin against the current pin for a secret,
//! mirroring the classic authenticator console flow.

use chrono::Utc;
use colored::Colorize;
use otpin_core::error::OtpinError;
use otpin_core::otp::hotp;
use otpin_core::types::OtpPin;

/// Run the verify command
///
/// Prints the verdict and exits with status 1 when the pin does not
/// match the current interval's pin.
pub fn run_verify(pin: &str, secret: Option<&str>, ascii: bool) -> Result<(), OtpinError> {
    let candidate = OtpPin::new(pin.trim().to_string())?;
    let secret = crate::cli::read_secret(secret, ascii)?;

    if hotp::verify_pin(&secret, &candidate, Utc::now())? {
        println!("{}", "pin matches".green());
        Ok(())
    } else {
        println!("{}", "pin does not match".red());
        std::process::exit(1);
    }
}
