//! Type definitions and wrappers for secure data handling
//!
//! This module provides type-safe wrappers for sensitive data using the
//! secrecy crate to prevent accidental exposure in logs or debug output.

use crate::error::{OtpError, OtpinError};
use secrecy::{ExposeSecret, Secret};
use subtle::ConstantTimeEq;

/// Number of decimal digits in a generated pin
pub const PIN_LENGTH: usize = 6;

/// Raw shared secret used to derive one-time pins
///
/// Wraps the secret bytes so they are never accidentally logged or shown
/// in debug output. A secret is immutable once created and must hold at
/// least one byte; a zero-length shared secret defeats the scheme.
pub struct SecretKey(Secret<Vec<u8>>);

impl Clone for SecretKey {
    fn clone(&self) -> Self {
        Self(Secret::new(self.0.expose_secret().clone()))
    }
}

impl SecretKey {
    /// Create a secret key from raw bytes
    ///
    /// # Errors
    ///
    /// Returns `OtpError::EmptySecret` for a zero-length input.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, OtpError> {
        if bytes.is_empty() {
            return Err(OtpError::EmptySecret);
        }
        Ok(Self(Secret::new(bytes)))
    }

    /// Create a secret key from its Base32 text representation
    ///
    /// Accepts the same formatting noise as [`crate::otp::base32::decode`]:
    /// lowercase input, `-` separators, and trailing `=` padding.
    pub fn from_base32(text: &str) -> Result<Self, OtpinError> {
        let bytes = crate::otp::base32::decode(text)?;
        Ok(Self::from_bytes(bytes)?)
    }

    /// Canonical Base32 encoding of the secret (uppercase, unpadded)
    pub fn to_base32(&self) -> Result<String, crate::error::CodecError> {
        crate::otp::base32::encode(self.expose())
    }

    /// Expose the raw secret bytes (use with caution!)
    ///
    /// This should only be called when passing the key material to the
    /// HMAC primitive or the codec.
    pub fn expose(&self) -> &[u8] {
        self.0.expose_secret()
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretKey([REDACTED])")
    }
}

/// A 6-digit one-time pin
///
/// Used both for pins produced by the engine and for candidate pins
/// typed by the user. Treated as sensitive despite its short lifetime.
#[derive(Clone, Debug)]
pub struct OtpPin(Secret<String>);

impl OtpPin {
    /// Create a pin from a string, validating the format
    ///
    /// # Errors
    ///
    /// Returns `OtpError::InvalidPinFormat` unless the input is exactly
    /// 6 ASCII digits (leading zeros are significant).
    pub fn new(pin: String) -> Result<Self, OtpError> {
        if pin.len() != PIN_LENGTH || !pin.chars().all(|c| c.is_ascii_digit()) {
            return Err(OtpError::InvalidPinFormat);
        }
        Ok(Self(Secret::new(pin)))
    }

    /// Expose the pin value (use with caution!)
    ///
    /// This should only be called when printing the pin to stdout or
    /// passing it to an external system.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    /// Constant-result comparison against another pin
    ///
    /// Runs in time independent of where the pins differ.
    pub fn matches(&self, other: &OtpPin) -> bool {
        self.expose()
            .as_bytes()
            .ct_eq(other.expose().as_bytes())
            .into()
    }
}
