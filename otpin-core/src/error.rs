//! Error types for the otpin authenticator tool
//!
//! This module defines all error types used throughout the application,
//! providing consistent error handling and user-friendly error messages.

use thiserror::Error;

/// Main error type for the otpin application
#[derive(Error, Debug)]
pub enum OtpinError {
    /// Errors related to configuration loading/parsing
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Errors related to Base32 encoding/decoding
    #[error("Base32 error: {0}")]
    Codec(#[from] CodecError),

    /// Errors related to OTP pin generation
    #[error("OTP error: {0}")]
    Otp(#[from] OtpError),

    /// Generic I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization errors
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration file: {path}")]
    LoadFailed { path: String },

    #[error("Failed to save configuration file: {path}")]
    SaveFailed { path: String },

    #[error("Configuration validation error: {message}")]
    ValidationError { message: String },

    #[error("I/O error: {message}")]
    IoError { message: String },
}

/// Base32 codec errors
///
/// Decoding either fully succeeds or fails atomically; no partial
/// output is ever returned alongside an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("invalid Base32 character: {character:?}")]
    InvalidCharacter { character: char },

    #[error("input too large to encode: {len} bytes")]
    InputTooLarge { len: usize },

    #[error("non-zero trailing bits in Base32 input")]
    TrailingBits,
}

/// OTP pin generation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OtpError {
    #[error("secret key must not be empty")]
    EmptySecret,

    #[error("invalid pin format: must be exactly 6 numeric digits")]
    InvalidPinFormat,

    #[error("HMAC-SHA1 computation failed")]
    HmacFailed,
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, OtpinError>;
