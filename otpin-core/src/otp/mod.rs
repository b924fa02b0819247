//! OTP module
//!
//! Base32 secret transport, HOTP/TOTP pin derivation, secret minting,
//! and provisioning-URI construction.

pub mod base32;
pub mod hotp;
pub mod keygen;
pub mod provision;
