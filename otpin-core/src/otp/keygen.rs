//! Secret-key generation
//!
//! Mints new shared secrets as short human-typable strings sampled from
//! an alphabet with the easily-confused letters (I, O, l) removed. The
//! sampled ASCII bytes are the raw key material handed to the engine;
//! authenticator apps receive the Base32 encoding of those bytes.

use crate::error::OtpError;
use crate::types::SecretKey;
use rand::rngs::OsRng;
use rand::Rng;

/// Characters a user may be asked to read or type back
const SECRET_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz01234567";

/// Default secret length in characters
pub const DEFAULT_SECRET_LENGTH: usize = 10;

/// Generate a new random secret key of `length` characters
///
/// Samples uniformly from the alphabet using the operating system's
/// cryptographically secure random source.
///
/// # Errors
///
/// Returns `OtpError::EmptySecret` when `length` is zero.
pub fn generate_secret_key(length: usize) -> Result<SecretKey, OtpError> {
    if length == 0 {
        return Err(OtpError::EmptySecret);
    }

    let mut rng = OsRng;
    let bytes: Vec<u8> = (0..length)
        .map(|_| SECRET_ALPHABET[rng.gen_range(0..SECRET_ALPHABET.len())])
        .collect();

    SecretKey::from_bytes(bytes)
}
