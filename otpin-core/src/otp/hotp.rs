//! HOTP/TOTP pin generation
//!
//! Implements RFC 4226 pin derivation (HMAC-SHA1, dynamic truncation,
//! decimal formatting) with the RFC 6238 time-step counter. Fixed to
//! the 30-second/6-digit/SHA1 configuration used by Google
//! Authenticator; these constants are the extension point for future
//! digest or length variants.

use crate::error::OtpError;
use crate::types::{OtpPin, SecretKey, PIN_LENGTH};
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha1::Sha1;

/// Length of one time step in seconds
pub const INTERVAL_SECONDS: i64 = 30;

/// Modulus producing [`PIN_LENGTH`] decimal digits
const PIN_MODULO: u32 = 10u32.pow(PIN_LENGTH as u32);

type HmacSha1 = Hmac<Sha1>;

/// Number of 30-second intervals elapsed since the Unix epoch
///
/// Pure function of the timestamp; monotonically non-decreasing. UTC is
/// enforced by the argument type. Instants before the epoch clamp to
/// interval 0, since the counter is non-negative by definition.
pub fn interval(timestamp: DateTime<Utc>) -> u64 {
    timestamp
        .timestamp()
        .div_euclid(INTERVAL_SECONDS)
        .max(0) as u64
}

/// Derive the 6-digit pin for a secret and counter value
///
/// Deterministic and side-effect-free: the counter is serialized as an
/// 8-byte big-endian integer, HMAC-SHA1 hashed with the secret, and the
/// digest is dynamically truncated per RFC 4226 §5.3. The byte-order
/// conversions are explicit, never host-endian.
///
/// # Errors
///
/// Returns `OtpError::EmptySecret` if the secret holds no bytes.
pub fn generate_pin(secret: &SecretKey, counter: u64) -> Result<OtpPin, OtpError> {
    let key = secret.expose();
    if key.is_empty() {
        return Err(OtpError::EmptySecret);
    }

    let mut mac = HmacSha1::new_from_slice(key).map_err(|_| OtpError::HmacFailed)?;
    mac.update(&counter.to_be_bytes());
    let digest = mac.finalize().into_bytes();

    // Dynamic truncation: the low nibble of the last digest byte picks
    // which 4 bytes form the pin value
    let offset = (digest[19] & 0x0F) as usize;
    let truncated = ((digest[offset] as u32 & 0x7F) << 24)
        | ((digest[offset + 1] as u32) << 16)
        | ((digest[offset + 2] as u32) << 8)
        | (digest[offset + 3] as u32);

    OtpPin::new(format!("{:06}", truncated % PIN_MODULO))
}

/// Derive the pin for the interval containing `now`
///
/// The clock is read once by the caller; no time source is consulted
/// here.
pub fn current_pin(secret: &SecretKey, now: DateTime<Utc>) -> Result<OtpPin, OtpError> {
    generate_pin(secret, interval(now))
}

/// Check a candidate pin against the interval containing `now`
///
/// Uses constant-result equality and consults only the single current
/// interval; clock-drift windows are the caller's concern.
pub fn verify_pin(
    secret: &SecretKey,
    candidate: &OtpPin,
    now: DateTime<Utc>,
) -> Result<bool, OtpError> {
    let expected = current_pin(secret, now)?;
    Ok(expected.matches(candidate))
}
