//! Integration tests for pin generation and verification
//!
//! Exercises the full secret → counter → pin pipeline with the RFC
//! known-answer vectors and the documented edge cases.

use chrono::{TimeZone, Utc};
use otpin_core::error::OtpError;
use otpin_core::otp::hotp;
use otpin_core::types::{OtpPin, SecretKey};

fn reference_secret() -> SecretKey {
    SecretKey::from_bytes(b"12345678901234567890".to_vec()).unwrap()
}

#[test]
fn test_time_based_pins_match_rfc6238_sha1_vectors() {
    // RFC 6238 Appendix B timestamps, truncated to 6 digits
    let vectors = [
        (59i64, "287082"),
        (1111111109, "081804"),
        (1111111111, "050471"),
        (1234567890, "005924"),
        (2000000000, "279037"),
        (20000000000, "353130"),
    ];

    let secret = reference_secret();
    for (timestamp, expected) in vectors {
        let now = Utc.timestamp_opt(timestamp, 0).unwrap();
        let pin = hotp::current_pin(&secret, now).unwrap();
        assert_eq!(pin.expose(), expected, "timestamp {}", timestamp);
    }
}

#[test]
fn test_counter_based_pins_match_rfc4226_vectors() {
    let secret = reference_secret();
    assert_eq!(hotp::generate_pin(&secret, 0).unwrap().expose(), "755224");
    assert_eq!(hotp::generate_pin(&secret, 1).unwrap().expose(), "287082");
    assert_eq!(hotp::generate_pin(&secret, 9).unwrap().expose(), "520489");
}

#[test]
fn test_base32_secret_reaches_same_pins() {
    // The same key material via its transport encoding
    let secret = SecretKey::from_base32("GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ").unwrap();
    assert_eq!(hotp::generate_pin(&secret, 0).unwrap().expose(), "755224");
}

#[test]
fn test_pins_are_deterministic_across_calls() {
    let secret = reference_secret();
    for counter in [0u64, 1, 1000, u64::MAX] {
        let first = hotp::generate_pin(&secret, counter).unwrap();
        let second = hotp::generate_pin(&secret, counter).unwrap();
        assert_eq!(first.expose(), second.expose());
    }
}

#[test]
fn test_pins_are_always_six_digits() {
    let secret = reference_secret();
    for counter in 0..200u64 {
        let pin = hotp::generate_pin(&secret, counter).unwrap();
        assert_eq!(pin.expose().len(), 6);
        assert!(pin.expose().chars().all(|c| c.is_ascii_digit()));
    }
}

#[test]
fn test_interval_window_boundaries() {
    let epoch_day = |h: u32, m: u32, s: u32| {
        Utc.with_ymd_and_hms(1970, 1, 1, h, m, s).unwrap()
    };

    assert_eq!(hotp::interval(epoch_day(0, 0, 0)), 0);
    assert_eq!(hotp::interval(epoch_day(0, 0, 29)), 0);
    assert_eq!(hotp::interval(epoch_day(0, 0, 30)), 1);
    assert_eq!(hotp::interval(epoch_day(0, 1, 0)), 2);
}

#[test]
fn test_empty_secret_is_unrepresentable() {
    assert_eq!(
        SecretKey::from_bytes(Vec::new()).unwrap_err(),
        OtpError::EmptySecret
    );
    assert_eq!(
        SecretKey::from_base32("").unwrap_err().to_string(),
        "OTP error: secret key must not be empty"
    );
}

#[test]
fn test_verify_accepts_current_and_rejects_stale() {
    let secret = reference_secret();
    let now = Utc.timestamp_opt(59, 0).unwrap();
    let later = Utc.timestamp_opt(89, 0).unwrap();

    // Counter 1 yields 287082, counter 2 yields 359152
    let pin = hotp::current_pin(&secret, now).unwrap();
    assert_eq!(pin.expose(), "287082");
    assert!(hotp::verify_pin(&secret, &pin, now).unwrap());

    // One interval later the pin has rolled over; no drift window
    assert!(!hotp::verify_pin(&secret, &pin, later).unwrap());
}

#[test]
fn test_verify_rejects_wrong_pin() {
    let secret = reference_secret();
    let now = Utc.timestamp_opt(59, 0).unwrap();

    // Current pin is 287082
    let wrong = OtpPin::new("287083".to_string()).unwrap();
    assert!(!hotp::verify_pin(&secret, &wrong, now).unwrap());
}
