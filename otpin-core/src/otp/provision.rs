//! Provisioning-URI construction
//!
//! Builds the `otpauth://totp/` URI that authenticator apps import,
//! usually via a QR code rendered elsewhere. The secret travels in its
//! Base32 form; label and issuer are percent-encoded by the `url`
//! crate. No network access and no QR rendering happen here.

use crate::error::OtpinError;
use crate::types::SecretKey;
use url::Url;

/// Scheme-and-host prefix every provisioning URI shares
const OTPAUTH_BASE: &str = "otpauth://totp/";

/// Build the provisioning URI for a secret
///
/// The label is `issuer:account` when an issuer is given, else just the
/// account. Algorithm, digit count, and period are spelled out even
/// though they are the defaults, since some apps ignore absent
/// parameters.
pub fn provisioning_uri(
    secret: &SecretKey,
    account: &str,
    issuer: &str,
) -> Result<String, OtpinError> {
    let encoded = secret.to_base32()?;

    let label = if issuer.is_empty() {
        account.to_string()
    } else {
        format!("{}:{}", issuer, account)
    };

    let mut uri = Url::parse(OTPAUTH_BASE).expect("static otpauth base URI parses");
    uri.set_path(&label);
    {
        let mut query = uri.query_pairs_mut();
        query.append_pair("secret", &encoded);
        if !issuer.is_empty() {
            query.append_pair("issuer", issuer);
        }
        query
            .append_pair("algorithm", "SHA1")
            .append_pair("digits", "6")
            .append_pair("period", "30");
    }

    Ok(uri.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret() -> SecretKey {
        SecretKey::from_bytes(b"Hello!".to_vec()).unwrap()
    }

    #[test]
    fn test_uri_shape() {
        let uri = provisioning_uri(&secret(), "alice", "Example").unwrap();
        assert_eq!(
            uri,
            "otpauth://totp/Example:alice?secret=JBSWY3DPEE&issuer=Example&algorithm=SHA1&digits=6&period=30"
        );
    }

    #[test]
    fn test_uri_without_issuer() {
        let uri = provisioning_uri(&secret(), "alice", "").unwrap();
        assert!(uri.starts_with("otpauth://totp/alice?secret=JBSWY3DPEE&"));
        assert!(!uri.contains("issuer="));
    }

    #[test]
    fn test_label_and_query_are_percent_encoded() {
        let uri = provisioning_uri(&secret(), "alice@example.com", "Acme Corp").unwrap();
        assert!(uri.contains("issuer=Acme+Corp") || uri.contains("issuer=Acme%20Corp"));
        assert!(uri.starts_with("otpauth://totp/Acme%20Corp:alice@example.com?"));
    }

    #[test]
    fn test_secret_round_trips_through_uri() {
        let key = secret();
        let uri = provisioning_uri(&key, "alice", "Example").unwrap();
        let parsed = Url::parse(&uri).unwrap();
        let encoded = parsed
            .query_pairs()
            .find(|(name, _)| name == "secret")
            .map(|(_, value)| value.into_owned())
            .unwrap();
        let decoded = SecretKey::from_base32(&encoded).unwrap();
        assert_eq!(decoded.expose(), key.expose());
    }
}
