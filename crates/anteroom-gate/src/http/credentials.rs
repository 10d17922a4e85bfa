//! Basic-credential decoding and validation.
//!
//! # Design
//! - Decoding is all-or-nothing; no partial credentials ever escape.
//! - Every failure collapses to the same observable challenge, so the
//!   [`AuthFailure`] taxonomy feeds logs and metrics only and never reaches
//!   the caller (avoids username enumeration).
//! - Comparison is constant-time; credential values are never logged.

use anteroom_config::GateSecrets;
use base64::{Engine as _, engine::general_purpose};
use subtle::ConstantTimeEq;
use thiserror::Error;

use crate::http::constants::BASIC_SCHEME_PREFIX;

/// Transient username/password pair decoded from an `Authorization` header.
///
/// Created per request and discarded after validation; the `Debug`
/// implementation is intentionally redacted so values cannot end up in logs.
pub(crate) struct Credentials {
    pub(crate) username: String,
    pub(crate) password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials").finish_non_exhaustive()
    }
}

/// Internal taxonomy for credential evaluation failures.
///
/// All variants produce the identical 401 challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum AuthFailure {
    /// Expected secrets are not configured; no credential can ever validate.
    #[error("expected credentials are not configured")]
    ConfigurationIncomplete,
    /// No `Authorization` header was supplied.
    #[error("authorization header missing")]
    HeaderMissing,
    /// The `Authorization` header does not carry the Basic scheme.
    #[error("authorization scheme is not Basic")]
    SchemeMismatch,
    /// The Basic payload was not valid base64, UTF-8, or `user:pass`.
    #[error("authorization payload failed to decode")]
    DecodeFailure,
    /// Supplied credentials do not match the configured secrets.
    #[error("credentials do not match")]
    CredentialMismatch,
}

impl AuthFailure {
    /// Stable label used for structured logging and the failure counter.
    pub(crate) const fn reason(self) -> &'static str {
        match self {
            Self::ConfigurationIncomplete => "configuration_incomplete",
            Self::HeaderMissing => "header_missing",
            Self::SchemeMismatch => "scheme_mismatch",
            Self::DecodeFailure => "decode_failure",
            Self::CredentialMismatch => "credential_mismatch",
        }
    }
}

/// Decode a `Basic` authorization header value into credentials.
///
/// The payload is base64-decoded to UTF-8 and split on the first `:`, so a
/// password containing `:` is preserved intact. Fails when the scheme prefix
/// is absent, decoding fails, the separator is missing, or either field is
/// empty.
pub(crate) fn decode_basic(header: &str) -> Result<Credentials, AuthFailure> {
    let payload = header
        .strip_prefix(BASIC_SCHEME_PREFIX)
        .ok_or(AuthFailure::SchemeMismatch)?;
    let decoded = general_purpose::STANDARD
        .decode(payload.trim())
        .map_err(|_| AuthFailure::DecodeFailure)?;
    let text = String::from_utf8(decoded).map_err(|_| AuthFailure::DecodeFailure)?;
    let (username, password) = text.split_once(':').ok_or(AuthFailure::DecodeFailure)?;
    if username.is_empty() || password.is_empty() {
        return Err(AuthFailure::DecodeFailure);
    }
    Ok(Credentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

/// Validate decoded credentials against the configured secrets.
///
/// Fails closed when either expected secret is absent. The comparison is
/// exact, case-sensitive, and constant-time; both fields are always compared
/// so the outcome does not reveal which one mismatched.
pub(crate) fn verify(credentials: &Credentials, secrets: &GateSecrets) -> Result<(), AuthFailure> {
    if !secrets.is_configured() {
        return Err(AuthFailure::ConfigurationIncomplete);
    }
    let expected_username = secrets.username.as_deref().unwrap_or_default();
    let expected_password = secrets.password.as_deref().unwrap_or_default();

    let username_ok = credentials
        .username
        .as_bytes()
        .ct_eq(expected_username.as_bytes());
    let password_ok = credentials
        .password
        .as_bytes()
        .ct_eq(expected_password.as_bytes());

    if bool::from(username_ok & password_ok) {
        Ok(())
    } else {
        Err(AuthFailure::CredentialMismatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(pair: &str) -> String {
        format!("Basic {}", general_purpose::STANDARD.encode(pair))
    }

    fn secrets(username: &str, password: &str) -> GateSecrets {
        GateSecrets {
            username: Some(username.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[test]
    fn decode_recovers_the_original_pair() {
        let credentials = decode_basic(&encode("admin:correctpass")).expect("should decode");
        assert_eq!(credentials.username, "admin");
        assert_eq!(credentials.password, "correctpass");
    }

    #[test]
    fn decode_splits_on_the_first_colon_only() {
        let credentials = decode_basic(&encode("admin:pa:ss:word")).expect("should decode");
        assert_eq!(credentials.username, "admin");
        assert_eq!(credentials.password, "pa:ss:word");
    }

    #[test]
    fn decode_rejects_non_basic_schemes() {
        assert_eq!(
            decode_basic("Bearer abc123").unwrap_err(),
            AuthFailure::SchemeMismatch
        );
        // Scheme matching is literal, including case.
        assert_eq!(
            decode_basic("basic YWRtaW46cHc=").unwrap_err(),
            AuthFailure::SchemeMismatch
        );
    }

    #[test]
    fn decode_rejects_malformed_payloads() {
        assert_eq!(
            decode_basic("Basic !!not-base64!!").unwrap_err(),
            AuthFailure::DecodeFailure
        );
        // Valid base64 of bytes that are not UTF-8.
        assert_eq!(
            decode_basic(&format!(
                "Basic {}",
                general_purpose::STANDARD.encode([0xffu8, 0xfe, 0xfd])
            ))
            .unwrap_err(),
            AuthFailure::DecodeFailure
        );
        // No separator at all.
        assert_eq!(
            decode_basic(&encode("admincorrectpass")).unwrap_err(),
            AuthFailure::DecodeFailure
        );
    }

    #[test]
    fn decode_rejects_empty_fields() {
        assert_eq!(
            decode_basic(&encode(":password")).unwrap_err(),
            AuthFailure::DecodeFailure
        );
        assert_eq!(
            decode_basic(&encode("admin:")).unwrap_err(),
            AuthFailure::DecodeFailure
        );
    }

    #[test]
    fn verify_accepts_an_exact_match_only() {
        let credentials = decode_basic(&encode("admin:correctpass")).expect("should decode");
        assert!(verify(&credentials, &secrets("admin", "correctpass")).is_ok());
        assert_eq!(
            verify(&credentials, &secrets("admin", "wrongpass")).unwrap_err(),
            AuthFailure::CredentialMismatch
        );
        assert_eq!(
            verify(&credentials, &secrets("Admin", "correctpass")).unwrap_err(),
            AuthFailure::CredentialMismatch
        );
    }

    #[test]
    fn verify_fails_closed_without_configured_secrets() {
        let credentials = decode_basic(&encode("admin:correctpass")).expect("should decode");
        assert_eq!(
            verify(&credentials, &GateSecrets::default()).unwrap_err(),
            AuthFailure::ConfigurationIncomplete
        );
        let partial = GateSecrets {
            username: Some("admin".to_string()),
            password: None,
        };
        assert_eq!(
            verify(&credentials, &partial).unwrap_err(),
            AuthFailure::ConfigurationIncomplete
        );
    }
}
