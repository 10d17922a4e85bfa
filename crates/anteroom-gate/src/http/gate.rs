//! Request-gate middleware and decision logic.
//!
//! # Design
//! - One decision per request, produced synchronously from immutable state:
//!   unprotected deployments and allowlisted paths pass through, everything
//!   else must carry valid Basic credentials.
//! - Both terminal outcomes flow through the same header merge, so the
//!   security header set is present on every response exactly once.
//! - Failure detail stays internal (logs and counters); the caller only ever
//!   observes the uniform challenge.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

use anteroom_config::GateSecrets;

use crate::http::allowlist::is_exempt;
use crate::http::challenge::challenge;
use crate::http::credentials::{AuthFailure, decode_basic, verify};
use crate::http::headers::apply_security_headers;
use crate::state::GateState;

/// Terminal verdict for a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthDecision {
    /// The request proceeds to the upstream application unmodified.
    Allow,
    /// The request is answered with the 401 challenge.
    ChallengeRequired,
}

impl AuthDecision {
    /// Stable label used for logging and the decision counter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::ChallengeRequired => "challenge",
        }
    }
}

/// Axum middleware enforcing the access gate on every inbound request.
pub(crate) async fn enforce_gate(
    State(state): State<Arc<GateState>>,
    req: Request,
    next: Next,
) -> Response {
    let decision = evaluate(&state, &req);
    state.telemetry.inc_gate_decision(decision.as_str());

    let mut response = match decision {
        AuthDecision::Allow => next.run(req).await,
        AuthDecision::ChallengeRequired => challenge(&state.www_authenticate),
    };
    apply_security_headers(response.headers_mut());
    response
}

/// Classify one request. Pure with respect to the request and state; the only
/// side effects are diagnostics on the failure path.
fn evaluate(state: &GateState, req: &Request) -> AuthDecision {
    if !state.context.protected {
        return AuthDecision::Allow;
    }

    let path = req.uri().path();
    if is_exempt(path) {
        debug!(path, "allowlisted path bypasses credential check");
        return AuthDecision::Allow;
    }

    match authorize(req.headers(), &state.secrets) {
        Ok(()) => AuthDecision::Allow,
        Err(failure) => {
            state.telemetry.inc_auth_failure(failure.reason());
            warn!(path, reason = failure.reason(), "gate challenge issued");
            AuthDecision::ChallengeRequired
        }
    }
}

/// Run the credential pipeline: header presence, scheme, decode, validate.
fn authorize(headers: &HeaderMap, secrets: &GateSecrets) -> Result<(), AuthFailure> {
    let header_value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthFailure::HeaderMissing)?;
    let header_value = header_value
        .to_str()
        .map_err(|_| AuthFailure::SchemeMismatch)?;
    let credentials = decode_basic(header_value)?;
    verify(&credentials, secrets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use base64::{Engine as _, engine::general_purpose};

    fn secrets() -> GateSecrets {
        GateSecrets {
            username: Some("admin".to_string()),
            password: Some("correctpass".to_string()),
        }
    }

    fn header_map(value: Option<&str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(value) = value {
            headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        }
        headers
    }

    fn basic(pair: &str) -> String {
        format!("Basic {}", general_purpose::STANDARD.encode(pair))
    }

    #[test]
    fn authorize_walks_the_full_taxonomy() {
        assert_eq!(
            authorize(&header_map(None), &secrets()).unwrap_err(),
            AuthFailure::HeaderMissing
        );
        assert_eq!(
            authorize(&header_map(Some("Bearer token")), &secrets()).unwrap_err(),
            AuthFailure::SchemeMismatch
        );
        assert_eq!(
            authorize(&header_map(Some("Basic @@@@")), &secrets()).unwrap_err(),
            AuthFailure::DecodeFailure
        );
        assert_eq!(
            authorize(&header_map(Some(basic("admin:wrongpass").as_str())), &secrets()).unwrap_err(),
            AuthFailure::CredentialMismatch
        );
        assert_eq!(
            authorize(&header_map(Some(basic("admin:correctpass").as_str())), &GateSecrets::default())
                .unwrap_err(),
            AuthFailure::ConfigurationIncomplete
        );
        assert!(authorize(&header_map(Some(basic("admin:correctpass").as_str())), &secrets()).is_ok());
    }

    #[test]
    fn decision_labels_are_stable() {
        assert_eq!(AuthDecision::Allow.as_str(), "allow");
        assert_eq!(AuthDecision::ChallengeRequired.as_str(), "challenge");
    }
}
