//! Shared gate state derived once from configuration.

use anteroom_config::{EnvironmentContext, GateConfig, GateSecrets};
use anteroom_telemetry::Metrics;
use axum::http::HeaderValue;

use crate::http::constants::DEFAULT_WWW_AUTHENTICATE;

/// Immutable per-process state threaded through the gate middleware and the
/// service handlers. Nothing here mutates after startup, so the gate is safe
/// under unbounded concurrency without locking.
pub(crate) struct GateState {
    pub(crate) context: EnvironmentContext,
    pub(crate) secrets: GateSecrets,
    pub(crate) www_authenticate: HeaderValue,
    pub(crate) telemetry: Metrics,
}

impl GateState {
    pub(crate) fn new(config: &GateConfig, telemetry: Metrics) -> Self {
        Self {
            context: EnvironmentContext::classify(config),
            secrets: config.secrets.clone(),
            www_authenticate: build_www_authenticate(&config.realm),
            telemetry,
        }
    }
}

/// Prepare the `WWW-Authenticate` header value for the configured realm.
///
/// Quotes, backslashes, and control characters are stripped from the realm so
/// the quoted-string stays well formed; an empty or otherwise unusable realm
/// falls back to the default.
fn build_www_authenticate(realm: &str) -> HeaderValue {
    let sanitized: String = realm
        .chars()
        .filter(|c| !c.is_control() && *c != '"' && *c != '\\')
        .collect();
    if sanitized.is_empty() {
        return HeaderValue::from_static(DEFAULT_WWW_AUTHENTICATE);
    }
    HeaderValue::from_str(&format!("Basic realm=\"{sanitized}\""))
        .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_WWW_AUTHENTICATE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn realm_is_quoted_into_the_header_value() {
        let value = build_www_authenticate("Staging");
        assert_eq!(value.to_str().unwrap(), "Basic realm=\"Staging\"");
    }

    #[test]
    fn hostile_realms_are_sanitized_or_defaulted() {
        let value = build_www_authenticate("Sta\"ging\r\n");
        assert_eq!(value.to_str().unwrap(), "Basic realm=\"Staging\"");

        let value = build_www_authenticate("\"\"");
        assert_eq!(value.to_str().unwrap(), DEFAULT_WWW_AUTHENTICATE);
    }
}
