//! Security response-header policy.

use axum::http::{HeaderMap, HeaderName, HeaderValue};

use crate::http::constants::SECURITY_HEADERS;

/// Merge the fixed security/no-index header set into a response header map.
///
/// Uses `insert`, so each header appears exactly once even when the policy is
/// applied to a response that already carries one of the names. There is no
/// conditional logic; every response gets the full set.
pub(crate) fn apply_security_headers(headers: &mut HeaderMap) {
    for (name, value) in SECURITY_HEADERS {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
}
