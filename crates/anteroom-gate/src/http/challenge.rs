//! Challenge response construction.

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::http::constants::CHALLENGE_BODY;

/// Build the 401 challenge response.
///
/// Carries the `WWW-Authenticate` header prepared at startup, an HTML
/// content type, and the static informational body. The security header set
/// is merged in by the gate middleware like on every other response.
pub(crate) fn challenge(www_authenticate: &HeaderValue) -> Response {
    let mut response = (
        StatusCode::UNAUTHORIZED,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        CHALLENGE_BODY,
    )
        .into_response();
    response
        .headers_mut()
        .insert(header::WWW_AUTHENTICATE, www_authenticate.clone());
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn challenge_has_the_specified_shape() {
        let www = HeaderValue::from_static("Basic realm=\"Staging\"");
        let response = challenge(&www);

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response
                .headers()
                .get(header::WWW_AUTHENTICATE)
                .map(|value| value.to_str().map_err(|_| ())),
            Some(Ok("Basic realm=\"Staging\""))
        );
        assert_eq!(
            response
                .headers()
                .get(header::CONTENT_TYPE)
                .map(|value| value.to_str().map_err(|_| ())),
            Some(Ok("text/html; charset=utf-8"))
        );
    }
}
