//! Shared HTTP constants (headers, allowlist prefixes, challenge body).

pub(crate) const HEADER_REQUEST_ID: &str = "x-request-id";

/// Security/indexing-control headers attached to every outgoing response.
///
/// Names are lowercase so they can back `HeaderName::from_static`; HTTP header
/// names are case-insensitive on the wire.
pub(crate) const SECURITY_HEADERS: [(&str, &str); 5] = [
    (
        "x-robots-tag",
        "noindex, nofollow, noarchive, nosnippet, noimageindex, nocache",
    ),
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "DENY"),
    ("x-xss-protection", "1; mode=block"),
    ("referrer-policy", "strict-origin-when-cross-origin"),
];

/// Path prefixes exempt from credential checking.
///
/// Framework assets, API routes, the login surface, probe endpoints, and the
/// crawler-facing well-known files. Static files with an extension are covered
/// separately by the dot heuristic in `allowlist.rs`.
pub(crate) const EXEMPT_PATH_PREFIXES: [&str; 7] = [
    "/_next/",
    "/api/",
    "/login",
    "/health",
    "/favicon.ico",
    "/robots.txt",
    "/sitemap.xml",
];

pub(crate) const BASIC_SCHEME_PREFIX: &str = "Basic ";

pub(crate) const DEFAULT_WWW_AUTHENTICATE: &str = "Basic realm=\"Protected\"";

/// Static informational body for the 401 challenge. No executable content, no
/// secrets.
pub(crate) const CHALLENGE_BODY: &str = "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"utf-8\">\n  <title>Access restricted</title>\n</head>\n<body>\n  <h1>Access restricted</h1>\n  <p>This is a protected pre-production environment. Sign in with the\n  shared credentials for this deployment, or contact the team operating it\n  to request access.</p>\n</body>\n</html>\n";
