//! Path allowlist predicates for credential exemption.

use crate::http::constants::EXEMPT_PATH_PREFIXES;

/// Whether the request path is exempt from credential checking.
///
/// Exemption is a pure OR of independent predicates: a prefix match against
/// the known exempt surfaces, or the dot heuristic that treats any path with
/// an extension-like `.` as a static file. The heuristic is a substring test,
/// not a prefix test.
pub(crate) fn is_exempt(path: &str) -> bool {
    EXEMPT_PATH_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
        || path.contains('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framework_and_api_prefixes_are_exempt() {
        assert!(is_exempt("/_next/chunk.js"));
        assert!(is_exempt("/_next/static/css/app.css"));
        assert!(is_exempt("/api/anything"));
        assert!(is_exempt("/api/reports/weekly"));
    }

    #[test]
    fn login_and_probe_surfaces_are_exempt() {
        assert!(is_exempt("/login"));
        assert!(is_exempt("/login/callback"));
        assert!(is_exempt("/health"));
    }

    #[test]
    fn well_known_files_are_exempt() {
        assert!(is_exempt("/favicon.ico"));
        assert!(is_exempt("/robots.txt"));
        assert!(is_exempt("/sitemap.xml"));
    }

    #[test]
    fn dot_heuristic_matches_anywhere_in_the_path() {
        assert!(is_exempt("/assets/logo.svg"));
        assert!(is_exempt("/deeply/nested/file.woff2"));
        assert!(is_exempt("/v1.2/report"));
    }

    #[test]
    fn page_routes_are_not_exempt() {
        assert!(!is_exempt("/"));
        assert!(!is_exempt("/dashboard"));
        assert!(!is_exempt("/reports/weekly"));
        assert!(!is_exempt("/apiary"));
    }
}
