//! Cache Key Derivation
//!
//! Maps an inbound request to the string key under which its rendered
//! page is stored.

use axum::http::Uri;

// == Derive Key ==
/// Derives the cache key for a request.
///
/// The key is the normalized request path: the query string is ignored
/// and a trailing slash is stripped (the root stays `/`). The function
/// is pure and never fails, so identical requests always map to the
/// same key.
///
/// NB: this is the single seam through which request-derived variance
/// enters the cache. Anything that should produce a different rendered
/// page for the same path (a session locale, an A/B cohort, auth
/// state) must be folded into the returned key here; a variant omitted
/// here is served stale content from another cohort's entry.
pub fn derive_key(uri: &Uri) -> String {
    let path = uri.path();
    if path.is_empty() {
        return "/".to_string();
    }
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn uri(s: &str) -> Uri {
        s.parse().unwrap()
    }

    #[test]
    fn test_key_is_path() {
        assert_eq!(derive_key(&uri("/about")), "/about");
        assert_eq!(derive_key(&uri("/code")), "/code");
    }

    #[test]
    fn test_key_root() {
        assert_eq!(derive_key(&uri("/")), "/");
    }

    #[test]
    fn test_key_deterministic() {
        let a = derive_key(&uri("/about"));
        let b = derive_key(&uri("/about"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_key_strips_trailing_slash() {
        assert_eq!(derive_key(&uri("/about/")), "/about");
        assert_eq!(derive_key(&uri("/a/b/")), "/a/b");
    }

    #[test]
    fn test_key_ignores_query() {
        assert_eq!(derive_key(&uri("/about?lang=fr")), "/about");
        assert_eq!(derive_key(&uri("/about")), derive_key(&uri("/about?x=1")));
    }

    #[test]
    fn test_distinct_paths_distinct_keys() {
        assert_ne!(derive_key(&uri("/about")), derive_key(&uri("/social")));
        assert_ne!(derive_key(&uri("/")), derive_key(&uri("/code")));
    }
}
