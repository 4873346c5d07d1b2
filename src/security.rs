use axum::http::HeaderMap;
use subtle::ConstantTimeEq;

pub const API_KEY_HEADER: &str = "X-API-Key";

/// Constant-time string comparison to prevent timing attacks
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Check the `X-API-Key` header against the configured admin key.
pub fn verify_api_key(headers: &HeaderMap, expected: &str) -> bool {
    headers
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|provided| constant_time_compare(provided, expected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_constant_time_compare() {
        assert!(constant_time_compare("secret123", "secret123"));
        assert!(!constant_time_compare("secret123", "secret124"));
        assert!(!constant_time_compare("secret123", "secret12"));
        assert!(!constant_time_compare("", "secret"));
    }

    #[test]
    fn test_verify_api_key() {
        let mut headers = HeaderMap::new();
        assert!(!verify_api_key(&headers, "secret"));

        headers.insert(API_KEY_HEADER, HeaderValue::from_static("wrong"));
        assert!(!verify_api_key(&headers, "secret"));

        headers.insert(API_KEY_HEADER, HeaderValue::from_static("secret"));
        assert!(verify_api_key(&headers, "secret"));
    }

    #[test]
    fn test_header_name_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.insert("x-api-key", HeaderValue::from_static("secret"));
        assert!(verify_api_key(&headers, "secret"));
    }
}
