//! Bearer Token Extraction
//!
//! Common handling for the `Authorization` header. Clients send either
//! `Authorization: Bearer <token>` or the raw token; both are accepted.

use axum::http::{HeaderMap, header};

/// Extract the bearer token from request headers
///
/// Returns `None` if the header is missing, not valid UTF-8, or empty
/// after stripping the `Bearer ` prefix.
pub fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::AUTHORIZATION)?.to_str().ok()?.trim();

    let token = raw.strip_prefix("Bearer ").unwrap_or(raw).trim();

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_auth(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_prefix() {
        let headers = headers_with_auth("Bearer abc.def");
        assert_eq!(extract_bearer(&headers), Some("abc.def".to_string()));
    }

    #[test]
    fn test_raw_token() {
        let headers = headers_with_auth("abc.def");
        assert_eq!(extract_bearer(&headers), Some("abc.def".to_string()));
    }

    #[test]
    fn test_surrounding_whitespace() {
        let headers = headers_with_auth("  Bearer   abc.def  ");
        assert_eq!(extract_bearer(&headers), Some("abc.def".to_string()));
    }

    #[test]
    fn test_missing_header() {
        let headers = HeaderMap::new();
        assert_eq!(extract_bearer(&headers), None);
    }

    #[test]
    fn test_empty_after_prefix() {
        let headers = headers_with_auth("Bearer ");
        assert_eq!(extract_bearer(&headers), None);
    }
}
