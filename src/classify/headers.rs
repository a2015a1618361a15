//! Classifiers over response headers.

use reqwest::header::HeaderMap;

use crate::config::{
    HEADER_PROXY_AUTHORIZATION, HEADER_SERVER, HEADER_SET_COOKIE, HEADER_VIA,
    HEADER_WWW_AUTHENTICATE, HEADER_X_POWERED_BY,
};
use crate::models::HeaderFacts;

use super::tables::SignatureTables;

/// All values of a header joined with ", ", or `None` if it is absent.
fn joined_header(headers: &HeaderMap, name: &str) -> Option<String> {
    let values: Vec<String> = headers
        .get_all(name)
        .iter()
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .collect();
    if values.is_empty() {
        None
    } else {
        Some(values.join(", "))
    }
}

/// First provider in table order whose substrings occur in the lower-cased
/// `Server` header.
pub fn detect_cloud_provider(headers: &HeaderMap, tables: &SignatureTables) -> Option<String> {
    let server = joined_header(headers, HEADER_SERVER)?.to_lowercase();
    tables
        .cloud_providers
        .iter()
        .find(|provider| provider.keywords.iter().any(|k| server.contains(k.as_str())))
        .map(|provider| provider.name.clone())
}

/// `1 + commas` in the joined `Set-Cookie` value.
///
/// Commas inside `Expires` dates are counted too, and a response without
/// cookies still yields 1.
pub fn count_cookies(headers: &HeaderMap) -> usize {
    joined_header(headers, HEADER_SET_COOKIE)
        .map(|value| value.matches(',').count())
        .unwrap_or(0)
        + 1
}

pub fn extract_header_facts(headers: &HeaderMap) -> HeaderFacts {
    HeaderFacts {
        server: joined_header(headers, HEADER_SERVER),
        proxy_authorization: joined_header(headers, HEADER_PROXY_AUTHORIZATION),
        powered_by: joined_header(headers, HEADER_X_POWERED_BY),
        via: joined_header(headers, HEADER_VIA),
        www_authenticate: joined_header(headers, HEADER_WWW_AUTHENTICATE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderValue, SERVER, SET_COOKIE, VIA};

    fn with_server(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(SERVER, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_cloud_provider_first_match_wins() {
        let tables = SignatureTables::default();
        let headers = with_server("Akamai-fronted Cloudflare");
        assert_eq!(
            detect_cloud_provider(&headers, &tables),
            Some("Cloudflare".to_string())
        );
    }

    #[test]
    fn test_cloud_provider_aws_before_cloudfront() {
        let tables = SignatureTables::default();
        assert_eq!(
            detect_cloud_provider(&with_server("AmazonS3"), &tables),
            Some("Amazon Web Services (AWS)".to_string())
        );
        assert_eq!(
            detect_cloud_provider(&with_server("gws"), &tables),
            Some("Google Cloud".to_string())
        );
    }

    #[test]
    fn test_cloud_provider_not_detected() {
        let tables = SignatureTables::default();
        assert_eq!(detect_cloud_provider(&with_server("nginx"), &tables), None);
        assert_eq!(detect_cloud_provider(&HeaderMap::new(), &tables), None);
    }

    #[test]
    fn test_cookie_count_without_header() {
        assert_eq!(count_cookies(&HeaderMap::new()), 1);
    }

    #[test]
    fn test_cookie_count_counts_expires_comma() {
        let mut headers = HeaderMap::new();
        headers.append(
            SET_COOKIE,
            HeaderValue::from_static("id=a3fWa; Expires=Wed, 21 Oct 2015 07:28:00 GMT"),
        );
        headers.append(SET_COOKIE, HeaderValue::from_static("theme=light"));
        // one comma from the date, one from joining the two headers
        assert_eq!(count_cookies(&headers), 3);
    }

    #[test]
    fn test_header_facts() {
        let mut headers = with_server("nginx");
        headers.insert(VIA, HeaderValue::from_static("1.1 varnish"));
        let facts = extract_header_facts(&headers);
        assert_eq!(facts.server.as_deref(), Some("nginx"));
        assert_eq!(facts.via.as_deref(), Some("1.1 varnish"));
        assert_eq!(facts.powered_by, None);
        assert_eq!(facts.www_authenticate, None);
    }
}
