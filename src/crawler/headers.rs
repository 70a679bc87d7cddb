use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE, CONNECTION,
    USER_AGENT,
};

/// Build the static browser-imitating header set
///
/// The same fixed headers are installed on the HTTP client at construction
/// and sent with every request. They reduce trivial blocking by looking like
/// a common desktop browser; they are configuration, not a security
/// mechanism.
///
/// # Examples
///
/// ```
/// use rfqcrawl::crawler::headers::default_browser_headers;
///
/// let headers = default_browser_headers();
/// assert!(headers.contains_key("user-agent"));
/// ```
pub fn default_browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();

    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
             (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
        ),
    );
    headers.insert(
        ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
        ),
    );
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_static("en-US,en;q=0.5"),
    );
    headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip, deflate"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(
        HeaderName::from_static("upgrade-insecure-requests"),
        HeaderValue::from_static("1"),
    );

    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_browser_headers() {
        let headers = default_browser_headers();

        assert!(headers.contains_key(USER_AGENT));
        assert!(headers.contains_key(ACCEPT));
        assert!(headers.contains_key(ACCEPT_LANGUAGE));
        assert!(headers.contains_key(ACCEPT_ENCODING));
        assert!(headers.contains_key(CONNECTION));
        assert!(headers.contains_key("upgrade-insecure-requests"));

        let ua = headers.get(USER_AGENT).unwrap().to_str().unwrap();
        assert!(ua.starts_with("Mozilla/5.0"));
        assert_eq!(
            headers.get(ACCEPT_LANGUAGE).unwrap(),
            HeaderValue::from_static("en-US,en;q=0.5")
        );
    }

    #[test]
    fn test_headers_are_stable() {
        // The header set is fixed configuration, never derived from input
        assert_eq!(default_browser_headers(), default_browser_headers());
    }
}
