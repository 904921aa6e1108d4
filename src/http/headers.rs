//! Development response headers
//!
//! Every response carries a fixed header set: wildcard CORS allow-origin and
//! cache-disabling directives, so code edits are visible on the next reload.

use hyper::header::{
    HeaderValue, ACCESS_CONTROL_ALLOW_ORIGIN, CACHE_CONTROL, EXPIRES, PRAGMA,
};
use hyper::Response;

/// Cache-Control value disabling every cache layer a browser consults
pub const NO_CACHE: &str = "no-store, no-cache, must-revalidate, max-age=0";

/// Attach the CORS and cache-disabling headers to a response.
///
/// Applied to every response regardless of path or status code.
pub fn apply_dev_headers<B>(response: &mut Response<B>) {
    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(CACHE_CONTROL, HeaderValue::from_static(NO_CACHE));
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(EXPIRES, HeaderValue::from_static("0"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::Full;
    use hyper::body::Bytes;

    #[test]
    fn test_all_four_headers_attached() {
        let mut response = Response::new(Full::new(Bytes::new()));
        apply_dev_headers(&mut response);

        let headers = response.headers();
        assert_eq!(headers.get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
        assert_eq!(headers.get(CACHE_CONTROL).unwrap(), NO_CACHE);
        assert_eq!(headers.get(PRAGMA).unwrap(), "no-cache");
        assert_eq!(headers.get(EXPIRES).unwrap(), "0");
    }

    #[test]
    fn test_existing_cache_header_is_replaced() {
        let mut response = Response::builder()
            .header(CACHE_CONTROL, "public, max-age=3600")
            .body(Full::new(Bytes::new()))
            .unwrap();
        apply_dev_headers(&mut response);
        assert_eq!(response.headers().get(CACHE_CONTROL).unwrap(), NO_CACHE);
    }
}
