use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

/// Browser-like User-Agent sent on the fallback path.
pub(crate) const FALLBACK_USER_AGENT: &str = "Mozilla/5.0";

/// The primary client identifies itself honestly, like any library client.
pub(crate) const PRIMARY_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Header map for the fallback strategy (User-Agent only).
pub(crate) fn fallback_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(FALLBACK_USER_AGENT));
    headers
}
