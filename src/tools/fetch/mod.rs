mod client;
mod headers;
mod strategies;
mod utils;

pub mod tls;
pub mod types;


// Re-export types for public use
pub use strategies::{FallbackStrategy, FetchStrategy, PrimaryStrategy};
pub use tls::TlsPolicy;
pub use types::*;

use std::time::Duration;
use tracing::debug;
use url::Url;

/// Per-attempt timeout used when the caller has no opinion.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetch a page with the default chain: primary client, then fallback client.
///
/// The TLS policy is chosen from the URL with [`TlsPolicy::for_url`]. Progress
/// lines are printed to stdout as each attempt is made; a `Failure` means
/// both attempts produced no body.
///
/// # Examples
/// ```no_run
/// use formprobe::tools::fetch::{fetch, DEFAULT_TIMEOUT};
/// use url::Url;
///
/// # async fn example() -> Result<(), url::ParseError> {
/// let url = Url::parse("https://example.com")?;
/// if let Some(body) = fetch(&url, DEFAULT_TIMEOUT).await.body() {
///     println!("{} chars", body.chars().count());
/// }
/// # Ok(())
/// # }
/// ```
pub async fn fetch(url: &Url, timeout: Duration) -> FetchResult {
    let tls = TlsPolicy::for_url(url);
    debug!(tls = tls.name(), timeout_secs = timeout.as_secs(), "fetch configured");

    let primary = PrimaryStrategy::new(tls);
    let fallback = FallbackStrategy::new(tls);
    fetch_with_fallback(url.as_str(), timeout, &[&primary, &fallback]).await
}

/// Fetch a page by trying `strategies` in order.
///
/// Stops at the first strategy that returns a non-empty body. Failed attempts
/// never abort the chain; when every attempt fails the collected errors are
/// returned in [`FetchResult::Failure`] and the last request error's cause
/// chain is written to stderr.
pub async fn fetch_with_fallback(
    url: &str,
    timeout: Duration,
    strategies: &[&dyn FetchStrategy],
) -> FetchResult {
    strategies::fetch_with_chain(url, timeout, strategies, &mut std::io::stderr()).await
}
