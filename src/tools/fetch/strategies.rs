use super::client::{build_fallback_client, build_primary_client};
use super::headers::fallback_headers;
use super::tls::TlsPolicy;
use super::types::*;
use super::utils::*;
use async_trait::async_trait;
use std::io::Write;
use std::time::{Duration, Instant};
use tracing::debug;

/// One way of turning a URL into a page body.
#[async_trait]
pub trait FetchStrategy: Send + Sync {
    /// Short lowercase name used in progress lines.
    fn name(&self) -> &'static str;

    async fn fetch(&self, url: &str, timeout: Duration) -> Result<FetchedPage, FetchError>;
}

/// General-purpose client. Any HTTP status is accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrimaryStrategy {
    tls: TlsPolicy,
}

impl PrimaryStrategy {
    pub fn new(tls: TlsPolicy) -> Self {
        Self { tls }
    }
}

#[async_trait]
impl FetchStrategy for PrimaryStrategy {
    fn name(&self) -> &'static str {
        "primary"
    }

    async fn fetch(&self, url: &str, timeout: Duration) -> Result<FetchedPage, FetchError> {
        let client = build_primary_client(self.tls, timeout)?;
        let response = client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        Ok(FetchedPage {
            body,
            status: Some(status.as_u16()),
        })
    }
}

/// Bare client with a browser User-Agent. Error statuses fail the attempt and
/// undecodable bytes are dropped from the body.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackStrategy {
    tls: TlsPolicy,
}

impl FallbackStrategy {
    pub fn new(tls: TlsPolicy) -> Self {
        Self { tls }
    }
}

#[async_trait]
impl FetchStrategy for FallbackStrategy {
    fn name(&self) -> &'static str {
        "fallback"
    }

    async fn fetch(&self, url: &str, timeout: Duration) -> Result<FetchedPage, FetchError> {
        let client = build_fallback_client(self.tls, timeout)?;
        let response = client
            .get(url)
            .headers(fallback_headers())
            .send()
            .await?
            .error_for_status()?;
        let status = response.status();
        // Connection goes back to the client when the body is fully read or
        // the response is dropped on error.
        let bytes = response.bytes().await?;

        Ok(FetchedPage {
            body: decode_ignoring_invalid(&bytes),
            status: Some(status.as_u16()),
        })
    }
}

/// Try strategies in order until one returns a non-empty body.
///
/// The cause chain of a final request failure goes to `trace`.
pub(super) async fn fetch_with_chain<W: Write>(
    url: &str,
    timeout: Duration,
    strategies: &[&dyn FetchStrategy],
    trace: &mut W,
) -> FetchResult {
    let start = Instant::now();
    let mut all_errors = Vec::new();

    println!("Attempting to fetch {}...", url);

    for (idx, strategy) in strategies.iter().enumerate() {
        let name = strategy.name();
        let label = capitalize(name);
        let is_last = idx + 1 == strategies.len();

        println!("Using {} client...", name);

        let error = match strategy.fetch(url, timeout).await {
            Ok(page) if !page.body.is_empty() => {
                match page.status {
                    Some(code) => println!("{} successful. Status: {}", label, code),
                    None => println!("{} successful.", label),
                }
                debug!(
                    strategy = name,
                    attempts = idx + 1,
                    duration_ms = start.elapsed().as_millis() as u64,
                    "fetch succeeded"
                );
                return FetchResult::Success {
                    body: page.body,
                    status_code: page.status,
                };
            }
            Ok(_) => {
                println!("{} returned no content.", label);
                FetchError::NoContent
            }
            Err(e) if e.is_client_unavailable() => {
                println!("{} client unavailable: {}", label, e);
                e
            }
            Err(e) => {
                println!("{} failed: {}", label, e);
                if is_last {
                    print_trace(trace, &e);
                }
                e
            }
        };

        debug!(strategy = name, error = %error, "fetch attempt failed");
        all_errors.push(format!("{}: {}", name, error));
    }

    FetchResult::Failure {
        reason: format!(
            "All {} strategies failed: [{}]",
            strategies.len(),
            all_errors.join("; ")
        ),
    }
}

/// Write the full cause chain of the final failure.
pub(super) fn print_trace<W: Write>(out: &mut W, err: &FetchError) {
    let mut lines = error_chain(err).into_iter();
    if let Some(head) = lines.next() {
        let _ = writeln!(out, "Error: {}", head);
    }
    for cause in lines {
        let _ = writeln!(out, "  caused by: {}", cause);
    }
}
