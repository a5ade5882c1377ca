use super::tls::TlsPolicy;
use super::types::FetchError;
use reqwest::{redirect, Client};
use std::time::Duration;

use super::headers::PRIMARY_USER_AGENT;

const REDIRECT_LIMIT: usize = 10;

/// General-purpose client: rustls, transparent decompression, redirects.
///
/// rustls has no hostname-only switch, so only `verify_certificates` applies
/// here; a hostname-only policy stays strict on this client.
pub(crate) fn build_primary_client(
    tls: TlsPolicy,
    timeout: Duration,
) -> Result<Client, FetchError> {
    Client::builder()
        .use_rustls_tls()
        .user_agent(PRIMARY_USER_AGENT)
        .redirect(redirect::Policy::limited(REDIRECT_LIMIT))
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .timeout(timeout)
        .danger_accept_invalid_certs(primary_accepts_invalid_certs(tls))
        .build()
        .map_err(|e| FetchError::ClientUnavailable(format!("failed to build client: {}", e)))
}

/// Certificate switch for the primary client.
pub(crate) fn primary_accepts_invalid_certs(tls: TlsPolicy) -> bool {
    !tls.verify_certificates
}

/// Bare client: platform TLS with explicit certificate and hostname switches,
/// no content decoding, headers supplied per request.
pub(crate) fn build_fallback_client(
    tls: TlsPolicy,
    timeout: Duration,
) -> Result<Client, FetchError> {
    Client::builder()
        .use_native_tls()
        .redirect(redirect::Policy::limited(REDIRECT_LIMIT))
        .no_gzip()
        .no_brotli()
        .no_deflate()
        .timeout(timeout)
        .danger_accept_invalid_certs(!tls.verify_certificates)
        .danger_accept_invalid_hostnames(!tls.verify_hostnames)
        .build()
        .map_err(|e| FetchError::ClientUnavailable(format!("failed to build client: {}", e)))
}
