//! TLS validation policy applied when building a client.
//!
//! Strict by default. The only relaxed configuration is the one returned by
//! [`TlsPolicy::for_url`] for [`LEGACY_RELAXED_HOST`], whose certificate chain
//! does not validate.

use url::Url;

/// Host served with a broken certificate chain.
///
/// INSECURE: requests to this host skip certificate and hostname checks.
pub const LEGACY_RELAXED_HOST: &str = "ktdbcl.actvn.edu.vn";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TlsPolicy {
    /// Reject certificates that do not chain to a trusted root
    pub verify_certificates: bool,
    /// Reject certificates issued for a different host
    pub verify_hostnames: bool,
}

impl Default for TlsPolicy {
    fn default() -> Self {
        Self::strict()
    }
}

impl TlsPolicy {
    pub fn strict() -> Self {
        Self {
            verify_certificates: true,
            verify_hostnames: true,
        }
    }

    /// No certificate or hostname validation at all.
    pub fn relaxed() -> Self {
        Self {
            verify_certificates: false,
            verify_hostnames: false,
        }
    }

    /// Pick the policy for a target URL.
    ///
    /// Everything is strict except the legacy host.
    pub fn for_url(url: &Url) -> Self {
        match url.host_str() {
            Some(host) if host.eq_ignore_ascii_case(LEGACY_RELAXED_HOST) => Self::relaxed(),
            _ => Self::strict(),
        }
    }

    /// Certificate chains are not verified.
    pub fn is_relaxed(&self) -> bool {
        !self.verify_certificates
    }

    pub fn name(&self) -> &'static str {
        match (self.verify_certificates, self.verify_hostnames) {
            (true, true) => "strict",
            (true, false) => "hostname-unchecked",
            (false, _) => "relaxed",
        }
    }
}
