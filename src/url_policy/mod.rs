//! URL validation for retrieval targets.
//!
//! Accepts HTTP/HTTPS URLs only and rejects well-known internal
//! infrastructure hosts (cloud metadata endpoints). Applied to the caller's
//! URL and to every resolved redirect target.

mod hosts;

pub use hosts::is_denied_host;

use thiserror::Error;
use url::Url;

/// A URL was rejected before any connection was opened.
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("invalid URL [{url}]: {source}")]
    Parse {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("scheme \"{scheme}\" not allowed for [{url}]")]
    SchemeNotAllowed { url: String, scheme: String },
    #[error("URL [{url}] has no host")]
    MissingHost { url: String },
    #[error("host \"{host}\" is a denied infrastructure target in [{url}]")]
    DeniedHost { url: String, host: String },
}

/// Scheme allow-list and host deny-list applied to every target.
#[derive(Debug, Clone, Default)]
pub struct UrlPolicy {
    extra_denied_hosts: Vec<String>,
}

impl UrlPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a host to the deny list on top of the built-in targets.
    pub fn deny_host(mut self, host: impl Into<String>) -> Self {
        self.extra_denied_hosts.push(host.into());
        self
    }

    /// Parses and validates a caller-supplied URL string.
    pub fn validate(&self, url: &str) -> Result<Url, PolicyError> {
        let parsed = Url::parse(url).map_err(|source| PolicyError::Parse {
            url: url.to_string(),
            source,
        })?;
        self.check(parsed)
    }

    /// Resolves a redirect `Location` value (relative or absolute) against
    /// the current target, then validates the result.
    pub fn resolve(&self, base: &Url, location: &str) -> Result<Url, PolicyError> {
        let joined = base.join(location).map_err(|source| PolicyError::Parse {
            url: location.to_string(),
            source,
        })?;
        self.check(joined)
    }

    fn check(&self, url: Url) -> Result<Url, PolicyError> {
        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(PolicyError::SchemeNotAllowed {
                    url: url.to_string(),
                    scheme: other.to_string(),
                })
            }
        }
        let host = url.host_str().ok_or_else(|| PolicyError::MissingHost {
            url: url.to_string(),
        })?;
        if hosts::is_denied_host(host)
            || self
                .extra_denied_hosts
                .iter()
                .any(|h| h.eq_ignore_ascii_case(host))
        {
            return Err(PolicyError::DeniedHost {
                url: url.to_string(),
                host: host.to_string(),
            });
        }
        Ok(url)
    }
}
