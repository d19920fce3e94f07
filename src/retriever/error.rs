//! Retrieval error type: classified failures callers can react to.

use crate::url_policy::PolicyError;
use std::fmt;

/// Error returned by `get` / `get_bytes`.
///
/// `NotFound`, `Status`, and `TooManyRedirects` are domain outcomes;
/// everything else propagates from the URL policy or the transport layer.
/// Every variant names the URL involved.
#[derive(Debug)]
pub enum FetchError {
    /// The final hop answered 404.
    NotFound { url: String },
    /// Unexpected HTTP status (anything outside 200/301/302/303/404).
    Status { url: String, code: u32 },
    /// The redirect chain exceeded the configured bound. Carries the
    /// original URL requested by the caller, not the last hop.
    TooManyRedirects { url: String },
    /// A redirect response had no Location header.
    MissingLocation { url: String },
    /// The URL (initial or redirect target) was rejected by the policy.
    Policy(PolicyError),
    /// libcurl failed to connect or read (includes timeouts).
    Transport { url: String, source: curl::Error },
    /// The network-access capability could not be acquired.
    Io { url: String, source: std::io::Error },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::NotFound { url } => write!(f, "[{}] not found", url),
            FetchError::Status { url, code } => {
                write!(f, "error during downloading [{}]: HTTP {}", url, code)
            }
            FetchError::TooManyRedirects { url } => {
                write!(f, "too many redirects connecting to [{}]", url)
            }
            FetchError::MissingLocation { url } => {
                write!(f, "redirect from [{}] carried no Location header", url)
            }
            FetchError::Policy(e) => write!(f, "{}", e),
            FetchError::Transport { url, source } => {
                write!(f, "transport failure for [{}]: {}", url, source)
            }
            FetchError::Io { url, source } => {
                write!(f, "network access denied for [{}]: {}", url, source)
            }
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Policy(e) => Some(e),
            FetchError::Transport { source, .. } => Some(source),
            FetchError::Io { source, .. } => Some(source),
            FetchError::NotFound { .. }
            | FetchError::Status { .. }
            | FetchError::TooManyRedirects { .. }
            | FetchError::MissingLocation { .. } => None,
        }
    }
}

impl From<PolicyError> for FetchError {
    fn from(e: PolicyError) -> Self {
        FetchError::Policy(e)
    }
}
