//! Synchronous HTTP retrieval with bounded, self-managed redirects.
//!
//! `Retriever` opens one connection per hop with transport-level redirect
//! following disabled, classifies the response status, and either returns
//! the buffered body, follows the Location header, or fails with a
//! classified error. One retrieval is one blocking call; the retriever
//! holds no mutable state, so concurrent callers need no locking.

mod classify;
mod connect;
mod error;

pub use classify::{classify_status, StatusClass};
pub use connect::Response;
pub use error::FetchError;

use crate::access::{AccessScope, DirectAccess, NetworkAccess};
use crate::config::FetchConfig;
use crate::url_policy::UrlPolicy;
use std::io::{self, Cursor, Read};
use std::sync::Arc;

/// Buffered response body positioned at the start of the resource.
///
/// The transfer is fully drained into memory during the final successful
/// connection attempt; callers can read it as a stream or take the bytes.
#[derive(Debug)]
pub struct Body {
    inner: Cursor<Vec<u8>>,
}

impl Body {
    fn new(bytes: Vec<u8>) -> Self {
        Self {
            inner: Cursor::new(bytes),
        }
    }

    /// Consumes the body and returns the full buffer, regardless of how
    /// much has already been read through the `Read` impl.
    pub fn into_bytes(self) -> Vec<u8> {
        self.inner.into_inner()
    }
}

impl Read for Body {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

/// Synchronous retriever: GET a URL, follow redirects itself, classify
/// failures so callers can react to them.
pub struct Retriever {
    config: FetchConfig,
    policy: UrlPolicy,
    access: Arc<dyn NetworkAccess>,
}

impl Retriever {
    /// Retriever with default policy values and unrestricted socket access.
    pub fn new() -> Self {
        Self::with_config(FetchConfig::default())
    }

    pub fn with_config(config: FetchConfig) -> Self {
        Self::with_parts(config, UrlPolicy::default(), Arc::new(DirectAccess))
    }

    /// Full form: custom config, URL policy, and network-access capability.
    pub fn with_parts(
        config: FetchConfig,
        policy: UrlPolicy,
        access: Arc<dyn NetworkAccess>,
    ) -> Self {
        Self {
            config,
            policy,
            access,
        }
    }

    /// Fully drains the resource at `url` into an in-memory byte buffer.
    ///
    /// Fails with whatever `get` fails with.
    pub fn get_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        Ok(self.get(url)?.into_bytes())
    }

    /// Retrieves `url`, following up to the configured number of redirects,
    /// and returns the buffered response body.
    pub fn get(&self, url: &str) -> Result<Body, FetchError> {
        // One access scope for the whole chain, released on every exit path.
        let _scope = AccessScope::enter(self.access.as_ref()).map_err(|source| {
            FetchError::Io {
                url: url.to_string(),
                source,
            }
        })?;

        let mut target = self.policy.validate(url)?;
        let mut redirects = 0u32;
        loop {
            let response =
                connect::open(&target, &self.config).map_err(|source| FetchError::Transport {
                    url: target.to_string(),
                    source,
                })?;
            match classify::classify_status(response.status()) {
                StatusClass::Ok => return Ok(Body::new(response.into_body())),
                StatusClass::Redirect => {
                    redirects += 1;
                    if redirects > self.config.max_redirects {
                        tracing::warn!("redirect bound exceeded retrieving {}", url);
                        return Err(FetchError::TooManyRedirects {
                            url: url.to_string(),
                        });
                    }
                    let location = match response.header("Location") {
                        Some(l) => l.to_string(),
                        None => {
                            return Err(FetchError::MissingLocation {
                                url: target.to_string(),
                            })
                        }
                    };
                    let next = self.policy.resolve(&target, &location)?;
                    tracing::debug!("redirect {} -> {}", target, next);
                    target = next;
                }
                StatusClass::NotFound => {
                    return Err(FetchError::NotFound {
                        url: target.to_string(),
                    })
                }
                StatusClass::Other => {
                    return Err(FetchError::Status {
                        url: target.to_string(),
                        code: response.status(),
                    })
                }
            }
        }
    }
}

impl Default for Retriever {
    fn default() -> Self {
        Self::new()
    }
}
