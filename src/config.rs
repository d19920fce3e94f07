use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Retrieval policy parameters (redirect bound and per-connection timeouts).
///
/// Intended to be embedded as an optional section in the host application's
/// config file; if absent, built-in defaults are used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Maximum number of redirect hops followed before aborting.
    pub max_redirects: u32,
    /// Connect timeout per connection attempt, in seconds.
    pub connect_timeout_secs: u64,
    /// Read timeout per connection attempt, in seconds: the transfer is
    /// aborted if no data arrives for this long.
    pub read_timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            max_redirects: 50,
            connect_timeout_secs: 10,
            read_timeout_secs: 10,
        }
    }
}

impl FetchConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }
}
