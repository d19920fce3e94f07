//! Network-access capability scoped to one retrieval.
//!
//! Environments that restrict raw socket access can gate connection opening
//! behind a `NetworkAccess` implementation. The scope is acquired once per
//! top-level `get` call and spans the whole redirect chain; it is never
//! re-acquired per hop.

use std::io;

/// Capability for opening outbound connections.
///
/// `acquire` is called once at the start of a retrieval and `release`
/// exactly once when the call returns or fails.
pub trait NetworkAccess: Send + Sync {
    fn acquire(&self) -> io::Result<()>;
    fn release(&self);
}

/// Unrestricted socket access (the default).
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectAccess;

impl NetworkAccess for DirectAccess {
    fn acquire(&self) -> io::Result<()> {
        Ok(())
    }

    fn release(&self) {}
}

/// Releases the acquired access scope when dropped.
pub struct AccessScope<'a> {
    access: &'a dyn NetworkAccess,
}

impl<'a> AccessScope<'a> {
    /// Acquires the capability; the returned guard holds it until drop.
    pub fn enter(access: &'a dyn NetworkAccess) -> io::Result<Self> {
        access.acquire()?;
        Ok(Self { access })
    }
}

impl Drop for AccessScope<'_> {
    fn drop(&mut self) {
        self.access.release();
    }
}
