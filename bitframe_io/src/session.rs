//! Session port traits.
//!
//! Ports expose how much room (or data) a session currently has and a single
//! transfer operation bounded by a timeout. `Duration::ZERO` requests one
//! non-blocking attempt. Ordering is per caller: bytes from two `post` calls
//! by the same caller are delivered in call order, and data observed through
//! `request` reflects causally earlier posts on the paired endpoint.

use bitframe_wire::CodecResult;
use std::time::Duration;

/// Outbound side of a session: a byte sink with bounded blocking.
pub trait Outbound {
    /// Bytes the session can currently accept without blocking.
    fn available_bytes(&self) -> usize;

    /// Delivers `tx` to the session, blocking at most `timeout`.
    fn post(&mut self, tx: &[u8], timeout: Duration) -> CodecResult;
}

/// Inbound side of a session: a byte source with bounded blocking.
pub trait Inbound {
    /// Bytes the session can currently supply without blocking.
    fn available_bytes(&self) -> usize;

    /// Fills `rx` entirely from the session, blocking at most `timeout`.
    fn request(&mut self, rx: &mut [u8], timeout: Duration) -> CodecResult;
}
