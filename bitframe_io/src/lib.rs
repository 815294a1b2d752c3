//! Session-level transport of encoded packets.
//!
//! `bitframe_wire` turns typed packets into bytes; this crate moves those
//! bytes through session ports. The split keeps the codec core `no_std` and
//! allocation-free while the transport side deals with time, threads, and
//! staging buffers.
//!
//! ## Ports
//!
//! A session is reached through two capability traits: [`Outbound`] (how many
//! bytes the session can accept, and a `post` that may block up to a caller
//! timeout) and [`Inbound`] (the mirror for requesting bytes). A zero timeout
//! always means a single non-blocking attempt. Implementations decide what
//! sits behind the port: a UART, a socket, or the in-memory [`channel`]
//! provided here.
//!
//! ## Typed wrappers
//!
//! [`Egress`] wraps an `Outbound` session and a value type: it stages the
//! encoding in a fixed-capacity scratch buffer, charges the time spent
//! encoding against the caller's timeout, and posts the bytes. [`Ingress`]
//! mirrors it for decoding. Both also implement the blocking-free [`Sink`]
//! and [`Source`] seams for callers that don't care about deadlines.
//!
//! Posted byte ranges can be tracked with a [`Transference`], which stays
//! `Pending` until the session resolves it to complete or failed.

use bitframe_wire::CodecResult;

pub mod session;
pub use session::{Inbound, Outbound};

mod egress;
pub use egress::Egress;

mod ingress;
pub use ingress::Ingress;

mod transference;
pub use transference::{Transfer, TransferResult, Transference};

mod timing;
pub use timing::Deadline;

#[cfg(feature = "rtrb")]
pub mod channel;

/// Default scratch capacity, in bytes, for [`Egress`] and [`Ingress`].
///
/// Generous for control-plane packets; wrappers for larger packet types pick
/// their own capacity through the const parameter.
pub const DEFAULT_SCRATCH_CAP: usize = 64;

/// Accepts typed values, one at a time, without blocking.
pub trait Sink<T> {
    fn put(&mut self, value: &T) -> CodecResult;
}

/// Produces typed values, one at a time, without blocking.
pub trait Source<T> {
    fn get(&mut self, out: &mut T) -> CodecResult;
}
