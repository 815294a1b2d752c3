//! In-memory byte channel backed by a lock-free SPSC ring buffer.
//!
//! The two halves implement the session port traits, making this the
//! reference transport for wiring an [`crate::Egress`] on one thread to an
//! [`crate::Ingress`] on another. Blocking waits poll the ring and yield
//! until the deadline passes.

use crate::session::{Inbound, Outbound};
use crate::timing::Deadline;

use bitframe_wire::CodecResult;
use std::time::Duration;

/// Creates a channel holding up to `capacity` in-flight bytes.
pub fn channel(capacity: usize) -> (ChannelTx, ChannelRx) {
    let (tx, rx) = rtrb::RingBuffer::new(capacity);
    (ChannelTx { tx }, ChannelRx { rx })
}

/// Writing half of a [`channel`].
pub struct ChannelTx {
    tx: rtrb::Producer<u8>,
}

/// Reading half of a [`channel`].
pub struct ChannelRx {
    rx: rtrb::Consumer<u8>,
}

impl Outbound for ChannelTx {
    #[inline]
    fn available_bytes(&self) -> usize {
        self.tx.slots()
    }

    fn post(&mut self, tx: &[u8], timeout: Duration) -> CodecResult {
        let deadline = Deadline::after(timeout);
        loop {
            if self.tx.slots() >= tx.len() {
                // The slot check above makes the chunk request infallible.
                let chunk = self.tx.write_chunk_uninit(tx.len()).unwrap();
                chunk.fill_from_iter(tx.iter().copied());
                return CodecResult::success();
            }

            if deadline.expired() {
                return CodecResult::failure();
            }

            std::thread::yield_now();
        }
    }
}

impl Inbound for ChannelRx {
    #[inline]
    fn available_bytes(&self) -> usize {
        self.rx.slots()
    }

    fn request(&mut self, rx: &mut [u8], timeout: Duration) -> CodecResult {
        let deadline = Deadline::after(timeout);
        loop {
            if self.rx.slots() >= rx.len() {
                let chunk = self.rx.read_chunk(rx.len()).unwrap();
                let (head, tail) = chunk.as_slices();
                rx[..head.len()].copy_from_slice(head);
                rx[head.len()..].copy_from_slice(tail);
                chunk.commit_all();
                return CodecResult::success();
            }

            if deadline.expired() {
                return CodecResult::failure();
            }

            std::thread::yield_now();
        }
    }
}
