//! Typed outbound wrapper: encode a value and post its bytes.

use crate::session::Outbound;
use crate::{Sink, DEFAULT_SCRATCH_CAP};

use arrayvec::ArrayVec;
use bitframe_wire::{Codec, CodecResult};
use core::iter;
use core::marker::PhantomData;
use std::time::{Duration, Instant};

/// Puts values of one type to an [`Outbound`] session.
///
/// Each put stages the encoding in a stack scratch buffer sized by the `CAP`
/// parameter (checked at compile time against the value's footprint), then
/// posts the bytes. Time spent encoding is charged against the caller's
/// timeout, so the deadline bounds the whole operation; if encoding alone
/// exhausts it, the post is still issued as a non-blocking attempt.
pub struct Egress<T, O, const CAP: usize = DEFAULT_SCRATCH_CAP> {
    session: O,
    _value: PhantomData<fn(T)>,
}

impl<T: Codec, O: Outbound, const CAP: usize> Egress<T, O, CAP> {
    pub fn new(session: O) -> Self {
        const {
            assert!(
                T::SIZE_BYTES <= CAP,
                "scratch capacity cannot hold the value's footprint"
            )
        };

        Self {
            session,
            _value: PhantomData,
        }
    }

    /// Posts `value` with a single non-blocking attempt.
    #[inline]
    pub fn put(&mut self, value: &T) -> CodecResult {
        self.put_within(value, Duration::ZERO)
    }

    /// Posts `value`, blocking at most `timeout` end to end.
    pub fn put_within(&mut self, value: &T, timeout: Duration) -> CodecResult {
        // Refuse before encoding if the session has no room for the packet.
        if self.session.available_bytes() < T::SIZE_BYTES {
            return CodecResult::failure();
        }

        let started = Instant::now();

        let mut scratch = ArrayVec::<u8, CAP>::new();
        scratch.extend(iter::repeat_n(0u8, T::SIZE_BYTES));

        let mut offset_bits = 0;
        let result = value.encode(&mut scratch, &mut offset_bits);
        if result.is_failure() {
            return result;
        }

        let remaining = timeout.saturating_sub(started.elapsed());
        self.session.post(&scratch, remaining)
    }

    #[inline(always)]
    pub fn session(&self) -> &O {
        &self.session
    }

    #[inline(always)]
    pub fn into_session(self) -> O {
        self.session
    }
}

impl<T: Codec, O: Outbound, const CAP: usize> Sink<T> for Egress<T, O, CAP> {
    #[inline]
    fn put(&mut self, value: &T) -> CodecResult {
        Egress::put(self, value)
    }
}
