//! Typed inbound wrapper: request bytes and decode a value.

use crate::session::Inbound;
use crate::{Source, DEFAULT_SCRATCH_CAP};

use arrayvec::ArrayVec;
use bitframe_wire::{Codec, CodecResult};
use core::iter;
use core::marker::PhantomData;
use std::time::Duration;

/// Gets values of one type from an [`Inbound`] session.
///
/// Each get requests the value's exact footprint into a stack scratch buffer
/// (capacity checked at compile time), then decodes from cursor zero. The
/// timeout is handed to the session's `request` unchanged.
pub struct Ingress<T, I, const CAP: usize = DEFAULT_SCRATCH_CAP> {
    session: I,
    _value: PhantomData<fn(T)>,
}

impl<T: Codec, I: Inbound, const CAP: usize> Ingress<T, I, CAP> {
    pub fn new(session: I) -> Self {
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

    /// Fills `out` with a single non-blocking attempt.
    #[inline]
    pub fn get(&mut self, out: &mut T) -> CodecResult {
        self.get_within(out, Duration::ZERO)
    }

    /// Fills `out`, blocking at most `timeout` on the session.
    pub fn get_within(&mut self, out: &mut T, timeout: Duration) -> CodecResult {
        // Refuse before requesting if the session cannot supply the packet.
        if self.session.available_bytes() < T::SIZE_BYTES {
            return CodecResult::failure();
        }

        let mut scratch = ArrayVec::<u8, CAP>::new();
        scratch.extend(iter::repeat_n(0u8, T::SIZE_BYTES));

        let result = self.session.request(&mut scratch, timeout);
        if result.is_failure() {
            return result;
        }

        let mut offset_bits = 0;
        out.decode(&scratch, &mut offset_bits)
    }

    #[inline(always)]
    pub fn session(&self) -> &I {
        &self.session
    }

    #[inline(always)]
    pub fn into_session(self) -> I {
        self.session
    }
}

impl<T: Codec, I: Inbound, const CAP: usize> Source<T> for Ingress<T, I, CAP> {
    #[inline]
    fn get(&mut self, out: &mut T) -> CodecResult {
        Ingress::get(self, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Inbound;

    /// Supplies scripted bytes and records request timeouts.
    struct MockInbound {
        data: Vec<u8>,
        response: CodecResult,
        requests: Vec<(usize, Duration)>,
    }

    impl MockInbound {
        fn new(data: Vec<u8>, response: CodecResult) -> Self {
            Self {
                data,
                response,
                requests: Vec::new(),
            }
        }
    }

    impl Inbound for MockInbound {
        fn available_bytes(&self) -> usize {
            self.data.len()
        }

        fn request(&mut self, rx: &mut [u8], timeout: Duration) -> CodecResult {
            self.requests.push((rx.len(), timeout));
            if self.response.is_success() {
                rx.copy_from_slice(&self.data[..rx.len()]);
            }
            self.response
        }
    }

    #[test]
    fn nominal_success() {
        let expected: i32 = 42;

        let mut ingress: Ingress<i32, _> = Ingress::new(MockInbound::new(
            expected.to_ne_bytes().to_vec(),
            CodecResult::success(),
        ));

        let mut decoded = 0i32;
        assert!(ingress.get(&mut decoded).is_success());
        assert_eq!(decoded, expected);

        let session = ingress.into_session();
        assert_eq!(session.requests, [(size_of::<i32>(), Duration::ZERO)]);
    }

    #[test]
    fn timeout_passes_through() {
        let timeout = Duration::from_millis(250);

        let mut ingress: Ingress<u16, _> =
            Ingress::new(MockInbound::new(vec![0x5A, 0xA5], CodecResult::success()));

        let mut decoded = 0u16;
        assert!(ingress.get_within(&mut decoded, timeout).is_success());
        assert_eq!(ingress.session().requests[0].1, timeout);
    }

    #[test]
    fn session_without_data_is_not_requested() {
        let mut ingress: Ingress<i32, _> =
            Ingress::new(MockInbound::new(Vec::new(), CodecResult::success()));

        let mut decoded = 0i32;
        assert!(ingress.get(&mut decoded).is_failure());
        assert_eq!(decoded, 0);
        assert!(ingress.session().requests.is_empty());
    }

    #[test]
    fn request_failure_propagates() {
        let mut ingress: Ingress<i32, _> =
            Ingress::new(MockInbound::new(vec![0u8; 4], CodecResult::failure()));

        let mut decoded = 0i32;
        assert!(ingress.get(&mut decoded).is_failure());
        assert_eq!(ingress.session().requests.len(), 1);
    }

    #[test]
    fn packet_values_decode_from_wire_bytes() {
        use bitframe_wire::{BitField, Packet};

        type Header = Packet<(BitField<3>, BitField<4>, BitField<6>, BitField<3>)>;

        let mut ingress: Ingress<Header, _> =
            Ingress::new(MockInbound::new(vec![0xD6, 0x6A], CodecResult::success()));

        let mut decoded = Header::default();
        assert!(ingress.get(&mut decoded).is_success());

        assert_eq!(decoded.field::<0>().get(), 0x06);
        assert_eq!(decoded.field::<1>().get(), 0x0A);
        assert_eq!(decoded.field::<2>().get(), 0x15);
        assert_eq!(decoded.field::<3>().get(), 0x03);
    }
}
