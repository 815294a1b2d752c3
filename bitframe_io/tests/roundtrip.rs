//! End-to-end transport of packets through the in-memory channel.

#![cfg(feature = "rtrb")]

use bitframe_io::{channel::channel, Egress, Ingress, Sink, Source};
use bitframe_wire::{Bit, BitField, Codec, ConstBitField, Packet};

use std::time::Duration;

type Inner = Packet<(Bit, BitField<15>)>;
type Telemetry = Packet<(BitField<4>, BitField<11>, Bit, Bit, Inner, i8)>;

fn sample() -> Telemetry {
    Telemetry::new((
        BitField::new(0x0F),
        BitField::new(0x5A4),
        Bit::new(true),
        Bit::new(false),
        Inner::new((Bit::new(false), BitField::new(0x5A5A))),
        -42,
    ))
}

#[test]
fn telemetry_round_trips_through_channel() {
    let (tx, rx) = channel(64);

    let mut egress: Egress<Telemetry, _> = Egress::new(tx);
    let mut ingress: Ingress<Telemetry, _> = Ingress::new(rx);

    assert!(egress.put(&sample()).is_success());

    let mut decoded = Telemetry::default();
    assert!(ingress.get(&mut decoded).is_success());
    assert_eq!(decoded, sample());
}

#[test]
fn round_trip_across_threads_with_timeout() {
    let (tx, rx) = channel(64);

    let writer = std::thread::spawn(move || {
        let mut egress: Egress<Telemetry, _> = Egress::new(tx);
        std::thread::sleep(Duration::from_millis(10));
        assert!(egress
            .put_within(&sample(), Duration::from_millis(100))
            .is_success());
    });

    let mut ingress: Ingress<Telemetry, _> = Ingress::new(rx);
    let mut decoded = Telemetry::default();
    assert!(ingress
        .get_within(&mut decoded, Duration::from_secs(5))
        .is_success());
    assert_eq!(decoded, sample());

    writer.join().unwrap();
}

#[test]
fn values_arrive_in_put_order() {
    let (tx, rx) = channel(64);

    let mut egress: Egress<u16, _> = Egress::new(tx);
    let mut ingress: Ingress<u16, _> = Ingress::new(rx);

    for value in [0xA55Au16, 0x5AA5, 0x0001] {
        assert!(Sink::put(&mut egress, &value).is_success());
    }

    for expected in [0xA55Au16, 0x5AA5, 0x0001] {
        let mut decoded = 0u16;
        assert!(Source::get(&mut ingress, &mut decoded).is_success());
        assert_eq!(decoded, expected);
    }
}

#[test]
fn reserved_regions_survive_transport_untouched() {
    type Frame = Packet<(ConstBitField<3>, BitField<5>, u8)>;

    let (tx, rx) = channel(16);
    let mut egress: Egress<Frame, _> = Egress::new(tx);
    let mut ingress: Ingress<Frame, _> = Ingress::new(rx);

    let frame = Frame::new((ConstBitField::new(0x05), BitField::new(0x11), 0xA5));
    assert!(egress.put(&frame).is_success());

    // The receiver's reserved field keeps its own constructed value no
    // matter what the wire carried.
    let mut decoded = Frame::new((ConstBitField::new(0x02), BitField::default(), 0));
    assert!(ingress.get(&mut decoded).is_success());

    assert_eq!(decoded.field::<0>().get(), 0x02);
    assert_eq!(decoded.field::<1>().get(), 0x11);
    assert_eq!(*decoded.field::<2>(), 0xA5);
}

#[test]
fn undersized_channel_refuses_the_put() {
    let (tx, _rx) = channel(2);

    let mut egress: Egress<Telemetry, _> = Egress::new(tx);
    assert!(egress.put(&sample()).is_failure());
}

#[test]
fn footprints_agree_across_the_pair() {
    assert_eq!(<Telemetry as Codec>::SIZE_BITS, 48);
    assert_eq!(<Telemetry as Codec>::SIZE_BYTES, 6);
}
