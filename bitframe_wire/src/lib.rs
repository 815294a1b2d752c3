#![cfg_attr(not(test), no_std)]
//! A compile-time composable codec for wire-level data structures.
//!
//! This crate describes heterogeneous records as ordered compositions of typed
//! fields and mechanically encodes/decodes them to and from raw byte buffers.
//! Adjacent sub-byte fields are packed bit-tight; byte-aligned fields are
//! padded out to the next byte boundary. Every size and offset involved is an
//! associated constant, resolved when the packet type is instantiated.
//!
//! ## Field kinds
//!
//! A packet is a [`Packet`] over a tuple of field types, where each element is
//! one of:
//!
//! - a bare primitive (`u8`..`u64`, `i8`..`i64`, `f32`, `f64`, `usize`,
//!   `isize`, `bool`) or its explicit wrapper [`Field`], encoded on a byte
//!   boundary in host byte order,
//! - a [`BitField`] with an arbitrary width of 1..=64 bits, packed tight
//!   against whatever precedes it,
//! - a [`ConstBitField`], a reserved bit region whose value is fixed at
//!   construction and never overwritten by decoding,
//! - another [`Packet`], nested by value.
//!
//! ## Cursor discipline
//!
//! Every codec operation takes an in/out bit cursor. On entry it marks the
//! minimum start offset; on success it is advanced to one past the last
//! produced bit (a byte boundary for aligned and packet operations). A failed
//! operation leaves the cursor exactly as the caller passed it, so sequenced
//! encodes can stop at the first refusal without losing position.
//!
//! ## Example
//!
//! ```
//! use bitframe_wire::{Bit, BitField, Codec, Packet};
//!
//! type Header = Packet<(BitField<3>, BitField<4>, Bit, u8)>;
//!
//! let header = Header::new((BitField::new(0x06), BitField::new(0x0A), Bit::new(true), 0xFF));
//! let mut buffer = [0u8; <Header as Codec>::SIZE_BYTES];
//! let mut cursor = 0;
//! assert!(header.encode(&mut buffer, &mut cursor).is_success());
//! assert_eq!(cursor, <Header as Codec>::SIZE_BITS);
//! ```
//!
//! The crate is `no_std`, never allocates, and performs no I/O; transporting
//! encoded bytes is the concern of `bitframe_io`.

pub mod bits;
pub mod codec;
pub mod field;
pub mod packet;
pub mod result;

pub use codec::Codec;
pub use field::{Bit, BitField, ConstBit, ConstBitField, Field};
pub use packet::{FieldAt, FieldList, Packet};
pub use result::{Binary, Code, CodecResult, Status};
