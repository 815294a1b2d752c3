//! Ordered, type-level composition of fields into packets.
//!
//! A [`Packet`] is parameterised by a tuple of field types (arity 1..=12).
//! Its wire layout is produced by a virtual cursor walking the tuple in
//! order: aligned fields and nested packets first snap the cursor up to the
//! next byte boundary, bit fields consume the cursor as-is, and after the
//! last field the cursor is padded out to a byte boundary. The same rule
//! drives both the size constants and the codec traversal, which is unrolled
//! per tuple arity with no runtime field table.
//!
//! Packets nest by value: a `Packet<..>` used as a tuple element is an
//! aligned field of the outer packet, and its own tail padding guarantees
//! the next field starts on a byte boundary.

use crate::bits::{bit_len, byte_len, next_boundary};
use crate::codec::Codec;
use crate::result::CodecResult;

/// Cursor advance for one field under the padding rule.
const fn field_span(aligned: bool, aggregate: usize, size_bits: usize) -> usize {
    let start = if aligned { next_boundary(aggregate) } else { aggregate };
    start + size_bits
}

/// A tuple of field types walkable by the packet codec.
///
/// Implemented for tuples of [`Codec`] elements up to arity 12.
pub trait FieldList {
    const NUM_FIELDS: usize;

    /// Bits consumed by the fields under the padding rule, before tail
    /// padding.
    const PACKED_BITS: usize;

    fn encode_fields(&self, buffer: &mut [u8], offset_bits: &mut usize) -> CodecResult;

    fn decode_fields(&mut self, buffer: &[u8], offset_bits: &mut usize) -> CodecResult;
}

/// An ordered composition of fields with a byte-aligned wire footprint.
///
/// The in-memory representation is the field tuple itself, so host padding
/// between carriers is unrelated to the encoded layout; only
/// [`Codec::encode`] produces wire bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Packet<F: FieldList> {
    fields: F,
}

impl<F: FieldList> Packet<F> {
    pub const NUM_FIELDS: usize = F::NUM_FIELDS;

    #[inline(always)]
    pub const fn new(fields: F) -> Self {
        Self { fields }
    }

    /// Borrows the field at `INDEX`; resolves to the field's own type.
    #[inline(always)]
    pub fn field<const INDEX: usize>(&self) -> &<Self as FieldAt<INDEX>>::Field
    where
        Self: FieldAt<INDEX>,
    {
        <Self as FieldAt<INDEX>>::field(self)
    }

    /// Mutably borrows the field at `INDEX`.
    #[inline(always)]
    pub fn field_mut<const INDEX: usize>(&mut self) -> &mut <Self as FieldAt<INDEX>>::Field
    where
        Self: FieldAt<INDEX>,
    {
        <Self as FieldAt<INDEX>>::field_mut(self)
    }

    #[inline(always)]
    pub fn fields(&self) -> &F {
        &self.fields
    }

    #[inline(always)]
    pub fn into_fields(self) -> F {
        self.fields
    }
}

impl<F: FieldList> Codec for Packet<F> {
    const SIZE_BITS: usize = next_boundary(F::PACKED_BITS);
    const ALIGNED: bool = true;

    fn encode(&self, buffer: &mut [u8], offset_bits: &mut usize) -> CodecResult {
        // Snap the start to a byte boundary and check the whole footprint
        // once; per-field checks cannot fail after this.
        let byte_start = byte_len(*offset_bits);
        if byte_start + Self::SIZE_BYTES > buffer.len() {
            return CodecResult::failure();
        }

        let mut local = bit_len(byte_start);
        let result = self.fields.encode_fields(buffer, &mut local);
        if result.is_success() {
            *offset_bits = next_boundary(local);
        }
        result
    }

    fn decode(&mut self, buffer: &[u8], offset_bits: &mut usize) -> CodecResult {
        let byte_start = byte_len(*offset_bits);
        if byte_start + Self::SIZE_BYTES > buffer.len() {
            return CodecResult::failure();
        }

        let mut local = bit_len(byte_start);
        let result = self.fields.decode_fields(buffer, &mut local);
        if result.is_success() {
            *offset_bits = next_boundary(local);
        }
        result
    }
}

/// Typed positional access into a packet's field tuple.
pub trait FieldAt<const INDEX: usize> {
    type Field;

    fn field(&self) -> &Self::Field;

    fn field_mut(&mut self) -> &mut Self::Field;
}

macro_rules! impl_field_list {
    ($($field:ident $index:tt),+) => {
        impl<$($field: Codec),+> FieldList for ($($field,)+) {
            const NUM_FIELDS: usize = [$($index,)+].len();

            const PACKED_BITS: usize = {
                let bits = 0usize;
                $(let bits = field_span($field::ALIGNED, bits, $field::SIZE_BITS);)+
                bits
            };

            fn encode_fields(&self, buffer: &mut [u8], offset_bits: &mut usize) -> CodecResult {
                $(
                    let result = self.$index.encode(buffer, offset_bits);
                    if result.is_failure() {
                        return result;
                    }
                )+
                CodecResult::success()
            }

            fn decode_fields(&mut self, buffer: &[u8], offset_bits: &mut usize) -> CodecResult {
                $(
                    let result = self.$index.decode(buffer, offset_bits);
                    if result.is_failure() {
                        return result;
                    }
                )+
                CodecResult::success()
            }
        }
    };
}

macro_rules! impl_field_at {
    ($list:tt { $($field:ident $index:tt),+ }) => {
        $(
            impl_field_at_one!($list $field $index);
        )+
    };
}

macro_rules! impl_field_at_one {
    ([$($list:ident),+] $field:ident $index:tt) => {
        impl<$($list: Codec),+> FieldAt<$index> for Packet<($($list,)+)> {
            type Field = $field;

            #[inline(always)]
            fn field(&self) -> &$field {
                &self.fields.$index
            }

            #[inline(always)]
            fn field_mut(&mut self) -> &mut $field {
                &mut self.fields.$index
            }
        }
    };
}

impl_field_list!(F0 0);
impl_field_list!(F0 0, F1 1);
impl_field_list!(F0 0, F1 1, F2 2);
impl_field_list!(F0 0, F1 1, F2 2, F3 3);
impl_field_list!(F0 0, F1 1, F2 2, F3 3, F4 4);
impl_field_list!(F0 0, F1 1, F2 2, F3 3, F4 4, F5 5);
impl_field_list!(F0 0, F1 1, F2 2, F3 3, F4 4, F5 5, F6 6);
impl_field_list!(F0 0, F1 1, F2 2, F3 3, F4 4, F5 5, F6 6, F7 7);
impl_field_list!(F0 0, F1 1, F2 2, F3 3, F4 4, F5 5, F6 6, F7 7, F8 8);
impl_field_list!(F0 0, F1 1, F2 2, F3 3, F4 4, F5 5, F6 6, F7 7, F8 8, F9 9);
impl_field_list!(F0 0, F1 1, F2 2, F3 3, F4 4, F5 5, F6 6, F7 7, F8 8, F9 9, F10 10);
impl_field_list!(F0 0, F1 1, F2 2, F3 3, F4 4, F5 5, F6 6, F7 7, F8 8, F9 9, F10 10, F11 11);

impl_field_at!([F0] { F0 0 });
impl_field_at!([F0, F1] { F0 0, F1 1 });
impl_field_at!([F0, F1, F2] { F0 0, F1 1, F2 2 });
impl_field_at!([F0, F1, F2, F3] { F0 0, F1 1, F2 2, F3 3 });
impl_field_at!([F0, F1, F2, F3, F4] { F0 0, F1 1, F2 2, F3 3, F4 4 });
impl_field_at!([F0, F1, F2, F3, F4, F5] { F0 0, F1 1, F2 2, F3 3, F4 4, F5 5 });
impl_field_at!([F0, F1, F2, F3, F4, F5, F6] { F0 0, F1 1, F2 2, F3 3, F4 4, F5 5, F6 6 });
impl_field_at!([F0, F1, F2, F3, F4, F5, F6, F7] {
    F0 0, F1 1, F2 2, F3 3, F4 4, F5 5, F6 6, F7 7
});
impl_field_at!([F0, F1, F2, F3, F4, F5, F6, F7, F8] {
    F0 0, F1 1, F2 2, F3 3, F4 4, F5 5, F6 6, F7 7, F8 8
});
impl_field_at!([F0, F1, F2, F3, F4, F5, F6, F7, F8, F9] {
    F0 0, F1 1, F2 2, F3 3, F4 4, F5 5, F6 6, F7 7, F8 8, F9 9
});
impl_field_at!([F0, F1, F2, F3, F4, F5, F6, F7, F8, F9, F10] {
    F0 0, F1 1, F2 2, F3 3, F4 4, F5 5, F6 6, F7 7, F8 8, F9 9, F10 10
});
impl_field_at!([F0, F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11] {
    F0 0, F1 1, F2 2, F3 3, F4 4, F5 5, F6 6, F7 7, F8 8, F9 9, F10 10, F11 11
});
