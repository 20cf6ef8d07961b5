//! The accessors: masks, bits, slices and bytes.

mod bit;
mod byte;
mod error;
mod mask;

pub use bit::{
    checked_flip_bit, checked_get_bit, checked_get_bit_slice, checked_set_bit, checked_set_bit_slice, flip_bit, get_bit,
    get_bit_slice, set_bit, set_bit_slice,
};
pub use byte::{BytePosition, checked_get_byte, checked_set_byte, get_byte, get_byte_const, set_byte, set_byte_const};
pub use error::OutOfRangeError;
pub use mask::{BitMask, checked_create_bit_mask, create_bit_mask};

pub(crate) use mask::{check, fits, raw_mask};
