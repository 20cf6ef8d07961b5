//! Bit and byte accessors over fixed-width integers.
//!
//! #   Organization
//!
//! This crate is composed of two top modules:
//!
//! -   The `api` top module contains the vocabulary: the `BitInteger` trait abstracting over operand types, and the
//!     `BitRange` descriptor of a contiguous run of bits.
//! -   The `utils` module contains the accessors themselves: masks, bits, slices and bytes.
//!
//! All accessors are also re-exported at the root.
//!
//!
//! #   Operands
//!
//! Any of `u8`, `u16`, `u32`, `u64`, `usize`, `i8`, `i16`, `i32`, `i64` and `isize` may be used as an operand. Signed
//! and unsigned operands behave identically, bit for bit: the sign bit is just another bit, and slices are always
//! zero-extended, never sign-extended.
//!
//!
//! #   Byte order
//!
//! Bytes are indexed by significance, not by memory order: byte 0 is always the least significant byte, that is bits
//! `[0, 8)` of the numeric value, regardless of the endianness of the host.
//!
//!
//! #   Checked, unchecked, and compile-time indices
//!
//! Every accessor comes in up to three flavors:
//!
//! -   Unchecked, such as `get_bit`: the caller guarantees the index is in range. In Debug, an out-of-range index
//!     panics. In Release, the result is unspecified, though no panic occurs.
//! -   Checked, such as `checked_get_bit`: an out-of-range index is reported as an `OutOfRangeError`.
//! -   Compile-time, such as `get_byte_const`: the index is a const generic parameter, and an out-of-range index fails
//!     to build.
//!
//! ```
//! #   use bit_access::{get_bit_slice, get_byte, get_byte_const, set_bit};
//! let mut value: u16 = 0xB7AB;
//!
//! set_bit(&mut value, 15, false);
//!
//! assert_eq!(0x37AB, value);
//! assert_eq!(0x1B, get_bit_slice(value, 9, 5));
//! assert_eq!(0x37, get_byte(value, 1));
//! assert_eq!(0xAB, get_byte_const::<0, _>(value));
//! ```

#![cfg_attr(not(test), no_std)]
//  Lints
#![deny(missing_docs)]
//  This author prefers to keep its test modules close to what they are testing.
#![allow(clippy::items_after_test_module)]

pub mod api;
pub mod utils;

pub use api::{BitInteger, BitRange};
pub use utils::{
    BitMask, BytePosition, OutOfRangeError, checked_create_bit_mask, checked_flip_bit, checked_get_bit,
    checked_get_bit_slice, checked_get_byte, checked_set_bit, checked_set_bit_slice, checked_set_byte, create_bit_mask,
    flip_bit, get_bit, get_bit_slice, get_byte, get_byte_const, set_bit, set_bit_slice, set_byte, set_byte_const,
};
