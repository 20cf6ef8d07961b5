//! The integer types which accessors operate on.

use core::{fmt, hash::Hash};

/// A fixed-width integer, of at most 64 bits, whose bits and bytes may be accessed.
///
/// The trait is implemented for `u8`, `u16`, `u32`, `u64`, `usize`, `i8`, `i16`, `i32`, `i64` and `isize`, and is
/// sealed: the accessors rely on `BITS` being a multiple of 8, no greater than 64.
///
/// #   Raw image
///
/// All accessors operate on the _raw image_ of the integer: its bits, zero-extended to a `u64`. This makes signed and
/// unsigned integers of the same width strictly equivalent: `-1i16` and `0xFFFFu16` share the same raw image.
///
/// ```
/// #   use bit_access::BitInteger;
/// assert_eq!(0xFFFF, (-1i16).into_raw());
/// assert_eq!(0xFFFF, 0xFFFFu16.into_raw());
///
/// assert_eq!(-1i16, i16::from_raw(0xFFFF));
/// assert_eq!(0x5678u16, u16::from_raw(0x1234_5678));
/// ```
pub trait BitInteger: Copy + Default + Eq + Hash + Ord + fmt::Debug + sealed::Sealed {
    /// Number of bits in the integer.
    const BITS: u32;

    /// Number of bytes in the integer.
    const BYTES: u32 = Self::BITS / 8;

    /// Returns the integer whose bits are the low `Self::BITS` bits of `raw`.
    ///
    /// Any higher bit of `raw` is ignored.
    fn from_raw(raw: u64) -> Self;

    /// Returns the bits of the integer, zero-extended to 64 bits.
    fn into_raw(self) -> u64;
}

macro_rules! impl_bit_integer {
    ($($int:ty => $uint:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $int {}

            impl BitInteger for $int {
                const BITS: u32 = <$int>::BITS;

                #[inline]
                fn from_raw(raw: u64) -> Self {
                    raw as Self
                }

                #[inline]
                fn into_raw(self) -> u64 {
                    //  Going through the unsigned type of the same width zero-extends, rather than sign-extends.
                    self as $uint as u64
                }
            }
        )*
    };
}

impl_bit_integer!(
    u8 => u8,
    u16 => u16,
    u32 => u32,
    u64 => u64,
    usize => usize,
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    isize => usize,
);

mod sealed {
    pub trait Sealed {}
}

// mod tests
