//! A contiguous run of bits.

use core::fmt;

use crate::{
    api::BitInteger,
    utils::{self, OutOfRangeError},
};

/// A contiguous run of `len` bits, starting at bit `pos`.
///
/// A range is a plain description: it is not tied to any integer type, and whether it fits within a given type is
/// only checked when it is applied to that type.
///
/// #   Examples
///
/// ```
/// #   use bit_access::BitRange;
/// let range = BitRange::new(9, 5);
///
/// assert_eq!(0x3E00, range.mask::<u16>());
/// assert_eq!(0x1B, range.extract(0x37ABu16));
///
/// let mut value = 0x37ABu16;
/// range.insert(&mut value, 0x05);
///
/// assert_eq!(0x0BAB, value);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct BitRange {
    /// The position of the first bit of the range.
    pub pos: u32,
    /// The number of bits in the range.
    pub len: u32,
}

//
//  Construction.
//

impl BitRange {
    /// The empty range.
    pub const EMPTY: Self = Self::new(0, 0);

    /// Creates a range of `len` bits, starting at `pos`.
    #[inline]
    pub const fn new(pos: u32, len: u32) -> Self {
        Self { pos, len }
    }

    /// Creates a range of the single bit at `pos`.
    #[inline]
    pub const fn bit(pos: u32) -> Self {
        Self::new(pos, 1)
    }

    /// Creates a range of the byte at `pos`, where byte 0 is the least significant byte.
    ///
    /// ```
    /// #   use bit_access::BitRange;
    /// assert_eq!(BitRange::new(16, 8), BitRange::byte(2));
    /// ```
    #[inline]
    pub const fn byte(pos: u32) -> Self {
        Self::new(pos.saturating_mul(8), 8)
    }

    /// Returns the position one past the last bit of the range.
    #[inline]
    pub const fn end(&self) -> u64 {
        self.pos as u64 + self.len as u64
    }

    /// Returns whether the range is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

//
//  Application.
//

impl BitRange {
    /// Returns whether the range fits within a `T`.
    ///
    /// An empty range fits within any `T`.
    ///
    /// ```
    /// #   use bit_access::BitRange;
    /// assert!(BitRange::new(9, 5).fits::<u16>());
    /// assert!(!BitRange::new(12, 5).fits::<u16>());
    /// assert!(BitRange::new(64, 0).fits::<u8>());
    /// ```
    #[inline]
    pub fn fits<T>(&self) -> bool
    where
        T: BitInteger,
    {
        utils::fits(self.pos, self.len, T::BITS)
    }

    /// Returns the mask of the range.
    ///
    /// #   Panics
    ///
    /// See `create_bit_mask`.
    #[inline]
    #[track_caller]
    pub fn mask<T>(&self) -> T
    where
        T: BitInteger,
    {
        utils::create_bit_mask(self.pos, self.len)
    }

    /// Returns the mask of the range, if it fits within a `T`.
    #[inline]
    pub fn checked_mask<T>(&self) -> Result<T, OutOfRangeError>
    where
        T: BitInteger,
    {
        utils::checked_create_bit_mask(self.pos, self.len)
    }

    /// Returns the bits of `value` within the range, shifted down to the least significant bits.
    ///
    /// #   Panics
    ///
    /// See `get_bit_slice`.
    #[inline]
    #[track_caller]
    pub fn extract<T>(&self, value: T) -> T
    where
        T: BitInteger,
    {
        utils::get_bit_slice(value, self.pos, self.len)
    }

    /// Sets the bits of `value` within the range to the least significant bits of `slice`.
    ///
    /// #   Panics
    ///
    /// See `set_bit_slice`.
    #[inline]
    #[track_caller]
    pub fn insert<T>(&self, value: &mut T, slice: T)
    where
        T: BitInteger,
    {
        utils::set_bit_slice(value, self.pos, self.len, slice);
    }
}

//
//  Common traits
//

impl fmt::Display for BitRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "[{}, {})", self.pos, self.end())
    }
}

// mod tests
