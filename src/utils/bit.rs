//  Bit, and bit slice, accessors.
//
//  All accessors operate on the raw image of the integer, hence are oblivious to its sign.

use crate::{
    api::BitInteger,
    utils::{OutOfRangeError, check, fits, raw_mask},
};

//
//  Slice operations.
//

/// Returns the `len` bits of `value` starting at `pos`, shifted down to the least significant bits.
///
/// The slice is zero-extended, even for signed integers, and an empty slice, that is `len == 0`, yields 0.
///
/// #   Panics
///
/// In Debug, panics if `pos + len` is strictly greater than `T::BITS`, unless `len == 0`.
///
/// In Release, the result of an out-of-range slice is unspecified.
///
/// #   Examples
///
/// ```
/// #   use bit_access::get_bit_slice;
/// //  0011 0111 1010 1011 -> 0000 0000 0001 1011
/// assert_eq!(0x001B, get_bit_slice(0x37ABu16, 9, 5));
///
/// //  1011 0111 1010 1011 -> 0000 0000 0101 1011
/// assert_eq!(0x005B, get_bit_slice(0xB7ABu16 as i16, 9, 7));
/// ```
#[inline]
#[track_caller]
pub fn get_bit_slice<T>(value: T, pos: u32, len: u32) -> T
where
    T: BitInteger,
{
    debug_assert!(fits(pos, len, T::BITS), "bit slice out of range of the integer");

    let mask = raw_mask(pos, len);

    T::from_raw((value.into_raw() & mask).wrapping_shr(pos))
}

/// Sets the `len` bits of `value` starting at `pos` to the `len` least significant bits of `slice`.
///
/// All other bits of `value` are left unchanged, and so are the bits of `slice` beyond the first `len`.
///
/// #   Panics
///
/// In Debug, panics if `pos + len` is strictly greater than `T::BITS`, unless `len == 0`.
///
/// In Release, the result of an out-of-range slice is unspecified.
///
/// #   Examples
///
/// ```
/// #   use bit_access::set_bit_slice;
/// let mut value = 0x37ABu16;
///
/// set_bit_slice(&mut value, 9, 5, 0x05);
///
/// assert_eq!(0x0BAB, value);
/// ```
#[inline]
#[track_caller]
pub fn set_bit_slice<T>(value: &mut T, pos: u32, len: u32, slice: T)
where
    T: BitInteger,
{
    debug_assert!(fits(pos, len, T::BITS), "bit slice out of range of the integer");

    let mask = raw_mask(pos, len);
    let slice = slice.into_raw().wrapping_shl(pos) & mask;

    *value = T::from_raw((value.into_raw() & !mask) | slice);
}

/// Returns the `len` bits of `value` starting at `pos`, if the slice fits in `T`.
///
/// See `get_bit_slice`.
#[inline]
pub fn checked_get_bit_slice<T>(value: T, pos: u32, len: u32) -> Result<T, OutOfRangeError>
where
    T: BitInteger,
{
    check::<T>(pos, len)?;

    Ok(get_bit_slice(value, pos, len))
}

/// Sets the `len` bits of `value` starting at `pos`, if the slice fits in `T`.
///
/// On error, `value` is left unchanged. See `set_bit_slice`.
#[inline]
pub fn checked_set_bit_slice<T>(value: &mut T, pos: u32, len: u32, slice: T) -> Result<(), OutOfRangeError>
where
    T: BitInteger,
{
    check::<T>(pos, len)?;

    set_bit_slice(value, pos, len, slice);

    Ok(())
}

// mod slice_tests

//
//  Bit operations.
//

/// Returns whether the bit at `pos` is set.
///
/// #   Panics
///
/// In Debug, panics if `pos` is greater than or equal to `T::BITS`.
///
/// In Release, the result of an out-of-range position is unspecified.
///
/// #   Examples
///
/// ```
/// #   use bit_access::get_bit;
/// let value = 0b1001u8;
///
/// assert!(get_bit(value, 0));
/// assert!(get_bit(value, 3));
///
/// for i in (1..=2).chain(4..=7) {
///     assert!(!get_bit(value, i));
/// }
/// ```
#[inline]
#[track_caller]
pub fn get_bit<T>(value: T, pos: u32) -> bool
where
    T: BitInteger,
{
    debug_assert!(pos < T::BITS, "bit out of range of the integer");

    (value.into_raw() & bit_mask(pos)) != 0
}

/// Sets the bit at `pos` to `bit`.
///
/// All other bits are left unchanged.
///
/// #   Panics
///
/// In Debug, panics if `pos` is greater than or equal to `T::BITS`.
///
/// In Release, the result of an out-of-range position is unspecified.
///
/// #   Examples
///
/// ```
/// #   use bit_access::set_bit;
/// let mut value = 0xB7ABu16;
///
/// set_bit(&mut value, 15, false);
/// assert_eq!(0x37AB, value);
///
/// set_bit(&mut value, 15, true);
/// assert_eq!(0xB7AB, value);
/// ```
#[inline]
#[track_caller]
pub fn set_bit<T>(value: &mut T, pos: u32, bit: bool)
where
    T: BitInteger,
{
    debug_assert!(pos < T::BITS, "bit out of range of the integer");

    let raw = value.into_raw();

    //  All ones if `bit` is set, all zeros otherwise, to avoid branching.
    let fill = 0u64.wrapping_sub(u64::from(bit));

    *value = T::from_raw(raw ^ ((fill ^ raw) & bit_mask(pos)));
}

/// Flips the bit at `pos`.
///
/// All other bits are left unchanged.
///
/// #   Panics
///
/// In Debug, panics if `pos` is greater than or equal to `T::BITS`.
///
/// In Release, the result of an out-of-range position is unspecified.
///
/// #   Examples
///
/// ```
/// #   use bit_access::flip_bit;
/// let mut value = 0xB7ABu16;
///
/// flip_bit(&mut value, 6);
/// assert_eq!(0xB7EB, value);
///
/// flip_bit(&mut value, 6);
/// assert_eq!(0xB7AB, value);
/// ```
#[inline]
#[track_caller]
pub fn flip_bit<T>(value: &mut T, pos: u32)
where
    T: BitInteger,
{
    debug_assert!(pos < T::BITS, "bit out of range of the integer");

    *value = T::from_raw(value.into_raw() ^ bit_mask(pos));
}

/// Returns whether the bit at `pos` is set, if `pos` is within `T`.
#[inline]
pub fn checked_get_bit<T>(value: T, pos: u32) -> Result<bool, OutOfRangeError>
where
    T: BitInteger,
{
    check::<T>(pos, 1)?;

    Ok(get_bit(value, pos))
}

/// Sets the bit at `pos` to `bit`, if `pos` is within `T`.
///
/// On error, `value` is left unchanged.
#[inline]
pub fn checked_set_bit<T>(value: &mut T, pos: u32, bit: bool) -> Result<(), OutOfRangeError>
where
    T: BitInteger,
{
    check::<T>(pos, 1)?;

    set_bit(value, pos, bit);

    Ok(())
}

/// Flips the bit at `pos`, if `pos` is within `T`.
///
/// On error, `value` is left unchanged.
#[inline]
pub fn checked_flip_bit<T>(value: &mut T, pos: u32) -> Result<(), OutOfRangeError>
where
    T: BitInteger,
{
    check::<T>(pos, 1)?;

    flip_bit(value, pos);

    Ok(())
}

// mod bit_tests

//
//  Implementation details
//

//  Mask of the bit.
#[inline]
const fn bit_mask(pos: u32) -> u64 {
    //  Mask to ensure the shift doesn't overflow.
    let shift = pos % u64::BITS;

    1 << shift
}
