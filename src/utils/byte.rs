//  Byte accessors.
//
//  Bytes are indexed by significance: byte `k` designates the bits `[8 * k, 8 * k + 8)` of the numeric value, whatever
//  the memory order of the host.

use core::marker::PhantomData;

use crate::{
    api::BitInteger,
    utils::{OutOfRangeError, check, raw_mask},
};

//
//  Runtime positions.
//

/// Returns the byte at `pos`, where byte 0 is the least significant byte.
///
/// #   Panics
///
/// In Debug, panics if `pos` is greater than or equal to `T::BYTES`.
///
/// In Release, the result of an out-of-range position is unspecified.
///
/// #   Examples
///
/// ```
/// #   use bit_access::get_byte;
/// assert_eq!(0x01, get_byte(0xAB01CDu32, 1));
/// assert_eq!(0x01, get_byte(0xABCD_EF01_2345_6789u64, 4));
/// ```
#[inline]
#[track_caller]
pub fn get_byte<T>(value: T, pos: u32) -> u8
where
    T: BitInteger,
{
    debug_assert!(pos < T::BYTES, "byte out of range of the integer");

    (value.into_raw() >> byte_shift(pos)) as u8
}

/// Sets the byte at `pos` to `byte`, where byte 0 is the least significant byte.
///
/// All other bytes are left unchanged.
///
/// #   Panics
///
/// In Debug, panics if `pos` is greater than or equal to `T::BYTES`.
///
/// In Release, the result of an out-of-range position is unspecified.
///
/// #   Examples
///
/// ```
/// #   use bit_access::set_byte;
/// let mut value = 0xAB01CDu32;
///
/// set_byte(&mut value, 1, 0xFF);
///
/// assert_eq!(0xABFFCD, value);
/// ```
#[inline]
#[track_caller]
pub fn set_byte<T>(value: &mut T, pos: u32, byte: u8)
where
    T: BitInteger,
{
    debug_assert!(pos < T::BYTES, "byte out of range of the integer");

    let shift = byte_shift(pos);

    *value = T::from_raw(replace_byte(value.into_raw(), 0xFF << shift, shift, byte));
}

/// Returns the byte at `pos`, if `pos` is within `T`.
///
/// See `get_byte`.
#[inline]
pub fn checked_get_byte<T>(value: T, pos: u32) -> Result<u8, OutOfRangeError>
where
    T: BitInteger,
{
    check_byte::<T>(pos)?;

    Ok(get_byte(value, pos))
}

/// Sets the byte at `pos` to `byte`, if `pos` is within `T`.
///
/// On error, `value` is left unchanged. See `set_byte`.
#[inline]
pub fn checked_set_byte<T>(value: &mut T, pos: u32, byte: u8) -> Result<(), OutOfRangeError>
where
    T: BitInteger,
{
    check_byte::<T>(pos)?;

    set_byte(value, pos, byte);

    Ok(())
}

// mod runtime_tests

//
//  Compile-time positions.
//

/// The byte at `POS`, in a `T`, where byte 0 is the least significant byte.
///
/// Any use of a position which is not within `T` fails to build.
///
/// #   Examples
///
/// ```
/// #   use bit_access::BytePosition;
/// assert_eq!(16, BytePosition::<2, u32>::SHIFT);
/// assert_eq!(0x00FF_0000, BytePosition::<2, u32>::RAW);
/// ```
///
/// ```compile_fail
/// #   use bit_access::BytePosition;
/// //  A `u32` only has 4 bytes.
/// let shift = BytePosition::<4, u32>::SHIFT;
/// ```
pub struct BytePosition<const POS: u32, T>(PhantomData<fn(T) -> T>);

impl<const POS: u32, T> BytePosition<POS, T>
where
    T: BitInteger,
{
    /// The position of the least significant bit of the byte.
    pub const SHIFT: u32 = {
        assert!(POS < T::BYTES, "byte out of range of the integer");

        POS * 8
    };

    /// The mask of the byte, as the raw image of a `T`.
    pub const RAW: u64 = raw_mask(Self::SHIFT, 8);
}

/// Returns the byte at `POS`, where byte 0 is the least significant byte.
///
/// Any position which is not within `T` fails to build.
///
/// #   Examples
///
/// ```
/// #   use bit_access::get_byte_const;
/// assert_eq!(0x01, get_byte_const::<1, _>(0xAB01CDu32));
/// assert_eq!(0x01, get_byte_const::<4, _>(0xABCD_EF01_2345_6789u64));
/// ```
///
/// ```compile_fail
/// #   use bit_access::get_byte_const;
/// //  A `u16` only has 2 bytes.
/// get_byte_const::<2, _>(0xB7ABu16);
/// ```
#[inline]
pub fn get_byte_const<const POS: u32, T>(value: T) -> u8
where
    T: BitInteger,
{
    let shift = BytePosition::<POS, T>::SHIFT;
    let mask = BytePosition::<POS, T>::RAW;

    ((value.into_raw() & mask) >> shift) as u8
}

/// Sets the byte at `POS` to `byte`, where byte 0 is the least significant byte.
///
/// All other bytes are left unchanged; the previous content of the byte is discarded, rather than merged.
///
/// Any position which is not within `T` fails to build.
///
/// #   Examples
///
/// ```
/// #   use bit_access::set_byte_const;
/// let mut value = 0xAB01CDu32;
///
/// set_byte_const::<1, _>(&mut value, 0xFF);
/// assert_eq!(0xABFFCD, value);
///
/// set_byte_const::<1, _>(&mut value, 0x10);
/// assert_eq!(0xAB10CD, value);
/// ```
///
/// ```compile_fail
/// #   use bit_access::set_byte_const;
/// let mut value = 0u64;
///
/// //  A `u64` only has 8 bytes.
/// set_byte_const::<8, _>(&mut value, 0xFF);
/// ```
#[inline]
pub fn set_byte_const<const POS: u32, T>(value: &mut T, byte: u8)
where
    T: BitInteger,
{
    let shift = BytePosition::<POS, T>::SHIFT;
    let mask = BytePosition::<POS, T>::RAW;

    *value = T::from_raw(replace_byte(value.into_raw(), mask, shift, byte));
}

// mod compile_time_tests

//
//  Implementation details
//

//  Position of the least significant bit of the byte.
#[inline]
const fn byte_shift(pos: u32) -> u32 {
    //  Mask to ensure the shift doesn't overflow.
    pos.wrapping_mul(8) % u64::BITS
}

//  Replaces the byte designated by `mask`, at `shift`, with `byte`.
//
//  The previous content of the byte is cleared first, so that the result does not depend on it.
#[inline]
const fn replace_byte(raw: u64, mask: u64, shift: u32, byte: u8) -> u64 {
    (raw & !mask) | ((byte as u64) << shift)
}

//  Checks that the byte at `pos` is within a `T`.
#[inline]
fn check_byte<T>(pos: u32) -> Result<(), OutOfRangeError>
where
    T: BitInteger,
{
    check::<T>(pos.saturating_mul(8), 8)
}
