//  See `create_bit_mask` and `BitMask`.
//
//  #   Why compute in `u64`?
//
//  Every `BitInteger` has a raw image in `u64`, and truncating a `u64` mask to a narrower integer yields precisely the
//  mask of that narrower integer. Computing in `u64` therefore requires a single implementation, which is `const`, and
//  is immune to the sign of the operand.
//
//  #   Why not `(1 << len) - 1`?
//
//  It overflows for `len == BITS`, whereas shifting the all-ones pattern right by `BITS - len` does not. The only
//  special case left is `len == 0`, for which the right shift would be by `BITS`.

use core::marker::PhantomData;

use crate::{api::BitInteger, utils::OutOfRangeError};

//
//  Runtime masks.
//

/// Returns the mask with exactly the bits `[pos, pos + len)` set.
///
/// An empty run, that is `len == 0`, yields an all-zeros mask, whatever `pos`.
///
/// #   Panics
///
/// In Debug, panics if `pos + len` is strictly greater than `T::BITS`, unless `len == 0`.
///
/// In Release, the result of an out-of-range run is unspecified.
///
/// #   Examples
///
/// ```
/// #   use bit_access::create_bit_mask;
/// assert_eq!(0x3E00, create_bit_mask::<u16>(9, 5));
/// assert_eq!(0, create_bit_mask::<u16>(15, 0));
/// assert_eq!(-1, create_bit_mask::<i32>(0, 32));
/// ```
#[inline]
#[track_caller]
pub fn create_bit_mask<T>(pos: u32, len: u32) -> T
where
    T: BitInteger,
{
    debug_assert!(fits(pos, len, T::BITS), "bit range out of range of the integer");

    T::from_raw(raw_mask(pos, len))
}

/// Returns the mask with exactly the bits `[pos, pos + len)` set, if the run fits in `T`.
///
/// #   Examples
///
/// ```
/// #   use bit_access::checked_create_bit_mask;
/// assert_eq!(Ok(0x3E00), checked_create_bit_mask::<u16>(9, 5));
/// assert!(checked_create_bit_mask::<u16>(12, 5).is_err());
/// ```
#[inline]
pub fn checked_create_bit_mask<T>(pos: u32, len: u32) -> Result<T, OutOfRangeError>
where
    T: BitInteger,
{
    check::<T>(pos, len)?;

    Ok(T::from_raw(raw_mask(pos, len)))
}

// mod runtime_tests

//
//  Compile-time masks.
//

/// The mask with exactly the bits `[POS, POS + LEN)` set, computed at compile time.
///
/// The mask is available as:
///
/// -   `RAW`, a `u64` constant, for any `T`.
/// -   `MASK`, a `T` constant, for any concrete `T`.
/// -   `mask()`, a `T`, for generic code.
///
/// #   Examples
///
/// ```
/// #   use bit_access::BitMask;
/// const SLICE: u16 = BitMask::<9, 5, u16>::MASK;
///
/// assert_eq!(0x3600, 0x37AB & SLICE);
///
/// //  Usable wherever a constant is required.
/// let table = [0u8; BitMask::<0, 4, u8>::RAW as usize];
///
/// assert_eq!(15, table.len());
/// ```
///
/// Any run which does not fit within `T` fails to build:
///
/// ```compile_fail
/// #   use bit_access::BitMask;
/// //  Bits [12, 17) do not fit in a `u16`.
/// let mask = BitMask::<12, 5, u16>::MASK;
/// ```
///
/// Any `T` which is not an integer fails to build:
///
/// ```compile_fail
/// #   use bit_access::BitMask;
/// let mask = BitMask::<0, 8, f32>::mask();
/// ```
pub struct BitMask<const POS: u32, const LEN: u32, T>(PhantomData<fn(T) -> T>);

impl<const POS: u32, const LEN: u32, T> BitMask<POS, LEN, T>
where
    T: BitInteger,
{
    /// The mask, as the raw image of a `T`.
    pub const RAW: u64 = {
        assert!(fits(POS, LEN, T::BITS), "bit range out of range of the integer");

        raw_mask(POS, LEN)
    };

    /// Returns the mask.
    #[inline]
    pub fn mask() -> T {
        T::from_raw(Self::RAW)
    }
}

macro_rules! impl_typed_mask {
    ($($int:ty),* $(,)?) => {
        $(
            impl<const POS: u32, const LEN: u32> BitMask<POS, LEN, $int> {
                /// The mask, as a constant of the integer type.
                pub const MASK: $int = Self::RAW as $int;
            }
        )*
    };
}

impl_typed_mask!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

#[cfg(test)]
mod compile_time_tests {
    use paste::paste;
    use seq_macro::seq;

    use super::*;

    macro_rules! typed_mask_tests {
        ($($int:ident),*) => {
            paste! {
                $(
                    #[test]
                    fn [<brush_ $int>]() {
                        let a = <$int>::from_raw(0x37AB);
                        let b = <$int>::from_raw(0xB7AB);

                        //  0011 0111 1010 1011 -> 0011 0110 0000 0000
                        assert_eq!(<$int>::from_raw(0x3600), BitMask::<9, 5, $int>::MASK & a);

                        //  0011 0111 1010 1011 -> 0000 0000 0000 0001
                        assert_eq!(<$int>::from_raw(0x0001), BitMask::<0, 1, $int>::MASK & a);

                        //  0011 0111 1010 1011 -> 0000 0000 0000 0000
                        assert_eq!(<$int>::from_raw(0x0000), BitMask::<0, 0, $int>::MASK & a);

                        //  1011 0111 1010 1011 -> 1000 0000 0000 0000
                        assert_eq!(<$int>::from_raw(0x8000), BitMask::<15, 1, $int>::MASK & b);

                        //  1011 0111 1010 1011 -> 0000 0000 0000 0000
                        assert_eq!(<$int>::from_raw(0x0000), BitMask::<15, 0, $int>::MASK & b);
                    }

                    #[test]
                    fn [<matches_runtime_ $int>]() {
                        seq!(P in 0..8 {
                            assert_eq!(create_bit_mask::<$int>(P, 1), BitMask::<P, 1, $int>::mask(), "{}", P);
                        });

                        seq!(L in 0..=8 {
                            assert_eq!(create_bit_mask::<$int>(0, L), BitMask::<0, L, $int>::mask(), "{}", L);
                        });

                        assert_eq!(create_bit_mask::<$int>(9, 5), BitMask::<9, 5, $int>::MASK);
                        assert_eq!(create_bit_mask::<$int>(0, 16), BitMask::<0, 16, $int>::MASK);
                        assert_eq!(create_bit_mask::<$int>(16, 0), BitMask::<16, 0, $int>::MASK);
                    }
                )*
            }
        };
    }

    typed_mask_tests!(u16, u32, u64, usize, i16, i32, i64, isize);

    #[test]
    fn raw() {
        assert_eq!(0x3E00, BitMask::<9, 5, u16>::RAW);
        assert_eq!(0x8000, BitMask::<15, 1, i16>::RAW);
        assert_eq!(0xFF, BitMask::<0, 8, i8>::RAW);
        assert_eq!(u64::MAX, BitMask::<0, 64, i64>::RAW);
        assert_eq!(0, BitMask::<8, 0, u8>::RAW);
    }

    #[test]
    fn typed_signed() {
        assert_eq!(i8::MIN, BitMask::<7, 1, i8>::MASK);
        assert_eq!(-1i32, BitMask::<0, 32, i32>::MASK);
        assert_eq!(i64::MIN, BitMask::<63, 1, i64>::MASK);
    }

    #[test]
    fn wide() {
        seq!(P in 0..=56 {
            assert_eq!(create_bit_mask::<u64>(P, 8), BitMask::<P, 8, u64>::MASK, "{}", P);
        });
    }
} // mod compile_time_tests

//
//  Implementation details
//

//  Raw mask of the bits `[pos, pos + len)`.
//
//  Out-of-range arguments wrap, rather than overflow.
pub(crate) const fn raw_mask(pos: u32, len: u32) -> u64 {
    if len == 0 {
        return 0;
    }

    let ones = u64::MAX.wrapping_shr(u64::BITS.wrapping_sub(len));

    ones.wrapping_shl(pos)
}

//  Whether the bits `[pos, pos + len)` fit in an integer of `bits` bits.
//
//  The empty run fits anywhere.
pub(crate) const fn fits(pos: u32, len: u32, bits: u32) -> bool {
    len == 0 || (len <= bits && pos <= bits - len)
}

//  Checks that the bits `[pos, pos + len)` fit in a `T`.
#[inline]
pub(crate) fn check<T>(pos: u32, len: u32) -> Result<(), OutOfRangeError>
where
    T: BitInteger,
{
    if fits(pos, len, T::BITS) {
        Ok(())
    } else {
        Err(OutOfRangeError { pos, len, bits: T::BITS })
    }
}

#[cfg(test)]
mod detail_tests {
    use super::*;

    #[test]
    fn fits_brush() {
        assert!(fits(0, 0, 8));
        assert!(fits(8, 0, 8));
        assert!(fits(100, 0, 8));
        assert!(fits(0, 8, 8));
        assert!(fits(7, 1, 8));

        assert!(!fits(8, 1, 8));
        assert!(!fits(0, 9, 8));
        assert!(!fits(1, 8, 8));
        assert!(!fits(u32::MAX, u32::MAX, 64));
    }

    #[test]
    fn raw_mask_brush() {
        assert_eq!(0, raw_mask(0, 0));
        assert_eq!(0, raw_mask(63, 0));
        assert_eq!(1, raw_mask(0, 1));
        assert_eq!(0x3E00, raw_mask(9, 5));
        assert_eq!(u64::MAX, raw_mask(0, 64));
        assert_eq!(1 << 63, raw_mask(63, 1));
    }
} // mod detail_tests
