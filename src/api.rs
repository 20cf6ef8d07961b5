//! The vocabulary types and traits of the crate.

pub mod bit_integer;
pub mod bit_range;

pub use bit_integer::BitInteger;
pub use bit_range::BitRange;

pub use crate::utils::OutOfRangeError;
