//  Errors.

use core::{error, fmt};

/// An error in accessing bits, or bytes, outside of an integer.
///
/// The offending access is described as the run of bits `[pos, pos + len)`, for an integer of `bits` bits. A byte
/// access at byte position `k` is reported as the run `[8 * k, 8 * k + 8)`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct OutOfRangeError {
    /// The position of the first bit accessed.
    pub pos: u32,
    /// The number of bits accessed.
    pub len: u32,
    /// The number of bits of the integer accessed.
    pub bits: u32,
}

impl fmt::Display for OutOfRangeError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(
            f,
            "bits [{}, {}) out of range for a {}-bit integer",
            self.pos,
            u64::from(self.pos) + u64::from(self.len),
            self.bits
        )
    }
}

impl error::Error for OutOfRangeError {}

// mod tests
