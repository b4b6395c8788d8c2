use std::fmt::{self, Debug, Display};

use super::{Word};

/**
 * A signed machine word: the twos-complement counterpart of
 * [`Address`](super::Address), typically a memory delta.
 *
 * Arithmetic and comparisons are signed; no unsigned correction is needed.
 */
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Offset(pub(super) isize);

impl Word for Offset {
    fn from_bits(bits: u64) -> Self {
        Offset(bits as usize as isize)
    }

    fn to_bits(self) -> u64 {
        self.0 as usize as u64
    }
}

impl Offset {
    /// Constructs from a signed 32-bit value, sign-extending on a 64-bit
    /// build.
    pub fn from_int(value: i32) -> Self {
        Offset(value as isize)
    }

    /// Constructs from a 64-bit value, truncating on a 32-bit build.
    pub fn from_long(value: i64) -> Self {
        Offset(value as isize)
    }

    pub fn to_int(self) -> i32 {
        self.0 as i32
    }

    pub fn to_long(self) -> i64 {
        self.0 as i64
    }

    pub fn to_isize(self) -> isize {
        self.0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub fn negate(self) -> Offset {
        Offset(self.0.wrapping_neg())
    }

    // Signed comparisons.

    pub fn greater_than(self, other: Offset) -> bool {
        self.0 > other.0
    }

    pub fn greater_equal(self, other: Offset) -> bool {
        self.0 >= other.0
    }

    pub fn less_than(self, other: Offset) -> bool {
        self.0 < other.0
    }

    pub fn less_equal(self, other: Offset) -> bool {
        self.0 <= other.0
    }

    // Arithmetic, wrapping at the word width.

    pub fn plus(self, addend: Offset) -> Offset {
        Offset(self.0.wrapping_add(addend.0))
    }

    pub fn plus_int(self, addend: i32) -> Offset {
        self.plus(Offset::from_int(addend))
    }

    pub fn minus(self, subtrahend: Offset) -> Offset {
        Offset(self.0.wrapping_sub(subtrahend.0))
    }

    pub fn minus_int(self, subtrahend: i32) -> Offset {
        self.minus(Offset::from_int(subtrahend))
    }

    pub fn times(self, factor: i32) -> Offset {
        Offset(self.0.wrapping_mul(factor as isize))
    }

    /// Signed division. A zero divisor is an arithmetic fault and panics.
    pub fn divided_by(self, divisor: Offset) -> Offset {
        Offset(self.0.wrapping_div(divisor.0))
    }

    /// Signed remainder. A zero divisor is an arithmetic fault and panics.
    pub fn remainder(self, divisor: Offset) -> Offset {
        Offset(self.0.wrapping_rem(divisor.0))
    }

    // Bit operations.

    pub fn and(self, operand: Offset) -> Offset {
        Offset(self.0 & operand.0)
    }

    pub fn or(self, operand: Offset) -> Offset {
        Offset(self.0 | operand.0)
    }

    pub fn not(self) -> Offset {
        Offset(!self.0)
    }

    pub fn shifted_left(self, n_bits: u32) -> Offset {
        Offset(self.0 << n_bits)
    }

    /// Arithmetic right shift; the sign bit propagates.
    pub fn shifted_right(self, n_bits: u32) -> Offset {
        Offset(self.0 >> n_bits)
    }

    // Mask-based alignment, for stack-frame layout deltas. `alignment` must
    // be a power of two; that is the caller's responsibility.

    pub fn aligned(self, alignment: usize) -> Offset {
        let mask = alignment as isize - 1;
        Offset(self.0.wrapping_add(mask) & !mask)
    }

    pub fn is_aligned(self, alignment: usize) -> bool {
        self.0 & (alignment as isize - 1) == 0
    }
}

/// Narrow byte deltas convert implicitly at [`Accessor`](super::Accessor)
/// call sites.
impl From<i32> for Offset {
    fn from(value: i32) -> Self {
        Offset::from_int(value)
    }
}

impl From<isize> for Offset {
    fn from(value: isize) -> Self {
        Offset(value)
    }
}

impl Debug for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Offset({})", self.0)
    }
}

impl Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//-----------------------------------------------------------------------------
