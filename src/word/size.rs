use std::fmt::{self, Debug, Display};

use super::{Address, Offset, Word};

/**
 * A count of bytes: semantically a sub-kind of [`Address`], present purely
 * so that interfaces can say "this is a byte count, not a location". Every
 * operation is `Address`'s operation with the result reinterpreted. Callers
 * must never construct one with intended-negative meaning.
 */
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Size(pub(super) usize);

impl Word for Size {
    fn from_bits(bits: u64) -> Self {
        Size(bits as usize)
    }

    fn to_bits(self) -> u64 {
        self.0 as u64
    }
}

impl Size {
    pub fn from_int(value: i32) -> Self {
        Address::from_int(value).as_size()
    }

    pub fn from_unsigned_int(value: u32) -> Self {
        Address::from_unsigned_int(value).as_size()
    }

    pub fn from_long(value: i64) -> Self {
        Address::from_long(value).as_size()
    }

    pub fn to_usize(self) -> usize {
        self.0
    }

    pub fn to_long(self) -> i64 {
        self.as_address().to_long()
    }

    pub fn greater_than(self, other: Size) -> bool {
        self.as_address().greater_than(other.as_address())
    }

    pub fn greater_equal(self, other: Size) -> bool {
        self.as_address().greater_equal(other.as_address())
    }

    pub fn less_than(self, other: Size) -> bool {
        self.as_address().less_than(other.as_address())
    }

    pub fn less_equal(self, other: Size) -> bool {
        self.as_address().less_equal(other.as_address())
    }

    pub fn plus(self, addend: Size) -> Size {
        self.as_address().plus_address(addend.as_address()).as_size()
    }

    pub fn plus_int(self, addend: i32) -> Size {
        self.as_address().plus_int(addend).as_size()
    }

    pub fn minus(self, subtrahend: Size) -> Size {
        self.as_address().minus_address(subtrahend.as_address()).as_size()
    }

    pub fn minus_offset(self, subtrahend: Offset) -> Size {
        self.as_address().minus(subtrahend).as_size()
    }

    pub fn times(self, factor: usize) -> Size {
        self.as_address().times(Address(factor)).as_size()
    }

    pub fn divided_by(self, divisor: Size) -> Size {
        self.as_address().divided_by(divisor.as_address()).as_size()
    }

    pub fn remainder(self, divisor: Size) -> Size {
        self.as_address().remainder(divisor.as_address()).as_size()
    }

    pub fn is_rounded_by(self, n: usize) -> bool {
        self.as_address().is_rounded_by(n)
    }

    pub fn rounded_up_by(self, n: usize) -> Size {
        self.as_address().rounded_up_by(n).as_size()
    }

    pub fn rounded_down_by(self, n: usize) -> Size {
        self.as_address().rounded_down_by(n).as_size()
    }

    pub fn aligned(self, alignment: usize) -> Size {
        self.as_address().aligned(alignment).as_size()
    }

    pub fn word_aligned(self) -> Size {
        self.as_address().word_aligned().as_size()
    }

    pub fn is_word_aligned(self) -> bool {
        self.as_address().is_word_aligned()
    }
}

impl Debug for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Size({})", self.0)
    }
}

impl Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//-----------------------------------------------------------------------------
