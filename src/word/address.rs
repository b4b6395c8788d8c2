use std::fmt::{self, Debug, Display};

use crate::arch;
use super::{Offset, ParseWordError, Width, Word};

/**
 * An unsigned machine word, typically a linear memory location.
 *
 * All comparisons and arithmetic use unsigned semantics regardless of the
 * underlying twos-complement bit pattern: a value with the top bit set is
 * larger than one without, never negative. Every operation is immutable and
 * returns a new value.
 */
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Address(pub(super) usize);

impl Word for Address {
    fn from_bits(bits: u64) -> Self {
        Address(bits as usize)
    }

    fn to_bits(self) -> u64 {
        self.0 as u64
    }
}

impl Address {
    /// Constructs from a signed 32-bit value, sign-extending on a 64-bit
    /// build. A no-op reinterpretation on a 32-bit build.
    pub fn from_int(value: i32) -> Self {
        Address(value as isize as usize)
    }

    /// Constructs from an unsigned 32-bit value, zero-extending on a 64-bit
    /// build.
    pub fn from_unsigned_int(value: u32) -> Self {
        Address(value as usize)
    }

    /// Constructs from a 64-bit value, truncating on a 32-bit build.
    pub fn from_long(value: i64) -> Self {
        Address(value as usize)
    }

    pub fn to_int(self) -> i32 {
        self.0 as i32
    }

    pub fn to_long(self) -> i64 {
        self.0 as i64
    }

    pub fn to_usize(self) -> usize {
        self.0
    }

    // Comparisons. The native representation is unsigned, so the platform's
    // unsigned compare is already the correct order. The boxed layer, whose
    // canonical field is signed, reproduces this order with the sign-bit
    // two-branch technique; the two are tested for agreement.

    pub fn greater_than(self, other: Address) -> bool {
        self.0 > other.0
    }

    pub fn greater_equal(self, other: Address) -> bool {
        self.0 >= other.0
    }

    pub fn less_than(self, other: Address) -> bool {
        self.0 < other.0
    }

    pub fn less_equal(self, other: Address) -> bool {
        self.0 <= other.0
    }

    // Arithmetic. Add, subtract and multiply are bit-pattern identical to
    // the signed operations; divide and remainder must be truly unsigned.

    pub fn plus(self, addend: Offset) -> Address {
        Address(self.0.wrapping_add_signed(addend.to_isize()))
    }

    pub fn plus_int(self, addend: i32) -> Address {
        self.plus(Offset::from_int(addend))
    }

    pub fn plus_address(self, addend: Address) -> Address {
        Address(self.0.wrapping_add(addend.0))
    }

    pub fn minus(self, subtrahend: Offset) -> Address {
        Address(self.0.wrapping_sub(subtrahend.to_isize() as usize))
    }

    pub fn minus_int(self, subtrahend: i32) -> Address {
        self.minus(Offset::from_int(subtrahend))
    }

    pub fn minus_address(self, subtrahend: Address) -> Address {
        Address(self.0.wrapping_sub(subtrahend.0))
    }

    pub fn times(self, factor: Address) -> Address {
        Address(self.0.wrapping_mul(factor.0))
    }

    pub fn times_int(self, factor: i32) -> Address {
        self.times(Address::from_int(factor))
    }

    /// Unsigned division. A zero divisor is an arithmetic fault and panics.
    pub fn divided_by(self, divisor: Address) -> Address {
        Address(self.0 / divisor.0)
    }

    /// Unsigned remainder. A zero divisor is an arithmetic fault and panics.
    pub fn remainder(self, divisor: Address) -> Address {
        Address(self.0 % divisor.0)
    }

    // Alignment. The `rounded_*` helpers accept any positive modulus; the
    // `aligned` helpers use the mask technique and require a power of two,
    // which is the caller's responsibility.

    pub fn is_rounded_by(self, n: usize) -> bool {
        self.0 % n == 0
    }

    pub fn rounded_up_by(self, n: usize) -> Address {
        let rest = self.0 % n;
        if rest == 0 {
            self
        } else {
            Address(self.0.wrapping_add(n - rest))
        }
    }

    pub fn rounded_down_by(self, n: usize) -> Address {
        Address(self.0 - self.0 % n)
    }

    pub fn aligned(self, alignment: usize) -> Address {
        let mask = alignment - 1;
        Address(self.0.wrapping_add(mask) & !mask)
    }

    pub fn is_aligned(self, alignment: usize) -> bool {
        self.0 & (alignment - 1) == 0
    }

    pub fn word_aligned(self) -> Address {
        self.aligned(arch::WORD_BYTES)
    }

    pub fn is_word_aligned(self) -> bool {
        self.is_aligned(arch::WORD_BYTES)
    }

    // Bit operations.

    pub fn is_bit_set(self, index: u32) -> bool {
        self.0 & (1 << index) != 0
    }

    pub fn bit_set(self, index: u32) -> Address {
        Address(self.0 | (1 << index))
    }

    pub fn bit_clear(self, index: u32) -> Address {
        Address(self.0 & !(1 << index))
    }

    pub fn and(self, operand: Address) -> Address {
        Address(self.0 & operand.0)
    }

    pub fn or(self, operand: Address) -> Address {
        Address(self.0 | operand.0)
    }

    pub fn not(self) -> Address {
        Address(!self.0)
    }

    pub fn shifted_left(self, n_bits: u32) -> Address {
        Address(self.0 << n_bits)
    }

    pub fn unsigned_shifted_right(self, n_bits: u32) -> Address {
        Address(self.0 >> n_bits)
    }

    /// The smallest number of bits that can represent this value, at least 1.
    pub fn number_of_effective_bits(self) -> u32 {
        let bits = self.to_bits();
        if bits == 0 {
            1
        } else {
            64 - bits.leading_zeros()
        }
    }

    /// The smallest [`Width`] category that can represent this value. Used
    /// for choosing compact encodings.
    pub fn effective_width(self) -> Width {
        match self.number_of_effective_bits() {
            0..=8 => Width::One,
            9..=16 => Width::Two,
            17..=32 => Width::Four,
            _ => Width::Eight,
        }
    }

    /// Formats the unsigned value in `radix` (2 to 16). Native unsigned
    /// division makes this exact for all bit patterns.
    pub fn to_unsigned_string(self, radix: u32) -> String {
        assert!((2..=16).contains(&radix), "radix {} is not in 2..=16", radix);
        const DIGITS: &[u8; 16] = b"0123456789abcdef";
        let mut bits = self.to_bits();
        if bits == 0 {
            return "0".to_string();
        }
        let mut digits = Vec::new();
        while bits != 0 {
            digits.push(DIGITS[(bits % radix as u64) as usize] as char);
            bits /= radix as u64;
        }
        digits.iter().rev().collect()
    }

    /// The inverse of [`Address::to_unsigned_string`]: accumulates digit by
    /// digit via multiply-then-add, wrapping at the word width.
    pub fn parse(string: &str, radix: u32) -> Result<Address, ParseWordError> {
        if !(2..=16).contains(&radix) {
            return Err(ParseWordError::InvalidRadix(radix));
        }
        if string.is_empty() {
            return Err(ParseWordError::Empty);
        }
        let mut bits: u64 = 0;
        for digit in string.chars() {
            let value = digit
                .to_digit(radix)
                .ok_or(ParseWordError::InvalidDigit { digit, radix })?;
            bits = bits.wrapping_mul(radix as u64).wrapping_add(value as u64);
        }
        Ok(Address::from_bits(bits))
    }
}

impl Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({:#x})", self.0)
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

//-----------------------------------------------------------------------------
