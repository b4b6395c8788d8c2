/*!
 * The machine-word family: opaque fixed-width bit patterns with typed
 * interpretations.
 *
 * [`Address`] is a word with unsigned arithmetic, [`Offset`] the signed
 * twos-complement counterpart, [`Size`] an address used as a byte count, and
 * [`Pointer`] an address licensed to access memory through the [`Accessor`]
 * contract. All are `#[repr(transparent)]` newtypes over the native word, so
 * a reinterpretation cast is free and a word in compiled code is a bit
 * pattern in a register, never a heap object.
 *
 * Equality is deliberately typed: `PartialEq` exists per concrete word type
 * only. Comparing an `Address` against an `Offset`, or a word against a bare
 * integer, is a compile error, not a runtime check. Code that needs to
 * compare across interpretations must cast explicitly first.
 */

use std::io::{self, Read, Write as IoWrite};

use thiserror::Error;

use super::arch::{self, Endianness};

mod address;
pub use address::{Address};

mod offset;
pub use offset::{Offset};

mod size;
pub use size::{Size};

mod accessor;
pub use accessor::{Accessor, Reference};

mod pointer;
pub use pointer::{Pointer};

/// The process-wide word width in bits. Fixed at build time.
pub const fn width() -> u32 {
    arch::WORD_BITS
}

/// The process-wide word size in bytes. Fixed at build time.
pub const fn size() -> usize {
    arch::WORD_BYTES
}

/// The all-bits-set word, as a zero-extended 64-bit pattern.
const ALL_ONES: u64 = usize::MAX as u64;

//-----------------------------------------------------------------------------

/// The number of bytes of a memory access, or the smallest width category
/// that can represent a value.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
#[repr(u8)]
pub enum Width {
    One = 0,
    Two = 1,
    Four = 2,
    Eight = 3,
}

impl Width {
    pub const fn bytes(self) -> usize {
        1 << self as usize
    }

    pub const fn bits(self) -> u32 {
        8 << self as usize
    }
}

//-----------------------------------------------------------------------------

/// The fixed enumeration of concrete word subtypes. This replaces dynamic
/// discovery: every kind, and its boxed counterpart's name, is known here.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum WordKind {
    Address,
    Offset,
    Size,
    Pointer,
}

pub const ALL_KINDS: [WordKind; 4] = [
    WordKind::Address,
    WordKind::Offset,
    WordKind::Size,
    WordKind::Pointer,
];

impl WordKind {
    pub const fn name(self) -> &'static str {
        match self {
            WordKind::Address => "Address",
            WordKind::Offset => "Offset",
            WordKind::Size => "Size",
            WordKind::Pointer => "Pointer",
        }
    }

    /// The naming convention for the hosted wrapper of this kind.
    pub const fn boxed_name(self) -> &'static str {
        match self {
            WordKind::Address => "BoxedAddress",
            WordKind::Offset => "BoxedOffset",
            WordKind::Size => "BoxedSize",
            WordKind::Pointer => "BoxedPointer",
        }
    }
}

//-----------------------------------------------------------------------------

/// Raised by [`Address::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseWordError {
    #[error("cannot parse an empty string")]
    Empty,
    #[error("radix {0} is not in 2..=16")]
    InvalidRadix(u32),
    #[error("invalid digit {digit:?} for radix {radix}")]
    InvalidDigit { digit: char, radix: u32 },
}

//-----------------------------------------------------------------------------

/**
 * The contract shared by every word subtype.
 *
 * `to_bits` zero-extends to 64 bits on a 32-bit build; `from_bits` truncates.
 * The reinterpretation casts rewrap the same bit pattern as a different
 * logical subtype at zero cost.
 */
pub trait Word: Copy + Eq {
    fn from_bits(bits: u64) -> Self;
    fn to_bits(self) -> u64;

    fn zero() -> Self {
        Self::from_bits(0)
    }

    fn all_ones() -> Self {
        Self::from_bits(ALL_ONES)
    }

    fn is_zero(self) -> bool {
        self.to_bits() == 0
    }

    fn is_all_ones(self) -> bool {
        self.to_bits() == ALL_ONES
    }

    fn as_address(self) -> Address {
        Address::from_bits(self.to_bits())
    }

    fn as_offset(self) -> Offset {
        Offset::from_bits(self.to_bits())
    }

    fn as_size(self) -> Size {
        Size::from_bits(self.to_bits())
    }

    fn as_pointer(self) -> Pointer {
        Pointer::from_bits(self.to_bits())
    }

    fn to_hex_string(self) -> String {
        format!("{:x}", self.to_bits())
    }

    /// Hex, left-padded with `pad` to the full digit width of a word.
    fn to_padded_hex_string(self, pad: char) -> String {
        let hex = self.to_hex_string();
        let digits = (width() / 4) as usize;
        let mut result = String::with_capacity(digits);
        for _ in hex.len()..digits {
            result.push(pad);
        }
        result.push_str(&hex);
        result
    }

    /// The index of the least significant set bit, or `-1` if zero.
    fn least_significant_bit_set(self) -> i32 {
        let bits = self.to_bits();
        if bits == 0 {
            -1
        } else {
            bits.trailing_zeros() as i32
        }
    }

    /// The index of the most significant set bit, or `-1` if zero.
    fn most_significant_bit_set(self) -> i32 {
        let bits = self.to_bits();
        if bits == 0 {
            -1
        } else {
            (63 - bits.leading_zeros()) as i32
        }
    }

    /// Writes this word as a fixed-width (4 or 8 byte) integer in the
    /// platform byte order. There is no self-describing header; both ends of
    /// a stream must agree on width and endianness beforehand.
    fn write_to<W: IoWrite>(self, writer: &mut W) -> io::Result<()> {
        let bits = self.to_bits();
        match arch::ENDIANNESS {
            Endianness::Little => writer.write_all(&bits.to_le_bytes()[..size()]),
            Endianness::Big => writer.write_all(&bits.to_be_bytes()[8 - size()..]),
        }
    }

    /// The inverse of [`Word::write_to`].
    fn read_from<R: Read>(reader: &mut R) -> io::Result<Self> {
        let mut buffer = [0u8; 8];
        match arch::ENDIANNESS {
            Endianness::Little => {
                reader.read_exact(&mut buffer[..size()])?;
                Ok(Self::from_bits(u64::from_le_bytes(buffer)))
            }
            Endianness::Big => {
                reader.read_exact(&mut buffer[8 - size()..])?;
                Ok(Self::from_bits(u64::from_be_bytes(buffer)))
            }
        }
    }
}

//-----------------------------------------------------------------------------
