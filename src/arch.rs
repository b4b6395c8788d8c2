/*!
 * Build-time platform parameters, uniform for the whole process.
 *
 * Everything here is a compile-time constant: the word width and byte order
 * come from the build target, and the hosted/native mode switch is a cargo
 * feature. No residual branch on any of these survives in compiled code.
 */

/// The number of bits in a machine word: 32 or 64.
#[cfg(target_pointer_width = "32")]
pub const WORD_BITS: u32 = 32;
#[cfg(target_pointer_width = "64")]
pub const WORD_BITS: u32 = 64;

/// The number of bytes in a machine word: 4 or 8.
pub const WORD_BYTES: usize = (WORD_BITS / 8) as usize;

/// The byte order of the target.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Endianness {
    Little,
    Big,
}

#[cfg(target_endian = "little")]
pub const ENDIANNESS: Endianness = Endianness::Little;
#[cfg(target_endian = "big")]
pub const ENDIANNESS: Endianness = Endianness::Big;

/// The broad shape of the target instruction set. A RISC target has no
/// combined base + displacement + scaled-index addressing mode, so scaled
/// accesses must be decomposed into explicit offset arithmetic.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Category {
    Cisc,
    Risc,
}

#[cfg(target_arch = "x86_64")]
pub const ISA_CATEGORY: Category = Category::Cisc;
#[cfg(not(target_arch = "x86_64"))]
pub const ISA_CATEGORY: Category = Category::Risc;

/// Tests whether this build runs atop a host runtime (bootstrap tooling)
/// rather than as the runtime's own compiled code.
pub const fn hosted() -> bool {
    cfg!(feature = "hosted")
}

//-----------------------------------------------------------------------------
