use std::fmt::{self, Debug, Display};
use std::mem;
use std::ptr;
use std::sync::atomic::{AtomicI32, AtomicPtr, AtomicUsize, Ordering};

use crate::arch::{self, Category};
use super::accessor::{element_offset};
use super::{Accessor, Address, Offset, Reference, Word};

/**
 * An [`Address`] additionally licensed to access memory: the raw-memory
 * implementation of [`Accessor`].
 *
 * Arithmetic and alignment delegate to `Address` and rewrap the result, so a
 * `Pointer` can be carried through all the same computations.
 */
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Pointer(pub(super) usize);

/// Scaled accesses are decomposed into explicit offset arithmetic when the
/// target has no combined addressing mode, or when words are boxed. Both
/// paths are needed for correctness on different backends; this predicate
/// folds to a constant.
#[inline(always)]
fn decomposed() -> bool {
    matches!(arch::ISA_CATEGORY, Category::Risc) || arch::hosted()
}

impl Word for Pointer {
    fn from_bits(bits: u64) -> Self {
        Pointer(bits as usize)
    }

    fn to_bits(self) -> u64 {
        self.0 as u64
    }
}

impl Pointer {
    pub fn from_int(value: i32) -> Self {
        Address::from_int(value).as_pointer()
    }

    pub fn from_unsigned_int(value: u32) -> Self {
        Address::from_unsigned_int(value).as_pointer()
    }

    pub fn from_long(value: i64) -> Self {
        Address::from_long(value).as_pointer()
    }

    pub fn from_ptr<T>(pointer: *const T) -> Self {
        Pointer(pointer as usize)
    }

    pub fn from_mut_ptr<T>(pointer: *mut T) -> Self {
        Pointer(pointer as usize)
    }

    pub fn to_ptr<T>(self) -> *const T {
        self.0 as *const T
    }

    pub fn to_mut_ptr<T>(self) -> *mut T {
        self.0 as *mut T
    }

    // Arithmetic, delegated to Address.

    pub fn plus(self, addend: Offset) -> Pointer {
        self.as_address().plus(addend).as_pointer()
    }

    pub fn plus_int(self, addend: i32) -> Pointer {
        self.as_address().plus_int(addend).as_pointer()
    }

    pub fn plus_words(self, n_words: i32) -> Pointer {
        self.plus_int(n_words * arch::WORD_BYTES as i32)
    }

    pub fn minus(self, subtrahend: Offset) -> Pointer {
        self.as_address().minus(subtrahend).as_pointer()
    }

    pub fn minus_int(self, subtrahend: i32) -> Pointer {
        self.as_address().minus_int(subtrahend).as_pointer()
    }

    pub fn minus_address(self, subtrahend: Address) -> Pointer {
        self.as_address().minus_address(subtrahend).as_pointer()
    }

    pub fn minus_words(self, n_words: i32) -> Pointer {
        self.minus_int(n_words * arch::WORD_BYTES as i32)
    }

    pub fn times(self, factor: Address) -> Pointer {
        self.as_address().times(factor).as_pointer()
    }

    pub fn divided_by(self, divisor: Address) -> Pointer {
        self.as_address().divided_by(divisor).as_pointer()
    }

    pub fn remainder(self, divisor: Address) -> Pointer {
        self.as_address().remainder(divisor).as_pointer()
    }

    pub fn rounded_up_by(self, n: usize) -> Pointer {
        self.as_address().rounded_up_by(n).as_pointer()
    }

    pub fn rounded_down_by(self, n: usize) -> Pointer {
        self.as_address().rounded_down_by(n).as_pointer()
    }

    pub fn aligned(self, alignment: usize) -> Pointer {
        self.as_address().aligned(alignment).as_pointer()
    }

    pub fn word_aligned(self) -> Pointer {
        self.as_address().word_aligned().as_pointer()
    }

    pub fn is_word_aligned(self) -> bool {
        self.as_address().is_word_aligned()
    }

    pub fn and(self, operand: Address) -> Pointer {
        self.as_address().and(operand).as_pointer()
    }

    pub fn or(self, operand: Address) -> Pointer {
        self.as_address().or(operand).as_pointer()
    }

    pub fn not(self) -> Pointer {
        self.as_address().not().as_pointer()
    }

    pub fn bit_set(self, index: u32) -> Pointer {
        self.as_address().bit_set(index).as_pointer()
    }

    pub fn bit_clear(self, index: u32) -> Pointer {
        self.as_address().bit_clear(index).as_pointer()
    }

    pub fn shifted_left(self, n_bits: u32) -> Pointer {
        self.as_address().shifted_left(n_bits).as_pointer()
    }

    pub fn unsigned_shifted_right(self, n_bits: u32) -> Pointer {
        self.as_address().unsigned_shifted_right(n_bits).as_pointer()
    }

    // The two load/store paths. `raw` is the decomposed form: an explicit
    // byte offset from the base. `builtin` is the combined addressing-mode
    // form: base + displacement + index * element size in one step.

    #[inline(always)]
    unsafe fn raw_read<T>(self, offset: Offset) -> T {
        ptr::read_unaligned(self.0.wrapping_add_signed(offset.to_isize()) as *const T)
    }

    #[inline(always)]
    unsafe fn raw_write<T>(self, offset: Offset, value: T) {
        ptr::write_unaligned(self.0.wrapping_add_signed(offset.to_isize()) as *mut T, value);
    }

    #[inline(always)]
    unsafe fn builtin_get<T>(self, displacement: i32, index: i32) -> T {
        let address = self
            .0
            .wrapping_add_signed(displacement as isize)
            .wrapping_add_signed(index as isize * mem::size_of::<T>() as isize);
        ptr::read_unaligned(address as *const T)
    }

    #[inline(always)]
    unsafe fn builtin_set<T>(self, displacement: i32, index: i32, value: T) {
        let address = self
            .0
            .wrapping_add_signed(displacement as isize)
            .wrapping_add_signed(index as isize * mem::size_of::<T>() as isize);
        ptr::write_unaligned(address as *mut T, value);
    }

    /**
     * Sets a bit in the bit map whose base is this pointer.
     *
     * ATTENTION: there is no protection against concurrent access to the
     * affected byte. This method may read the byte, set the bit and write
     * the byte back; exclusion is the caller's obligation.
     */
    pub unsafe fn set_bit(self, bit_index: i32) {
        let byte_index = (bit_index as u32 / 8) as i32;
        let rest = bit_index as u32 % 8;
        let byte = self.get_byte(0, byte_index) as u8 | (1 << rest);
        self.set_byte(0, byte_index, byte as i8);
    }

    /**
     * ORs an 8-bit mask into the bit map whose base is this pointer,
     * starting at `bit_index`. Touches 1 or 2 bytes depending on the
     * alignment of `bit_index`.
     *
     * ATTENTION: there is no protection against concurrent access to the
     * affected bytes; exclusion is the caller's obligation.
     */
    pub unsafe fn set_bits(self, bit_index: i32, bits: u8) {
        // Widen before shifting so no sign bits creep in.
        let wide = bits as u32;
        let mut byte_index = (bit_index as u32 / 8) as i32;
        let rest = bit_index as u32 % 8;
        let byte = self.get_byte(0, byte_index) as u8 | (wide << rest) as u8;
        self.set_byte(0, byte_index, byte as i8);
        if rest > 0 {
            byte_index += 1;
            let byte = self.get_byte(0, byte_index) as u8 | (wide >> (8 - rest)) as u8;
            self.set_byte(0, byte_index, byte as i8);
        }
    }

    /// Copies `length` elements of raw memory, starting at element
    /// `src_index` of the array `displacement` bytes from this pointer,
    /// into `dst[dst_index..]`.
    pub unsafe fn copy_elements<T: Copy>(
        self,
        displacement: i32,
        src_index: i32,
        dst: &mut [T],
        dst_index: usize,
        length: usize,
    ) {
        assert!(
            dst_index.checked_add(length).map_or(false, |end| end <= dst.len()),
            "destination range {}+{} out of bounds for slice of {}",
            dst_index, length, dst.len(),
        );
        let size = mem::size_of::<T>();
        for i in 0..length {
            dst[dst_index + i] =
                self.raw_read(element_offset(displacement, src_index + i as i32, size));
        }
    }
}

impl Accessor for Pointer {
    unsafe fn read_byte(&self, offset: impl Into<Offset>) -> i8 {
        self.raw_read(offset.into())
    }

    unsafe fn write_byte(&self, offset: impl Into<Offset>, value: i8) {
        self.raw_write(offset.into(), value);
    }

    unsafe fn read_short(&self, offset: impl Into<Offset>) -> i16 {
        self.raw_read(offset.into())
    }

    unsafe fn write_short(&self, offset: impl Into<Offset>, value: i16) {
        self.raw_write(offset.into(), value);
    }

    unsafe fn read_char(&self, offset: impl Into<Offset>) -> u16 {
        self.raw_read(offset.into())
    }

    unsafe fn write_char(&self, offset: impl Into<Offset>, value: u16) {
        self.raw_write(offset.into(), value);
    }

    unsafe fn read_int(&self, offset: impl Into<Offset>) -> i32 {
        self.raw_read(offset.into())
    }

    unsafe fn write_int(&self, offset: impl Into<Offset>, value: i32) {
        self.raw_write(offset.into(), value);
    }

    unsafe fn read_float(&self, offset: impl Into<Offset>) -> f32 {
        self.raw_read(offset.into())
    }

    unsafe fn write_float(&self, offset: impl Into<Offset>, value: f32) {
        self.raw_write(offset.into(), value);
    }

    unsafe fn read_long(&self, offset: impl Into<Offset>) -> i64 {
        self.raw_read(offset.into())
    }

    unsafe fn write_long(&self, offset: impl Into<Offset>, value: i64) {
        self.raw_write(offset.into(), value);
    }

    unsafe fn read_double(&self, offset: impl Into<Offset>) -> f64 {
        self.raw_read(offset.into())
    }

    unsafe fn write_double(&self, offset: impl Into<Offset>, value: f64) {
        self.raw_write(offset.into(), value);
    }

    unsafe fn read_word(&self, offset: impl Into<Offset>) -> Address {
        Address::from_bits(self.raw_read::<usize>(offset.into()) as u64)
    }

    unsafe fn write_word(&self, offset: impl Into<Offset>, value: Address) {
        self.raw_write(offset.into(), value.to_bits() as usize);
    }

    unsafe fn read_reference(&self, offset: impl Into<Offset>) -> Reference {
        Reference::from_mut_ptr(self.raw_read::<*mut ()>(offset.into()))
    }

    unsafe fn write_reference(&self, offset: impl Into<Offset>, value: Reference) {
        self.raw_write(offset.into(), value.to_mut_ptr::<()>());
    }

    // The CAS operations are the only atomic primitives this layer exposes.
    // The addressed location must be naturally aligned.

    unsafe fn compare_and_swap_int(
        &self,
        offset: impl Into<Offset>,
        expected: i32,
        new: i32,
    ) -> i32 {
        let atomic = &*(self.plus(offset.into()).to_ptr::<AtomicI32>());
        match atomic.compare_exchange(expected, new, Ordering::SeqCst, Ordering::SeqCst) {
            Ok(prior) => prior,
            Err(prior) => prior,
        }
    }

    unsafe fn compare_and_swap_word(
        &self,
        offset: impl Into<Offset>,
        expected: Address,
        new: Address,
    ) -> Address {
        let atomic = &*(self.plus(offset.into()).to_ptr::<AtomicUsize>());
        let result = atomic.compare_exchange(
            expected.to_bits() as usize,
            new.to_bits() as usize,
            Ordering::SeqCst,
            Ordering::SeqCst,
        );
        let prior = match result {
            Ok(prior) => prior,
            Err(prior) => prior,
        };
        Address::from_bits(prior as u64)
    }

    unsafe fn compare_and_swap_reference(
        &self,
        offset: impl Into<Offset>,
        expected: Reference,
        new: Reference,
    ) -> Reference {
        let atomic = &*(self.plus(offset.into()).to_ptr::<AtomicPtr<()>>());
        let result = atomic.compare_exchange(
            expected.to_mut_ptr(),
            new.to_mut_ptr(),
            Ordering::SeqCst,
            Ordering::SeqCst,
        );
        let prior = match result {
            Ok(prior) => prior,
            Err(prior) => prior,
        };
        Reference::from_mut_ptr(prior)
    }

    // Scaled element access, with both code paths.

    unsafe fn get_byte(&self, displacement: i32, index: i32) -> i8 {
        if decomposed() {
            self.read_byte(element_offset(displacement, index, 1))
        } else {
            self.builtin_get(displacement, index)
        }
    }

    unsafe fn set_byte(&self, displacement: i32, index: i32, value: i8) {
        if decomposed() {
            self.write_byte(element_offset(displacement, index, 1), value);
        } else {
            self.builtin_set(displacement, index, value);
        }
    }

    unsafe fn get_short(&self, displacement: i32, index: i32) -> i16 {
        if decomposed() {
            self.read_short(element_offset(displacement, index, 2))
        } else {
            self.builtin_get(displacement, index)
        }
    }

    unsafe fn set_short(&self, displacement: i32, index: i32, value: i16) {
        if decomposed() {
            self.write_short(element_offset(displacement, index, 2), value);
        } else {
            self.builtin_set(displacement, index, value);
        }
    }

    unsafe fn get_char(&self, displacement: i32, index: i32) -> u16 {
        if decomposed() {
            self.read_char(element_offset(displacement, index, 2))
        } else {
            self.builtin_get(displacement, index)
        }
    }

    unsafe fn set_char(&self, displacement: i32, index: i32, value: u16) {
        if decomposed() {
            self.write_char(element_offset(displacement, index, 2), value);
        } else {
            self.builtin_set(displacement, index, value);
        }
    }

    unsafe fn get_int(&self, displacement: i32, index: i32) -> i32 {
        if decomposed() {
            self.read_int(element_offset(displacement, index, 4))
        } else {
            self.builtin_get(displacement, index)
        }
    }

    unsafe fn set_int(&self, displacement: i32, index: i32, value: i32) {
        if decomposed() {
            self.write_int(element_offset(displacement, index, 4), value);
        } else {
            self.builtin_set(displacement, index, value);
        }
    }

    unsafe fn get_float(&self, displacement: i32, index: i32) -> f32 {
        if decomposed() {
            self.read_float(element_offset(displacement, index, 4))
        } else {
            self.builtin_get(displacement, index)
        }
    }

    unsafe fn set_float(&self, displacement: i32, index: i32, value: f32) {
        if decomposed() {
            self.write_float(element_offset(displacement, index, 4), value);
        } else {
            self.builtin_set(displacement, index, value);
        }
    }

    unsafe fn get_long(&self, displacement: i32, index: i32) -> i64 {
        if decomposed() {
            self.read_long(element_offset(displacement, index, 8))
        } else {
            self.builtin_get(displacement, index)
        }
    }

    unsafe fn set_long(&self, displacement: i32, index: i32, value: i64) {
        if decomposed() {
            self.write_long(element_offset(displacement, index, 8), value);
        } else {
            self.builtin_set(displacement, index, value);
        }
    }

    unsafe fn get_double(&self, displacement: i32, index: i32) -> f64 {
        if decomposed() {
            self.read_double(element_offset(displacement, index, 8))
        } else {
            self.builtin_get(displacement, index)
        }
    }

    unsafe fn set_double(&self, displacement: i32, index: i32, value: f64) {
        if decomposed() {
            self.write_double(element_offset(displacement, index, 8), value);
        } else {
            self.builtin_set(displacement, index, value);
        }
    }

    unsafe fn get_word(&self, displacement: i32, index: i32) -> Address {
        if decomposed() {
            self.read_word(element_offset(displacement, index, arch::WORD_BYTES))
        } else {
            Address::from_bits(self.builtin_get::<usize>(displacement, index) as u64)
        }
    }

    unsafe fn set_word(&self, displacement: i32, index: i32, value: Address) {
        if decomposed() {
            self.write_word(element_offset(displacement, index, arch::WORD_BYTES), value);
        } else {
            self.builtin_set(displacement, index, value.to_bits() as usize);
        }
    }

    unsafe fn get_reference(&self, displacement: i32, index: i32) -> Reference {
        if decomposed() {
            self.read_reference(element_offset(displacement, index, arch::WORD_BYTES))
        } else {
            Reference::from_mut_ptr(self.builtin_get::<*mut ()>(displacement, index))
        }
    }

    unsafe fn set_reference(&self, displacement: i32, index: i32, value: Reference) {
        if decomposed() {
            self.write_reference(element_offset(displacement, index, arch::WORD_BYTES), value);
        } else {
            self.builtin_set(displacement, index, value.to_mut_ptr::<()>());
        }
    }
}

impl Debug for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pointer({:#x})", self.0)
    }
}

impl Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "^{}", self.as_address().to_hex_string())
    }
}

//-----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use memoffset::{offset_of};

    use super::*;

    /// A pointer to a zeroed, 8-byte-aligned scratch buffer of `words`
    /// 8-byte words.
    fn scratch(buffer: &mut Vec<u64>, words: usize) -> Pointer {
        buffer.clear();
        buffer.resize(words, 0);
        Pointer::from_mut_ptr(buffer.as_mut_ptr())
    }

    #[test]
    fn read_write_all_widths() {
        let mut buffer = Vec::new();
        let p = scratch(&mut buffer, 4);
        unsafe {
            p.write_byte(0, -2i8);
            assert_eq!(p.read_byte(0), -2);
            p.write_short(2, -300i16);
            assert_eq!(p.read_short(2), -300);
            p.write_char(4, 0xFFFEu16);
            assert_eq!(p.read_char(4), 0xFFFE);
            p.write_int(8, -123456789);
            assert_eq!(p.read_int(8), -123456789);
            p.write_float(12, 1.5f32);
            assert_eq!(p.read_float(12), 1.5);
            p.write_long(16, 0x0123456789ABCDEFu64 as i64);
            assert_eq!(p.read_long(16), 0x0123456789ABCDEFu64 as i64);
            p.write_double(24, -2.25f64);
            assert_eq!(p.read_double(24), -2.25);
        }
    }

    #[test]
    fn boolean_bridge() {
        let mut buffer = Vec::new();
        let p = scratch(&mut buffer, 1);
        unsafe {
            p.write_boolean(0, true);
            assert!(p.read_boolean(0));
            assert_eq!(p.read_byte(0), 1);
            p.write_boolean(0, false);
            assert!(!p.read_boolean(0));
        }
    }

    #[test]
    fn word_and_reference() {
        let mut buffer = Vec::new();
        let p = scratch(&mut buffer, 2);
        let mut target = 7u32;
        unsafe {
            p.write_word(0, Address::from_int(42));
            assert_eq!(p.read_word(0), Address::from_int(42));
            let r = Reference::from_mut_ptr(&mut target);
            p.write_reference(arch::WORD_BYTES as i32, r);
            assert_eq!(p.read_reference(arch::WORD_BYTES as i32), r);
        }
    }

    #[test]
    fn get_read_equivalence() {
        let mut buffer = Vec::new();
        let p = scratch(&mut buffer, 4);
        unsafe {
            for (i, byte) in [0x11i8, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x78].iter().enumerate() {
                p.write_byte(i as i32, *byte);
            }
            // The element form, the displacement form and the raw offset
            // form denote the same byte.
            assert_eq!(p.get_byte(0, 5), p.read_byte(5));
            assert_eq!(p.get_byte(0, 5), p.read_byte(Offset::from_int(5)));
            assert_eq!(p.get_byte(2, 3), p.read_byte(5));
            assert_eq!(p.get_int(0, 1), p.read_int(4));
            assert_eq!(p.get_short(2, 1), p.read_short(4));
            // Both code paths agree whatever the predicate selects.
            assert_eq!(p.builtin_get::<i8>(2, 3), p.read_byte(5));
            assert_eq!(p.builtin_get::<i32>(0, 1), p.read_int(4));
            assert_eq!(p.builtin_get::<i16>(2, 1), p.read_short(4));
        }
    }

    #[test]
    fn set_get_scaled() {
        let mut buffer = Vec::new();
        let p = scratch(&mut buffer, 8);
        unsafe {
            for i in 0..8 {
                p.set_int(0, i, i * 100);
            }
            for i in 0..8 {
                assert_eq!(p.get_int(0, i), i * 100);
                assert_eq!(p.read_int(i * 4), i * 100);
            }
            p.set_long(16, 1, -1);
            assert_eq!(p.get_long(16, 1), -1);
            assert_eq!(p.read_long(24), -1);
            p.builtin_set::<i16>(0, 3, -5);
            assert_eq!(p.get_short(0, 3), -5);
        }
    }

    #[test]
    fn negative_offsets() {
        let mut buffer = Vec::new();
        let p = scratch(&mut buffer, 2).plus_words(1);
        unsafe {
            p.write_int(-(arch::WORD_BYTES as i32), 99);
            assert_eq!(p.minus_words(1).read_int(0), 99);
            assert_eq!(p.get_int(-(arch::WORD_BYTES as i32), 0), 99);
        }
    }

    #[test]
    fn cas_int() {
        let mut buffer = Vec::new();
        let p = scratch(&mut buffer, 1);
        unsafe {
            p.write_int(0, 17);
            // A matching CAS stores and returns the expected value.
            assert_eq!(p.compare_and_swap_int(0, 17, 99), 17);
            assert_eq!(p.read_int(0), 99);
            // A stale CAS leaves the location alone and returns the
            // current value, not the expected one.
            assert_eq!(p.compare_and_swap_int(0, 17, 55), 99);
            assert_eq!(p.read_int(0), 99);
        }
    }

    #[test]
    fn cas_word() {
        let mut buffer = Vec::new();
        let p = scratch(&mut buffer, 1);
        unsafe {
            p.write_word(0, Address::from_int(1));
            let prior = p.compare_and_swap_word(0, Address::from_int(1), Address::all_ones());
            assert_eq!(prior, Address::from_int(1));
            assert_eq!(p.read_word(0), Address::all_ones());
            let prior = p.compare_and_swap_word(0, Address::from_int(1), Address::zero());
            assert_eq!(prior, Address::all_ones());
            assert_eq!(p.read_word(0), Address::all_ones());
        }
    }

    #[test]
    fn cas_reference() {
        let mut buffer = Vec::new();
        let p = scratch(&mut buffer, 1);
        let mut a = 0u8;
        let mut b = 0u8;
        let ra = Reference::from_mut_ptr(&mut a);
        let rb = Reference::from_mut_ptr(&mut b);
        unsafe {
            p.write_reference(0, Reference::null());
            assert_eq!(p.compare_and_swap_reference(0, Reference::null(), ra), Reference::null());
            assert_eq!(p.read_reference(0), ra);
            assert_eq!(p.compare_and_swap_reference(0, rb, ra), ra);
            assert_eq!(p.read_reference(0), ra);
        }
    }

    #[test]
    fn bit_map() {
        let mut buffer = Vec::new();
        let p = scratch(&mut buffer, 2);
        unsafe {
            p.set_bit(0);
            p.set_bit(9);
            p.set_bit(9);
            assert_eq!(p.read_byte(0) as u8, 0x01);
            assert_eq!(p.read_byte(1) as u8, 0x02);
            // A byte-aligned mask touches one byte.
            p.set_bits(16, 0xF0);
            assert_eq!(p.read_byte(2) as u8, 0xF0);
            assert_eq!(p.read_byte(3) as u8, 0x00);
            // A straddling mask touches two.
            p.set_bits(28, 0xFF);
            assert_eq!(p.read_byte(3) as u8, 0xF0);
            assert_eq!(p.read_byte(4) as u8, 0x0F);
        }
    }

    #[test]
    fn copy_elements() {
        let mut buffer = Vec::new();
        let p = scratch(&mut buffer, 4);
        unsafe {
            for i in 0..8 {
                p.set_int(0, i, i + 1);
            }
            let mut dst = [0i32; 6];
            p.copy_elements(4, 1, &mut dst, 2, 4);
            // Element 1 of the array at displacement 4 is the int at byte 8.
            assert_eq!(dst, [0, 0, 3, 4, 5, 6]);
        }
    }

    #[test]
    #[should_panic(expected = "destination range 2+3 out of bounds for slice of 4")]
    fn copy_elements_bounds() {
        let p = Pointer::from_int(0);
        let mut dst = [0u8; 4];
        unsafe { p.copy_elements(0, 0, &mut dst, 2, 3) };
    }

    #[test]
    fn struct_fields() {
        #[repr(C)]
        struct Header {
            tag: u8,
            count: i32,
            size: u64,
        }
        let mut header = Header { tag: 3, count: -7, size: 0x1234 };
        let p = Pointer::from_mut_ptr(&mut header);
        unsafe {
            assert_eq!(p.read_byte(offset_of!(Header, tag) as i32), 3);
            assert_eq!(p.read_int(offset_of!(Header, count) as i32), -7);
            assert_eq!(p.read_long(offset_of!(Header, size) as i32), 0x1234);
            p.write_int(offset_of!(Header, count) as i32, 21);
        }
        assert_eq!(header.count, 21);
    }

    #[test]
    fn formatting() {
        assert_eq!(format!("{}", Pointer::from_int(0x1F)), "^1f");
        assert_eq!(format!("{:?}", Pointer::from_int(0x1F)), "Pointer(0x1f)");
    }
}
