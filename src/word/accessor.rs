use std::fmt::{self, Debug};

use crate::arch;
use super::{Address, Offset};

/**
 * An opaque reference to a managed object. At this layer it is just a
 * word-sized pattern with a null state; object layout policy lives above.
 */
#[derive(Copy, Clone, PartialEq, Eq)]
#[repr(transparent)]
pub struct Reference(*mut ());

impl Reference {
    pub fn null() -> Self {
        Reference(std::ptr::null_mut())
    }

    pub fn is_null(self) -> bool {
        self.0.is_null()
    }

    pub fn from_mut_ptr<T>(pointer: *mut T) -> Self {
        Reference(pointer as *mut ())
    }

    pub fn to_mut_ptr<T>(self) -> *mut T {
        self.0 as *mut T
    }
}

impl Default for Reference {
    fn default() -> Self {
        Reference::null()
    }
}

impl Debug for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reference({:#x})", self.0 as usize)
    }
}

/// The byte offset of element `index` of an array of `element_size`-byte
/// elements starting `displacement` bytes from the base.
pub(super) fn element_offset(displacement: i32, index: i32, element_size: usize) -> Offset {
    Offset::from_int(index)
        .times(element_size as i32)
        .plus_int(displacement)
}

/**
 * The capability to read, write and atomically update typed values at byte
 * offsets and scaled element indices relative to some base.
 *
 * [`Pointer`](super::Pointer) implements this over raw memory; a managed
 * object reference implements the same contract over its fields, so
 * layout-dependent algorithms are written once against this trait.
 *
 * Every method is `unsafe`: this layer does not own the addressed memory,
 * and validity, lifetime and (except for the CAS operations) exclusion are
 * entirely the caller's obligation. The CAS operations are the only atomic
 * primitives this layer exposes; they return the prior value, which equals
 * the expected value exactly when the swap happened.
 *
 * The `get_*`/`set_*` family addresses element `index` of an array located
 * `displacement` bytes from the base; the plain element form is
 * `get_x(0, index)`. The default bodies decompose into explicit offset
 * arithmetic; an implementation with a combined addressing mode may
 * override them.
 */
#[allow(clippy::missing_safety_doc)]
pub trait Accessor {
    unsafe fn read_byte(&self, offset: impl Into<Offset>) -> i8;
    unsafe fn write_byte(&self, offset: impl Into<Offset>, value: i8);

    unsafe fn read_short(&self, offset: impl Into<Offset>) -> i16;
    unsafe fn write_short(&self, offset: impl Into<Offset>, value: i16);

    unsafe fn read_char(&self, offset: impl Into<Offset>) -> u16;
    unsafe fn write_char(&self, offset: impl Into<Offset>, value: u16);

    unsafe fn read_int(&self, offset: impl Into<Offset>) -> i32;
    unsafe fn write_int(&self, offset: impl Into<Offset>, value: i32);

    unsafe fn read_float(&self, offset: impl Into<Offset>) -> f32;
    unsafe fn write_float(&self, offset: impl Into<Offset>, value: f32);

    unsafe fn read_long(&self, offset: impl Into<Offset>) -> i64;
    unsafe fn write_long(&self, offset: impl Into<Offset>, value: i64);

    unsafe fn read_double(&self, offset: impl Into<Offset>) -> f64;
    unsafe fn write_double(&self, offset: impl Into<Offset>, value: f64);

    unsafe fn read_word(&self, offset: impl Into<Offset>) -> Address;
    unsafe fn write_word(&self, offset: impl Into<Offset>, value: Address);

    unsafe fn read_reference(&self, offset: impl Into<Offset>) -> Reference;
    unsafe fn write_reference(&self, offset: impl Into<Offset>, value: Reference);

    unsafe fn compare_and_swap_int(
        &self,
        offset: impl Into<Offset>,
        expected: i32,
        new: i32,
    ) -> i32;

    unsafe fn compare_and_swap_word(
        &self,
        offset: impl Into<Offset>,
        expected: Address,
        new: Address,
    ) -> Address;

    unsafe fn compare_and_swap_reference(
        &self,
        offset: impl Into<Offset>,
        expected: Reference,
        new: Reference,
    ) -> Reference;

    // Booleans travel as bytes; zero is false.

    unsafe fn read_boolean(&self, offset: impl Into<Offset>) -> bool {
        self.read_byte(offset) != 0
    }

    unsafe fn write_boolean(&self, offset: impl Into<Offset>, value: bool) {
        self.write_byte(offset, value as i8);
    }

    // Scaled element access.

    unsafe fn get_byte(&self, displacement: i32, index: i32) -> i8 {
        self.read_byte(element_offset(displacement, index, 1))
    }

    unsafe fn set_byte(&self, displacement: i32, index: i32, value: i8) {
        self.write_byte(element_offset(displacement, index, 1), value);
    }

    unsafe fn get_boolean(&self, displacement: i32, index: i32) -> bool {
        self.get_byte(displacement, index) != 0
    }

    unsafe fn set_boolean(&self, displacement: i32, index: i32, value: bool) {
        self.set_byte(displacement, index, value as i8);
    }

    unsafe fn get_short(&self, displacement: i32, index: i32) -> i16 {
        self.read_short(element_offset(displacement, index, 2))
    }

    unsafe fn set_short(&self, displacement: i32, index: i32, value: i16) {
        self.write_short(element_offset(displacement, index, 2), value);
    }

    unsafe fn get_char(&self, displacement: i32, index: i32) -> u16 {
        self.read_char(element_offset(displacement, index, 2))
    }

    unsafe fn set_char(&self, displacement: i32, index: i32, value: u16) {
        self.write_char(element_offset(displacement, index, 2), value);
    }

    unsafe fn get_int(&self, displacement: i32, index: i32) -> i32 {
        self.read_int(element_offset(displacement, index, 4))
    }

    unsafe fn set_int(&self, displacement: i32, index: i32, value: i32) {
        self.write_int(element_offset(displacement, index, 4), value);
    }

    unsafe fn get_float(&self, displacement: i32, index: i32) -> f32 {
        self.read_float(element_offset(displacement, index, 4))
    }

    unsafe fn set_float(&self, displacement: i32, index: i32, value: f32) {
        self.write_float(element_offset(displacement, index, 4), value);
    }

    unsafe fn get_long(&self, displacement: i32, index: i32) -> i64 {
        self.read_long(element_offset(displacement, index, 8))
    }

    unsafe fn set_long(&self, displacement: i32, index: i32, value: i64) {
        self.write_long(element_offset(displacement, index, 8), value);
    }

    unsafe fn get_double(&self, displacement: i32, index: i32) -> f64 {
        self.read_double(element_offset(displacement, index, 8))
    }

    unsafe fn set_double(&self, displacement: i32, index: i32, value: f64) {
        self.write_double(element_offset(displacement, index, 8), value);
    }

    unsafe fn get_word(&self, displacement: i32, index: i32) -> Address {
        self.read_word(element_offset(displacement, index, arch::WORD_BYTES))
    }

    unsafe fn set_word(&self, displacement: i32, index: i32, value: Address) {
        self.write_word(element_offset(displacement, index, arch::WORD_BYTES), value);
    }

    unsafe fn get_reference(&self, displacement: i32, index: i32) -> Reference {
        self.read_reference(element_offset(displacement, index, arch::WORD_BYTES))
    }

    unsafe fn set_reference(&self, displacement: i32, index: i32, value: Reference) {
        self.write_reference(element_offset(displacement, index, arch::WORD_BYTES), value);
    }
}

//-----------------------------------------------------------------------------
