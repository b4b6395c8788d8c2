/*!
 * Native memory: anonymous mappings handed out as raw [`Pointer`]s, and bulk
 * byte transfer between raw memory and slices.
 *
 * The allocator keeps a process-wide table from base address to mapping so
 * that [`deallocate`] can unmap given nothing but the address. Passing an
 * address that was not returned by [`allocate`] is a misuse error and
 * panics.
 */

use std::collections::HashMap;
use std::ptr;
use std::sync::Mutex;

use lazy_static::lazy_static;
use memmap::MmapMut;

use super::word::{Address, Pointer, Size, Word};

lazy_static! {
    static ref MAPPINGS: Mutex<HashMap<usize, MmapMut>> = Mutex::new(HashMap::new());
}

/// Allocates `size` bytes of zeroed native memory, or `None` on a zero size
/// or a mapping failure.
pub fn allocate(size: Size) -> Option<Pointer> {
    if size.is_zero() {
        return None;
    }
    let mut mapping = MmapMut::map_anon(size.to_usize()).ok()?;
    let base = mapping.as_mut_ptr() as usize;
    MAPPINGS.lock().expect("poisoned mapping table").insert(base, mapping);
    log::trace!("allocated {} bytes at {:#x}", size, base);
    Some(Pointer::from_bits(base as u64))
}

/// As [`allocate`], but an allocation failure is fatal.
pub fn must_allocate(size: Size) -> Pointer {
    match allocate(size) {
        Some(pointer) => pointer,
        None => panic!("could not allocate {} bytes of native memory", size),
    }
}

/// Unmaps the allocation whose base is `address`. Panics if `address` is not
/// the base of a live allocation made through this module.
pub fn deallocate(address: Address) {
    let base = address.to_usize();
    let mapping = MAPPINGS.lock().expect("poisoned mapping table").remove(&base);
    match mapping {
        Some(mapping) => {
            log::trace!("deallocated {} bytes at {:#x}", mapping.len(), base);
            drop(mapping);
        }
        None => panic!("deallocate({:#x}): not an allocated base address", base),
    }
}

/// Copies `destination.len()` bytes from raw memory into the slice.
pub unsafe fn read_bytes(source: Pointer, destination: &mut [u8]) {
    ptr::copy_nonoverlapping(
        source.to_ptr::<u8>(),
        destination.as_mut_ptr(),
        destination.len(),
    );
}

/// Copies the whole slice into raw memory.
pub unsafe fn write_bytes(source: &[u8], destination: Pointer) {
    ptr::copy_nonoverlapping(
        source.as_ptr(),
        destination.to_mut_ptr::<u8>(),
        source.len(),
    );
}

/// Zeroes `size` bytes of raw memory.
pub unsafe fn clear(start: Pointer, size: Size) {
    ptr::write_bytes(start.to_mut_ptr::<u8>(), 0, size.to_usize());
}

//-----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::{Accessor};

    #[test]
    fn allocate_and_free() {
        let size = Size::from_int(4096);
        let p = must_allocate(size);
        assert!(!p.is_zero());
        unsafe {
            // Fresh anonymous mappings are zeroed.
            assert_eq!(p.read_long(0), 0);
            p.write_long(0, 0x1122334455667788);
            assert_eq!(p.read_long(0), 0x1122334455667788);
            clear(p, size);
            assert_eq!(p.read_long(0), 0);
        }
        deallocate(p.as_address());
    }

    #[test]
    fn zero_size() {
        assert!(allocate(Size::zero()).is_none());
    }

    #[test]
    #[should_panic]
    fn unknown_base() {
        deallocate(Address::from_int(0x1234));
    }

    #[test]
    fn byte_transfer() {
        let p = must_allocate(Size::from_int(16));
        let data = [1u8, 2, 3, 4, 5];
        let mut back = [0u8; 5];
        unsafe {
            write_bytes(&data, p);
            read_bytes(p, &mut back);
        }
        assert_eq!(back, data);
        deallocate(p.as_address());
    }
}
