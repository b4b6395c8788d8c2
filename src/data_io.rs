/*!
 * Bulk data transfer to and from a (possibly remote) address space.
 *
 * A [`DataIO`] transport moves bytes between native addresses and local
 * buffers and is allowed to transfer less than asked per call; the provided
 * `read_fully`/`write_fully` loops retry while the transport makes progress
 * and fail with the still-missing count when it stops. [`RawMemory`] is the
 * in-process transport used when the inspected address space is this one.
 */

use thiserror::Error;

use super::memory;
use super::word::{Address, Offset, Word};

#[derive(Debug, Error)]
pub enum DataIOError {
    #[error("read at {address} stalled with {missing} bytes missing")]
    IncompleteRead { address: Address, missing: usize },
    #[error("write at {address} stalled with {missing} bytes missing")]
    IncompleteWrite { address: Address, missing: usize },
    #[error("transfer at {address} failed: {message}")]
    Transfer { address: Address, message: String },
}

/// Panics unless `[offset, offset + length)` lies within a buffer of
/// `buffer_len` bytes. A malformed range is a misuse error, caught before
/// any partial work.
pub fn check_bounds(offset: usize, length: usize, buffer_len: usize) {
    let end = offset.checked_add(length);
    assert!(
        end.map_or(false, |end| end <= buffer_len),
        "range {}..{}+{} out of bounds for a buffer of {} bytes",
        offset, offset, length, buffer_len,
    );
}

/**
 * A byte transport between native addresses and local buffers.
 *
 * `read` and `write` may transfer fewer bytes than the buffer holds;
 * `Ok(0)` on a non-empty buffer means the transport has definitively
 * stopped. Callers wanting all-or-nothing semantics use the `_fully` forms.
 */
pub trait DataIO {
    fn read(&mut self, address: Address, buffer: &mut [u8]) -> Result<usize, DataIOError>;

    fn write(&mut self, buffer: &[u8], address: Address) -> Result<usize, DataIOError>;

    /// Reads until the buffer is full, retrying partial transfers. There is
    /// no timeout; the loop spins for as long as the transport progresses.
    fn read_fully(&mut self, address: Address, buffer: &mut [u8]) -> Result<(), DataIOError> {
        let mut done = 0;
        while done < buffer.len() {
            let n = self.read(address.plus(Offset::from(done as isize)), &mut buffer[done..])?;
            if n == 0 {
                return Err(DataIOError::IncompleteRead {
                    address,
                    missing: buffer.len() - done,
                });
            }
            done += n;
        }
        Ok(())
    }

    /// Writes the whole buffer, retrying partial transfers.
    fn write_fully(&mut self, buffer: &[u8], address: Address) -> Result<(), DataIOError> {
        let mut done = 0;
        while done < buffer.len() {
            let n = self.write(&buffer[done..], address.plus(Offset::from(done as isize)))?;
            if n == 0 {
                return Err(DataIOError::IncompleteWrite {
                    address,
                    missing: buffer.len() - done,
                });
            }
            done += n;
        }
        Ok(())
    }
}

/**
 * The in-process transport: addresses name this process's own memory and
 * every transfer completes in one raw copy.
 */
pub struct RawMemory;

impl RawMemory {
    /// The caller asserts that every address later passed to the [`DataIO`]
    /// methods will be valid readable (respectively writable) memory for the
    /// full length of the transfer.
    pub unsafe fn new() -> Self {
        RawMemory
    }
}

impl DataIO for RawMemory {
    fn read(&mut self, address: Address, buffer: &mut [u8]) -> Result<usize, DataIOError> {
        unsafe { memory::read_bytes(address.as_pointer(), buffer) };
        Ok(buffer.len())
    }

    fn write(&mut self, buffer: &[u8], address: Address) -> Result<usize, DataIOError> {
        unsafe { memory::write_bytes(buffer, address.as_pointer()) };
        Ok(buffer.len())
    }
}

//-----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::{Size};

    /// A transport over a local array that moves at most `chunk` bytes per
    /// call and stops dead at `limit` bytes transferred.
    struct Throttled {
        backing: Vec<u8>,
        chunk: usize,
        limit: usize,
    }

    impl DataIO for Throttled {
        fn read(&mut self, address: Address, buffer: &mut [u8]) -> Result<usize, DataIOError> {
            let base = address.to_usize();
            let n = buffer.len().min(self.chunk).min(self.limit.saturating_sub(base));
            buffer[..n].copy_from_slice(&self.backing[base..base + n]);
            Ok(n)
        }

        fn write(&mut self, buffer: &[u8], address: Address) -> Result<usize, DataIOError> {
            let base = address.to_usize();
            let n = buffer.len().min(self.chunk).min(self.limit.saturating_sub(base));
            self.backing[base..base + n].copy_from_slice(&buffer[..n]);
            Ok(n)
        }
    }

    /// A transport that only records where it was asked to transfer.
    struct Recorder {
        chunk: usize,
        seen: Vec<Address>,
    }

    impl DataIO for Recorder {
        fn read(&mut self, address: Address, buffer: &mut [u8]) -> Result<usize, DataIOError> {
            self.seen.push(address);
            Ok(buffer.len().min(self.chunk))
        }

        fn write(&mut self, buffer: &[u8], address: Address) -> Result<usize, DataIOError> {
            self.seen.push(address);
            Ok(buffer.len().min(self.chunk))
        }
    }

    #[test]
    fn bounds() {
        check_bounds(0, 4, 4);
        check_bounds(4, 0, 4);
        check_bounds(1, 2, 4);
    }

    #[test]
    #[should_panic]
    fn bounds_overrun() {
        check_bounds(2, 3, 4);
    }

    #[test]
    #[should_panic]
    fn bounds_overflow() {
        check_bounds(usize::MAX, 2, 4);
    }

    #[test]
    fn fully_retries_partial_transfers() {
        let mut io = Throttled {
            backing: (0..32).collect(),
            chunk: 5,
            limit: 32,
        };
        let mut buffer = [0u8; 17];
        io.read_fully(Address::from_int(3), &mut buffer).unwrap();
        for (i, byte) in buffer.iter().enumerate() {
            assert_eq!(*byte, (3 + i) as u8);
        }
        io.write_fully(&[0xAA; 17], Address::from_int(3)).unwrap();
        assert_eq!(io.backing[2], 2);
        assert!(io.backing[3..20].iter().all(|b| *b == 0xAA));
        assert_eq!(io.backing[20], 20);
    }

    #[test]
    fn fully_resumes_at_full_word_width() {
        // The resume position is added on at full word width, so a base in
        // the top half of the address space survives unharmed.
        let base = Address::all_ones().minus_int(7);
        let mut io = Recorder { chunk: 3, seen: Vec::new() };
        let mut buffer = [0u8; 8];
        io.read_fully(base, &mut buffer).unwrap();
        io.write_fully(&buffer, base).unwrap();
        let expected: Vec<Address> =
            [0, 3, 6, 0, 3, 6].iter().map(|d| base.plus_int(*d)).collect();
        assert_eq!(io.seen, expected);
    }

    #[test]
    fn fully_reports_stalls() {
        let mut io = Throttled {
            backing: vec![0; 16],
            chunk: 4,
            limit: 10,
        };
        let mut buffer = [0u8; 16];
        match io.read_fully(Address::zero(), &mut buffer) {
            Err(DataIOError::IncompleteRead { missing, .. }) => assert_eq!(missing, 6),
            other => panic!("expected a stalled read, got {:?}", other.map(|()| "ok")),
        }
        match io.write_fully(&[1; 16], Address::zero()) {
            Err(DataIOError::IncompleteWrite { missing, .. }) => assert_eq!(missing, 6),
            other => panic!("expected a stalled write, got {:?}", other.map(|()| "ok")),
        }
    }

    #[test]
    fn raw_memory_round_trip() {
        let p = crate::memory::must_allocate(Size::from_int(64));
        let mut io = unsafe { RawMemory::new() };
        io.write_fully(b"data through the window", p.as_address()).unwrap();
        let mut back = [0u8; 23];
        io.read_fully(p.as_address(), &mut back).unwrap();
        assert_eq!(&back, b"data through the window");
        crate::memory::deallocate(p.as_address());
    }
}
