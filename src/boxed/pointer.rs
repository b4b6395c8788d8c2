use std::fmt::{self, Debug};
use std::sync::Arc;

use lazy_static::lazy_static;

use crate::word::{Pointer, Word};
use super::{unsigned_greater_than, unsigned_less_than, Boxed};

const CACHE_LIMIT: i64 = 1000;

lazy_static! {
    static ref ZERO: Arc<BoxedPointer> = Arc::new(BoxedPointer { value: 0 });
    static ref MAX: Arc<BoxedPointer> = Arc::new(BoxedPointer { value: -1 });
    static ref CACHE: Vec<Arc<BoxedPointer>> = (0..=CACHE_LIMIT)
        .map(|value| Arc::new(BoxedPointer { value }))
        .collect();
}

/**
 * The hosted representation of a [`Pointer`]. A boxed pointer carries no
 * access capability of its own; hosted memory access is routed elsewhere.
 * This wrapper only preserves the bit pattern and its unsigned arithmetic.
 */
pub struct BoxedPointer {
    value: i64,
}

impl BoxedPointer {
    pub fn from_long(value: i64) -> Arc<BoxedPointer> {
        if value == 0 {
            ZERO.clone()
        } else if value == -1 {
            MAX.clone()
        } else if (0..=CACHE_LIMIT).contains(&value) {
            CACHE[value as usize].clone()
        } else {
            Arc::new(BoxedPointer { value })
        }
    }

    pub fn zero() -> Arc<BoxedPointer> {
        ZERO.clone()
    }

    pub fn max() -> Arc<BoxedPointer> {
        MAX.clone()
    }

    pub fn from_word(word: Pointer) -> Arc<BoxedPointer> {
        BoxedPointer::from_long(word.to_bits() as i64)
    }

    pub fn to_word(&self) -> Pointer {
        Pointer::from_bits(self.value as u64)
    }

    pub fn equals(&self, other: &dyn Boxed) -> bool {
        self.value == other.value()
    }

    pub fn greater_than(&self, other: &dyn Boxed) -> bool {
        unsigned_greater_than(self.value, other.value())
    }

    pub fn less_than(&self, other: &dyn Boxed) -> bool {
        unsigned_less_than(self.value, other.value())
    }

    pub fn plus(&self, addend: i64) -> Arc<BoxedPointer> {
        BoxedPointer::from_long(self.value.wrapping_add(addend))
    }

    pub fn minus(&self, subtrahend: i64) -> Arc<BoxedPointer> {
        BoxedPointer::from_long(self.value.wrapping_sub(subtrahend))
    }
}

impl Boxed for BoxedPointer {
    fn value(&self) -> i64 {
        self.value
    }
}

impl Debug for BoxedPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoxedPointer({:#x})", self.value)
    }
}

//-----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singletons() {
        assert!(Arc::ptr_eq(&BoxedPointer::from_long(0), &BoxedPointer::zero()));
        assert!(Arc::ptr_eq(&BoxedPointer::from_long(-1), &BoxedPointer::max()));
        assert!(!Arc::ptr_eq(&BoxedPointer::from_long(4096), &BoxedPointer::from_long(4096)));
    }

    #[test]
    fn word_bridge() {
        let p = Pointer::from_int(0x2000);
        let b = BoxedPointer::from_word(p);
        assert_eq!(b.to_word(), p);
        assert_eq!(b.plus(8).to_word(), p.plus_int(8));
        assert!(BoxedPointer::max().greater_than(&*b));
    }
}
