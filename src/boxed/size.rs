use std::fmt::{self, Debug};
use std::sync::Arc;

use lazy_static::lazy_static;

use crate::word::{Size, Word};
use super::{unsigned_greater_than, unsigned_less_than, Boxed};

const CACHE_LIMIT: i64 = 1000;

lazy_static! {
    static ref ZERO: Arc<BoxedSize> = Arc::new(BoxedSize { value: 0 });
    static ref MAX: Arc<BoxedSize> = Arc::new(BoxedSize { value: -1 });
    static ref CACHE: Vec<Arc<BoxedSize>> = (0..=CACHE_LIMIT)
        .map(|value| Arc::new(BoxedSize { value }))
        .collect();
}

/**
 * The hosted representation of a [`Size`]. Semantically a
 * [`BoxedAddress`](super::BoxedAddress) that names a byte count.
 */
pub struct BoxedSize {
    value: i64,
}

impl BoxedSize {
    pub fn from_long(value: i64) -> Arc<BoxedSize> {
        if value == 0 {
            ZERO.clone()
        } else if value == -1 {
            MAX.clone()
        } else if (0..=CACHE_LIMIT).contains(&value) {
            CACHE[value as usize].clone()
        } else {
            Arc::new(BoxedSize { value })
        }
    }

    pub fn zero() -> Arc<BoxedSize> {
        ZERO.clone()
    }

    pub fn max() -> Arc<BoxedSize> {
        MAX.clone()
    }

    pub fn from_word(word: Size) -> Arc<BoxedSize> {
        BoxedSize::from_long(word.to_bits() as i64)
    }

    pub fn to_word(&self) -> Size {
        Size::from_bits(self.value as u64)
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

    pub fn plus(&self, addend: i64) -> Arc<BoxedSize> {
        BoxedSize::from_long(self.value.wrapping_add(addend))
    }

    pub fn minus(&self, subtrahend: i64) -> Arc<BoxedSize> {
        BoxedSize::from_long(self.value.wrapping_sub(subtrahend))
    }

    pub fn times(&self, factor: i64) -> Arc<BoxedSize> {
        BoxedSize::from_long(self.value.wrapping_mul(factor))
    }

    pub fn divided_by(&self, divisor: &dyn Boxed) -> Arc<BoxedSize> {
        BoxedSize::from_long(super::unsigned_divide(self.value, divisor.value()))
    }

    pub fn remainder(&self, divisor: &dyn Boxed) -> Arc<BoxedSize> {
        BoxedSize::from_long(super::unsigned_remainder(self.value, divisor.value()))
    }
}

impl Boxed for BoxedSize {
    fn value(&self) -> i64 {
        self.value
    }
}

impl Debug for BoxedSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoxedSize({})", self.value)
    }
}

//-----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singletons() {
        assert!(Arc::ptr_eq(&BoxedSize::from_long(0), &BoxedSize::zero()));
        assert!(Arc::ptr_eq(&BoxedSize::from_long(-1), &BoxedSize::max()));
        assert!(Arc::ptr_eq(&BoxedSize::from_long(7), &BoxedSize::from_long(7)));
    }

    #[test]
    fn unsigned_semantics() {
        // The all-ones size is the largest, not negative.
        assert!(BoxedSize::max().greater_than(&*BoxedSize::from_long(i64::MAX)));
        assert_eq!(BoxedSize::max().divided_by(&*BoxedSize::from_long(2)).value(), (u64::MAX / 2) as i64);
    }

    #[test]
    fn word_bridge() {
        let s = Size::from_int(128);
        assert_eq!(BoxedSize::from_word(s).to_word(), s);
        assert_eq!(BoxedSize::from_word(s).plus(1).to_word(), Size::from_int(129));
    }
}
