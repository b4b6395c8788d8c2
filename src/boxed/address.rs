use std::fmt::{self, Debug};
use std::sync::Arc;

use lazy_static::lazy_static;

use crate::word::{Address, Word};
use super::{unsigned_divide, unsigned_greater_than, unsigned_less_than, Boxed};

/// Small unsigned constants are ubiquitous (header words, element counts),
/// so they are interned once.
const CACHE_LIMIT: i64 = 1000;

lazy_static! {
    static ref ZERO: Arc<BoxedAddress> = Arc::new(BoxedAddress { value: 0 });
    static ref MAX: Arc<BoxedAddress> = Arc::new(BoxedAddress { value: -1 });
    static ref CACHE: Vec<Arc<BoxedAddress>> = (0..=CACHE_LIMIT)
        .map(|value| Arc::new(BoxedAddress { value }))
        .collect();
}

/**
 * The hosted representation of an [`Address`]: an immutable shared object
 * wrapping the canonical 64-bit payload, with unsigned semantics.
 */
pub struct BoxedAddress {
    value: i64,
}

impl BoxedAddress {
    pub fn from_long(value: i64) -> Arc<BoxedAddress> {
        if value == 0 {
            ZERO.clone()
        } else if value == -1 {
            MAX.clone()
        } else if (0..=CACHE_LIMIT).contains(&value) {
            CACHE[value as usize].clone()
        } else {
            Arc::new(BoxedAddress { value })
        }
    }

    pub fn zero() -> Arc<BoxedAddress> {
        ZERO.clone()
    }

    pub fn max() -> Arc<BoxedAddress> {
        MAX.clone()
    }

    pub fn from_word(word: Address) -> Arc<BoxedAddress> {
        BoxedAddress::from_long(word.to_bits() as i64)
    }

    pub fn to_word(&self) -> Address {
        Address::from_bits(self.value as u64)
    }

    pub fn equals(&self, other: &dyn Boxed) -> bool {
        self.value == other.value()
    }

    // Unsigned comparisons over the signed payload.

    pub fn greater_than(&self, other: &dyn Boxed) -> bool {
        unsigned_greater_than(self.value, other.value())
    }

    pub fn greater_equal(&self, other: &dyn Boxed) -> bool {
        !unsigned_less_than(self.value, other.value())
    }

    pub fn less_than(&self, other: &dyn Boxed) -> bool {
        unsigned_less_than(self.value, other.value())
    }

    pub fn less_equal(&self, other: &dyn Boxed) -> bool {
        !unsigned_greater_than(self.value, other.value())
    }

    // Arithmetic; every result goes back through the cache.

    pub fn plus(&self, addend: i64) -> Arc<BoxedAddress> {
        BoxedAddress::from_long(self.value.wrapping_add(addend))
    }

    pub fn minus(&self, subtrahend: i64) -> Arc<BoxedAddress> {
        BoxedAddress::from_long(self.value.wrapping_sub(subtrahend))
    }

    pub fn times(&self, factor: i64) -> Arc<BoxedAddress> {
        BoxedAddress::from_long(self.value.wrapping_mul(factor))
    }

    pub fn divided_by(&self, divisor: &dyn Boxed) -> Arc<BoxedAddress> {
        BoxedAddress::from_long(unsigned_divide(self.value, divisor.value()))
    }

    pub fn remainder(&self, divisor: &dyn Boxed) -> Arc<BoxedAddress> {
        BoxedAddress::from_long(super::unsigned_remainder(self.value, divisor.value()))
    }
}

impl Boxed for BoxedAddress {
    fn value(&self) -> i64 {
        self.value
    }
}

impl Debug for BoxedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoxedAddress({:#x})", self.value)
    }
}

//-----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::tests::{TEST_VALUES};

    #[test]
    fn singletons() {
        assert!(Arc::ptr_eq(&BoxedAddress::from_long(0), &BoxedAddress::zero()));
        assert!(Arc::ptr_eq(&BoxedAddress::from_long(-1), &BoxedAddress::max()));
        assert!(Arc::ptr_eq(
            &BoxedAddress::from_long(1000),
            &BoxedAddress::from_long(1000),
        ));
        // Past the cache, each box is fresh.
        assert!(!Arc::ptr_eq(
            &BoxedAddress::from_long(1001),
            &BoxedAddress::from_long(1001),
        ));
        assert!(BoxedAddress::from_long(1001).equals(&*BoxedAddress::from_long(1001)));
    }

    #[test]
    fn agrees_with_native_comparisons() {
        for x in TEST_VALUES {
            for y in TEST_VALUES {
                let (a, b) = (Address::from_bits(x), Address::from_bits(y));
                let (ba, bb) = (BoxedAddress::from_word(a), BoxedAddress::from_word(b));
                assert_eq!(ba.greater_than(&*bb), a.greater_than(b));
                assert_eq!(ba.greater_equal(&*bb), a.greater_equal(b));
                assert_eq!(ba.less_than(&*bb), a.less_than(b));
                assert_eq!(ba.less_equal(&*bb), a.less_equal(b));
                assert_eq!(ba.equals(&*bb), a == b);
            }
        }
    }

    #[test]
    fn agrees_with_native_division() {
        for x in TEST_VALUES {
            for y in TEST_VALUES {
                let (a, b) = (Address::from_bits(x), Address::from_bits(y));
                if b.is_zero() {
                    continue;
                }
                let (ba, bb) = (BoxedAddress::from_word(a), BoxedAddress::from_word(b));
                assert_eq!(ba.divided_by(&*bb).to_word(), a.divided_by(b));
                assert_eq!(ba.remainder(&*bb).to_word(), a.remainder(b));
            }
        }
    }

    #[test]
    fn arithmetic() {
        let a = BoxedAddress::from_long(100);
        assert_eq!(a.plus(28).value(), 128);
        assert_eq!(a.minus(101).value(), -1);
        assert_eq!(a.times(3).value(), 300);
        // Wraparound comes back to the MAX singleton.
        assert!(Arc::ptr_eq(&a.minus(101), &BoxedAddress::max()));
    }

    #[test]
    #[should_panic]
    fn divide_by_zero() {
        let _ = BoxedAddress::from_long(5).divided_by(&*BoxedAddress::zero());
    }

    #[test]
    fn word_bridge() {
        for x in TEST_VALUES {
            let a = Address::from_bits(x);
            assert_eq!(BoxedAddress::from_word(a).to_word(), a);
        }
    }
}
