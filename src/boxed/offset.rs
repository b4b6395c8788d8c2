use std::fmt::{self, Debug};
use std::sync::Arc;

use lazy_static::lazy_static;

use crate::word::{Offset, Word};
use super::{Boxed};

// Offsets are signed, so the cache extends a little below zero for the
// common small negative deltas.
const CACHE_LOW: i64 = -100;
const CACHE_HIGH: i64 = 1000;

lazy_static! {
    static ref ZERO: Arc<BoxedOffset> = Arc::new(BoxedOffset { value: 0 });
    static ref CACHE: Vec<Arc<BoxedOffset>> = (CACHE_LOW..=CACHE_HIGH)
        .map(|value| Arc::new(BoxedOffset { value }))
        .collect();
}

/**
 * The hosted representation of an [`Offset`]: the signed counterpart of
 * [`BoxedAddress`](super::BoxedAddress), with plain signed semantics.
 */
pub struct BoxedOffset {
    value: i64,
}

impl BoxedOffset {
    pub fn from_long(value: i64) -> Arc<BoxedOffset> {
        if value == 0 {
            ZERO.clone()
        } else if (CACHE_LOW..=CACHE_HIGH).contains(&value) {
            CACHE[(value - CACHE_LOW) as usize].clone()
        } else {
            Arc::new(BoxedOffset { value })
        }
    }

    pub fn zero() -> Arc<BoxedOffset> {
        ZERO.clone()
    }

    pub fn from_word(word: Offset) -> Arc<BoxedOffset> {
        BoxedOffset::from_long(word.to_long())
    }

    pub fn to_word(&self) -> Offset {
        Offset::from_long(self.value)
    }

    pub fn equals(&self, other: &dyn Boxed) -> bool {
        self.value == other.value()
    }

    pub fn is_negative(&self) -> bool {
        self.value < 0
    }

    pub fn negate(&self) -> Arc<BoxedOffset> {
        BoxedOffset::from_long(self.value.wrapping_neg())
    }

    // Signed comparisons.

    pub fn greater_than(&self, other: &dyn Boxed) -> bool {
        self.value > other.value()
    }

    pub fn greater_equal(&self, other: &dyn Boxed) -> bool {
        self.value >= other.value()
    }

    pub fn less_than(&self, other: &dyn Boxed) -> bool {
        self.value < other.value()
    }

    pub fn less_equal(&self, other: &dyn Boxed) -> bool {
        self.value <= other.value()
    }

    // Signed arithmetic.

    pub fn plus(&self, addend: i64) -> Arc<BoxedOffset> {
        BoxedOffset::from_long(self.value.wrapping_add(addend))
    }

    pub fn minus(&self, subtrahend: i64) -> Arc<BoxedOffset> {
        BoxedOffset::from_long(self.value.wrapping_sub(subtrahend))
    }

    pub fn times(&self, factor: i64) -> Arc<BoxedOffset> {
        BoxedOffset::from_long(self.value.wrapping_mul(factor))
    }

    /// Signed division; a zero divisor panics.
    pub fn divided_by(&self, divisor: &dyn Boxed) -> Arc<BoxedOffset> {
        if divisor.value() == 0 {
            panic!("division of a word by the zero word");
        }
        BoxedOffset::from_long(self.value.wrapping_div(divisor.value()))
    }

    /// Signed remainder; a zero divisor panics.
    pub fn remainder(&self, divisor: &dyn Boxed) -> Arc<BoxedOffset> {
        if divisor.value() == 0 {
            panic!("remainder of a word by the zero word");
        }
        BoxedOffset::from_long(self.value.wrapping_rem(divisor.value()))
    }
}

impl Boxed for BoxedOffset {
    fn value(&self) -> i64 {
        self.value
    }
}

impl Debug for BoxedOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoxedOffset({})", self.value)
    }
}

//-----------------------------------------------------------------------------
