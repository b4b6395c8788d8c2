/*!
 * The hosted object representation of words.
 *
 * When the surrounding system runs on a host VM, before compiled code
 * exists, a word cannot be a raw register value; it is carried as an
 * immutable heap object wrapping one canonical 64-bit field. This module is
 * that representation: one wrapper per [`WordKind`], shared via [`Arc`],
 * with small-value caches so the hot constants do not churn the allocator.
 *
 * The wrappers deliberately do not implement `PartialEq`. Identity
 * (`Arc::ptr_eq`) is meaningful only for the documented singletons; value
 * comparison goes through [`Boxed::value`] or the `equals` methods.
 */

use std::sync::Arc;

use indexmap::IndexMap;
use lazy_static::lazy_static;

use super::word::{WordKind, ALL_KINDS};

mod address;
pub use address::{BoxedAddress};

mod offset;
pub use offset::{BoxedOffset};

mod size;
pub use size::{BoxedSize};

mod pointer;
pub use pointer::{BoxedPointer};

/// The single canonical field every boxed word carries. On a 32-bit build
/// the upper half of an unsigned kind's payload is zero.
pub trait Boxed {
    fn value(&self) -> i64;
}

//-----------------------------------------------------------------------------

// Unsigned 64-bit semantics over the signed payload, shared by the unsigned
// kinds. The comparison keeps the original two-branch form: equal sign bits
// reduce to a signed compare, and with differing sign bits the
// negative-signed operand is the unsigned-greater one.

pub(super) fn unsigned_less_than(a: i64, b: i64) -> bool {
    if (a < 0) == (b < 0) {
        a < b
    } else {
        // Differing sign bits: only the operand with the sign bit set has
        // its top (unsigned-magnitude) bit set, so it is the larger one.
        a >= 0
    }
}

pub(super) fn unsigned_greater_than(a: i64, b: i64) -> bool {
    unsigned_less_than(b, a)
}

pub(super) fn unsigned_divide(dividend: i64, divisor: i64) -> i64 {
    if divisor == 0 {
        panic!("division of a word by the zero word");
    }
    ((dividend as u64) / (divisor as u64)) as i64
}

pub(super) fn unsigned_remainder(dividend: i64, divisor: i64) -> i64 {
    if divisor == 0 {
        panic!("remainder of a word by the zero word");
    }
    ((dividend as u64) % (divisor as u64)) as i64
}

//-----------------------------------------------------------------------------

lazy_static! {
    /// Name to kind, for both spellings of each kind, in registration order.
    static ref REGISTRY: IndexMap<&'static str, WordKind> = {
        let mut map = IndexMap::new();
        for kind in ALL_KINDS {
            map.insert(kind.name(), kind);
            map.insert(kind.boxed_name(), kind);
        }
        log::debug!("registered {} word kinds", ALL_KINDS.len());
        map
    };
}

/// Looks up a kind by either its plain or its boxed type name.
pub fn kind_named(name: &str) -> Option<WordKind> {
    REGISTRY.get(name).copied()
}

/// Boxes a bit pattern as the given kind.
pub fn boxed_from_bits(kind: WordKind, value: i64) -> Arc<dyn Boxed> {
    match kind {
        WordKind::Address => BoxedAddress::from_long(value),
        WordKind::Offset => BoxedOffset::from_long(value),
        WordKind::Size => BoxedSize::from_long(value),
        WordKind::Pointer => BoxedPointer::from_long(value),
    }
}

//-----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::tests::{TEST_VALUES};

    #[test]
    fn unsigned_comparison_branches() {
        // The mixed-sign branch: all bits set is the largest value.
        assert!(!unsigned_less_than(-1, 0));
        assert!(unsigned_less_than(0, -1));
        assert!(unsigned_greater_than(-1, i64::MAX));
        for x in TEST_VALUES {
            for y in TEST_VALUES {
                let (a, b) = (x as i64, y as i64);
                assert_eq!(unsigned_less_than(a, b), x < y);
                assert_eq!(unsigned_greater_than(a, b), x > y);
            }
        }
    }

    #[test]
    fn unsigned_division() {
        assert_eq!(unsigned_divide(-1, 2), (u64::MAX / 2) as i64);
        assert_eq!(unsigned_remainder(-1, 2), 1);
        assert_eq!(unsigned_divide(100, 7), 14);
        assert_eq!(unsigned_remainder(100, 7), 2);
    }

    #[test]
    #[should_panic]
    fn divide_by_zero() {
        let _ = unsigned_divide(5, 0);
    }

    #[test]
    fn registry() {
        assert_eq!(kind_named("Address"), Some(WordKind::Address));
        assert_eq!(kind_named("BoxedAddress"), Some(WordKind::Address));
        assert_eq!(kind_named("BoxedOffset"), Some(WordKind::Offset));
        assert_eq!(kind_named("Word"), None);
        for kind in ALL_KINDS {
            assert_eq!(boxed_from_bits(kind, 42).value(), 42);
        }
    }
}
