/*!
 * Machine words and raw memory access for a VM substrate.
 *
 * The [`word`] module defines the typed word family ([`Address`],
 * [`Offset`], [`Size`], [`Pointer`]) and the [`Accessor`] memory contract;
 * [`boxed`] is the hosted object representation of the same values, present
 * only with the `hosted` cargo feature; [`memory`] allocates native memory;
 * [`data_io`] moves bulk bytes through a possibly-partial transport; and
 * [`cstring`] handles NUL-terminated UTF-8 at the C boundary.
 */

pub mod arch;

pub mod word;
pub use word::{Accessor, Address, Offset, Pointer, Reference, Size, Width, Word, WordKind};

#[cfg(feature = "hosted")]
pub mod boxed;

pub mod memory;

pub mod data_io;

pub mod cstring;
