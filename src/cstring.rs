/*!
 * NUL-terminated UTF-8 strings in native memory.
 *
 * These are the conversions used at the boundary with C code: substrate
 * arguments, environment blocks, dynamic-linker symbol names. Buffers on the
 * native side are raw [`Pointer`]s; allocation goes through [`memory`] and
 * the caller owns deallocation.
 */

use std::str::Utf8Error;

use super::memory;
use super::word::{Accessor, Offset, Pointer, Size, Word};
use crate::arch;

/// The length of the NUL-terminated string at `string`, excluding the
/// terminator. The scan is unbounded; an unterminated buffer is undefined
/// behaviour.
pub unsafe fn length(string: Pointer) -> Size {
    let mut n = 0;
    while string.read_byte(n) != 0 {
        n += 1;
    }
    Size::from_int(n)
}

/// The unsigned byte at `position` in a buffer of `buffer_size` bytes, or
/// `-1` if the position is out of range.
pub unsafe fn get_byte(buffer: Pointer, buffer_size: Size, position: Offset) -> i32 {
    if position.is_negative() || !position.as_address().less_than(buffer_size.as_address()) {
        return -1;
    }
    buffer.read_byte(position) as u8 as i32
}

/// Decodes the NUL-terminated buffer at `string` as UTF-8.
pub unsafe fn utf8_to_string(string: Pointer) -> Result<String, Utf8Error> {
    let bytes = to_byte_array(string, length(string).to_usize());
    Ok(std::str::from_utf8(&bytes)?.to_string())
}

/// Copies `string` into freshly allocated native memory with a trailing NUL.
/// The caller owns the result and must `memory::deallocate` it.
pub fn utf8_from_string(string: &str) -> Pointer {
    let bytes = string.as_bytes();
    let buffer = memory::must_allocate(Size::from_long(bytes.len() as i64 + 1));
    unsafe {
        memory::write_bytes(bytes, buffer);
        buffer.write_byte(bytes.len() as i32, 0);
    }
    buffer
}

/// Encodes `string` into the fixed buffer, truncating at the last character
/// that fits whole. One byte is reserved for the NUL terminator, which is
/// always written. Returns the position just past the terminator.
pub unsafe fn write_utf8(string: &str, buffer: Pointer, buffer_size: usize) -> Pointer {
    assert!(buffer_size > 0, "cannot NUL-terminate an empty buffer");
    let written = encode_into(string.chars(), buffer, buffer_size);
    buffer.plus_int(written as i32)
}

/// As [`write_utf8`], over the `length` characters of `string` starting at
/// character `start`. Returns the number of bytes written, terminator
/// included.
pub unsafe fn write_partial_utf8(
    string: &str,
    start: usize,
    length: usize,
    buffer: Pointer,
    buffer_size: usize,
) -> usize {
    assert!(buffer_size > 0, "cannot NUL-terminate an empty buffer");
    encode_into(string.chars().skip(start).take(length), buffer, buffer_size)
}

/// The shared encoding loop. A character is either written whole or not at
/// all; a multi-byte sequence is never split by truncation.
unsafe fn encode_into(
    chars: impl Iterator<Item = char>,
    buffer: Pointer,
    buffer_size: usize,
) -> usize {
    let end_position = buffer_size - 1;
    let mut position = 0;
    let mut encoded = [0u8; 4];
    for ch in chars {
        let bytes = ch.encode_utf8(&mut encoded).as_bytes();
        if position + bytes.len() > end_position {
            break;
        }
        for byte in bytes {
            buffer.write_byte(position as i32, *byte as i8);
            position += 1;
        }
    }
    buffer.write_byte(position as i32, 0);
    position + 1
}

/// Copies `length` bytes of raw memory into a fresh vector.
pub unsafe fn to_byte_array(buffer: Pointer, length: usize) -> Vec<u8> {
    let mut bytes = vec![0; length];
    memory::read_bytes(buffer, &mut bytes);
    bytes
}

/// Packs `strings` into one native chunk shaped like a C `char**`: a
/// pointer array (with a trailing null entry if `append_null_delimiter`)
/// followed by the NUL-terminated string bodies the pointers address. The
/// caller owns the chunk and must `memory::deallocate` it.
pub fn utf8_array_from_strings(strings: &[&str], append_null_delimiter: bool) -> Pointer {
    let entries = strings.len() + usize::from(append_null_delimiter);
    let table_bytes = entries * arch::WORD_BYTES;
    let body_bytes: usize = strings.iter().map(|s| s.len() + 1).sum();
    let chunk = memory::must_allocate(Size::from_long((table_bytes + body_bytes) as i64));
    unsafe {
        let mut body = chunk.plus_int(table_bytes as i32);
        for (i, string) in strings.iter().enumerate() {
            chunk.set_word(0, i as i32, body.as_address());
            memory::write_bytes(string.as_bytes(), body);
            body.write_byte(string.len() as i32, 0);
            body = body.plus_int(string.len() as i32 + 1);
        }
        if append_null_delimiter {
            chunk.set_word(0, strings.len() as i32, crate::word::Address::zero());
        }
    }
    chunk
}

//-----------------------------------------------------------------------------
