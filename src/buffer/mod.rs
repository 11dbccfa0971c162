//! Bounded copy of array-valued fields into caller buffers
//!
//! Byte and character array columns are read in pieces: the caller supplies
//! a destination slice, an offset into it and a maximum length, and gets back
//! the number of elements actually copied. Passing no destination probes the
//! full source length.

use crate::error::{Error, Result};
use crate::row::Value;

/// Element type of an array-valued field
pub trait ArrayElement: Copy {
    /// Borrow the array payload of a value, failing with `InvalidCast` when
    /// the value is not an array of this element type
    fn array_of(value: &Value) -> Result<&[Self]>;
}

impl ArrayElement for u8 {
    fn array_of(value: &Value) -> Result<&[u8]> {
        match value {
            Value::Bytes(bytes) => Ok(bytes),
            other => Err(Error::InvalidCast {
                expected: "Byte[]",
                actual: other.type_name(),
            }),
        }
    }
}

impl ArrayElement for char {
    fn array_of(value: &Value) -> Result<&[char]> {
        match value {
            Value::Chars(chars) => Ok(chars),
            other => Err(Error::InvalidCast {
                expected: "Char[]",
                actual: other.type_name(),
            }),
        }
    }
}

/// Copy up to `max_len` elements of `source[source_offset..]` into
/// `dest[dest_offset..]`.
///
/// Returns `source.len()` without copying when `dest` is `None`. Otherwise
/// returns the number of elements copied, which is the smallest of
/// `max_len`, the room left in `dest` and the elements left in `source`.
/// Offsets past either end copy nothing.
///
/// # Example
///
/// ```rust
/// use engine_reader::buffer::copy_array;
///
/// let source = b"hello world";
/// assert_eq!(copy_array(source, 0, None, 0, 0), 11);
///
/// let mut dest = [0u8; 5];
/// assert_eq!(copy_array(source, 6, Some(&mut dest[..]), 0, 10), 5);
/// assert_eq!(&dest, b"world");
/// ```
pub fn copy_array<T: Copy>(
    source: &[T],
    source_offset: usize,
    dest: Option<&mut [T]>,
    dest_offset: usize,
    max_len: usize,
) -> usize {
    let Some(dest) = dest else {
        return source.len();
    };

    let remaining_dest = dest.len().saturating_sub(dest_offset);
    let remaining_source = source.len().saturating_sub(source_offset);
    let amount = max_len.min(remaining_dest).min(remaining_source);
    if amount == 0 {
        return 0;
    }

    dest[dest_offset..dest_offset + amount]
        .copy_from_slice(&source[source_offset..source_offset + amount]);
    amount
}
