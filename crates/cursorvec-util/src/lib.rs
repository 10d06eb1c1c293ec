// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte-range helpers for fixed-stride buffers.
//!
//! These functions treat a `&mut [u8]` as a sequence of fixed-size slots and
//! perform the overlapping moves and pattern fills a cursor-based container
//! needs. All of them validate their ranges up front and never touch the
//! buffer when they return an error.

#![cfg_attr(not(test), no_std)]

use core::ops::Range;

use thiserror::Error;

/// Errors returned by the byte-range helpers.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum ByteRangeError {
    /// The requested range does not fit in the buffer.
    #[error("range {start}..{end} does not fit in a buffer of {len} bytes")]
    OutOfBounds {
        /// First byte of the offending range.
        start: usize,
        /// One past the last byte of the offending range.
        end: usize,
        /// Buffer length in bytes.
        len: usize,
    },

    /// The pattern is empty or does not tile the destination exactly.
    #[error("pattern of {pattern_len} bytes cannot tile {len} bytes")]
    InvalidPattern {
        /// Pattern length in bytes.
        pattern_len: usize,
        /// Destination length in bytes.
        len: usize,
    },
}

/// Overwrites every `pattern.len()`-sized chunk of `dst` with `pattern`.
///
/// # Errors
///
/// Returns [`ByteRangeError::InvalidPattern`] if `pattern` is empty or
/// `dst.len()` is not a multiple of `pattern.len()`.
///
/// # Example
///
/// ```
/// use cursorvec_util::fill_with_pattern;
///
/// let mut buf = [0u8; 6];
/// fill_with_pattern(&mut buf, &[0xAB, 0xCD]).unwrap();
/// assert_eq!(buf, [0xAB, 0xCD, 0xAB, 0xCD, 0xAB, 0xCD]);
/// ```
pub fn fill_with_pattern(dst: &mut [u8], pattern: &[u8]) -> Result<(), ByteRangeError> {
    if pattern.is_empty() || dst.len() % pattern.len() != 0 {
        return Err(ByteRangeError::InvalidPattern {
            pattern_len: pattern.len(),
            len: dst.len(),
        });
    }

    for chunk in dst.chunks_exact_mut(pattern.len()) {
        chunk.copy_from_slice(pattern);
    }

    Ok(())
}

/// Moves `buf[at..end]` right by `width` bytes, leaving `buf[at..at + width]`
/// free for a new slot.
///
/// The bytes in the opened gap keep their previous contents.
///
/// # Errors
///
/// Returns [`ByteRangeError::OutOfBounds`] if `at > end` or the shifted range
/// would run past the end of `buf`.
///
/// # Example
///
/// ```
/// use cursorvec_util::open_gap;
///
/// let mut buf = [1u8, 2, 3, 0, 0];
/// open_gap(&mut buf, 1, 3, 2).unwrap();
/// assert_eq!(buf, [1, 2, 3, 2, 3]);
/// ```
pub fn open_gap(
    buf: &mut [u8],
    at: usize,
    end: usize,
    width: usize,
) -> Result<(), ByteRangeError> {
    let shifted_end = end.checked_add(width).ok_or(ByteRangeError::OutOfBounds {
        start: at,
        end: usize::MAX,
        len: buf.len(),
    })?;

    if at > end || shifted_end > buf.len() {
        return Err(ByteRangeError::OutOfBounds {
            start: at,
            end: shifted_end,
            len: buf.len(),
        });
    }

    buf.copy_within(at..end, at + width);
    Ok(())
}

/// Moves `buf[at + width..end]` left by `width` bytes, overwriting
/// `buf[at..at + width]`.
///
/// The last `width` bytes of the range keep their previous contents.
///
/// # Errors
///
/// Returns [`ByteRangeError::OutOfBounds`] if `at + width > end` or
/// `end > buf.len()`.
///
/// # Example
///
/// ```
/// use cursorvec_util::close_gap;
///
/// let mut buf = [1u8, 2, 3, 4, 5];
/// close_gap(&mut buf, 1, 5, 2).unwrap();
/// assert_eq!(buf, [1, 4, 5, 4, 5]);
/// ```
pub fn close_gap(
    buf: &mut [u8],
    at: usize,
    end: usize,
    width: usize,
) -> Result<(), ByteRangeError> {
    let tail_start = at.checked_add(width).ok_or(ByteRangeError::OutOfBounds {
        start: at,
        end,
        len: buf.len(),
    })?;

    if tail_start > end || end > buf.len() {
        return Err(ByteRangeError::OutOfBounds {
            start: at,
            end,
            len: buf.len(),
        });
    }

    buf.copy_within(tail_start..end, at);
    Ok(())
}

/// Swaps slot `a` with slot `b`, where slot `i` is `buf[i * width..(i + 1) * width]`.
///
/// # Errors
///
/// Returns [`ByteRangeError::OutOfBounds`] if either slot does not fit in
/// `buf`.
///
/// # Example
///
/// ```
/// use cursorvec_util::swap_slots;
///
/// let mut buf = [1u8, 2, 3, 4, 5, 6];
/// swap_slots(&mut buf, 0, 2, 2).unwrap();
/// assert_eq!(buf, [5, 6, 3, 4, 1, 2]);
/// ```
pub fn swap_slots(
    buf: &mut [u8],
    a: usize,
    b: usize,
    width: usize,
) -> Result<(), ByteRangeError> {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    let len = buf.len();

    let high_start = high.checked_mul(width);
    let high_end = high_start.and_then(|start| start.checked_add(width));

    let (high_start, high_end) = match (high_start, high_end) {
        (Some(start), Some(end)) if end <= len => (start, end),
        _ => {
            return Err(ByteRangeError::OutOfBounds {
                start: high_start.unwrap_or(usize::MAX),
                end: high_end.unwrap_or(usize::MAX),
                len,
            });
        }
    };

    if low == high {
        return Ok(());
    }

    // `low < high`, so the low slot ends at or before `high_start`.
    let low_start = low * width;
    let (head, tail) = buf.split_at_mut(high_start);
    head[low_start..low_start + width].swap_with_slice(&mut tail[..high_end - high_start]);

    Ok(())
}

/// Clamps `first..last` to `0..len`.
///
/// An inverted range collapses to an empty range starting at the clamped
/// `first`.
///
/// # Example
///
/// ```
/// use cursorvec_util::clamp_range;
///
/// assert_eq!(clamp_range(2, 10, 8), 2..8);
/// assert_eq!(clamp_range(6, 3, 8), 6..6);
/// assert_eq!(clamp_range(12, 20, 8), 8..8);
/// ```
#[inline]
pub fn clamp_range(first: usize, last: usize, len: usize) -> Range<usize> {
    let start = first.min(len);
    let end = last.min(len).max(start);

    start..end
}

/// Returns `true` if every `pattern.len()`-sized chunk of `bytes` equals
/// `pattern`.
///
/// An empty pattern only matches an empty slice.
#[cfg(any(test, feature = "test-utils"))]
pub fn is_filled_with(bytes: &[u8], pattern: &[u8]) -> bool {
    if pattern.is_empty() {
        return bytes.is_empty();
    }

    bytes.len() % pattern.len() == 0 && bytes.chunks_exact(pattern.len()).all(|c| c == pattern)
}
