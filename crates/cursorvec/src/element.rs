// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Plain-bytes element types for [`CursorVec`](crate::CursorVec).

use core::mem::size_of;

/// Marker for types that can round-trip through raw bytes.
///
/// # Safety
///
/// Implementors must be inhabited by every bit pattern of
/// `size_of::<Self>()` bytes and contain no padding. Integers, floats and
/// arrays of `Element` qualify; `bool`, `char`, references and most structs
/// do not.
pub unsafe trait Element: Copy + 'static {}

macro_rules! impl_element_for_primitives {
    ($($ty:ty),* $(,)?) => {
        $(
            // SAFETY: primitive numeric types have no padding and no invalid bit patterns.
            unsafe impl Element for $ty {}
        )*
    };
}

impl_element_for_primitives!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64
);

// SAFETY: arrays are laid out contiguously with no padding between elements.
unsafe impl<T: Element, const N: usize> Element for [T; N] {}

/// Views `value` as its raw bytes.
#[inline(always)]
pub(crate) fn element_bytes<T: Element>(value: &T) -> &[u8] {
    // SAFETY: `T: Element` has no padding, so all size_of::<T>() bytes are initialised.
    unsafe { core::slice::from_raw_parts((value as *const T).cast::<u8>(), size_of::<T>()) }
}

/// Reads a `T` back from exactly `size_of::<T>()` bytes.
///
/// Returns `None` if `bytes` has the wrong length.
#[inline(always)]
pub(crate) fn read_element<T: Element>(bytes: &[u8]) -> Option<T> {
    if bytes.len() != size_of::<T>() {
        return None;
    }

    // SAFETY: length checked above; `T: Element` accepts any bit pattern and
    // read_unaligned tolerates the byte buffer's alignment.
    Some(unsafe { bytes.as_ptr().cast::<T>().read_unaligned() })
}
