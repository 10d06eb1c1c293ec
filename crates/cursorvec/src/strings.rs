// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::borrow::ToOwned;
use alloc::ffi::CString;
use core::ffi::CStr;

/// Returns an owned copy of a NUL-terminated string.
///
/// The copy has the same bytes as `s` and its own allocation.
///
/// # Example
///
/// ```rust
/// use cursorvec::copy_string;
///
/// let copy = copy_string(c"cursor");
/// assert_eq!(copy.as_bytes(), b"cursor");
/// ```
pub fn copy_string(s: &CStr) -> CString {
    s.to_owned()
}
