// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for cursorvec.

use cursorvec_util::ByteRangeError;
use thiserror::Error;

/// Error type for [`RawCursorVec`](crate::RawCursorVec) and
/// [`CursorVec`](crate::CursorVec) operations.
///
/// A failed operation never mutates the container.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum CursorVecError {
    /// The container holds no buffer (zero capacity).
    #[error("container is not allocated")]
    Unallocated,

    /// An element index outside the live range.
    #[error("index {index} is out of bounds for {count} live elements")]
    OutOfBounds {
        /// The requested element index.
        index: usize,
        /// Live element count at the time of the call.
        count: usize,
    },

    /// A cursor position past the allocated capacity.
    #[error("cursor position {position} exceeds capacity of {capacity} elements")]
    CursorOutOfRange {
        /// The requested position in elements.
        position: usize,
        /// Capacity in elements at the time of the call.
        capacity: usize,
    },

    /// Element data whose length differs from the declared element size.
    #[error("element is {actual} bytes, expected {expected}")]
    ElementSizeMismatch {
        /// Declared element size in bytes.
        expected: usize,
        /// Length of the supplied data.
        actual: usize,
    },

    /// The allocator could not provide the requested buffer.
    #[error("failed to allocate {requested_bytes} bytes")]
    AllocationFailed {
        /// Total buffer size that was requested.
        requested_bytes: usize,
    },

    /// Integer overflow when computing a byte size.
    ///
    /// Requires an element count whose byte size exceeds `usize::MAX`.
    #[error("Integer overflow: byte size would exceed usize::MAX")]
    Overflow,

    /// A raw byte write would run past the allocation.
    #[error("ByteRangeError: {0}")]
    ByteRange(#[from] ByteRangeError),
}
