// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Container configuration.

/// Configuration consulted by the reserving constructors.
///
/// Supplied at initialisation; a container never reads it again after
/// construction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CursorVecConfig {
    /// Number of element slots reserved by
    /// [`RawCursorVec::new`](crate::RawCursorVec::new) and
    /// [`CursorVec::new`](crate::CursorVec::new) when `reserve` is `true`.
    ///
    /// Default: 32.
    pub default_capacity: usize,
}

impl CursorVecConfig {
    /// Default reserved capacity, in elements.
    pub const DEFAULT_CAPACITY: usize = 32;

    /// Creates a config with default values.
    pub const fn new() -> Self {
        Self {
            default_capacity: Self::DEFAULT_CAPACITY,
        }
    }

    /// Returns a copy of this config with a different default capacity.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cursorvec::CursorVecConfig;
    ///
    /// let config = CursorVecConfig::new().with_default_capacity(8);
    /// assert_eq!(config.default_capacity, 8);
    /// ```
    pub const fn with_default_capacity(mut self, default_capacity: usize) -> Self {
        self.default_capacity = default_capacity;
        self
    }

    /// Bytes reserved by default for elements of `element_size` bytes.
    ///
    /// Returns `None` on overflow.
    pub const fn default_bytes(&self, element_size: usize) -> Option<usize> {
        self.default_capacity.checked_mul(element_size)
    }
}

impl Default for CursorVecConfig {
    fn default() -> Self {
        Self::new()
    }
}
