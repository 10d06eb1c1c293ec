// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::num::NonZeroUsize;

mod config;
mod properties;

pub(crate) fn size(bytes: usize) -> NonZeroUsize {
    NonZeroUsize::new(bytes).expect("Failed to build element size")
}

pub(crate) fn word(value: u32) -> [u8; 4] {
    value.to_le_bytes()
}
