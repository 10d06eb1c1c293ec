// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::CursorVecConfig;

#[test]
fn test_default_matches_new() {
    assert_eq!(CursorVecConfig::default(), CursorVecConfig::new());
    assert_eq!(CursorVecConfig::default().default_capacity, 32);
}

#[test]
fn test_with_default_capacity() {
    let config = CursorVecConfig::new().with_default_capacity(100);
    assert_eq!(config.default_capacity, 100);
}

#[test]
fn test_default_bytes() {
    let config = CursorVecConfig::new();

    assert_eq!(config.default_bytes(8), Some(256));
    assert_eq!(config.default_bytes(usize::MAX), None);
}
