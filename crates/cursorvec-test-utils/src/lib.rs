// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for cursorvec crates.
//!
//! ## License
//!
//! GPL-3.0-only

mod orderings;

pub use orderings::{for_each_ordering, for_each_insertion_plan, reorder};
