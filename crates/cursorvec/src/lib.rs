// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Type-erased resizable array with an explicit live-length cursor.
//!
//! `RawCursorVec` stores fixed-size elements whose size is chosen at
//! runtime, in one contiguous zero-initialised buffer. It tracks two sizes:
//!
//! - **capacity**: element slots backed by the buffer
//! - **count**: slots considered live, advanced by `insert()`, decreased by
//!   `remove()` and set directly by `move_cursor()`
//!
//! # Core Guarantees
//!
//! - **Doubling growth**: inserting into a full container doubles its
//!   capacity. A container with zero capacity never grows on its own.
//! - **Bounded access**: every index and byte range is checked against the
//!   live count or the allocation; a failed operation leaves the container
//!   unchanged.
//! - **Opaque elements**: bytes are copied in and out, never interpreted.
//!
//! `CursorVec<T>` is a typed view for plain-bytes [`Element`] types.
//!
//! # Example: Byte Elements
//!
//! ```rust
//! use core::num::NonZeroUsize;
//! use cursorvec::{CursorVecError, RawCursorVec};
//!
//! fn example() -> Result<(), CursorVecError> {
//!     let size = NonZeroUsize::new(4).unwrap();
//!     let mut vec = RawCursorVec::new(size, true);
//!     assert_eq!(vec.capacity(), 32);
//!
//!     vec.push(&7u32.to_le_bytes())?;
//!     vec.insert(&3u32.to_le_bytes(), 0)?;
//!
//!     assert_eq!(vec.count(), 2);
//!     assert_eq!(vec.get(0), Some(&3u32.to_le_bytes()[..]));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Typed Elements
//!
//! ```rust
//! use cursorvec::{CursorVec, CursorVecError};
//!
//! fn example() -> Result<(), CursorVecError> {
//!     let mut vec = CursorVec::<i64>::with_capacity(2, true);
//!     for value in [5, -1, 3] {
//!         vec.push(value)?;
//!     }
//!
//!     vec.sort()?;
//!
//!     assert_eq!(vec.to_vec(), vec![-1, 3, 5]);
//!     assert_eq!(vec.capacity(), 4);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Features
//!
//! - `test-utils`: exposes `CursorVecBehaviour` for allocation-failure
//!   injection.
//! - `unsafe`: exposes raw buffer pointers.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod config;
mod cursor_vec;
mod element;
mod error;
mod raw_cursor_vec;
mod strings;

#[cfg(test)]
mod tests;

pub use config::CursorVecConfig;
pub use cursor_vec::CursorVec;
pub use element::Element;
pub use error::CursorVecError;
pub use raw_cursor_vec::RawCursorVec;
pub use strings::copy_string;

#[cfg(any(test, feature = "test-utils"))]
pub use raw_cursor_vec::CursorVecBehaviour;
