// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::marker::PhantomData;
use core::mem::size_of;
use core::num::NonZeroUsize;

use crate::config::CursorVecConfig;
use crate::element::{Element, element_bytes, read_element};
use crate::error::CursorVecError;
use crate::raw_cursor_vec::RawCursorVec;

#[cfg(any(test, feature = "test-utils"))]
use crate::raw_cursor_vec::CursorVecBehaviour;

/// Typed view over a [`RawCursorVec`] holding `T` values.
///
/// The element size is `size_of::<T>()`; every operation keeps the raw
/// container's contract (doubling growth, explicit cursor, no growth from
/// zero capacity) and converts values to and from their bytes.
///
/// Values are returned by copy: `T: Element` is plain bytes.
///
/// # Example
///
/// ```rust
/// use cursorvec::{CursorVec, CursorVecError};
///
/// fn example() -> Result<(), CursorVecError> {
///     let mut vec = CursorVec::<u32>::with_capacity(4, true);
///
///     for value in [10, 20, 30, 40] {
///         vec.push(value)?;
///     }
///     vec.insert(50, 4)?;
///
///     assert_eq!(vec.capacity(), 8);
///     assert_eq!(vec.remove(1)?, 20);
///     assert_eq!(vec.to_vec(), vec![10, 30, 40, 50]);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct CursorVec<T: Element> {
    raw: RawCursorVec,
    _marker: PhantomData<T>,
}

impl<T: Element> core::fmt::Debug for CursorVec<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CursorVec")
            .field("element_size", &self.element_size())
            .field("count", &self.count())
            .field("capacity", &self.capacity())
            .finish_non_exhaustive()
    }
}

impl<T: Element> CursorVec<T> {
    const ELEMENT_SIZE: NonZeroUsize = match NonZeroUsize::new(size_of::<T>()) {
        Some(size) => size,
        None => panic!("zero-sized types cannot be stored in a CursorVec"),
    };

    fn from_raw(raw: RawCursorVec) -> Self {
        Self {
            raw,
            _marker: PhantomData,
        }
    }

    /// Creates a container, reserving
    /// [`CursorVecConfig::DEFAULT_CAPACITY`] slots when `reserve` is `true`.
    pub fn new(reserve: bool) -> Self {
        Self::from_raw(RawCursorVec::new(Self::ELEMENT_SIZE, reserve))
    }

    /// Creates a container whose default capacity comes from `config`.
    pub fn with_config(config: &CursorVecConfig, reserve: bool) -> Self {
        Self::from_raw(RawCursorVec::with_config(Self::ELEMENT_SIZE, config, reserve))
    }

    /// Creates a container with room for `capacity` values when `reserve` is
    /// `true`.
    pub fn with_capacity(capacity: usize, reserve: bool) -> Self {
        Self::from_raw(RawCursorVec::with_capacity(Self::ELEMENT_SIZE, capacity, reserve))
    }

    /// Creates a container with an injected test behaviour already active.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn with_behaviour(capacity: usize, reserve: bool, behaviour: CursorVecBehaviour) -> Self {
        Self::from_raw(RawCursorVec::with_behaviour(
            Self::ELEMENT_SIZE,
            capacity,
            reserve,
            behaviour,
        ))
    }

    /// Changes the test behaviour for this container.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn change_behaviour(&mut self, behaviour: CursorVecBehaviour) {
        self.raw.change_behaviour(behaviour);
    }

    /// Returns the underlying byte container.
    pub fn as_raw(&self) -> &RawCursorVec {
        &self.raw
    }

    /// Unwraps into the underlying byte container.
    pub fn into_raw(self) -> RawCursorVec {
        self.raw
    }

    /// Returns `true` if the container holds a buffer.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.raw.is_allocated()
    }

    /// Returns the allocated size in bytes.
    #[inline]
    pub fn byte_size(&self) -> usize {
        self.raw.byte_size()
    }

    /// Returns the number of slots backed by the buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Returns `size_of::<T>()`.
    #[inline]
    pub fn element_size(&self) -> usize {
        self.raw.element_size()
    }

    /// Returns the capacity in elements, not the live count.
    #[inline]
    pub fn length(&self) -> usize {
        self.raw.length()
    }

    /// Returns the number of live values.
    #[inline]
    pub fn count(&self) -> usize {
        self.raw.count()
    }

    /// Returns `true` if no values are live.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Position of the first value. Always `0`.
    #[inline]
    pub const fn first(&self) -> usize {
        0
    }

    /// Position one past the last live value.
    #[inline]
    pub fn last(&self) -> usize {
        self.raw.last()
    }

    /// See [`RawCursorVec::reallocate`].
    pub fn reallocate(&mut self, capacity: usize) -> Result<(), CursorVecError> {
        self.raw.reallocate(capacity)
    }

    /// See [`RawCursorVec::move_cursor`].
    pub fn move_cursor(&mut self, position: usize) -> Result<(), CursorVecError> {
        self.raw.move_cursor(position)
    }

    /// Fills every slot of the capacity with `value` and resets the count.
    pub fn clear(&mut self, value: T) -> Result<(), CursorVecError> {
        self.raw.clear(element_bytes(&value))
    }

    /// Inserts `value` at `index`, shifting later values right.
    pub fn insert(&mut self, value: T, index: usize) -> Result<(), CursorVecError> {
        self.raw.insert(element_bytes(&value), index)
    }

    /// Appends `value` after the last live value.
    pub fn push(&mut self, value: T) -> Result<(), CursorVecError> {
        self.raw.push(element_bytes(&value))
    }

    /// Overwrites the live value at `index`.
    pub fn replace(&mut self, value: T, index: usize) -> Result<(), CursorVecError> {
        self.raw.replace(element_bytes(&value), index)
    }

    /// Removes and returns the live value at `index`.
    pub fn remove(&mut self, index: usize) -> Result<T, CursorVecError> {
        if !self.is_allocated() {
            return Err(CursorVecError::Unallocated);
        }

        let count = self.count();
        let value = self
            .get(index)
            .ok_or(CursorVecError::OutOfBounds { index, count })?;

        self.raw.remove(index)?;

        Ok(value)
    }

    /// Returns a copy of the live value at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<T> {
        self.raw.get(index).and_then(read_element::<T>)
    }

    /// Sorts the live values with `compare`. Not stable.
    pub fn sort_by<F>(&mut self, mut compare: F) -> Result<(), CursorVecError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.raw.sort_by(|a, b| match (read_element::<T>(a), read_element::<T>(b)) {
            (Some(a), Some(b)) => compare(&a, &b),
            // Unreachable: the raw container hands out element-sized slices.
            _ => Ordering::Equal,
        })
    }

    /// Sorts the live values in ascending order. Not stable.
    pub fn sort(&mut self) -> Result<(), CursorVecError>
    where
        T: Ord,
    {
        self.sort_by(T::cmp)
    }

    /// Iterates over copies of the live values.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.raw.iter().filter_map(read_element::<T>)
    }

    /// Copies the live values into a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Frees the buffer. See [`RawCursorVec::release`].
    pub fn release(&mut self) -> Result<(), CursorVecError> {
        self.raw.release()
    }
}

impl<T: Element> Default for CursorVec<T> {
    /// Reserves [`CursorVecConfig::DEFAULT_CAPACITY`] slots.
    fn default() -> Self {
        Self::new(true)
    }
}
