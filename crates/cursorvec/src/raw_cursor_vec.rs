// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::ffi::CString;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::num::NonZeroUsize;
use core::slice::ChunksExact;

use cursorvec_util::{clamp_range, close_gap, fill_with_pattern, open_gap, swap_slots};

use crate::config::CursorVecConfig;
use crate::error::CursorVecError;

/// Test behaviour for injecting allocator failures in `RawCursorVec`.
///
/// This is only available with the `test-utils` feature and allows users
/// to exercise the allocation-failure paths of their own code.
///
/// The behaviour is sticky - once set, it remains active until changed.
///
/// # Example
///
/// ```rust,ignore
/// // test-utils feature required in dev-dependencies
/// use core::num::NonZeroUsize;
/// use cursorvec::{CursorVecBehaviour, CursorVecError, RawCursorVec};
///
/// #[cfg(test)]
/// mod tests {
///     use super::*;
///
///     #[test]
///     fn test_handles_growth_failure() {
///         let size = NonZeroUsize::new(4).unwrap();
///         let mut vec = RawCursorVec::with_capacity(size, 1, true);
///         vec.push(&[1, 2, 3, 4]).unwrap();
///
///         vec.change_behaviour(CursorVecBehaviour::FailAtReallocate);
///
///         // Full container cannot grow
///         assert!(vec.push(&[5, 6, 7, 8]).is_err());
///         assert_eq!(vec.count(), 1);
///     }
/// }
/// ```
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CursorVecBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Construction-time allocation fails, leaving the container unallocated.
    FailAtAllocate,
    /// `reallocate()` fails, including the growth step of `insert()`.
    FailAtReallocate,
}

/// A type-erased resizable array with a live-length cursor.
///
/// `RawCursorVec` stores elements of a fixed byte size, chosen at
/// construction, in one contiguous zero-initialised buffer. It never
/// interprets element bytes: any pointers stored inside elements remain the
/// caller's to manage.
///
/// Sizes are tracked in bytes internally and reported in elements:
///
/// - **capacity**: slots backed by the buffer. Zero iff unallocated.
/// - **count**: slots considered live, advanced by insert, decreased by
///   remove, reset by clear. Always `count() <= capacity()`.
///
/// Inserting into a full container doubles its capacity. A container with
/// zero capacity cannot grow on its own; give it capacity with
/// [`reallocate`](Self::reallocate) first.
///
/// Views returned by [`get`](Self::get) borrow the container, so they cannot
/// outlive a reallocation.
///
/// # Example
///
/// ```rust
/// use core::num::NonZeroUsize;
/// use cursorvec::{CursorVecError, RawCursorVec};
///
/// fn example() -> Result<(), CursorVecError> {
///     let size = NonZeroUsize::new(4).unwrap();
///     let mut vec = RawCursorVec::with_capacity(size, 2, true);
///
///     vec.insert(&10u32.to_le_bytes(), 0)?;
///     vec.insert(&30u32.to_le_bytes(), 1)?;
///     vec.insert(&20u32.to_le_bytes(), 1)?;
///
///     // Third insert doubled the capacity
///     assert_eq!(vec.capacity(), 4);
///     assert_eq!(vec.count(), 3);
///     assert_eq!(vec.get(1), Some(&20u32.to_le_bytes()[..]));
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct RawCursorVec {
    // Fully initialised; `buffer.len()` is the capacity in bytes.
    buffer: Vec<u8>,
    element_size: NonZeroUsize,
    // Live length in bytes.
    cursor: usize,
    #[cfg(any(test, feature = "test-utils"))]
    behaviour: CursorVecBehaviour,
}

#[inline(always)]
fn slot(live: &[u8], element_size: usize, index: usize) -> &[u8] {
    &live[index * element_size..(index + 1) * element_size]
}

// Restores the max-heap property below `root` for the first `end` slots.
fn sift_down<F>(
    live: &mut [u8],
    element_size: usize,
    mut root: usize,
    end: usize,
    compare: &mut F,
) -> Result<(), CursorVecError>
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            return Ok(());
        }

        if child + 1 < end
            && compare(
                slot(live, element_size, child),
                slot(live, element_size, child + 1),
            ) == Ordering::Less
        {
            child += 1;
        }

        if compare(slot(live, element_size, root), slot(live, element_size, child))
            != Ordering::Less
        {
            return Ok(());
        }

        swap_slots(live, root, child, element_size)?;
        root = child;
    }
}

impl core::fmt::Debug for RawCursorVec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RawCursorVec")
            .field("element_size", &self.element_size())
            .field("count", &self.count())
            .field("capacity", &self.capacity())
            .finish_non_exhaustive()
    }
}

impl RawCursorVec {
    fn unallocated(element_size: NonZeroUsize) -> Self {
        Self {
            buffer: Vec::new(),
            element_size,
            cursor: 0,
            #[cfg(any(test, feature = "test-utils"))]
            behaviour: CursorVecBehaviour::default(),
        }
    }

    #[inline(always)]
    fn bytes_for(&self, elements: usize) -> Result<usize, CursorVecError> {
        elements
            .checked_mul(self.element_size.get())
            .ok_or(CursorVecError::Overflow)
    }

    fn allocate_zeroed(&self, bytes: usize) -> Result<Vec<u8>, CursorVecError> {
        #[cfg(any(test, feature = "test-utils"))]
        if matches!(self.behaviour, CursorVecBehaviour::FailAtAllocate) {
            return Err(CursorVecError::AllocationFailed {
                requested_bytes: bytes,
            });
        }

        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(bytes)
            .map_err(|_| CursorVecError::AllocationFailed {
                requested_bytes: bytes,
            })?;
        buffer.resize(bytes, 0);

        Ok(buffer)
    }

    // Construction degrades to an unallocated container instead of failing.
    fn reserve_on_construction(&mut self, capacity: usize) {
        let result = self
            .bytes_for(capacity)
            .and_then(|bytes| self.allocate_zeroed(bytes));

        match result {
            Ok(buffer) => self.buffer = buffer,
            Err(error) => {
                tracing::warn!(
                    element_size = self.element_size.get(),
                    capacity,
                    %error,
                    "cursor vec reservation failed, container left unallocated"
                );
            }
        }
    }

    #[inline(always)]
    fn ensure_allocated(&self) -> Result<(), CursorVecError> {
        if !self.is_allocated() {
            return Err(CursorVecError::Unallocated);
        }

        Ok(())
    }

    #[inline(always)]
    fn ensure_element(&self, data: &[u8]) -> Result<(), CursorVecError> {
        if data.len() != self.element_size.get() {
            return Err(CursorVecError::ElementSizeMismatch {
                expected: self.element_size.get(),
                actual: data.len(),
            });
        }

        Ok(())
    }

    #[inline(always)]
    fn ensure_live(&self, index: usize) -> Result<usize, CursorVecError> {
        let count = self.count();

        if index >= count {
            return Err(CursorVecError::OutOfBounds { index, count });
        }

        Ok(index * self.element_size.get())
    }

    #[cold]
    #[inline(never)]
    fn grow(&mut self) -> Result<(), CursorVecError> {
        let capacity = self.capacity();
        let new_capacity = capacity.checked_mul(2).ok_or(CursorVecError::Overflow)?;

        tracing::debug!(
            element_size = self.element_size.get(),
            from = capacity,
            to = new_capacity,
            "growing cursor vec"
        );

        self.reallocate(new_capacity)
    }

    /// Creates a container for elements of `element_size` bytes.
    ///
    /// When `reserve` is `true`, reserves
    /// [`CursorVecConfig::DEFAULT_CAPACITY`] zeroed slots; otherwise the
    /// container starts unallocated. If the allocation fails the container
    /// is returned unallocated.
    ///
    /// # Example
    ///
    /// ```rust
    /// use core::num::NonZeroUsize;
    /// use cursorvec::RawCursorVec;
    ///
    /// let size = NonZeroUsize::new(8).unwrap();
    ///
    /// let reserved = RawCursorVec::new(size, true);
    /// assert_eq!(reserved.capacity(), 32);
    /// assert_eq!(reserved.byte_size(), 256);
    ///
    /// let empty = RawCursorVec::new(size, false);
    /// assert!(!empty.is_allocated());
    /// ```
    pub fn new(element_size: NonZeroUsize, reserve: bool) -> Self {
        Self::with_config(element_size, &CursorVecConfig::default(), reserve)
    }

    /// Creates a container whose default capacity comes from `config`.
    pub fn with_config(
        element_size: NonZeroUsize,
        config: &CursorVecConfig,
        reserve: bool,
    ) -> Self {
        Self::with_capacity(element_size, config.default_capacity, reserve)
    }

    /// Creates a container with room for `capacity` elements when `reserve`
    /// is `true`.
    ///
    /// A zero `capacity` leaves the container unallocated.
    pub fn with_capacity(element_size: NonZeroUsize, capacity: usize, reserve: bool) -> Self {
        let mut vec = Self::unallocated(element_size);

        if reserve {
            vec.reserve_on_construction(capacity);
        }

        vec
    }

    /// Creates a container with an injected test behaviour already active.
    ///
    /// Lets tests observe construction-time failures such as
    /// [`CursorVecBehaviour::FailAtAllocate`].
    #[cfg(any(test, feature = "test-utils"))]
    pub fn with_behaviour(
        element_size: NonZeroUsize,
        capacity: usize,
        reserve: bool,
        behaviour: CursorVecBehaviour,
    ) -> Self {
        let mut vec = Self::unallocated(element_size);
        vec.behaviour = behaviour;

        if reserve {
            vec.reserve_on_construction(capacity);
        }

        vec
    }

    /// Changes the test behaviour for this container.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn change_behaviour(&mut self, behaviour: CursorVecBehaviour) {
        self.behaviour = behaviour;
    }

    /// Returns `true` if the container holds a buffer.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        !self.buffer.is_empty()
    }

    /// Returns the allocated size in bytes.
    #[inline]
    pub fn byte_size(&self) -> usize {
        self.buffer.len()
    }

    /// Returns the number of element slots backed by the buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.len() / self.element_size.get()
    }

    /// Returns the declared element size in bytes.
    #[inline]
    pub fn element_size(&self) -> usize {
        self.element_size.get()
    }

    /// Returns the capacity in elements.
    ///
    /// This is **not** the live element count; use [`count`](Self::count)
    /// for that.
    #[inline]
    pub fn length(&self) -> usize {
        self.capacity()
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn count(&self) -> usize {
        self.cursor / self.element_size.get()
    }

    /// Returns `true` if no elements are live.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    /// Position of the first element. Always `0`.
    #[inline]
    pub const fn first(&self) -> usize {
        0
    }

    /// Position one past the last live element, i.e. [`count`](Self::count).
    #[inline]
    pub fn last(&self) -> usize {
        self.count()
    }

    /// Resizes the buffer to exactly `capacity` elements.
    ///
    /// Growing zero-fills the new slots. Shrinking below the live count
    /// discards the trailing elements and pulls the cursor back to the new
    /// capacity. `reallocate(0)` releases the buffer. Works on unallocated
    /// containers, which is how a container created with `reserve = false`
    /// obtains storage.
    ///
    /// # Errors
    ///
    /// - [`CursorVecError::Overflow`] if the byte size overflows `usize`.
    /// - [`CursorVecError::AllocationFailed`] if the allocator refuses; the
    ///   container is left unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use core::num::NonZeroUsize;
    /// use cursorvec::{CursorVecError, RawCursorVec};
    ///
    /// fn example() -> Result<(), CursorVecError> {
    ///     let size = NonZeroUsize::new(2).unwrap();
    ///     let mut vec = RawCursorVec::new(size, false);
    ///
    ///     vec.reallocate(4)?;
    ///     vec.push(&[1, 2])?;
    ///
    ///     assert!(vec.is_allocated());
    ///     assert_eq!(vec.capacity(), 4);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn reallocate(&mut self, capacity: usize) -> Result<(), CursorVecError> {
        let new_bytes = self.bytes_for(capacity)?;

        #[cfg(any(test, feature = "test-utils"))]
        if matches!(self.behaviour, CursorVecBehaviour::FailAtReallocate) {
            return Err(CursorVecError::AllocationFailed {
                requested_bytes: new_bytes,
            });
        }

        let old_bytes = self.buffer.len();

        if new_bytes > old_bytes {
            if let Err(error) = self.buffer.try_reserve_exact(new_bytes - old_bytes) {
                tracing::warn!(
                    element_size = self.element_size.get(),
                    requested_bytes = new_bytes,
                    %error,
                    "cursor vec reallocation failed"
                );

                return Err(CursorVecError::AllocationFailed {
                    requested_bytes: new_bytes,
                });
            }

            self.buffer.resize(new_bytes, 0);
        } else if new_bytes == 0 {
            self.buffer = Vec::new();
        } else {
            self.buffer.truncate(new_bytes);
            self.buffer.shrink_to_fit();
        }

        self.cursor = self.cursor.min(new_bytes);

        tracing::debug!(
            element_size = self.element_size.get(),
            from_bytes = old_bytes,
            to_bytes = new_bytes,
            "cursor vec reallocated"
        );

        Ok(())
    }

    /// Sets the live count to `position` elements.
    ///
    /// Any position up to the capacity is accepted. Slots exposed by moving
    /// forward keep whatever bytes they held (zero for never-written slots).
    ///
    /// # Errors
    ///
    /// - [`CursorVecError::Unallocated`] if the container holds no buffer.
    /// - [`CursorVecError::CursorOutOfRange`] if `position > capacity()`;
    ///   the cursor is left unchanged.
    pub fn move_cursor(&mut self, position: usize) -> Result<(), CursorVecError> {
        self.ensure_allocated()?;

        let bytes = position
            .checked_mul(self.element_size.get())
            .filter(|bytes| *bytes <= self.buffer.len())
            .ok_or(CursorVecError::CursorOutOfRange {
                position,
                capacity: self.capacity(),
            })?;

        self.cursor = bytes;
        Ok(())
    }

    /// Writes `fill` into every slot of the full capacity and resets the
    /// cursor to zero.
    ///
    /// # Errors
    ///
    /// - [`CursorVecError::Unallocated`] if the container holds no buffer.
    /// - [`CursorVecError::ElementSizeMismatch`] if `fill` is not one element
    ///   long.
    ///
    /// # Example
    ///
    /// ```rust
    /// use core::num::NonZeroUsize;
    /// use cursorvec::{CursorVecError, RawCursorVec};
    ///
    /// fn example() -> Result<(), CursorVecError> {
    ///     let size = NonZeroUsize::new(2).unwrap();
    ///     let mut vec = RawCursorVec::with_capacity(size, 3, true);
    ///     vec.push(&[1, 2])?;
    ///
    ///     vec.clear(&[0xAA, 0xBB])?;
    ///
    ///     assert_eq!(vec.count(), 0);
    ///     assert_eq!(vec.as_capacity_bytes(), &[0xAA, 0xBB, 0xAA, 0xBB, 0xAA, 0xBB]);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn clear(&mut self, fill: &[u8]) -> Result<(), CursorVecError> {
        self.ensure_allocated()?;
        self.ensure_element(fill)?;

        fill_with_pattern(&mut self.buffer, fill)?;
        self.cursor = 0;

        Ok(())
    }

    /// Inserts a copy of `data` at element position `index`, shifting later
    /// elements one slot to the right.
    ///
    /// `index` is validated against the live count before any growth takes
    /// place; `index == count()` appends. A full container doubles its
    /// capacity first.
    ///
    /// # Errors
    ///
    /// - [`CursorVecError::Unallocated`] if the container holds no buffer.
    /// - [`CursorVecError::ElementSizeMismatch`] if `data` is not one element
    ///   long.
    /// - [`CursorVecError::OutOfBounds`] if `index > count()`.
    /// - [`CursorVecError::AllocationFailed`] or [`CursorVecError::Overflow`]
    ///   if growth fails.
    ///
    /// In every error case the container is unchanged.
    pub fn insert(&mut self, data: &[u8], index: usize) -> Result<(), CursorVecError> {
        self.ensure_allocated()?;
        self.ensure_element(data)?;

        let count = self.count();
        if index > count {
            return Err(CursorVecError::OutOfBounds { index, count });
        }

        if self.cursor == self.buffer.len() {
            self.grow()?;
        }

        let element_size = self.element_size.get();
        let at = index * element_size;

        open_gap(&mut self.buffer, at, self.cursor, element_size)?;
        self.buffer[at..at + element_size].copy_from_slice(data);
        self.cursor += element_size;

        Ok(())
    }

    /// Appends a copy of `data` after the last live element.
    ///
    /// Equivalent to `insert(data, count())`.
    pub fn push(&mut self, data: &[u8]) -> Result<(), CursorVecError> {
        self.insert(data, self.count())
    }

    /// Overwrites the live element at `index` with `data`.
    ///
    /// # Errors
    ///
    /// - [`CursorVecError::Unallocated`] if the container holds no buffer.
    /// - [`CursorVecError::ElementSizeMismatch`] if `data` is not one element
    ///   long.
    /// - [`CursorVecError::OutOfBounds`] if `index >= count()`.
    pub fn replace(&mut self, data: &[u8], index: usize) -> Result<(), CursorVecError> {
        self.ensure_allocated()?;
        self.ensure_element(data)?;

        let at = self.ensure_live(index)?;
        self.buffer[at..at + data.len()].copy_from_slice(data);

        Ok(())
    }

    /// Copies `data` into the buffer starting at the live element `index`.
    ///
    /// Unlike [`replace`](Self::replace), `data` may be any length: the write
    /// can span several slots and run past the live range, up to the end of
    /// the allocation. The cursor does not move.
    ///
    /// # Errors
    ///
    /// - [`CursorVecError::Unallocated`] if the container holds no buffer.
    /// - [`CursorVecError::OutOfBounds`] if `index >= count()`.
    /// - [`CursorVecError::ByteRange`] if the write would run past the
    ///   allocation; nothing is written.
    ///
    /// # Example
    ///
    /// ```rust
    /// use core::num::NonZeroUsize;
    /// use cursorvec::{CursorVecError, RawCursorVec};
    ///
    /// fn example() -> Result<(), CursorVecError> {
    ///     let size = NonZeroUsize::new(2).unwrap();
    ///     let mut vec = RawCursorVec::with_capacity(size, 4, true);
    ///     vec.push(&[0, 0])?;
    ///
    ///     // Spills into slots past the live range
    ///     vec.replace_bytes(&[1, 2, 3, 4, 5], 0)?;
    ///
    ///     assert_eq!(vec.count(), 1);
    ///     assert_eq!(&vec.as_capacity_bytes()[..6], &[1, 2, 3, 4, 5, 0]);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn replace_bytes(&mut self, data: &[u8], index: usize) -> Result<(), CursorVecError> {
        self.ensure_allocated()?;

        let at = self.ensure_live(index)?;
        let len = self.buffer.len();
        let end = at
            .checked_add(data.len())
            .filter(|end| *end <= len)
            .ok_or(cursorvec_util::ByteRangeError::OutOfBounds {
                start: at,
                end: at.saturating_add(data.len()),
                len,
            })?;

        self.buffer[at..end].copy_from_slice(data);

        Ok(())
    }

    /// Removes the live element at `index`, shifting later elements one slot
    /// to the left.
    ///
    /// # Errors
    ///
    /// - [`CursorVecError::Unallocated`] if the container holds no buffer.
    /// - [`CursorVecError::OutOfBounds`] if `index >= count()`; removing from
    ///   an empty container always fails.
    pub fn remove(&mut self, index: usize) -> Result<(), CursorVecError> {
        self.ensure_allocated()?;

        let at = self.ensure_live(index)?;
        let element_size = self.element_size.get();

        close_gap(&mut self.buffer, at, self.cursor, element_size)?;
        self.cursor -= element_size;

        Ok(())
    }

    /// Returns the bytes of the live element at `index`.
    ///
    /// Returns `None` if `index >= count()` or the container is unallocated.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        let at = self.ensure_live(index).ok()?;
        self.buffer.get(at..at + self.element_size.get())
    }

    /// Returns the bytes of the live element at `index` for in-place writes.
    ///
    /// Returns `None` if `index >= count()` or the container is unallocated.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut [u8]> {
        let at = self.ensure_live(index).ok()?;
        let element_size = self.element_size.get();
        self.buffer.get_mut(at..at + element_size)
    }

    /// Sorts the live elements with `compare`.
    ///
    /// The sort is not stable and allocates nothing. `compare` sees each
    /// element as a slice of exactly [`element_size`](Self::element_size)
    /// bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CursorVecError::Unallocated`] if the container holds no
    /// buffer.
    ///
    /// # Example
    ///
    /// ```rust
    /// use core::num::NonZeroUsize;
    /// use cursorvec::{CursorVecError, RawCursorVec};
    ///
    /// fn example() -> Result<(), CursorVecError> {
    ///     let size = NonZeroUsize::new(1).unwrap();
    ///     let mut vec = RawCursorVec::with_capacity(size, 4, true);
    ///     for b in [3u8, 1, 2] {
    ///         vec.push(&[b])?;
    ///     }
    ///
    ///     vec.sort_by(|a, b| a.cmp(b))?;
    ///
    ///     assert_eq!(vec.as_bytes(), &[1, 2, 3]);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn sort_by<F>(&mut self, mut compare: F) -> Result<(), CursorVecError>
    where
        F: FnMut(&[u8], &[u8]) -> Ordering,
    {
        self.ensure_allocated()?;

        let element_size = self.element_size.get();
        let count = self.count();
        let live = &mut self.buffer[..self.cursor];

        // In-place heapsort: no scratch allocation.
        for root in (0..count / 2).rev() {
            sift_down(live, element_size, root, count, &mut compare)?;
        }

        for end in (1..count).rev() {
            swap_slots(live, 0, end, element_size)?;
            sift_down(live, element_size, 0, end, &mut compare)?;
        }

        Ok(())
    }

    /// Returns the live range as raw bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.cursor]
    }

    /// Returns the whole allocation as raw bytes, live or not.
    #[inline]
    pub fn as_capacity_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Iterates over the live elements as byte slices.
    #[inline]
    pub fn iter(&self) -> ChunksExact<'_, u8> {
        self.as_bytes().chunks_exact(self.element_size.get())
    }

    /// Copies the raw bytes `first..last` out of the buffer.
    ///
    /// Offsets are in bytes regardless of element size and are clamped to
    /// the allocation, so an out-of-range request yields fewer (possibly
    /// zero) bytes. The copied length is the returned vector's length.
    ///
    /// # Example
    ///
    /// ```rust
    /// use core::num::NonZeroUsize;
    /// use cursorvec::{CursorVecError, RawCursorVec};
    ///
    /// fn example() -> Result<(), CursorVecError> {
    ///     let size = NonZeroUsize::new(1).unwrap();
    ///     let mut vec = RawCursorVec::with_capacity(size, 4, true);
    ///     for b in *b"rust" {
    ///         vec.push(&[b])?;
    ///     }
    ///
    ///     assert_eq!(vec.make_string(1, 3), b"us");
    ///     assert_eq!(vec.make_string(2, 100), b"st");
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn make_string(&self, first: usize, last: usize) -> Vec<u8> {
        let range = clamp_range(first, last, self.buffer.len());
        self.buffer[range].to_vec()
    }

    /// Copies the raw bytes `first..last` into a NUL-terminated string.
    ///
    /// Offsets are clamped like [`make_string`](Self::make_string). The
    /// string ends at the first NUL byte inside the range, as a C reader
    /// would see it.
    pub fn make_c_string(&self, first: usize, last: usize) -> CString {
        let mut bytes = self.make_string(first, last);

        if let Some(nul) = bytes.iter().position(|b| *b == 0) {
            bytes.truncate(nul);
        }

        // Cannot fail: `bytes` holds no NUL after the truncation.
        CString::new(bytes).unwrap_or_default()
    }

    /// Frees the buffer, leaving the container unallocated.
    ///
    /// Element bytes are dropped as-is; anything they point to is not
    /// touched.
    ///
    /// # Errors
    ///
    /// Returns [`CursorVecError::Unallocated`] if there was nothing to free.
    pub fn release(&mut self) -> Result<(), CursorVecError> {
        self.ensure_allocated()?;

        tracing::trace!(
            element_size = self.element_size.get(),
            bytes = self.buffer.len(),
            "cursor vec released"
        );

        self.buffer = Vec::new();
        self.cursor = 0;

        Ok(())
    }

    /// Returns a raw pointer to the start of the buffer.
    ///
    /// # Safety
    ///
    /// This method is only available with the `unsafe` feature.
    /// The pointer is dangling when the container is unallocated and is
    /// invalidated by any reallocation.
    #[cfg(any(test, feature = "unsafe"))]
    #[inline(always)]
    pub fn as_ptr(&self) -> *const u8 {
        self.buffer.as_ptr()
    }

    /// Returns a raw mutable pointer to the start of the buffer.
    ///
    /// # Safety
    ///
    /// This method is only available with the `unsafe` feature.
    /// The caller must keep writes within [`byte_size`](Self::byte_size)
    /// bytes; the pointer is invalidated by any reallocation.
    #[cfg(any(test, feature = "unsafe"))]
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.buffer.as_mut_ptr()
    }
}
