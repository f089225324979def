// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;
use core::iter::Rev;
use core::marker::PhantomData;
use core::mem::{self, ManuallyDrop};
use core::ops::{Deref, DerefMut};
use core::ptr;
use core::slice;

use palisade_alloc::{AllocError, Allocator, DefaultAllocator};

use crate::error::DynamicArrayError;
use crate::into_iter::IntoIter;
use crate::partial_block::PartialBlock;

/// Factor applied to a non-zero capacity when a push finds the array full.
pub const GROWTH_FACTOR: usize = 2;

/// A contiguous growable array whose storage comes from an [`Allocator`].
///
/// Slots `[0, len)` hold live values, slots `[len, capacity)` are
/// uninitialized. A zero capacity always means no block is held.
///
/// # Example
///
/// ```rust
/// use palisade_vec::{DynamicArray, DynamicArrayError};
///
/// fn example() -> Result<(), DynamicArrayError> {
///     let mut array = DynamicArray::from_elem(3, 7u8)?;
///     array.push_back(8)?;
///
///     assert_eq!(array.len(), 4);
///     assert_eq!(array.capacity(), 6);
///     assert_eq!(array.as_slice(), [7, 7, 7, 8]);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct DynamicArray<T, A: Allocator = DefaultAllocator> {
    ptr: *mut T,
    len: usize,
    capacity: usize,
    alloc: A,
    _marker: PhantomData<T>,
}

// SAFETY: the array uniquely owns its block, like `Vec<T>`.
unsafe impl<T: Send, A: Allocator + Send> Send for DynamicArray<T, A> {}
// SAFETY: shared access only hands out `&T`.
unsafe impl<T: Sync, A: Allocator + Sync> Sync for DynamicArray<T, A> {}

impl<T> DynamicArray<T> {
    /// Creates an empty array. Nothing is allocated.
    pub fn new() -> Self {
        Self::new_in(DefaultAllocator)
    }

    /// Creates an empty array with room for exactly `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Result<Self, DynamicArrayError> {
        Self::with_capacity_in(capacity, DefaultAllocator)
    }

    /// Creates an array holding `count` clones of `value`.
    ///
    /// Length and capacity are both exactly `count`.
    pub fn from_elem(count: usize, value: T) -> Result<Self, DynamicArrayError>
    where
        T: Clone,
    {
        Self::from_elem_in(count, value, DefaultAllocator)
    }

    /// Creates an array holding clones of every element of `values`.
    pub fn try_from_slice(values: &[T]) -> Result<Self, DynamicArrayError>
    where
        T: Clone,
    {
        Self::try_from_slice_in(values, DefaultAllocator)
    }
}

impl<T, A: Allocator> DynamicArray<T, A> {
    /// Creates an empty array using `alloc`. Nothing is allocated.
    pub fn new_in(alloc: A) -> Self {
        Self {
            ptr: ptr::null_mut(),
            len: 0,
            capacity: 0,
            alloc,
            _marker: PhantomData,
        }
    }

    /// Creates an empty array with room for exactly `capacity` elements.
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Result<Self, DynamicArrayError> {
        let ptr = alloc.allocate::<T>(capacity)?;

        Ok(Self {
            ptr,
            len: 0,
            capacity,
            alloc,
            _marker: PhantomData,
        })
    }

    /// Creates an array holding `count` clones of `value`, using `alloc`.
    ///
    /// If a clone panics, the clones made so far are dropped in reverse order
    /// and the block is released before the panic continues.
    pub fn from_elem_in(count: usize, value: T, alloc: A) -> Result<Self, DynamicArrayError>
    where
        T: Clone,
    {
        let (ptr, len, capacity) = {
            let mut block = PartialBlock::new(&alloc, count)?;
            block.fill(count, value);
            block.finish()
        };

        Ok(Self {
            ptr,
            len,
            capacity,
            alloc,
            _marker: PhantomData,
        })
    }

    /// Creates an array holding clones of every element of `values`, using `alloc`.
    pub fn try_from_slice_in(values: &[T], alloc: A) -> Result<Self, DynamicArrayError>
    where
        T: Clone,
    {
        let (ptr, len, capacity) = {
            let mut block = PartialBlock::new(&alloc, values.len())?;
            for value in values {
                block.push(value.clone());
            }
            block.finish()
        };

        Ok(Self {
            ptr,
            len,
            capacity,
            alloc,
            _marker: PhantomData,
        })
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots backed by the current block.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the allocator backing this array.
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Returns the live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        if self.ptr.is_null() {
            return &[];
        }

        // SAFETY: slots [0, len) are live and the block is non-null.
        unsafe { slice::from_raw_parts(self.ptr, self.len) }
    }

    /// Returns the live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        if self.ptr.is_null() {
            return &mut [];
        }

        // SAFETY: slots [0, len) are live and uniquely borrowed through `self`.
        unsafe { slice::from_raw_parts_mut(self.ptr, self.len) }
    }

    fn out_of_range(&self, index: usize) -> DynamicArrayError {
        DynamicArrayError::OutOfRange {
            index,
            len: self.len,
        }
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`DynamicArrayError::OutOfRange`] unless `index < len()`.
    pub fn at(&self, index: usize) -> Result<&T, DynamicArrayError> {
        let error = self.out_of_range(index);
        self.as_slice().get(index).ok_or(error)
    }

    /// Returns the element at `index` mutably.
    ///
    /// # Errors
    ///
    /// [`DynamicArrayError::OutOfRange`] unless `index < len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, DynamicArrayError> {
        let error = self.out_of_range(index);
        self.as_mut_slice().get_mut(index).ok_or(error)
    }

    /// Returns the first element, or `OutOfRange` when empty.
    pub fn front(&self) -> Result<&T, DynamicArrayError> {
        self.at(0)
    }

    /// Returns the first element mutably, or `OutOfRange` when empty.
    pub fn front_mut(&mut self) -> Result<&mut T, DynamicArrayError> {
        self.at_mut(0)
    }

    /// Returns the last element, or `OutOfRange` when empty.
    pub fn back(&self) -> Result<&T, DynamicArrayError> {
        match self.len {
            0 => Err(self.out_of_range(0)),
            len => self.at(len - 1),
        }
    }

    /// Returns the last element mutably, or `OutOfRange` when empty.
    pub fn back_mut(&mut self) -> Result<&mut T, DynamicArrayError> {
        match self.len {
            0 => Err(self.out_of_range(0)),
            len => self.at_mut(len - 1),
        }
    }

    /// Ensures room for at least `new_capacity` elements.
    ///
    /// Does nothing if `new_capacity <= capacity()`. Otherwise allocates a block
    /// of exactly `new_capacity` slots, moves every element into it in index
    /// order and releases the old block. Never reduces capacity.
    ///
    /// # Errors
    ///
    /// [`DynamicArrayError::Alloc`] if the new block cannot be obtained. The
    /// array is left untouched in that case.
    pub fn reserve(&mut self, new_capacity: usize) -> Result<(), DynamicArrayError> {
        if new_capacity <= self.capacity {
            return Ok(());
        }

        self.relocate(new_capacity)
    }

    /// Reallocates so that `capacity() == len()`.
    ///
    /// Element order and values are preserved. Shrinking an empty array
    /// releases its block entirely.
    pub fn shrink_to_fit(&mut self) -> Result<(), DynamicArrayError> {
        if self.capacity == self.len {
            return Ok(());
        }

        self.relocate(self.len)
    }

    /// Moves the live elements into a block of exactly `new_capacity` slots.
    ///
    /// Moves cannot fail, so once the allocation succeeds the relocation
    /// completes. `new_capacity >= len` is required.
    fn relocate(&mut self, new_capacity: usize) -> Result<(), DynamicArrayError> {
        debug_assert!(new_capacity >= self.len);

        let new_ptr = self.alloc.allocate::<T>(new_capacity)?;

        for index in 0..self.len {
            // SAFETY: index < len <= new_capacity. Each live value is read
            // exactly once and the old slot is never touched again.
            unsafe {
                self.alloc
                    .construct(new_ptr.add(index), ptr::read(self.ptr.add(index)));
            }
        }

        log::trace!(
            "DynamicArray relocated {} elements: capacity {} -> {}",
            self.len,
            self.capacity,
            new_capacity
        );

        // SAFETY: every live value was moved out; only storage is released.
        unsafe { self.alloc.deallocate(self.ptr, self.capacity) };

        self.ptr = new_ptr;
        self.capacity = new_capacity;

        Ok(())
    }

    /// Doubles the capacity, or sets it to 1 when it is zero.
    #[cold]
    #[inline(never)]
    fn grow(&mut self) -> Result<(), DynamicArrayError> {
        let new_capacity = match self.capacity {
            0 => 1,
            capacity => capacity
                .checked_mul(GROWTH_FACTOR)
                .ok_or(AllocError::CapacityOverflow)?,
        };

        self.reserve(new_capacity)
    }

    /// Swaps the current block for one built elsewhere, dropping the old content.
    fn replace_block(&mut self, ptr: *mut T, len: usize, capacity: usize) {
        self.clear();

        // SAFETY: the old block no longer holds live values.
        unsafe { self.alloc.deallocate(self.ptr, self.capacity) };

        self.ptr = ptr;
        self.len = len;
        self.capacity = capacity;
    }

    /// Constructs `count` more elements from `value` into spare capacity.
    fn fill_spare(&mut self, count: usize, value: T)
    where
        T: Clone,
    {
        debug_assert!(self.len + count <= self.capacity);

        if count == 0 {
            return;
        }

        for _ in 1..count {
            // SAFETY: len < capacity, slot is uninitialized. `len` is bumped
            // right after so a panicking clone leaves the array consistent.
            unsafe { self.alloc.construct(self.ptr.add(self.len), value.clone()) };
            self.len += 1;
        }

        // SAFETY: as above.
        unsafe { self.alloc.construct(self.ptr.add(self.len), value) };
        self.len += 1;
    }

    /// Replaces the content with `count` clones of `value`.
    ///
    /// If `count > capacity()` a block of exactly `count` slots is built first
    /// and swapped in only once complete. Otherwise the current block is
    /// reused and capacity is unchanged.
    pub fn assign(&mut self, count: usize, value: T) -> Result<(), DynamicArrayError>
    where
        T: Clone,
    {
        if count > self.capacity {
            let (ptr, len, capacity) = {
                let mut block = PartialBlock::new(&self.alloc, count)?;
                block.fill(count, value);
                block.finish()
            };

            self.replace_block(ptr, len, capacity);
            return Ok(());
        }

        self.clear();
        self.fill_spare(count, value);

        Ok(())
    }

    /// Rebuilds the storage with exactly `count` clones of `value`.
    ///
    /// Unlike [`assign`](Self::assign), both length and capacity become
    /// exactly `count`, whatever the previous content was. The new block is
    /// complete before the old one is released.
    pub fn resize(&mut self, count: usize, value: T) -> Result<(), DynamicArrayError>
    where
        T: Clone,
    {
        let (ptr, len, capacity) = {
            let mut block = PartialBlock::new(&self.alloc, count)?;
            block.fill(count, value);
            block.finish()
        };

        log::trace!(
            "DynamicArray rebuilt: capacity {} -> {}",
            self.capacity,
            capacity
        );

        self.replace_block(ptr, len, capacity);

        Ok(())
    }

    /// Appends `value`, growing the block when full.
    ///
    /// # Errors
    ///
    /// [`DynamicArrayError::Alloc`] if growth fails; the array is unchanged
    /// and `value` is dropped.
    pub fn push_back(&mut self, value: T) -> Result<(), DynamicArrayError> {
        if self.len == self.capacity {
            self.grow()?;
        }

        // SAFETY: len < capacity after growth, slot is uninitialized.
        unsafe { self.alloc.construct(self.ptr.add(self.len), value) };
        self.len += 1;

        Ok(())
    }

    /// Appends the value produced by `make` directly into the next slot.
    ///
    /// Growth happens before `make` runs, so `make` is not called if the block
    /// cannot be grown. Returns a reference to the new element.
    pub fn emplace_back<F>(&mut self, make: F) -> Result<&mut T, DynamicArrayError>
    where
        F: FnOnce() -> T,
    {
        if self.len == self.capacity {
            self.grow()?;
        }

        // SAFETY: len < capacity after growth.
        let slot = unsafe { self.ptr.add(self.len) };

        // SAFETY: slot is uninitialized and inside the block.
        unsafe { self.alloc.construct(slot, make()) };
        self.len += 1;

        // SAFETY: slot now holds a live value owned by `self`.
        Ok(unsafe { &mut *slot })
    }

    /// Removes and returns the last element. Capacity is never reduced.
    ///
    /// # Errors
    ///
    /// [`DynamicArrayError::OutOfRange`] when the array is empty.
    pub fn pop_back(&mut self) -> Result<T, DynamicArrayError> {
        if self.len == 0 {
            return Err(self.out_of_range(0));
        }

        self.len -= 1;

        // SAFETY: slot `len` was live and is now outside the live range.
        Ok(unsafe { ptr::read(self.ptr.add(self.len)) })
    }

    /// Drops every element past `len`, keeping capacity.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }

        let old_len = self.len;
        self.len = len;

        for index in len..old_len {
            // SAFETY: slots [len, old_len) were live and are no longer reachable.
            unsafe { self.alloc.destroy(self.ptr.add(index)) };
        }
    }

    /// Drops every element, keeping capacity.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Forward traversal over the live elements.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Forward traversal over the live elements, mutably.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Reverse traversal over the live elements, last to first.
    pub fn iter_rev(&self) -> Rev<slice::Iter<'_, T>> {
        self.iter().rev()
    }

    /// Exchanges the content of two arrays, allocators included.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Moves the content out, leaving `self` empty with no block.
    pub fn take(&mut self) -> Self
    where
        A: Clone,
    {
        let empty = Self::new_in(self.alloc.clone());
        mem::replace(self, empty)
    }

    /// Deep copy into a fresh block of the same capacity.
    ///
    /// # Errors
    ///
    /// [`DynamicArrayError::Alloc`] if the block cannot be obtained.
    pub fn try_clone(&self) -> Result<Self, DynamicArrayError>
    where
        T: Clone,
        A: Clone,
    {
        let alloc = self.alloc.clone();

        let (ptr, len, capacity) = {
            let mut block = PartialBlock::new(&alloc, self.capacity)?;
            for value in self.iter() {
                block.push(value.clone());
            }
            block.finish()
        };

        Ok(Self {
            ptr,
            len,
            capacity,
            alloc,
            _marker: PhantomData,
        })
    }
}

impl<T, A: Allocator> Drop for DynamicArray<T, A> {
    fn drop(&mut self) {
        self.clear();

        // SAFETY: no live values remain; block came from `self.alloc`.
        unsafe { self.alloc.deallocate(self.ptr, self.capacity) };
    }
}

impl<T: Clone, A: Allocator + Clone> Clone for DynamicArray<T, A> {
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(copy) => copy,
            Err(error) => panic!("DynamicArray::clone failed: {error}"),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T, A: Allocator + Default> Default for DynamicArray<T, A> {
    fn default() -> Self {
        Self::new_in(A::default())
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for DynamicArray<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, A, B> PartialEq<DynamicArray<T, B>> for DynamicArray<T, A>
where
    T: PartialEq,
    A: Allocator,
    B: Allocator,
{
    fn eq(&self, other: &DynamicArray<T, B>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, A: Allocator> Eq for DynamicArray<T, A> {}

impl<T: PartialEq, A: Allocator> PartialEq<[T]> for DynamicArray<T, A> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, A: Allocator, const N: usize> PartialEq<[T; N]> for DynamicArray<T, A> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, A: Allocator> Deref for DynamicArray<T, A> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T, A: Allocator> DerefMut for DynamicArray<T, A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, A: Allocator> AsRef<[T]> for DynamicArray<T, A> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: Allocator> AsMut<[T]> for DynamicArray<T, A> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, A: Allocator> Extend<T> for DynamicArray<T, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let needed = self.len.saturating_add(lower);

        if needed > self.capacity {
            let target = needed.max(self.capacity.saturating_mul(GROWTH_FACTOR));
            if let Err(error) = self.reserve(target) {
                panic!("DynamicArray::extend failed: {error}");
            }
        }

        for value in iter {
            if let Err(error) = self.push_back(value) {
                panic!("DynamicArray::extend failed: {error}");
            }
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T, A: Allocator> IntoIterator for DynamicArray<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;

    fn into_iter(self) -> Self::IntoIter {
        let array = ManuallyDrop::new(self);

        // SAFETY: `array` is never dropped, so the allocator is read out once.
        let alloc = unsafe { ptr::read(&array.alloc) };

        IntoIter::new(array.ptr, array.len, array.capacity, alloc)
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a DynamicArray<T, A> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a mut DynamicArray<T, A> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
