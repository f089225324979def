// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::mem::ManuallyDrop;

use palisade_alloc::Allocator;

use crate::error::DynamicArrayError;

/// A freshly allocated block that is being filled front to back.
///
/// If the block is dropped before [`finish`](PartialBlock::finish), every
/// value constructed so far is destroyed in reverse order and the block is
/// released. This is what rolls back a bulk copy when an element's `Clone`
/// panics halfway.
pub(crate) struct PartialBlock<'a, T, A: Allocator> {
    ptr: *mut T,
    capacity: usize,
    initialized: usize,
    alloc: &'a A,
}

impl<'a, T, A: Allocator> PartialBlock<'a, T, A> {
    pub(crate) fn new(alloc: &'a A, capacity: usize) -> Result<Self, DynamicArrayError> {
        let ptr = alloc.allocate::<T>(capacity)?;

        Ok(Self {
            ptr,
            capacity,
            initialized: 0,
            alloc,
        })
    }

    #[inline]
    pub(crate) fn push(&mut self, value: T) {
        debug_assert!(self.initialized < self.capacity);

        // SAFETY: initialized < capacity, so the slot is inside the block and
        // has not been written yet.
        unsafe { self.alloc.construct(self.ptr.add(self.initialized), value) };
        self.initialized += 1;
    }

    /// Fills the next `count` slots with clones of `value`, moving `value`
    /// itself into the last one.
    pub(crate) fn fill(&mut self, count: usize, value: T)
    where
        T: Clone,
    {
        if count == 0 {
            return;
        }

        for _ in 1..count {
            self.push(value.clone());
        }

        self.push(value);
    }

    /// Hands the block over as `(ptr, len, capacity)` without running rollback.
    pub(crate) fn finish(self) -> (*mut T, usize, usize) {
        let block = ManuallyDrop::new(self);
        (block.ptr, block.initialized, block.capacity)
    }
}

impl<T, A: Allocator> Drop for PartialBlock<'_, T, A> {
    fn drop(&mut self) {
        for index in (0..self.initialized).rev() {
            // SAFETY: slots [0, initialized) hold live values.
            unsafe { self.alloc.destroy(self.ptr.add(index)) };
        }

        // SAFETY: block came from allocate::<T>(capacity) on the same allocator.
        unsafe { self.alloc.deallocate(self.ptr, self.capacity) };
    }
}
