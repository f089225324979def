// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr;
use core::slice;

use palisade_alloc::{Allocator, DefaultAllocator};

/// Owning iterator over the elements of a [`DynamicArray`](crate::DynamicArray).
///
/// Holds the array's block until dropped; elements that were never yielded
/// are dropped with it.
pub struct IntoIter<T, A: Allocator = DefaultAllocator> {
    buf: *mut T,
    capacity: usize,
    start: usize,
    end: usize,
    alloc: A,
    _marker: PhantomData<T>,
}

// SAFETY: same ownership as the array it came from.
unsafe impl<T: Send, A: Allocator + Send> Send for IntoIter<T, A> {}
// SAFETY: shared access only hands out `&T`.
unsafe impl<T: Sync, A: Allocator + Sync> Sync for IntoIter<T, A> {}

impl<T, A: Allocator> IntoIter<T, A> {
    pub(crate) fn new(buf: *mut T, len: usize, capacity: usize, alloc: A) -> Self {
        Self {
            buf,
            capacity,
            start: 0,
            end: len,
            alloc,
            _marker: PhantomData,
        }
    }

    /// Returns the elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        if self.buf.is_null() {
            return &[];
        }

        // SAFETY: slots [start, end) are still live.
        unsafe { slice::from_raw_parts(self.buf.add(self.start), self.end - self.start) }
    }
}

impl<T, A: Allocator> Iterator for IntoIter<T, A> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }

        // SAFETY: slot `start` is live and leaves the live range right after.
        let value = unsafe { ptr::read(self.buf.add(self.start)) };
        self.start += 1;

        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T, A: Allocator> DoubleEndedIterator for IntoIter<T, A> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }

        self.end -= 1;

        // SAFETY: slot `end` was live and is now outside the live range.
        Some(unsafe { ptr::read(self.buf.add(self.end)) })
    }
}

impl<T, A: Allocator> ExactSizeIterator for IntoIter<T, A> {}

impl<T, A: Allocator> FusedIterator for IntoIter<T, A> {}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for IntoIter<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T, A: Allocator> Drop for IntoIter<T, A> {
    fn drop(&mut self) {
        for index in self.start..self.end {
            // SAFETY: slots [start, end) are live.
            unsafe { self.alloc.destroy(self.buf.add(index)) };
        }

        // SAFETY: block came from `self.alloc` with this capacity.
        unsafe { self.alloc.deallocate(self.buf, self.capacity) };
    }
}
