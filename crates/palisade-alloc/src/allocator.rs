// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::alloc::{alloc, dealloc};
use core::alloc::Layout;
use core::ptr::{self, NonNull};

use crate::error::AllocError;

/// Memory and object lifecycle capability used by palisade containers.
///
/// # Safety
///
/// Implementors must guarantee that a non-null pointer returned by
/// `allocate::<T>(n)` is aligned for `T`, valid for reads and writes of `n`
/// elements, and stays valid until it is passed to `deallocate::<T>(_, n)`.
pub unsafe trait Allocator {
    /// Returns uninitialized storage for `n` elements of `T`.
    ///
    /// Ownership of the block is transferred to the caller, who must release
    /// it with [`deallocate`](Allocator::deallocate) using the same `n`.
    /// Returns a null pointer when `n == 0`. Never constructs objects.
    fn allocate<T>(&self, n: usize) -> Result<*mut T, AllocError>;

    /// Releases a block previously returned by `allocate::<T>(n)`.
    ///
    /// A null `ptr` is a no-op.
    ///
    /// # Safety
    ///
    /// `ptr` must be null or come from `self.allocate::<T>(n)` and must not
    /// have been released already. Live values in the block are not dropped.
    unsafe fn deallocate<T>(&self, ptr: *mut T, n: usize);

    /// Moves `value` into the uninitialized slot at `ptr`.
    ///
    /// A null `ptr` is a no-op and `value` is dropped.
    ///
    /// # Safety
    ///
    /// `ptr` must be null or point to an uninitialized slot inside a block
    /// obtained from this allocator.
    #[inline]
    unsafe fn construct<T>(&self, ptr: *mut T, value: T) {
        if ptr.is_null() {
            return;
        }

        // SAFETY: caller guarantees `ptr` is a valid, uninitialized slot.
        unsafe { ptr.write(value) }
    }

    /// Runs the drop glue of the value at `ptr` without releasing its slot.
    ///
    /// A null `ptr` is a no-op.
    ///
    /// # Safety
    ///
    /// `ptr` must be null or point to a live value inside a block obtained
    /// from this allocator. The slot is uninitialized afterwards.
    #[inline]
    unsafe fn destroy<T>(&self, ptr: *mut T) {
        if ptr.is_null() {
            return;
        }

        // SAFETY: caller guarantees `ptr` holds a live value.
        unsafe { ptr::drop_in_place(ptr) }
    }
}

/// Stateless allocator backed by the global allocator.
///
/// Zero-sized layouts (zero-sized `T`) are served with a dangling, aligned
/// pointer and never reach the global allocator.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct DefaultAllocator;

impl DefaultAllocator {
    fn layout_for<T>(n: usize) -> Result<Layout, AllocError> {
        Layout::array::<T>(n).map_err(|_| AllocError::CapacityOverflow)
    }
}

unsafe impl Allocator for DefaultAllocator {
    fn allocate<T>(&self, n: usize) -> Result<*mut T, AllocError> {
        if n == 0 {
            return Ok(ptr::null_mut());
        }

        let layout = Self::layout_for::<T>(n)?;

        if layout.size() == 0 {
            return Ok(NonNull::<T>::dangling().as_ptr());
        }

        // SAFETY: layout has non-zero size.
        let ptr = unsafe { alloc(layout) };

        if ptr.is_null() {
            log::debug!(
                "global allocator refused {} bytes (align {})",
                layout.size(),
                layout.align()
            );
            return Err(AllocError::Exhausted {
                bytes: layout.size(),
            });
        }

        Ok(ptr.cast::<T>())
    }

    unsafe fn deallocate<T>(&self, ptr: *mut T, n: usize) {
        if ptr.is_null() {
            return;
        }

        // The layout was valid when the block was handed out.
        let Ok(layout) = Self::layout_for::<T>(n) else {
            return;
        };

        if layout.size() == 0 {
            return;
        }

        // SAFETY: caller guarantees `ptr` came from `allocate::<T>(n)`.
        unsafe { dealloc(ptr.cast::<u8>(), layout) }
    }
}
