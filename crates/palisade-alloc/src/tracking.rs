// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::rc::Rc;
use core::cell::Cell;

use crate::allocator::{Allocator, DefaultAllocator};
use crate::error::AllocError;

/// Test behaviour for injecting failures in [`TrackingAllocator`].
///
/// The behaviour is sticky - once set, it remains active until changed.
///
/// # Example
///
/// ```rust
/// // test_utils feature required in dev-dependencies
/// use palisade_alloc::{AllocError, Allocator, AllocatorBehaviour, TrackingAllocator};
///
/// let alloc = TrackingAllocator::new();
/// alloc.change_behaviour(AllocatorBehaviour::FailAtAllocate);
///
/// assert!(matches!(
///     alloc.allocate::<u8>(16),
///     Err(AllocError::Exhausted { bytes: 16 })
/// ));
///
/// alloc.change_behaviour(AllocatorBehaviour::None);
/// assert!(alloc.allocate::<u8>(0).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AllocatorBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Every non-empty `allocate()` call fails with `Exhausted`.
    FailAtAllocate,
    /// The next `n` non-empty allocations succeed, every later one fails.
    FailAfterAllocations(usize),
}

#[derive(Debug, Default)]
struct Counters {
    behaviour: Cell<AllocatorBehaviour>,
    allocations: Cell<usize>,
    deallocations: Cell<usize>,
    constructs: Cell<usize>,
    destroys: Cell<usize>,
}

/// Allocator that records every operation it performs.
///
/// Clones share their counters, so a container and its copies report into the
/// same ledger. Storage itself comes from [`DefaultAllocator`]. Empty requests
/// and null pointers are not counted.
#[derive(Debug, Clone, Default)]
pub struct TrackingAllocator {
    counters: Rc<Counters>,
}

impl TrackingAllocator {
    /// Creates a tracker with zeroed counters and no injected failures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the injected behaviour.
    pub fn change_behaviour(&self, behaviour: AllocatorBehaviour) {
        self.counters.behaviour.set(behaviour);
    }

    /// Number of blocks handed out.
    pub fn allocations(&self) -> usize {
        self.counters.allocations.get()
    }

    /// Number of blocks released.
    pub fn deallocations(&self) -> usize {
        self.counters.deallocations.get()
    }

    /// Blocks handed out and not yet released.
    pub fn live_blocks(&self) -> usize {
        self.allocations() - self.deallocations()
    }

    /// Number of values moved into slots.
    pub fn constructs(&self) -> usize {
        self.counters.constructs.get()
    }

    /// Number of values dropped in place.
    pub fn destroys(&self) -> usize {
        self.counters.destroys.get()
    }

    fn should_fail(&self) -> bool {
        match self.counters.behaviour.get() {
            AllocatorBehaviour::None => false,
            AllocatorBehaviour::FailAtAllocate => true,
            AllocatorBehaviour::FailAfterAllocations(0) => true,
            AllocatorBehaviour::FailAfterAllocations(remaining) => {
                self.counters
                    .behaviour
                    .set(AllocatorBehaviour::FailAfterAllocations(remaining - 1));
                false
            }
        }
    }
}

fn bump(cell: &Cell<usize>) {
    cell.set(cell.get() + 1);
}

unsafe impl Allocator for TrackingAllocator {
    fn allocate<T>(&self, n: usize) -> Result<*mut T, AllocError> {
        if n == 0 {
            return Ok(core::ptr::null_mut());
        }

        if self.should_fail() {
            return Err(AllocError::Exhausted {
                bytes: n.saturating_mul(core::mem::size_of::<T>()),
            });
        }

        let ptr = DefaultAllocator.allocate::<T>(n)?;
        bump(&self.counters.allocations);

        Ok(ptr)
    }

    unsafe fn deallocate<T>(&self, ptr: *mut T, n: usize) {
        if ptr.is_null() {
            return;
        }

        bump(&self.counters.deallocations);

        // SAFETY: forwarded caller contract, block came from DefaultAllocator.
        unsafe { DefaultAllocator.deallocate(ptr, n) }
    }

    unsafe fn construct<T>(&self, ptr: *mut T, value: T) {
        if ptr.is_null() {
            return;
        }

        bump(&self.counters.constructs);

        // SAFETY: forwarded caller contract.
        unsafe { DefaultAllocator.construct(ptr, value) }
    }

    unsafe fn destroy<T>(&self, ptr: *mut T) {
        if ptr.is_null() {
            return;
        }

        bump(&self.counters.destroys);

        // SAFETY: forwarded caller contract.
        unsafe { DefaultAllocator.destroy(ptr) }
    }
}
