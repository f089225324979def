// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Allocator capability for palisade containers.
//!
//! Containers never talk to the global allocator directly. They go through an
//! [`Allocator`], which owns exactly four responsibilities:
//!
//! - **allocate**: hand out uninitialized storage for `n` elements of `T`
//! - **deallocate**: give a block obtained from `allocate` back
//! - **construct**: move a value into one uninitialized slot
//! - **destroy**: run a value's drop glue without releasing its slot
//!
//! Null pointers are accepted by `deallocate`, `construct` and `destroy` and
//! are treated as no-ops. An empty request (`n == 0`) yields a null pointer
//! without allocating.
//!
//! # Example
//!
//! ```rust
//! use palisade_alloc::{AllocError, Allocator, DefaultAllocator};
//!
//! fn example() -> Result<(), AllocError> {
//!     let alloc = DefaultAllocator;
//!     let block = alloc.allocate::<u64>(4)?;
//!
//!     unsafe {
//!         alloc.construct(block, 42);
//!         assert_eq!(*block, 42);
//!         alloc.destroy(block);
//!         alloc.deallocate(block, 4);
//!     }
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test_utils` feature to get [`TrackingAllocator`], which counts
//! every operation and can be told to fail on demand through
//! [`AllocatorBehaviour`]:
//!
//! ```toml
//! [dev-dependencies]
//! palisade-alloc = { version = "*", features = ["test_utils"] }
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod allocator;
mod error;

#[cfg(any(test, feature = "test_utils"))]
mod tracking;

#[cfg(test)]
mod tests;

pub use allocator::{Allocator, DefaultAllocator};
pub use error::AllocError;

#[cfg(any(test, feature = "test_utils"))]
pub use tracking::{AllocatorBehaviour, TrackingAllocator};
