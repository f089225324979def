// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable array over a pluggable allocator.
//!
//! `DynamicArray<T, A>` owns one contiguous block obtained from an
//! [`Allocator`](palisade_alloc::Allocator). The first `len()` slots hold live
//! values, the remaining `capacity() - len()` slots are uninitialized.
//!
//! # Core Guarantees
//!
//! - **Strong reallocation**: `reserve()`, `shrink_to_fit()` and `resize()`
//!   either succeed or leave the array exactly as it was.
//! - **Rollback on clone panics**: bulk copies build into a fresh block; if an
//!   element's `Clone` panics, already built elements are dropped in reverse
//!   order and the block is released before the panic continues.
//! - **Strict bounds**: checked accessors accept `index < len()` only and
//!   report [`DynamicArrayError::OutOfRange`] otherwise.
//! - **Empty after move**: `take()` leaves the source with no block, zero length
//!   and zero capacity.
//!
//! # Example
//!
//! ```rust
//! use palisade_vec::{DynamicArray, DynamicArrayError};
//!
//! fn example() -> Result<(), DynamicArrayError> {
//!     let mut array = DynamicArray::new();
//!     array.push_back(1)?;
//!     array.push_back(2)?;
//!     array.push_back(3)?;
//!
//!     assert_eq!(*array.at(0)?, 1);
//!     assert_eq!(array.pop_back()?, 3);
//!     assert!(array.at(2).is_err());
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Growth Control
//!
//! ```rust
//! use palisade_vec::{DynamicArray, DynamicArrayError};
//!
//! fn example() -> Result<(), DynamicArrayError> {
//!     let mut array = DynamicArray::<u32>::new();
//!     array.reserve(16)?;
//!
//!     for i in 0..16 {
//!         array.push_back(i)?;
//!     }
//!     assert_eq!(array.capacity(), 16);
//!
//!     array.pop_back()?;
//!     array.shrink_to_fit()?;
//!     assert_eq!(array.capacity(), 15);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod dynamic_array;
mod error;
mod into_iter;
mod partial_block;

#[cfg(test)]
mod tests;

pub use dynamic_array::{DynamicArray, GROWTH_FACTOR};
pub use error::DynamicArrayError;
pub use into_iter::IntoIter;
