// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Palisade is a small container library: a growable array that owns its
//! storage through a pluggable allocator, and a stack adapter on top of any
//! back-insertable sequence.
//!
//! # Crates
//!
//! - [`alloc`]: the `Allocator` capability and `DefaultAllocator`
//! - [`vec`]: `DynamicArray<T, A>` with strong reallocation guarantees
//! - [`stack`]: `Stack<T, C>` LIFO adapter
//!
//! # Quick Start
//!
//! ```rust
//! use palisade::{DynamicArray, DynamicArrayError, Stack};
//!
//! fn main() -> Result<(), DynamicArrayError> {
//!     let mut array = DynamicArray::new();
//!     array.push_back(1)?;
//!     array.push_back(2)?;
//!     array.push_back(3)?;
//!
//!     assert_eq!(array.len(), 3);
//!     assert_eq!(*array.at(2)?, 3);
//!     assert!(array.at(3).is_err());
//!
//!     array.resize(5, 9)?;
//!     assert_eq!(array.capacity(), 5);
//!     assert!(array.iter().all(|value| *value == 9));
//!
//!     let mut stack: Stack<i32, DynamicArray<i32>> = Stack::from_container(array);
//!     stack.push(10)?;
//!     assert_eq!(stack.top(), 10);
//!     Ok(())
//! }
//! ```
//!
//! # Custom Allocators
//!
//! Any type implementing [`Allocator`] can back a `DynamicArray`:
//!
//! ```rust
//! use palisade::{AllocError, Allocator, DefaultAllocator, DynamicArray};
//!
//! #[derive(Clone, Default)]
//! struct Logging;
//!
//! unsafe impl Allocator for Logging {
//!     fn allocate<T>(&self, n: usize) -> Result<*mut T, AllocError> {
//!         println!("allocate {n}");
//!         DefaultAllocator.allocate(n)
//!     }
//!
//!     unsafe fn deallocate<T>(&self, ptr: *mut T, n: usize) {
//!         println!("deallocate {n}");
//!         unsafe { DefaultAllocator.deallocate(ptr, n) }
//!     }
//! }
//!
//! let mut array = DynamicArray::new_in(Logging);
//! array.push_back("hello").unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub use palisade_alloc as alloc;
pub use palisade_stack as stack;
pub use palisade_vec as vec;

pub use palisade_alloc::{AllocError, Allocator, DefaultAllocator};
pub use palisade_stack::{BackSequence, Stack};
pub use palisade_vec::{DynamicArray, DynamicArrayError, IntoIter};
