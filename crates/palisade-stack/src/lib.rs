// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Last-in-first-out adapter over a back-insertable sequence.
//!
//! [`Stack`] adds no storage of its own: every operation is forwarded to the
//! underlying container through the [`BackSequence`] capability. The default
//! container is `VecDeque<T>`; `Vec<T>` and
//! [`DynamicArray`](palisade_vec::DynamicArray) work as well.
//!
//! # Empty-stack behaviour
//!
//! `pop()` on an empty stack returns `None` and changes nothing. `top()` on an
//! empty stack returns `T::default()`. Use [`Stack::peek`] when an empty stack
//! has to be told apart from a stored default value.
//!
//! # Example
//!
//! ```rust
//! use palisade_stack::Stack;
//!
//! let mut stack: Stack<u32> = Stack::new();
//! let Ok(()) = stack.push(1);
//! let Ok(()) = stack.push(2);
//!
//! assert_eq!(stack.top(), 2);
//! assert_eq!(stack.pop(), Some(2));
//! assert_eq!(stack.len(), 1);
//!
//! stack.pop();
//! assert_eq!(stack.pop(), None);
//! assert_eq!(stack.top(), 0);
//! ```
//!
//! # Example: DynamicArray backing
//!
//! ```rust
//! use palisade_stack::Stack;
//! use palisade_vec::{DynamicArray, DynamicArrayError};
//!
//! fn example() -> Result<(), DynamicArrayError> {
//!     let mut stack: Stack<u8, DynamicArray<u8>> = Stack::new();
//!     stack.push(7)?;
//!
//!     assert_eq!(stack.peek(), Some(&7));
//!     assert_eq!(stack.as_container().capacity(), 1);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod sequence;
mod stack;

#[cfg(test)]
mod tests;

pub use sequence::BackSequence;
pub use stack::Stack;
