// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for palisade-vec.

use palisade_alloc::AllocError;
use thiserror::Error;

/// Error type for `DynamicArray` operations.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum DynamicArrayError {
    /// A checked access or removal had no valid target.
    ///
    /// Reported by `at()`, `front()`/`back()` and `pop_back()` on an empty
    /// array. `index` is the requested position (`0` for the end-accessors).
    #[error("index {index} is out of range for length {len}")]
    OutOfRange {
        /// Requested position.
        index: usize,
        /// Length of the array at the time of the request.
        len: usize,
    },

    /// The allocator could not provide a block.
    #[error("allocation failed: {0}")]
    Alloc(#[from] AllocError),
}
