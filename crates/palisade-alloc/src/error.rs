// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for palisade-alloc.

use thiserror::Error;

/// Errors returned by [`Allocator::allocate`](crate::Allocator::allocate).
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum AllocError {
    /// The underlying allocator could not provide the requested block.
    #[error("allocator could not provide {bytes} bytes")]
    Exhausted {
        /// Size of the rejected request in bytes.
        bytes: usize,
    },

    /// `n * size_of::<T>()` does not fit in a valid layout.
    #[error("requested capacity exceeds the maximum layout size")]
    CapacityOverflow,
}
