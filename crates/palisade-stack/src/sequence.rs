// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::convert::Infallible;

use palisade_alloc::Allocator;
use palisade_vec::{DynamicArray, DynamicArrayError};

/// Container that can be appended to, inspected and shrunk at its end.
pub trait BackSequence<T> {
    /// Error reported when an append fails.
    type PushError;

    /// Appends `value` at the end.
    fn push_back(&mut self, value: T) -> Result<(), Self::PushError>;

    /// Removes and returns the last element, `None` when empty.
    fn pop_back(&mut self) -> Option<T>;

    /// Returns the last element, `None` when empty.
    fn back(&self) -> Option<&T>;

    /// Returns the last element mutably, `None` when empty.
    fn back_mut(&mut self) -> Option<&mut T>;

    /// Number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> BackSequence<T> for VecDeque<T> {
    type PushError = Infallible;

    fn push_back(&mut self, value: T) -> Result<(), Infallible> {
        VecDeque::push_back(self, value);
        Ok(())
    }

    fn pop_back(&mut self) -> Option<T> {
        VecDeque::pop_back(self)
    }

    fn back(&self) -> Option<&T> {
        VecDeque::back(self)
    }

    fn back_mut(&mut self) -> Option<&mut T> {
        VecDeque::back_mut(self)
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

impl<T> BackSequence<T> for Vec<T> {
    type PushError = Infallible;

    fn push_back(&mut self, value: T) -> Result<(), Infallible> {
        self.push(value);
        Ok(())
    }

    fn pop_back(&mut self) -> Option<T> {
        self.pop()
    }

    fn back(&self) -> Option<&T> {
        self.last()
    }

    fn back_mut(&mut self) -> Option<&mut T> {
        self.last_mut()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T, A: Allocator> BackSequence<T> for DynamicArray<T, A> {
    type PushError = DynamicArrayError;

    fn push_back(&mut self, value: T) -> Result<(), DynamicArrayError> {
        DynamicArray::push_back(self, value)
    }

    fn pop_back(&mut self) -> Option<T> {
        DynamicArray::pop_back(self).ok()
    }

    fn back(&self) -> Option<&T> {
        DynamicArray::back(self).ok()
    }

    fn back_mut(&mut self) -> Option<&mut T> {
        DynamicArray::back_mut(self).ok()
    }

    fn len(&self) -> usize {
        DynamicArray::len(self)
    }
}
