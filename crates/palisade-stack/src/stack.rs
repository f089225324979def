// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::collections::VecDeque;
use core::fmt;
use core::marker::PhantomData;

use crate::sequence::BackSequence;

/// LIFO adapter forwarding every operation to a [`BackSequence`].
pub struct Stack<T, C = VecDeque<T>>
where
    C: BackSequence<T>,
{
    container: C,
    _marker: PhantomData<T>,
}

impl<T, C> Stack<T, C>
where
    C: BackSequence<T>,
{
    /// Creates an empty stack over a default-constructed container.
    pub fn new() -> Self
    where
        C: Default,
    {
        Self::from_container(C::default())
    }

    /// Wraps an existing container; its last element becomes the top.
    pub fn from_container(container: C) -> Self {
        Self {
            container,
            _marker: PhantomData,
        }
    }

    /// Pushes `elem` onto the top.
    pub fn push(&mut self, elem: T) -> Result<(), C::PushError> {
        self.container.push_back(elem)
    }

    /// Removes and returns the top element.
    ///
    /// Does nothing and returns `None` when the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.container.pop_back()
    }

    /// Returns a copy of the top element, or `T::default()` when empty.
    pub fn top(&self) -> T
    where
        T: Clone + Default,
    {
        self.container.back().cloned().unwrap_or_default()
    }

    /// Returns the top element, `None` when empty.
    pub fn peek(&self) -> Option<&T> {
        self.container.back()
    }

    /// Returns the top element mutably, `None` when empty.
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.container.back_mut()
    }

    /// Returns `true` if the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.container.is_empty()
    }

    /// Number of elements on the stack.
    pub fn len(&self) -> usize {
        self.container.len()
    }

    /// Borrows the underlying container.
    pub fn as_container(&self) -> &C {
        &self.container
    }

    /// Unwraps the underlying container.
    pub fn into_inner(self) -> C {
        self.container
    }
}

impl<T, C> Default for Stack<T, C>
where
    C: BackSequence<T> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> Clone for Stack<T, C>
where
    C: BackSequence<T> + Clone,
{
    fn clone(&self) -> Self {
        Self::from_container(self.container.clone())
    }
}

impl<T, C> fmt::Debug for Stack<T, C>
where
    C: BackSequence<T> + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("container", &self.container)
            .finish()
    }
}
