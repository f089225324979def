// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::collections::VecDeque;

use palisade_vec::DynamicArray;

use crate::BackSequence;

fn exercise<C: BackSequence<u32>>(mut container: C) {
    assert!(container.is_empty());
    assert_eq!(container.back(), None);
    assert_eq!(container.pop_back(), None);

    for value in [10, 20, 30] {
        assert!(container.push_back(value).is_ok());
    }

    assert_eq!(container.len(), 3);
    assert_eq!(container.back(), Some(&30));

    if let Some(back) = container.back_mut() {
        *back = 31;
    }

    assert_eq!(container.pop_back(), Some(31));
    assert_eq!(container.pop_back(), Some(20));
    assert_eq!(container.len(), 1);
}

#[test]
fn test_vec_deque_sequence() {
    exercise(VecDeque::new());
}

#[test]
fn test_vec_sequence() {
    exercise(Vec::new());
}

#[test]
fn test_dynamic_array_sequence() {
    exercise(DynamicArray::new());
}
