// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use palisade_alloc::TrackingAllocator;
use palisade_test_utils::{Ledger, Probe};

use crate::DynamicArray;

#[test]
fn test_iter_forward_and_reverse() {
    let array = DynamicArray::try_from_slice(&[1, 2, 3]).expect("Failed to try_from_slice(..)");

    let forward: Vec<i32> = array.iter().copied().collect();
    let reverse: Vec<i32> = array.iter_rev().copied().collect();

    assert_eq!(forward, vec![1, 2, 3]);
    assert_eq!(reverse, vec![3, 2, 1]);

    // Restartable.
    assert_eq!(array.iter().count(), 3);
    assert_eq!(array.iter_rev().count(), 3);
}

#[test]
fn test_iter_on_empty() {
    let array: DynamicArray<u8> = DynamicArray::new();

    assert_eq!(array.iter().next(), None);
    assert_eq!(array.iter_rev().next(), None);
}

#[test]
fn test_iter_mut() {
    let mut array = DynamicArray::try_from_slice(&[1, 2, 3]).expect("Failed to try_from_slice(..)");

    for value in &mut array {
        *value *= 10;
    }

    assert_eq!(array, [10, 20, 30]);
}

#[test]
fn test_borrowed_into_iterator() {
    let array = DynamicArray::try_from_slice(&[4, 5]).expect("Failed to try_from_slice(..)");
    let mut sum = 0;

    for value in &array {
        sum += value;
    }

    assert_eq!(sum, 9);
}

#[test]
fn test_into_iter_yields_in_order() {
    let array = DynamicArray::try_from_slice(&[1, 2, 3, 4]).expect("Failed to try_from_slice(..)");
    let mut iter = array.into_iter();

    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.as_slice(), [2, 3]);
    assert_eq!(iter.collect::<Vec<_>>(), vec![2, 3]);
}

#[test]
fn test_into_iter_drops_remaining_and_releases_block() {
    let ledger = Ledger::new();
    let alloc = TrackingAllocator::new();
    let mut array = DynamicArray::new_in(alloc.clone());
    for probe in Probe::sequence(4, &ledger) {
        array.push_back(probe).expect("Failed to push_back(..)");
    }

    let mut iter = array.into_iter();
    let first = iter.next().expect("Failed to get first element");
    drop(iter);

    assert_eq!(ledger.drops(), vec![1, 2, 3]);
    assert_eq!(alloc.live_blocks(), 0);

    drop(first);
    assert_eq!(ledger.drops(), vec![1, 2, 3, 0]);
}

#[test]
fn test_into_iter_empty_array() {
    let array: DynamicArray<String> = DynamicArray::new();
    let mut iter = array.into_iter();

    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
    assert!(iter.as_slice().is_empty());
}
