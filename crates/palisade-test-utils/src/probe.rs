// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Shared record of what happened to every [`Probe`] created from it.
///
/// Drops are logged by id in the order they happen. Clones can be limited
/// with [`Ledger::panic_after_clones`], after which the next `clone()` panics.
#[derive(Debug, Default)]
pub struct Ledger {
    drops: RefCell<Vec<u32>>,
    clones: Cell<usize>,
    clone_budget: Cell<Option<usize>>,
}

impl Ledger {
    /// Creates an empty ledger with no clone limit.
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Allows `n` more successful clones; the one after panics.
    pub fn panic_after_clones(&self, n: usize) {
        self.clone_budget.set(Some(n));
    }

    /// Removes the clone limit.
    pub fn allow_clones(&self) {
        self.clone_budget.set(None);
    }

    /// Ids of dropped probes, in drop order.
    pub fn drops(&self) -> Vec<u32> {
        self.drops.borrow().clone()
    }

    /// Number of drops recorded so far.
    pub fn drop_count(&self) -> usize {
        self.drops.borrow().len()
    }

    /// Number of successful clones so far.
    pub fn clone_count(&self) -> usize {
        self.clones.get()
    }

    /// Forgets recorded drops and clones. The clone limit is kept.
    pub fn reset(&self) {
        self.drops.borrow_mut().clear();
        self.clones.set(0);
    }
}

/// Element type whose clones and drops are observable through a [`Ledger`].
#[derive(Debug)]
pub struct Probe {
    id: u32,
    ledger: Rc<Ledger>,
}

impl Probe {
    /// Creates a probe reporting to `ledger`.
    pub fn new(id: u32, ledger: &Rc<Ledger>) -> Self {
        Self {
            id,
            ledger: Rc::clone(ledger),
        }
    }

    /// Identifier shared by a probe and its clones.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Builds probes with ids `0..n`.
    pub fn sequence(n: u32, ledger: &Rc<Ledger>) -> Vec<Self> {
        (0..n).map(|id| Self::new(id, ledger)).collect()
    }
}

impl Clone for Probe {
    fn clone(&self) -> Self {
        match self.ledger.clone_budget.get() {
            Some(0) => panic!("Probe {}: clone budget exhausted", self.id),
            Some(n) => self.ledger.clone_budget.set(Some(n - 1)),
            None => {}
        }

        self.ledger.clones.set(self.ledger.clones.get() + 1);

        Self {
            id: self.id,
            ledger: Rc::clone(&self.ledger),
        }
    }
}

impl PartialEq for Probe {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Probe {}

impl Drop for Probe {
    fn drop(&mut self) {
        self.ledger.drops.borrow_mut().push(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_records_drop_order() {
        let ledger = Ledger::new();
        let probes = Probe::sequence(3, &ledger);

        drop(probes);

        assert_eq!(ledger.drops(), vec![0, 1, 2]);
    }

    #[test]
    fn test_probe_clone_budget() {
        let ledger = Ledger::new();
        let probe = Probe::new(7, &ledger);
        ledger.panic_after_clones(1);

        let copy = probe.clone();
        assert_eq!(copy.id(), 7);
        assert_eq!(ledger.clone_count(), 1);

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| probe.clone()));
        assert!(result.is_err());
        assert_eq!(ledger.clone_count(), 1);

        ledger.allow_clones();
        let _again = probe.clone();
        assert_eq!(ledger.clone_count(), 2);
    }
}
