//! Session state: the live grid plus undo/redo snapshot ledgers.
//!
//! A [`Ledger`] is a plain stack of grid snapshots. [`Session`] pairs one
//! grid with two ledgers that never share entries: mutations push the prior
//! snapshot onto the undo ledger and clear the redo ledger; `undo`/`redo`
//! move snapshots between the two.
//!
//! Ledgers are bounded at [`Ledger::DEFAULT_CAP`] snapshots, evicting the
//! oldest when full. Grids are small, so the cap is generous for an
//! interactive session while keeping memory bounded; `Ledger::unbounded()`
//! opts out.

use crate::catalog::Catalog;
use crate::grid::{AppliedEnchantment, Grid, PlacementError};
use std::collections::VecDeque;

/// Bounded stack of grid snapshots.
#[derive(Debug, Clone)]
pub struct Ledger {
    entries: VecDeque<Grid>,
    cap: Option<usize>,
}

impl Ledger {
    /// Snapshots retained before the oldest is evicted.
    pub const DEFAULT_CAP: usize = 64;

    pub fn new() -> Self {
        Self::with_cap(Self::DEFAULT_CAP)
    }

    pub fn with_cap(cap: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            cap: Some(cap),
        }
    }

    pub fn unbounded() -> Self {
        Self {
            entries: VecDeque::new(),
            cap: None,
        }
    }

    /// Push a snapshot, evicting the oldest entries past the cap.
    pub fn record(&mut self, snapshot: Grid) {
        if let Some(cap) = self.cap {
            while self.entries.len() >= cap.max(1) {
                self.entries.pop_front();
            }
        }
        self.entries.push_back(snapshot);
    }

    /// Pop the most recent snapshot, or `None` when the ledger is empty.
    pub fn undo(&mut self) -> Option<Grid> {
        self.entries.pop_back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

/// One editing session: a grid and its history.
///
/// The grid and both ledgers are single-owner; a multi-window setup gets one
/// session per window with nothing shared.
#[derive(Debug)]
pub struct Session {
    grid: Grid,
    undo: Ledger,
    redo: Ledger,
}

impl Session {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            undo: Ledger::new(),
            redo: Ledger::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// [`Grid::place`] with history recording.
    pub fn place(
        &mut self,
        index: usize,
        item_id: &str,
        count: u32,
        enchantments: Vec<AppliedEnchantment>,
        catalog: &Catalog,
    ) -> Result<(), PlacementError> {
        let before = self.grid.snapshot();
        self.grid.place(index, item_id, count, enchantments, catalog)?;
        self.committed(before);
        Ok(())
    }

    /// [`Grid::replace`] with history recording.
    pub fn replace(
        &mut self,
        index: usize,
        item_id: &str,
        count: u32,
        enchantments: Vec<AppliedEnchantment>,
        catalog: &Catalog,
    ) -> Result<(), PlacementError> {
        let before = self.grid.snapshot();
        self.grid
            .replace(index, item_id, count, enchantments, catalog)?;
        self.committed(before);
        Ok(())
    }

    /// [`Grid::place_first_fit`] with history recording.
    pub fn place_first_fit(
        &mut self,
        item_id: &str,
        count: u32,
        enchantments: Vec<AppliedEnchantment>,
        catalog: &Catalog,
    ) -> Result<usize, PlacementError> {
        let before = self.grid.snapshot();
        let index = self
            .grid
            .place_first_fit(item_id, count, enchantments, catalog)?;
        self.committed(before);
        Ok(index)
    }

    /// [`Grid::clear`] with history recording. Clearing an already-empty
    /// slot records nothing.
    pub fn clear(&mut self, index: usize) {
        if self.grid.is_empty(index) {
            return;
        }
        let before = self.grid.snapshot();
        self.grid.clear(index);
        self.committed(before);
    }

    /// [`Grid::clear_all`] with history recording. A vacant grid records
    /// nothing.
    pub fn clear_all(&mut self) {
        if self.grid.is_vacant() {
            return;
        }
        let before = self.grid.snapshot();
        self.grid.clear_all();
        self.committed(before);
    }

    /// Restore the most recent snapshot. Returns `false` when there is
    /// nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.undo.undo() {
            Some(prev) => {
                self.redo.record(self.grid.snapshot());
                self.grid = prev;
                true
            }
            None => false,
        }
    }

    /// Reapply the most recently undone state. Returns `false` when there is
    /// nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.redo.undo() {
            Some(next) => {
                self.undo.record(self.grid.snapshot());
                self.grid = next;
                true
            }
            None => false,
        }
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    fn committed(&mut self, before: Grid) {
        self.undo.record(before);
        self.redo.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ItemDef;

    fn catalog() -> Catalog {
        let items = vec![ItemDef {
            id: "minecraft:arrow".into(),
            name: "Arrow".into(),
            category: "ammo".into(),
            max_stack: 64,
            slots: vec![],
            icon: String::new(),
        }];
        Catalog::from_defs("1.20", items, vec![]).unwrap()
    }

    #[test]
    fn test_ledger_is_lifo() {
        let catalog = catalog();
        let mut ledger = Ledger::new();
        let mut grid = Grid::new(2);
        ledger.record(grid.snapshot());
        grid.place(0, "minecraft:arrow", 1, vec![], &catalog).unwrap();
        ledger.record(grid.snapshot());

        let top = ledger.undo().unwrap();
        assert!(!top.is_empty(0));
        let bottom = ledger.undo().unwrap();
        assert!(bottom.is_vacant());
        assert!(ledger.undo().is_none());
    }

    #[test]
    fn test_ledger_evicts_oldest_at_cap() {
        let catalog = catalog();
        let mut ledger = Ledger::with_cap(2);
        let mut grid = Grid::new(3);
        for index in 0..3 {
            ledger.record(grid.snapshot());
            grid.place(index, "minecraft:arrow", 1, vec![], &catalog).unwrap();
        }
        assert_eq!(ledger.len(), 2);
        // The oldest snapshot (the vacant grid) was evicted.
        let oldest = {
            let mut last = None;
            while let Some(g) = ledger.undo() {
                last = Some(g);
            }
            last.unwrap()
        };
        assert!(!oldest.is_empty(0));
    }

    #[test]
    fn test_undo_redo_cycle() {
        let catalog = catalog();
        let mut session = Session::new(Grid::new(2));
        session.place(0, "minecraft:arrow", 1, vec![], &catalog).unwrap();
        session.place(1, "minecraft:arrow", 2, vec![], &catalog).unwrap();
        assert_eq!(session.undo_depth(), 2);

        assert!(session.undo());
        assert!(session.grid().is_empty(1));
        assert_eq!(session.redo_depth(), 1);

        assert!(session.redo());
        assert_eq!(session.grid().occupant(1).unwrap().count, 2);

        assert!(session.undo());
        assert!(session.undo());
        assert!(session.grid().is_vacant());
        assert!(!session.undo());
    }

    #[test]
    fn test_new_mutation_clears_redo() {
        let catalog = catalog();
        let mut session = Session::new(Grid::new(2));
        session.place(0, "minecraft:arrow", 1, vec![], &catalog).unwrap();
        assert!(session.undo());
        assert_eq!(session.redo_depth(), 1);

        session.place(1, "minecraft:arrow", 1, vec![], &catalog).unwrap();
        assert_eq!(session.redo_depth(), 0);
        assert!(!session.redo());
    }

    #[test]
    fn test_failed_mutation_records_nothing() {
        let catalog = catalog();
        let mut session = Session::new(Grid::new(1));
        session
            .place(0, "minecraft:mystery", 1, vec![], &catalog)
            .unwrap_err();
        assert_eq!(session.undo_depth(), 0);
    }

    #[test]
    fn test_noop_clear_records_nothing() {
        let mut session = Session::new(Grid::new(1));
        session.clear(0);
        session.clear_all();
        assert_eq!(session.undo_depth(), 0);
    }
}
