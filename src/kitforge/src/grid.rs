//! Fixed-capacity kit grid: placement, removal, and occupancy.
//!
//! A [`Grid`] owns an ordered run of slots, indexed contiguously from 0.
//! Every mutation is validated against the catalog (unknown items, zone
//! eligibility) and the enchantment rules before anything changes, so a
//! failed placement leaves the grid exactly as it was. Queries never fail
//! and never mutate.

use crate::catalog::Catalog;
use crate::validate::{self, ConflictPair, LevelError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Slots in a shulker box inventory (3 rows x 9 columns).
pub const SHULKER_SLOTS: usize = 27;

/// Logical zone assigned to slots without an explicit one.
pub const DEFAULT_ZONE: &str = "inventory";

/// One enchantment applied to an occupant, by identifier and level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedEnchantment {
    pub id: String,
    pub level: u32,
}

/// The contents of an occupied slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupant {
    pub item_id: String,
    pub count: u32,
    #[serde(default)]
    pub enchantments: Vec<AppliedEnchantment>,
}

/// One addressable position in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub index: usize,
    pub zone: String,
    pub occupant: Option<Occupant>,
}

/// Errors raised by placement operations. None of them leave the grid
/// partially mutated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlacementError {
    #[error("slot index {index} out of range (capacity {capacity})")]
    BadIndex { index: usize, capacity: usize },

    #[error("slot {0} is already occupied")]
    SlotOccupied(usize),

    #[error("unknown item: {0}")]
    UnknownItem(String),

    #[error("item {item} may not occupy zone {zone}")]
    ZoneRestricted { item: String, zone: String },

    #[error("count {count} out of range for {item} (1..={max_stack})")]
    BadCount {
        item: String,
        count: u32,
        max_stack: u32,
    },

    #[error(transparent)]
    LevelOutOfRange(#[from] LevelError),

    #[error("conflicting enchantments: {0}")]
    ModifierConflict(ConflictPair),

    #[error("no empty slot accepts {0}")]
    NoFreeSlot(String),
}

/// Fixed ordered run of slots holding the kit being assembled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    slots: Vec<Slot>,
}

impl Grid {
    /// A grid of `capacity` slots, all in the default `"inventory"` zone.
    pub fn new(capacity: usize) -> Self {
        Self::with_zone(capacity, DEFAULT_ZONE)
    }

    /// A grid of `capacity` slots, all in `zone`.
    pub fn with_zone(capacity: usize, zone: &str) -> Self {
        let slots = (0..capacity)
            .map(|index| Slot {
                index,
                zone: zone.to_string(),
                occupant: None,
            })
            .collect();
        Self { slots }
    }

    /// The 27-slot grid matching a shulker box.
    pub fn shulker() -> Self {
        Self::new(SHULKER_SLOTS)
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Reassign the logical zone of one slot. Out-of-range indices are
    /// ignored.
    pub fn set_zone(&mut self, index: usize, zone: &str) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.zone = zone.to_string();
        }
    }

    pub fn zone(&self, index: usize) -> Option<&str> {
        self.slots.get(index).map(|s| s.zone.as_str())
    }

    /// Whether `index` holds no occupant. Out-of-range indices read as empty.
    pub fn is_empty(&self, index: usize) -> bool {
        self.slots.get(index).map_or(true, |s| s.occupant.is_none())
    }

    pub fn occupant(&self, index: usize) -> Option<&Occupant> {
        self.slots.get(index).and_then(|s| s.occupant.as_ref())
    }

    /// Read-only view of every slot, occupied or not.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Occupied slots in ascending index order.
    pub fn occupied_slots(&self) -> impl Iterator<Item = (usize, &Occupant)> {
        self.slots
            .iter()
            .filter_map(|s| s.occupant.as_ref().map(|o| (s.index, o)))
    }

    /// Whether the whole grid is unoccupied.
    pub fn is_vacant(&self) -> bool {
        self.slots.iter().all(|s| s.occupant.is_none())
    }

    /// Immutable copy of the current state, for the undo ledger and the
    /// exporters.
    pub fn snapshot(&self) -> Grid {
        self.clone()
    }

    /// Place an item into an empty slot. Fails with
    /// [`PlacementError::SlotOccupied`] if the slot already holds something;
    /// use [`Grid::replace`] to overwrite deliberately.
    pub fn place(
        &mut self,
        index: usize,
        item_id: &str,
        count: u32,
        enchantments: Vec<AppliedEnchantment>,
        catalog: &Catalog,
    ) -> Result<(), PlacementError> {
        self.put(index, item_id, count, enchantments, catalog, false)
    }

    /// Place an item, overwriting any current occupant. All other checks
    /// still apply.
    pub fn replace(
        &mut self,
        index: usize,
        item_id: &str,
        count: u32,
        enchantments: Vec<AppliedEnchantment>,
        catalog: &Catalog,
    ) -> Result<(), PlacementError> {
        self.put(index, item_id, count, enchantments, catalog, true)
    }

    /// Place into the first empty slot whose zone accepts the item.
    /// Returns the chosen index.
    pub fn place_first_fit(
        &mut self,
        item_id: &str,
        count: u32,
        enchantments: Vec<AppliedEnchantment>,
        catalog: &Catalog,
    ) -> Result<usize, PlacementError> {
        let item = catalog
            .item(item_id)
            .ok_or_else(|| PlacementError::UnknownItem(item_id.to_string()))?;
        let index = self
            .slots
            .iter()
            .find(|s| s.occupant.is_none() && zone_allows(&item.slots, &s.zone))
            .map(|s| s.index)
            .ok_or_else(|| PlacementError::NoFreeSlot(item_id.to_string()))?;
        self.put(index, item_id, count, enchantments, catalog, false)?;
        Ok(index)
    }

    /// Empty one slot. Idempotent: clearing an empty or out-of-range slot is
    /// a no-op.
    pub fn clear(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.occupant = None;
        }
    }

    /// Empty every slot.
    pub fn clear_all(&mut self) {
        for slot in &mut self.slots {
            slot.occupant = None;
        }
    }

    fn put(
        &mut self,
        index: usize,
        item_id: &str,
        count: u32,
        enchantments: Vec<AppliedEnchantment>,
        catalog: &Catalog,
        allow_replace: bool,
    ) -> Result<(), PlacementError> {
        let capacity = self.capacity();
        let slot = self
            .slots
            .get(index)
            .ok_or(PlacementError::BadIndex { index, capacity })?;
        if !allow_replace && slot.occupant.is_some() {
            return Err(PlacementError::SlotOccupied(index));
        }
        let item = catalog
            .item(item_id)
            .ok_or_else(|| PlacementError::UnknownItem(item_id.to_string()))?;
        if !zone_allows(&item.slots, &slot.zone) {
            return Err(PlacementError::ZoneRestricted {
                item: item_id.to_string(),
                zone: slot.zone.clone(),
            });
        }
        if count < 1 || count > item.max_stack {
            return Err(PlacementError::BadCount {
                item: item_id.to_string(),
                count,
                max_stack: item.max_stack,
            });
        }
        validate::check_levels(&enchantments, catalog)?;
        if let Some(pair) = validate::conflicts(&enchantments, catalog).into_iter().next() {
            return Err(PlacementError::ModifierConflict(pair));
        }

        // Every check passed; the slot updates as a whole.
        self.slots[index].occupant = Some(Occupant {
            item_id: item_id.to_string(),
            count,
            enchantments,
        });
        Ok(())
    }
}

/// An empty eligibility list means the item goes anywhere (open-world
/// default); otherwise the slot's zone must be listed.
fn zone_allows(eligible: &[String], zone: &str) -> bool {
    eligible.is_empty() || eligible.iter().any(|z| z == zone)
}
