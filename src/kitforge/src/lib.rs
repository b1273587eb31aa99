//! # kitforge
//!
//! Minecraft kit builder core library.
//!
//! This library provides the non-visual half of a kit editor:
//! - Load a versioned catalog of item and enchantment definitions
//! - Validate placements (zone eligibility, stack bounds, enchantment
//!   levels, conflicting enchantment pairs)
//! - Hold the kit in a fixed-capacity slot grid with undo/redo history
//! - Export a populated grid as the nested named-tag container the game
//!   loads, or as a single `/give` command line
//!
//! A GUI (or the bundled CLI) drives the grid through these APIs and never
//! mutates slot state directly.
//!
//! ## Example
//!
//! ```
//! use kitforge::{Catalog, EnchantmentDef, Grid, ItemDef, AppliedEnchantment};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Catalog::from_defs(
//!     "1.20",
//!     vec![ItemDef {
//!         id: "diamond_sword".into(),
//!         name: "Diamond Sword".into(),
//!         category: "weapon".into(),
//!         max_stack: 1,
//!         slots: vec![],
//!         icon: String::new(),
//!     }],
//!     vec![EnchantmentDef {
//!         id: "sharpness".into(),
//!         name: "Sharpness".into(),
//!         max_level: 5,
//!         conflicts: vec![],
//!         target: "weapon".into(),
//!     }],
//! )?;
//!
//! let mut grid = Grid::shulker();
//! grid.place(
//!     0,
//!     "diamond_sword",
//!     1,
//!     vec![AppliedEnchantment { id: "sharpness".into(), level: 5 }],
//!     &catalog,
//! )?;
//!
//! let line = kitforge::to_command_string(&grid, &catalog)?;
//! assert!(line.starts_with("/give @p minecraft:player_head"));
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod export;
pub mod grid;
pub mod session;
pub mod validate;

// Re-export commonly used items
#[doc(inline)]
pub use catalog::{Catalog, EnchantmentDef, ItemDef, LoadError};
#[doc(inline)]
pub use export::{
    parse_command_string, to_command_string, to_container, CommandParseError, ParsedEntry,
    SerializationError, Tag,
};
#[doc(inline)]
pub use grid::{
    AppliedEnchantment, Grid, Occupant, PlacementError, Slot, DEFAULT_ZONE, SHULKER_SLOTS,
};
#[doc(inline)]
pub use session::{Ledger, Session};
#[doc(inline)]
pub use validate::{check_levels, conflicts, is_applicable, ConflictPair, LevelError};
