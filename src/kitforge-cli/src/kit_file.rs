//! Kit layout files: the JSON documents the CLI turns into grids.
//!
//! A layout names the catalog version it was authored against plus one entry
//! per occupied slot. Every entry goes through [`Grid::place`], so the
//! catalog rules apply; the CLI never writes slot state directly.

use anyhow::{Context, Result};
use kitforge::{AppliedEnchantment, Catalog, Grid};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
pub struct KitFile {
    /// Catalog content version, e.g. "1.20"
    pub version: String,

    /// Grid capacity; defaults to the 27-slot shulker layout
    #[serde(default)]
    pub capacity: Option<usize>,

    pub entries: Vec<KitEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct KitEntry {
    pub slot: usize,
    pub id: String,
    #[serde(default = "default_count")]
    pub count: u32,
    #[serde(default)]
    pub enchantments: Vec<KitEnchantment>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct KitEnchantment {
    pub id: String,
    pub level: u32,
}

fn default_count() -> u32 {
    1
}

pub fn load(path: &Path) -> Result<KitFile> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Build a validated grid from a kit layout.
pub fn build_grid(kit: &KitFile, catalog: &Catalog) -> Result<Grid> {
    let mut grid = match kit.capacity {
        Some(capacity) => Grid::new(capacity),
        None => Grid::shulker(),
    };
    for entry in &kit.entries {
        let enchantments = entry
            .enchantments
            .iter()
            .map(|e| AppliedEnchantment {
                id: e.id.clone(),
                level: e.level,
            })
            .collect();
        grid.place(entry.slot, &entry.id, entry.count, enchantments, catalog)
            .with_context(|| format!("placing {} in slot {}", entry.id, entry.slot))?;
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kitforge::{EnchantmentDef, ItemDef};

    fn catalog() -> Catalog {
        let items = vec![ItemDef {
            id: "minecraft:bow".into(),
            name: "Bow".into(),
            category: "weapon".into(),
            max_stack: 1,
            slots: vec![],
            icon: String::new(),
        }];
        let enchantments = vec![EnchantmentDef {
            id: "minecraft:power".into(),
            name: "Power".into(),
            max_level: 5,
            conflicts: vec![],
            target: "weapon".into(),
        }];
        Catalog::from_defs("1.20", items, enchantments).unwrap()
    }

    #[test]
    fn test_build_grid_from_layout() {
        let kit: KitFile = serde_json::from_str(
            r#"{
                "version": "1.20",
                "entries": [
                    {
                        "slot": 3,
                        "id": "minecraft:bow",
                        "enchantments": [{"id": "minecraft:power", "level": 5}]
                    }
                ]
            }"#,
        )
        .unwrap();

        let grid = build_grid(&kit, &catalog()).unwrap();
        assert_eq!(grid.capacity(), 27);
        let occupant = grid.occupant(3).unwrap();
        assert_eq!(occupant.item_id, "minecraft:bow");
        assert_eq!(occupant.count, 1); // defaulted
        assert_eq!(occupant.enchantments.len(), 1);
    }

    #[test]
    fn test_placement_errors_surface_with_context() {
        let kit: KitFile = serde_json::from_str(
            r#"{"version": "1.20", "entries": [{"slot": 0, "id": "minecraft:tnt_sword"}]}"#,
        )
        .unwrap();
        let err = build_grid(&kit, &catalog()).unwrap_err();
        assert!(err.to_string().contains("slot 0"));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(load(Path::new("/nonexistent/kit.json")).is_err());
    }
}
