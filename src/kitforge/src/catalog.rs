//! Versioned item and enchantment catalog.
//!
//! Definitions live as JSON record files under `<data_dir>/<version>/items/`
//! and `<data_dir>/<version>/enchantments/`, one record per file. A catalog
//! is loaded atomically for one content version and is read-only afterwards;
//! every component that needs lookups takes it by shared reference.
//!
//! The symmetric closure of the enchantment conflict relation is computed
//! once here, at load time, so conflict checks are a single map lookup even
//! when the source data declared the conflict in only one direction.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a catalog version.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("catalog version not found: {0}")]
    NotFound(String),

    #[error("malformed record {record}: {reason}")]
    Malformed { record: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One item definition, e.g. `minecraft:diamond_sword`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDef {
    pub id: String,
    pub name: String,
    pub category: String,
    pub max_stack: u32,
    /// Eligible placement zones. Empty means unrestricted.
    #[serde(default)]
    pub slots: Vec<String>,
    /// Icon reference, resolved by the GUI collaborator. The core only
    /// carries the string.
    #[serde(default)]
    pub icon: String,
}

/// One enchantment definition, e.g. `minecraft:sharpness`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnchantmentDef {
    pub id: String,
    pub name: String,
    pub max_level: u32,
    /// Identifiers this enchantment cannot coexist with. Enforced
    /// symmetrically even when declared one-directionally.
    #[serde(default)]
    pub conflicts: Vec<String>,
    /// Applicability tag matched against item categories, e.g. "weapon".
    /// Empty means applicable to anything.
    #[serde(default)]
    pub target: String,
}

/// Read-only index over one version's item and enchantment definitions.
#[derive(Debug, Clone)]
pub struct Catalog {
    version: String,
    items: HashMap<String, ItemDef>,
    enchantments: HashMap<String, EnchantmentDef>,
    conflict_closure: HashMap<String, HashSet<String>>,
}

impl Catalog {
    /// Load every record for `version` under `data_dir`.
    ///
    /// Fails with [`LoadError::NotFound`] when the version directory is
    /// absent and [`LoadError::Malformed`] on the first record that fails
    /// schema validation. A malformed record aborts the whole load; there is
    /// no partial catalog.
    pub fn load(data_dir: impl AsRef<Path>, version: &str) -> Result<Self, LoadError> {
        let root = data_dir.as_ref().join(version);
        if !root.is_dir() {
            return Err(LoadError::NotFound(version.to_string()));
        }
        let items = read_records::<ItemDef>(&root.join("items"))?;
        let enchantments = read_records::<EnchantmentDef>(&root.join("enchantments"))?;
        Self::from_defs(version, items, enchantments)
    }

    /// Build a catalog from in-memory definitions, applying the same
    /// validation as [`Catalog::load`].
    pub fn from_defs(
        version: impl Into<String>,
        items: Vec<ItemDef>,
        enchantments: Vec<EnchantmentDef>,
    ) -> Result<Self, LoadError> {
        let mut item_map = HashMap::with_capacity(items.len());
        for item in items {
            if item.max_stack < 1 {
                return Err(malformed(&item.id, "max_stack must be >= 1"));
            }
            if let Some(prev) = item_map.insert(item.id.clone(), item) {
                return Err(malformed(&prev.id, "duplicate item identifier"));
            }
        }

        let mut ench_map = HashMap::with_capacity(enchantments.len());
        for ench in enchantments {
            if ench.max_level < 1 {
                return Err(malformed(&ench.id, "max_level must be >= 1"));
            }
            if let Some(prev) = ench_map.insert(ench.id.clone(), ench) {
                return Err(malformed(&prev.id, "duplicate enchantment identifier"));
            }
        }

        // Merge both declaration directions into one lookup map. Unknown
        // identifiers in a conflict list stay in the map and simply never
        // match an applied enchantment.
        let mut conflict_closure: HashMap<String, HashSet<String>> = HashMap::new();
        for ench in ench_map.values() {
            for other in &ench.conflicts {
                conflict_closure
                    .entry(ench.id.clone())
                    .or_default()
                    .insert(other.clone());
                conflict_closure
                    .entry(other.clone())
                    .or_default()
                    .insert(ench.id.clone());
            }
        }

        Ok(Self {
            version: version.into(),
            items: item_map,
            enchantments: ench_map,
            conflict_closure,
        })
    }

    /// The content version this catalog was loaded for, e.g. `"1.20"`.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Look up an item definition by identifier.
    pub fn item(&self, id: &str) -> Option<&ItemDef> {
        self.items.get(id)
    }

    /// Look up an enchantment definition by identifier.
    pub fn enchantment(&self, id: &str) -> Option<&EnchantmentDef> {
        self.enchantments.get(id)
    }

    /// Iterate over all item definitions. Order is not specified.
    pub fn items(&self) -> impl Iterator<Item = &ItemDef> {
        self.items.values()
    }

    /// Iterate over all enchantment definitions. Order is not specified.
    pub fn enchantments(&self) -> impl Iterator<Item = &EnchantmentDef> {
        self.enchantments.values()
    }

    /// Whether two enchantment identifiers conflict, in either declaration
    /// direction.
    pub fn in_conflict(&self, a: &str, b: &str) -> bool {
        self.conflict_closure
            .get(a)
            .is_some_and(|set| set.contains(b))
    }

    /// The full (symmetric) conflict set for one enchantment identifier.
    pub fn conflicts_of(&self, id: &str) -> impl Iterator<Item = &str> {
        self.conflict_closure
            .get(id)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }
}

fn malformed(record: &str, reason: &str) -> LoadError {
    LoadError::Malformed {
        record: record.to_string(),
        reason: reason.to_string(),
    }
}

/// Read every `*.json` record file in `dir`. A missing directory yields an
/// empty set, not an error; only the version directory itself is required.
fn read_records<T: serde::de::DeserializeOwned>(dir: &Path) -> Result<Vec<T>, LoadError> {
    let mut records = Vec::new();
    if !dir.is_dir() {
        return Ok(records);
    }
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }
        let text = fs::read_to_string(&path)?;
        let record = serde_json::from_str(&text).map_err(|e| LoadError::Malformed {
            record: path.display().to_string(),
            reason: e.to_string(),
        })?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn sword() -> ItemDef {
        ItemDef {
            id: "minecraft:diamond_sword".into(),
            name: "Diamond Sword".into(),
            category: "weapon".into(),
            max_stack: 1,
            slots: vec!["mainhand".into(), "offhand".into()],
            icon: "diamond_sword.png".into(),
        }
    }

    fn sharpness() -> EnchantmentDef {
        EnchantmentDef {
            id: "minecraft:sharpness".into(),
            name: "Sharpness".into(),
            max_level: 5,
            conflicts: vec!["minecraft:smite".into()],
            target: "weapon".into(),
        }
    }

    fn smite() -> EnchantmentDef {
        EnchantmentDef {
            id: "minecraft:smite".into(),
            name: "Smite".into(),
            max_level: 5,
            // Deliberately empty: the closure must supply the reverse edge.
            conflicts: vec![],
            target: "weapon".into(),
        }
    }

    #[test]
    fn test_lookups() {
        let catalog = Catalog::from_defs("1.20", vec![sword()], vec![sharpness()]).unwrap();
        assert_eq!(catalog.version(), "1.20");
        assert_eq!(
            catalog.item("minecraft:diamond_sword").map(|i| i.max_stack),
            Some(1)
        );
        assert_eq!(
            catalog
                .enchantment("minecraft:sharpness")
                .map(|e| e.max_level),
            Some(5)
        );
        assert!(catalog.item("minecraft:unknown").is_none());
        assert!(catalog.enchantment("minecraft:unknown").is_none());
        assert_eq!(catalog.items().count(), 1);
        assert_eq!(catalog.enchantments().count(), 1);
    }

    #[test]
    fn test_conflict_closure_is_symmetric() {
        let catalog = Catalog::from_defs("1.20", vec![], vec![sharpness(), smite()]).unwrap();
        assert!(catalog.in_conflict("minecraft:sharpness", "minecraft:smite"));
        assert!(catalog.in_conflict("minecraft:smite", "minecraft:sharpness"));
        let of_smite: Vec<_> = catalog.conflicts_of("minecraft:smite").collect();
        assert_eq!(of_smite, vec!["minecraft:sharpness"]);
    }

    #[test]
    fn test_unknown_conflict_reference_is_harmless() {
        let mut def = sharpness();
        def.conflicts = vec!["minecraft:never_released".into()];
        let catalog = Catalog::from_defs("1.20", vec![], vec![def]).unwrap();
        assert!(!catalog.in_conflict("minecraft:sharpness", "minecraft:smite"));
        // The dangling reference resolves nothing but does not fail the load.
        assert!(catalog.in_conflict("minecraft:sharpness", "minecraft:never_released"));
    }

    #[test]
    fn test_bounds_are_validated() {
        let mut bad_item = sword();
        bad_item.max_stack = 0;
        assert!(matches!(
            Catalog::from_defs("1.20", vec![bad_item], vec![]),
            Err(LoadError::Malformed { .. })
        ));

        let mut bad_ench = sharpness();
        bad_ench.max_level = 0;
        assert!(matches!(
            Catalog::from_defs("1.20", vec![], vec![bad_ench]),
            Err(LoadError::Malformed { .. })
        ));
    }

    #[test]
    fn test_duplicate_identifier_rejected() {
        assert!(matches!(
            Catalog::from_defs("1.20", vec![sword(), sword()], vec![]),
            Err(LoadError::Malformed { .. })
        ));
        assert!(matches!(
            Catalog::from_defs("1.20", vec![], vec![sharpness(), sharpness()]),
            Err(LoadError::Malformed { .. })
        ));
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("1.20");
        fs::create_dir_all(root.join("items")).unwrap();
        fs::create_dir_all(root.join("enchantments")).unwrap();
        fs::write(
            root.join("items/diamond_sword.json"),
            serde_json::to_string(&sword()).unwrap(),
        )
        .unwrap();
        fs::write(
            root.join("enchantments/sharpness.json"),
            serde_json::to_string(&sharpness()).unwrap(),
        )
        .unwrap();

        let catalog = Catalog::load(dir.path(), "1.20").unwrap();
        assert!(catalog.item("minecraft:diamond_sword").is_some());
        assert!(catalog.in_conflict("minecraft:smite", "minecraft:sharpness"));
    }

    #[test]
    fn test_load_missing_version() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Catalog::load(dir.path(), "9.99"),
            Err(LoadError::NotFound(v)) if v == "9.99"
        ));
    }

    #[test]
    fn test_load_malformed_record_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("1.20");
        fs::create_dir_all(root.join("items")).unwrap();
        fs::write(root.join("items/broken.json"), "{\"id\": 42}").unwrap();
        assert!(matches!(
            Catalog::load(dir.path(), "1.20"),
            Err(LoadError::Malformed { .. })
        ));
    }

    #[test]
    fn test_non_json_files_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("1.20");
        fs::create_dir_all(root.join("items")).unwrap();
        fs::write(root.join("items/notes.txt"), "not a record").unwrap();
        let catalog = Catalog::load(dir.path(), "1.20").unwrap();
        assert_eq!(catalog.items().count(), 0);
    }
}
