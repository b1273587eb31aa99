//! Enchantment compatibility rules.
//!
//! All checks here operate on the enchantments of a single item. The
//! cardinalities are tiny (a handful of enchantments per item), so the
//! conflict scan is a plain pairwise loop over the precomputed closure in
//! [`Catalog`].

use crate::catalog::Catalog;
use crate::grid::AppliedEnchantment;
use thiserror::Error;

/// Two applied enchantments that cannot coexist on one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictPair {
    pub first: String,
    pub second: String,
}

impl std::fmt::Display for ConflictPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} and {}", self.first, self.second)
    }
}

/// An applied level outside the definition's `1..=max_level` range.
///
/// Levels are rejected, never clamped; silent truncation would hide the
/// caller's mistake.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("level {level} for {id} is out of range (1..={max})")]
pub struct LevelError {
    pub id: String,
    pub level: u32,
    pub max: u32,
}

/// Report every conflicting unordered pair among `applied`.
///
/// The closure in the catalog is symmetric, so a conflict is reported no
/// matter which side's definition declared it. Returns an empty vec when the
/// combination is clean.
pub fn conflicts(applied: &[AppliedEnchantment], catalog: &Catalog) -> Vec<ConflictPair> {
    let mut found = Vec::new();
    for (i, a) in applied.iter().enumerate() {
        for b in &applied[i + 1..] {
            if catalog.in_conflict(&a.id, &b.id) {
                found.push(ConflictPair {
                    first: a.id.clone(),
                    second: b.id.clone(),
                });
            }
        }
    }
    found
}

/// Whether `enchantment_id` may be applied to `item_id` at all.
///
/// Matches the enchantment's target tag against the item's category
/// (case-insensitive, substring either way) or the item identifier itself.
/// An empty target means applicable to anything. Unknown identifiers yield
/// `false` rather than an error.
pub fn is_applicable(enchantment_id: &str, item_id: &str, catalog: &Catalog) -> bool {
    let Some(ench) = catalog.enchantment(enchantment_id) else {
        return false;
    };
    let Some(item) = catalog.item(item_id) else {
        return false;
    };
    if ench.target.is_empty() {
        return true;
    }
    if ench.target == item.id {
        return true;
    }
    let target = ench.target.to_ascii_lowercase();
    let category = item.category.to_ascii_lowercase();
    category.contains(&target) || target.contains(&category)
}

/// Check every applied level against its definition's bound.
///
/// Enchantments the catalog does not know pass unchecked, consistent with
/// the unknown-is-harmless rule applied at load time.
pub fn check_levels(
    applied: &[AppliedEnchantment],
    catalog: &Catalog,
) -> Result<(), LevelError> {
    for a in applied {
        if let Some(def) = catalog.enchantment(&a.id) {
            if a.level < 1 || a.level > def.max_level {
                return Err(LevelError {
                    id: a.id.clone(),
                    level: a.level,
                    max: def.max_level,
                });
            }
        }
    }
    Ok(())
}
