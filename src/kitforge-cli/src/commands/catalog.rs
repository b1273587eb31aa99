//! Catalog inspection commands.

use anyhow::Result;
use kitforge::Catalog;
use std::path::Path;

pub fn items(data_dir: &Path, version: &str, json: bool) -> Result<()> {
    let catalog = Catalog::load(data_dir, version)?;
    let mut all: Vec<_> = catalog.items().collect();
    all.sort_by(|a, b| a.id.cmp(&b.id));

    if json {
        println!("{}", serde_json::to_string_pretty(&all)?);
        return Ok(());
    }

    println!(
        "{:<36} {:<24} {:<12} {:>5}  ZONES",
        "ID", "NAME", "CATEGORY", "STACK"
    );
    for item in all {
        let zones = if item.slots.is_empty() {
            "any".to_string()
        } else {
            item.slots.join(",")
        };
        println!(
            "{:<36} {:<24} {:<12} {:>5}  {}",
            item.id, item.name, item.category, item.max_stack, zones
        );
    }
    Ok(())
}

pub fn enchantments(data_dir: &Path, version: &str, json: bool) -> Result<()> {
    let catalog = Catalog::load(data_dir, version)?;
    let mut all: Vec<_> = catalog.enchantments().collect();
    all.sort_by(|a, b| a.id.cmp(&b.id));

    if json {
        println!("{}", serde_json::to_string_pretty(&all)?);
        return Ok(());
    }

    println!(
        "{:<36} {:<20} {:>9}  {:<12} CONFLICTS",
        "ID", "NAME", "MAX LEVEL", "TARGET"
    );
    for ench in all {
        let mut conflicts: Vec<_> = catalog.conflicts_of(&ench.id).collect();
        conflicts.sort_unstable();
        println!(
            "{:<36} {:<20} {:>9}  {:<12} {}",
            ench.id,
            ench.name,
            ench.max_level,
            if ench.target.is_empty() {
                "any"
            } else {
                ench.target.as_str()
            },
            conflicts.join(",")
        );
    }
    Ok(())
}
