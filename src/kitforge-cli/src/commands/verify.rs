//! Round-trip verification of the command encoding.

use crate::kit_file;
use anyhow::{bail, Context, Result};
use kitforge::Catalog;
use std::path::Path;

pub fn run(data_dir: &Path, kit_path: &Path) -> Result<()> {
    let kit = kit_file::load(kit_path)?;
    let catalog = Catalog::load(data_dir, &kit.version)?;
    let grid = kit_file::build_grid(&kit, &catalog)?;

    let line = kitforge::to_command_string(&grid, &catalog)?;
    let parsed = kitforge::parse_command_string(&line)?;

    let occupied = grid.occupied_slots().count();
    if parsed.len() != occupied {
        bail!(
            "round-trip lost entries: {} parsed, {} occupied",
            parsed.len(),
            occupied
        );
    }
    for entry in &parsed {
        let occupant = grid
            .occupant(entry.slot)
            .with_context(|| format!("parsed entry for vacant slot {}", entry.slot))?;
        if occupant.item_id != entry.item_id || occupant.enchantments != entry.enchantments {
            bail!("round-trip mismatch in slot {}", entry.slot);
        }
    }

    println!("ok: {} entries round-tripped", parsed.len());
    Ok(())
}
