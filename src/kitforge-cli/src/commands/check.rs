//! Kit layout validation.

use crate::kit_file;
use anyhow::Result;
use kitforge::Catalog;
use std::path::Path;

pub fn run(data_dir: &Path, kit_path: &Path) -> Result<()> {
    let kit = kit_file::load(kit_path)?;
    let catalog = Catalog::load(data_dir, &kit.version)?;
    let grid = kit_file::build_grid(&kit, &catalog)?;

    println!(
        "{}: ok ({} of {} slots occupied, catalog {})",
        kit_path.display(),
        grid.occupied_slots().count(),
        grid.capacity(),
        catalog.version()
    );
    Ok(())
}
