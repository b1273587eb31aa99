//! Kit export commands.

use crate::kit_file;
use anyhow::{Context, Result};
use kitforge::Catalog;
use std::fs::File;
use std::path::Path;

pub fn nbt(data_dir: &Path, kit_path: &Path, output: &Path) -> Result<()> {
    let kit = kit_file::load(kit_path)?;
    let catalog = Catalog::load(data_dir, &kit.version)?;
    let grid = kit_file::build_grid(&kit, &catalog)?;

    let tag = kitforge::to_container(&grid, &catalog)?;
    let file =
        File::create(output).with_context(|| format!("creating {}", output.display()))?;
    tag.write_gzip(file)
        .with_context(|| format!("writing {}", output.display()))?;

    println!("wrote {}", output.display());
    Ok(())
}

pub fn command(data_dir: &Path, kit_path: &Path) -> Result<()> {
    let kit = kit_file::load(kit_path)?;
    let catalog = Catalog::load(data_dir, &kit.version)?;
    let grid = kit_file::build_grid(&kit, &catalog)?;

    println!("{}", kitforge::to_command_string(&grid, &catalog)?);
    Ok(())
}
