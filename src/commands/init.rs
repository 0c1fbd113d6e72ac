use anyhow::{bail, Result};
use std::path::Path;

use rpawogen::configtool::Defaults;

pub fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("Config file already exists at {} (use --force to overwrite)", path.display());
    }
    Defaults::default().save(path)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}
