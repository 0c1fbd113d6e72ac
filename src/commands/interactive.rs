use anyhow::{Context, Result};
use log::info;
use std::io;

use rpawogen::RngSource;
use rpawogen::configtool::Defaults;
use rpawogen::shell::Shell;

pub fn run_interactive(defaults: Defaults) -> Result<()> {
    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout(), RngSource::os(), defaults);
    let rounds = shell.run().context("Interactive session failed")?;
    info!("session finished after {} round(s)", rounds);
    Ok(())
}
