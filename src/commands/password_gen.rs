use anyhow::{Context, Result};
use log::info;

use rpawogen::ClassSet;
use rpawogen::passgen::{self, GenerationConfig};
use rpawogen::shell::format_entry;

pub fn generate_random(
    length: usize,
    no_uppercase: bool,
    no_lowercase: bool,
    no_numbers: bool,
    no_special: bool,
    count: usize,
) -> Result<()> {
    let enabled = ClassSet::from_flags(!no_lowercase, !no_uppercase, !no_numbers, !no_special);
    let config = GenerationConfig::new(length, enabled);
    info!("generating {} password(s) of length {}", count, length);

    println!("--- Generated Passwords (Length: {}) ---", length);
    for index in 1..=count {
        let password = passgen::generate(&config).context("Failed to generate password")?;
        println!("{}", format_entry(index, &password));
    }
    Ok(())
}
