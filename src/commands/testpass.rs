use anyhow::{Context, Result};
use rpassword::read_password;
use std::io::{self, Write};

use rpawogen::strength;

fn read_password_from_stdin(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush().context("Failed to flush output")?;
    read_password().context("Failed to read password")
}

pub fn test_password(password: Option<String>, detailed: bool) -> Result<()> {
    let password = match password {
        Some(password) => password,
        None => read_password_from_stdin("Enter password to check: ")?,
    };

    if !detailed {
        println!("Strength: {}", strength::assess(&password));
        return Ok(());
    }

    let analysis = strength::analyze(&password);
    println!("Strength: {} (score: {})", analysis.label, analysis.score);
    println!("Estimate: {} ({}/4)", analysis.rating, analysis.estimate_score);
    if let Some(warning) = &analysis.warning {
        println!("Warning: {}", warning);
    }
    if !analysis.suggestions.is_empty() {
        println!("Suggestions: {}", analysis.suggestions.join(" "));
    }
    Ok(())
}
