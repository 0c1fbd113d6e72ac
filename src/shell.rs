//  ____  ____     __        __      ____
// |  _ \|  _ \ __ \ \      / /__   / ___| ___ _ __
// | |_) | |_) / _` \ \ /\ / / _ \ | |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_) || |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/  \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-04
// Version : 0.1.0
// License : Mulan PSL v2
//
// Interactive prompt loop

use log::{debug, warn};
use std::io::{self, BufRead, Write};

use crate::charclass::ClassSet;
use crate::configtool::{Defaults, MAX_COUNT, MAX_LENGTH, MIN_COUNT, MIN_LENGTH};
use crate::passgen::{self, GenerationConfig, RandomSource};
use crate::strength::assess;

/// Parse the length answer. Falls back to `default` on empty, unparsable or
/// out-of-range input; the second value is the notice to show the user.
pub fn parse_length(input: &str, default: usize) -> (usize, Option<String>) {
    let input = input.trim();
    if input.is_empty() {
        return (default, None);
    }
    match input.parse::<i64>() {
        Ok(n) if (MIN_LENGTH as i64..=MAX_LENGTH as i64).contains(&n) => (n as usize, None),
        Ok(_) => (
            default,
            Some(format!(
                "Length must be between {} and {}. Using default {}.",
                MIN_LENGTH, MAX_LENGTH, default
            )),
        ),
        Err(_) => (default, Some(format!("Invalid input. Using default {}.", default))),
    }
}

/// Only an explicit 'n' disables a class; empty input keeps `default`.
pub fn parse_toggle(input: &str, default: bool) -> bool {
    let input = input.trim();
    if input.is_empty() {
        return default;
    }
    !input.eq_ignore_ascii_case("n")
}

pub fn parse_count(input: &str, default: usize) -> usize {
    let input = input.trim();
    if input.is_empty() {
        return default;
    }
    match input.parse::<i64>() {
        Ok(n) if (MIN_COUNT as i64..=MAX_COUNT as i64).contains(&n) => n as usize,
        _ => MIN_COUNT,
    }
}

pub fn parse_continue(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}

pub fn format_entry(index: usize, password: &str) -> String {
    format!("{}. {} (Strength: {})", index, password, assess(password))
}

fn yes_no(default: bool) -> &'static str {
    if default { "y" } else { "n" }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub config: GenerationConfig,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Configure,
    Continue,
    Done,
}

/// Prompt, generate and display until the user declines or input ends.
pub struct Shell<R, W, S> {
    input: R,
    output: W,
    rng: S,
    defaults: Defaults,
}

impl<R: BufRead, W: Write, S: RandomSource> Shell<R, W, S> {
    pub fn new(input: R, output: W, rng: S, defaults: Defaults) -> Self {
        Self { input, output, rng, defaults }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the loop and returns the number of completed rounds.
    pub fn run(&mut self) -> io::Result<usize> {
        writeln!(self.output, "=== Secure Password Generator ===")?;
        writeln!(self.output, "Generate strong, random passwords for your accounts.")?;

        let mut rounds = 0;
        let mut state = State::Configure;
        while state != State::Done {
            state = match state {
                State::Configure => match self.configure()? {
                    Some(request) => {
                        self.display(&request)?;
                        rounds += 1;
                        State::Continue
                    }
                    None => State::Done,
                },
                State::Continue => match self.prompt("\nGenerate more? (y/n): ")? {
                    Some(answer) if parse_continue(&answer) => State::Configure,
                    _ => State::Done,
                },
                State::Done => State::Done,
            };
        }

        writeln!(self.output, "Stay secure! Remember to store passwords safely (e.g., in a manager).")?;
        self.output.flush()?;
        Ok(rounds)
    }

    /// `None` once input is exhausted.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("input closed");
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn toggle(&mut self, what: &str, default: bool) -> io::Result<bool> {
        let text = format!("Include {}? (y/n, default {}): ", what, yes_no(default));
        let answer = self.prompt(&text)?.unwrap_or_default();
        Ok(parse_toggle(&answer, default))
    }

    fn configure(&mut self) -> io::Result<Option<Request>> {
        let defaults = self.defaults.clone();
        let text = format!(
            "\nEnter password length ({}-{}, default {}): ",
            MIN_LENGTH, MAX_LENGTH, defaults.length
        );
        let Some(answer) = self.prompt(&text)? else {
            return Ok(None);
        };
        let (length, notice) = parse_length(&answer, defaults.length);
        if let Some(notice) = notice {
            writeln!(self.output, "{}", notice)?;
        }

        let uppercase = self.toggle("uppercase letters", defaults.uppercase)?;
        let lowercase = self.toggle("lowercase letters", defaults.lowercase)?;
        let digits = self.toggle("numbers", defaults.digits)?;
        let symbols = self.toggle("symbols", defaults.symbols)?;

        let text = format!(
            "How many passwords to generate? ({}-{}, default {}): ",
            MIN_COUNT, MAX_COUNT, defaults.count
        );
        let answer = self.prompt(&text)?.unwrap_or_default();
        let count = parse_count(&answer, defaults.count);

        let enabled = ClassSet::from_flags(lowercase, uppercase, digits, symbols);
        Ok(Some(Request {
            config: GenerationConfig::new(length, enabled),
            count,
        }))
    }

    fn display(&mut self, request: &Request) -> io::Result<()> {
        writeln!(
            self.output,
            "\n--- Generated Passwords (Length: {}) ---",
            request.config.length
        )?;
        for index in 1..=request.count {
            match passgen::generate_with(&request.config, &mut self.rng) {
                Ok(password) => writeln!(self.output, "{}", format_entry(index, &password))?,
                Err(e) => {
                    warn!("generation failed: {}", e);
                    writeln!(self.output, "Error: {}", e)?;
                    break;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_parsing() {
        assert_eq!(parse_length("", 12), (12, None));
        assert_eq!(parse_length("20\n", 12), (20, None));
        assert_eq!(parse_length(" 8 ", 12), (8, None));
        assert_eq!(parse_length("50", 12), (50, None));

        let (length, notice) = parse_length("7", 12);
        assert_eq!(length, 12);
        assert_eq!(notice.as_deref(), Some("Length must be between 8 and 50. Using default 12."));

        let (length, notice) = parse_length("-3", 12);
        assert_eq!(length, 12);
        assert!(notice.is_some());

        let (length, notice) = parse_length("twelve", 12);
        assert_eq!(length, 12);
        assert_eq!(notice.as_deref(), Some("Invalid input. Using default 12."));
    }

    #[test]
    fn toggle_parsing() {
        assert!(parse_toggle("", true));
        assert!(!parse_toggle("", false));
        assert!(!parse_toggle("n\n", true));
        assert!(!parse_toggle("N", true));
        assert!(parse_toggle("y", false));
        assert!(parse_toggle("no", true));
    }

    #[test]
    fn count_parsing() {
        assert_eq!(parse_count("", 1), 1);
        assert_eq!(parse_count("", 3), 3);
        assert_eq!(parse_count("10", 1), 10);
        assert_eq!(parse_count("11", 3), 1);
        assert_eq!(parse_count("0", 3), 1);
        assert_eq!(parse_count("lots", 3), 1);
    }

    #[test]
    fn continue_parsing() {
        assert!(parse_continue("y\n"));
        assert!(parse_continue("Y"));
        assert!(!parse_continue("yes"));
        assert!(!parse_continue(""));
        assert!(!parse_continue("n"));
    }

    #[test]
    fn entry_format() {
        assert_eq!(format_entry(3, "Abc123!@"), "3. Abc123!@ (Strength: Very Strong)");
    }
}
