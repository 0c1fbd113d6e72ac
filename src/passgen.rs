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
// Password generator

use log::{debug, trace};
use rand::Rng;
use rand::rngs::OsRng;

use crate::charclass::{CharacterClass, ClassSet};
use crate::errors::PassgenError;

pub const DEFAULT_LENGTH: usize = 12;

/// Source of uniform random choices.
///
/// The generator only ever asks for an index below a bound; `choice` is
/// derived from it. Implement this on a stub to make generation
/// reproducible in tests.
pub trait RandomSource {
    /// Uniform index in `0..upper`. `upper` is never zero.
    fn index(&mut self, upper: usize) -> usize;

    /// Uniform pick from a non-empty alphabet.
    fn choice(&mut self, alphabet: &[char]) -> char {
        alphabet[self.index(alphabet.len())]
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn index(&mut self, upper: usize) -> usize {
        (**self).index(upper)
    }

    fn choice(&mut self, alphabet: &[char]) -> char {
        (**self).choice(alphabet)
    }
}

/// Adapter from any `rand::Rng` to [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl RngSource<OsRng> {
    /// The operating system's secure generator. Needs no seeding.
    pub fn os() -> Self {
        RngSource(OsRng)
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn index(&mut self, upper: usize) -> usize {
        self.0.gen_range(0..upper)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: usize,
    pub enabled: ClassSet,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            enabled: ClassSet::all(),
        }
    }
}

impl GenerationConfig {
    pub fn new(length: usize, enabled: ClassSet) -> Self {
        Self { length, enabled }
    }

    pub fn validate(&self) -> Result<(), PassgenError> {
        if self.enabled.is_empty() {
            return Err(PassgenError::InvalidConfig(
                "at least one character class must be enabled".to_string(),
            ));
        }
        if self.length == 0 {
            return Err(PassgenError::InvalidConfig(
                "password length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Concatenated character sets of the enabled classes, in canonical order.
    pub fn alphabet(&self) -> Vec<char> {
        self.enabled
            .iter()
            .flat_map(|class| class.charset().chars())
            .collect()
    }

    /// Classes the output must contain. When the password is shorter than
    /// the number of enabled classes only the first `length` of them (in
    /// canonical order) can be guaranteed.
    pub fn required_classes(&self) -> Vec<CharacterClass> {
        self.enabled.iter().take(self.length).collect()
    }
}

/// Generate a password from the OS secure random source.
pub fn generate(config: &GenerationConfig) -> Result<String, PassgenError> {
    generate_with(config, &mut RngSource::os())
}

/// Generate a password drawing every random decision from `rng`.
pub fn generate_with<S>(config: &GenerationConfig, rng: &mut S) -> Result<String, PassgenError>
where
    S: RandomSource + ?Sized,
{
    config.validate()?;

    let alphabet = config.alphabet();
    trace!("alphabet of {} characters for {} classes", alphabet.len(), config.enabled.len());

    let mut password: Vec<char> = (0..config.length).map(|_| rng.choice(&alphabet)).collect();
    let fixed = ensure_classes(&mut password, &config.required_classes(), rng);
    if fixed > 0 {
        debug!("overwrote {} position(s) to include missing classes", fixed);
    }

    Ok(password.into_iter().collect())
}

/// Overwrite distinct, randomly chosen positions so every required class
/// appears at least once. A position holding the only occurrence of a
/// required class is never chosen. Returns the number of overwritten positions.
fn ensure_classes<S>(password: &mut [char], required: &[CharacterClass], rng: &mut S) -> usize
where
    S: RandomSource + ?Sized,
{
    let mut counts = [0usize; 4];
    for c in password.iter() {
        if let Some(class) = CharacterClass::of(*c) {
            counts[class as usize] += 1;
        }
    }

    let missing: Vec<CharacterClass> = required
        .iter()
        .copied()
        .filter(|class| counts[*class as usize] == 0)
        .collect();
    if missing.is_empty() {
        return 0;
    }

    // Lazy Fisher-Yates: visit positions in random order, stop once enough are picked.
    let mut positions: Vec<usize> = (0..password.len()).collect();
    let mut targets = Vec::with_capacity(missing.len());
    for i in 0..positions.len() {
        if targets.len() == missing.len() {
            break;
        }
        let j = i + rng.index(positions.len() - i);
        positions.swap(i, j);
        let pos = positions[i];

        match CharacterClass::of(password[pos]) {
            Some(class) if required.contains(&class) => {
                if counts[class as usize] > 1 {
                    counts[class as usize] -= 1;
                    targets.push(pos);
                }
            }
            _ => targets.push(pos),
        }
    }
    debug_assert_eq!(targets.len(), missing.len());

    for (pos, class) in targets.iter().zip(&missing) {
        password[*pos] = rng.choice(&class.chars());
    }
    targets.len()
}
