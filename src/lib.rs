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
// Random password generator with a strength heuristic.

pub mod charclass;
pub mod configtool;
pub mod errors;
pub mod passgen;
pub mod shell;
pub mod strength;

pub use charclass::{CharacterClass, ClassSet};
pub use errors::{ConfigError, PassgenError};
pub use passgen::{generate, generate_with, GenerationConfig, RandomSource, RngSource};
pub use strength::{assess, StrengthLabel};
