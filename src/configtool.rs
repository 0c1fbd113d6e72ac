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
// Config Tools

use dirs::config_dir;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::{fs, io, path::{Path, PathBuf}};

use crate::charclass::ClassSet;
use crate::errors::ConfigError;
use crate::passgen::DEFAULT_LENGTH;

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 50;
pub const MIN_COUNT: usize = 1;
pub const MAX_COUNT: usize = 10;
pub const CONFIG_FILE: &str = "config.json";

/// Defaults offered by the interactive prompts and the `gen` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub count: usize,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
            count: MIN_COUNT,
        }
    }
}

impl Defaults {
    pub fn classes(&self) -> ClassSet {
        ClassSet::from_flags(self.lowercase, self.uppercase, self.digits, self.symbols)
    }

    /// Pull out-of-range values back to the built-in defaults.
    pub fn clamped(mut self) -> Self {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&self.length) {
            self.length = DEFAULT_LENGTH;
        }
        if !(MIN_COUNT..=MAX_COUNT).contains(&self.count) {
            self.count = MIN_COUNT;
        }
        self
    }

    /// Load from `path`. A missing file yields the built-in defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no config at {}, using built-in defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(ConfigError::IoError { path: path.to_path_buf(), source: e });
            }
        };
        let defaults: Self = serde_json::from_str(&content)
            .map_err(|e| ConfigError::JsonError { path: path.to_path_buf(), source: e })?;
        info!("loaded defaults from {}", path.display());
        Ok(defaults.clamped())
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::IoError { path: parent.to_path_buf(), source: e })?;
        }
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::JsonError { path: path.to_path_buf(), source: e })?;
        fs::write(path, content)
            .map_err(|e| ConfigError::IoError { path: path.to_path_buf(), source: e })
    }
}

pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    match config_dir() {
        Some(path) => Ok(path.join("rpawogen")),
        None => Err(ConfigError::ConfigDirError(
            "Could not determine configuration directory".to_string(),
        )),
    }
}

/// `--config` if given, otherwise `<config dir>/rpawogen/config.json`.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(get_config_dir()?.join(CONFIG_FILE)),
    }
}
