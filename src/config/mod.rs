//! Compiler settings
//!
//! Settings are read from an optional TOML file:
//!
//! ```toml
//! debug = true
//!
//! [registers]
//! word = 16
//! byte = 16
//! ```
//!
//! Missing keys fall back to their defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, bail};
use serde::Deserialize;

/// Register ids are written as a single byte
pub const MAX_REGISTERS: usize = 256;

/// Sizes of the two register pools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegisterConfig {
    /// 4-byte registers, holding ints and floats
    pub word: usize,
    /// 1-byte registers, holding bools and chars
    pub byte: usize,
}

impl RegisterConfig {
    pub fn total(&self) -> usize {
        self.word + self.byte
    }
}

impl Default for RegisterConfig {
    fn default() -> Self {
        Self { word: 16, byte: 16 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Write token, AST and bytecode dumps to the diagnostics sink
    pub debug: bool,
    pub registers: RegisterConfig,
}

impl Settings {
    pub fn from_toml_str(source: &str) -> anyhow::Result<Settings> {
        let settings: Settings = toml::from_str(source).context("invalid settings")?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> anyhow::Result<Settings> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("could not read config file {}", path.display()))?;
        Settings::from_toml_str(&source)
            .with_context(|| format!("in config file {}", path.display()))
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let registers = &self.registers;
        if registers.word == 0 || registers.byte == 0 {
            bail!(
                "register pools must not be empty (word = {}, byte = {})",
                registers.word,
                registers.byte
            );
        }
        if registers.total() > MAX_REGISTERS {
            bail!(
                "at most {} registers are addressable, {} configured",
                MAX_REGISTERS,
                registers.total()
            );
        }
        Ok(())
    }
}
