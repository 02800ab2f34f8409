//! Configuration system for the calculator.
//!
//! This module defines all configuration structures used to parameterize the
//! calculator. It provides:
//! 1. **Defaults:** Baseline tape geometry and arithmetic limits.
//! 2. **Structures:** Per-concern sections for general dispatch, the tape machine and the cell engine.
//! 3. **Enums:** The evaluation mode.
//!
//! Configuration is supplied as JSON (`Config::from_json`) or built with `Config::default()`.

use std::path::PathBuf;

use serde::Deserialize;

use crate::common::ConfigError;

/// Default configuration constants.
mod defaults {
    use crate::common::constants;

    /// Cells on the tape.
    pub const TAPE_SIZE: usize = constants::TAPE_SIZE;

    /// Largest exponent accepted by big-number power.
    pub const MAX_EXPONENT: u64 = constants::MAX_EXPONENT;

    /// Largest estimated result size (bits) accepted by big-number power.
    pub const MAX_RESULT_BITS: u64 = constants::MAX_RESULT_BITS;
}

/// Evaluation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Mode {
    /// Run the operator's program on the tape machine; operands and result are single cells.
    #[serde(alias = "8bit")]
    EightBit,
    /// Emulate the operation over base-256 cell sequences of any length.
    #[default]
    #[serde(alias = "big")]
    BigNumber,
}

impl Mode {
    /// Banner line describing the mode.
    pub const fn describe(self) -> &'static str {
        match self {
            Self::EightBit => "8-bit (results modulo 256)",
            Self::BigNumber => "Big numbers (no limits)",
        }
    }
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use bfcalc_core::config::{Config, Mode};
///
/// let config = Config::default();
/// assert_eq!(config.general.mode, Mode::BigNumber);
/// assert_eq!(config.machine.tape_size, 30_000);
/// ```
///
/// Deserializing from JSON; omitted sections keep their defaults:
///
/// ```
/// use bfcalc_core::config::{Config, Mode};
///
/// let json = r#"{
///     "general": { "mode": "8bit" },
///     "machine": { "tape_size": 64, "step_limit": 100000, "trace": false }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.general.mode, Mode::EightBit);
/// assert_eq!(config.machine.step_limit, Some(100_000));
/// assert_eq!(config.arith.max_exponent, 1000);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Mode selection and program location.
    pub general: GeneralConfig,
    /// Tape machine settings.
    pub machine: MachineConfig,
    /// Cell arithmetic limits.
    pub arith: ArithConfig,
}

impl Config {
    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed documents and
    /// [`ConfigError::Invalid`] when validation fails.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values the engines cannot run with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.machine.tape_size == 0 {
            return Err(ConfigError::Invalid("machine.tape_size must be at least 1"));
        }
        if matches!(self.machine.step_limit, Some(0)) {
            return Err(ConfigError::Invalid("machine.step_limit must be at least 1"));
        }
        Ok(())
    }
}

/// Mode selection and program location.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Mode used by `Calculator::calculate`.
    pub mode: Mode,
    /// Directory holding `addition.bf`, `subtraction.bf`, ... ; built-in programs fill any gap.
    pub modules_dir: Option<PathBuf>,
}

/// Tape machine settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Number of cells; the pointer wraps modulo this.
    pub tape_size: usize,
    /// Optional ceiling on executed instructions. `None` runs until the program ends.
    pub step_limit: Option<u64>,
    /// Emit a `tracing` event for every executed instruction.
    pub trace: bool,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            tape_size: defaults::TAPE_SIZE,
            step_limit: None,
            trace: false,
        }
    }
}

/// Cell arithmetic limits.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ArithConfig {
    /// Largest exponent big-number power accepts.
    pub max_exponent: u64,
    /// Largest estimated result size in bits big-number power accepts.
    pub max_result_bits: u64,
}

impl Default for ArithConfig {
    fn default() -> Self {
        Self {
            max_exponent: defaults::MAX_EXPONENT,
            max_result_bits: defaults::MAX_RESULT_BITS,
        }
    }
}
