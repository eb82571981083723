// src/config.rs

//! Configuration for rendering lane views and for the `simd-lanes` binary.
//!
//! The structs deserialize from JSON. Every field has a default, so a config
//! file only needs to mention what it changes. The lane decomposition itself
//! has no settings: it is a pure function of the register bits.

use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::LaneError;
use crate::register::RegisterWidth;

/// Environment variable naming a JSON config file to load.
pub const CONFIG_ENV_VAR: &str = "SIMD_LANES_CONFIG";

/// Global configuration, loaded on first use.
///
/// Loading never logs: the binary reads this before its logger exists and
/// reports `LoadedConfig::ignored` itself once logging is up.
pub static CONFIG: Lazy<LoadedConfig> = Lazy::new(Config::load_or_default);

// --- Top-Level Configuration Structure ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// How lane elements are printed.
    pub display: DisplayConfig,
    /// Logger settings for the binary.
    pub logging: LoggingConfig,
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self, LaneError> {
        serde_json::from_str(json).map_err(|e| LaneError::Parse(format!("config: {}", e)))
    }

    pub fn load(path: &Path) -> Result<Self, LaneError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| LaneError::Parse(format!("reading {}: {}", path.display(), e)))?;
        serde_json::from_str(&text)
            .map_err(|e| LaneError::Parse(format!("config {}: {}", path.display(), e)))
    }

    /// Loads `path` if one is given; no path means the defaults.
    pub fn load_optional(path: Option<&Path>) -> Result<Self, LaneError> {
        match path {
            Some(path) => Config::load(path),
            None => Ok(Config::default()),
        }
    }

    /// Loads the file named by `SIMD_LANES_CONFIG`, falling back to defaults
    /// when the variable is unset or the file is unusable. A rejected file is
    /// handed back in `LoadedConfig::ignored` for the caller to report.
    pub fn load_or_default() -> LoadedConfig {
        let path = std::env::var_os(CONFIG_ENV_VAR);
        LoadedConfig::from_result(Config::load_optional(path.as_deref().map(Path::new)))
    }
}

/// The configuration in effect, plus the error that caused a config file to
/// be skipped, if any.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub ignored: Option<LaneError>,
}

impl LoadedConfig {
    pub fn from_result(result: Result<Config, LaneError>) -> Self {
        match result {
            Ok(config) => LoadedConfig {
                config,
                ignored: None,
            },
            Err(e) => LoadedConfig {
                config: Config::default(),
                ignored: Some(e),
            },
        }
    }
}

// --- Display Configuration ---

/// Number base used when printing lane elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Radix {
    /// Natural form: unsigned decimal for `u*` lanes, signed for `i*` lanes.
    #[default]
    Decimal,
    /// Raw element bit pattern, zero-padded to the lane width.
    Hex,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub radix: Radix,
    /// Placed between elements of one lane.
    pub separator: String,
    /// Register widths that may be decomposed. Others are rejected.
    pub widths: Vec<RegisterWidth>,
}

impl DisplayConfig {
    pub fn allows(&self, width: RegisterWidth) -> bool {
        self.widths.contains(&width)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            radix: Radix::Decimal,
            separator: ", ".to_string(),
            widths: RegisterWidth::ALL.to_vec(),
        }
    }
}

// --- Logging Configuration ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `env_logger` filter used when `RUST_LOG` is not set.
    pub default_filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            default_filter: "warn".to_string(),
        }
    }
}
