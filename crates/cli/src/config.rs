// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Defaults file handling
//!
//! A small TOML file supplies what the original deployment read from
//! its key-value config: the default period format, the tick cadence
//! and the loop/countdown flags.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// The stock schedule used when no format is given anywhere
pub const DEFAULT_FORMAT: &str = "(4xWork:25,Break:5),Long_Break:15";

/// Name looked up in the working directory when `--config` is absent
const DEFAULT_FILE: &str = "marinara.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    /// Period format used when the command line gives none
    pub format: String,
    /// Seconds between driver ticks
    pub step_seconds: u64,
    /// Restart at period 0 after the last period
    pub repeat: bool,
    /// Show remaining rather than elapsed time
    pub countdown: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
            step_seconds: 2,
            repeat: true,
            countdown: true,
        }
    }
}

impl Defaults {
    /// Load defaults from `path`, from `marinara.toml` in the working
    /// directory, or fall back to the built-ins.
    ///
    /// An explicitly given path must exist and parse; the implicit file
    /// is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let candidate = match path {
            Some(p) => p,
            None => {
                let implicit = Path::new(DEFAULT_FILE);
                if !implicit.exists() {
                    return Ok(Self::default());
                }
                implicit
            }
        };
        let raw = std::fs::read_to_string(candidate)
            .with_context(|| format!("reading {}", candidate.display()))?;
        let defaults = toml::from_str(&raw)
            .with_context(|| format!("parsing {}", candidate.display()))?;
        Ok(defaults)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
