// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sync options management.
//!
//! Options are stored as TOML and passed explicitly into retrieval via
//! [`ResourceFilter::with_options`](crate::query::ResourceFilter::with_options);
//! there is no process-wide singleton.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// User-configurable retrieval options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncOptions {
    /// Name prefixes excluded from retrieval, in the order given.
    pub excluded_prefixes: Vec<String>,
    /// Whether vendor-shipped resources are hidden from retrieval.
    pub hide_vendor: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        SyncOptions {
            excluded_prefixes: Vec::new(),
            hide_vendor: true,
        }
    }
}

impl SyncOptions {
    /// Loads options from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Options(format!("failed to read options: {}", e)))?;
        let options: SyncOptions = toml::from_str(&content)
            .map_err(|e| Error::Options(format!("failed to parse options: {}", e)))?;
        Ok(options)
    }

    /// Saves options to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Options(format!("failed to serialize options: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
