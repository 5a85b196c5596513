//! Run profiles on disk
//!
//! The binary reads a single `Configuration` from a JSON file. Missing fields
//! fall back to their defaults.

use std::path::Path;

use crate::domain::{Configuration, WaveError, WaveResult};

/// Read a profile from a JSON file
pub fn load_file(path: &Path) -> WaveResult<Configuration> {
    let json = std::fs::read_to_string(path).map_err(|e| {
        WaveError::Storage(format!("Failed to read config {}: {e}", path.display()))
    })?;
    let config: Configuration = serde_json::from_str(&json).map_err(|e| {
        WaveError::Storage(format!("Failed to parse config {}: {e}", path.display()))
    })?;
    log::debug!("loaded profile '{}' from {}", config.name, path.display());
    Ok(config)
}
