//! Core implementation of the qfile command launcher
//!
//! qfile reads a per-directory TOML file mapping short keys to shell commands, each with an
//! optional label and working directory. Given a key it prints a ready-to-run command string
//! for the calling shell to evaluate; it never runs anything itself.

use std::path::Path;

use log::debug;

use crate::config_file::{Config, ConfigError};
use crate::mappings::MappingTable;

pub mod config_file;
pub mod generate;
pub mod logger;
pub mod mappings;
pub mod resolve;

/// Load the mapping table from a config file.
///
/// A file without a `[mappings]` section yields an empty table.
///
/// # Errors
///
/// Returns `ConfigError` if the config file is not found, cannot be read or parsed,
/// or contains a mapping with an invalid shape or an empty command.
pub fn load_config(config_path: &Path) -> Result<MappingTable, ConfigError> {
    if !config_path.exists() {
        return Err(ConfigError::ConfigNotFound(config_path.to_path_buf()));
    }
    debug!("Loading mappings from {}", config_path.display());
    let parsed = Config::from_file(config_path)?;
    let table = MappingTable::try_from(parsed)?;
    debug!("Found {} mapping(s)", table.len());
    Ok(table)
}
