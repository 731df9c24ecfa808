//! Configuration file handling for qfile

use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::mappings::{MappingEntry, MappingTable};

/// Config file looked up in the current directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = ".mg_qfile.toml";

/// Errors that can occur while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),
    #[error("Unable to read config file {path}: {source}")]
    Read {
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("Unable to parse TOML config file {path}: {detail}")]
    Toml {
        source: toml::de::Error,
        path: PathBuf,
        detail: String,
    },
    #[error("Invalid mapping `{key}`: {detail}")]
    Entry {
        source: toml::de::Error,
        key: String,
        detail: String,
    },
    #[error("Mapping `{0}` has an empty cmd string")]
    EmptyCommand(String),
}

/// Collapse a multi-line parser message into a single line.
fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Describe a document parse error on one line, with its position when known.
fn describe_parse_error(err: &toml::de::Error, contents: &str) -> String {
    let message = single_line(err.message());
    let Some(span) = err.span() else {
        return message;
    };
    let before = &contents[..span.start.min(contents.len())];
    let line = before.matches('\n').count() + 1;
    let column = before
        .rsplit('\n')
        .next()
        .map_or(0, |tail| tail.chars().count())
        + 1;
    format!("line {line}, column {column}: {message}")
}

/// Configuration for a single mapping, as written in the file
#[derive(Debug, Deserialize, Serialize)]
pub struct ConfigEntry {
    pub cmd: String,
    pub label: Option<String>,
    pub wd: Option<String>,
}

impl From<ConfigEntry> for MappingEntry {
    fn from(config: ConfigEntry) -> Self {
        MappingEntry {
            command: config.cmd,
            label: config.label,
            working_directory: config.wd,
        }
    }
}

/// Root configuration structure for qfile
///
/// Mappings are kept as a raw table so their document order survives parsing.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub mappings: toml::Table,
}

impl Config {
    /// Loads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Read` if the file cannot be read, or
    /// `ConfigError::Toml` if it is not a valid qfile document.
    pub fn from_file(file: &Path) -> Result<Config, ConfigError> {
        let contents = std::fs::read_to_string(file).map_err(|e| ConfigError::Read {
            source: e,
            path: file.to_path_buf(),
        })?;
        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            detail: describe_parse_error(&e, &contents),
            source: e,
            path: file.to_path_buf(),
        })
    }
}

impl TryFrom<Config> for MappingTable {
    type Error = ConfigError;

    fn try_from(config: Config) -> Result<Self, Self::Error> {
        config
            .mappings
            .into_iter()
            .map(|(key, value)| {
                let entry = match value.try_into::<ConfigEntry>() {
                    Ok(entry) => entry,
                    Err(source) => {
                        return Err(ConfigError::Entry {
                            detail: single_line(&source.to_string()),
                            source,
                            key,
                        });
                    }
                };
                if entry.cmd.trim().is_empty() {
                    return Err(ConfigError::EmptyCommand(key));
                }
                debug!("Loaded mapping '{key}': {}", entry.cmd);
                Ok((key, MappingEntry::from(entry)))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(contents: &str) -> Result<MappingTable, ConfigError> {
        let config: Config = toml::from_str(contents).unwrap();
        MappingTable::try_from(config)
    }

    #[test]
    fn test_from_file_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&path, "[mappings]\na = { cmd = \"htop\" }\n").unwrap();
        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.mappings.len(), 1);
    }

    #[test]
    fn test_missing_mappings_section_is_empty() {
        let table = parse("title = \"nothing here\"\n").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_optional_fields_stay_absent() {
        let table = parse("[mappings]\na = { cmd = \"htop\" }\n").unwrap();
        let entry = table.get("a").unwrap();
        assert_eq!(entry.command, "htop");
        assert_eq!(entry.label, None);
        assert_eq!(entry.working_directory, None);
    }

    #[test]
    fn test_document_order_is_kept() {
        let table = parse(
            "[mappings]\nz = { cmd = \"zsh\" }\nb = { cmd = \"ls\" }\nk = { cmd = \"kubectl get pods\" }\n",
        )
        .unwrap();
        let keys: Vec<&str> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["z", "b", "k"]);
    }

    #[test]
    fn test_entry_missing_cmd_names_key() {
        let result = parse("[mappings]\nx = { label = \"no command\" }\n");
        match result {
            Err(ConfigError::Entry { key, .. }) => assert_eq!(key, "x"),
            other => panic!("Expected ConfigError::Entry, got: {other:?}"),
        }
    }

    #[test]
    fn test_entry_wrong_type_is_rejected() {
        let result = parse("[mappings]\nx = \"htop\"\n");
        assert!(matches!(result, Err(ConfigError::Entry { .. })));
    }

    #[test]
    fn test_entry_non_string_fields_are_rejected() {
        for contents in [
            "[mappings]\na = { cmd = 5 }\n",
            "[mappings]\na = { cmd = \"htop\", label = 1 }\n",
            "[mappings]\na = { cmd = \"htop\", wd = true }\n",
        ] {
            match parse(contents) {
                Err(ConfigError::Entry { key, detail, .. }) => {
                    assert_eq!(key, "a");
                    assert!(detail.contains("invalid type"), "{detail}");
                    assert!(!detail.contains('\n'), "{detail}");
                }
                other => panic!("Expected ConfigError::Entry for {contents:?}, got: {other:?}"),
            }
        }
    }

    #[test]
    fn test_parse_error_is_single_line_with_position() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&path, "[mappings\n").unwrap();
        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Toml { .. }));
        let message = err.to_string();
        assert_eq!(message.lines().count(), 1, "{message}");
        assert!(message.contains("line 1, column 10"), "{message}");
    }

    #[test]
    fn test_empty_cmd_is_rejected() {
        let result = parse("[mappings]\nx = { cmd = \"  \" }\n");
        match result {
            Err(ConfigError::EmptyCommand(key)) => assert_eq!(key, "x"),
            other => panic!("Expected ConfigError::EmptyCommand, got: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let table = parse("[mappings]\na = { cmd = \"htop\", color = \"red\" }\n").unwrap();
        assert_eq!(table.get("a").unwrap().command, "htop");
    }
}
