use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Config file already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("Failed to create config file {path}: {source}")]
    Write {
        source: std::io::Error,
        path: PathBuf,
    },
}

pub const SAMPLE_CONFIG: &str = "\
[mappings]
a = { cmd = \"htop\" }
b = { cmd = \"ls -la\", label = \"List all files in $PWD\" }
c = { cmd = \"git status\", label = \"Show git status\", wd = \"~/projects/myrepo\" }
";

/// Write the sample configuration to `path`.
///
/// # Errors
///
/// Returns `GenerateError::AlreadyExists` if something already exists at `path` (it is
/// left untouched), or `GenerateError::Write` on any other I/O failure.
pub fn run(path: &Path) -> Result<(), GenerateError> {
    if path.exists() {
        return Err(GenerateError::AlreadyExists(path.to_path_buf()));
    }

    let write_err = |source: std::io::Error| GenerateError::Write {
        source,
        path: path.to_path_buf(),
    };
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| {
            if e.kind() == ErrorKind::AlreadyExists {
                GenerateError::AlreadyExists(path.to_path_buf())
            } else {
                write_err(e)
            }
        })?;
    file.write_all(SAMPLE_CONFIG.as_bytes()).map_err(write_err)?;

    info!("Wrote sample config to {}", path.display());
    Ok(())
}
