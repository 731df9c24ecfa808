use std::path::Path;
use std::process::ExitCode;

/// Write the sample config file.
///
/// # Errors
///
/// Returns an error if the file already exists or cannot be written.
pub fn run(path: &Path) -> Result<ExitCode, Box<dyn std::error::Error>> {
    qfile::generate::run(path)?;
    println!("Sample config file created at: {}", path.display());
    Ok(ExitCode::SUCCESS)
}
