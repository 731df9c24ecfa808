//! Turning mapping entries into shell command strings
//!
//! Two renderings exist. [`format_mapping`] produces the listing line shown by
//! `--print-mappings`, and [`build_command`] produces the string handed back to the
//! calling shell. They differ when an entry has both a label and a working directory:
//! the listing shows the plain command with its label, while the resolved command keeps
//! the `cd` wrapper and appends the label after it.

use log::debug;

use crate::mappings::{LookupError, MappingEntry, MappingTable};

fn wrap_in_directory(wd: &str, cmd: &str) -> String {
    format!("(cd {wd} && {cmd})")
}

/// Render one entry as a listing line: `<key>) $ <command>`.
#[must_use]
pub fn format_mapping(key: &str, entry: &MappingEntry) -> String {
    let cmd = entry.command.as_str();
    let display = match (entry.label(), entry.working_directory()) {
        (Some(label), _) => format!("{cmd}  # {label}"),
        (None, Some(wd)) => wrap_in_directory(wd, cmd),
        (None, None) => cmd.to_string(),
    };
    format!("{key}) $ {display}")
}

/// Render one entry as the command string the calling shell will run.
#[must_use]
pub fn build_command(entry: &MappingEntry, with_comment: bool) -> String {
    let mut result = match entry.working_directory() {
        Some(wd) => wrap_in_directory(wd, &entry.command),
        None => entry.command.clone(),
    };
    if with_comment && let Some(label) = entry.label() {
        result.push_str("  # ");
        result.push_str(label);
    }
    result
}

/// Render every entry of the table as a listing line, in insertion order.
///
/// # Errors
///
/// Returns `LookupError::Empty` if the table has no mappings.
pub fn list_mappings(table: &MappingTable) -> Result<Vec<String>, LookupError> {
    if table.is_empty() {
        return Err(LookupError::Empty);
    }
    Ok(table
        .iter()
        .map(|(key, entry)| format_mapping(key, entry))
        .collect())
}

/// Resolve a chosen key to the command string for the calling shell.
///
/// # Errors
///
/// Returns `LookupError::UnknownKey` if no mapping exists for `key`.
pub fn resolve_choice(
    table: &MappingTable,
    key: &str,
    with_comment: bool,
) -> Result<String, LookupError> {
    let entry = table
        .get(key)
        .ok_or_else(|| LookupError::UnknownKey(key.to_string()))?;
    debug!("Resolving '{key}' (with_comment: {with_comment})");
    Ok(build_command(entry, with_comment))
}
