//! Key to command bindings loaded from the qfile
//!
//! A [`MappingTable`] is built once from the configuration file and only read afterwards.
//! Entries keep the order they had in the file, which is the order they are listed in.

pub mod entry;
pub mod table;

use thiserror::Error;

pub use entry::MappingEntry;
pub use table::MappingTable;

/// Errors that can occur while looking up mappings in a table
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LookupError {
    #[error("No mappings found")]
    Empty,
    #[error("Unknown choice: {0}")]
    UnknownKey(String),
}
