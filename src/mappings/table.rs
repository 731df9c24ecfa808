use std::collections::HashMap;

use log::debug;

use crate::mappings::entry::MappingEntry;

/// Ordered, key-addressed collection of [`MappingEntry`] values
#[derive(Debug, Clone, Default)]
pub struct MappingTable {
    entries: Vec<(String, MappingEntry)>,
    index: HashMap<String, usize>,
}

impl MappingTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing any previous entry with the same key in place.
    pub fn insert(&mut self, key: impl Into<String>, entry: MappingEntry) {
        let key = key.into();
        if let Some(&pos) = self.index.get(&key) {
            debug!("Replacing mapping '{key}'");
            self.entries[pos].1 = entry;
        } else {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, entry));
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&MappingEntry> {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MappingEntry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }
}

impl<K: Into<String>> FromIterator<(K, MappingEntry)> for MappingTable {
    fn from_iter<I: IntoIterator<Item = (K, MappingEntry)>>(iter: I) -> Self {
        let mut table = MappingTable::new();
        for (key, entry) in iter {
            table.insert(key, entry);
        }
        table
    }
}
