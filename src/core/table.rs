use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Deduplication key for a normalized string.
///
/// Hex-encoded SHA-256 of the UTF-8 bytes, so it is stable across runs and machines.
pub fn content_hash(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

/// A translatable string and everything known about it after a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringEntry {
    /// Project-relative paths of the files containing the string.
    pub files: Vec<String>,
    pub text: String,
    /// Current translation, empty when none exists.
    pub translation: String,
    /// The text contains a `$`, so it probably carries a placeholder.
    pub dollar: bool,
}

impl StringEntry {
    pub fn new(text: String, translation: String, file: String) -> Self {
        let dollar = text.contains('$');
        Self {
            files: vec![file],
            text,
            translation,
            dollar,
        }
    }

    /// Record another occurrence. Returns false if `file` was already listed.
    pub fn add_file(&mut self, file: &str) -> bool {
        if self.files.iter().any(|f| f == file) {
            return false;
        }
        self.files.push(file.to_string());
        true
    }

    pub fn is_translated(&self) -> bool {
        !self.translation.is_empty()
    }
}

/// All strings found by a scan, keyed by [`content_hash`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringTable {
    entries: HashMap<String, StringEntry>,
}

impl StringTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, hash: &str) -> Option<&StringEntry> {
        self.entries.get(hash)
    }

    pub fn get_mut(&mut self, hash: &str) -> Option<&mut StringEntry> {
        self.entries.get_mut(hash)
    }

    pub fn contains(&self, hash: &str) -> bool {
        self.entries.contains_key(hash)
    }

    /// Insert a new entry. An existing entry with the same hash is kept as is.
    pub fn insert(&mut self, hash: String, entry: StringEntry) {
        self.entries.entry(hash).or_insert(entry);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &StringEntry)> {
        self.entries.iter()
    }

    /// Entries ordered by text (byte-wise), the hash breaking ties.
    pub fn sorted_by_text(&self) -> Vec<(&String, &StringEntry)> {
        let mut sorted: Vec<_> = self.entries.iter().collect();
        sorted.sort_by(|(ha, a), (hb, b)| a.text.cmp(&b.text).then_with(|| ha.cmp(hb)));
        sorted
    }

    /// Number of entries without a translation.
    pub fn untranslated(&self) -> usize {
        self.entries.values().filter(|e| !e.is_translated()).count()
    }

    /// Current translations keyed by hash, the default overlay for writing.
    pub fn translations(&self) -> HashMap<String, String> {
        self.entries
            .iter()
            .map(|(hash, entry)| (hash.clone(), entry.translation.clone()))
            .collect()
    }

    /// A hash-ordered view, used for deterministic serialization.
    pub fn to_sorted_map(&self) -> BTreeMap<&str, &StringEntry> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v)).collect()
    }
}

impl FromIterator<(String, StringEntry)> for StringTable {
    fn from_iter<I: IntoIterator<Item = (String, StringEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
