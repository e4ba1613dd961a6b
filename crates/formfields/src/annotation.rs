//! Parsing of per-field annotation strings.
//!
//! An annotation is a `;`-separated list of `key=value` segments, e.g.
//! `"label=Full Name;id=name"`. A segment consisting solely of `-` marks the
//! field as ignored. Segments without `=` are skipped, and when a key repeats
//! the last occurrence wins. Annotations are author-controlled metadata, so
//! parsing never fails.

use std::collections::BTreeMap;

/// Marker segment that removes a field from the generated form.
pub const IGNORE_MARKER: &str = "-";

/// A parsed annotation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotation {
    entries: BTreeMap<String, String>,
    ignored: bool,
}

impl Annotation {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return Self::default();
        }

        let mut entries = BTreeMap::new();
        for segment in raw.split(';') {
            match segment.split_once('=') {
                Some((key, value)) => {
                    entries.insert(key.trim().to_string(), value.trim().to_string());
                }
                None if segment.trim() == IGNORE_MARKER => return Self::ignored(),
                None => {}
            }
        }

        Self {
            entries,
            ignored: false,
        }
    }

    /// An annotation carrying only the ignore marker.
    pub fn ignored() -> Self {
        Self {
            entries: BTreeMap::new(),
            ignored: true,
        }
    }

    pub fn is_ignored(&self) -> bool {
        self.ignored
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl std::str::FromStr for Annotation {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
