//! The company -> founders mapping and its JSON output.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{FinderError, Result};
use crate::extractor::FounderSet;

/// Company name to founder names, in input order.
///
/// Keys are unique: a company listed twice keeps one entry whose founders are
/// merged.
#[derive(Clone, Debug, Default)]
pub struct FounderMap {
    entries: Vec<(String, FounderSet)>,
}

impl FounderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `founders` for `company`. An empty list still creates the key.
    pub fn insert(&mut self, company: &str, founders: &[String]) {
        let idx = match self.entries.iter().position(|(name, _)| name == company) {
            Some(idx) => idx,
            None => {
                self.entries.push((company.to_owned(), FounderSet::new()));
                self.entries.len() - 1
            }
        };
        let set = &mut self.entries[idx].1;
        for founder in founders {
            set.insert(founder);
        }
    }

    pub fn get(&self, company: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == company)
            .map(|(_, set)| set.names())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, set)| (name.as_str(), set.names()))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the mapping as pretty-printed JSON.
    pub fn write(&self, path: &str) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json + "\n").map_err(|source| FinderError::Output {
            path: path.to_owned(),
            source,
        })?;
        log::info!("Wrote {}", path);
        Ok(())
    }
}

impl Serialize for FounderMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, founders) in self.iter() {
            map.serialize_entry(name, founders)?;
        }
        map.end()
    }
}
