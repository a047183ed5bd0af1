use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FormatEntry {
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default, rename = "isNonstandard")]
    pub is_nonstandard: Option<String>,
}

impl FormatEntry {
    /// Whether the species belongs to the countable competitive universe.
    /// Fan-made and unobtainable entries are out, as is anything without a
    /// ranked tier or sitting in an experimental "CAP" tier.
    pub fn is_playable(&self) -> bool {
        if matches!(
            self.is_nonstandard.as_deref(),
            Some("Custom") | Some("Unobtainable")
        ) {
            return false;
        }
        match self.tier.as_deref() {
            Some(tier) => !tier.starts_with("CAP"),
            None => false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct FormatsDatabase {
    entries: HashMap<String, FormatEntry>,
}

impl FormatsDatabase {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, species_id: String, entry: FormatEntry) {
        self.entries.insert(species_id, entry);
    }

    pub fn get(&self, species_id: &str) -> Option<&FormatEntry> {
        self.entries.get(species_id)
    }

    pub fn as_map(&self) -> &HashMap<String, FormatEntry> {
        &self.entries
    }

    /// Ids of every playable species, sorted so every pass over the table
    /// reports in the same order.
    pub fn playable_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_playable())
            .map(|(id, _)| id.clone())
            .collect();
        ids.sort();
        ids
    }

    pub fn load_from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let map: HashMap<String, FormatEntry> = serde_json::from_str(json)?;
        let mut db = Self::new();
        for (species_id, entry) in map {
            db.insert(species_id, entry);
        }
        Ok(db)
    }

    pub fn load_default() -> Result<Self, serde_json::Error> {
        const DEFAULT_FORMATS_JSON: &str = include_str!("../../data/formats.json");
        Self::load_from_json_str(DEFAULT_FORMATS_JSON)
    }
}
