use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Move id -> learn-method codes, e.g. "9L33" (level 33, generation 9),
/// "8M" (machine), "7T" (tutor).
pub type MoveMethods = HashMap<String, Vec<String>>;

/// Some upstream entries carry only event data and omit the move table.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SpeciesLearnset {
    #[serde(default)]
    pub learnset: Option<MoveMethods>,
}

#[derive(Clone, Debug, Default)]
pub struct LearnsetDatabase {
    learnsets: HashMap<String, SpeciesLearnset>,
}

impl LearnsetDatabase {
    pub fn new() -> Self {
        Self {
            learnsets: HashMap::new(),
        }
    }

    pub fn insert(&mut self, species_id: String, entry: SpeciesLearnset) {
        self.learnsets.insert(species_id, entry);
    }

    pub fn get(&self, species_id: &str) -> Option<&SpeciesLearnset> {
        self.learnsets.get(species_id)
    }

    /// The species' move table, when one is recorded at all.
    pub fn moves(&self, species_id: &str) -> Option<&MoveMethods> {
        self.learnsets
            .get(species_id)
            .and_then(|entry| entry.learnset.as_ref())
    }

    pub fn as_map(&self) -> &HashMap<String, SpeciesLearnset> {
        &self.learnsets
    }

    pub fn load_from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(json)?;
        let map_value = if let Some(obj) = value.as_object() {
            if let Some(inner) = obj.get("learnsets") {
                inner.clone()
            } else {
                value.clone()
            }
        } else {
            value.clone()
        };
        let map: HashMap<String, SpeciesLearnset> = serde_json::from_value(map_value)?;
        let mut db = Self::new();
        for (species_id, entry) in map {
            db.insert(species_id, entry);
        }
        Ok(db)
    }

    pub fn load_default() -> Result<Self, serde_json::Error> {
        const DEFAULT_LEARNSETS_JSON: &str = include_str!("../../data/learnsets.json");
        Self::load_from_json_str(DEFAULT_LEARNSETS_JSON)
    }
}
