use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct GenderRatio {
    #[serde(rename = "M")]
    pub male: f64,
    #[serde(rename = "F")]
    pub female: f64,
}

/// One species' dex record. Unknown upstream fields (base stats, weights,
/// event flags) are ignored on load.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DexData {
    pub name: String,
    #[serde(default)]
    pub abilities: HashMap<String, String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default, rename = "genderRatio")]
    pub gender_ratio: Option<GenderRatio>,
    #[serde(default, rename = "requiredItem")]
    pub required_item: Option<String>,
    #[serde(default)]
    pub prevo: Option<String>,
    #[serde(default, rename = "evoLevel")]
    pub evo_level: Option<u64>,
    #[serde(default, rename = "evoType")]
    pub evo_type: Option<String>,
    #[serde(default, rename = "evoMove")]
    pub evo_move: Option<String>,
    #[serde(default, rename = "canHatch")]
    pub can_hatch: bool,
    #[serde(default, rename = "baseSpecies")]
    pub base_species: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct DexDatabase {
    entries: HashMap<String, DexData>,
}

impl DexDatabase {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, species_id: String, data: DexData) {
        self.entries.insert(species_id, data);
    }

    pub fn get(&self, species_id: &str) -> Option<&DexData> {
        self.entries.get(species_id)
    }

    pub fn as_map(&self) -> &HashMap<String, DexData> {
        &self.entries
    }

    pub fn load_from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let map: HashMap<String, DexData> = serde_json::from_str(json)?;
        let mut db = Self::new();
        for (species_id, data) in map {
            db.insert(species_id, data);
        }
        Ok(db)
    }

    pub fn load_default() -> Result<Self, serde_json::Error> {
        const DEFAULT_DEX_JSON: &str = include_str!("../../data/dex.json");
        Self::load_from_json_str(DEFAULT_DEX_JSON)
    }
}
