use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ItemData {
    pub name: String,
    #[serde(default, rename = "isNonstandard")]
    pub is_nonstandard: Option<String>,
}

/// Held-item catalog. The default catalog ships as YAML since it is
/// hand-curated, unlike the JSON tables dumped from upstream data.
#[derive(Clone, Debug, Default)]
pub struct ItemDatabase {
    items: HashMap<String, ItemData>,
}

impl ItemDatabase {
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    pub fn insert(&mut self, item_id: String, data: ItemData) {
        self.items.insert(item_id, data);
    }

    pub fn get(&self, item_id: &str) -> Option<&ItemData> {
        self.items.get(item_id)
    }

    pub fn as_map(&self) -> &HashMap<String, ItemData> {
        &self.items
    }

    pub fn load_from_yaml_str(yaml: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let map: HashMap<String, ItemData> = serde_yaml::from_str(yaml)?;
        let mut db = Self::new();
        for (item_id, data) in map {
            db.insert(item_id, data);
        }
        Ok(db)
    }

    pub fn load_from_yaml_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        Self::load_from_yaml_str(&content)
    }

    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        const DEFAULT_ITEMS_YAML: &str = include_str!("../../data/items.yaml");
        Self::load_from_yaml_str(DEFAULT_ITEMS_YAML)
    }
}
