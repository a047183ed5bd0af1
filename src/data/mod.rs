pub mod dex;
pub mod formats;
pub mod items;
pub mod learnsets;

pub use dex::{DexData, DexDatabase, GenderRatio};
pub use formats::{FormatEntry, FormatsDatabase};
pub use items::{ItemData, ItemDatabase};
pub use learnsets::{LearnsetDatabase, SpeciesLearnset};

/// Normalize a display name into a table key: lowercase alphanumerics only.
/// "Mr. Mime" and "mr mime" both key as "mrmime".
pub fn to_id(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
