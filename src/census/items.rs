use num_bigint::BigUint;

use crate::data::items::ItemDatabase;

/// Items with no distinguishing effect on a battle: evolution stones and
/// trigger items, out-of-battle berries, collector oddments. They collapse
/// into the single bucket the count starts from.
const BUCKETED_ITEMS: &[&str] = &[
    "belueberry",
    "blukberry",
    "bottlecap",
    "cornnberry",
    "dawnstone",
    "dragonscale",
    "dubiousdisc",
    "durinberry",
    "duskstone",
    "electirizer",
    "energypowder",
    "firestone",
    "goldbottlecap",
    "hondewberry",
    "icestone",
    "leafstone",
    "magmarizer",
    "magostberry",
    "moonstone",
    "nanabberry",
    "nomelberry",
    "oldamber",
    "ovalstone",
    "pamtreberry",
    "pinapberry",
    "pomegberry",
    "prismscale",
    "protector",
    "qualotberry",
    "rabutaberry",
    "rarebone",
    "razzberry",
    "reapercloth",
    "sachet",
    "shinystone",
    "spelonberry",
    "sunstone",
    "tamatoberry",
    "thunderstone",
    "upgrade",
    "waterstone",
    "watmelberry",
    "wepearberry",
    "whippeddream",
];

/// Single-use technical records: "tr" followed by a two-digit number.
fn is_technical_record(item_id: &str) -> bool {
    let bytes = item_id.as_bytes();
    bytes.len() == 4
        && item_id[..2].eq_ignore_ascii_case("tr")
        && bytes[2].is_ascii_digit()
        && bytes[3].is_ascii_digit()
}

fn is_distinct_choice(item_id: &str, name: &str) -> bool {
    if name.ends_with(" Ball") || name.ends_with(" Fossil") || is_technical_record(item_id) {
        return false;
    }
    !BUCKETED_ITEMS.contains(&item_id)
}

/// Count the distinguishable held-item choices: holding nothing, one bucket
/// for the effect-free items above, and one per remaining catalog entry.
pub fn item_possibilities(items: &ItemDatabase) -> BigUint {
    let distinct = items
        .as_map()
        .iter()
        .filter(|(_, data)| data.is_nonstandard.is_none())
        .filter(|(item_id, data)| is_distinct_choice(item_id, &data.name))
        .count();
    BigUint::from(distinct as u64 + 2)
}
