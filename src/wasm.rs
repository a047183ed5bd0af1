use once_cell::sync::Lazy;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::census::{
    ev_possibilities, item_possibilities, species_possibilities, team_possibilities,
};
use crate::census::species::{SpeciesReport, SpeciesResolution};
use crate::data::dex::DexDatabase;
use crate::data::formats::FormatsDatabase;
use crate::data::items::ItemDatabase;
use crate::data::learnsets::LearnsetDatabase;

static FORMATS_DB: Lazy<FormatsDatabase> =
    Lazy::new(|| FormatsDatabase::load_default().unwrap_or_else(|_| FormatsDatabase::new()));
static DEX_DB: Lazy<DexDatabase> =
    Lazy::new(|| DexDatabase::load_default().unwrap_or_else(|_| DexDatabase::new()));
static LEARNSETS_DB: Lazy<LearnsetDatabase> =
    Lazy::new(|| LearnsetDatabase::load_default().unwrap_or_default());
static ITEMS_DB: Lazy<ItemDatabase> =
    Lazy::new(|| ItemDatabase::load_default().unwrap_or_else(|_| ItemDatabase::new()));

fn js_err(message: impl ToString) -> JsValue {
    JsValue::from_str(&message.to_string())
}

// Counts leave as decimal strings; they do not fit JS numbers.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CensusWire {
    total_items: String,
    total_ev_spreads: String,
    total_builds: String,
    average_move_pool: f64,
    total_teams: String,
    total_teams_one_per_species: String,
    total_both_sides: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpeciesWire {
    id: String,
    outcome: String,
    detail: Option<String>,
    possibilities: Option<String>,
    move_pool: usize,
}

impl From<&SpeciesReport> for SpeciesWire {
    fn from(report: &SpeciesReport) -> Self {
        let (outcome, detail, possibilities) = match &report.resolution {
            SpeciesResolution::Resolved(count) => ("resolved", None, Some(count.to_string())),
            SpeciesResolution::FallbackApplied(count, reasons) => {
                ("fallback", Some(reasons.clone()), Some(count.to_string()))
            }
            SpeciesResolution::Skipped(reason) => ("skipped", Some(reason.clone()), None),
        };
        Self {
            id: report.id.clone(),
            outcome: outcome.to_string(),
            detail,
            possibilities,
            move_pool: report.move_pool,
        }
    }
}

#[wasm_bindgen(js_name = runCensus)]
pub fn run_census_wasm() -> Result<JsValue, JsValue> {
    let total_items = item_possibilities(&ITEMS_DB);
    let total_evs = ev_possibilities();
    let summary =
        species_possibilities(&FORMATS_DB, &DEX_DB, &LEARNSETS_DB, &total_items, &total_evs);
    let teams = team_possibilities(&summary.counted_possibilities());

    let wire = CensusWire {
        total_items: total_items.to_string(),
        total_ev_spreads: total_evs.to_string(),
        total_builds: summary.total.to_string(),
        average_move_pool: summary.average_move_pool(),
        total_teams: teams.unrestricted.to_string(),
        total_teams_one_per_species: teams.one_per_species.to_string(),
        total_both_sides: teams.both_sides.to_string(),
    };
    serde_wasm_bindgen::to_value(&wire).map_err(js_err)
}

#[wasm_bindgen(js_name = speciesPossibilities)]
pub fn species_possibilities_wasm(species_id: String) -> Result<JsValue, JsValue> {
    let total_items = item_possibilities(&ITEMS_DB);
    let total_evs = ev_possibilities();
    let summary =
        species_possibilities(&FORMATS_DB, &DEX_DB, &LEARNSETS_DB, &total_items, &total_evs);
    let report = summary
        .reports
        .iter()
        .find(|report| report.id == species_id)
        .ok_or_else(|| js_err(format!("Unknown or unranked species id: {}", species_id)))?;
    serde_wasm_bindgen::to_value(&SpeciesWire::from(report)).map_err(js_err)
}
