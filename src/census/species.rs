use std::collections::HashSet;

use log::warn;
use num_bigint::BigUint;

use crate::data::{to_id, DexDatabase, FormatsDatabase, LearnsetDatabase};

use super::math::choose;
use super::{HAPPINESS_MAX, IV_MAX, LEVELS_MAX, MOVE_SLOTS, NATURES, STAT_COUNT};

/// How one species' count was obtained.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpeciesResolution {
    /// Every table lookup succeeded.
    Resolved(BigUint),
    /// Counted, but defaults stood in for missing data (reasons joined).
    FallbackApplied(BigUint, String),
    /// No usable learnset; the species contributes nothing anywhere.
    Skipped(String),
}

impl SpeciesResolution {
    pub fn possibilities(&self) -> Option<&BigUint> {
        match self {
            SpeciesResolution::Resolved(count)
            | SpeciesResolution::FallbackApplied(count, _) => Some(count),
            SpeciesResolution::Skipped(_) => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SpeciesReport {
    pub id: String,
    pub resolution: SpeciesResolution,
    /// Distinct learnable moves, earlier evolution stages included.
    pub move_pool: usize,
}

#[derive(Clone, Debug)]
pub struct CensusSummary {
    /// One report per playable species, in id order.
    pub reports: Vec<SpeciesReport>,
    /// Build count summed over every counted species.
    pub total: BigUint,
    /// Species that contributed to the totals.
    pub counted: usize,
    pub total_move_pool: usize,
}

impl CensusSummary {
    /// Mean move-pool size over counted species. Display only.
    pub fn average_move_pool(&self) -> f64 {
        if self.counted == 0 {
            0.0
        } else {
            self.total_move_pool as f64 / self.counted as f64
        }
    }

    /// The counted per-species build counts, in id order.
    pub fn counted_possibilities(&self) -> Vec<BigUint> {
        self.reports
            .iter()
            .filter_map(|report| report.resolution.possibilities().cloned())
            .collect()
    }
}

/// Count every build each playable species can field.
///
/// Per species the count multiplies happiness, level, nature, IV, EV
/// spread, ability, gender, held-item and move-selection choices, then
/// floor-divides by the minimum level the evolution stage can exist at
/// (discounting the level range proportionally).
pub fn species_possibilities(
    formats: &FormatsDatabase,
    dex: &DexDatabase,
    learnsets: &LearnsetDatabase,
    item_choices: &BigUint,
    ev_spreads: &BigUint,
) -> CensusSummary {
    let shared =
        BigUint::from(HAPPINESS_MAX * LEVELS_MAX * NATURES * IV_MAX * STAT_COUNT as u64)
            * ev_spreads;

    let reports: Vec<SpeciesReport> = formats
        .playable_ids()
        .iter()
        .map(|species_id| count_species(species_id, dex, learnsets, item_choices, &shared))
        .collect();

    let total = reports
        .iter()
        .filter_map(|report| report.resolution.possibilities())
        .sum();
    let counted = reports
        .iter()
        .filter(|report| report.resolution.possibilities().is_some())
        .count();
    let total_move_pool = reports.iter().map(|report| report.move_pool).sum();

    CensusSummary {
        reports,
        total,
        counted,
        total_move_pool,
    }
}

fn count_species(
    species_id: &str,
    dex: &DexDatabase,
    learnsets: &LearnsetDatabase,
    item_choices: &BigUint,
    shared: &BigUint,
) -> SpeciesReport {
    let mut fallbacks: Vec<String> = Vec::new();

    let (ability_count, gender_count, required_item) = match dex.get(species_id) {
        Some(data) => {
            let genders = if data.gender_ratio.is_some() || data.gender.is_none() {
                2u64
            } else {
                1
            };
            (
                data.abilities.len() as u64,
                genders,
                data.required_item.is_some(),
            )
        }
        None => {
            warn!("{} has no dex entry", species_id);
            fallbacks.push("no dex entry".to_string());
            (2, 2, false)
        }
    };

    let pool = match collect_move_pool(species_id, dex, learnsets) {
        Some(pool) => pool,
        None => {
            let base_id = dex
                .get(species_id)
                .and_then(|data| data.base_species.as_deref())
                .map(to_id)
                .filter(|base_id| base_id != species_id);
            match base_id.and_then(|base_id| {
                collect_move_pool(&base_id, dex, learnsets).map(|pool| (base_id, pool))
            }) {
                Some((base_id, pool)) => {
                    warn!("{} has no learnset, counting it as {}", species_id, base_id);
                    fallbacks.push(format!("learnset taken from {}", base_id));
                    pool
                }
                None => {
                    warn!("{} has no learnset", species_id);
                    return SpeciesReport {
                        id: species_id.to_string(),
                        resolution: SpeciesResolution::Skipped("no learnset".to_string()),
                        move_pool: 0,
                    };
                }
            }
        }
    };
    fallbacks.extend(pool.fallbacks);

    // Up to 4 moves from the pool, where each of the 4 slots may instead
    // be left blank.
    let move_choices = choose(
        &BigUint::from(pool.moves.len() + MOVE_SLOTS - 1),
        MOVE_SLOTS,
    );

    let item_multiplier = if required_item {
        BigUint::from(1u64)
    } else {
        item_choices.clone()
    };

    let count = shared * ability_count * gender_count * item_multiplier * move_choices
        / pool.min_level;

    let resolution = if fallbacks.is_empty() {
        SpeciesResolution::Resolved(count)
    } else {
        SpeciesResolution::FallbackApplied(count, fallbacks.join("; "))
    };

    SpeciesReport {
        id: species_id.to_string(),
        resolution,
        move_pool: pool.moves.len(),
    }
}

struct MovePool {
    moves: HashSet<String>,
    /// Lowest level this evolution stage can exist at.
    min_level: u64,
    fallbacks: Vec<String>,
}

/// Union the species' learnset with every earlier evolution stage's, and
/// track the minimum level the final stage can exist at: the running
/// maximum of each stage's requirement. A stage evolving at an explicit
/// level requires that level; one evolving by leveling while knowing a
/// move requires the level the previous stage learns it at; any other
/// trigger still requires one level-up past hatching. Stages that hatch
/// directly require nothing.
///
/// Returns None when the species has no recorded moves at all, so the
/// caller can retry under the base species.
fn collect_move_pool(
    species_id: &str,
    dex: &DexDatabase,
    learnsets: &LearnsetDatabase,
) -> Option<MovePool> {
    let own = learnsets.moves(species_id)?;
    if own.is_empty() {
        return None;
    }

    let mut moves: HashSet<String> = own.keys().cloned().collect();
    let mut min_level: u64 = 1;
    let mut fallbacks = Vec::new();

    let mut current = dex.get(species_id);
    while let Some(data) = current {
        let Some(prevo) = data.prevo.as_deref() else {
            break;
        };
        let prevo_id = to_id(prevo);

        if !data.can_hatch {
            let required = if let Some(level) = data.evo_level {
                level
            } else if data.evo_type.as_deref() == Some("levelMove") {
                match evo_move_level(data.evo_move.as_deref(), &prevo_id, learnsets) {
                    Some(level) => level,
                    None => {
                        warn!("{} has an unreadable evolution move level", data.name);
                        fallbacks.push("evolution move level unreadable".to_string());
                        2
                    }
                }
            } else {
                // Trades, stones and friendship still take one level-up.
                2
            };
            if required > min_level {
                min_level = required;
            }
        }

        if let Some(prevo_moves) = learnsets.moves(&prevo_id) {
            moves.extend(prevo_moves.keys().cloned());
        }

        current = dex.get(&prevo_id);
    }

    Some(MovePool {
        moves,
        min_level,
        fallbacks,
    })
}

/// Level at which the previous stage learns the evolution move, read off
/// its first learn-method code.
fn evo_move_level(
    evo_move: Option<&str>,
    prevo_id: &str,
    learnsets: &LearnsetDatabase,
) -> Option<u64> {
    let methods = learnsets.moves(prevo_id)?;
    let codes = methods.get(&to_id(evo_move?))?;
    parse_level_code(codes.first()?)
}

/// Pull the level out of a method code like "7L33". Codes without a level
/// component ("8M", "7T") yield None.
fn parse_level_code(code: &str) -> Option<u64> {
    let pos = code.find('L')?;
    let bytes = code.as_bytes();
    if pos == 0 || !bytes[pos - 1].is_ascii_digit() {
        return None;
    }
    let digits: String = code[pos + 1..]
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}
