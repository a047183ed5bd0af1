use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

use super::math::choose;
use super::TEAM_SIZE;

/// Team-level aggregates over the per-species build counts.
#[derive(Clone, Debug)]
pub struct TeamSummary {
    /// Builds across every counted species.
    pub total_builds: BigUint,
    /// Unordered teams of six builds, duplicate species allowed.
    pub unrestricted: BigUint,
    /// Teams carrying two or more builds of one species, summed per
    /// species.
    pub duplicates: BigUint,
    /// Teams with at most one build per species. The per-species sum is a
    /// first-order correction, so this is signed: it can over-subtract
    /// when a handful of species dominate the population.
    pub one_per_species: BigInt,
    /// Independent team choices for the two sides of a battle.
    pub both_sides: BigInt,
}

pub fn team_possibilities(per_species: &[BigUint]) -> TeamSummary {
    let total_builds: BigUint = per_species.iter().sum();
    let unrestricted = choose(&total_builds, TEAM_SIZE);

    let duplicates = per_species.iter().fold(BigUint::zero(), |sum, population| {
        let others = &total_builds - population;
        (2..=TEAM_SIZE).fold(sum, |sum, dup_count| {
            sum + choose(population, dup_count) * choose(&others, TEAM_SIZE - dup_count)
        })
    });

    let one_per_species = BigInt::from(unrestricted.clone()) - BigInt::from(duplicates.clone());
    let both_sides = &one_per_species * &one_per_species;

    TeamSummary {
        total_builds,
        unrestricted,
        duplicates,
        one_per_species,
        both_sides,
    }
}
