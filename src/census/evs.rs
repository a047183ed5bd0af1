use num_bigint::BigUint;
use num_traits::Zero;

use super::math::choose_small;
use super::{EV_BUDGET, EV_PER_STAT_CAP, STAT_COUNT};

/// Count the ways to spread `1..=budget` points over `stats` stats with no
/// stat holding more than `per_stat_cap`.
///
/// Bounded compositions are counted per total by inclusion-exclusion over
/// how many stats overshoot the cap: a composition with `k` marked
/// overshooting stats prepays `k * (cap + 1)` points and distributes the
/// rest freely over all stats. The positive and negative terms accumulate
/// separately; the signed total is a count, so the final subtraction never
/// underflows.
pub fn ev_spread_count(stats: usize, budget: u64, per_stat_cap: u64) -> BigUint {
    let bars = stats - 1;
    let mut included = BigUint::zero();
    let mut excluded = BigUint::zero();
    for points in 1..=budget {
        for k in 0..=stats {
            let prepaid = k as u64 * (per_stat_cap + 1);
            if prepaid > points {
                break;
            }
            let rest = (points - prepaid) as usize;
            let term = choose_small(stats, k) * choose_small(rest + bars, bars);
            if k % 2 == 0 {
                included += term;
            } else {
                excluded += term;
            }
        }
    }
    included - excluded
}

/// Spread count at the game's fixed parameters. The zero spread is not a
/// training decision and stays out of the count.
pub fn ev_possibilities() -> BigUint {
    ev_spread_count(STAT_COUNT, EV_BUDGET, EV_PER_STAT_CAP)
}
