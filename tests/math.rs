use dex_census::census::math::{choose, choose_small, to_exp, to_exp_signed, FACTORIAL_LIMIT};
use num_bigint::{BigInt, BigUint};

#[test]
fn choose_is_symmetric() {
    for n in [0usize, 1, 5, 12, 60, 134] {
        for r in 0..=n.min(10) {
            assert_eq!(
                choose_small(n, r),
                choose_small(n, n - r),
                "n={} r={}",
                n,
                r
            );
        }
    }
}

#[test]
fn choosing_nothing_is_one_way() {
    for n in [0usize, 1, 7, 134] {
        assert_eq!(choose_small(n, 0), BigUint::from(1u32));
    }
    assert_eq!(choose(&BigUint::from(10u32).pow(40), 0), BigUint::from(1u32));
}

#[test]
fn product_path_matches_known_values() {
    let expected: u64 = 200 * 199 * 198 * 197 / 24;
    assert_eq!(choose(&BigUint::from(200u32), 4), BigUint::from(expected));
}

#[test]
fn product_path_agrees_with_the_table_across_the_boundary() {
    // Pascal's rule with the left side just past the factorial table and
    // the right side inside it.
    let n = FACTORIAL_LIMIT;
    for r in 1..=6 {
        assert_eq!(
            choose_small(n, r),
            choose_small(n - 1, r - 1) + choose_small(n - 1, r)
        );
    }
}

#[test]
fn overlong_selection_is_impossible() {
    assert_eq!(choose_small(4, 6), BigUint::from(0u32));
}

#[test]
fn exponent_display_keeps_six_significant_digits() {
    assert_eq!(
        to_exp(&BigUint::from(123456789u64)),
        "1.23456*10^8 (123456789)"
    );
    assert_eq!(to_exp(&BigUint::from(60u64)), "6.0*10^1 (60)");
    assert_eq!(to_exp(&BigUint::from(7u64)), "7.*10^0 (7)");
}

#[test]
fn exponent_display_carries_the_sign() {
    assert_eq!(to_exp_signed(&BigInt::from(-60)), "-6.0*10^1 (60)");
    assert_eq!(to_exp_signed(&BigInt::from(60)), "6.0*10^1 (60)");
}

#[test]
#[should_panic]
fn oversized_lower_index_panics() {
    choose(&BigUint::from(10u32).pow(50), FACTORIAL_LIMIT);
}
