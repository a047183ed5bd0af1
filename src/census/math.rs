use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, ToPrimitive, Zero};
use once_cell::sync::Lazy;

/// Factorials are tabulated for 0..=134, which covers every binomial this
/// pipeline evaluates with both indices small.
pub const FACTORIAL_LIMIT: usize = 135;

static FACTORIALS: Lazy<Vec<BigUint>> = Lazy::new(|| {
    let mut table = Vec::with_capacity(FACTORIAL_LIMIT);
    let mut product = BigUint::one();
    table.push(product.clone());
    for i in 1..FACTORIAL_LIMIT {
        product *= BigUint::from(i);
        table.push(product.clone());
    }
    table
});

/// Exact binomial coefficient for arbitrarily large `n` and small `r`.
///
/// Inside the factorial table the quotient of factorials divides exactly;
/// past it the falling-factorial product `n * (n-1) * ... * (n-r+1)` keeps
/// the computation exact for any `n`. An `r` outside the table is a hard
/// error rather than a silently wrong value; nothing here requests one.
pub fn choose(n: &BigUint, r: usize) -> BigUint {
    assert!(
        r < FACTORIAL_LIMIT,
        "binomial lower index {} exceeds the factorial table",
        r
    );

    if let Some(small) = n.to_usize() {
        if small < FACTORIAL_LIMIT {
            if r > small {
                return BigUint::zero();
            }
            return &FACTORIALS[small] / (&FACTORIALS[r] * &FACTORIALS[small - r]);
        }
    }

    let mut numerator = BigUint::one();
    for i in 0..r {
        numerator *= n - BigUint::from(i);
    }
    numerator / &FACTORIALS[r]
}

/// `choose` over plain indices.
pub fn choose_small(n: usize, r: usize) -> BigUint {
    choose(&BigUint::from(n), r)
}

/// Format a count as `<d>.<up to 5 digits>*10^<exp> (<full decimal>)`.
/// Display only; nothing downstream consumes the result.
pub fn to_exp(n: &BigUint) -> String {
    let digits = n.to_string();
    let mantissa_tail = &digits[1..digits.len().min(6)];
    format!(
        "{}.{}*10^{} ({})",
        &digits[..1],
        mantissa_tail,
        digits.len() - 1,
        digits
    )
}

/// Signed variant for the team totals.
pub fn to_exp_signed(n: &BigInt) -> String {
    match n.sign() {
        Sign::Minus => format!("-{}", to_exp(n.magnitude())),
        _ => to_exp(n.magnitude()),
    }
}
