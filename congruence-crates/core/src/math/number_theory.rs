//! Integer arithmetic used by the congruence reasoning.
//!
//! The functions operate on `i64`, which holds a single product of an `i32` coefficient and an
//! `i32` value. Sums of such products are kept in `i128` by the callers and reduced with
//! [`positive_mod_wide`] before they reach these functions.
use num::Integer;

/// The coefficients of Bézout's identity `a·u + b·v = gcd(a, b)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Bezout {
    /// The non-negative greatest common divisor of `a` and `b`.
    pub(crate) gcd: i64,
    pub(crate) u: i64,
    pub(crate) v: i64,
}

/// Runs the extended Euclidean algorithm on `(a, b)`.
///
/// Returns [`None`] for `(0, 0)`, which has no meaningful gcd.
pub(crate) fn bezout(a: i64, b: i64) -> Option<Bezout> {
    if a == 0 && b == 0 {
        return None;
    }

    let extended = a.extended_gcd(&b);
    Some(Bezout {
        gcd: extended.gcd,
        u: extended.x,
        v: extended.y,
    })
}

/// The non-negative greatest common divisor of `a` and `b`.
pub(crate) fn gcd(a: i64, b: i64) -> i64 {
    a.gcd(&b)
}

/// The remainder of `value` divided by `modulus`, always in `[0, modulus)`.
///
/// `modulus` has to be positive.
pub(crate) fn positive_mod(value: i64, modulus: i64) -> i64 {
    value.mod_floor(&modulus)
}

/// [`positive_mod`] for values which may exceed the range of an `i64` during intermediate steps.
pub(crate) fn positive_mod_wide(value: i128, modulus: i128) -> i128 {
    value.rem_euclid(modulus)
}
