use num::Integer;

use crate::math::number_theory::bezout;
use crate::math::number_theory::gcd;
use crate::math::number_theory::positive_mod;
use crate::math::number_theory::positive_mod_wide;

/// The statement `x ≡ offset (mod modulus)`.
///
/// The offset is always normalised into `[0, modulus)`. The default congruence has modulus 1 and
/// holds for every value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Congruence {
    offset: i64,
    modulus: i64,
}

impl Default for Congruence {
    fn default() -> Self {
        Congruence::UNCONSTRAINED
    }
}

/// Two congruences without a common solution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct IncompatibleCongruences;

impl Congruence {
    pub const UNCONSTRAINED: Congruence = Congruence {
        offset: 0,
        modulus: 1,
    };

    /// Creates `x ≡ offset (mod modulus)`; `modulus` has to be positive.
    pub fn new(offset: i64, modulus: i64) -> Congruence {
        crate::congruence_assert_simple!(modulus >= 1, "the modulus {modulus} is not positive");
        Congruence {
            offset: positive_mod(offset, modulus),
            modulus,
        }
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn modulus(&self) -> i64 {
        self.modulus
    }

    /// Whether the congruence holds for every value.
    pub fn is_unconstrained(&self) -> bool {
        self.modulus == 1
    }

    pub fn contains(&self, value: i64) -> bool {
        positive_mod(value, self.modulus) == self.offset
    }

    /// Derives the congruence of `x` from `coefficient·x ≡ rhs (mod others_gcd)`, where
    /// `others_gcd` is the gcd of the coefficients of all other terms of the equation.
    ///
    /// Requires `rhs` to be a multiple of `gcd(coefficient, others_gcd)`. Returns [`None`] when
    /// the derived congruence is unconstrained.
    pub(crate) fn derive(coefficient: i64, others_gcd: i64, rhs: i64) -> Option<Congruence> {
        crate::congruence_assert_simple!(coefficient != 0 && others_gcd > 0);

        let reduced_rhs = positive_mod(rhs, others_gcd);
        let reduced_coefficient = positive_mod(coefficient, others_gcd);
        let identity = bezout(reduced_coefficient, others_gcd)?;

        let modulus = others_gcd / identity.gcd;
        if modulus == 1 {
            return None;
        }

        crate::congruence_assert_moderate!(reduced_rhs % identity.gcd == 0);
        let offset = positive_mod_wide(
            identity.u as i128 * (reduced_rhs / identity.gcd) as i128,
            modulus as i128,
        );
        Some(Congruence::new(offset as i64, modulus))
    }

    /// Combines two congruences into the one that holds exactly for the values satisfying both,
    /// by the Chinese remainder theorem.
    ///
    /// If the combined modulus does not fit an `i64`, the congruence with the larger modulus is
    /// kept instead.
    pub(crate) fn merge(self, other: Congruence) -> Result<Congruence, IncompatibleCongruences> {
        crate::congruence_assert_simple!(self.modulus >= 1 && other.modulus >= 1);
        let common = gcd(self.modulus, other.modulus);
        let difference = other.offset - self.offset;
        if difference % common != 0 {
            return Err(IncompatibleCongruences);
        }

        let reduced_other_modulus = other.modulus / common;
        let identity = (self.modulus / common).extended_gcd(&reduced_other_modulus);
        crate::congruence_assert_simple!(identity.gcd == 1);

        let modulus = (self.modulus / common) as i128 * other.modulus as i128;
        if modulus > i64::MAX as i128 {
            return Ok(if self.modulus >= other.modulus {
                self
            } else {
                other
            });
        }

        // self.offset + self.modulus·k satisfies the other congruence for this k.
        let k = positive_mod_wide(
            (difference / common) as i128 * identity.x as i128,
            reduced_other_modulus as i128,
        );
        let offset = positive_mod_wide(self.offset as i128 + self.modulus as i128 * k, modulus);

        Ok(Congruence::new(offset as i64, modulus as i64))
    }
}

impl std::fmt::Display for Congruence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "≡ {} (mod {})", self.offset, self.modulus)
    }
}
