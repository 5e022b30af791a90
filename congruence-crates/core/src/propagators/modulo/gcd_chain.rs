use super::term_set::Term;
use crate::math::number_theory::gcd;

/// The gcd of a set of coefficients, where the empty set is a separate value which acts as the
/// identity of folding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FoldedGcd {
    NoOtherTerms,
    Gcd(i64),
}

impl FoldedGcd {
    pub(crate) fn fold(self, coefficient: i64) -> FoldedGcd {
        match self {
            FoldedGcd::NoOtherTerms => FoldedGcd::Gcd(coefficient.abs()),
            FoldedGcd::Gcd(value) => FoldedGcd::Gcd(gcd(value, coefficient)),
        }
    }
}

impl std::fmt::Display for FoldedGcd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FoldedGcd::NoOtherTerms => write!(f, "-"),
            FoldedGcd::Gcd(value) => write!(f, "{value}"),
        }
    }
}

/// A term together with the gcd of the coefficients of all other unretired terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct GcdEntry {
    pub(crate) position: usize,
    pub(crate) others: FoldedGcd,
}

/// The result of a scan over the unretired terms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct GcdChain {
    /// One entry per term which can still be pruned; terms whose other coefficients have gcd 1
    /// are left out.
    pub(crate) entries: Vec<GcdEntry>,
    /// The gcd of all unretired coefficients.
    pub(crate) global: FoldedGcd,
}

impl GcdChain {
    pub(crate) fn build<Var>(terms: &[Term<Var>]) -> GcdChain {
        let mut entries: Vec<GcdEntry> = Vec::new();
        let mut global = FoldedGcd::NoOtherTerms;

        for term in terms.iter().filter(|term| !term.is_retired()) {
            for entry in entries.iter_mut() {
                entry.others = entry.others.fold(term.coefficient);
            }
            entries.push(GcdEntry {
                position: term.position,
                others: global,
            });
            entries.retain(|entry| entry.others != FoldedGcd::Gcd(1));

            global = global.fold(term.coefficient);
        }

        GcdChain { entries, global }
    }
}
