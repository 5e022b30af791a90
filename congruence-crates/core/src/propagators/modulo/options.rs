/// The options of the modulo congruence propagator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuloOptions {
    /// Combine every derived congruence with the one remembered from earlier calls. When `false`
    /// the freshly derived congruence replaces the remembered one.
    pub merge_congruences: bool,
    /// How much of a congruence is applied to the domain.
    pub pruning: CongruencePruning,
    /// If every coefficient and every lower bound is non-negative, bound each `x_i` by
    /// `[0, c / a_i]` when the constraint is posted.
    pub limit_domains: bool,
}

impl Default for ModuloOptions {
    fn default() -> Self {
        ModuloOptions {
            merge_congruences: true,
            pruning: CongruencePruning::default(),
            limit_domains: false,
        }
    }
}

/// Determines which values are removed given a congruence `x ≡ r (mod m)`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum CongruencePruning {
    /// Only move the bounds to the closest congruent values.
    #[default]
    Bounds,
    /// Additionally remove every non-congruent value between the new bounds.
    Values,
}

impl std::fmt::Display for CongruencePruning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CongruencePruning::Bounds => write!(f, "bounds"),
            CongruencePruning::Values => write!(f, "values"),
        }
    }
}
