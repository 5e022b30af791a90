use super::CongruencePruning;
use super::Congruence;
use crate::engine::variables::IntegerVariable;
use crate::engine::EmptyDomain;
use crate::math::number_theory::positive_mod;
use crate::propagation::PropagationContextMut;
use crate::propagation::ReadDomains;

/// The smallest window `[min, max]` within `[lower_bound, upper_bound]` whose endpoints satisfy
/// `congruence`. The window is empty (`min > max`) when no value in the range does.
pub(crate) fn congruent_window(
    lower_bound: i32,
    upper_bound: i32,
    congruence: Congruence,
) -> (i64, i64) {
    let (lower_bound, upper_bound) = (lower_bound as i64, upper_bound as i64);
    let offset = congruence.offset();
    let modulus = congruence.modulus();

    let min = lower_bound + positive_mod(offset - lower_bound, modulus);
    let max = upper_bound - positive_mod(upper_bound - offset, modulus);
    (min, max)
}

/// Removes values which violate `congruence` from the domain of `variable`. Returns whether the
/// domain changed.
pub(crate) fn apply_congruence<Var: IntegerVariable>(
    context: &mut PropagationContextMut,
    variable: &Var,
    congruence: Congruence,
    pruning: CongruencePruning,
) -> Result<bool, EmptyDomain> {
    let lower_bound = context.lower_bound(variable);
    let upper_bound = context.upper_bound(variable);

    let (min, max) = congruent_window(lower_bound, upper_bound, congruence);
    if min > max {
        return Err(EmptyDomain);
    }
    // The window lies within the current bounds, so it fits an i32.
    let (min, max) = (min as i32, max as i32);
    context.restrict_range(variable, min, max)?;

    let mut changed = min != lower_bound || max != upper_bound;

    if pruning == CongruencePruning::Values {
        for value in min..=max {
            if !congruence.contains(value as i64) && context.contains(variable, value) {
                context.remove(variable, value)?;
                changed = true;
            }
        }
    }

    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_moves_to_the_closest_congruent_values() {
        assert_eq!((2, 17), congruent_window(0, 20, Congruence::new(2, 5)));
        assert_eq!((-8, 7), congruent_window(-10, 10, Congruence::new(2, 5)));
    }

    #[test]
    fn window_is_unchanged_when_the_bounds_are_congruent() {
        assert_eq!((3, 15), congruent_window(3, 15, Congruence::new(0, 3)));
    }

    #[test]
    fn window_is_empty_without_congruent_values() {
        let (min, max) = congruent_window(6, 8, Congruence::new(0, 5));

        assert!(min > max);
    }
}
