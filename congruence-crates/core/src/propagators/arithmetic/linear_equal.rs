use log::trace;

use crate::basic_types::PropagationOutcome;
use crate::basic_types::PropagationStatusCP;
use crate::basic_types::PropagatorConflict;
use crate::engine::notifications::DomainEvents;
use crate::engine::variables::IntegerVariable;
use crate::engine::EmptyDomain;
use crate::math::num_ext::NumExt;
use crate::propagation::Priority;
use crate::propagation::PropagationContextMut;
use crate::propagation::Propagator;
use crate::propagation::PropagatorConstructor;
use crate::propagation::PropagatorConstructorContext;
use crate::propagation::ReadDomains;

/// The [`PropagatorConstructor`] for the [`LinearEqualPropagator`].
#[derive(Clone, Debug)]
pub(crate) struct LinearEqualPropagatorArgs<Var> {
    pub(crate) terms: Box<[(i32, Var)]>,
    pub(crate) rhs: i32,
}

impl<Var> PropagatorConstructor for LinearEqualPropagatorArgs<Var>
where
    Var: IntegerVariable + 'static,
{
    type PropagatorImpl = LinearEqualPropagator<Var>;

    fn create(self, mut context: PropagatorConstructorContext) -> Self::PropagatorImpl {
        let terms: Box<[(i128, Var)]> = self
            .terms
            .iter()
            .filter(|(coefficient, _)| *coefficient != 0)
            .map(|(coefficient, variable)| (*coefficient as i128, variable.clone()))
            .collect();

        for (_, variable) in terms.iter() {
            context.register(variable.clone(), DomainEvents::BOUNDS);
        }

        LinearEqualPropagator {
            terms,
            rhs: self.rhs as i128,
        }
    }
}

/// Bounds consistent propagator for the constraint `Σ aᵢ·xᵢ = c`.
///
/// Sums are taken over `i128`; a sum of `i32` products exceeds `i64` after three terms.
#[derive(Clone, Debug)]
pub(crate) struct LinearEqualPropagator<Var> {
    terms: Box<[(i128, Var)]>,
    rhs: i128,
}

/// The bounds of `coefficient·variable`.
fn term_bounds<Var: IntegerVariable>(
    context: &impl ReadDomains,
    coefficient: i128,
    variable: &Var,
) -> (i128, i128) {
    let lower_bound = coefficient * context.lower_bound(variable) as i128;
    let upper_bound = coefficient * context.upper_bound(variable) as i128;

    if coefficient > 0 {
        (lower_bound, upper_bound)
    } else {
        (upper_bound, lower_bound)
    }
}

impl<Var: IntegerVariable> LinearEqualPropagator<Var> {
    fn left_hand_side_when_fixed(&self, context: &impl ReadDomains) -> Option<i128> {
        self.terms.iter().try_fold(0, |sum, (coefficient, variable)| {
            context
                .fixed_value(variable)
                .map(|value| sum + coefficient * value as i128)
        })
    }
}

impl<Var> Propagator for LinearEqualPropagator<Var>
where
    Var: IntegerVariable + 'static,
{
    fn name(&self) -> &str {
        "LinearEqual"
    }

    fn priority(&self) -> Priority {
        Priority::Low
    }

    fn propagate(&mut self, mut context: PropagationContextMut) -> PropagationStatusCP {
        let (min_sum, max_sum) = self
            .terms
            .iter()
            .map(|(coefficient, variable)| term_bounds(&context, *coefficient, variable))
            .fold((0_i128, 0_i128), |(min_sum, max_sum), (min, max)| {
                (min_sum + min, max_sum + max)
            });

        if min_sum > self.rhs || max_sum < self.rhs {
            trace!("{} is outside of [{min_sum}, {max_sum}]", self.rhs);
            return Err(EmptyDomain.into());
        }

        for (coefficient, variable) in self.terms.iter() {
            let (min, max) = term_bounds(&context, *coefficient, variable);

            // The bounds of coefficient·variable implied by the other terms.
            let term_min = self.rhs - (max_sum - max);
            let term_max = self.rhs - (min_sum - min);

            let (lower_bound, upper_bound) = if *coefficient > 0 {
                (
                    <i128 as NumExt>::div_ceil(term_min, *coefficient),
                    <i128 as NumExt>::div_floor(term_max, *coefficient),
                )
            } else {
                (
                    <i128 as NumExt>::div_ceil(term_max, *coefficient),
                    <i128 as NumExt>::div_floor(term_min, *coefficient),
                )
            };

            let lower_bound = lower_bound.max(context.lower_bound(variable) as i128);
            let upper_bound = upper_bound.min(context.upper_bound(variable) as i128);
            if lower_bound > upper_bound {
                return Err(EmptyDomain.into());
            }

            // Both lie within the current bounds.
            context.restrict_range(variable, lower_bound as i32, upper_bound as i32)?;
        }

        match self.left_hand_side_when_fixed(&context) {
            None => Ok(PropagationOutcome::Fixpoint),
            Some(lhs) if lhs == self.rhs => Ok(PropagationOutcome::Solved),
            Some(lhs) => Err(PropagatorConflict::UnsatisfiedEquation { lhs, rhs: self.rhs }.into()),
        }
    }
}
