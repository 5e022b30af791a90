use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use log::trace;

use super::gcd_chain::FoldedGcd;
use super::gcd_chain::GcdChain;
use super::pruning::apply_congruence;
use super::term_set::TermSet;
use super::Congruence;
use super::ModuloOptions;
use crate::basic_types::Inconsistency;
use crate::basic_types::PropagationOutcome;
use crate::basic_types::PropagationStatusCP;
use crate::basic_types::PropagatorConflict;
use crate::congruence_assert_advanced;
use crate::create_statistics_struct;
use crate::engine::notifications::DomainEvents;
use crate::engine::variables::IntegerVariable;
use crate::engine::EmptyDomain;
use crate::math::number_theory::positive_mod;
use crate::math::number_theory::positive_mod_wide;
use crate::propagation::Priority;
use crate::propagation::PropagationContextMut;
use crate::propagation::Propagator;
use crate::propagation::PropagatorConstructor;
use crate::propagation::PropagatorConstructorContext;
use crate::propagation::ReadDomains;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;

create_statistics_struct!(ModuloStatistics {
    num_calls: u64,
    /// Calls in which the gcd of the unretired coefficients was 1.
    num_vacuous_calls: u64,
    num_indivisible_right_hand_sides: u64,
    num_incompatible_congruences: u64,
    /// Variables assigned because they were the only unretired term.
    num_direct_assignments: u64,
    num_derived_congruences: u64,
    num_merged_congruences: u64,
    /// Domains narrowed by a congruence.
    num_pruned_domains: u64,
});

/// The [`PropagatorConstructor`] for the [`ModuloPropagator`].
#[derive(Clone, Debug)]
pub(crate) struct ModuloPropagatorArgs<Var> {
    pub(crate) terms: Box<[(i32, Var)]>,
    pub(crate) rhs: i32,
    pub(crate) options: ModuloOptions,
}

impl<Var> PropagatorConstructor for ModuloPropagatorArgs<Var>
where
    Var: IntegerVariable + 'static,
{
    type PropagatorImpl = ModuloPropagator<Var>;

    fn create(self, mut context: PropagatorConstructorContext) -> Self::PropagatorImpl {
        let term_set = TermSet::new(&self.terms, self.rhs);
        for term in term_set.terms() {
            context.register(term.variable.clone(), DomainEvents::BOUNDS);
        }

        ModuloPropagator {
            term_set,
            options: self.options,
            statistics: Rc::default(),
        }
    }
}

/// Propagator for `Σ aᵢ·xᵢ = c` which reasons about divisibility instead of bounds.
///
/// For every unassigned `xᵢ`, the equation implies `aᵢ·xᵢ ≡ c' (mod g)` where `g` is the gcd of
/// the coefficients of the other unassigned terms and `c'` is the right-hand side after
/// substituting the assigned variables. This yields a congruence `xᵢ ≡ r (mod m)`, which moves
/// the bounds of `xᵢ` to the closest values satisfying it. The congruences of earlier calls are
/// remembered per term and combined with the new ones.
///
/// The propagator does not enforce the equation by itself; it is always posted together with
/// [`LinearEqualPropagator`](crate::propagators::LinearEqualPropagator).
///
/// The terms, the right-hand side and the remembered congruences are part of the propagator, and
/// therefore copied together with the rest of the [`State`](crate::State). The statistics are
/// shared between all copies.
#[derive(Clone, Debug)]
pub(crate) struct ModuloPropagator<Var> {
    term_set: TermSet<Var>,
    options: ModuloOptions,
    statistics: Rc<RefCell<ModuloStatistics>>,
}

impl<Var: IntegerVariable> ModuloPropagator<Var> {
    pub(crate) fn rhs(&self) -> i128 {
        self.term_set.rhs()
    }

    /// The coefficient of every term, zero for retired terms.
    pub(crate) fn coefficients(&self) -> impl Iterator<Item = i64> + '_ {
        self.term_set.terms().iter().map(|term| term.coefficient)
    }

    /// The congruence remembered for every term.
    pub(crate) fn memory(&self) -> impl Iterator<Item = Congruence> + '_ {
        self.term_set.terms().iter().map(|term| term.memory)
    }

    /// Reports the outcome once no unretired term remains at the start of a call.
    fn check_all_retired(&self) -> PropagationStatusCP {
        if self.term_set.rhs() == 0 {
            Ok(PropagationOutcome::Solved)
        } else {
            Err(PropagatorConflict::UnsatisfiedEquation {
                lhs: self.term_set.constant() - self.term_set.rhs(),
                rhs: self.term_set.constant(),
            }
            .into())
        }
    }

    /// Narrows the domain of the term at `position` with the congruence derived from the gcd of
    /// the other coefficients.
    fn prune_term(
        &mut self,
        context: &mut PropagationContextMut,
        position: usize,
        others_gcd: i64,
    ) -> Result<(), Inconsistency> {
        let term = &self.term_set.terms()[position];
        let variable = term.variable.clone();
        let previous = term.memory;

        // Only the residue matters for a congruence modulo the gcd.
        let rhs = positive_mod_wide(self.term_set.rhs(), others_gcd as i128) as i64;
        let Some(derived) = Congruence::derive(term.coefficient, others_gcd, rhs) else {
            trace!("{variable}: no congruence modulo {others_gcd}");
            return Ok(());
        };
        congruence_assert_advanced!(
            positive_mod(term.coefficient * derived.offset() - rhs, others_gcd) == 0,
            "{derived} does not solve {}·x ≡ {rhs} (mod {others_gcd})",
            term.coefficient
        );
        self.statistics.borrow_mut().num_derived_congruences += 1;

        // For equal moduli the newer congruence replaces the remembered one.
        let congruence = if !self.options.merge_congruences
            || previous.is_unconstrained()
            || previous.modulus() == derived.modulus()
        {
            derived
        } else {
            let merged = previous.merge(derived).map_err(|_| {
                self.statistics.borrow_mut().num_incompatible_congruences += 1;
                debug!("{variable}: x {previous} contradicts x {derived}");
                PropagatorConflict::IncompatibleCongruences { previous, derived }
            })?;
            self.statistics.borrow_mut().num_merged_congruences += 1;
            merged
        };
        self.term_set.remember(position, congruence);

        let before = (context.lower_bound(&variable), context.upper_bound(&variable));
        let changed = apply_congruence(context, &variable, congruence, self.options.pruning)?;
        if changed {
            self.statistics.borrow_mut().num_pruned_domains += 1;
            trace!(
                "{variable} {congruence}: [{}, {}] -> [{}, {}]",
                before.0,
                before.1,
                context.lower_bound(&variable),
                context.upper_bound(&variable)
            );
        }

        Ok(())
    }

    /// Assigns the only unretired term, `a·x = rhs`.
    fn assign_alone(
        &mut self,
        context: &mut PropagationContextMut,
        position: usize,
    ) -> Result<(), Inconsistency> {
        let term = &self.term_set.terms()[position];
        let rhs = self.term_set.rhs();

        // Exact, since the gcd of the single coefficient divides the right-hand side.
        let value = rhs / term.coefficient as i128;
        let value = i32::try_from(value).map_err(|_| EmptyDomain)?;
        trace!("{}: assigned {value} as the only unretired term", term.variable);

        context.assign(&term.variable, value)?;
        self.statistics.borrow_mut().num_direct_assignments += 1;

        Ok(())
    }
}

impl<Var> Propagator for ModuloPropagator<Var>
where
    Var: IntegerVariable + 'static,
{
    fn name(&self) -> &str {
        "ModuloCongruence"
    }

    fn priority(&self) -> Priority {
        Priority::High
    }

    fn log_statistics(&self, statistic_logger: StatisticLogger) {
        Statistic::log(&*self.statistics.borrow(), statistic_logger);
    }

    fn propagate(&mut self, mut context: PropagationContextMut) -> PropagationStatusCP {
        self.statistics.borrow_mut().num_calls += 1;

        let num_retired = self.term_set.retire_assigned_terms(&context);
        if num_retired > 0 {
            trace!("retired {num_retired} terms, rhs is now {}", self.term_set.rhs());
        }

        let chain = GcdChain::build(self.term_set.terms());
        let gcd = match chain.global {
            FoldedGcd::NoOtherTerms => return self.check_all_retired(),
            FoldedGcd::Gcd(1) => {
                self.statistics.borrow_mut().num_vacuous_calls += 1;
                return Ok(PropagationOutcome::Fixpoint);
            }
            FoldedGcd::Gcd(gcd) => gcd,
        };

        let rhs = self.term_set.rhs();
        if positive_mod_wide(rhs, gcd as i128) != 0 {
            self.statistics.borrow_mut().num_indivisible_right_hand_sides += 1;
            debug!("the right-hand side {rhs} is not a multiple of {gcd}");
            return Err(PropagatorConflict::IndivisibleRightHandSide { rhs, gcd }.into());
        }

        trace!(
            "rhs {rhs}, gcd {gcd}, chain [{}]",
            chain
                .entries
                .iter()
                .map(|entry| format!("{}: {}", entry.position, entry.others))
                .collect::<Vec<_>>()
                .join(", ")
        );

        for entry in chain.entries {
            match entry.others {
                FoldedGcd::NoOtherTerms => self.assign_alone(&mut context, entry.position)?,
                FoldedGcd::Gcd(others_gcd) => {
                    self.prune_term(&mut context, entry.position, others_gcd)?
                }
            }
        }

        match self.term_set.residual_when_fixed(&context) {
            None => Ok(PropagationOutcome::Fixpoint),
            Some(0) => Ok(PropagationOutcome::Solved),
            Some(residual) => Err(PropagatorConflict::UnsatisfiedEquation {
                lhs: self.term_set.constant() - residual,
                rhs: self.term_set.constant(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::Rng;
    use rand::SeedableRng;

    use super::*;
    use crate::engine::test_solver::TestSolver;
    use crate::engine::variables::DomainId;
    use crate::propagators::modulo::CongruencePruning;

    fn modulo_propagator(
        solver: &mut TestSolver,
        coefficients: &[i32],
        variables: &[DomainId],
        rhs: i32,
        options: ModuloOptions,
    ) -> crate::propagation::PropagatorId {
        solver.new_propagator(ModuloPropagatorArgs {
            terms: coefficients
                .iter()
                .copied()
                .zip(variables.iter().copied())
                .collect(),
            rhs,
            options,
        })
    }

    fn variables(solver: &mut TestSolver, count: usize, lb: i32, ub: i32) -> Vec<DomainId> {
        (0..count).map(|_| solver.new_variable(lb, ub)).collect()
    }

    #[test]
    fn divisible_right_hand_side_is_not_a_failure() {
        let mut solver = TestSolver::default();
        let x = variables(&mut solver, 4, 0, 100);
        let propagator =
            modulo_propagator(&mut solver, &[3, 6, 9, 12], &x, 2565, ModuloOptions::default());

        let status = solver.propagate(propagator);

        assert_eq!(Ok(PropagationOutcome::Fixpoint), status);
        // Every coefficient is a multiple of the gcd of the others, so no congruence is derived.
        for variable in x {
            solver.assert_bounds(variable, 0, 100);
        }
    }

    #[test]
    fn indivisible_right_hand_side_fails_before_pruning() {
        let mut solver = TestSolver::default();
        let x = variables(&mut solver, 4, 0, 100);
        let propagator =
            modulo_propagator(&mut solver, &[3, 6, 9, 12], &x, 2035, ModuloOptions::default());

        let status = solver.propagate(propagator);

        assert_eq!(
            Err(Inconsistency::Conflict(
                PropagatorConflict::IndivisibleRightHandSide { rhs: 2035, gcd: 3 }
            )),
            status
        );
        for variable in x {
            solver.assert_bounds(variable, 0, 100);
        }
    }

    #[test]
    fn the_only_unretired_term_is_assigned_directly() {
        let mut solver = TestSolver::default();
        let x = variables(&mut solver, 4, 0, 100);
        let propagator =
            modulo_propagator(&mut solver, &[3, 6, 9, 5], &x, 62, ModuloOptions::default());

        solver.assign(x[0], 1).expect("in the domain");
        solver.assign(x[1], 2).expect("in the domain");
        solver.assign(x[2], 3).expect("in the domain");

        let status = solver.propagate(propagator);

        assert_eq!(Ok(PropagationOutcome::Solved), status);
        solver.assert_bounds(x[3], 4, 4);
        let propagator = solver.propagator::<ModuloPropagator<DomainId>>(propagator);
        assert_eq!(20, propagator.rhs());
        assert_eq!(vec![0, 0, 0, 5], propagator.coefficients().collect::<Vec<_>>());
    }

    #[test]
    fn a_vacuous_congruence_leaves_the_domain_untouched() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 10);
        let y = solver.new_variable(0, 10);
        let propagator =
            modulo_propagator(&mut solver, &[2, 4], &[x, y], 10, ModuloOptions::default());

        let status = solver.propagate(propagator);

        assert_eq!(Ok(PropagationOutcome::Fixpoint), status);
        // 2x + 4y = 10 implies that x is odd, but nothing about y.
        solver.assert_bounds(x, 1, 9);
        solver.assert_bounds(y, 0, 10);
        let propagator = solver.propagator::<ModuloPropagator<DomainId>>(propagator);
        assert_eq!(
            vec![Congruence::new(1, 2), Congruence::UNCONSTRAINED],
            propagator.memory().collect::<Vec<_>>()
        );
    }

    #[test]
    fn gcd_one_is_a_vacuous_pass() {
        let mut solver = TestSolver::default();
        let x = variables(&mut solver, 3, 0, 10);
        let propagator =
            modulo_propagator(&mut solver, &[4, 6, 3], &x, 13, ModuloOptions::default());

        let status = solver.propagate(propagator);

        assert_eq!(Ok(PropagationOutcome::Fixpoint), status);
        for variable in x {
            solver.assert_bounds(variable, 0, 10);
        }
    }

    #[test]
    fn remembered_congruences_are_refined() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 20);
        let y = solver.new_variable(0, 5);
        let z = solver.new_variable(0, 5);
        let propagator =
            modulo_propagator(&mut solver, &[2, 4, 8], &[x, y, z], 10, ModuloOptions::default());

        let _ = solver.propagate(propagator).expect("no conflict");
        solver.assert_bounds(x, 1, 19);

        solver.assign(y, 0).expect("in the domain");
        let _ = solver.propagate(propagator).expect("no conflict");

        // 2x + 8z = 10 implies x ≡ 1 (mod 4).
        solver.assert_bounds(x, 1, 17);
        let propagator = solver.propagator::<ModuloPropagator<DomainId>>(propagator);
        assert_eq!(10, propagator.rhs());
        assert_eq!(Some(Congruence::new(1, 4)), propagator.memory().next());
    }

    #[test]
    fn values_pruning_removes_interior_values() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 10);
        let y = solver.new_variable(0, 10);
        let options = ModuloOptions {
            pruning: CongruencePruning::Values,
            ..Default::default()
        };
        let propagator = modulo_propagator(&mut solver, &[2, 4], &[x, y], 10, options);

        let _ = solver.propagate(propagator).expect("no conflict");

        solver.assert_bounds(x, 1, 9);
        for value in 1..=9 {
            assert_eq!(value % 2 == 1, solver.contains(x, value), "value {value}");
        }
    }

    #[test]
    fn a_window_without_congruent_values_fails() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(2, 2);
        let y = solver.new_variable(0, 10);
        let propagator =
            modulo_propagator(&mut solver, &[2, 4], &[y, x], 10, ModuloOptions::default());
        // After retiring x the equation is 2y = 2, so y is assigned.
        let status = solver.propagate(propagator);
        assert_eq!(Ok(PropagationOutcome::Solved), status);
        solver.assert_bounds(y, 1, 1);

        let mut solver = TestSolver::default();
        let x = solver.new_variable(2, 3);
        let y = solver.new_variable(0, 10);
        let propagator =
            modulo_propagator(&mut solver, &[4, 6], &[x, y], 20, ModuloOptions::default());
        // 4x + 6y = 20 implies x ≡ 2 (mod 3), which leaves x = 2; 6y ≡ 20 (mod 4) implies
        // y ≡ 0 (mod 2).
        let _ = solver.propagate(propagator).expect("no conflict");
        solver.assert_bounds(x, 2, 2);
        solver.assert_bounds(y, 0, 10);

        let mut solver = TestSolver::default();
        let x = solver.new_variable(3, 4);
        let y = solver.new_variable(0, 10);
        let propagator =
            modulo_propagator(&mut solver, &[4, 6], &[x, y], 20, ModuloOptions::default());
        let status = solver.propagate(propagator);
        assert_eq!(Err(Inconsistency::EmptyDomain), status);
    }

    #[test]
    fn all_terms_retired_reports_solved_or_failed() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(2, 2);
        let y = solver.new_variable(3, 3);
        let satisfied =
            modulo_propagator(&mut solver, &[2, 4], &[x, y], 16, ModuloOptions::default());
        let violated =
            modulo_propagator(&mut solver, &[2, 4], &[x, y], 18, ModuloOptions::default());

        assert_eq!(Ok(PropagationOutcome::Solved), solver.propagate(satisfied));
        assert_eq!(
            Err(Inconsistency::Conflict(
                PropagatorConflict::UnsatisfiedEquation { lhs: 16, rhs: 18 }
            )),
            solver.propagate(violated)
        );
    }

    #[test]
    fn propagation_at_the_fixpoint_is_idempotent() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 30);
        let y = solver.new_variable(0, 30);
        let z = solver.new_variable(0, 30);
        let propagator =
            modulo_propagator(&mut solver, &[6, 10, 15], &[x, y, z], 91, ModuloOptions::default());
        solver.assign(z, 1).expect("in the domain");
        solver.propagate_until_fixed_point().expect("no conflict");

        let before = solver.clone();
        let status = solver.propagate(propagator);

        assert_eq!(Ok(PropagationOutcome::Fixpoint), status);
        for variable in [x, y, z] {
            assert_eq!(before.lower_bound(variable), solver.lower_bound(variable));
            assert_eq!(before.upper_bound(variable), solver.upper_bound(variable));
        }
        let previous = before.propagator::<ModuloPropagator<DomainId>>(propagator);
        let current = solver.propagator::<ModuloPropagator<DomainId>>(propagator);
        assert_eq!(previous.rhs(), current.rhs());
        assert!(previous.memory().eq(current.memory()));
        assert!(previous.coefficients().eq(current.coefficients()));
    }

    #[test]
    fn copies_of_the_propagator_evolve_independently() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 20);
        let y = solver.new_variable(0, 5);
        let z = solver.new_variable(0, 5);
        let propagator =
            modulo_propagator(&mut solver, &[2, 4, 8], &[x, y, z], 10, ModuloOptions::default());
        let _ = solver.propagate(propagator).expect("no conflict");

        let mut branch = solver.clone();
        branch.assign(y, 0).expect("in the domain");
        let _ = branch.propagate(propagator).expect("no conflict");

        solver.assert_bounds(x, 1, 19);
        solver.assert_bounds(y, 0, 5);
        let original = solver.propagator::<ModuloPropagator<DomainId>>(propagator);
        assert_eq!(10, original.rhs());
        assert_eq!(vec![2, 4, 8], original.coefficients().collect::<Vec<_>>());
        assert_eq!(Some(Congruence::new(1, 2)), original.memory().next());

        let copy = branch.propagator::<ModuloPropagator<DomainId>>(propagator);
        assert_eq!(vec![2, 0, 8], copy.coefficients().collect::<Vec<_>>());
        assert_eq!(Some(Congruence::new(1, 4)), copy.memory().next());
    }

    #[test]
    fn a_congruence_with_the_remembered_modulus_replaces_it() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 20);
        let y = solver.new_variable(0, 5);
        let z = solver.new_variable(0, 5);
        let propagator =
            modulo_propagator(&mut solver, &[4, 6, 12], &[x, y, z], 4, ModuloOptions::default());
        solver
            .propagator_mut::<ModuloPropagator<DomainId>>(propagator)
            .term_set
            .remember(0, Congruence::new(0, 3));

        // 4x ≡ 4 (mod 6) implies x ≡ 1 (mod 3), which has no common value with x ≡ 0 (mod 3).
        assert_eq!(Ok(PropagationOutcome::Fixpoint), solver.propagate(propagator));
        solver.assert_bounds(x, 1, 19);
        let propagator = solver.propagator::<ModuloPropagator<DomainId>>(propagator);
        assert_eq!(Some(Congruence::new(1, 3)), propagator.memory().next());
    }

    #[test]
    fn extreme_assigned_terms_are_retired_exactly() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(i32::MIN, i32::MIN);
        let y = solver.new_variable(i32::MIN, i32::MIN);
        let z = solver.new_variable(0, 10);
        let propagator = modulo_propagator(
            &mut solver,
            &[i32::MIN, i32::MIN, 2],
            &[x, y, z],
            -1,
            ModuloOptions::default(),
        );

        assert_eq!(
            Err(Inconsistency::Conflict(
                PropagatorConflict::IndivisibleRightHandSide {
                    rhs: -1 - (1_i128 << 63),
                    gcd: 2
                }
            )),
            solver.propagate(propagator)
        );
    }

    #[test]
    fn a_direct_assignment_outside_of_the_i32_range_fails() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(i32::MIN, i32::MIN);
        let y = solver.new_variable(i32::MIN, i32::MIN);
        let z = solver.new_variable(i32::MIN, i32::MAX);
        let propagator = modulo_propagator(
            &mut solver,
            &[i32::MIN, i32::MIN, 2],
            &[x, y, z],
            0,
            ModuloOptions::default(),
        );

        // 2z = -2^63 requires z = -2^62.
        assert_eq!(Err(Inconsistency::EmptyDomain), solver.propagate(propagator));
    }

    #[test]
    fn without_merging_the_derived_congruence_replaces_the_remembered_one() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 20);
        let y = solver.new_variable(0, 5);
        let z = solver.new_variable(0, 5);
        let options = ModuloOptions {
            merge_congruences: false,
            ..Default::default()
        };
        let propagator = modulo_propagator(&mut solver, &[2, 4, 8], &[x, y, z], 10, options);

        let _ = solver.propagate(propagator).expect("no conflict");
        solver.assign(y, 0).expect("in the domain");
        let _ = solver.propagate(propagator).expect("no conflict");

        solver.assert_bounds(x, 1, 17);
        let propagator = solver.propagator::<ModuloPropagator<DomainId>>(propagator);
        assert_eq!(Some(Congruence::new(1, 4)), propagator.memory().next());
    }

    #[test]
    fn known_solutions_survive_propagation() {
        let mut rng = SmallRng::seed_from_u64(7);

        for _ in 0..500 {
            let num_terms = rng.gen_range(1..=5);
            let coefficients: Vec<i32> = (0..num_terms)
                .map(|_| match rng.gen_range(1..=12) * 2 {
                    coefficient if rng.gen_bool(0.3) => -coefficient,
                    coefficient if rng.gen_bool(0.3) => coefficient + 1,
                    coefficient => coefficient,
                })
                .collect();
            let solution: Vec<i32> = (0..num_terms).map(|_| rng.gen_range(-20..=20)).collect();
            let rhs = coefficients
                .iter()
                .zip(&solution)
                .map(|(coefficient, value)| coefficient * value)
                .sum();

            let mut solver = TestSolver::default();
            let x = variables(&mut solver, num_terms, -20, 20);
            let options = ModuloOptions {
                merge_congruences: rng.gen_bool(0.8),
                pruning: if rng.gen_bool(0.5) {
                    CongruencePruning::Values
                } else {
                    CongruencePruning::Bounds
                },
                limit_domains: false,
            };
            let propagator = modulo_propagator(&mut solver, &coefficients, &x, rhs, options);

            for (&variable, &value) in x.iter().zip(&solution) {
                let before: Vec<(i32, i32)> = x
                    .iter()
                    .map(|&other| (solver.lower_bound(other), solver.upper_bound(other)))
                    .collect();

                let status = solver.propagate(propagator);
                assert!(
                    status.is_ok(),
                    "{coefficients:?} = {rhs} with solution {solution:?} failed: {status:?}"
                );

                for ((&other, &expected), (lower_bound, upper_bound)) in
                    x.iter().zip(&solution).zip(before)
                {
                    assert!(solver.contains(other, expected), "{coefficients:?} = {rhs}");
                    assert!(solver.lower_bound(other) >= lower_bound);
                    assert!(solver.upper_bound(other) <= upper_bound);
                }

                if rng.gen_bool(0.5) {
                    solver.assign(variable, value).expect("the value is in the domain");
                }
            }
        }
    }
}
