use crate::congruence_assert_moderate;
use crate::congruence_assert_simple;
use crate::containers::HashSet;
use crate::containers::KeyedVec;
use crate::engine::notifications::DomainEvent;
use crate::engine::variables::DomainId;

/// The domains of all integer variables, together with the domain events which happened since
/// the events were last drained.
#[derive(Clone, Debug, Default)]
pub struct Assignments {
    domains: KeyedVec<DomainId, IntegerDomain>,
    events: Vec<(DomainId, DomainEvent)>,
}

/// Indicates that a domain operation would leave a domain without any values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyDomain;

impl Assignments {
    pub(crate) fn grow(&mut self, lower_bound: i32, upper_bound: i32) -> DomainId {
        congruence_assert_simple!(
            lower_bound <= upper_bound,
            "cannot create the empty domain [{lower_bound}, {upper_bound}]"
        );
        self.domains.push(IntegerDomain::new(lower_bound, upper_bound))
    }

    pub fn num_domains(&self) -> u32 {
        self.domains.len() as u32
    }

    pub fn get_domains(&self) -> impl Iterator<Item = DomainId> {
        self.domains.keys()
    }

    pub fn get_lower_bound(&self, domain_id: DomainId) -> i32 {
        self.domains[domain_id].lower_bound
    }

    pub fn get_upper_bound(&self, domain_id: DomainId) -> i32 {
        self.domains[domain_id].upper_bound
    }

    pub fn is_value_in_domain(&self, domain_id: DomainId, value: i32) -> bool {
        self.domains[domain_id].contains(value)
    }

    pub fn is_domain_assigned(&self, domain_id: DomainId) -> bool {
        self.get_lower_bound(domain_id) == self.get_upper_bound(domain_id)
    }

    pub fn get_assigned_value(&self, domain_id: DomainId) -> Option<i32> {
        self.is_domain_assigned(domain_id)
            .then(|| self.get_lower_bound(domain_id))
    }

    /// Returns true if every domain is a single value.
    pub fn all_assigned(&self) -> bool {
        self.domains
            .iter()
            .all(|domain| domain.lower_bound == domain.upper_bound)
    }

    /// The number of values in the domain, taking holes into account.
    pub fn get_domain_size(&self, domain_id: DomainId) -> u64 {
        self.domains[domain_id].size()
    }

    /// Iterate over the values in the domain in increasing order.
    pub fn iterate_domain(&self, domain_id: DomainId) -> impl Iterator<Item = i32> + '_ {
        let domain = &self.domains[domain_id];
        (domain.lower_bound..=domain.upper_bound).filter(|value| !domain.holes.contains(value))
    }

    pub(crate) fn tighten_lower_bound(
        &mut self,
        domain_id: DomainId,
        new_lower_bound: i32,
    ) -> Result<(), EmptyDomain> {
        let domain = &mut self.domains[domain_id];
        if new_lower_bound <= domain.lower_bound {
            return Ok(());
        }
        if new_lower_bound > domain.upper_bound {
            return Err(EmptyDomain);
        }

        domain.lower_bound = new_lower_bound;
        while domain.holes.remove(&domain.lower_bound) {
            domain.lower_bound += 1;
        }
        congruence_assert_moderate!(domain.lower_bound <= domain.upper_bound);

        let is_assigned = domain.lower_bound == domain.upper_bound;
        self.events.push((domain_id, DomainEvent::LowerBound));
        if is_assigned {
            self.events.push((domain_id, DomainEvent::Assign));
        }

        Ok(())
    }

    pub(crate) fn tighten_upper_bound(
        &mut self,
        domain_id: DomainId,
        new_upper_bound: i32,
    ) -> Result<(), EmptyDomain> {
        let domain = &mut self.domains[domain_id];
        if new_upper_bound >= domain.upper_bound {
            return Ok(());
        }
        if new_upper_bound < domain.lower_bound {
            return Err(EmptyDomain);
        }

        domain.upper_bound = new_upper_bound;
        while domain.holes.remove(&domain.upper_bound) {
            domain.upper_bound -= 1;
        }
        congruence_assert_moderate!(domain.lower_bound <= domain.upper_bound);

        let is_assigned = domain.lower_bound == domain.upper_bound;
        self.events.push((domain_id, DomainEvent::UpperBound));
        if is_assigned {
            self.events.push((domain_id, DomainEvent::Assign));
        }

        Ok(())
    }

    pub(crate) fn remove_value_from_domain(
        &mut self,
        domain_id: DomainId,
        value: i32,
    ) -> Result<(), EmptyDomain> {
        let domain = &self.domains[domain_id];
        if !domain.contains(value) {
            return Ok(());
        }

        if value == domain.lower_bound {
            self.tighten_lower_bound(domain_id, value + 1)
        } else if value == domain.upper_bound {
            self.tighten_upper_bound(domain_id, value - 1)
        } else {
            let _ = self.domains[domain_id].holes.insert(value);
            self.events.push((domain_id, DomainEvent::Removal));
            Ok(())
        }
    }

    /// Takes the events which happened since the previous call.
    pub(crate) fn drain_domain_events(&mut self) -> Vec<(DomainId, DomainEvent)> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn clear_domain_events(&mut self) {
        self.events.clear();
    }

    /// The value of every domain; only meaningful once [`Assignments::all_assigned`] holds.
    pub(crate) fn assigned_values(&self) -> KeyedVec<DomainId, i32> {
        let mut values = KeyedVec::default();
        for domain in self.domains.iter() {
            congruence_assert_simple!(domain.lower_bound == domain.upper_bound);
            let _ = values.push(domain.lower_bound);
        }
        values
    }
}

/// An interval with holes. The bounds are always members of the domain.
#[derive(Clone, Debug)]
struct IntegerDomain {
    lower_bound: i32,
    upper_bound: i32,
    holes: HashSet<i32>,
}

impl IntegerDomain {
    fn new(lower_bound: i32, upper_bound: i32) -> Self {
        IntegerDomain {
            lower_bound,
            upper_bound,
            holes: HashSet::default(),
        }
    }

    fn contains(&self, value: i32) -> bool {
        self.lower_bound <= value && value <= self.upper_bound && !self.holes.contains(&value)
    }

    fn size(&self) -> u64 {
        let range = (self.upper_bound as i64 - self.lower_bound as i64 + 1) as u64;
        let holes_in_range = self
            .holes
            .iter()
            .filter(|&&hole| self.lower_bound < hole && hole < self.upper_bound)
            .count() as u64;
        range - holes_in_range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tightening_bounds_skips_holes() {
        let mut assignments = Assignments::default();
        let x = assignments.grow(0, 10);

        assignments.remove_value_from_domain(x, 3).expect("non-empty");
        assignments.remove_value_from_domain(x, 4).expect("non-empty");
        assignments.tighten_lower_bound(x, 3).expect("non-empty");

        assert_eq!(assignments.get_lower_bound(x), 5);
        assert_eq!(assignments.get_domain_size(x), 6);
    }

    #[test]
    fn removing_the_last_value_is_an_empty_domain() {
        let mut assignments = Assignments::default();
        let x = assignments.grow(4, 4);

        assert_eq!(assignments.remove_value_from_domain(x, 4), Err(EmptyDomain));
    }

    #[test]
    fn events_are_recorded_once_and_drained() {
        let mut assignments = Assignments::default();
        let x = assignments.grow(0, 1);

        assignments.tighten_upper_bound(x, 0).expect("non-empty");

        let events = assignments.drain_domain_events();
        assert_eq!(
            events,
            vec![(x, DomainEvent::UpperBound), (x, DomainEvent::Assign)]
        );
        assert!(assignments.drain_domain_events().is_empty());
    }

    #[test]
    fn tightening_beyond_the_other_bound_fails() {
        let mut assignments = Assignments::default();
        let x = assignments.grow(0, 5);

        assert_eq!(assignments.tighten_lower_bound(x, 6), Err(EmptyDomain));
        assert_eq!(assignments.tighten_upper_bound(x, -1), Err(EmptyDomain));
        assert_eq!(assignments.get_lower_bound(x), 0);
        assert_eq!(assignments.get_upper_bound(x), 5);
    }
}
