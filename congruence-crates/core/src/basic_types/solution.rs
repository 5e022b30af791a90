use itertools::Itertools;

use crate::containers::KeyedVec;
use crate::engine::variables::DomainId;

/// A solution which maps every [`DomainId`] to the value it was fixed to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    values: KeyedVec<DomainId, i32>,
}

impl Solution {
    pub(crate) fn new(values: KeyedVec<DomainId, i32>) -> Self {
        Solution { values }
    }

    /// The value assigned to `domain_id`.
    pub fn value(&self, domain_id: DomainId) -> i32 {
        self.values[domain_id]
    }

    /// The values of the given variables, in the given order.
    pub fn values_of<'a>(
        &'a self,
        domains: impl IntoIterator<Item = &'a DomainId> + 'a,
    ) -> impl Iterator<Item = i32> + 'a {
        domains.into_iter().map(|domain| self.value(*domain))
    }

    pub fn num_domains(&self) -> usize {
        self.values.len()
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.values.iter().join(", "))
    }
}
