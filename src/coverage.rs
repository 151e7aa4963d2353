use std::collections::HashSet;
use crate::models::PersonId;

/// Which people have been covered by at least one accepted member listing.
pub struct CoverageTracker {
  covered: Vec<bool>,
}

impl CoverageTracker {
  pub fn new(people: usize) -> Self {
    CoverageTracker { covered: vec![false; people] }
  }

  pub fn mark_covered(&mut self, person: PersonId) {
    self.covered[person.slot()] = true;
  }

  pub fn uncovered(&self) -> impl Iterator<Item = PersonId> + '_ {
    self.covered.iter()
      .enumerate()
      .filter(|&(_, &covered)| !covered)
      .map(|(slot, _)| PersonId(slot + 1))
  }

  /// Smallest uncovered person, if any.
  pub fn first_uncovered(&self) -> Option<PersonId> {
    self.uncovered().next()
  }
}

/// Members already listed under the parasol currently being checked.
#[derive(Default)]
pub struct ParasolMembers {
  seen: HashSet<PersonId>,
}

impl ParasolMembers {
  pub fn with_capacity(members: usize) -> Self {
    ParasolMembers { seen: HashSet::with_capacity(members) }
  }

  /// `false` when `person` was already listed under this parasol.
  pub fn check_and_insert(&mut self, person: PersonId) -> bool {
    self.seen.insert(person)
  }
}
