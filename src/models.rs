use std::fmt;

pub type Coordinate = f64;

/// 1-based index of a person in the official input.
#[derive(Clone, Copy, Hash, Ord, PartialOrd, Eq, PartialEq, Debug)]
pub struct PersonId(pub usize);

impl PersonId {
  pub fn slot(self) -> usize {
    self.0 - 1
  }
}

impl fmt::Display for PersonId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Position {
  pub x: Coordinate,
  pub y: Coordinate,
}

impl fmt::Display for Position {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({:.6}, {:.6})", self.x, self.y)
  }
}

/// Header of one submitted parasol, read before any of its members.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parasol {
  pub center: Position,
  pub radius: Coordinate,
}

impl fmt::Display for Parasol {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "[{}, {:.6}]", self.center, self.radius)
  }
}

#[derive(Debug, PartialEq)]
pub struct ProblemSpec {
  pub people: Vec<Position>,
}

impl ProblemSpec {
  pub fn len(&self) -> usize {
    self.people.len()
  }

  pub fn person(&self, id: PersonId) -> Position {
    self.people[id.slot()]
  }

  /// Resolves a raw submitted index, `None` when it lies outside `[1, N]`.
  pub fn person_id(&self, raw: i64) -> Option<PersonId> {
    usize::try_from(raw).ok()
      .filter(|&idx| (1..=self.len()).contains(&idx))
      .map(PersonId)
  }
}
