use tracing::{debug, trace};
use crate::coverage::{CoverageTracker, ParasolMembers};
use crate::geometry::within_radius;
use crate::models::ProblemSpec;
use crate::rejection::Rejection;
use crate::score::ScoreAccumulator;
use crate::submission::{ParasolHeader, SubmissionParser};

pub const DEFAULT_MAX_CIRCLES: usize = 1_000_000;

#[derive(Clone, Copy, Debug)]
pub struct CheckerConfig {
  pub max_circles: usize,
}

impl Default for CheckerConfig {
  fn default() -> Self {
    CheckerConfig { max_circles: DEFAULT_MAX_CIRCLES }
  }
}

/// Checks one submission against the problem, stopping at the first violation
/// in read order. Returns the total parasol area on success.
pub fn validate(problem: &ProblemSpec, output: &str, config: &CheckerConfig) -> Result<f64, Rejection> {
  let mut validator = Validator {
    problem,
    coverage: CoverageTracker::new(problem.len()),
    score: ScoreAccumulator::default(),
  };
  let mut parser = SubmissionParser::new(output);

  let declared = parser.circle_count(config.max_circles)?;
  debug!(declared, people = problem.len(), "checking parasols");

  for circle in 1..=declared {
    validator.check_parasol(&mut parser, circle)?;
  }

  parser.finish(declared)?;

  if let Some(person) = validator.coverage.first_uncovered() {
    return Err(Rejection::IncompleteCoverage { person });
  }

  Ok(validator.score.finalize())
}

struct Validator<'a> {
  problem: &'a ProblemSpec,
  coverage: CoverageTracker,
  score: ScoreAccumulator,
}

impl Validator<'_> {
  fn check_parasol(&mut self, parser: &mut SubmissionParser, circle: usize) -> Result<(), Rejection> {
    let ParasolHeader { parasol, members } = parser.header(circle)?;
    debug!(circle, %parasol, members, "parasol");

    if members < 2 {
      return Err(Rejection::TooFewMembers { parasol });
    }

    let members = usize::try_from(members).unwrap_or(usize::MAX);
    let mut seen = ParasolMembers::with_capacity(members.min(self.problem.len()));

    for position in 1..=members {
      let index = parser.member(circle, position)?;
      let person = self.problem.person_id(index)
        .ok_or(Rejection::IndexOutOfRange { circle, index, people: self.problem.len() })?;

      if !seen.check_and_insert(person) {
        return Err(Rejection::DuplicateInCircle { person, parasol });
      }

      if !within_radius(self.problem.person(person), parasol.center, parasol.radius) {
        return Err(Rejection::PointNotCovered { person, parasol });
      }

      trace!(circle, %person, "covered");
      self.coverage.mark_covered(person);
    }

    self.score.add(parasol.radius);
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use std::f64::consts::PI;
  use rand::seq::SliceRandom;
  use crate::input::read_problem;
  use crate::models::{Parasol, PersonId, Position};
  use crate::rejection::{Field, RejectionKind};
  use super::*;

  const TWO_PEOPLE: &str = "2\n0 0\n2 0\n";

  fn check(input: &str, output: &str) -> Result<f64, Rejection> {
    let problem = read_problem(input).unwrap();
    validate(&problem, output, &CheckerConfig::default())
  }

  fn kind(input: &str, output: &str) -> RejectionKind {
    check(input, output).unwrap_err().kind()
  }

  #[test]
  fn single_parasol_accepted() {
    let score = check(TWO_PEOPLE, "1\n1 0 1 2 1 2\n").unwrap();
    assert!((score - PI).abs() < 1e-12);
  }

  #[test]
  fn single_member_rejected() {
    assert_eq!(
      check(TWO_PEOPLE, "1\n0 0 0.5 1 1\n"),
      Err(Rejection::TooFewMembers {
        parasol: Parasol { center: Position { x: 0.0, y: 0.0 }, radius: 0.5 }
      })
    );
  }

  #[test]
  fn too_few_members_checked_before_indices() {
    // the member list is never read, so the bogus index is not reported
    assert_eq!(kind(TWO_PEOPLE, "1\n0 0 0.5 0 99\n"), RejectionKind::TooFewMembers);
    assert_eq!(kind(TWO_PEOPLE, "1\n0 0 0.5 -3\n"), RejectionKind::TooFewMembers);
  }

  #[test]
  fn no_parasols_leaves_people_uncovered() {
    assert_eq!(
      check(TWO_PEOPLE, "0\n"),
      Err(Rejection::IncompleteCoverage { person: PersonId(1) })
    );
  }

  #[test]
  fn no_people_no_parasols() {
    assert_eq!(check("0\n", "0"), Ok(0.0));
  }

  #[test]
  fn negative_count_declares_nothing() {
    assert_eq!(
      check(TWO_PEOPLE, "-1\n"),
      Err(Rejection::IncompleteCoverage { person: PersonId(1) })
    );
    assert_eq!(check("0\n", "-1"), Ok(0.0));
    assert_eq!(kind(TWO_PEOPLE, "-1\n1 0 1 2 1 2"), RejectionKind::TrailingContent);
  }

  #[test]
  fn reports_smallest_uncovered_person() {
    let input = "4\n0 0\n1 0\n10 10\n20 20\n";
    assert_eq!(
      check(input, "1\n0.5 0 0.5 2 1 2"),
      Err(Rejection::IncompleteCoverage { person: PersonId(3) })
    );
  }

  #[test]
  fn duplicate_within_parasol() {
    assert_eq!(
      check(TWO_PEOPLE, "1\n1 0 1 3 1 2 1\n"),
      Err(Rejection::DuplicateInCircle {
        person: PersonId(1),
        parasol: Parasol { center: Position { x: 1.0, y: 0.0 }, radius: 1.0 }
      })
    );
  }

  #[test]
  fn overlap_across_parasols_is_fine() {
    let score = check(TWO_PEOPLE, "2\n1 0 1 2 1 2\n1 0 2 2 2 1\n").unwrap();
    assert!((score - 5.0 * PI).abs() < 1e-12);
  }

  #[test]
  fn index_out_of_range() {
    assert_eq!(
      check(TWO_PEOPLE, "1\n1 0 1 2 1 3\n"),
      Err(Rejection::IndexOutOfRange { circle: 1, index: 3, people: 2 })
    );
    assert_eq!(kind(TWO_PEOPLE, "1\n1 0 1 2 0 1\n"), RejectionKind::IndexOutOfRange);
  }

  #[test]
  fn point_outside_parasol() {
    assert_eq!(
      check(TWO_PEOPLE, "1\n0 0 1 2 1 2\n"),
      Err(Rejection::PointNotCovered {
        person: PersonId(2),
        parasol: Parasol { center: Position { x: 0.0, y: 0.0 }, radius: 1.0 }
      })
    );
  }

  #[test]
  fn tolerance_boundary() {
    let input = "2\n0 0\n0.002 0\n";
    assert_eq!(check(input, "1\n0.001 0 0 2 1 2\n"), Ok(0.0));
    assert_eq!(kind(input, "1\n0.0010000001 0 0 2 1 2\n"), RejectionKind::PointNotCovered);
  }

  #[test]
  fn first_error_in_read_order_wins() {
    // person 1 is outside before the member list runs out
    assert_eq!(kind(TWO_PEOPLE, "1\n5 5 1 3 1"), RejectionKind::PointNotCovered);
    // index out of range is found before the duplicate
    assert_eq!(kind(TWO_PEOPLE, "1\n1 0 1 3 1 9 1"), RejectionKind::IndexOutOfRange);
    // a broken second parasol is reported even though coverage is incomplete
    assert_eq!(
      check("3\n0 0\n2 0\n9 9\n", "2\n1 0 1 2 1 2\n1 0"),
      Err(Rejection::Format { field: Field::Radius, circle: 2 })
    );
  }

  #[test]
  fn missing_member_index() {
    assert_eq!(
      check(TWO_PEOPLE, "1\n1 0 1 3 1 2\n"),
      Err(Rejection::Format { field: Field::Member(3), circle: 1 })
    );
  }

  #[test]
  fn trailing_content() {
    assert_eq!(
      check(TWO_PEOPLE, "1\n1 0 1 2 1 2\n3\n"),
      Err(Rejection::TrailingContent { declared: 1 })
    );
    assert!(check(TWO_PEOPLE, "1\n1 0 1 2 1 2\n \n\t\n").is_ok());
    assert_eq!(kind(TWO_PEOPLE, "1\n1 0 1 2 1 2\n\x0C\n"), RejectionKind::TrailingContent);
  }

  #[test]
  fn trailing_content_before_coverage() {
    assert_eq!(kind(TWO_PEOPLE, "0\n1 0 1 2 1 2"), RejectionKind::TrailingContent);
  }

  #[test]
  fn circle_cap() {
    let problem = read_problem(TWO_PEOPLE).unwrap();
    let config = CheckerConfig { max_circles: 1 };

    assert_eq!(
      validate(&problem, "2\n1 0 1 2 1 2\n1 0 1 2 1 2", &config),
      Err(Rejection::TooManyCircles { declared: 2, max: 1 })
    );
    assert_eq!(
      kind(TWO_PEOPLE, "1000001"),
      RejectionKind::TooManyCircles
    );
  }

  #[test]
  fn score_independent_of_order() {
    let input = "6\n0 0\n1 0\n5 5\n6 5\n-3 -3\n-3 -1\n";
    let mut parasols = vec![
      (0.5, 0.0, 0.5, vec![1, 2]),
      (5.5, 5.0, 0.75, vec![3, 4]),
      (-3.0, -2.0, 1.0, vec![5, 6]),
      (0.0, 0.0, 1.0, vec![2, 1]),
    ];
    let expected = PI * (0.25 + 0.5625 + 1.0 + 1.0);
    let mut rng = rand::thread_rng();

    for _ in 0..20 {
      parasols.shuffle(&mut rng);
      let mut output = format!("{}\n", parasols.len());
      for (x, y, r, members) in parasols.iter_mut() {
        members.shuffle(&mut rng);
        let listed: Vec<String> = members.iter().map(|m| m.to_string()).collect();
        output += &format!("{x} {y} {r} {} {}\n", members.len(), listed.join(" "));
      }

      let score = check(input, &output).unwrap();
      assert!((score - expected).abs() < 1e-9, "{output}");
    }
  }
}
