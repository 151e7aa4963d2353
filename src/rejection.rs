use std::fmt;
use serde::Serialize;
use thiserror::Error;
use crate::models::{Parasol, PersonId};

pub const EXPECTED_FORMAT: &str = "Expected output format:\n\
  [int] M - number of parasols\n\
  M times:\n\
  \t[double, double, double] x y r - center (x, y) and radius r of the parasol\n\
  \t[int] P - number of people covered by the parasol\n\
  \tP times:\n\
  \t\t[int] idx in [1, N] - index of a covered person";

/// The token that was being read when the output ran out or failed to parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
  Center,
  Radius,
  MemberCount,
  /// 1-based position in the member list.
  Member(usize),
}

impl fmt::Display for Field {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Field::Center => write!(f, "center"),
      Field::Radius => write!(f, "radius"),
      Field::MemberCount => write!(f, "number of covered people"),
      Field::Member(pos) => write!(f, "person index #{pos}"),
    }
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RejectionKind {
  FormatError,
  TooManyCircles,
  TooFewMembers,
  IndexOutOfRange,
  DuplicateInCircle,
  PointNotCovered,
  TrailingContent,
  IncompleteCoverage,
}

/// A contestant-attributable reason to reject the submission.
#[derive(Debug, Error, PartialEq)]
pub enum Rejection {
  #[error("Missing or malformed parasol count.\n{}", EXPECTED_FORMAT)]
  MissingCircleCount,
  #[error("Missing or malformed {field} of parasol {circle}.\n{}", EXPECTED_FORMAT)]
  Format { field: Field, circle: usize },
  #[error("Declared {declared} parasols, more than the supported {max}; check your output.\n{}", EXPECTED_FORMAT)]
  TooManyCircles { declared: u64, max: usize },
  #[error("Parasol {parasol} covers fewer than two people.")]
  TooFewMembers { parasol: Parasol },
  #[error("Parasol {circle} lists person {index}; indices must lie between 1 and {people}.")]
  IndexOutOfRange { circle: usize, index: i64, people: usize },
  #[error("Person {person} appears more than once under parasol {parasol}.")]
  DuplicateInCircle { person: PersonId, parasol: Parasol },
  #[error("Parasol {parasol} does not cover person {person}.")]
  PointNotCovered { person: PersonId, parasol: Parasol },
  #[error("Content found after the {declared} declared parasols; the declared count does not match the output.\n{}", EXPECTED_FORMAT)]
  TrailingContent { declared: usize },
  #[error("Person {person} is not covered.")]
  IncompleteCoverage { person: PersonId },
}

impl Rejection {
  pub fn kind(&self) -> RejectionKind {
    match self {
      Rejection::MissingCircleCount | Rejection::Format { .. } => RejectionKind::FormatError,
      Rejection::TooManyCircles { .. } => RejectionKind::TooManyCircles,
      Rejection::TooFewMembers { .. } => RejectionKind::TooFewMembers,
      Rejection::IndexOutOfRange { .. } => RejectionKind::IndexOutOfRange,
      Rejection::DuplicateInCircle { .. } => RejectionKind::DuplicateInCircle,
      Rejection::PointNotCovered { .. } => RejectionKind::PointNotCovered,
      Rejection::TrailingContent { .. } => RejectionKind::TrailingContent,
      Rejection::IncompleteCoverage { .. } => RejectionKind::IncompleteCoverage,
    }
  }
}
