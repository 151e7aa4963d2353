use thiserror::Error;
use crate::models::{Position, ProblemSpec};
use crate::tokens::Tokens;

#[derive(Debug, Error, PartialEq)]
pub enum InputError {
  #[error("test data corrupt: {0}")]
  TestDataCorrupt(String),
}

/// Reads `N` followed by `N` coordinate pairs. Anything after them is ignored.
pub fn read_problem(text: &str) -> Result<ProblemSpec, InputError> {
  let mut tokens = Tokens::new(text);

  let n = tokens.next_int()
    .and_then(|n| usize::try_from(n).ok())
    .ok_or_else(|| InputError::TestDataCorrupt("missing person count".into()))?;

  let mut people = Vec::with_capacity(n.min(1 << 20));
  for idx in 1..=n {
    let x = tokens.next_real();
    let y = tokens.next_real();
    match (x, y) {
      (Some(x), Some(y)) => people.push(Position { x, y }),
      _ => return Err(InputError::TestDataCorrupt(format!("missing coordinates of person {idx}"))),
    }
  }

  Ok(ProblemSpec { people })
}

/// Strict byte variant of [`read_problem`]; invalid UTF-8 is corrupt test data.
pub fn read_problem_bytes(bytes: &[u8]) -> Result<ProblemSpec, InputError> {
  let text = std::str::from_utf8(bytes)
    .map_err(|err| InputError::TestDataCorrupt(format!("not valid UTF-8: {err}")))?;
  read_problem(text)
}
