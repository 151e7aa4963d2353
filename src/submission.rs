use crate::models::{Parasol, Position};
use crate::rejection::{Field, Rejection};
use crate::tokens::Tokens;

/// Parsed start of one parasol record; members are pulled one at a time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParasolHeader {
  pub parasol: Parasol,
  pub members: i64,
}

/// Pull parser over the contestant output.
///
/// Members are read lazily so that a validation failure on an early member
/// is reported before a format failure on a later one.
pub struct SubmissionParser<'a> {
  tokens: Tokens<'a>,
}

impl<'a> SubmissionParser<'a> {
  pub fn new(text: &'a str) -> Self {
    SubmissionParser { tokens: Tokens::new(text) }
  }

  /// Reads the declared parasol count and checks it against `max`.
  /// A negative count declares no parasols.
  pub fn circle_count(&mut self, max: usize) -> Result<usize, Rejection> {
    let declared = self.tokens.next_int()
      .ok_or(Rejection::MissingCircleCount)?;
    let declared = u64::try_from(declared).unwrap_or(0);

    usize::try_from(declared).ok()
      .filter(|&m| m <= max)
      .ok_or(Rejection::TooManyCircles { declared, max })
  }

  pub fn header(&mut self, circle: usize) -> Result<ParasolHeader, Rejection> {
    let missing = |field| Rejection::Format { field, circle };

    let x = self.tokens.next_real();
    let y = self.tokens.next_real();
    let center = match (x, y) {
      (Some(x), Some(y)) => Position { x, y },
      _ => return Err(missing(Field::Center)),
    };
    let radius = self.tokens.next_real().ok_or(missing(Field::Radius))?;
    let members = self.tokens.next_int().ok_or(missing(Field::MemberCount))?;

    Ok(ParasolHeader { parasol: Parasol { center, radius }, members })
  }

  /// Raw member index; range checking belongs to the caller.
  pub fn member(&mut self, circle: usize, position: usize) -> Result<i64, Rejection> {
    self.tokens.next_int()
      .ok_or(Rejection::Format { field: Field::Member(position), circle })
  }

  /// Fails when anything but line blanks follows the declared parasols.
  pub fn finish(self, declared: usize) -> Result<(), Rejection> {
    if self.tokens.only_blanks_left() {
      Ok(())
    } else {
      Err(Rejection::TrailingContent { declared })
    }
  }
}
