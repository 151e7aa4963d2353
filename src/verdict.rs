use std::fmt;
use std::io::Write;
use serde::{Serialize, Serializer};
use crate::rejection::{Rejection, RejectionKind};

/// Significant digits of the reported score.
pub const SCORE_PRECISION: usize = 9;

#[derive(Debug, PartialEq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
  Accepted {
    #[serde(serialize_with = "serialize_score")]
    score: f64,
  },
  Rejected { kind: RejectionKind, message: String },
  /// The official input is broken; reported through the rejection channel.
  TestDataError,
}

impl From<Result<f64, Rejection>> for Verdict {
  fn from(outcome: Result<f64, Rejection>) -> Self {
    match outcome {
      Ok(score) => Verdict::Accepted { score },
      Err(rejection) => Verdict::Rejected { kind: rejection.kind(), message: rejection.to_string() },
    }
  }
}

impl fmt::Display for Verdict {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Verdict::Accepted { score } => write!(f, "1 {}", format_general(*score, SCORE_PRECISION)),
      Verdict::Rejected { message, .. } => write!(f, "0 {message}"),
      Verdict::TestDataError => write!(f, "0 Test data error."),
    }
  }
}

impl Verdict {
  pub fn is_accepted(&self) -> bool {
    matches!(self, Verdict::Accepted { .. })
  }

  pub fn report(&self, out: &mut impl Write, json: bool) -> anyhow::Result<()> {
    if json {
      serde_json::to_writer(&mut *out, self)?;
      writeln!(out)?;
    } else {
      writeln!(out, "{self}")?;
    }
    out.flush()?;
    Ok(())
  }
}

/// `printf("%.*g")` style rendering: `precision` significant digits, trailing
/// zeros dropped, exponent form outside `[1e-4, 10^precision)`.
pub fn format_general(value: f64, precision: usize) -> String {
  if !value.is_finite() {
    return if value.is_nan() { "nan".into() } else if value > 0.0 { "inf".into() } else { "-inf".into() };
  }
  if value == 0.0 {
    return "0".into();
  }

  let precision = precision.max(1);
  let scientific = format!("{:.*e}", precision - 1, value);
  let (mantissa, exponent) = match scientific.split_once('e') {
    Some(parts) => parts,
    None => return scientific,
  };
  let exponent: i32 = exponent.parse().unwrap_or(0);

  if exponent < -4 || exponent >= precision as i32 {
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", strip_zeros(mantissa), sign, exponent.abs())
  } else {
    let decimals = (precision as i32 - 1 - exponent) as usize;
    strip_zeros(&format!("{:.*}", decimals, value)).to_string()
  }
}

/// JSON has no non-finite numbers; those scores are written the way the line protocol prints them.
fn serialize_score<S: Serializer>(score: &f64, serializer: S) -> Result<S::Ok, S::Error> {
  if score.is_finite() {
    serializer.serialize_f64(*score)
  } else {
    serializer.serialize_str(&format_general(*score, SCORE_PRECISION))
  }
}

fn strip_zeros(digits: &str) -> &str {
  if digits.contains('.') {
    digits.trim_end_matches('0').trim_end_matches('.')
  } else {
    digits
  }
}
