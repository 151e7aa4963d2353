use std::str::FromStr;

/// Blanks allowed after the last parasol; a form feed there counts as content.
fn is_line_blank(c: char) -> bool {
  matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B')
}

fn is_blank(c: char) -> bool {
  is_line_blank(c) || c == '\x0C'
}

/// Whitespace separated token stream over a whole file.
pub struct Tokens<'a> {
  rest: &'a str,
}

impl<'a> Tokens<'a> {
  pub fn new(text: &'a str) -> Self {
    Tokens { rest: text }
  }

  pub fn next_token(&mut self) -> Option<&'a str> {
    let start = self.rest.trim_start_matches(is_blank);
    if start.is_empty() {
      self.rest = start;
      return None;
    }

    let end = start.find(is_blank).unwrap_or(start.len());
    let (token, rest) = start.split_at(end);
    self.rest = rest;
    Some(token)
  }

  /// Next token as an integer, `None` when missing or malformed.
  pub fn next_int(&mut self) -> Option<i64> {
    self.next_parsed()
  }

  /// Next token as a finite real.
  pub fn next_real(&mut self) -> Option<f64> {
    self.next_parsed::<f64>().filter(|v| v.is_finite())
  }

  /// `true` when nothing but line blanks is left unread.
  pub fn only_blanks_left(&self) -> bool {
    self.rest.chars().all(is_line_blank)
  }

  fn next_parsed<T: FromStr>(&mut self) -> Option<T> {
    self.next_token().and_then(|t| t.parse().ok())
  }
}
