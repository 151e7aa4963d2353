use std::f64::consts::PI;
use crate::models::Coordinate;

/// Running sum of squared radii; the area factor is applied once at the end.
#[derive(Default, Debug)]
pub struct ScoreAccumulator {
  total: f64,
}

impl ScoreAccumulator {
  pub fn add(&mut self, radius: Coordinate) {
    self.total += radius * radius;
  }

  pub fn finalize(self) -> f64 {
    PI * self.total
  }
}
