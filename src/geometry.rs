use crate::models::{Coordinate, Position};

/// Absolute slack added to the squared radius.
pub const EPSILON: Coordinate = 1e-6;

pub fn squared_dist(a: Position, b: Position) -> Coordinate {
  let del_x = b.x - a.x;
  let del_y = b.y - a.y;
  del_x * del_x + del_y * del_y
}

pub fn within_radius(point: Position, center: Position, radius: Coordinate) -> bool {
  squared_dist(center, point) <= radius * radius + EPSILON
}
