use super::{Position, macros::impl_coordinate_geometry};
use crate::validation::is_point;

/// A single position.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
	pub coordinates: Position,
}

impl_coordinate_geometry!(Point, Position, is_point);

impl<T> From<T> for Point
where
	Position: From<T>,
{
	fn from(value: T) -> Self {
		Self::new(Position::from(value))
	}
}
