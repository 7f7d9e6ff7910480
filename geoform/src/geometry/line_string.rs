use super::{Position, macros::impl_coordinate_geometry};
use crate::validation::is_line_string;

/// An ordered path of positions.
#[derive(Clone, Debug, PartialEq)]
pub struct LineString {
	pub coordinates: Vec<Position>,
}

impl_coordinate_geometry!(LineString, Vec<Position>, is_line_string);

impl<T> From<Vec<T>> for LineString
where
	Position: From<T>,
{
	fn from(value: Vec<T>) -> Self {
		Self::new(value.into_iter().map(Position::from).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{GeoJsonTrait, Type};

	#[test]
	fn type_and_validation() {
		let line = LineString::from(vec![[1.0, 1.0], [2.0, 2.0]]);
		assert_eq!(line.get_type(), Type::LineString);
		assert!(line.validate().is_ok());
	}

	#[test]
	fn single_position_is_too_short() {
		let line = LineString::from(vec![[1.0, 1.0]]);
		assert_eq!(
			line.validate().reason(),
			Some("A LineString consists of at least two coordinate pairs")
		);
	}
}
