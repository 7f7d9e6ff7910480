use super::{Position, macros::impl_coordinate_geometry};
use crate::validation::is_polygon;

/// A list of linear rings. The first ring is the outer boundary, any further rings are holes.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
	pub coordinates: Vec<Vec<Position>>,
}

impl_coordinate_geometry!(Polygon, Vec<Vec<Position>>, is_polygon);

impl<T> From<Vec<Vec<T>>> for Polygon
where
	Position: From<T>,
{
	fn from(value: Vec<Vec<T>>) -> Self {
		Self::new(
			value
				.into_iter()
				.map(|ring| ring.into_iter().map(Position::from).collect())
				.collect(),
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{GeoJsonTrait, Type};

	#[test]
	fn closed_ring() {
		let polygon = Polygon::from(vec![vec![[1.0, 1.0], [2.0, 2.0], [1.0, 3.0], [1.0, 1.0]]]);
		assert_eq!(polygon.get_type(), Type::Polygon);
		assert!(polygon.validate().is_ok());
	}

	#[test]
	fn with_hole() {
		let polygon = Polygon::from(vec![
			vec![[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0], [0.0, 0.0]],
			vec![[2.0, 2.0], [2.0, 4.0], [4.0, 4.0], [2.0, 2.0]],
		]);
		assert!(polygon.validate().is_ok());
	}

	#[test]
	fn three_positions_are_no_ring() {
		let polygon = Polygon::from(vec![vec![[1.0, 1.0], [2.0, 2.0], [1.0, 1.0]]]);
		assert_eq!(
			polygon.validate().reason(),
			Some("The coordinates do not meet the LinearRing criteria")
		);
	}
}
