use super::{Position, macros::impl_coordinate_geometry};
use crate::validation::is_multi_polygon;

#[derive(Clone, Debug, PartialEq)]
pub struct MultiPolygon {
	pub coordinates: Vec<Vec<Vec<Position>>>,
}

impl_coordinate_geometry!(MultiPolygon, Vec<Vec<Vec<Position>>>, is_multi_polygon);

impl<T> From<Vec<Vec<Vec<T>>>> for MultiPolygon
where
	Position: From<T>,
{
	fn from(value: Vec<Vec<Vec<T>>>) -> Self {
		Self::new(
			value
				.into_iter()
				.map(|polygon| {
					polygon
						.into_iter()
						.map(|ring| ring.into_iter().map(Position::from).collect())
						.collect()
				})
				.collect(),
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{GeoJsonTrait, Type};

	#[test]
	fn type_and_validation() {
		let multi = MultiPolygon::from(vec![
			vec![vec![[0.0, 0.0], [5.0, 0.0], [2.5, 4.0], [0.0, 0.0]]],
			vec![vec![[6.0, 0.0], [9.0, 0.0], [9.0, 4.0], [6.0, 4.0], [6.0, 0.0]]],
		]);
		assert_eq!(multi.get_type(), Type::MultiPolygon);
		assert!(multi.validate().is_ok());
	}

	#[test]
	fn empty_polygon_inside() {
		let multi = MultiPolygon::new(vec![Vec::new()]);
		assert_eq!(
			multi.validate().reason(),
			Some("A Polygon consists of at least one linear ring")
		);
	}
}
