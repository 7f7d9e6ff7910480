use super::{Position, macros::impl_coordinate_geometry};
use crate::validation::is_multi_point;

#[derive(Clone, Debug, PartialEq)]
pub struct MultiPoint {
	pub coordinates: Vec<Position>,
}

impl_coordinate_geometry!(MultiPoint, Vec<Position>, is_multi_point);

impl<T> From<Vec<T>> for MultiPoint
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
		let multi = MultiPoint::from(vec![[1.0, 1.0]]);
		assert_eq!(multi.get_type(), Type::MultiPoint);
		assert!(multi.validate().is_ok());
		assert!(!MultiPoint::new(Vec::new()).validate().is_ok());
	}
}
