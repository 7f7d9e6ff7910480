use super::{Position, macros::impl_coordinate_geometry};
use crate::validation::is_multi_line_string;

#[derive(Clone, Debug, PartialEq)]
pub struct MultiLineString {
	pub coordinates: Vec<Vec<Position>>,
}

impl_coordinate_geometry!(MultiLineString, Vec<Vec<Position>>, is_multi_line_string);

impl<T> From<Vec<Vec<T>>> for MultiLineString
where
	Position: From<T>,
{
	fn from(value: Vec<Vec<T>>) -> Self {
		Self::new(
			value
				.into_iter()
				.map(|line| line.into_iter().map(Position::from).collect())
				.collect(),
		)
	}
}
