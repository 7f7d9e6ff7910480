//! The typed geometry model.
//!
//! Every geometry owns its coordinates by value and validates itself through the rules in
//! [`crate::validation`]. [`Geometry`] is the closed sum of all seven kinds and dispatches on them.

mod collection;
mod geometry_type;
mod line_string;
mod macros;
mod multi_line_string;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod position;
mod traits;

pub use collection::GeometryCollection;
pub use geometry_type::Type;
pub use line_string::LineString;
pub use multi_line_string::MultiLineString;
pub use multi_point::MultiPoint;
pub use multi_polygon::MultiPolygon;
pub use point::Point;
pub use polygon::Polygon;
pub use position::{LATITUDE_RANGE, LONGITUDE_RANGE, Position};
pub use traits::GeoJsonTrait;

use crate::validation::ValidationResult;

#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
	Point(Point),
	LineString(LineString),
	Polygon(Polygon),
	MultiPoint(MultiPoint),
	MultiLineString(MultiLineString),
	MultiPolygon(MultiPolygon),
	GeometryCollection(GeometryCollection),
}

impl GeoJsonTrait for Geometry {
	fn get_type(&self) -> Type {
		match self {
			Geometry::Point(g) => g.get_type(),
			Geometry::LineString(g) => g.get_type(),
			Geometry::Polygon(g) => g.get_type(),
			Geometry::MultiPoint(g) => g.get_type(),
			Geometry::MultiLineString(g) => g.get_type(),
			Geometry::MultiPolygon(g) => g.get_type(),
			Geometry::GeometryCollection(g) => g.get_type(),
		}
	}

	fn validate(&self) -> ValidationResult {
		match self {
			Geometry::Point(g) => g.validate(),
			Geometry::LineString(g) => g.validate(),
			Geometry::Polygon(g) => g.validate(),
			Geometry::MultiPoint(g) => g.validate(),
			Geometry::MultiLineString(g) => g.validate(),
			Geometry::MultiPolygon(g) => g.validate(),
			Geometry::GeometryCollection(g) => g.validate(),
		}
	}
}

impl Geometry {
	/// The number of positions, counted through all nesting levels and member geometries.
	#[must_use]
	pub fn count_positions(&self) -> usize {
		match self {
			Geometry::Point(_) => 1,
			Geometry::LineString(g) => g.coordinates.len(),
			Geometry::MultiPoint(g) => g.coordinates.len(),
			Geometry::Polygon(g) => g.coordinates.iter().map(Vec::len).sum(),
			Geometry::MultiLineString(g) => g.coordinates.iter().map(Vec::len).sum(),
			Geometry::MultiPolygon(g) => g.coordinates.iter().flatten().map(Vec::len).sum(),
			Geometry::GeometryCollection(g) => g.geometries.iter().map(Geometry::count_positions).sum(),
		}
	}

	/// The `type` tag this geometry is written with.
	#[must_use]
	pub fn type_name(&self) -> &'static str {
		self.get_type().as_str()
	}

	/// A small valid multipolygon with two polygons, each with a hole.
	#[must_use]
	pub fn new_example() -> Self {
		Geometry::MultiPolygon(MultiPolygon::from(vec![
			vec![
				vec![[0.0, 0.0], [5.0, 0.0], [2.5, 4.0], [0.0, 0.0]],
				vec![[2.0, 1.0], [2.5, 2.0], [3.0, 1.0], [2.0, 1.0]],
			],
			vec![
				vec![[6.0, 0.0], [9.0, 0.0], [9.0, 4.0], [6.0, 4.0], [6.0, 0.0]],
				vec![[7.0, 1.0], [7.0, 3.0], [8.0, 3.0], [8.0, 1.0], [7.0, 1.0]],
			],
		]))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Point::from([1.0, 2.0]).into(), Type::Point)]
	#[case(LineString::from(vec![[1.0, 2.0], [3.0, 4.0]]).into(), Type::LineString)]
	#[case(Polygon::from(vec![vec![[1.0, 1.0], [2.0, 2.0], [1.0, 3.0], [1.0, 1.0]]]).into(), Type::Polygon)]
	#[case(MultiPoint::from(vec![[1.0, 2.0]]).into(), Type::MultiPoint)]
	#[case(MultiLineString::from(vec![vec![[1.0, 2.0], [3.0, 4.0]]]).into(), Type::MultiLineString)]
	#[case(Geometry::new_example(), Type::MultiPolygon)]
	#[case(GeometryCollection::default().into(), Type::GeometryCollection)]
	fn dispatches_type_and_validation(#[case] geometry: Geometry, #[case] expected: Type) {
		assert_eq!(geometry.get_type(), expected);
		assert!(geometry.get_type().is_geometry());
		assert!(geometry.validate().is_ok());
	}

	#[test]
	fn count_positions() {
		assert_eq!(Geometry::new_example().count_positions(), 18);
		let collection = GeometryCollection::new(vec![Geometry::new_example(), Point::from([0.0, 0.0]).into()]);
		assert_eq!(Geometry::from(collection).count_positions(), 19);
		assert_eq!(Geometry::new_example().type_name(), "MultiPolygon");
	}
}
