use super::{GeoJsonTrait, Geometry, Type};
use crate::validation::ValidationResult;

/// A heterogeneous list of geometries. An empty collection is valid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeometryCollection {
	pub geometries: Vec<Geometry>,
}

impl GeometryCollection {
	#[must_use]
	pub fn new(geometries: Vec<Geometry>) -> Self {
		Self { geometries }
	}
}

impl GeoJsonTrait for GeometryCollection {
	fn get_type(&self) -> Type {
		Type::GeometryCollection
	}

	fn validate(&self) -> ValidationResult {
		ValidationResult::first_error(self.geometries.iter().map(Geometry::validate))
	}
}

impl From<GeometryCollection> for Geometry {
	fn from(collection: GeometryCollection) -> Self {
		Geometry::GeometryCollection(collection)
	}
}

impl FromIterator<Geometry> for GeometryCollection {
	fn from_iter<I: IntoIterator<Item = Geometry>>(iter: I) -> Self {
		Self::new(iter.into_iter().collect())
	}
}
