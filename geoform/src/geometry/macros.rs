/// Implements the shared parts of a geometry that owns plain coordinates: the constructor,
/// [`GeoJsonTrait`](crate::GeoJsonTrait) with the given validation rule, and the conversion into
/// [`Geometry`](crate::Geometry). The struct name must match its `Type` and `Geometry` variant.
macro_rules! impl_coordinate_geometry {
	($name:ident, $coordinates:ty, $rule:path) => {
		impl $name {
			#[must_use]
			pub fn new(coordinates: $coordinates) -> Self {
				Self { coordinates }
			}
		}

		impl $crate::geometry::GeoJsonTrait for $name {
			fn get_type(&self) -> $crate::geometry::Type {
				$crate::geometry::Type::$name
			}

			fn validate(&self) -> $crate::validation::ValidationResult {
				$rule(&self.coordinates)
			}
		}

		impl From<$name> for $crate::geometry::Geometry {
			fn from(geometry: $name) -> Self {
				$crate::geometry::Geometry::$name(geometry)
			}
		}
	};
}

pub(crate) use impl_coordinate_geometry;
