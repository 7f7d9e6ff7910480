use std::fmt::Display;

/// The `type` tag of a GeoJSON object.
///
/// Parsing never fails: any tag outside the known set becomes [`Type::Unknown`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Type {
	Point,
	LineString,
	Polygon,
	MultiPoint,
	MultiLineString,
	MultiPolygon,
	GeometryCollection,
	Feature,
	FeatureCollection,
	Unknown,
}

impl Type {
	/// Matches `value` case-insensitively against the known tags.
	#[must_use]
	pub fn parse(value: &str) -> Self {
		use Type::*;
		match value.to_ascii_lowercase().as_str() {
			"point" => Point,
			"linestring" => LineString,
			"polygon" => Polygon,
			"multipoint" => MultiPoint,
			"multilinestring" => MultiLineString,
			"multipolygon" => MultiPolygon,
			"geometrycollection" => GeometryCollection,
			"feature" => Feature,
			"featurecollection" => FeatureCollection,
			_ => Unknown,
		}
	}

	#[must_use]
	pub fn as_str(&self) -> &'static str {
		use Type::*;
		match self {
			Point => "Point",
			LineString => "LineString",
			Polygon => "Polygon",
			MultiPoint => "MultiPoint",
			MultiLineString => "MultiLineString",
			MultiPolygon => "MultiPolygon",
			GeometryCollection => "GeometryCollection",
			Feature => "Feature",
			FeatureCollection => "FeatureCollection",
			Unknown => "Unknown",
		}
	}

	/// `true` for the seven geometry kinds.
	#[must_use]
	pub fn is_geometry(&self) -> bool {
		!matches!(self, Type::Feature | Type::FeatureCollection | Type::Unknown)
	}
}

impl From<&str> for Type {
	fn from(value: &str) -> Self {
		Type::parse(value)
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
