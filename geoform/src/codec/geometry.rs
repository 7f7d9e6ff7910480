use super::{
	COORDINATES, DecodeError, GEOMETRIES, GeoJsonCodec, TYPE, check_type,
	coordinates::{CoordinateTree, WriteCoordinates, position_from_numbers},
	decode_error, missing, validated, write_type,
};
use crate::geometry::{
	Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
	Position, Type,
};
use anyhow::{Error, Result};
use geoform_core::json::{JsonReader, JsonWriter};
use log::trace;

/// The members of a geometry object, read before the kind is known.
#[derive(Default)]
struct GeometryObject {
	type_name: Option<String>,
	coordinates: Option<CoordinateTree>,
	geometries: Option<Vec<Geometry>>,
	/// Raw JSON of `coordinates` and `geometries` members that came before `type` in an object
	/// of unknown kind.
	buffered_coordinates: Option<String>,
	buffered_geometries: Option<String>,
}

impl GeometryObject {
	/// Reads the object. A member is decoded right away when the kind is already known, either
	/// from `expected` or from an earlier `type` member, and skipped if that kind does not use it.
	/// Without a kind it is buffered until [`GeometryObject::resolve`].
	fn read(reader: &mut JsonReader, expected: Option<Type>) -> Result<Self> {
		let mut object = Self::default();
		reader.read_object(|name, reader| {
			let kind = expected.or_else(|| object.type_name.as_deref().map(Type::parse));
			match (name, kind) {
				(TYPE, _) => object.type_name = Some(reader.read_string()?),
				(COORDINATES, None) => object.buffered_coordinates = Some(reader.read_value()?.stringify()),
				(GEOMETRIES, None) => object.buffered_geometries = Some(reader.read_value()?.stringify()),
				(COORDINATES, Some(kind)) if kind.is_geometry() && kind != Type::GeometryCollection => {
					object.coordinates = Some(CoordinateTree::read(reader, kind.as_str())?);
				}
				(GEOMETRIES, Some(Type::GeometryCollection)) => {
					object.geometries = Some(reader.read_array(Geometry::decode)?);
				}
				_ => reader.skip_value()?,
			}
			Ok(())
		})?;
		Ok(object)
	}

	/// Decodes the buffered member that `kind` uses and drops the other one. A member read
	/// after `type` takes precedence over a buffered one.
	fn resolve(&mut self, kind: Type, reader: &JsonReader) -> Result<()> {
		let coordinates = self.buffered_coordinates.take();
		let geometries = self.buffered_geometries.take();
		if kind == Type::GeometryCollection {
			if let Some(json) = geometries
				&& self.geometries.is_none()
			{
				let mut member = reader.member_reader(GEOMETRIES, &json);
				self.geometries = Some(member.read_array(Geometry::decode)?);
			}
		} else if let Some(json) = coordinates
			&& self.coordinates.is_none()
		{
			let mut member = reader.member_reader(COORDINATES, &json);
			self.coordinates = Some(CoordinateTree::read(&mut member, kind.as_str())?);
		}
		Ok(())
	}

	/// Checks presence of the coordinates and the tag, in that order.
	fn into_coordinates(self, kind: Type, reader: &JsonReader) -> Result<CoordinateTree> {
		let coordinates = match self.coordinates {
			Some(coordinates) if !coordinates.is_empty() => coordinates,
			_ => return Err(missing(COORDINATES, reader)),
		};
		check_type(self.type_name.as_deref(), kind, reader)?;
		Ok(coordinates)
	}

	fn into_collection(self, reader: &JsonReader) -> Result<GeometryCollection> {
		let geometries = self.geometries.ok_or_else(|| missing(GEOMETRIES, reader))?;
		check_type(self.type_name.as_deref(), Type::GeometryCollection, reader)?;
		validated(GeometryCollection::new(geometries), reader)
	}
}

fn write_coordinates_object(writer: &mut JsonWriter, coordinates: &impl WriteCoordinates, kind: Type) -> Result<()> {
	writer.begin_object()?;
	writer.name(COORDINATES)?;
	coordinates.write_coordinates(writer)?;
	write_type(writer, kind)?;
	writer.end_object()
}

impl GeoJsonCodec for Position {
	const NAME: &'static str = "Position";

	/// Reads `[longitude, latitude]` or `[longitude, latitude, altitude]` and checks the range.
	fn decode(reader: &mut JsonReader) -> Result<Self> {
		let numbers = reader.read_array(|reader| reader.read_number())?;
		let position = position_from_numbers(&numbers, || reader.path())?;
		match position.validate().into_result() {
			Ok(()) => Ok(position),
			Err(error) => Err(Error::new(DecodeError::from(error))),
		}
	}

	fn encode(&self, writer: &mut JsonWriter) -> Result<()> {
		self.write_coordinates(writer)
	}
}

/// Implements the codec of a geometry whose `coordinates` are converted with `$convert`.
macro_rules! impl_coordinates_codec {
	($name:ident, $convert:ident) => {
		impl GeoJsonCodec for $name {
			const NAME: &'static str = stringify!($name);

			fn decode(reader: &mut JsonReader) -> Result<Self> {
				let object = GeometryObject::read(reader, Some(Type::$name))?;
				Self::from_object(object, reader)
			}

			fn encode(&self, writer: &mut JsonWriter) -> Result<()> {
				write_coordinates_object(writer, &self.coordinates, Type::$name)
			}
		}

		impl $name {
			fn from_object(object: GeometryObject, reader: &JsonReader) -> Result<Self> {
				let tree = object.into_coordinates(Type::$name, reader)?;
				let coordinates = tree.$convert(Self::NAME, reader)?;
				validated(Self::new(coordinates), reader)
			}
		}
	};
}

impl_coordinates_codec!(Point, into_position);
impl_coordinates_codec!(LineString, into_positions);
impl_coordinates_codec!(Polygon, into_rings);
impl_coordinates_codec!(MultiPoint, into_positions);
impl_coordinates_codec!(MultiLineString, into_rings);
impl_coordinates_codec!(MultiPolygon, into_polygons);

impl GeoJsonCodec for GeometryCollection {
	const NAME: &'static str = "GeometryCollection";

	fn decode(reader: &mut JsonReader) -> Result<Self> {
		GeometryObject::read(reader, Some(Type::GeometryCollection))?.into_collection(reader)
	}

	fn encode(&self, writer: &mut JsonWriter) -> Result<()> {
		writer.begin_object()?;
		writer.name(GEOMETRIES)?;
		writer.begin_array()?;
		for geometry in &self.geometries {
			geometry.encode(writer)?;
		}
		writer.end_array()?;
		write_type(writer, Type::GeometryCollection)?;
		writer.end_object()
	}
}

impl GeoJsonCodec for Geometry {
	const NAME: &'static str = "Geometry";

	/// Decodes any of the seven geometry kinds, chosen by the object's own `type` member.
	fn decode(reader: &mut JsonReader) -> Result<Self> {
		let mut object = GeometryObject::read(reader, None)?;
		let Some(type_name) = object.type_name.clone() else {
			return Err(decode_error(format!("Required type is missing at {}", reader.path())));
		};

		let kind = Type::parse(&type_name);
		trace!("decoding {kind} at {}", reader.path());
		if kind.is_geometry() {
			object.resolve(kind, reader)?;
		}
		Ok(match kind {
			Type::Point => Point::from_object(object, reader)?.into(),
			Type::LineString => LineString::from_object(object, reader)?.into(),
			Type::Polygon => Polygon::from_object(object, reader)?.into(),
			Type::MultiPoint => MultiPoint::from_object(object, reader)?.into(),
			Type::MultiLineString => MultiLineString::from_object(object, reader)?.into(),
			Type::MultiPolygon => MultiPolygon::from_object(object, reader)?.into(),
			Type::GeometryCollection => object.into_collection(reader)?.into(),
			Type::Feature | Type::FeatureCollection | Type::Unknown => {
				return Err(decode_error(format!(
					"Unknown geometry type '{type_name}' at {}",
					reader.path()
				)));
			}
		})
	}

	fn encode(&self, writer: &mut JsonWriter) -> Result<()> {
		match self {
			Geometry::Point(g) => g.encode(writer),
			Geometry::LineString(g) => g.encode(writer),
			Geometry::Polygon(g) => g.encode(writer),
			Geometry::MultiPoint(g) => g.encode(writer),
			Geometry::MultiLineString(g) => g.encode(writer),
			Geometry::MultiPolygon(g) => g.encode(writer),
			Geometry::GeometryCollection(g) => g.encode(writer),
		}
	}
}
