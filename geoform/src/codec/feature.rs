use super::{FEATURES, GEOMETRY, GeoJsonCodec, PROPERTIES, TYPE, check_type, missing, validated, write_type};
use crate::{
	feature::{Feature, FeatureCollection},
	geometry::{Geometry, Type},
};
use anyhow::Result;
use geoform_core::json::{JsonObject, JsonReader, JsonValue, JsonWriter};

/// Reads a nullable member value with `read`.
fn read_nullable<T>(reader: &mut JsonReader, read: impl FnOnce(&mut JsonReader) -> Result<T>) -> Result<Option<T>> {
	if reader.peek_null()? {
		reader.read_null()?;
		Ok(None)
	} else {
		read(reader).map(Some)
	}
}

fn read_properties(reader: &mut JsonReader) -> Result<JsonObject> {
	match reader.read_value()? {
		JsonValue::Object(properties) => Ok(properties),
		other => Err(reader.error(&format!(
			"expected properties to be an object or null, found a {}",
			other.type_as_str()
		))),
	}
}

impl GeoJsonCodec for Feature {
	const NAME: &'static str = "Feature";

	/// A missing or `null` geometry gives a feature without geometry, the same holds for properties.
	fn decode(reader: &mut JsonReader) -> Result<Self> {
		let mut type_name = None;
		let mut feature = Feature::default();
		reader.read_object(|name, reader| {
			match name {
				TYPE => type_name = Some(reader.read_string()?),
				GEOMETRY => feature.geometry = read_nullable(reader, Geometry::decode)?,
				PROPERTIES => feature.properties = read_nullable(reader, read_properties)?,
				_ => reader.skip_value()?,
			}
			Ok(())
		})?;
		check_type(type_name.as_deref(), Type::Feature, reader)?;
		validated(feature, reader)
	}

	fn encode(&self, writer: &mut JsonWriter) -> Result<()> {
		writer.begin_object()?;
		writer.name(GEOMETRY)?;
		match &self.geometry {
			Some(geometry) => geometry.encode(writer)?,
			None => writer.null()?,
		}
		writer.name(PROPERTIES)?;
		match &self.properties {
			Some(properties) => writer.object(properties)?,
			None => writer.null()?,
		}
		write_type(writer, Type::Feature)?;
		writer.end_object()
	}
}

impl GeoJsonCodec for FeatureCollection {
	const NAME: &'static str = "FeatureCollection";

	fn decode(reader: &mut JsonReader) -> Result<Self> {
		let mut type_name = None;
		let mut features = None;
		reader.read_object(|name, reader| {
			match name {
				TYPE => type_name = Some(reader.read_string()?),
				FEATURES => features = Some(reader.read_array(Feature::decode)?),
				_ => reader.skip_value()?,
			}
			Ok(())
		})?;
		let features = features.ok_or_else(|| missing(FEATURES, reader))?;
		check_type(type_name.as_deref(), Type::FeatureCollection, reader)?;
		validated(FeatureCollection::new(features), reader)
	}

	fn encode(&self, writer: &mut JsonWriter) -> Result<()> {
		writer.begin_object()?;
		writer.name(FEATURES)?;
		writer.begin_array()?;
		for feature in &self.features {
			feature.encode(writer)?;
		}
		writer.end_array()?;
		write_type(writer, Type::FeatureCollection)?;
		writer.end_object()
	}
}
