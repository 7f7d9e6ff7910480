//! Entry points for whole GeoJSON documents and newline-delimited GeoJSON.

use crate::{
	codec::{DecodeError, DecodeOptions, GeoJsonCodec, decode_reader_with, decode_str},
	feature::{Feature, FeatureCollection},
	geometry::{GeoJsonTrait, Geometry, Type},
	validation::ValidationResult,
};
use anyhow::{Context, Error, Result};
use futures::{Stream, StreamExt, future::ready, stream};
use geoform_core::json::{JsonReader, JsonWriter};
use geoform_derive::context;
use log::{debug, trace};
use std::io::{BufRead, Cursor, Read};

/// Any top-level GeoJSON object.
#[derive(Clone, Debug, PartialEq)]
pub enum GeoJson {
	Geometry(Geometry),
	Feature(Feature),
	FeatureCollection(FeatureCollection),
}

impl GeoJson {
	/// Decodes a document, choosing the codec by its top-level `type` member.
	pub fn parse(json: &str) -> Result<Self> {
		let type_name = peek_type(json)?;
		trace!("document type is '{type_name}'");
		Ok(match Type::parse(&type_name) {
			Type::Feature => GeoJson::Feature(decode_str(json)?),
			Type::FeatureCollection => GeoJson::FeatureCollection(decode_str(json)?),
			_ => GeoJson::Geometry(decode_str(json)?),
		})
	}
}

/// Reads only the top-level `type` member, skipping everything else.
fn peek_type(json: &str) -> Result<String> {
	let mut reader = JsonReader::from_reader(Cursor::new(json.as_bytes()), true);
	let mut type_name = None;
	reader.read_object(|name, reader| {
		if name == "type" {
			type_name = Some(reader.read_string()?);
		} else {
			reader.skip_value()?;
		}
		Ok(())
	})?;
	type_name.ok_or_else(|| Error::new(DecodeError::new(format!("Required type is missing at {}", reader.path()))))
}

impl GeoJsonTrait for GeoJson {
	fn get_type(&self) -> Type {
		match self {
			GeoJson::Geometry(g) => g.get_type(),
			GeoJson::Feature(f) => f.get_type(),
			GeoJson::FeatureCollection(c) => c.get_type(),
		}
	}

	fn validate(&self) -> ValidationResult {
		match self {
			GeoJson::Geometry(g) => g.validate(),
			GeoJson::Feature(f) => f.validate(),
			GeoJson::FeatureCollection(c) => c.validate(),
		}
	}
}

impl GeoJsonCodec for GeoJson {
	const NAME: &'static str = "GeoJson";

	/// Buffers the remaining object, then decodes it like [`GeoJson::parse`].
	fn decode(reader: &mut JsonReader) -> Result<Self> {
		let json = reader.read_value()?.stringify();
		GeoJson::parse(&json)
	}

	fn encode(&self, writer: &mut JsonWriter) -> Result<()> {
		match self {
			GeoJson::Geometry(g) => g.encode(writer),
			GeoJson::Feature(f) => f.encode(writer),
			GeoJson::FeatureCollection(c) => c.encode(writer),
		}
	}
}

impl From<Geometry> for GeoJson {
	fn from(geometry: Geometry) -> Self {
		GeoJson::Geometry(geometry)
	}
}

impl From<Feature> for GeoJson {
	fn from(feature: Feature) -> Self {
		GeoJson::Feature(feature)
	}
}

impl From<FeatureCollection> for GeoJson {
	fn from(collection: FeatureCollection) -> Self {
		GeoJson::FeatureCollection(collection)
	}
}

#[context("while reading GeoJSON")]
pub fn read_geojson(mut reader: impl Read) -> Result<GeoJson> {
	let mut buffer = String::new();
	reader.read_to_string(&mut buffer)?;
	GeoJson::parse(&buffer)
}

fn process_line(line: std::io::Result<String>, index: usize) -> Result<Option<Feature>> {
	let line_number = index + 1;
	match line {
		Ok(line) if line.trim().is_empty() => Ok(None),
		Ok(line) => decode_reader_with(Cursor::new(line), DecodeOptions::default())
			.map(Some)
			.inspect_err(|e| debug!("line {line_number} is not a valid feature: {e}"))
			.with_context(|| format!("line {line_number}")),
		Err(e) => Err(Error::from(e).context(format!("line {line_number}"))),
	}
}

/// Decodes one feature per non-blank line. Errors name the 1-based line number.
pub fn read_ndgeojson_iter(reader: impl BufRead) -> impl Iterator<Item = Result<Feature>> {
	reader
		.lines()
		.enumerate()
		.filter_map(|(index, line)| process_line(line, index).transpose())
}

/// Like [`read_ndgeojson_iter`], but every line is decoded on a tokio task. Order is preserved.
pub fn read_ndgeojson_stream(reader: impl BufRead) -> impl Stream<Item = Result<Feature>> {
	stream::iter(reader.lines().enumerate())
		.map(|(index, line)| tokio::spawn(async move { process_line(line, index).transpose() }))
		.buffered(num_cpus::get())
		.filter_map(|f| {
			ready(match f {
				Ok(value) => value,
				Err(e) => Some(Err(Error::from(e))),
			})
		})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Point;
	use pretty_assertions::assert_eq;
	use std::io::BufReader;

	const FEATURE: &str = r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1,1]},"properties":{}}"#;

	#[test]
	fn read_geojson_dispatches_on_type() -> Result<()> {
		let collection = read_geojson(Cursor::new(format!(r#"{{"features":[{FEATURE}],"type":"FeatureCollection"}}"#)))?;
		assert_eq!(collection.get_type(), Type::FeatureCollection);

		let feature = read_geojson(Cursor::new(FEATURE))?;
		assert_eq!(feature.get_type(), Type::Feature);

		let geometry = read_geojson(Cursor::new(r#"{"coordinates":[2,3],"type":"Point"}"#))?;
		assert_eq!(geometry, GeoJson::Geometry(Point::from([2.0, 3.0]).into()));
		Ok(())
	}

	#[test]
	fn read_geojson_errors_keep_their_kind() {
		let error = read_geojson(Cursor::new(r#"{"coordinates":[2,3]}"#)).unwrap_err();
		assert_eq!(error.to_string(), "while reading GeoJSON");
		assert_eq!(format!("{error:#}"), "while reading GeoJSON: Required type is missing at $");
		assert!(error.downcast_ref::<DecodeError>().is_some());

		let error = read_geojson(Cursor::new(r#"{"type":"Polygon","coordinates":[[[1,1],[2,2],[1,1]]]}"#)).unwrap_err();
		assert_eq!(
			error.root_cause().to_string(),
			"The coordinates do not meet the LinearRing criteria"
		);
	}

	#[test]
	fn geojson_codec_round_trip() -> Result<()> {
		let value: GeoJson = decode_str(FEATURE)?;
		assert!(value.validate().is_ok());
		assert_eq!(
			value.to_json()?,
			r#"{"geometry":{"coordinates":[1.0,1.0],"type":"Point"},"properties":{},"type":"Feature"}"#
		);
		Ok(())
	}

	#[test]
	fn geometry_members_before_the_type() -> Result<()> {
		let json = r#"{"type":"Feature","geometry":{"coordinates":"x","type":"GeometryCollection","geometries":[]},"properties":null}"#;
		let expected = GeoJson::Feature(Feature::new(crate::GeometryCollection::default()));
		assert_eq!(GeoJson::parse(json)?, expected);
		assert_eq!(decode_str::<GeoJson>(json)?, expected);

		let value: GeoJson = decode_str(r#"{"geometries":[1],"type":"Point","coordinates":[1,2]}"#)?;
		assert_eq!(value, GeoJson::Geometry(Point::from([1.0, 2.0]).into()));
		Ok(())
	}

	#[test]
	fn ndgeojson_iter_skips_blank_lines() {
		let input = format!("{FEATURE}\n\n  \n{FEATURE}");
		let results: Vec<_> = read_ndgeojson_iter(BufReader::new(Cursor::new(input))).collect();
		assert_eq!(results.len(), 2);
		for result in results {
			let feature = result.unwrap();
			assert_eq!(feature.geometry.map(|g| g.type_name()), Some("Point"));
		}
	}

	#[test]
	fn ndgeojson_iter_names_the_line() {
		let input = format!("{FEATURE}\n{{\"type\":\"Feature\",\"geometry\":{{\"type\":\"Point\",\"coordinates\":[1,100]}}}}\n");
		let results: Vec<_> = read_ndgeojson_iter(BufReader::new(Cursor::new(input))).collect();
		assert_eq!(results.len(), 2);
		assert!(results[0].is_ok());
		let error = results[1].as_ref().unwrap_err();
		assert_eq!(error.to_string(), "line 2");
		assert_eq!(
			error.downcast_ref::<DecodeError>().map(ToString::to_string),
			Some("Latitude '100.0' is out of range -90 to 90".to_string())
		);
	}

	#[tokio::test]
	async fn ndgeojson_stream_preserves_order() {
		let lines: Vec<String> = (0..20)
			.map(|i| format!(r#"{{"type":"Feature","geometry":{{"type":"Point","coordinates":[{i},0]}}}}"#))
			.collect();
		let mut stream = read_ndgeojson_stream(BufReader::new(Cursor::new(lines.join("\n"))));
		let mut longitudes = Vec::new();
		while let Some(result) = stream.next().await {
			match result.unwrap().geometry {
				Some(Geometry::Point(point)) => longitudes.push(point.coordinates.longitude),
				other => panic!("unexpected geometry {other:?}"),
			}
		}
		assert_eq!(longitudes, (0..20).map(f64::from).collect::<Vec<_>>());
	}

	#[tokio::test]
	async fn ndgeojson_stream_reports_errors() {
		let input = format!("{FEATURE}\n{{\"type\":\"Feature\",\"geometry\":{{\"type\":\"Point\"}}}}");
		let results: Vec<_> = read_ndgeojson_stream(BufReader::new(Cursor::new(input))).collect().await;
		assert_eq!(results.len(), 2);
		let error = results[1].as_ref().unwrap_err();
		assert_eq!(
			format!("{error:#}"),
			"line 2: Required coordinates are missing at $.geometry"
		);
	}
}
