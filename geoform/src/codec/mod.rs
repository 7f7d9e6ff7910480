//! The GeoJSON wire codec.
//!
//! Every model type implements [`GeoJsonCodec`]. Decoders read one JSON value from a [`JsonReader`],
//! check required members and the `type` tag, and validate the result before returning it, so a
//! decoded value is always valid. Encoders write the canonical member order (`coordinates` before
//! `type`, `geometry`/`properties`/`type` for features) and never validate.
//!
//! ```
//! use geoform::{Point, codec::{GeoJsonCodec, decode_str}};
//!
//! let point: Point = decode_str(r#"{"type":"Point","coordinates":[102.0,0.5]}"#).unwrap();
//! assert_eq!(point.to_json().unwrap(), r#"{"coordinates":[102.0,0.5],"type":"Point"}"#);
//! ```

mod coordinates;
mod error;
mod feature;
mod geometry;

pub use error::{DecodeError, NullValueError};

use crate::{
	geometry::{GeoJsonTrait, Type},
	validation::ValidationResult,
};
use anyhow::{Error, Result};
use geoform_core::json::{JsonReader, JsonWriter};
use log::debug;
use std::io::{Cursor, Read};

const COORDINATES: &str = "coordinates";
const FEATURES: &str = "features";
const GEOMETRIES: &str = "geometries";
const GEOMETRY: &str = "geometry";
const PROPERTIES: &str = "properties";
const TYPE: &str = "type";

/// Converts a value between its typed form and its GeoJSON representation.
pub trait GeoJsonCodec: Sized {
	/// Name used in error messages, e.g. `"LineString"`.
	const NAME: &'static str;

	/// Reads exactly one value. The result has passed validation.
	fn decode(reader: &mut JsonReader) -> Result<Self>;

	fn encode(&self, writer: &mut JsonWriter) -> Result<()>;

	/// Encodes the value as a compact JSON string.
	fn to_json(&self) -> Result<String> {
		encode_string(Some(self))
	}
}

/// Options for the decode entry points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecodeOptions {
	/// Adds a snapshot of the most recent input to structural error messages.
	pub debug: bool,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self { debug: true }
	}
}

pub fn decode_str<T: GeoJsonCodec>(json: &str) -> Result<T> {
	decode_reader_with(Cursor::new(json.as_bytes()), DecodeOptions::default())
}

pub fn decode_reader<T: GeoJsonCodec>(reader: impl Read) -> Result<T> {
	decode_reader_with(reader, DecodeOptions::default())
}

/// Decodes one value and fails if anything but whitespace follows it.
pub fn decode_reader_with<T: GeoJsonCodec>(reader: impl Read, options: DecodeOptions) -> Result<T> {
	let mut reader = JsonReader::from_reader(reader, options.debug);
	let value = T::decode(&mut reader)?;
	reader.expect_end()?;
	Ok(value)
}

/// Encodes a value that must be present. `None` fails with a [`NullValueError`].
pub fn encode_string<T: GeoJsonCodec>(value: Option<&T>) -> Result<String> {
	let value = value.ok_or(NullValueError { name: T::NAME })?;
	let mut writer = JsonWriter::new();
	value.encode(&mut writer)?;
	writer.into_string()
}

fn decode_error(message: String) -> Error {
	Error::new(DecodeError::new(message))
}

fn missing(what: &str, reader: &JsonReader) -> Error {
	decode_error(format!("Required {what} are missing at {}", reader.path()))
}

/// Checks the `type` tag after a value's required members have been checked.
fn check_type(type_name: Option<&str>, expected: Type, reader: &JsonReader) -> Result<()> {
	let type_name = type_name.ok_or_else(|| decode_error(format!("Required type is missing at {}", reader.path())))?;
	if Type::parse(type_name) == expected {
		Ok(())
	} else {
		Err(decode_error(format!(
			"Required type is not a {expected} at {}",
			reader.path()
		)))
	}
}

/// Returns the value if it validates, otherwise a [`DecodeError`] carrying the reason verbatim.
fn validated<T: GeoJsonTrait>(value: T, reader: &JsonReader) -> Result<T> {
	match value.validate() {
		ValidationResult::Ok => Ok(value),
		ValidationResult::Error(error) => {
			debug!("rejecting {} at {}: {error}", value.get_type(), reader.path());
			Err(Error::new(DecodeError::from(error)))
		}
	}
}

fn write_type(writer: &mut JsonWriter, kind: Type) -> Result<()> {
	writer.name(TYPE)?;
	writer.string(kind.as_str())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Feature, LineString, Point, Position};
	use geoform_core::UnexpectedEnd;
	use pretty_assertions::assert_eq;

	#[test]
	fn encode_none_fails_with_the_type_name() {
		let error = encode_string::<LineString>(None).unwrap_err();
		assert_eq!(
			error.to_string(),
			"LineString was null! Wrap in an Option to write nullable values."
		);
		assert!(error.downcast_ref::<NullValueError>().is_some());

		let error = encode_string::<Position>(None).unwrap_err();
		assert_eq!(error.downcast_ref(), Some(&NullValueError { name: "Position" }));
	}

	#[test]
	fn encode_some() -> Result<()> {
		let point = Point::from([1.0, 2.0]);
		assert_eq!(encode_string(Some(&point))?, point.to_json()?);
		Ok(())
	}

	#[test]
	fn trailing_content_is_rejected() {
		assert!(decode_str::<Point>(r#"{"coordinates":[1,2],"type":"Point"}  "#).is_ok());
		assert!(decode_str::<Point>(r#"{"coordinates":[1,2],"type":"Point"} {}"#).is_err());
	}

	#[test]
	fn premature_end_is_a_distinct_error() {
		let error = decode_str::<Point>(r#"{"coordinates":[1,2"#).unwrap_err();
		assert!(error.downcast_ref::<UnexpectedEnd>().is_some());
		assert!(error.downcast_ref::<DecodeError>().is_none());
	}

	#[test]
	fn debug_option_controls_snapshots() {
		let json = r#"{"coordinates":[1,x],"type":"Point"}"#;
		let quiet = decode_reader_with::<Point>(json.as_bytes(), DecodeOptions { debug: false }).unwrap_err();
		let verbose = decode_reader_with::<Point>(json.as_bytes(), DecodeOptions::default()).unwrap_err();
		assert_eq!(
			quiet.to_string(),
			"expected a number but found 'x' in $.coordinates[1] at position 18"
		);
		assert_eq!(
			verbose.to_string(),
			"expected a number but found 'x' in $.coordinates[1] at position 18: oordinates\":[1,"
		);
	}

	#[test]
	fn decode_from_reader() -> Result<()> {
		let feature: Feature = decode_reader(r#"{"type":"Feature","geometry":null}"#.as_bytes())?;
		assert_eq!(feature, Feature::default());
		Ok(())
	}
}
