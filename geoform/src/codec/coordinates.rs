//! Reading and writing nested coordinate arrays.
//!
//! A geometry's `type` may follow its `coordinates`, so coordinates are first read into a
//! [`CoordinateTree`] whose innermost number arrays are already positions. Once the kind is known
//! the tree is converted to the nesting depth that kind requires.

use super::DecodeError;
use crate::geometry::Position;
use anyhow::{Error, Result};
use geoform_core::json::{JsonReader, JsonWriter};

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum CoordinateTree {
	Number(f64),
	Position(Position),
	List(Vec<CoordinateTree>),
}

/// Arrays a MultiPolygon's coordinates are nested in. No kind nests deeper.
const MAX_COORDINATE_DEPTH: usize = 4;

/// Builds a position from the numbers of one position array. Members after the altitude are ignored.
pub(crate) fn position_from_numbers(numbers: &[f64], path: impl FnOnce() -> String) -> Result<Position> {
	match *numbers {
		[longitude, latitude] => Ok(Position::new(longitude, latitude)),
		[longitude, latitude, altitude, ..] => Ok(Position::with_altitude(longitude, latitude, altitude)),
		_ => Err(Error::new(DecodeError::new(format!(
			"Required positions are missing at {}",
			path()
		)))),
	}
}

fn not_nested_correctly(kind: &str, reader: &JsonReader) -> Error {
	Error::new(DecodeError::new(format!(
		"Coordinates of a {kind} are not nested correctly at {}",
		reader.path()
	)))
}

impl CoordinateTree {
	/// Reads the coordinates of a `kind` geometry. Arrays nested deeper than any kind allows are
	/// rejected as soon as they are seen.
	pub fn read(reader: &mut JsonReader, kind: &str) -> Result<Self> {
		Self::read_nested(reader, kind, 0)
	}

	fn read_nested(reader: &mut JsonReader, kind: &str, depth: usize) -> Result<Self> {
		if !reader.peek_array()? {
			return reader.read_number().map(CoordinateTree::Number);
		}
		if depth == MAX_COORDINATE_DEPTH {
			return Err(not_nested_correctly(kind, reader));
		}

		let items = reader.read_array(|reader| Self::read_nested(reader, kind, depth + 1))?;
		let numbers: Option<Vec<f64>> = items
			.iter()
			.map(|item| match item {
				CoordinateTree::Number(value) => Some(*value),
				_ => None,
			})
			.collect();

		match numbers {
			Some(numbers) if !numbers.is_empty() => {
				position_from_numbers(&numbers, || reader.path()).map(CoordinateTree::Position)
			}
			_ => Ok(CoordinateTree::List(items)),
		}
	}

	/// `true` for an empty top-level array, which counts as missing coordinates.
	pub fn is_empty(&self) -> bool {
		matches!(self, CoordinateTree::List(items) if items.is_empty())
	}

	pub fn into_position(self, kind: &str, reader: &JsonReader) -> Result<Position> {
		match self {
			CoordinateTree::Position(position) => Ok(position),
			CoordinateTree::List(items) if items.is_empty() => position_from_numbers(&[], || reader.path()),
			_ => Err(not_nested_correctly(kind, reader)),
		}
	}

	pub fn into_positions(self, kind: &str, reader: &JsonReader) -> Result<Vec<Position>> {
		self.into_list(kind, reader, Self::into_position)
	}

	pub fn into_rings(self, kind: &str, reader: &JsonReader) -> Result<Vec<Vec<Position>>> {
		self.into_list(kind, reader, Self::into_positions)
	}

	pub fn into_polygons(self, kind: &str, reader: &JsonReader) -> Result<Vec<Vec<Vec<Position>>>> {
		self.into_list(kind, reader, Self::into_rings)
	}

	fn into_list<T>(
		self,
		kind: &str,
		reader: &JsonReader,
		convert: fn(Self, &str, &JsonReader) -> Result<T>,
	) -> Result<Vec<T>> {
		match self {
			CoordinateTree::List(items) => items.into_iter().map(|item| convert(item, kind, reader)).collect(),
			_ => Err(not_nested_correctly(kind, reader)),
		}
	}
}

/// Writes coordinates as nested JSON arrays.
pub(crate) trait WriteCoordinates {
	fn write_coordinates(&self, writer: &mut JsonWriter) -> Result<()>;
}

impl WriteCoordinates for Position {
	fn write_coordinates(&self, writer: &mut JsonWriter) -> Result<()> {
		writer.begin_array()?;
		writer.number(self.longitude)?;
		writer.number(self.latitude)?;
		if let Some(altitude) = self.altitude {
			writer.number(altitude)?;
		}
		writer.end_array()
	}
}

impl<T: WriteCoordinates> WriteCoordinates for Vec<T> {
	fn write_coordinates(&self, writer: &mut JsonWriter) -> Result<()> {
		writer.begin_array()?;
		for item in self {
			item.write_coordinates(writer)?;
		}
		writer.end_array()
	}
}
