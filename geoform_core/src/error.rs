use thiserror::Error;

/// The input ended while a JSON value was still being read.
///
/// This is raised by the byte level and passes through every decoder unchanged, so callers can
/// tell truncated input apart from well-formed input that fails to decode:
///
/// ```
/// # use std::io::Cursor;
/// # use geoform_core::{UnexpectedEnd, json::JsonReader};
/// let mut reader = JsonReader::from_reader(Cursor::new("[1.0, 2"), false);
/// let err = reader.read_value().unwrap_err();
/// assert!(err.downcast_ref::<UnexpectedEnd>().is_some());
/// ```
#[derive(Clone, Debug, Error, PartialEq)]
#[error("unexpected end of input at position {position}")]
pub struct UnexpectedEnd {
	pub position: usize,
}
