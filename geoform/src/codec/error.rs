use crate::validation::ValidationError;
use thiserror::Error;

/// The single error kind raised by the GeoJSON decoders.
///
/// Structural problems (missing members, wrong tags, malformed coordinates) carry only a message.
/// When a decoded value failed validation, `validation` holds the original error and `message`
/// is its reason, copied verbatim.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{message}")]
pub struct DecodeError {
	pub message: String,
	#[source]
	pub validation: Option<ValidationError>,
}

impl DecodeError {
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			validation: None,
		}
	}
}

impl From<ValidationError> for DecodeError {
	fn from(error: ValidationError) -> Self {
		Self {
			message: error.reason().to_string(),
			validation: Some(error),
		}
	}
}

/// Raised when a required value is encoded as `None`.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{name} was null! Wrap in an Option to write nullable values.")]
pub struct NullValueError {
	pub name: &'static str,
}
