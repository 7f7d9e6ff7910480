use thiserror::Error;

/// The reason a value failed validation. The message is what decoders report verbatim.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValidationError {
	#[error("{0}")]
	OutOfRange(String),
	#[error("{0}")]
	TooFewElements(String),
	#[error("{0}")]
	NoLinearRing(String),
	#[error("{0}")]
	IncompatibleCoordinateDimensions(String),
}

impl ValidationError {
	#[must_use]
	pub fn reason(&self) -> &str {
		match self {
			ValidationError::OutOfRange(reason)
			| ValidationError::TooFewElements(reason)
			| ValidationError::NoLinearRing(reason)
			| ValidationError::IncompatibleCoordinateDimensions(reason) => reason,
		}
	}
}

/// Outcome of every validation function.
///
/// Validation never fails with a `Result::Err`; callers inspect this value instead, or convert it
/// with [`ValidationResult::into_result`] when they want `?`.
#[derive(Clone, Debug, PartialEq)]
pub enum ValidationResult {
	Ok,
	Error(ValidationError),
}

impl ValidationResult {
	pub fn out_of_range(reason: impl Into<String>) -> Self {
		Self::Error(ValidationError::OutOfRange(reason.into()))
	}

	pub fn too_few_elements(reason: impl Into<String>) -> Self {
		Self::Error(ValidationError::TooFewElements(reason.into()))
	}

	pub fn no_linear_ring(reason: impl Into<String>) -> Self {
		Self::Error(ValidationError::NoLinearRing(reason.into()))
	}

	pub fn incompatible_coordinate_dimensions(reason: impl Into<String>) -> Self {
		Self::Error(ValidationError::IncompatibleCoordinateDimensions(reason.into()))
	}

	#[must_use]
	pub fn is_ok(&self) -> bool {
		matches!(self, ValidationResult::Ok)
	}

	/// The human readable reason, `None` for `Ok`.
	#[must_use]
	pub fn reason(&self) -> Option<&str> {
		match self {
			ValidationResult::Ok => None,
			ValidationResult::Error(error) => Some(error.reason()),
		}
	}

	pub fn into_result(self) -> Result<(), ValidationError> {
		match self {
			ValidationResult::Ok => Ok(()),
			ValidationResult::Error(error) => Err(error),
		}
	}

	/// Returns the first result that is not `Ok`, evaluating lazily in iteration order.
	pub fn first_error(results: impl IntoIterator<Item = ValidationResult>) -> ValidationResult {
		results
			.into_iter()
			.find(|result| !result.is_ok())
			.unwrap_or(ValidationResult::Ok)
	}
}

impl From<ValidationError> for ValidationResult {
	fn from(error: ValidationError) -> Self {
		ValidationResult::Error(error)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn ok_has_no_reason() {
		assert!(ValidationResult::Ok.is_ok());
		assert_eq!(ValidationResult::Ok.reason(), None);
		assert_eq!(ValidationResult::Ok.into_result(), Ok(()));
	}

	#[test]
	fn errors_carry_their_reason() {
		let cases = [
			ValidationResult::out_of_range("a"),
			ValidationResult::too_few_elements("b"),
			ValidationResult::no_linear_ring("c"),
			ValidationResult::incompatible_coordinate_dimensions("d"),
		];
		let reasons: Vec<_> = cases.iter().map(|r| r.reason().unwrap_or_default()).collect();
		assert_eq!(reasons, ["a", "b", "c", "d"]);
		assert!(cases.iter().all(|r| !r.is_ok()));
	}

	#[test]
	fn display_is_the_reason() {
		let error = ValidationError::NoLinearRing("not closed".to_string());
		assert_eq!(error.to_string(), "not closed");
		assert_eq!(ValidationResult::from(error.clone()).into_result(), Err(error));
	}

	#[test]
	fn first_error_keeps_sequence_order() {
		let result = ValidationResult::first_error([
			ValidationResult::Ok,
			ValidationResult::too_few_elements("first"),
			ValidationResult::out_of_range("second"),
		]);
		assert_eq!(result, ValidationResult::too_few_elements("first"));
		assert!(ValidationResult::first_error([]).is_ok());
	}

	#[test]
	fn first_error_stops_early() {
		let mut evaluated = 0;
		let result = ValidationResult::first_error((0..10).map(|i| {
			evaluated += 1;
			if i == 2 {
				ValidationResult::out_of_range("stop")
			} else {
				ValidationResult::Ok
			}
		}));
		assert!(!result.is_ok());
		assert_eq!(evaluated, 3);
	}
}
