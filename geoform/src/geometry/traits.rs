use super::Type;
use crate::validation::ValidationResult;
use std::fmt::Debug;

/// Shared by every GeoJSON object: it knows its `type` tag and can validate itself.
pub trait GeoJsonTrait: Debug + Clone + PartialEq {
	fn get_type(&self) -> Type;

	/// Checks all structural rules. Calling it again on the same value gives the same result.
	fn validate(&self) -> ValidationResult;
}
