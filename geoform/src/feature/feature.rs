use crate::{
	geometry::{GeoJsonTrait, Geometry, Type},
	validation::ValidationResult,
};
use geoform_core::json::{JsonObject, JsonValue};

/// An optional geometry plus free-form properties. Either part may be absent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Feature {
	pub geometry: Option<Geometry>,
	pub properties: Option<JsonObject>,
}

impl Feature {
	#[must_use]
	pub fn new(geometry: impl Into<Geometry>) -> Self {
		Self {
			geometry: Some(geometry.into()),
			properties: None,
		}
	}

	/// Sets a property, creating the property map if there is none yet.
	pub fn set_property<T>(&mut self, key: &str, value: T)
	where
		JsonValue: From<T>,
	{
		self.properties.get_or_insert_with(JsonObject::new).set(key, value);
	}

	#[must_use]
	pub fn with_properties(mut self, properties: JsonObject) -> Self {
		self.properties = Some(properties);
		self
	}
}

impl GeoJsonTrait for Feature {
	fn get_type(&self) -> Type {
		Type::Feature
	}

	/// Validates the geometry if there is one. Properties are never validated.
	fn validate(&self) -> ValidationResult {
		self.geometry.as_ref().map_or(ValidationResult::Ok, Geometry::validate)
	}
}
