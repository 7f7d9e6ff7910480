use super::Feature;
use crate::{
	geometry::{GeoJsonTrait, Type},
	validation::ValidationResult,
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeatureCollection {
	pub features: Vec<Feature>,
}

impl FeatureCollection {
	#[must_use]
	pub fn new(features: Vec<Feature>) -> Self {
		Self { features }
	}
}

impl GeoJsonTrait for FeatureCollection {
	fn get_type(&self) -> Type {
		Type::FeatureCollection
	}

	fn validate(&self) -> ValidationResult {
		ValidationResult::first_error(self.features.iter().map(Feature::validate))
	}
}

impl FromIterator<Feature> for FeatureCollection {
	fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
		Self::new(iter.into_iter().collect())
	}
}
