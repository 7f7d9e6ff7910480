use crate::validation::ValidationResult;
use std::fmt::Debug;

pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);

/// A single coordinate: longitude and latitude in degrees, plus an optional altitude.
///
/// Construction never checks ranges, a `Position` may be out of range until [`Position::validate`]
/// says otherwise.
#[derive(Clone, Copy, PartialEq)]
pub struct Position {
	pub longitude: f64,
	pub latitude: f64,
	pub altitude: Option<f64>,
}

impl Position {
	#[must_use]
	pub fn new(longitude: f64, latitude: f64) -> Self {
		Self {
			longitude,
			latitude,
			altitude: None,
		}
	}

	#[must_use]
	pub fn with_altitude(longitude: f64, latitude: f64, altitude: f64) -> Self {
		Self {
			longitude,
			latitude,
			altitude: Some(altitude),
		}
	}

	#[must_use]
	pub fn has_altitude(&self) -> bool {
		self.altitude.is_some()
	}

	/// Checks longitude first, then latitude.
	pub fn validate(&self) -> ValidationResult {
		let (min, max) = LONGITUDE_RANGE;
		if !(min..=max).contains(&self.longitude) {
			return ValidationResult::out_of_range(format!(
				"Longitude '{:?}' is out of range -180 to 180",
				self.longitude
			));
		}
		let (min, max) = LATITUDE_RANGE;
		if !(min..=max).contains(&self.latitude) {
			return ValidationResult::out_of_range(format!("Latitude '{:?}' is out of range -90 to 90", self.latitude));
		}
		ValidationResult::Ok
	}
}

impl Debug for Position {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let mut list = f.debug_list();
		list.entry(&self.longitude).entry(&self.latitude);
		if let Some(altitude) = &self.altitude {
			list.entry(altitude);
		}
		list.finish()
	}
}

impl From<[f64; 2]> for Position {
	fn from([longitude, latitude]: [f64; 2]) -> Self {
		Self::new(longitude, latitude)
	}
}

impl From<[f64; 3]> for Position {
	fn from([longitude, latitude, altitude]: [f64; 3]) -> Self {
		Self::with_altitude(longitude, latitude, altitude)
	}
}

impl From<(f64, f64)> for Position {
	fn from((longitude, latitude): (f64, f64)) -> Self {
		Self::new(longitude, latitude)
	}
}

impl From<(f64, f64, f64)> for Position {
	fn from((longitude, latitude, altitude): (f64, f64, f64)) -> Self {
		Self::with_altitude(longitude, latitude, altitude)
	}
}
