//! Structural rules for every geometry kind.
//!
//! All functions are pure and total. Every list-level rule reports the first failing element in
//! sequence order and stops evaluating after it.

use super::ValidationResult;
use crate::geometry::Position;

const MINIMUM_LINE_STRING_POSITIONS: usize = 2;
const MINIMUM_LINEAR_RING_POSITIONS: usize = 4;

pub fn is_point(position: &Position) -> ValidationResult {
	position.validate()
}

/// At least two positions, one dimension throughout, every position in range. Checked in that order.
pub fn is_line_string(positions: &[Position]) -> ValidationResult {
	if positions.len() < MINIMUM_LINE_STRING_POSITIONS {
		return ValidationResult::too_few_elements("A LineString consists of at least two coordinate pairs");
	}
	if !has_consistent_dimension(positions) {
		return mixed_dimensions();
	}
	ValidationResult::first_error(positions.iter().map(is_point))
}

/// A line string of at least four positions whose first and last position are equal,
/// altitude included.
fn is_linear_ring(positions: &[Position]) -> ValidationResult {
	let result = is_line_string(positions);
	if !result.is_ok() {
		return result;
	}
	if positions.len() >= MINIMUM_LINEAR_RING_POSITIONS && positions.first() == positions.last() {
		ValidationResult::Ok
	} else {
		ValidationResult::no_linear_ring("The coordinates do not meet the LinearRing criteria")
	}
}

pub fn is_polygon(rings: &[Vec<Position>]) -> ValidationResult {
	if rings.is_empty() {
		return ValidationResult::too_few_elements("A Polygon consists of at least one linear ring");
	}
	ValidationResult::first_error(rings.iter().map(|ring| is_linear_ring(ring)))
}

pub fn is_multi_point(positions: &[Position]) -> ValidationResult {
	if positions.is_empty() {
		return ValidationResult::too_few_elements("A MultiPoint consists of at least one position");
	}
	if !has_consistent_dimension(positions) {
		return mixed_dimensions();
	}
	ValidationResult::first_error(positions.iter().map(is_point))
}

pub fn is_multi_line_string(line_strings: &[Vec<Position>]) -> ValidationResult {
	if line_strings.is_empty() {
		return ValidationResult::too_few_elements("A MultiLineString consists of at least one LineString");
	}
	ValidationResult::first_error(line_strings.iter().map(|line| is_line_string(line)))
}

pub fn is_multi_polygon(polygons: &[Vec<Vec<Position>>]) -> ValidationResult {
	if polygons.is_empty() {
		return ValidationResult::too_few_elements("A MultiPolygon consists of at least one Polygon");
	}
	ValidationResult::first_error(polygons.iter().map(|polygon| is_polygon(polygon)))
}

fn has_consistent_dimension(positions: &[Position]) -> bool {
	match positions.split_first() {
		Some((first, rest)) => rest.iter().all(|p| p.has_altitude() == first.has_altitude()),
		None => true,
	}
}

fn mixed_dimensions() -> ValidationResult {
	ValidationResult::incompatible_coordinate_dimensions("Coordinates consist of 2D and 3D geometries")
}
