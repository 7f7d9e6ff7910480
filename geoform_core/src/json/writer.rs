//! A compact JSON writer with automatic separators.
//!
//! Members are written in the order the caller emits them, which is what makes encoder output
//! reproducible byte for byte. Floating point numbers use Rust's shortest round-trip form
//! with a forced fraction for integral values (`102.0`, `0.5`, `1e-7`).

use super::{JsonObject, JsonValue, escape_json_string, stringify};
use anyhow::{Result, bail, ensure};

#[derive(Debug)]
enum Scope {
	Object { is_empty: bool, has_name: bool },
	Array { is_empty: bool },
}

#[derive(Debug, Default)]
pub struct JsonWriter {
	buffer: String,
	stack: Vec<Scope>,
}

impl JsonWriter {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Writes the separator a new value needs and checks that a value may go here.
	fn before_value(&mut self) -> Result<()> {
		match self.stack.last_mut() {
			None => ensure!(self.buffer.is_empty(), "a JSON document holds exactly one top-level value"),
			Some(Scope::Array { is_empty }) => {
				if !*is_empty {
					self.buffer.push(',');
				}
				*is_empty = false;
			}
			Some(Scope::Object { has_name, .. }) => {
				ensure!(*has_name, "a value inside an object needs a member name first");
				*has_name = false;
			}
		}
		Ok(())
	}

	pub fn begin_object(&mut self) -> Result<()> {
		self.before_value()?;
		self.buffer.push('{');
		self.stack.push(Scope::Object {
			is_empty: true,
			has_name: false,
		});
		Ok(())
	}

	pub fn end_object(&mut self) -> Result<()> {
		match self.stack.pop() {
			Some(Scope::Object { has_name: false, .. }) => {
				self.buffer.push('}');
				Ok(())
			}
			Some(Scope::Object { has_name: true, .. }) => bail!("member name without a value"),
			_ => bail!("end_object without a matching begin_object"),
		}
	}

	pub fn begin_array(&mut self) -> Result<()> {
		self.before_value()?;
		self.buffer.push('[');
		self.stack.push(Scope::Array { is_empty: true });
		Ok(())
	}

	pub fn end_array(&mut self) -> Result<()> {
		match self.stack.pop() {
			Some(Scope::Array { .. }) => {
				self.buffer.push(']');
				Ok(())
			}
			_ => bail!("end_array without a matching begin_array"),
		}
	}

	/// Writes a member name. The next value written becomes that member's value.
	pub fn name(&mut self, name: &str) -> Result<()> {
		match self.stack.last_mut() {
			Some(Scope::Object { is_empty, has_name }) => {
				ensure!(!*has_name, "member name '{name}' follows another name without a value");
				if !*is_empty {
					self.buffer.push(',');
				}
				*is_empty = false;
				*has_name = true;
			}
			_ => bail!("member name '{name}' outside of an object"),
		}
		self.buffer.push('"');
		self.buffer.push_str(&escape_json_string(name));
		self.buffer.push_str("\":");
		Ok(())
	}

	/// Writes a floating point number. NaN and infinities have no JSON form and are rejected.
	pub fn number(&mut self, value: f64) -> Result<()> {
		ensure!(value.is_finite(), "JSON cannot represent the number {value}");
		self.before_value()?;
		self.buffer.push_str(&format!("{value:?}"));
		Ok(())
	}

	pub fn string(&mut self, value: &str) -> Result<()> {
		self.before_value()?;
		self.buffer.push('"');
		self.buffer.push_str(&escape_json_string(value));
		self.buffer.push('"');
		Ok(())
	}

	pub fn null(&mut self) -> Result<()> {
		self.before_value()?;
		self.buffer.push_str("null");
		Ok(())
	}

	/// Writes a dynamic value in its compact form.
	pub fn value(&mut self, value: &JsonValue) -> Result<()> {
		check_numbers(value)?;
		self.before_value()?;
		self.buffer.push_str(&stringify(value));
		Ok(())
	}

	pub fn object(&mut self, object: &JsonObject) -> Result<()> {
		object.0.values().try_for_each(check_numbers)?;
		self.before_value()?;
		self.buffer.push_str(&object.stringify());
		Ok(())
	}

	/// Returns the document, failing if an object or array is still open.
	pub fn into_string(self) -> Result<String> {
		ensure!(self.stack.is_empty(), "{} JSON scope(s) left open", self.stack.len());
		Ok(self.buffer)
	}
}

/// Fails if `value` contains a number JSON cannot represent.
fn check_numbers(value: &JsonValue) -> Result<()> {
	match value {
		JsonValue::Number(n) => {
			ensure!(n.is_finite(), "JSON cannot represent the number {n}");
			Ok(())
		}
		JsonValue::Array(items) => items.0.iter().try_for_each(check_numbers),
		JsonValue::Object(members) => members.0.values().try_for_each(check_numbers),
		_ => Ok(()),
	}
}
