use super::JsonValue;
use crate::json::stringify;
use std::fmt::Debug;

/// A JSON array backed by a `Vec<JsonValue>`.
#[derive(Clone, Default, PartialEq)]
pub struct JsonArray(pub Vec<JsonValue>);

impl JsonArray {
	#[must_use]
	pub fn new() -> Self {
		Self(Vec::new())
	}

	/// Serializes the array as compact JSON, e.g. `[1,"two",true]`.
	#[must_use]
	pub fn stringify(&self) -> String {
		let items = self.0.iter().map(stringify).collect::<Vec<_>>();
		format!("[{}]", items.join(","))
	}

	#[must_use]
	pub fn as_slice(&self) -> &[JsonValue] {
		&self.0
	}

	pub fn push<T>(&mut self, value: T)
	where
		JsonValue: From<T>,
	{
		self.0.push(JsonValue::from(value));
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, JsonValue> {
		self.0.iter()
	}
}

impl Debug for JsonArray {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

impl<T> From<Vec<T>> for JsonArray
where
	JsonValue: From<T>,
{
	fn from(input: Vec<T>) -> Self {
		JsonArray(input.into_iter().map(JsonValue::from).collect())
	}
}

impl FromIterator<JsonValue> for JsonArray {
	fn from_iter<I: IntoIterator<Item = JsonValue>>(iter: I) -> Self {
		JsonArray(iter.into_iter().collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn stringify_mixed_values() {
		let array = JsonArray(vec![
			JsonValue::from("hello"),
			JsonValue::from(42.0),
			JsonValue::from(true),
			JsonValue::Null,
		]);
		assert_eq!(array.stringify(), "[\"hello\",42,true,null]");
		assert_eq!(JsonArray::new().stringify(), "[]");
	}

	#[test]
	fn push_and_len() {
		let mut array = JsonArray::default();
		assert!(array.is_empty());
		array.push(1);
		array.push("two");
		assert_eq!(array.len(), 2);
		assert_eq!(array.as_slice()[1], JsonValue::from("two"));
	}

	#[test]
	fn debug_format() {
		assert_eq!(format!("{:?}", JsonArray::from(vec![1])), "[Number(1.0)]");
	}
}
