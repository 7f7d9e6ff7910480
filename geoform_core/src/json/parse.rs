use super::{JsonArray, JsonObject, JsonValue};
use crate::byte_iterator::{
	ByteIterator, parse_array_entries, parse_finite_number, parse_object_entries, parse_quoted_json_string, parse_tag,
};
use anyhow::{Context, Result};
use std::io::Cursor;

/// Parses a complete JSON document. Trailing non-whitespace is an error.
pub fn parse_json_str(json: &str) -> Result<JsonValue> {
	let mut iter = ByteIterator::from_reader(Cursor::new(json), true);
	let value = parse_json_iter(&mut iter).with_context(|| format!("while parsing JSON '{json}'"))?;
	iter.skip_whitespace();
	if iter.peek().is_some() {
		return Err(iter.format_error("unexpected trailing characters after JSON value"));
	}
	Ok(value)
}

/// The deepest nesting of arrays and objects accepted by [`parse_json_iter`] and [`super::JsonReader`].
pub const MAX_NESTING_DEPTH: usize = 128;

/// Parses the next JSON value from `iter`.
pub fn parse_json_iter(iter: &mut ByteIterator) -> Result<JsonValue> {
	parse_json_nested(iter, 0)
}

fn parse_json_nested(iter: &mut ByteIterator, depth: usize) -> Result<JsonValue> {
	iter.skip_whitespace();
	let byte = iter.expect_peeked_byte()?;
	if matches!(byte, b'[' | b'{') && depth >= MAX_NESTING_DEPTH {
		return Err(iter.format_error(&format!("JSON is nested deeper than {MAX_NESTING_DEPTH} levels")));
	}
	match byte {
		b'[' => parse_array_entries(iter, |iter| parse_json_nested(iter, depth + 1))
			.map(|items| JsonValue::Array(JsonArray(items))),
		b'{' => parse_json_object(iter, depth + 1),
		b'"' => parse_quoted_json_string(iter).map(JsonValue::String),
		d if d.is_ascii_digit() || d == b'-' => parse_finite_number(iter).map(JsonValue::Number),
		b't' => parse_tag(iter, "true").map(|()| JsonValue::Boolean(true)),
		b'f' => parse_tag(iter, "false").map(|()| JsonValue::Boolean(false)),
		b'n' => parse_tag(iter, "null").map(|()| JsonValue::Null),
		c => Err(iter.format_error(&format!("unexpected character '{}'", c as char))),
	}
}

fn parse_json_object(iter: &mut ByteIterator, depth: usize) -> Result<JsonValue> {
	let mut object = JsonObject::new();
	parse_object_entries(iter, |key, iter2| {
		object.0.insert(key, parse_json_nested(iter2, depth)?);
		Ok(())
	})?;
	Ok(JsonValue::Object(object))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::UnexpectedEnd;

	fn v<T>(input: T) -> JsonValue
	where
		JsonValue: From<T>,
	{
		JsonValue::from(input)
	}

	#[test]
	fn nested_document() -> Result<()> {
		let data = r#"{"users":{"user1":{"city":"Nantes","country":"France"},"user3":{"city":"Paris","age":30}},"countries":["France","Belgium"]}"#;
		assert_eq!(
			parse_json_str(data)?,
			v(vec![
				(
					"users",
					v(vec![
						("user1", v(vec![("city", "Nantes"), ("country", "France")])),
						("user3", v(vec![("city", v("Paris")), ("age", v(30))]))
					])
				),
				("countries", v(vec!["France", "Belgium"]))
			])
		);
		Ok(())
	}

	#[test]
	fn error_carries_position_and_snapshot() {
		let err = parse_json_str(r#"{"city":"Nantes","country","France"}"#).unwrap_err();
		assert_eq!(
			err.chain().last().unwrap().to_string(),
			"expected ':' at position 27: tes\",\"country\","
		);
	}

	#[test]
	fn whitespace_is_ignored() -> Result<()> {
		let expected = v(vec![("a", v(vec![v(vec![("b", v(7)), ("c", v(true))]), v(vec![("e", JsonValue::Null)])]))]);
		let data = r#"_{_"a"_:_[_{_"b"_:_7_,_"c"_:_true_}_,_{_"e"_:_null_}_]_}_"#;

		for ws in ["", " ", "\t", "\n", "\r"] {
			assert_eq!(parse_json_str(&data.replace('_', ws))?, expected);
		}
		Ok(())
	}

	#[test]
	fn empty_containers() -> Result<()> {
		assert_eq!(parse_json_str("{}")?, JsonValue::Object(JsonObject::new()));
		assert_eq!(parse_json_str("[]")?, JsonValue::Array(JsonArray::new()));
		Ok(())
	}

	#[test]
	fn trailing_characters_are_rejected() {
		assert!(parse_json_str("[1] x").is_err());
		assert!(parse_json_str("[1]  ").is_ok());
	}

	#[test]
	fn nesting_is_limited() -> Result<()> {
		let nested = |depth: usize| format!("{}{}", "[".repeat(depth), "]".repeat(depth));
		assert_eq!(parse_json_str(&nested(MAX_NESTING_DEPTH))?.stringify(), nested(MAX_NESTING_DEPTH));

		let err = parse_json_str(&nested(MAX_NESTING_DEPTH + 1)).unwrap_err();
		assert!(
			err.chain()
				.any(|e| e.to_string().starts_with("JSON is nested deeper than 128 levels"))
		);

		let err = parse_json_str(&format!(r#"{{"a":{}}}"#, "[".repeat(100_000))).unwrap_err();
		assert!(err.downcast_ref::<UnexpectedEnd>().is_none());
		Ok(())
	}

	#[test]
	fn numbers_must_be_finite() {
		assert!(parse_json_str("[1e400]").is_err());
		assert!(parse_json_str(r#"{"a":-1e999}"#).is_err());
		assert!(parse_json_str("1e308").is_ok());
	}

	#[test]
	fn truncated_input() {
		let err = parse_json_str("{\"a\": [1, 2").unwrap_err();
		assert!(err.downcast_ref::<UnexpectedEnd>().is_some());
		let err = parse_json_str("").unwrap_err();
		assert!(err.downcast_ref::<UnexpectedEnd>().is_some());
	}
}
