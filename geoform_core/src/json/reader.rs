//! A streaming JSON reader that knows where it is.
//!
//! `JsonReader` wraps a [`ByteIterator`] and keeps a stack of path segments, so every error can
//! name the value it is about, e.g. `$.geometries[1].coordinates[0]`. Decoders drive it with
//! closures: `read_object` hands each member name to the caller, who dispatches on it with a
//! `match` and calls [`JsonReader::skip_value`] for names it does not know.
//!
//! When an object or array has been read completely, the path names that value again. So a
//! decoder that notices a missing member after `read_object` returns reports the object itself.

use super::{JsonValue, MAX_NESTING_DEPTH, parse_json_iter};
use crate::byte_iterator::{ByteIterator, parse_finite_number, parse_quoted_json_string, parse_tag};
use anyhow::{Error, Result};
use itertools::Itertools;
use std::io::{Cursor, Read};

#[derive(Clone, Debug, PartialEq)]
enum PathSegment {
	/// Inside an object; holds the member name once one has been read.
	Member(Option<String>),
	/// Inside an array; holds the index of the current element.
	Index(usize),
}

pub struct JsonReader<'a> {
	iter: ByteIterator<'a>,
	path: Vec<PathSegment>,
}

impl<'a> JsonReader<'a> {
	pub fn from_reader(reader: impl Read + 'a, debug: bool) -> Self {
		Self {
			iter: ByteIterator::from_reader(reader, debug),
			path: Vec::new(),
		}
	}

	pub fn from_str(json: &'a str, debug: bool) -> Self {
		Self::from_reader(Cursor::new(json.as_bytes()), debug)
	}

	/// A reader over `json`, the buffered value of `member` of the object this reader is in or has
	/// just read. Its paths continue from there, its positions count from the start of `json`.
	pub fn member_reader<'b>(&self, member: &str, json: &'b str) -> JsonReader<'b> {
		let mut path = self.path.clone();
		path.push(PathSegment::Member(Some(member.to_string())));
		JsonReader {
			iter: ByteIterator::from_reader(Cursor::new(json.as_bytes()), self.iter.is_debug_enabled()),
			path,
		}
	}

	/// The current location in JSONPath notation: `$`, `$.geometry`, `$.coordinates[2]`, ...
	#[must_use]
	pub fn path(&self) -> String {
		let segments = self.path.iter().format_with("", |segment, f| match segment {
			PathSegment::Member(Some(name)) => f(&format_args!(".{name}")),
			PathSegment::Member(None) => f(&"."),
			PathSegment::Index(index) => f(&format_args!("[{index}]")),
		});
		format!("${segments}")
	}

	/// An error naming the current path and byte position.
	#[must_use]
	pub fn error(&self, msg: &str) -> Error {
		self.iter.format_error(&format!("{msg} in {}", self.path()))
	}

	fn peek_token(&mut self) -> Result<u8> {
		self.iter.skip_whitespace();
		self.iter.expect_peeked_byte()
	}

	fn enter(&mut self, segment: PathSegment) -> Result<()> {
		if self.path.len() >= MAX_NESTING_DEPTH {
			return Err(self.error(&format!("JSON is nested deeper than {MAX_NESTING_DEPTH} levels")));
		}
		self.path.push(segment);
		Ok(())
	}

	fn expect_token(&mut self, token: u8, what: &str) -> Result<()> {
		if self.peek_token()? == token {
			self.iter.advance();
			Ok(())
		} else {
			Err(self.error(&format!("expected '{}' while reading {what}", token as char)))
		}
	}

	/// Reads an object, calling `read_member` for every member. The callback must consume the
	/// member's value, e.g. with [`JsonReader::skip_value`].
	pub fn read_object(&mut self, mut read_member: impl FnMut(&str, &mut Self) -> Result<()>) -> Result<()> {
		self.expect_token(b'{', "an object")?;
		self.enter(PathSegment::Member(None))?;
		let result = self.read_members(&mut read_member);
		self.path.pop();
		result
	}

	fn read_members(&mut self, read_member: &mut impl FnMut(&str, &mut Self) -> Result<()>) -> Result<()> {
		if self.peek_token()? == b'}' {
			self.iter.advance();
			return Ok(());
		}

		loop {
			if self.peek_token()? != b'"' {
				return Err(self.error("expected '\"' at the start of a member name"));
			}
			let name = parse_quoted_json_string(&mut self.iter)?;
			if let Some(last) = self.path.last_mut() {
				*last = PathSegment::Member(Some(name.clone()));
			}

			self.expect_token(b':', "an object")?;
			self.iter.skip_whitespace();
			read_member(&name, self)?;

			match self.peek_token()? {
				b',' => self.iter.advance(),
				b'}' => {
					self.iter.advance();
					return Ok(());
				}
				_ => return Err(self.error("expected ',' or '}'")),
			}
		}
	}

	/// Reads an array and collects what `read_item` returns for every element.
	pub fn read_array<R>(&mut self, mut read_item: impl FnMut(&mut Self) -> Result<R>) -> Result<Vec<R>> {
		self.expect_token(b'[', "an array")?;
		self.enter(PathSegment::Index(0))?;
		let result = self.read_items(&mut read_item);
		self.path.pop();
		result
	}

	fn read_items<R>(&mut self, read_item: &mut impl FnMut(&mut Self) -> Result<R>) -> Result<Vec<R>> {
		let mut items = Vec::new();
		if self.peek_token()? == b']' {
			self.iter.advance();
			return Ok(items);
		}

		loop {
			if let Some(last) = self.path.last_mut() {
				*last = PathSegment::Index(items.len());
			}
			self.iter.skip_whitespace();
			items.push(read_item(self)?);

			match self.peek_token()? {
				b',' => self.iter.advance(),
				b']' => {
					self.iter.advance();
					return Ok(items);
				}
				_ => return Err(self.error("expected ',' or ']'")),
			}
		}
	}

	/// `true` if the next value is an array, without consuming anything.
	pub fn peek_array(&mut self) -> Result<bool> {
		Ok(self.peek_token()? == b'[')
	}

	/// `true` if the next value is `null`, without consuming anything.
	pub fn peek_null(&mut self) -> Result<bool> {
		Ok(self.peek_token()? == b'n')
	}

	pub fn read_null(&mut self) -> Result<()> {
		self.iter.skip_whitespace();
		parse_tag(&mut self.iter, "null")
	}

	pub fn read_number(&mut self) -> Result<f64> {
		match self.peek_token()? {
			b'-' | b'0'..=b'9' => parse_finite_number(&mut self.iter),
			c => Err(self.error(&format!("expected a number but found '{}'", c as char))),
		}
	}

	pub fn read_string(&mut self) -> Result<String> {
		match self.peek_token()? {
			b'"' => parse_quoted_json_string(&mut self.iter),
			c => Err(self.error(&format!("expected a string but found '{}'", c as char))),
		}
	}

	/// Reads any JSON value into a [`JsonValue`].
	pub fn read_value(&mut self) -> Result<JsonValue> {
		parse_json_iter(&mut self.iter)
	}

	/// Reads and discards the next value.
	pub fn skip_value(&mut self) -> Result<()> {
		self.read_value().map(|_| ())
	}

	/// Fails unless only whitespace is left.
	pub fn expect_end(&mut self) -> Result<()> {
		self.iter.skip_whitespace();
		match self.iter.peek() {
			None => Ok(()),
			Some(_) => Err(self.error("unexpected trailing characters")),
		}
	}
}
