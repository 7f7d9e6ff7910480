//! A buffered byte iterator over any [`Read`] source.
//!
//! `ByteIterator` always holds one peeked byte, so parsers can look ahead by exactly one byte
//! without consuming it. In debug mode a small ring buffer remembers the most recent bytes and
//! every formatted error carries a snapshot of them, which makes decode errors in large
//! documents much easier to locate.

use crate::UnexpectedEnd;
use anyhow::{Error, Result, anyhow};
use std::io::Read;

const DEBUG_RING_BUFFER_SIZE: usize = 16;
const BUFFER_SIZE: usize = 4096;

pub struct ByteIterator<'a> {
	buffer: [u8; BUFFER_SIZE],
	buffer_len: usize,
	buffer_pos: usize,
	source: Box<dyn Read + 'a>,
	peeked_byte: Option<u8>,
	position: usize,
	is_debug_enabled: bool,
	debug_buffer: [u8; DEBUG_RING_BUFFER_SIZE],
}

impl<'a> ByteIterator<'a> {
	/// Creates a new iterator and peeks the first byte.
	///
	/// With `debug` enabled, error messages include the last bytes read before the error.
	pub fn from_reader(reader: impl Read + 'a, debug: bool) -> Self {
		let mut instance = ByteIterator {
			buffer: [0; BUFFER_SIZE],
			buffer_len: 0,
			buffer_pos: 0,
			source: Box::new(reader),
			peeked_byte: None,
			position: 0,
			is_debug_enabled: debug,
			debug_buffer: [0; DEBUG_RING_BUFFER_SIZE],
		};
		instance.fill_buffer();
		instance.advance();
		instance
	}

	#[inline]
	fn fill_buffer(&mut self) {
		self.buffer_len = match self.source.read(&mut self.buffer) {
			Ok(len) => len,
			Err(e) => {
				log::warn!("read error after {} bytes, treating it as end of input: {e}", self.position);
				0
			}
		};
		self.buffer_pos = 0;
	}

	#[inline]
	fn next_byte(&mut self) -> Option<u8> {
		if self.buffer_pos >= self.buffer_len {
			self.fill_buffer();
			if self.buffer_len == 0 {
				return None;
			}
		}
		let byte = self.buffer[self.buffer_pos];
		self.buffer_pos += 1;
		Some(byte)
	}

	/// Index of the peeked byte in the stream.
	#[inline]
	fn index(&self) -> usize {
		self.position.saturating_sub(1)
	}

	/// Formats an error message with the current position and, in debug mode, a snapshot of the
	/// bytes read just before it.
	#[must_use]
	pub fn format_error(&self, msg: &str) -> Error {
		if !self.is_debug_enabled {
			return anyhow!("{msg} at position {}", self.index());
		}

		let (start_index, length) = if self.position < DEBUG_RING_BUFFER_SIZE {
			(0, self.index())
		} else {
			(self.position % DEBUG_RING_BUFFER_SIZE, DEBUG_RING_BUFFER_SIZE - 1)
		};

		let snapshot: Vec<u8> = self
			.debug_buffer
			.iter()
			.cycle()
			.skip(start_index)
			.take(length)
			.copied()
			.collect();

		let mut snapshot = String::from_utf8_lossy(&snapshot).into_owned();
		if self.peeked_byte.is_none() {
			snapshot.push_str("<EOF>");
		}
		anyhow!("{msg} at position {}: {snapshot}", self.index())
	}

	/// The error raised when the input ends too early.
	#[must_use]
	pub fn unexpected_end(&self) -> Error {
		Error::new(UnexpectedEnd {
			position: self.index(),
		})
	}

	#[inline]
	#[must_use]
	pub fn is_debug_enabled(&self) -> bool {
		self.is_debug_enabled
	}

	/// Returns the absolute position of the peeked byte plus one.
	#[inline]
	#[must_use]
	pub fn position(&self) -> usize {
		self.position
	}

	#[inline]
	#[must_use]
	pub fn peek(&self) -> Option<u8> {
		self.peeked_byte
	}

	/// Drops the peeked byte and peeks the next one.
	#[inline]
	pub fn advance(&mut self) {
		self.peeked_byte = self.next_byte();
		if self.is_debug_enabled
			&& let Some(byte) = self.peeked_byte
		{
			let index = self.position % DEBUG_RING_BUFFER_SIZE;
			self.debug_buffer[index] = byte;
		}
		self.position += 1;
	}

	#[inline]
	pub fn consume(&mut self) -> Option<u8> {
		let current_byte = self.peeked_byte;
		self.advance();
		current_byte
	}

	/// Consumes the peeked byte, failing with [`UnexpectedEnd`] at the end of input.
	#[inline]
	pub fn expect_next_byte(&mut self) -> Result<u8> {
		if let Some(current_byte) = self.peeked_byte {
			self.advance();
			Ok(current_byte)
		} else {
			Err(self.unexpected_end())
		}
	}

	/// Returns the peeked byte without consuming it, failing with [`UnexpectedEnd`] at the end of input.
	#[inline]
	pub fn expect_peeked_byte(&self) -> Result<u8> {
		self.peeked_byte.ok_or_else(|| self.unexpected_end())
	}

	pub fn skip_whitespace(&mut self) {
		while let Some(byte) = self.peek() {
			if !byte.is_ascii_whitespace() {
				break;
			}
			self.advance();
		}
	}

	/// Consumes the rest of the input as UTF-8 text.
	pub fn into_string(mut self) -> Result<String> {
		let mut result = Vec::new();
		while let Some(byte) = self.consume() {
			result.push(byte);
		}
		String::from_utf8(result).map_err(Error::from)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Cursor;

	fn iter(data: &[u8], debug: bool) -> ByteIterator<'_> {
		ByteIterator::from_reader(Cursor::new(data), debug)
	}

	#[test]
	fn peek_and_consume() {
		let mut b = iter(b"123", false);

		assert_eq!(b.peek(), Some(b'1'));
		assert_eq!(b.consume(), Some(b'1'));
		assert_eq!(b.peek(), Some(b'2'));
		assert_eq!(b.consume(), Some(b'2'));
		assert_eq!(b.consume(), Some(b'3'));
		assert_eq!(b.peek(), None);
		assert_eq!(b.consume(), None);
	}

	#[test]
	fn expect_next_byte_reports_unexpected_end() {
		let mut b = iter(b"AB", false);

		assert_eq!(b.expect_next_byte().unwrap(), b'A');
		assert_eq!(b.expect_next_byte().unwrap(), b'B');
		let err = b.expect_next_byte().unwrap_err();
		assert_eq!(err.downcast_ref::<UnexpectedEnd>(), Some(&UnexpectedEnd { position: 2 }));
	}

	#[test]
	fn expect_peeked_byte_does_not_consume() {
		let mut b = iter(b"XY", false);

		assert_eq!(b.expect_peeked_byte().unwrap(), b'X');
		assert_eq!(b.expect_peeked_byte().unwrap(), b'X');
		b.advance();
		assert_eq!(b.expect_peeked_byte().unwrap(), b'Y');
		b.advance();
		assert!(b.expect_peeked_byte().is_err());
	}

	#[test]
	fn skip_whitespace() {
		let mut b = iter(b" \t\r\nAB", false);

		b.skip_whitespace();
		assert_eq!(b.consume(), Some(b'A'));
		b.skip_whitespace();
		assert_eq!(b.consume(), Some(b'B'));
	}

	#[test]
	fn reads_across_buffer_boundaries() {
		let data = vec![b'x'; BUFFER_SIZE * 2 + 3];
		let b = iter(&data, false);
		assert_eq!(b.into_string().unwrap().len(), BUFFER_SIZE * 2 + 3);
	}

	#[test]
	fn into_string() {
		assert_eq!(iter(b"Hello", false).into_string().unwrap(), "Hello");
	}

	#[test]
	fn error_without_debug() {
		let mut b = iter(b"Rust", false);
		b.consume();
		b.consume();
		assert_eq!(b.format_error("oops").to_string(), "oops at position 2");
	}

	#[test]
	fn error_with_debug_snapshot() {
		let mut b = iter(b"Rust", true);
		b.consume();
		b.consume();
		b.consume();
		assert_eq!(b.format_error("oops").to_string(), "oops at position 3: Rus");
	}

	#[test]
	fn error_with_debug_snapshot_at_end() {
		let mut b = iter(b"ab", true);
		b.consume();
		b.consume();
		assert_eq!(b.format_error("oops").to_string(), "oops at position 2: ab<EOF>");
	}

	#[test]
	fn debug_snapshot_is_bounded() {
		let data = b"0123456789abcdefghijklmnopqrstuvwxyz";
		let mut b = iter(data, true);
		for _ in 0..30 {
			b.consume();
		}
		// the snapshot covers the 15 bytes before the peeked byte
		assert_eq!(b.format_error("oops").to_string(), "oops at position 30: fghijklmnopqrst");
	}
}
