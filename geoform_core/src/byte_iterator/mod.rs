//! Byte-level iteration over a reader plus the small JSON token parsers built on top of it.

mod basics;
mod iterator;

pub use basics::*;
pub use iterator::*;
