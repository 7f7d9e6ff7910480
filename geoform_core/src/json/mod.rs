//! Dynamic JSON values plus the streaming reader and writer used by the GeoJSON codecs.

mod parse;
mod reader;
mod stringify;
mod types;
mod writer;

pub use parse::{MAX_NESTING_DEPTH, parse_json_iter, parse_json_str};
pub use reader::JsonReader;
pub use stringify::{escape_json_string, stringify};
pub use types::{JsonArray, JsonObject, JsonValue};
pub use writer::JsonWriter;
