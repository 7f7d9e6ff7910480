//! The JSON engine underneath geoform: a buffered byte iterator, JSON token helpers,
//! a dynamic [`json::JsonValue`], a path-tracking streaming [`json::JsonReader`] and a
//! compact [`json::JsonWriter`].

pub mod byte_iterator;
pub mod error;
pub mod json;

pub use error::UnexpectedEnd;
