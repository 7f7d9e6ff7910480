//! A validating GeoJSON model with a streaming JSON codec.
//!
//! The crate is organised in four layers:
//!
//! - [`geometry`] and [`feature`]: the typed model, from [`Position`] up to [`FeatureCollection`].
//! - [`validation`]: the structural rules every geometry must satisfy, reported as a [`ValidationResult`].
//! - [`codec`]: reading and writing GeoJSON text. Decoding always validates, encoding never does.
//! - [`read`]: whole documents of unknown type and newline-delimited feature streams.
//!
//! ```
//! use geoform::{GeoJsonCodec, GeoJsonTrait, LineString, decode_str};
//!
//! let line = LineString::from(vec![[0.0, 0.0], [1.0, 1.0]]);
//! assert!(line.validate().is_ok());
//!
//! let json = line.to_json().unwrap();
//! assert_eq!(json, r#"{"coordinates":[[0.0,0.0],[1.0,1.0]],"type":"LineString"}"#);
//! assert_eq!(decode_str::<LineString>(&json).unwrap(), line);
//!
//! let error = decode_str::<LineString>(r#"{"type":"LineString","coordinates":[[0,0]]}"#).unwrap_err();
//! assert_eq!(error.to_string(), "A LineString consists of at least two coordinate pairs");
//! ```

pub mod codec;
pub mod feature;
pub mod geometry;
pub mod read;
pub mod validation;

pub use codec::{DecodeError, DecodeOptions, GeoJsonCodec, NullValueError, decode_reader, decode_str, encode_string};
pub use feature::*;
pub use geometry::*;
pub use read::*;
pub use validation::{ValidationError, ValidationResult};
