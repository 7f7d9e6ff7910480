//! The validation engine: a closed error taxonomy and the structural rules of every geometry kind.

mod result;
mod rules;

pub use result::{ValidationError, ValidationResult};
pub use rules::*;
