//! stdkit
//!
//! A general-purpose helper library with two core facilities and a few
//! thin-wrapper companions:
//!
//! - [`case`]: string case conversion (camelCase, snake_case, title case,
//!   and friends), full-Unicode case folding, total over any input.
//! - [`json`]: lenient "JSON with comments" parsing and formatting with
//!   insertion-ordered maps. Comment stripping is a documented heuristic;
//!   see [`json::comments`].
//! - [`util`], [`math`], [`types`]: runtime measurement, debug dumping,
//!   rounding helpers and the primitive type-name vocabulary.
//!
//! All core operations are synchronous, stateless and safe to call from
//! multiple threads.

pub mod case;
pub mod cli;
pub mod error;
pub mod json;
pub mod math;
pub mod types;
pub mod util;

// Re-export commonly used types
pub use error::{ErrorCategory, JsonError, JsonResult};
pub use json::{parse, parse_file, parse_str, strip_comments, OutputKind};
pub use types::TypeName;
