//! Lenient JSON parsing and formatting
//!
//! Decodes "JSON with comments" by stripping `/* */` and `//` comments
//! (see [`comments`] for the heuristic and its known limitation) and then
//! handing the remainder to serde_json. Key insertion order is preserved
//! (`preserve_order` feature). Decode failures always surface as
//! [`JsonError::Parse`] with the decoder's message, a machine-readable
//! category and the error location.

pub mod comments;

use crate::error::{JsonError, JsonResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

pub use comments::strip_comments;

/// Parse lenient JSON text into a dynamic value.
///
/// Surrounding whitespace is trimmed first; all-whitespace input yields an
/// empty object, not an error.
pub fn parse_str(text: &str) -> JsonResult<Value> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Value::Object(Map::new()));
    }

    let cleaned = comments::strip_comments(trimmed);
    serde_json::from_str(&cleaned).map_err(JsonError::from)
}

/// Parse lenient JSON text into a typed value.
///
/// Same pipeline as [`parse_str`]; all-whitespace input deserializes the
/// empty object `{}` into `T`.
pub fn parse_str_as<T: DeserializeOwned>(text: &str) -> JsonResult<T> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return serde_json::from_str("{}").map_err(JsonError::from);
    }

    let cleaned = comments::strip_comments(trimmed);
    serde_json::from_str(&cleaned).map_err(JsonError::from)
}

/// Parse lenient JSON from a file path or, failing that, from the text
/// itself.
///
/// If `input` names an existing regular file its contents are parsed;
/// otherwise `input` is treated as the JSON text.
pub fn parse(input: &str) -> JsonResult<Value> {
    let path = Path::new(input);
    if path.is_file() {
        parse_file(path)
    } else {
        parse_str(input)
    }
}

/// Parse lenient JSON from a file.
///
/// Unlike [`parse`], a missing or non-regular path is
/// [`JsonError::FileNotFound`] — the path is never reinterpreted as JSON
/// text.
pub fn parse_file(path: impl AsRef<Path>) -> JsonResult<Value> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(JsonError::file_not_found(path));
    }

    let text = fs::read_to_string(path).map_err(|e| JsonError::io(e, Some(path)))?;
    parse_str(&text)
}

/// Typed variant of [`parse_file`].
pub fn parse_file_as<T: DeserializeOwned>(path: impl AsRef<Path>) -> JsonResult<T> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(JsonError::file_not_found(path));
    }

    let text = fs::read_to_string(path).map_err(|e| JsonError::io(e, Some(path)))?;
    parse_str_as(&text)
}

/// Clean up a JSON-with-comments document without re-encoding it.
///
/// `input` may be a file path or the document text. Comments are stripped
/// and blank lines collapsed; the cleaned text is returned verbatim
/// otherwise. Empty input is an error here, unlike [`parse_str`].
pub fn format(input: &str) -> JsonResult<String> {
    let path = Path::new(input);
    let data = if path.is_file() {
        fs::read_to_string(path).map_err(|e| JsonError::io(e, Some(path)))?
    } else {
        input.to_string()
    };

    if data.trim().is_empty() {
        return Err(JsonError::EmptyInput);
    }

    Ok(comments::strip_comments_and_blank_lines(data.trim()))
}

/// Output flavor for [`save_as`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// Compact re-encoding through the codec
    Min,
    /// Cleaned text written as-is
    Raw,
}

impl OutputKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputKind::Min => "min",
            OutputKind::Raw => "raw",
        }
    }
}

/// Persist cleaned JSON next to `output` as `<stem>.<kind>.json`.
///
/// `Min` decodes and compactly re-encodes the data, so it must be valid
/// JSON after stripping; `Raw` writes the text untouched. The parent
/// directory of `output` must already exist. Returns the path written.
pub fn save_as(data: &str, output: impl AsRef<Path>, kind: OutputKind) -> JsonResult<PathBuf> {
    let output = output.as_ref();

    let dir = match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if !dir.is_dir() {
        return Err(JsonError::Io {
            message: format!("output directory does not exist: {}", dir.display()),
            path: Some(dir),
        });
    }

    let stem = output
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let file = dir.join(format!("{stem}.{}.json", kind.as_str()));

    let contents = match kind {
        OutputKind::Min => encode(&parse_str(data)?)?,
        OutputKind::Raw => data.to_string(),
    };

    fs::write(&file, contents).map_err(|e| JsonError::io(e, Some(&file)))?;
    Ok(file)
}

/// Encode a value as compact JSON.
pub fn encode<T: Serialize>(value: &T) -> JsonResult<String> {
    serde_json::to_string(value).map_err(JsonError::from)
}

/// Encode a value as pretty-printed JSON, key order preserved.
pub fn pretty<T: Serialize>(value: &T) -> JsonResult<String> {
    serde_json::to_string_pretty(value).map_err(JsonError::from)
}

/// Decode strict JSON (no comment stripping) into a typed value.
pub fn decode<T: DeserializeOwned>(json: &str) -> JsonResult<T> {
    serde_json::from_str(json).map_err(JsonError::from)
}
