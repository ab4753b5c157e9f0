//! Error types and handling infrastructure for the JSON helpers

use std::fmt;
use std::path::{Path, PathBuf};

/// Machine-readable classification of a JSON decode failure.
///
/// Mirrors [`serde_json::error::Category`] so callers can branch on the
/// failure kind without string-matching the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Input is not syntactically valid JSON
    Syntax,
    /// Input ended unexpectedly
    Eof,
    /// Input is valid JSON but has the wrong shape for the target type
    Data,
    /// Failure to read or write bytes on the underlying stream
    Io,
}

impl ErrorCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCategory::Syntax => "syntax",
            ErrorCategory::Eof => "eof",
            ErrorCategory::Data => "data",
            ErrorCategory::Io => "io",
        }
    }
}

impl From<serde_json::error::Category> for ErrorCategory {
    fn from(category: serde_json::error::Category) -> Self {
        match category {
            serde_json::error::Category::Syntax => ErrorCategory::Syntax,
            serde_json::error::Category::Eof => ErrorCategory::Eof,
            serde_json::error::Category::Data => ErrorCategory::Data,
            serde_json::error::Category::Io => ErrorCategory::Io,
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type for JSON parsing and formatting operations
#[derive(Debug, thiserror::Error)]
pub enum JsonError {
    /// Malformed JSON after comment stripping. Always surfaced to the
    /// caller, never defaulted away.
    #[error("JSON parse error: {message}")]
    Parse {
        message: String,
        category: ErrorCategory,
        line: Option<usize>,
        column: Option<usize>,
    },

    /// Nothing to format: the input was empty or whitespace-only where a
    /// document was required.
    #[error("empty JSON input")]
    EmptyInput,

    /// An explicit file read was requested but the path does not name an
    /// existing regular file.
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },
}

impl JsonError {
    pub fn parse(message: impl Into<String>, category: ErrorCategory) -> Self {
        Self::Parse {
            message: message.into(),
            category,
            line: None,
            column: None,
        }
    }

    pub fn file_not_found(path: impl AsRef<Path>) -> Self {
        Self::FileNotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn io(error: std::io::Error, path: Option<&Path>) -> Self {
        Self::Io {
            message: error.to_string(),
            path: path.map(Path::to_path_buf),
        }
    }

    /// Create a user-friendly error message for CLI display
    pub fn user_message(&self) -> String {
        match self {
            Self::Parse {
                message,
                category,
                line: Some(line),
                column: Some(column),
                ..
            } => format!(
                "JSON parse error ({category}) at line {line}, column {column}: {message}"
            ),
            Self::Parse {
                message, category, ..
            } => format!("JSON parse error ({category}): {message}"),
            Self::EmptyInput => "empty JSON input".to_string(),
            Self::FileNotFound { path } => format!("file not found: {}", path.display()),
            Self::Io {
                message,
                path: Some(path),
            } => format!("IO error on {}: {}", path.display(), message),
            Self::Io { message, path: None } => format!("IO error: {}", message),
        }
    }
}

impl From<serde_json::Error> for JsonError {
    fn from(error: serde_json::Error) -> Self {
        // serde_json reports 0 for positions it does not know
        let line = (error.line() > 0).then(|| error.line());
        let column = (error.column() > 0).then(|| error.column());

        Self::Parse {
            message: error.to_string(),
            category: error.classify().into(),
            line,
            column,
        }
    }
}

/// Result type for JSON operations
pub type JsonResult<T> = Result<T, JsonError>;
