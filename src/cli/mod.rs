//! Command-line interface module

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::case;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "stdkit")]
#[command(about = "String case conversion and lenient JSON-with-comments tooling")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Clean up and re-print a JSON-with-comments document
    Fmt {
        /// Input JSON source (file path or raw text)
        input: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        min: bool,

        /// Read JSON from standard input
        #[arg(long)]
        stdin: bool,
    },
    /// Validate a JSON-with-comments document without printing it
    Check {
        /// Input JSON source (file path or raw text)
        input: Option<String>,

        /// Read JSON from standard input
        #[arg(long)]
        stdin: bool,
    },
    /// Convert a string between case styles
    Case {
        /// Target case style
        #[arg(value_enum)]
        style: CaseStyle,

        /// Text to convert
        text: String,
    },
}

/// Case styles selectable from the CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStyle {
    Camel,
    Pascal,
    Snake,
    Title,
    Upper,
    Lower,
}

impl CaseStyle {
    /// Apply this style to `text`.
    pub fn apply(self, text: &str) -> String {
        match self {
            CaseStyle::Camel => case::to_camel_case(text, false),
            CaseStyle::Pascal => case::to_camel_case(text, true),
            CaseStyle::Snake => case::to_snake_case(text),
            CaseStyle::Title => case::title_case(text),
            CaseStyle::Upper => case::to_upper(text),
            CaseStyle::Lower => case::to_lower(text),
        }
    }
}
