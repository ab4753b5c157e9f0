// Allow dead code for library items not exercised by the CLI
#![allow(dead_code)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;

mod case;
mod cli;
mod error;
mod json;
mod math;
mod types;
mod util;

use crate::cli::{Args, Commands};
use crate::json::OutputKind;

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Commands::Fmt {
            input,
            output,
            min,
            stdin,
        } => handle_fmt(input, output, min, stdin),
        Commands::Check { input, stdin } => handle_check(input, stdin),
        Commands::Case { style, text } => {
            println!("{}", style.apply(&text));
            Ok(())
        }
    }
}

fn handle_fmt(
    input: Option<String>,
    output: Option<PathBuf>,
    min: bool,
    stdin: bool,
) -> Result<()> {
    let value = resolve_input(input, stdin)?;

    let rendered = if min {
        json::encode(&value)?
    } else {
        json::pretty(&value)?
    };

    match output {
        Some(path) => {
            let kind = if min { OutputKind::Min } else { OutputKind::Raw };
            let written = json::save_as(&rendered, &path, kind)?;
            eprintln!("wrote {}", written.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn handle_check(input: Option<String>, stdin: bool) -> Result<()> {
    match resolve_input(input, stdin) {
        Ok(_) => {
            eprintln!("OK");
            Ok(())
        }
        Err(err) => {
            if let Some(json_err) = err.downcast_ref::<crate::error::JsonError>() {
                eprintln!("{}", json_err.user_message());
            } else {
                eprintln!("{err}");
            }
            std::process::exit(1);
        }
    }
}

/// Parse the requested source: stdin, a file path, or the argument text.
fn resolve_input(input: Option<String>, stdin: bool) -> Result<serde_json::Value> {
    if stdin {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        return Ok(json::parse_str(&buffer)?);
    }

    let input = input.context("no input given; pass a file, text, or --stdin")?;
    Ok(json::parse(&input)?)
}
