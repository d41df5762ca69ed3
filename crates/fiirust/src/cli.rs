//! `fiirust` — encode or decode a file, a piece of text, or stdin.
//!
//! Usage:
//!   fiirust encode --file photo.png          # writes result.txt
//!   fiirust encode --text 'hello'            # prints aGVsbG8=
//!   fiirust decode --file result.txt -o photo.png
//!
//! Provides the argument types and the core logic used by the binary entry
//! point, so everything except process setup is testable in-process.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fiirust_base64::{Codec, InvalidEncoding, STANDARD, URL_SAFE};
use thiserror::Error;

/// Where encoded file input goes when no `--output` is given.
pub const DEFAULT_OUTPUT: &str = "result.txt";

// ── Arguments ─────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "fiirust", version, about = "Base64 encode or decode files and text")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Encode bytes as base64.
    Encode(IoArgs),
    /// Decode base64 back to bytes.
    Decode(IoArgs),
}

#[derive(Debug, Clone, Default, clap::Args)]
pub struct IoArgs {
    /// Read input from this file.
    #[arg(long, short, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Use the UTF-8 bytes of this text as input.
    #[arg(long, short)]
    pub text: Option<String>,

    /// Write the result here. File input defaults to `result.txt`,
    /// everything else to stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Use the URL-safe alphabet without padding.
    #[arg(long)]
    pub url_safe: bool,
}

impl IoArgs {
    fn codec(&self) -> &'static Codec {
        if self.url_safe {
            &URL_SAFE
        } else {
            &STANDARD
        }
    }

    fn output_path(&self, direction: Direction) -> Option<PathBuf> {
        match (&self.output, &self.file, direction) {
            (Some(path), _, _) => Some(path.clone()),
            (None, Some(_), Direction::Encode) => Some(PathBuf::from(DEFAULT_OUTPUT)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encode,
    Decode,
}

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("failed to write {path}: {source}")]
    Write { path: String, source: io::Error },
    #[error("input is not valid UTF-8 text")]
    NotText(#[from] std::str::Utf8Error),
    #[error(transparent)]
    Decode(#[from] InvalidEncoding),
}

// ── Core ──────────────────────────────────────────────────────────────────

/// Encode or decode `input` with `codec`.
///
/// Decoding ignores leading and trailing whitespace, so files ending in a
/// newline decode cleanly. Error positions are offsets into `input`.
pub fn transform(direction: Direction, codec: &Codec, input: &[u8]) -> Result<Vec<u8>, CliError> {
    match direction {
        Direction::Encode => Ok(codec.encode(input).into_bytes()),
        Direction::Decode => {
            let text = std::str::from_utf8(input)?;
            let trimmed = text.trim_start();
            let lead = text.len() - trimmed.len();
            Ok(codec.decode(trimmed.trim_end()).map_err(|e| e.offset_by(lead))?)
        }
    }
}

/// Run one command, reading stdin and writing stdout only when no file or
/// text argument redirects them.
pub fn run(args: &Args, stdin: &mut impl Read, stdout: &mut impl Write) -> Result<(), CliError> {
    let (direction, io_args) = match &args.command {
        Command::Encode(io_args) => (Direction::Encode, io_args),
        Command::Decode(io_args) => (Direction::Decode, io_args),
    };

    let input = read_input(io_args, stdin)?;
    tracing::debug!(?direction, input_len = input.len(), url_safe = io_args.url_safe, "read input");

    let output = transform(direction, io_args.codec(), &input).inspect_err(|e| {
        tracing::warn!("{e}");
    })?;

    match io_args.output_path(direction) {
        Some(path) => {
            fs::write(&path, &output).map_err(|source| CliError::Write {
                path: path.display().to_string(),
                source,
            })?;
            tracing::info!(path = %path.display(), bytes = output.len(), "wrote result");
        }
        None => {
            let stdout_err = |source: io::Error| CliError::Write {
                path: "<stdout>".to_string(),
                source,
            };
            stdout.write_all(&output).map_err(stdout_err)?;
            if direction == Direction::Encode {
                stdout.write_all(b"\n").map_err(stdout_err)?;
            }
            stdout.flush().map_err(stdout_err)?;
        }
    }
    Ok(())
}

fn read_input(io_args: &IoArgs, stdin: &mut impl Read) -> Result<Vec<u8>, CliError> {
    if let Some(path) = &io_args.file {
        return fs::read(path).map_err(|source| CliError::Read {
            path: path.display().to_string(),
            source,
        });
    }
    if let Some(text) = &io_args.text {
        return Ok(text.as_bytes().to_vec());
    }
    let mut buf = Vec::new();
    stdin.read_to_end(&mut buf).map_err(|source| CliError::Read {
        path: "<stdin>".to_string(),
        source,
    })?;
    Ok(buf)
}
